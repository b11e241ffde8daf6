//! Client for communicating with the extraction service

mod client;

pub use client::*;
