//! Reusable UI components

mod result_list;

pub use result_list::*;
