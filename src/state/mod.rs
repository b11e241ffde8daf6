//! Per-form extraction state

use crate::api::{ClientError, ExtractResponse};

/// Result lists and error slot owned by one extractor form instance.
///
/// Kept as one value behind one signal so both lists and the error change
/// in a single state update; a render never sees one list replaced without
/// the other.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractionResults {
    pub emails: Vec<String>,
    pub phones: Vec<String>,
    pub error: Option<String>,
}

impl ExtractionResults {
    /// Fold the outcome of one extraction request into the state.
    ///
    /// Success replaces both lists wholesale and clears any prior error.
    /// Failure sets the error message and leaves the lists as they were.
    pub fn apply(&mut self, outcome: Result<ExtractResponse, ClientError>) {
        match outcome {
            Ok(response) => {
                self.emails = response.emails;
                self.phones = response.phones;
                self.error = None;
            }
            Err(err) => {
                self.error = Some(err.user_message());
            }
        }
    }
}
