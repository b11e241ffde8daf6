//! HTTP client for making requests to the extraction service

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

static API_URL: OnceLock<String> = OnceLock::new();

/// Default extraction service address when no override is configured.
const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Message shown for any failure that carries no `detail` from the service.
pub const GENERIC_ERROR: &str = "Error processing data";

/// Initialize the API base URL. Call this at startup.
pub fn init_api_url(url: String) {
    API_URL.set(url).ok();
}

/// Get the configured API base URL
pub fn api_url() -> &'static str {
    API_URL.get().map(|s| s.as_str()).unwrap_or(DEFAULT_API_URL)
}

/// Request body for the extract endpoint
#[derive(Debug, Serialize)]
pub struct ExtractRequest {
    pub text: String,
}

/// Successful extraction result: both lists, in the order the service
/// produced them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExtractResponse {
    pub emails: Vec<String>,
    pub phones: Vec<String>,
}

/// Error envelope the service attaches to failure responses.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub detail: Option<String>,
}

/// Error type for extraction requests
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("{0}")]
    Rejected(String),

    #[error("Request failed with status {0}")]
    Status(reqwest::StatusCode),
}

impl ClientError {
    /// Text shown to the user for this failure.
    ///
    /// Only a service-provided `detail` is surfaced verbatim; everything
    /// else collapses to [`GENERIC_ERROR`].
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Rejected(detail) => detail.clone(),
            _ => GENERIC_ERROR.to_string(),
        }
    }
}

/// Client for the extraction service
#[derive(Clone)]
pub struct ExtractClient {
    client: reqwest::Client,
    base_url: String,
}

impl ExtractClient {
    /// Create a new client against the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Submit text for extraction and await the parsed result.
    ///
    /// The success body is trusted as-is beyond its serde shape; on a
    /// failure status the body is probed for the service's `detail` field.
    pub async fn extract(&self, text: String) -> Result<ExtractResponse, ClientError> {
        let request = ExtractRequest { text };

        let response = self
            .client
            .post(format!("{}/extract", self.base_url))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<ApiErrorBody>()
                .await
                .ok()
                .and_then(|body| body.detail);
            return Err(match detail {
                Some(detail) => ClientError::Rejected(detail),
                None => ClientError::Status(status),
            });
        }

        Ok(response.json().await?)
    }
}

/// Create a client against the configured service address
pub fn default_client() -> ExtractClient {
    ExtractClient::new(api_url())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_serializes_single_text_field() {
        let request = ExtractRequest {
            text: "Contact: a@b.com".into(),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "text": "Contact: a@b.com" })
        );
    }

    #[test]
    fn response_preserves_list_order() {
        let body = json!({
            "emails": ["b@z.org", "a@b.com"],
            "phones": ["555-1234", "555-0000"]
        });
        let response: ExtractResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.emails, vec!["b@z.org", "a@b.com"]);
        assert_eq!(response.phones, vec!["555-1234", "555-0000"]);
    }

    #[test]
    fn response_accepts_empty_lists() {
        let response: ExtractResponse =
            serde_json::from_value(json!({ "emails": [], "phones": [] })).unwrap();
        assert!(response.emails.is_empty());
        assert!(response.phones.is_empty());
    }

    #[test]
    fn error_body_detail_is_optional() {
        let with: ApiErrorBody =
            serde_json::from_value(json!({ "detail": "No text provided" })).unwrap();
        assert_eq!(with.detail.as_deref(), Some("No text provided"));

        let without: ApiErrorBody = serde_json::from_value(json!({})).unwrap();
        assert!(without.detail.is_none());
    }

    #[test]
    fn rejected_message_is_detail_verbatim() {
        let err = ClientError::Rejected("text field required".into());
        assert_eq!(err.user_message(), "text field required");
    }

    #[test]
    fn status_message_is_generic() {
        let err = ClientError::Status(reqwest::StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.user_message(), GENERIC_ERROR);
    }
}
