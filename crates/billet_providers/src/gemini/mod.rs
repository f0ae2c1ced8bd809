//! Google Gemini adapters.
//!
//! Two adapters live here: a text adapter over the `gemini-rust` SDK and an
//! image adapter over the REST `generateContent` endpoint (the SDK does not
//! expose image response modalities). Both classify failures through the
//! shared status-code mapping.

mod image;
mod text;

pub use image::GeminiImageProvider;
pub use text::GeminiTextProvider;

use billet_error::{ProviderError, ProviderErrorKind};

/// Environment variable holding the Gemini API key.
pub(crate) const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Parse an SDK error into a structured provider error.
///
/// The SDK reports failures as strings; when an HTTP status code is
/// recoverable from the message it drives classification, otherwise quota
/// wording is checked, and anything else stays an opaque API failure
/// (classified fatal).
pub(crate) fn parse_sdk_error(err: impl std::fmt::Display) -> ProviderError {
    let err_msg = err.to_string();

    if let Some(status_code) = extract_status_code(&err_msg) {
        return ProviderError::new(ProviderErrorKind::HttpError {
            status_code,
            message: err_msg,
        });
    }

    if err_msg.to_lowercase().contains("quota")
        || err_msg.contains("RESOURCE_EXHAUSTED")
    {
        return ProviderError::new(ProviderErrorKind::QuotaExhausted(err_msg));
    }

    ProviderError::new(ProviderErrorKind::ApiRequest(err_msg))
}

/// Extract an HTTP status code from an error message string.
///
/// Parses strings like "bad response from server; code 503; description: ..."
/// and extracts the numeric status code.
pub(crate) fn extract_status_code(error_msg: &str) -> Option<u16> {
    let code_start = error_msg.find("code ")?;
    let code_str = &error_msg[code_start + 5..];
    let end = code_str
        .find(|c: char| !c.is_numeric())
        .unwrap_or(code_str.len());
    code_str[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use billet_error::FailureClass;

    #[test]
    fn status_code_is_extracted_from_sdk_messages() {
        assert_eq!(
            extract_status_code("bad response from server; code 503; description: overloaded"),
            Some(503)
        );
        assert_eq!(extract_status_code("code 429"), Some(429));
        assert_eq!(extract_status_code("connection refused"), None);
    }

    #[test]
    fn parsed_errors_classify_by_status() {
        let err = parse_sdk_error("bad response from server; code 429; description: slow down");
        assert_eq!(err.classify(), FailureClass::RateLimited);

        let err = parse_sdk_error("bad response from server; code 500; description: oops");
        assert_eq!(err.classify(), FailureClass::TransientNetwork);
    }

    #[test]
    fn quota_wording_without_status_still_classifies() {
        let err = parse_sdk_error("generateContent: RESOURCE_EXHAUSTED for model");
        assert_eq!(err.classify(), FailureClass::QuotaExhausted);
    }

    #[test]
    fn unrecognized_messages_classify_fatal() {
        let err = parse_sdk_error("something entirely unexpected");
        assert_eq!(err.classify(), FailureClass::Fatal);
    }
}
