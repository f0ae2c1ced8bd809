//! Provider error types and failure classification.

use crate::FailureClass;

/// Specific provider error conditions.
///
/// Both text and image backends report failures through this one kind enum;
/// the adapters construct the variant, [`classify`](Self::classify) maps it
/// into the taxonomy the retry policy consumes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ProviderErrorKind {
    /// API key not found in the environment
    #[display("{} environment variable not set", _0)]
    MissingApiKey(String),
    /// Failed to create the provider client
    #[display("Failed to create provider client: {}", _0)]
    ClientCreation(String),
    /// HTTP error with status code and message
    #[display("HTTP {} error: {}", status_code, message)]
    HttpError {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// Request failed before an HTTP status was available
    #[display("Transport error: {}", _0)]
    Transport(String),
    /// The provider answered but returned no usable content
    #[display("Provider returned an empty response")]
    EmptyResponse,
    /// A usage quota is exhausted (reported in the response body)
    #[display("Provider quota exhausted: {}", _0)]
    QuotaExhausted(String),
    /// The response arrived but could not be decoded
    #[display("Failed to parse provider response: {}", _0)]
    ResponseParsing(String),
    /// Base64 decoding of inline media failed
    #[display("Base64 decode error: {}", _0)]
    Base64Decode(String),
    /// API request failed with no recognizable structure
    #[display("Provider API request failed: {}", _0)]
    ApiRequest(String),
}

impl ProviderErrorKind {
    /// Assign this error to its taxonomy bucket.
    ///
    /// Rate windows (429) and quota signals retry with backoff; server-side
    /// and transport hiccups retry the same way; empty responses retry
    /// without delay. Everything else, including anything unrecognized, is
    /// `Fatal` so unknown failure modes are never masked by a retry loop.
    pub fn classify(&self) -> FailureClass {
        match self {
            ProviderErrorKind::HttpError { status_code, .. } => match *status_code {
                429 => FailureClass::RateLimited,
                // 402 is DeepSeek's "insufficient balance"; 403 is how Google
                // surfaces a spent quota.
                402 | 403 => FailureClass::QuotaExhausted,
                408 | 500 | 502 | 503 | 504 => FailureClass::TransientNetwork,
                _ => FailureClass::Fatal,
            },
            ProviderErrorKind::QuotaExhausted(_) => FailureClass::QuotaExhausted,
            ProviderErrorKind::Transport(_) => FailureClass::TransientNetwork,
            ProviderErrorKind::EmptyResponse => FailureClass::EmptyResponse,
            _ => FailureClass::Fatal,
        }
    }
}

/// Provider error with source location tracking.
///
/// # Examples
///
/// ```
/// use billet_error::{FailureClass, ProviderError, ProviderErrorKind};
///
/// let err = ProviderError::new(ProviderErrorKind::HttpError {
///     status_code: 429,
///     message: "Resource exhausted".to_string(),
/// });
///
/// assert_eq!(err.classify(), FailureClass::RateLimited);
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Provider Error: {} at line {} in {}", kind, line, file)]
pub struct ProviderError {
    /// The kind of error that occurred
    pub kind: ProviderErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ProviderError {
    /// Create a new ProviderError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ProviderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Assign this error to its taxonomy bucket.
    pub fn classify(&self) -> FailureClass {
        self.kind.classify()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(status_code: u16) -> ProviderErrorKind {
        ProviderErrorKind::HttpError {
            status_code,
            message: String::new(),
        }
    }

    #[test]
    fn rate_and_quota_statuses_classify_for_backoff() {
        assert_eq!(http(429).classify(), FailureClass::RateLimited);
        assert_eq!(http(402).classify(), FailureClass::QuotaExhausted);
        assert_eq!(http(403).classify(), FailureClass::QuotaExhausted);
        assert_eq!(
            ProviderErrorKind::QuotaExhausted("daily budget".into()).classify(),
            FailureClass::QuotaExhausted
        );
    }

    #[test]
    fn server_side_statuses_classify_as_transient() {
        for status in [408, 500, 502, 503, 504] {
            assert_eq!(http(status).classify(), FailureClass::TransientNetwork);
        }
        assert_eq!(
            ProviderErrorKind::Transport("connection reset".into()).classify(),
            FailureClass::TransientNetwork
        );
    }

    #[test]
    fn auth_and_unknown_errors_classify_as_fatal() {
        assert_eq!(http(401).classify(), FailureClass::Fatal);
        assert_eq!(http(400).classify(), FailureClass::Fatal);
        assert_eq!(http(404).classify(), FailureClass::Fatal);
        assert_eq!(
            ProviderErrorKind::ApiRequest("unexpected".into()).classify(),
            FailureClass::Fatal
        );
        assert_eq!(
            ProviderErrorKind::MissingApiKey("GEMINI_API_KEY".into()).classify(),
            FailureClass::Fatal
        );
    }

    #[test]
    fn empty_response_keeps_its_own_class() {
        assert_eq!(
            ProviderErrorKind::EmptyResponse.classify(),
            FailureClass::EmptyResponse
        );
    }
}
