//! Scripted mock text provider.

use async_trait::async_trait;
use billet_core::CompletionRequest;
use billet_error::{ProviderError, ProviderErrorKind};
use billet_interface::TextProvider;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// One scripted reply.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return this text (empty text is reported as an empty response,
    /// mirroring the real adapter boundary)
    Success(String),
    /// Fail with this error kind
    Error(ProviderErrorKind),
}

/// Mock text provider with a scripted response sequence.
///
/// The script plays out one entry per call; the last entry repeats once the
/// script is exhausted. Clones share the same script and counters.
#[derive(Debug, Clone)]
pub struct MockTextProvider {
    script: Arc<Vec<MockResponse>>,
    calls: Arc<AtomicUsize>,
    last_request: Arc<Mutex<Option<CompletionRequest>>>,
}

impl MockTextProvider {
    /// Always answer with the given text.
    pub fn new_success(text: &str) -> Self {
        Self::new_sequence(vec![MockResponse::Success(text.to_string())])
    }

    /// Always fail with the given error kind.
    pub fn new_error(kind: ProviderErrorKind) -> Self {
        Self::new_sequence(vec![MockResponse::Error(kind)])
    }

    /// Fail `failures` times with the given kind, then succeed with `text`.
    pub fn new_fail_then_succeed(failures: usize, kind: ProviderErrorKind, text: &str) -> Self {
        let mut script: Vec<MockResponse> = std::iter::repeat_n(MockResponse::Error(kind), failures)
            .collect();
        script.push(MockResponse::Success(text.to_string()));
        Self::new_sequence(script)
    }

    /// Play out an explicit response sequence.
    pub fn new_sequence(script: Vec<MockResponse>) -> Self {
        assert!(!script.is_empty(), "mock script must not be empty");
        Self {
            script: Arc::new(script),
            calls: Arc::new(AtomicUsize::new(0)),
            last_request: Arc::new(Mutex::new(None)),
        }
    }

    /// How many times `complete` was invoked.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The most recent request, for asserting prompt construction.
    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn complete(&self, req: &CompletionRequest) -> Result<String, ProviderError> {
        *self.last_request.lock().unwrap() = Some(req.clone());

        let index = self.calls.fetch_add(1, Ordering::SeqCst);
        let response = self.script[index.min(self.script.len() - 1)].clone();

        match response {
            MockResponse::Success(text) if text.trim().is_empty() => {
                Err(ProviderError::new(ProviderErrorKind::EmptyResponse))
            }
            MockResponse::Success(text) => Ok(text),
            MockResponse::Error(kind) => Err(ProviderError::new(kind)),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock-text"
    }

    fn model_name(&self) -> &str {
        "mock-text"
    }
}
