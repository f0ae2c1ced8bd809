//! Scripted mock image provider and in-memory artifact store.

use async_trait::async_trait;
use billet_core::StoredImage;
use billet_error::{BilletResult, ProviderError, ProviderErrorKind, StorageError, StorageErrorKind};
use billet_interface::{ArtifactStore, ImageProvider};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// One scripted image reply.
#[derive(Debug, Clone)]
pub enum MockImageResponse {
    /// Return these bytes
    Success(Vec<u8>),
    /// Fail with this error kind
    Error(ProviderErrorKind),
}

/// Mock image provider with a scripted response sequence.
#[derive(Debug, Clone)]
pub struct MockImageProvider {
    script: Arc<Vec<MockImageResponse>>,
    calls: Arc<AtomicUsize>,
    last_prompt: Arc<Mutex<Option<String>>>,
}

impl MockImageProvider {
    /// Always answer with the given bytes.
    pub fn new_success(bytes: &[u8]) -> Self {
        Self::new_sequence(vec![MockImageResponse::Success(bytes.to_vec())])
    }

    /// Always fail with the given error kind.
    pub fn new_error(kind: ProviderErrorKind) -> Self {
        Self::new_sequence(vec![MockImageResponse::Error(kind)])
    }

    /// Fail `failures` times with the given kind, then succeed with `bytes`.
    pub fn new_fail_then_succeed(failures: usize, kind: ProviderErrorKind, bytes: &[u8]) -> Self {
        let mut script: Vec<MockImageResponse> =
            std::iter::repeat_n(MockImageResponse::Error(kind), failures).collect();
        script.push(MockImageResponse::Success(bytes.to_vec()));
        Self::new_sequence(script)
    }

    /// Play out an explicit response sequence.
    pub fn new_sequence(script: Vec<MockImageResponse>) -> Self {
        assert!(!script.is_empty(), "mock script must not be empty");
        Self {
            script: Arc::new(script),
            calls: Arc::new(AtomicUsize::new(0)),
            last_prompt: Arc::new(Mutex::new(None)),
        }
    }

    /// How many times `generate` was invoked.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The most recent prompt, for asserting pass-through.
    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageProvider for MockImageProvider {
    async fn generate(&self, prompt: &str) -> Result<Vec<u8>, ProviderError> {
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());

        let index = self.calls.fetch_add(1, Ordering::SeqCst);
        let response = self.script[index.min(self.script.len() - 1)].clone();

        match response {
            MockImageResponse::Success(bytes) => Ok(bytes),
            MockImageResponse::Error(kind) => Err(ProviderError::new(kind)),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock-image"
    }
}

/// In-memory artifact store.
///
/// Records every put; can be told to fail for the storage-failure path.
#[derive(Debug, Clone, Default)]
pub struct MemoryArtifactStore {
    puts: Arc<Mutex<Vec<(Vec<u8>, String)>>>,
    fail: bool,
}

impl MemoryArtifactStore {
    /// A store that accepts everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every put fails.
    pub fn failing() -> Self {
        Self {
            puts: Arc::new(Mutex::new(Vec::new())),
            fail: true,
        }
    }

    /// Everything stored so far.
    pub fn puts(&self) -> Vec<(Vec<u8>, String)> {
        self.puts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ArtifactStore for MemoryArtifactStore {
    async fn put(&self, bytes: &[u8], suggested_name: &str) -> BilletResult<StoredImage> {
        if self.fail {
            return Err(StorageError::new(StorageErrorKind::FileWrite(
                "mock store is configured to fail".to_string(),
            ))
            .into());
        }

        let mut puts = self.puts.lock().unwrap();
        puts.push((bytes.to_vec(), suggested_name.to_string()));

        Ok(StoredImage {
            url: format!("mem://artifact/{}", puts.len()),
            expires_at: chrono::Utc::now() + chrono::Duration::minutes(60),
        })
    }
}
