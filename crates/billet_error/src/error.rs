//! Top-level error wrapper types.

use crate::{BuilderError, ConfigError, ProviderError, StorageError};

/// The foundation error enum for the billet workspace.
///
/// # Examples
///
/// ```
/// use billet_error::{BilletError, StorageError, StorageErrorKind};
///
/// let storage_err = StorageError::new(StorageErrorKind::InvalidPath("..".to_string()));
/// let err: BilletError = storage_err.into();
/// assert!(format!("{}", err).contains("Storage Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum BilletErrorKind {
    /// Provider adapter error
    #[from(ProviderError)]
    Provider(ProviderError),
    /// Artifact storage error
    #[from(StorageError)]
    Storage(StorageError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Builder error
    #[from(BuilderError)]
    Builder(BuilderError),
}

/// Billet error with kind discrimination.
///
/// # Examples
///
/// ```
/// use billet_error::{BilletResult, ConfigError};
///
/// fn might_fail() -> BilletResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Billet Error: {}", _0)]
pub struct BilletError(Box<BilletErrorKind>);

impl BilletError {
    /// Create a new error from a kind.
    pub fn new(kind: BilletErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &BilletErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to BilletErrorKind
impl<T> From<T> for BilletError
where
    T: Into<BilletErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for billet operations.
///
/// # Examples
///
/// ```
/// use billet_error::{BilletResult, ProviderError, ProviderErrorKind};
///
/// fn fetch() -> BilletResult<String> {
///     Err(ProviderError::new(ProviderErrorKind::ApiRequest("404".to_string())))?
/// }
/// ```
pub type BilletResult<T> = std::result::Result<T, BilletError>;
