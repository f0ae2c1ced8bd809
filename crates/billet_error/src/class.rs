//! Failure taxonomy for provider errors.

/// The taxonomy bucket assigned to a provider failure.
///
/// Classification is what the retry policy branches on: it decides whether a
/// failed call is worth repeating and how long to wait before repeating it.
/// The mapping from concrete provider errors to classes lives on
/// [`ProviderErrorKind::classify`](crate::ProviderErrorKind::classify).
///
/// # Examples
///
/// ```
/// use billet_error::FailureClass;
///
/// assert!(FailureClass::RateLimited.is_retryable());
/// assert!(!FailureClass::Fatal.is_retryable());
/// assert_eq!(format!("{}", FailureClass::QuotaExhausted), "quota_exhausted");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::EnumIter,
    derive_more::Display,
)]
pub enum FailureClass {
    /// The provider rejected the call for exceeding a request-rate window.
    #[display("rate_limited")]
    RateLimited,
    /// A usage quota (daily budget, token allowance) is spent.
    #[display("quota_exhausted")]
    QuotaExhausted,
    /// The call succeeded at the transport level but carried no usable content.
    #[display("empty_response")]
    EmptyResponse,
    /// The call failed in transit or the provider was momentarily unavailable.
    #[display("transient_network")]
    TransientNetwork,
    /// Authentication, configuration, or malformed-request failures.
    /// Waiting cannot fix these; they are never retried.
    #[display("fatal")]
    Fatal,
}

impl FailureClass {
    /// Whether a failure of this class may succeed on a later attempt.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, FailureClass::Fatal)
    }

    /// Whether retries of this class wait before the next attempt.
    ///
    /// Empty responses are provider glitches; repeating immediately is fine.
    /// Rate, quota, and network failures back off first.
    pub fn backs_off(&self) -> bool {
        matches!(
            self,
            FailureClass::RateLimited
                | FailureClass::QuotaExhausted
                | FailureClass::TransientNetwork
        )
    }
}
