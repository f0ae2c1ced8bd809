//! The retry decision function.

use billet_error::FailureClass;
use std::time::Duration;

/// What to do after a failed provider call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RetryDecision {
    /// Wait the given delay, then re-invoke with attempt + 1.
    Retry(Duration),
    /// Stop; the failure is terminal for this call.
    GiveUp,
}

/// Pure decision function mapping (classification, attempt) to a decision.
///
/// Attempts are zero-based: `attempt` is the number of the call that just
/// failed. With the default ceiling of 3, attempts 0 and 1 may retry and
/// attempt 2 always gives up.
///
/// # Examples
///
/// ```
/// use billet_error::FailureClass;
/// use billet_retry::{RetryDecision, RetryPolicy};
/// use std::time::Duration;
///
/// let policy = RetryPolicy::default();
///
/// // First rate-limited failure: wait 5s, try again.
/// assert_eq!(
///     policy.decide(FailureClass::RateLimited, 0),
///     RetryDecision::Retry(Duration::from_secs(5)),
/// );
///
/// // Bad credentials: give up at once.
/// assert_eq!(policy.decide(FailureClass::Fatal, 0), RetryDecision::GiveUp);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    backoff_step: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff_step: Duration::from_secs(5),
        }
    }
}

impl RetryPolicy {
    /// Create a policy with an explicit attempt ceiling and backoff step.
    pub fn new(max_attempts: u32, backoff_step: Duration) -> Self {
        Self {
            max_attempts,
            backoff_step,
        }
    }

    /// Same policy with a different attempt ceiling, for per-call overrides.
    pub fn with_max_attempts(self, max_attempts: u32) -> Self {
        Self {
            max_attempts,
            ..self
        }
    }

    /// Maximum provider invocations per generation call.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Decide what happens after `attempt` failed with `class`.
    ///
    /// - `Fatal` gives up immediately regardless of attempt count.
    /// - Rate, quota, and network failures retry with linear backoff:
    ///   `(attempt + 1) × backoff_step`.
    /// - Empty responses retry without delay.
    /// - Any class gives up once the attempt ceiling is reached.
    pub fn decide(&self, class: FailureClass, attempt: u32) -> RetryDecision {
        if !class.is_retryable() {
            return RetryDecision::GiveUp;
        }

        if attempt + 1 >= self.max_attempts {
            return RetryDecision::GiveUp;
        }

        if class.backs_off() {
            RetryDecision::Retry(self.backoff_step * (attempt + 1))
        } else {
            RetryDecision::Retry(Duration::ZERO)
        }
    }
}
