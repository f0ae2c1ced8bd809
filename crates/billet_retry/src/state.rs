//! Per-call retry bookkeeping.

use billet_error::FailureClass;

/// Attempt counter for one generation call.
///
/// Created when a call starts, discarded once a terminal outcome is returned.
/// Never persisted and never shared between calls.
///
/// # Examples
///
/// ```
/// use billet_error::FailureClass;
/// use billet_retry::RetryState;
///
/// let mut state = RetryState::new(3);
/// assert_eq!(state.attempt(), 0);
///
/// state.record(FailureClass::RateLimited);
/// state.advance();
/// assert_eq!(state.attempt(), 1);
/// assert_eq!(state.attempts_made(), 2);
/// assert_eq!(state.last_class(), Some(FailureClass::RateLimited));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryState {
    attempt: u32,
    max_attempts: u32,
    last_class: Option<FailureClass>,
}

impl RetryState {
    /// Fresh state at attempt zero.
    pub fn new(max_attempts: u32) -> Self {
        Self {
            attempt: 0,
            max_attempts,
            last_class: None,
        }
    }

    /// Zero-based number of the current attempt.
    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    /// Provider invocations made so far, counting the current one.
    pub fn attempts_made(&self) -> u32 {
        self.attempt + 1
    }

    /// The ceiling this state was created with.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Classification of the most recent failure.
    pub fn last_class(&self) -> Option<FailureClass> {
        self.last_class
    }

    /// Note the classification of the failure that just happened.
    pub fn record(&mut self, class: FailureClass) {
        self.last_class = Some(class);
    }

    /// Move on to the next attempt.
    pub fn advance(&mut self) {
        self.attempt += 1;
    }
}
