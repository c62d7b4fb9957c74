use thiserror::Error;

/// Errors that abort a sweep before any probe is sent.
///
/// Per-address failures never surface here; they are recorded as
/// [`ProbeOutcome::ProbeError`](crate::probe::ProbeOutcome::ProbeError).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SweepError {
    /// The range specification was not a string.
    #[error("range specification must be a string, found {found}")]
    InvalidInputType { found: &'static str },

    /// The range specification was a string but not an IPv4 network in CIDR form.
    #[error("invalid IPv4 network '{input}': {reason}")]
    InvalidRange { input: String, reason: String },
}

impl SweepError {
    pub(crate) fn invalid_range(input: &str, reason: impl ToString) -> Self {
        Self::InvalidRange {
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }
}
