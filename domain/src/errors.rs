//! Error types for the workout tracker domain library

use thiserror::Error;

/// Failures the domain computations can report
///
/// These are the only two failure kinds: both are parse failures at the
/// string boundary, carrying the rejected input so callers can surface it.
/// Plan recommendation never fails; it substitutes
/// [`crate::plans::NO_PLAN_AVAILABLE`] instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid gender: {0}")]
    InvalidGender(String),

    #[error("Unknown activity: {0}")]
    UnknownActivity(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_input() {
        let err = DomainError::InvalidGender("other".to_string());
        assert_eq!(err.to_string(), "Invalid gender: other");

        let err = DomainError::UnknownActivity("rowing".to_string());
        assert_eq!(err.to_string(), "Unknown activity: rowing");
    }
}
