//! Per-finding proof evaluation errors.

/// Errors raised while evaluating a rule-mode profile for one finding.
///
/// Caught per finding by the policy enforcer: the finding degrades to
/// partial proof and the run continues.
#[derive(Debug, thiserror::Error)]
pub enum EvaluationError {
    #[error("Profile for '{code}' declares a rule with no predicates")]
    EmptyRule { code: String },

    #[error("Signal '{signal}' required by profile '{code}' is missing")]
    SignalMissing { code: String, signal: String },

    #[error("Signal '{signal}' required by profile '{code}' is not a boolean")]
    SignalTypeMismatch { code: String, signal: String },

    #[error("Profile '{code}' threshold {threshold} exceeds predicate count {predicates}")]
    ThresholdOutOfRange {
        code: String,
        threshold: usize,
        predicates: usize,
    },
}
