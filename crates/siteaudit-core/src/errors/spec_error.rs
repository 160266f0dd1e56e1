//! Proof-completeness spec loading errors.

/// Errors raised while loading or validating the spec resource.
///
/// Fatal for the whole batch when the migration phase is shadow or
/// active; irrelevant when the phase is off, since the registry is never
/// consulted.
#[derive(Debug, thiserror::Error)]
pub enum SpecError {
    #[error("Spec resource unreadable at {path}: {message}")]
    Io { path: String, message: String },

    #[error("Spec parse error in {path}: {message}")]
    Parse { path: String, message: String },

    #[error("Invalid profile for '{code}': {message}")]
    InvalidProfile { code: String, message: String },
}
