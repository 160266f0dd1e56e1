//! Shared constants for the siteaudit governance engine.

/// Environment variable controlling per-subsystem log levels.
pub const LOG_ENV_VAR: &str = "AUDIT_LOG";

/// Fallback log filter when `AUDIT_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "siteaudit=info";

/// File name for the shadow comparison artifact.
///
/// Diagnostic output for the spec migration; excluded from any
/// client-facing delivery bundle.
pub const SHADOW_ARTIFACT_FILE: &str = "proof_completeness_shadow.json";
