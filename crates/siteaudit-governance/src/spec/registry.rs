//! Spec registry: loads, validates, and indexes proof profiles.

use rustc_hash::FxHashMap;
use std::path::Path;

use siteaudit_core::errors::SpecError;

use super::types::ProofProfile;

/// An immutable index of proof profiles keyed by finding code.
///
/// Built once per spec version and shared read-only across all targets
/// in a batch; it holds no per-target state and is safe for
/// unsynchronized concurrent reads.
#[derive(Debug, Clone, Default)]
pub struct SpecRegistry {
    profiles: FxHashMap<String, ProofProfile>,
}

impl SpecRegistry {
    /// Load and validate a spec resource from a JSON file.
    pub fn load(path: &Path) -> Result<Self, SpecError> {
        let raw = std::fs::read_to_string(path).map_err(|e| SpecError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&raw, &path.display().to_string())
    }

    /// Parse and validate a spec resource. `origin` names the resource
    /// in error messages.
    pub fn from_json(raw: &str, origin: &str) -> Result<Self, SpecError> {
        let profiles: FxHashMap<String, ProofProfile> =
            serde_json::from_str(raw).map_err(|e| SpecError::Parse {
                path: origin.to_string(),
                message: e.to_string(),
            })?;

        for (code, profile) in &profiles {
            validate_profile(code, profile)?;
        }

        tracing::info!(
            origin = origin,
            profiles = profiles.len(),
            "loaded proof completeness spec"
        );
        Ok(Self { profiles })
    }

    /// Build from already-validated profiles (tests, embedded specs).
    pub fn from_profiles(
        profiles: impl IntoIterator<Item = (String, ProofProfile)>,
    ) -> Result<Self, SpecError> {
        let profiles: FxHashMap<String, ProofProfile> = profiles.into_iter().collect();
        for (code, profile) in &profiles {
            validate_profile(code, profile)?;
        }
        Ok(Self { profiles })
    }

    /// Exact-match lookup by finding code. A miss is not an error: the
    /// finding simply keeps its legacy completeness.
    pub fn lookup(&self, code: &str) -> Option<&ProofProfile> {
        self.profiles.get(code)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Registered finding codes, sorted for deterministic output.
    pub fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.profiles.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }
}

fn validate_profile(code: &str, profile: &ProofProfile) -> Result<(), SpecError> {
    if code.trim().is_empty() {
        return Err(SpecError::InvalidProfile {
            code: code.to_string(),
            message: "finding code must be non-empty".to_string(),
        });
    }

    if let ProofProfile::Rule { rule } = profile {
        if rule.predicates.is_empty() {
            return Err(SpecError::InvalidProfile {
                code: code.to_string(),
                message: "rule mode requires at least one predicate".to_string(),
            });
        }
        let complete_min = rule.effective_complete_min();
        let partial_min = rule.effective_partial_min();
        if complete_min > rule.predicates.len() {
            return Err(SpecError::InvalidProfile {
                code: code.to_string(),
                message: format!(
                    "complete_min {complete_min} exceeds predicate count {}",
                    rule.predicates.len()
                ),
            });
        }
        if partial_min > complete_min {
            return Err(SpecError::InvalidProfile {
                code: code.to_string(),
                message: format!("partial_min {partial_min} exceeds complete_min {complete_min}"),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use siteaudit_core::types::ProofCompleteness;

    #[test]
    fn lookup_is_exact_match() {
        let registry = SpecRegistry::from_json(
            r#"{ "IDX_CANONICAL_MISSING": { "mode": "static", "value": "partial" } }"#,
            "inline",
        )
        .unwrap();
        assert!(registry.lookup("IDX_CANONICAL_MISSING").is_some());
        assert!(registry.lookup("idx_canonical_missing").is_none());
        assert!(registry.lookup("IDX_CANONICAL").is_none());
    }

    #[test]
    fn static_mode_without_value_is_a_parse_error() {
        let err = SpecRegistry::from_json(r#"{ "X": { "mode": "static" } }"#, "inline")
            .unwrap_err();
        assert!(matches!(err, SpecError::Parse { .. }));
    }

    #[test]
    fn unknown_mode_is_a_parse_error() {
        let err = SpecRegistry::from_json(
            r#"{ "X": { "mode": "bayesian", "value": "partial" } }"#,
            "inline",
        )
        .unwrap_err();
        assert!(matches!(err, SpecError::Parse { .. }));
    }

    #[test]
    fn empty_rule_is_rejected() {
        let err = SpecRegistry::from_json(
            r#"{ "X": { "mode": "rule", "rule": { "predicates": [] } } }"#,
            "inline",
        )
        .unwrap_err();
        assert!(matches!(err, SpecError::InvalidProfile { .. }));
    }

    #[test]
    fn unknown_profile_fields_are_ignored() {
        // Forward compatibility: a newer spec may carry fields this
        // version does not understand.
        let registry = SpecRegistry::from_json(
            r#"{ "X": { "mode": "static", "value": "complete", "added_in": "v2" } }"#,
            "inline",
        )
        .unwrap();
        assert_eq!(
            registry.lookup("X"),
            Some(&ProofProfile::Static {
                value: ProofCompleteness::Complete
            })
        );
    }
}
