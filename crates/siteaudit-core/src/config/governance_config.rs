//! Governance engine configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants;
use crate::errors::ConfigError;

use super::phase::MigrationPhase;

/// Configuration for the finding governance engine.
///
/// Owned by the encompassing CLI; consumed here read-only. All fields
/// have conservative defaults so an empty config means "legacy only".
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GovernanceConfig {
    /// Migration phase for spec-driven proof completeness.
    pub phase: MigrationPhase,
    /// Path to the proof-completeness spec resource. Required when the
    /// phase consults the spec; ignored when the phase is off.
    pub spec_path: Option<PathBuf>,
    /// File name for the shadow comparison artifact, written next to the
    /// per-target run output.
    pub shadow_artifact: Option<String>,
}

impl GovernanceConfig {
    /// Load from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let config: Self = toml::from_str(&raw).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that would fail later in a less obvious way.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.phase.requires_spec() && self.spec_path.is_none() {
            return Err(ConfigError::InvalidValue {
                field: "spec_path".to_string(),
                message: format!("required when phase is '{}'", self.phase),
            });
        }
        Ok(())
    }

    /// Returns the effective shadow artifact file name.
    pub fn effective_shadow_artifact(&self) -> &str {
        self.shadow_artifact
            .as_deref()
            .unwrap_or(constants::SHADOW_ARTIFACT_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_defaults_to_off() {
        let config: GovernanceConfig = toml::from_str("").unwrap();
        assert_eq!(config.phase, MigrationPhase::Off);
        assert!(config.spec_path.is_none());
        assert_eq!(
            config.effective_shadow_artifact(),
            constants::SHADOW_ARTIFACT_FILE
        );
        config.validate().unwrap();
    }

    #[test]
    fn shadow_phase_requires_spec_path() {
        let config: GovernanceConfig = toml::from_str(r#"phase = "shadow""#).unwrap();
        assert!(config.validate().is_err());

        let config: GovernanceConfig = toml::from_str(
            r#"
            phase = "shadow"
            spec_path = "specs/proof_completeness_spec.v1.json"
            "#,
        )
        .unwrap();
        config.validate().unwrap();
    }
}
