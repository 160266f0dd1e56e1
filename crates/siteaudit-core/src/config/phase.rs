//! Migration phase for spec-driven proof completeness.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ConfigError;

/// Which evaluation path is authoritative for shipped findings.
///
/// Promotion is one-way and human-gated: `Off` → `Shadow` once a valid
/// spec is loadable, `Shadow` → `Active` only after sustained zero
/// mismatches across a representative target set. Never automatic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MigrationPhase {
    /// Legacy per-finding completeness only; the spec is not consulted.
    Off,
    /// Legacy remains authoritative; the spec evaluator runs in parallel
    /// for comparison and writes a separate, non-shipped report.
    Shadow,
    /// Spec-driven completeness is authoritative for shipped findings.
    Active,
}

impl MigrationPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Shadow => "shadow",
            Self::Active => "active",
        }
    }

    /// True when the spec registry must load successfully before any
    /// target is evaluated.
    pub fn requires_spec(&self) -> bool {
        !matches!(self, Self::Off)
    }

    /// True when a legal promotion path exists from `self` to `next`.
    ///
    /// Staying in place is always legal; skipping `Shadow` is not, and
    /// there is no demotion path inside one run.
    pub fn can_promote_to(&self, next: MigrationPhase) -> bool {
        matches!(
            (self, next),
            (Self::Off, Self::Off)
                | (Self::Off, Self::Shadow)
                | (Self::Shadow, Self::Shadow)
                | (Self::Shadow, Self::Active)
                | (Self::Active, Self::Active)
        )
    }
}

impl Default for MigrationPhase {
    fn default() -> Self {
        Self::Off
    }
}

impl fmt::Display for MigrationPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MigrationPhase {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "off" | "legacy" => Ok(Self::Off),
            "shadow" => Ok(Self::Shadow),
            "active" => Ok(Self::Active),
            other => Err(ConfigError::InvalidValue {
                field: "phase".to_string(),
                message: format!("expected off|shadow|active, got '{other}'"),
            }),
        }
    }
}
