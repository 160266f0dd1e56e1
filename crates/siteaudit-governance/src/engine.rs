//! Per-target and batch orchestration of the governance pipeline.

use rayon::prelude::*;
use std::sync::Arc;

use siteaudit_core::config::{GovernanceConfig, MigrationPhase};
use siteaudit_core::errors::{ConfigError, SpecError};
use siteaudit_core::types::{EvidenceInventory, Finding, PolicyDecision};

use crate::policy::PolicyEngine;
use crate::shadow::{legacy_completeness, ShadowComparator, ShadowReport};
use crate::spec::SpecRegistry;

/// Errors fatal to the whole batch, raised before any target runs.
#[derive(Debug, thiserror::Error)]
pub enum GovernanceError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Spec(#[from] SpecError),
}

/// Governed output for one audit target.
#[derive(Debug, Clone)]
pub struct TargetOutcome {
    /// The finding list that ships, finalized and immutable.
    pub findings: Vec<Finding>,
    /// One decision per finding, same order.
    pub decisions: Vec<PolicyDecision>,
    /// Present only in the shadow phase; never influences `findings`.
    pub shadow: Option<ShadowReport>,
}

/// The governance engine for one batch run.
///
/// Holds the one spec version shared by every target in the batch. The
/// registry is immutable after construction, so targets can be governed
/// concurrently without synchronization.
#[derive(Debug)]
pub struct GovernanceEngine {
    phase: MigrationPhase,
    registry: Option<Arc<SpecRegistry>>,
}

impl GovernanceEngine {
    /// Build from configuration, loading the spec when the phase needs
    /// it. Fails fast: a bad spec aborts before any target is evaluated,
    /// since every target in the run shares this spec version.
    pub fn from_config(config: &GovernanceConfig) -> Result<Self, GovernanceError> {
        config.validate()?;

        let registry = if config.phase.requires_spec() {
            // validate() guarantees spec_path is set here.
            let path = config.spec_path.as_deref().ok_or_else(|| {
                ConfigError::InvalidValue {
                    field: "spec_path".to_string(),
                    message: format!("required when phase is '{}'", config.phase),
                }
            })?;
            Some(Arc::new(SpecRegistry::load(path)?))
        } else {
            None
        };

        Ok(Self {
            phase: config.phase,
            registry,
        })
    }

    /// Build for legacy-only governance (phase off).
    pub fn legacy() -> Self {
        Self {
            phase: MigrationPhase::Off,
            registry: None,
        }
    }

    /// Build with an already-loaded registry.
    pub fn with_registry(phase: MigrationPhase, registry: Arc<SpecRegistry>) -> Self {
        Self {
            phase,
            registry: Some(registry),
        }
    }

    pub fn phase(&self) -> MigrationPhase {
        self.phase
    }

    /// Promote to the next migration phase for a subsequent run.
    ///
    /// Promotion is human-gated at the call site; this only enforces the
    /// legal path: never skip the shadow phase, never demote. The target
    /// phase must have a registry when it consults the spec.
    pub fn promote(self, next: MigrationPhase) -> Result<Self, GovernanceError> {
        if !self.phase.can_promote_to(next) {
            return Err(ConfigError::InvalidValue {
                field: "phase".to_string(),
                message: format!("cannot promote from '{}' to '{next}'", self.phase),
            }
            .into());
        }
        if next.requires_spec() && self.registry.is_none() {
            return Err(ConfigError::InvalidValue {
                field: "phase".to_string(),
                message: format!("phase '{next}' requires a loaded spec"),
            }
            .into());
        }
        Ok(Self {
            phase: next,
            registry: self.registry,
        })
    }

    /// Govern one target: enforcement first, shadow comparison after.
    ///
    /// Synchronous, single-threaded, side-effect-free: no I/O, no
    /// blocking. The shadow comparison consumes the already-enforced
    /// findings and cannot alter them.
    pub fn govern_target(
        &self,
        findings: Vec<Finding>,
        inventory: &EvidenceInventory,
    ) -> TargetOutcome {
        let enforcer = match (self.phase, self.registry.as_deref()) {
            (MigrationPhase::Active, Some(registry)) => PolicyEngine::spec_driven(registry),
            _ => PolicyEngine::legacy(),
        };
        let outcome = enforcer.enforce(findings, inventory);

        let shadow = match (self.phase, self.registry.as_deref()) {
            (MigrationPhase::Shadow, Some(registry)) => Some(
                ShadowComparator::new(registry).compare(
                    &outcome.findings,
                    inventory,
                    legacy_completeness,
                ),
            ),
            _ => None,
        };

        TargetOutcome {
            findings: outcome.findings,
            decisions: outcome.decisions,
            shadow,
        }
    }

    /// Govern a batch of independent targets in parallel.
    ///
    /// Each target owns its findings and inventory; the registry is the
    /// only shared state. Output order matches input order.
    pub fn govern_batch(
        &self,
        targets: Vec<(Vec<Finding>, EvidenceInventory)>,
    ) -> Vec<TargetOutcome> {
        targets
            .into_par_iter()
            .map(|(findings, inventory)| self.govern_target(findings, &inventory))
            .collect()
    }
}
