//! Side-by-side comparison of legacy and spec-driven completeness.

use serde::{Deserialize, Serialize};

use siteaudit_core::config::MigrationPhase;
use siteaudit_core::types::{EvidenceInventory, Finding, ProofCompleteness};

use crate::proof;
use crate::spec::SpecRegistry;

/// Comparison record for one finding with a registered profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShadowResult {
    /// Position of the finding in the target's (enforced) finding list.
    pub finding_index: usize,
    pub finding_code: String,
    pub legacy_completeness: ProofCompleteness,
    pub spec_completeness: ProofCompleteness,
    pub mismatch: bool,
}

/// Per-target shadow comparison report.
///
/// Written to a separate artifact; never included in the client-facing
/// delivery bundle and never fed back into shipped findings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShadowReport {
    /// Migration phase the comparison ran under.
    pub phase: MigrationPhase,
    /// Number of profiles in the spec the comparison ran against.
    pub spec_profiles: usize,
    pub mismatch_count: usize,
    pub results: Vec<ShadowResult>,
}

/// The pre-migration completeness for an enforced finding: whatever the
/// legacy path (builder value plus default filling) decided.
pub fn legacy_completeness(finding: &Finding, _inventory: &EvidenceInventory) -> ProofCompleteness {
    finding.proof_completeness.unwrap_or_default()
}

/// Runs the spec evaluator against the legacy completeness oracle and
/// records mismatches.
///
/// Runs strictly after policy enforcement, consumes the same immutable
/// inputs as the authoritative path, and writes to a disjoint output.
pub struct ShadowComparator<'a> {
    registry: &'a SpecRegistry,
}

impl<'a> ShadowComparator<'a> {
    pub fn new(registry: &'a SpecRegistry) -> Self {
        Self { registry }
    }

    /// Compare spec-driven completeness against `legacy` for every
    /// finding whose code has a registered profile.
    ///
    /// `legacy` is the pre-migration per-finding logic, treated as an
    /// opaque oracle. Results are sorted by (code, index) so identical
    /// inputs serialize identically across runs.
    pub fn compare<F>(
        &self,
        findings: &[Finding],
        inventory: &EvidenceInventory,
        legacy: F,
    ) -> ShadowReport
    where
        F: Fn(&Finding, &EvidenceInventory) -> ProofCompleteness,
    {
        let mut results = Vec::new();

        for (index, finding) in findings.iter().enumerate() {
            let Some(profile) = self.registry.lookup(&finding.code) else {
                continue;
            };

            let legacy_value = legacy(finding, inventory);
            let spec_value = match proof::evaluate(&finding.code, inventory, profile) {
                Ok(value) => value,
                Err(e) => {
                    // Same degradation as the authoritative path, so a
                    // broken rule surfaces as a mismatch instead of
                    // silently agreeing with legacy.
                    tracing::warn!(
                        code = %finding.code,
                        error = %e,
                        "shadow proof evaluation failed, degrading to partial"
                    );
                    ProofCompleteness::Partial
                }
            };

            results.push(ShadowResult {
                finding_index: index,
                finding_code: finding.code.clone(),
                legacy_completeness: legacy_value,
                spec_completeness: spec_value,
                mismatch: spec_value != legacy_value,
            });
        }

        results.sort_by(|a, b| {
            a.finding_code
                .cmp(&b.finding_code)
                .then(a.finding_index.cmp(&b.finding_index))
        });
        let mismatch_count = results.iter().filter(|r| r.mismatch).count();

        ShadowReport {
            phase: MigrationPhase::Shadow,
            spec_profiles: self.registry.len(),
            mismatch_count,
            results,
        }
    }
}
