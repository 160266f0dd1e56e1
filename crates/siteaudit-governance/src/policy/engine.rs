//! Policy engine: fills governance defaults and applies the severity gate.

use siteaudit_core::types::{
    ConfidenceLevel, EvidenceInventory, Finding, PolicyAction, PolicyDecision, ProofCompleteness,
    Severity,
};

use crate::proof;
use crate::spec::SpecRegistry;

const GATE_REASON: &str = "confidence_proof_gate";

const DOWNGRADE_NOTE: &str = "Severity downgraded from 'fail' to 'warning' by policy: \
                              FAIL requires high confidence and complete proof.";

/// Findings and decisions produced by one enforcement pass.
///
/// `findings` preserves input order and is immutable from here on;
/// `decisions[i]` corresponds to `findings[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct EnforcementOutcome {
    pub findings: Vec<Finding>,
    pub decisions: Vec<PolicyDecision>,
}

/// Applies governance defaults and the severity gate to candidate
/// findings.
///
/// In legacy mode the builder-supplied completeness (default-filled) is
/// authoritative. In spec-driven mode a registered profile overrides it
/// via the evaluator; codes without a profile behave exactly as legacy.
pub struct PolicyEngine<'a> {
    registry: Option<&'a SpecRegistry>,
}

impl<'a> PolicyEngine<'a> {
    /// Legacy enforcement: the spec registry is not consulted.
    pub fn legacy() -> Self {
        Self { registry: None }
    }

    /// Spec-driven enforcement: registered profiles are authoritative
    /// for proof completeness (migration phase active).
    pub fn spec_driven(registry: &'a SpecRegistry) -> Self {
        Self {
            registry: Some(registry),
        }
    }

    /// Enforce the governance policy on a target's candidate findings.
    ///
    /// Per finding, in input order: fill defaults, resolve proof
    /// completeness, evaluate the gate, downgrade an ungated FAIL to
    /// WARNING. Never fails; an evaluator error degrades that one
    /// finding to partial proof.
    pub fn enforce(
        &self,
        findings: Vec<Finding>,
        inventory: &EvidenceInventory,
    ) -> EnforcementOutcome {
        let mut enforced = Vec::with_capacity(findings.len());
        let mut decisions = Vec::with_capacity(findings.len());

        for mut finding in findings {
            let requested_severity = finding.severity;

            let confidence = finding.confidence_level.unwrap_or_default();
            finding.confidence_level = Some(confidence);

            let proof = self.resolve_proof(&finding, inventory);
            finding.proof_completeness = Some(proof);

            let gate_satisfied =
                confidence == ConfidenceLevel::High && proof == ProofCompleteness::Complete;

            let downgraded = finding.severity == Severity::Fail && !gate_satisfied;
            if downgraded {
                finding.severity = Severity::Warning;
                finding.policy_notes.push(DOWNGRADE_NOTE.to_string());
                finding.policy_actions.push(PolicyAction::SeverityClamp {
                    from: Severity::Fail,
                    to: Severity::Warning,
                    reason: GATE_REASON.to_string(),
                    confidence_level: confidence,
                    proof_completeness: proof,
                });
                tracing::debug!(
                    code = %finding.code,
                    confidence = %confidence,
                    proof = %proof,
                    "severity gate rejected FAIL, downgraded to WARNING"
                );
            }

            decisions.push(PolicyDecision {
                finding_code: finding.code.clone(),
                requested_severity,
                enforced_severity: finding.severity,
                effective_confidence: confidence,
                effective_proof_completeness: proof,
                gate_satisfied,
                downgraded,
            });
            enforced.push(finding);
        }

        EnforcementOutcome {
            findings: enforced,
            decisions,
        }
    }

    /// Resolve the effective proof completeness for one finding.
    ///
    /// Spec-driven with a registered profile: the evaluator result is
    /// authoritative; on evaluation failure the finding degrades to
    /// partial, discarding any builder-supplied value, so a broken rule
    /// can never let a FAIL through the gate. No profile, or legacy
    /// mode: the builder value, defaulting to partial.
    fn resolve_proof(&self, finding: &Finding, inventory: &EvidenceInventory) -> ProofCompleteness {
        let Some(profile) = self.registry.and_then(|r| r.lookup(&finding.code)) else {
            return finding.proof_completeness.unwrap_or_default();
        };

        match proof::evaluate(&finding.code, inventory, profile) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(
                    code = %finding.code,
                    error = %e,
                    "proof evaluation failed, degrading to partial"
                );
                ProofCompleteness::Partial
            }
        }
    }
}
