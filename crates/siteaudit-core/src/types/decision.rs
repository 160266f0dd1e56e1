//! Terminal policy decisions emitted by the enforcer.

use serde::{Deserialize, Serialize};

use super::finding::{ConfidenceLevel, ProofCompleteness, Severity};

/// A structured record of an enforcement action taken on one finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PolicyAction {
    /// The severity gate rejected the requested severity.
    SeverityClamp {
        from: Severity,
        to: Severity,
        reason: String,
        confidence_level: ConfidenceLevel,
        proof_completeness: ProofCompleteness,
    },
}

/// One per finding, produced once by the policy enforcer, then terminal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyDecision {
    pub finding_code: String,
    pub requested_severity: Severity,
    pub enforced_severity: Severity,
    pub effective_confidence: ConfidenceLevel,
    pub effective_proof_completeness: ProofCompleteness,
    /// True iff confidence is High and proof is Complete.
    pub gate_satisfied: bool,
    /// True iff the gate rejected a requested Fail.
    pub downgraded: bool,
}
