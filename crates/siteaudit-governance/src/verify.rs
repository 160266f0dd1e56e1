//! Post-hoc QA checks over governed findings.
//!
//! The enforcer guarantees the gate invariant by construction; these
//! checks re-verify it (regression guard for downstream tooling that
//! deserializes and re-emits findings) and flag structural problems a
//! builder or renderer could introduce. Never mutates findings.

use serde::Serialize;
use std::collections::BTreeMap;

use siteaudit_core::types::{
    ConfidenceLevel, EvidenceInventory, Finding, PolicyDecision, ProofCompleteness, Severity,
};

/// QA issue severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueLevel {
    Error,
    Warn,
}

/// One structural problem found in a governed finding list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "check", rename_all = "snake_case")]
pub enum VerifyIssue {
    /// A finding ships FAIL without high confidence and complete proof.
    GateBroken { code: String },
    /// Confidence or proof left unfilled after enforcement.
    FieldUnfilled { code: String, field: String },
    /// The same code appears more than once for one target.
    DuplicateCode { code: String },
    /// Decisions do not line up one-to-one with findings.
    DecisionMismatch { index: usize },
    /// A finding references evidence absent from the inventory.
    DanglingEvidence { code: String },
}

impl VerifyIssue {
    pub fn level(&self) -> IssueLevel {
        match self {
            Self::DanglingEvidence { .. } => IssueLevel::Warn,
            _ => IssueLevel::Error,
        }
    }
}

/// Verification result with distribution counters for QA dashboards.
#[derive(Debug, Clone, Serialize)]
pub struct VerifySummary {
    pub issues: Vec<VerifyIssue>,
    /// Finding counts per enforced severity.
    pub severity_counts: BTreeMap<String, usize>,
    /// Finding counts per effective proof completeness.
    pub proof_counts: BTreeMap<String, usize>,
    /// Finding counts per effective confidence level.
    pub confidence_counts: BTreeMap<String, usize>,
}

impl VerifySummary {
    pub fn is_clean(&self) -> bool {
        self.issues
            .iter()
            .all(|i| i.level() != IssueLevel::Error)
    }
}

/// Verify a governed finding list against its decisions and inventory.
pub fn verify_governed(
    findings: &[Finding],
    decisions: &[PolicyDecision],
    inventory: &EvidenceInventory,
) -> VerifySummary {
    let mut issues = Vec::new();
    let mut severity_counts = BTreeMap::new();
    let mut proof_counts = BTreeMap::new();
    let mut confidence_counts = BTreeMap::new();
    let mut seen = std::collections::BTreeSet::new();

    if findings.len() != decisions.len() {
        issues.push(VerifyIssue::DecisionMismatch {
            index: findings.len().min(decisions.len()),
        });
    }

    for (i, finding) in findings.iter().enumerate() {
        *severity_counts
            .entry(finding.severity.to_string())
            .or_insert(0) += 1;

        if !seen.insert(finding.code.clone()) {
            issues.push(VerifyIssue::DuplicateCode {
                code: finding.code.clone(),
            });
        }

        match finding.confidence_level {
            Some(c) => {
                *confidence_counts.entry(c.to_string()).or_insert(0) += 1;
            }
            None => issues.push(VerifyIssue::FieldUnfilled {
                code: finding.code.clone(),
                field: "confidence_level".to_string(),
            }),
        }
        match finding.proof_completeness {
            Some(p) => {
                *proof_counts.entry(p.to_string()).or_insert(0) += 1;
            }
            None => issues.push(VerifyIssue::FieldUnfilled {
                code: finding.code.clone(),
                field: "proof_completeness".to_string(),
            }),
        }

        if finding.severity == Severity::Fail
            && (finding.confidence_level != Some(ConfidenceLevel::High)
                || finding.proof_completeness != Some(ProofCompleteness::Complete))
        {
            issues.push(VerifyIssue::GateBroken {
                code: finding.code.clone(),
            });
        }

        if let Some(decision) = decisions.get(i) {
            if decision.finding_code != finding.code
                || decision.enforced_severity != finding.severity
            {
                issues.push(VerifyIssue::DecisionMismatch { index: i });
            }
        }

        if !inventory.resolves(&finding.evidence) {
            issues.push(VerifyIssue::DanglingEvidence {
                code: finding.code.clone(),
            });
        }
    }

    VerifySummary {
        issues,
        severity_counts,
        proof_counts,
        confidence_counts,
    }
}
