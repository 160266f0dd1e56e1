//! Findings and their severity, confidence, and proof-completeness scales.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::decision::PolicyAction;
use super::evidence::EvidenceRef;

/// Severity of an audit finding, weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Pass,
    Info,
    Warning,
    Fail,
}

impl Severity {
    /// Normalize a severity string from an upstream builder.
    ///
    /// Unrecognized severities collapse to `Info` so a malformed builder
    /// can never accidentally ship an adverse finding.
    pub fn normalize(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pass" => Self::Pass,
            "warning" => Self::Warning,
            "fail" => Self::Fail,
            _ => Self::Info,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Fail => "fail",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How certain the detection mechanism is that the underlying fact is real.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    Low,
    Medium,
    High,
}

impl Default for ConfidenceLevel {
    fn default() -> Self {
        Self::Medium
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        })
    }
}

/// How fully the evidence behind a finding has been captured and verified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProofCompleteness {
    None,
    Partial,
    Complete,
}

impl Default for ProofCompleteness {
    fn default() -> Self {
        Self::Partial
    }
}

impl fmt::Display for ProofCompleteness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::None => "none",
            Self::Partial => "partial",
            Self::Complete => "complete",
        })
    }
}

/// A single audit statement about a target.
///
/// Produced by upstream finding builders with a requested severity and
/// optional confidence/proof fields; finalized exactly once by the policy
/// enforcer, which fills defaults and applies the severity gate. A
/// finding's `code` is unique within one target's finding list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    /// Stable, namespaced identifier (e.g. "IDX_SITEMAP_MISSING").
    pub code: String,
    /// Audit category (e.g. "indexability", "conversion").
    pub category: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub recommendation: String,
    /// Severity of the finding. Builders set the severity they request;
    /// the policy enforcer replaces it with the enforced severity, after
    /// which the finding is immutable. The pre-enforcement value is
    /// preserved in `policy_actions` and in the `PolicyDecision`.
    pub severity: Severity,
    /// Absent means the builder made no confidence claim; defaults to
    /// `Medium` during enforcement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence_level: Option<ConfidenceLevel>,
    /// Absent means proof strength was not assessed; defaults to
    /// `Partial` during enforcement unless a spec profile applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proof_completeness: Option<ProofCompleteness>,
    /// References into the target's evidence inventory.
    #[serde(default)]
    pub evidence: Vec<EvidenceRef>,
    /// Human-readable notes appended by the policy enforcer.
    #[serde(default)]
    pub policy_notes: Vec<String>,
    /// Structured records of enforcement actions taken on this finding.
    #[serde(default)]
    pub policy_actions: Vec<PolicyAction>,
}

impl Finding {
    /// Minimal constructor for builders; optional fields start absent.
    pub fn new(
        code: impl Into<String>,
        category: impl Into<String>,
        title: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            code: code.into(),
            category: category.into(),
            title: title.into(),
            description: String::new(),
            recommendation: String::new(),
            severity,
            confidence_level: None,
            proof_completeness: None,
            evidence: Vec::new(),
            policy_notes: Vec::new(),
            policy_actions: Vec::new(),
        }
    }

    pub fn with_confidence(mut self, confidence: ConfidenceLevel) -> Self {
        self.confidence_level = Some(confidence);
        self
    }

    pub fn with_proof(mut self, proof: ProofCompleteness) -> Self {
        self.proof_completeness = Some(proof);
        self
    }

    pub fn with_evidence(mut self, evidence: Vec<EvidenceRef>) -> Self {
        self.evidence = evidence;
        self
    }
}
