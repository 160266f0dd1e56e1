//! Proof profile types mirroring the spec resource format.
//!
//! The resource is one JSON object mapping finding code to profile:
//!
//! ```json
//! {
//!   "IDX_CANONICAL_MISSING": { "mode": "static", "value": "partial" },
//!   "IDX_SITEMAP_MISSING": {
//!     "mode": "rule",
//!     "rule": {
//!       "predicates": [
//!         { "predicate": "min_count", "kind": "resolved_url", "min": 1 },
//!         { "predicate": "field_present", "field": "robots_snippet" }
//!       ],
//!       "partial_min": 1
//!     }
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};

use siteaudit_core::types::{EvidenceKind, ProofCompleteness};

/// How proof completeness is computed for one finding code.
///
/// Static mode reproduces the legacy hard-coded value for a migrated
/// code exactly, which guarantees shadow parity by construction. Rule
/// mode derives the value from the evidence inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum ProofProfile {
    Static { value: ProofCompleteness },
    Rule { rule: CompletenessRule },
}

/// A deterministic predicate over the evidence inventory.
///
/// The set is closed: new predicate shapes require a code change here,
/// everything else about a finding's proof is onboarded by spec entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "predicate", rename_all = "snake_case")]
pub enum Predicate {
    /// At least `min` inventory items of `kind`.
    MinCount { kind: EvidenceKind, min: usize },
    /// A named field resolves to a non-empty value.
    FieldPresent { field: String },
    /// A named field resolves to exactly `value`.
    FieldEquals { field: String, value: String },
    /// A named upstream signal is boolean true.
    SignalTrue { signal: String },
}

/// Maps satisfied-predicate counts to a completeness value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletenessRule {
    pub predicates: Vec<Predicate>,
    /// Satisfied-count threshold for `Complete`. Defaults to all
    /// predicates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complete_min: Option<usize>,
    /// Satisfied-count threshold for `Partial`. Defaults to 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partial_min: Option<usize>,
}

impl CompletenessRule {
    pub fn effective_complete_min(&self) -> usize {
        self.complete_min.unwrap_or(self.predicates.len())
    }

    pub fn effective_partial_min(&self) -> usize {
        self.partial_min.unwrap_or(1)
    }
}
