//! Domain types for audit findings, evidence, and policy decisions.

pub mod decision;
pub mod evidence;
pub mod finding;
pub mod sources;

pub use decision::{PolicyAction, PolicyDecision};
pub use evidence::{
    EvidenceInventory, EvidenceItem, EvidenceKind, EvidenceRef, SignalValue, Signals,
};
pub use finding::{ConfidenceLevel, Finding, ProofCompleteness, Severity};
pub use sources::FindingSource;
