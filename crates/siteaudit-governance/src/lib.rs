//! Finding governance engine.
//!
//! Takes candidate findings produced upstream from deterministic page
//! signals and enforces a conservative severity policy: a finding ships
//! as FAIL only when its confidence is high and its proof is complete.
//! Proof completeness is migrating from hard-coded per-finding logic to a
//! declarative spec, with a shadow phase that runs both side by side and
//! records mismatches without touching shipped output.
//!
//! Subsystems:
//! - `spec`: declarative proof-completeness spec registry
//! - `proof`: pure spec-driven completeness evaluation
//! - `policy`: defaults and the FAIL severity gate
//! - `shadow`: legacy vs. spec comparison and the shadow artifact
//! - `engine`: per-target and batch orchestration across phases
//! - `verify`: post-hoc QA checks over governed findings

pub mod engine;
pub mod policy;
pub mod proof;
pub mod shadow;
pub mod spec;
pub mod verify;

pub use engine::{GovernanceEngine, GovernanceError, TargetOutcome};
pub use policy::{EnforcementOutcome, PolicyEngine};
pub use shadow::{ShadowComparator, ShadowReport, ShadowResult};
pub use spec::{ProofProfile, SpecRegistry};
