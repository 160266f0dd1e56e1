//! Declarative proof-completeness spec: profile types and registry.

pub mod registry;
pub mod types;

pub use registry::SpecRegistry;
pub use types::{CompletenessRule, Predicate, ProofProfile};
