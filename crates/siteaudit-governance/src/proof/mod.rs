//! Spec-driven proof completeness evaluation.

pub mod evaluator;

pub use evaluator::evaluate;
