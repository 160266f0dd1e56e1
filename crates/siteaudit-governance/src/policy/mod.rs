//! Policy enforcement: governance defaults and the FAIL severity gate.

pub mod engine;

pub use engine::{EnforcementOutcome, PolicyEngine};
