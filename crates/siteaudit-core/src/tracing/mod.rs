//! Tracing setup for the audit engine.

pub mod setup;

pub use setup::init_tracing;
