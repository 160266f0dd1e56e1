//! Error families for the governance engine, one file per family.

pub mod config_error;
pub mod eval_error;
pub mod spec_error;

pub use config_error::ConfigError;
pub use eval_error::EvaluationError;
pub use spec_error::SpecError;
