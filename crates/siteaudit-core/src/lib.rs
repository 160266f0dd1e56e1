//! Core types, errors, config, tracing, and constants shared by the
//! siteaudit governance engine and its collaborators.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;
