//! Governance configuration.

pub mod governance_config;
pub mod phase;

pub use governance_config::GovernanceConfig;
pub use phase::MigrationPhase;
