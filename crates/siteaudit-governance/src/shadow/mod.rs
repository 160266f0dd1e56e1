//! Shadow migration: side-by-side comparison of legacy and spec-driven
//! proof completeness, and the non-shipped mismatch artifact.

pub mod comparator;
pub mod report;

pub use comparator::{legacy_completeness, ShadowComparator, ShadowReport, ShadowResult};
pub use report::write_shadow_report;
