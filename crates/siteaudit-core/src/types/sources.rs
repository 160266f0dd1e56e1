//! Collaborator interfaces for upstream finding builders.
//!
//! Fetching, signal extraction, and per-category finding construction live
//! outside the governance engine; this trait is the seam they plug into.

use super::evidence::{EvidenceInventory, Signals};
use super::finding::Finding;

/// An upstream producer of candidate findings for one audit category
/// (indexability, share metadata, conversion heuristics, ...).
///
/// Implementations must be deterministic over their inputs and must not
/// perform I/O; all fetched facts arrive through `signals` and `inventory`.
pub trait FindingSource {
    /// Category identifier (e.g. "indexability").
    fn category(&self) -> &'static str;

    /// Build candidate findings. Finding codes must be unique within the
    /// returned list.
    fn findings(&self, signals: &Signals, inventory: &EvidenceInventory) -> Vec<Finding>;
}
