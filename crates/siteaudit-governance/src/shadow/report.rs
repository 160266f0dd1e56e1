//! Shadow artifact writer.

use std::io;
use std::path::Path;

use super::comparator::ShadowReport;

/// Write a shadow report as pretty-printed JSON.
///
/// Output is deterministic: field order is fixed by the struct
/// definitions and results are pre-sorted by the comparator. The
/// artifact lives next to the per-target run output and is excluded
/// from client deliveries.
pub fn write_shadow_report(report: &ShadowReport, path: &Path) -> io::Result<()> {
    let json = serde_json::to_string_pretty(report).map_err(io::Error::other)?;
    std::fs::write(path, json + "\n")
}
