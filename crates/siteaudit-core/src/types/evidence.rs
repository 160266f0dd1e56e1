//! Signals and the per-target evidence inventory.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A deterministic fact extracted from fetched content by an upstream
/// extractor. Read-only to the governance engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SignalValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl SignalValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

/// Named signal map for one target, produced upstream.
pub type Signals = FxHashMap<String, SignalValue>;

/// Classes of verifiable evidence an audit can capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceKind {
    ResolvedUrl,
    HtmlSnippet,
    HeaderValue,
    RobotsRule,
    SitemapEntry,
    StatusCode,
}

impl EvidenceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ResolvedUrl => "resolved_url",
            Self::HtmlSnippet => "html_snippet",
            Self::HeaderValue => "header_value",
            Self::RobotsRule => "robots_rule",
            Self::SitemapEntry => "sitemap_entry",
            Self::StatusCode => "status_code",
        }
    }
}

impl fmt::Display for EvidenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One verifiable evidence item (e.g. a resolved URL, a header value).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceItem {
    pub kind: EvidenceKind,
    /// Field name the item is addressable by (e.g. "canonical_href").
    pub name: String,
    pub value: String,
}

/// Reference from a finding into the evidence inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceRef {
    pub kind: EvidenceKind,
    pub name: String,
}

/// The finite set of verifiable evidence available about one target.
///
/// Built once from upstream signals, then immutable. One instance per
/// target audit; never shared across targets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvidenceInventory {
    items: Vec<EvidenceItem>,
    signals: Signals,
}

impl EvidenceInventory {
    pub fn new(items: Vec<EvidenceItem>, signals: Signals) -> Self {
        Self { items, signals }
    }

    /// Inventory with no evidence at all (unreachable site, fetch denied).
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[EvidenceItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items of the given kind.
    pub fn count_of_kind(&self, kind: EvidenceKind) -> usize {
        self.items.iter().filter(|i| i.kind == kind).count()
    }

    /// First item addressable by `name`, if any.
    pub fn field(&self, name: &str) -> Option<&EvidenceItem> {
        self.items.iter().find(|i| i.name == name)
    }

    /// True when `name` resolves to an item with a non-empty value.
    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some_and(|i| !i.value.trim().is_empty())
    }

    pub fn signal(&self, name: &str) -> Option<&SignalValue> {
        self.signals.get(name)
    }

    /// True when a finding's evidence references all resolve to items
    /// present in this inventory.
    pub fn resolves(&self, evidence: &[EvidenceRef]) -> bool {
        evidence
            .iter()
            .all(|r| self.items.iter().any(|i| i.kind == r.kind && i.name == r.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inventory() -> EvidenceInventory {
        let mut signals = Signals::default();
        signals.insert("sitemap_present".to_string(), SignalValue::Bool(true));
        EvidenceInventory::new(
            vec![
                EvidenceItem {
                    kind: EvidenceKind::ResolvedUrl,
                    name: "canonical_resolved".to_string(),
                    value: "https://example.com/".to_string(),
                },
                EvidenceItem {
                    kind: EvidenceKind::ResolvedUrl,
                    name: "sitemap_url".to_string(),
                    value: "https://example.com/sitemap.xml".to_string(),
                },
                EvidenceItem {
                    kind: EvidenceKind::HeaderValue,
                    name: "x_robots_tag".to_string(),
                    value: "".to_string(),
                },
            ],
            signals,
        )
    }

    #[test]
    fn count_of_kind_filters_by_kind() {
        let inv = inventory();
        assert_eq!(inv.count_of_kind(EvidenceKind::ResolvedUrl), 2);
        assert_eq!(inv.count_of_kind(EvidenceKind::HtmlSnippet), 0);
    }

    #[test]
    fn has_field_requires_non_empty_value() {
        let inv = inventory();
        assert!(inv.has_field("canonical_resolved"));
        assert!(!inv.has_field("x_robots_tag"));
        assert!(!inv.has_field("missing"));
    }

    #[test]
    fn resolves_checks_every_reference() {
        let inv = inventory();
        let ok = vec![EvidenceRef {
            kind: EvidenceKind::ResolvedUrl,
            name: "sitemap_url".to_string(),
        }];
        let missing = vec![EvidenceRef {
            kind: EvidenceKind::HtmlSnippet,
            name: "sitemap_url".to_string(),
        }];
        assert!(inv.resolves(&ok));
        assert!(!inv.resolves(&missing));
    }
}
