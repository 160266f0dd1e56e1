//! Spec registry loading, validation, and engine fail-fast behavior.

use std::io::Write;
use std::sync::Arc;

use siteaudit_core::config::{GovernanceConfig, MigrationPhase};
use siteaudit_core::types::*;
use siteaudit_governance::engine::{GovernanceEngine, GovernanceError};
use siteaudit_governance::spec::SpecRegistry;

fn write_spec(dir: &tempfile::TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("proof_completeness_spec.v1.json");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

#[test]
fn valid_spec_loads_with_profiles_indexed_by_code() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_spec(
        &dir,
        r#"{
            "IDX_CANONICAL_MISSING": { "mode": "static", "value": "partial" },
            "IDX_SITEMAP_MISSING": {
                "mode": "rule",
                "rule": {
                    "predicates": [
                        { "predicate": "min_count", "kind": "sitemap_entry", "min": 1 }
                    ]
                }
            }
        }"#,
    );

    let registry = SpecRegistry::load(&path).unwrap();
    assert_eq!(registry.len(), 2);
    assert_eq!(
        registry.codes(),
        ["IDX_CANONICAL_MISSING", "IDX_SITEMAP_MISSING"]
    );
    assert!(registry.lookup("IDX_SITEMAP_MISSING").is_some());
    assert!(registry.lookup("IDX_ROBOTS_MISSING").is_none());
}

/// A malformed spec with phase = shadow aborts engine construction
/// before any target is evaluated.
#[test]
fn malformed_spec_in_shadow_phase_fails_fast() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_spec(&dir, r#"{ "X": { "mode": "static" } }"#);

    let config = GovernanceConfig {
        phase: MigrationPhase::Shadow,
        spec_path: Some(path),
        shadow_artifact: None,
    };
    let err = GovernanceEngine::from_config(&config).unwrap_err();
    assert!(matches!(err, GovernanceError::Spec(_)));
}

/// With phase off the spec is irrelevant: a missing resource does not
/// stop the run.
#[test]
fn missing_spec_is_irrelevant_when_phase_is_off() {
    let config = GovernanceConfig {
        phase: MigrationPhase::Off,
        spec_path: Some("does/not/exist.json".into()),
        shadow_artifact: None,
    };
    let engine = GovernanceEngine::from_config(&config).unwrap();
    assert_eq!(engine.phase(), MigrationPhase::Off);
}

#[test]
fn shadow_phase_without_spec_path_is_a_config_error() {
    let config = GovernanceConfig {
        phase: MigrationPhase::Shadow,
        spec_path: None,
        shadow_artifact: None,
    };
    let err = GovernanceEngine::from_config(&config).unwrap_err();
    assert!(matches!(err, GovernanceError::Config(_)));
}

#[test]
fn unreadable_spec_file_is_an_io_error() {
    let err = SpecRegistry::load(std::path::Path::new("nope/missing.json")).unwrap_err();
    assert!(matches!(
        err,
        siteaudit_core::errors::SpecError::Io { .. }
    ));
}

/// Rule evaluation failures in active mode degrade one finding, never
/// the run.
#[test]
fn evaluation_error_falls_back_per_finding() {
    let registry = Arc::new(
        SpecRegistry::from_json(
            r#"{
                "IDX_SITEMAP_MISSING": {
                    "mode": "rule",
                    "rule": {
                        "predicates": [
                            { "predicate": "signal_true", "signal": "sitemap_present" }
                        ]
                    }
                }
            }"#,
            "inline",
        )
        .unwrap(),
    );
    let engine = GovernanceEngine::with_registry(MigrationPhase::Active, registry);

    // No signals at all: the signal_true predicate cannot resolve.
    let outcome = engine.govern_target(
        vec![
            Finding::new("IDX_SITEMAP_MISSING", "indexability", "t", Severity::Fail),
            Finding::new("IDX_ROBOTS_MISSING", "indexability", "t", Severity::Info),
        ],
        &EvidenceInventory::empty(),
    );

    // The failing finding degrades to partial, so its FAIL is clamped;
    // the other finding is untouched.
    assert_eq!(
        outcome.decisions[0].effective_proof_completeness,
        ProofCompleteness::Partial
    );
    assert_eq!(outcome.findings[0].severity, Severity::Warning);
    assert_eq!(outcome.findings[1].severity, Severity::Info);
}

/// An evaluation error discards even a builder-supplied completeness:
/// a FAIL backed by a rule that cannot run must never ship as FAIL.
#[test]
fn evaluation_error_discards_builder_completeness() {
    let registry = Arc::new(
        SpecRegistry::from_json(
            r#"{
                "IDX_SITEMAP_MISSING": {
                    "mode": "rule",
                    "rule": {
                        "predicates": [
                            { "predicate": "signal_true", "signal": "sitemap_present" }
                        ]
                    }
                }
            }"#,
            "inline",
        )
        .unwrap(),
    );
    let engine = GovernanceEngine::with_registry(MigrationPhase::Active, registry);

    let finding = Finding::new("IDX_SITEMAP_MISSING", "indexability", "t", Severity::Fail)
        .with_confidence(ConfidenceLevel::High)
        .with_proof(ProofCompleteness::Complete);
    let outcome = engine.govern_target(vec![finding], &EvidenceInventory::empty());

    let d = &outcome.decisions[0];
    assert_eq!(d.effective_proof_completeness, ProofCompleteness::Partial);
    assert!(!d.gate_satisfied);
    assert_eq!(outcome.findings[0].severity, Severity::Warning);
}
