//! Pure evaluation of proof profiles against an evidence inventory.

use siteaudit_core::errors::EvaluationError;
use siteaudit_core::types::{EvidenceInventory, ProofCompleteness, SignalValue};

use crate::spec::{CompletenessRule, Predicate, ProofProfile};

/// Compute proof completeness for one finding code.
///
/// Pure: no I/O, no clock, no randomness. Identical inputs always yield
/// identical output. Static profiles ignore the inventory entirely.
/// Errors are reported to the caller and must never abort the audit.
pub fn evaluate(
    code: &str,
    inventory: &EvidenceInventory,
    profile: &ProofProfile,
) -> Result<ProofCompleteness, EvaluationError> {
    match profile {
        ProofProfile::Static { value } => Ok(*value),
        ProofProfile::Rule { rule } => evaluate_rule(code, inventory, rule),
    }
}

fn evaluate_rule(
    code: &str,
    inventory: &EvidenceInventory,
    rule: &CompletenessRule,
) -> Result<ProofCompleteness, EvaluationError> {
    if rule.predicates.is_empty() {
        return Err(EvaluationError::EmptyRule {
            code: code.to_string(),
        });
    }

    let complete_min = rule.effective_complete_min();
    if complete_min > rule.predicates.len() {
        return Err(EvaluationError::ThresholdOutOfRange {
            code: code.to_string(),
            threshold: complete_min,
            predicates: rule.predicates.len(),
        });
    }

    let mut satisfied = 0usize;
    for predicate in &rule.predicates {
        if check_predicate(code, inventory, predicate)? {
            satisfied += 1;
        }
    }

    if satisfied >= complete_min {
        Ok(ProofCompleteness::Complete)
    } else if satisfied >= rule.effective_partial_min() {
        Ok(ProofCompleteness::Partial)
    } else {
        Ok(ProofCompleteness::None)
    }
}

fn check_predicate(
    code: &str,
    inventory: &EvidenceInventory,
    predicate: &Predicate,
) -> Result<bool, EvaluationError> {
    match predicate {
        Predicate::MinCount { kind, min } => Ok(inventory.count_of_kind(*kind) >= *min),
        Predicate::FieldPresent { field } => Ok(inventory.has_field(field)),
        Predicate::FieldEquals { field, value } => {
            Ok(inventory.field(field).is_some_and(|i| i.value == *value))
        }
        Predicate::SignalTrue { signal } => match inventory.signal(signal) {
            None => Err(EvaluationError::SignalMissing {
                code: code.to_string(),
                signal: signal.clone(),
            }),
            Some(SignalValue::Bool(b)) => Ok(*b),
            Some(_) => Err(EvaluationError::SignalTypeMismatch {
                code: code.to_string(),
                signal: signal.clone(),
            }),
        },
    }
}
