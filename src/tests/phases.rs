//! Phase-ordering tests: the registry rejects out-of-order operations
//! instead of silently misbehaving.

use crate::errors::RegistryError;
use crate::record::{Record, RecordKind};
use crate::registry::{DocRegistry, LoadPhase};

fn loaded_registry() -> DocRegistry {
    let mut registry = DocRegistry::new();
    let mut script = Record::new(RecordKind::Script);
    script.apply_value("name", "WelcomeKit");
    script.apply_value("description", "d");
    registry.add(script).unwrap();
    registry
}

#[test]
fn test_phase_progression() {
    let mut registry = loaded_registry();
    assert_eq!(registry.phase(), LoadPhase::Loading);
    registry.resolve().unwrap();
    assert_eq!(registry.phase(), LoadPhase::Resolved);
    registry.build_search_index().unwrap();
    assert_eq!(registry.phase(), LoadPhase::Indexed);
}

#[test]
fn test_add_after_resolve_is_rejected() {
    let mut registry = loaded_registry();
    registry.resolve().unwrap();
    let err = registry.add(Record::new(RecordKind::Script)).unwrap_err();
    assert_eq!(
        err,
        RegistryError::WrongPhase {
            expected: LoadPhase::Loading,
            actual: LoadPhase::Resolved,
        }
    );
}

#[test]
fn test_resolve_twice_is_rejected() {
    let mut registry = loaded_registry();
    registry.resolve().unwrap();
    let err = registry.resolve().unwrap_err();
    assert_eq!(
        err,
        RegistryError::WrongPhase {
            expected: LoadPhase::Loading,
            actual: LoadPhase::Resolved,
        }
    );
}

#[test]
fn test_index_before_resolve_is_rejected() {
    let mut registry = loaded_registry();
    let err = registry.build_search_index().unwrap_err();
    assert_eq!(
        err,
        RegistryError::WrongPhase {
            expected: LoadPhase::Resolved,
            actual: LoadPhase::Loading,
        }
    );
}

#[test]
fn test_wrong_phase_error_message() {
    let err = RegistryError::WrongPhase {
        expected: LoadPhase::Resolved,
        actual: LoadPhase::Loading,
    };
    assert_eq!(
        err.to_string(),
        "registry is in the loading phase, but this operation requires the resolved phase"
    );
}
