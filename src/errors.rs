//! Hard API errors for the documentation registry.
//!
//! Structural problems found while validating records are *not* errors in
//! this sense: they accumulate as plain strings in
//! [`DocRegistry::load_errors`](crate::DocRegistry) and never interrupt a
//! load. The variants here cover the two conditions a caller must handle in
//! control flow: key collisions at registration time, and calls made out of
//! phase order.

use thiserror::Error;

use crate::record::RecordKind;
use crate::registry::LoadPhase;

/// Errors that can occur when driving the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A record's canonical name is already taken within its kind's mapping.
    #[error("duplicate {kind} name: '{name}' is already registered")]
    DuplicateName {
        /// The kind whose mapping rejected the insert.
        kind: RecordKind,
        /// The canonical (lowercase) name that collided.
        name: String,
    },

    /// A phase-restricted operation was called out of order.
    #[error("registry is in the {actual} phase, but this operation requires the {expected} phase")]
    WrongPhase {
        /// The phase the operation requires.
        expected: LoadPhase,
        /// The phase the registry was actually in.
        actual: LoadPhase,
    },
}

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;
