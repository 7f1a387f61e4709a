//! Cross-referenced, searchable documentation model for script annotations.
//!
//! This crate is the metadata resolution engine behind a documentation
//! generator for a scripting ecosystem: it accepts structured annotation
//! data (ordered key/value tag pairs attached to object types, scripts,
//! procedures, tasks, and standalone information blocks) and builds a
//! cross-referenced, searchable model. Reading annotation text from source
//! files and rendering output are the host's job; this crate owns the part
//! with real invariants — accumulation, resolution, validation, indexing.
//!
//! ## Pipeline
//!
//! 1. Create a [`Record`] per documented construct and feed it `(key, value)`
//!    pairs via [`Record::apply_value`].
//! 2. Register every record in a [`DocRegistry`] with
//!    [`DocRegistry::add`].
//! 3. Once loading is complete, run [`DocRegistry::resolve`]: wires type
//!    inheritance and implements relations, registers synonyms and alternate
//!    name forms as lookup keys, and accumulates every structural problem in
//!    [`DocRegistry::load_errors`] without ever halting.
//! 4. Run [`DocRegistry::build_search_index`] to file every record's text
//!    fragments into four relevance tiers for ranked lookup.
//!
//! Phase ordering is enforced by the registry itself: out-of-order calls
//! return [`RegistryError::WrongPhase`] rather than misbehaving.
//!
//! ## Modules
//!
//! - [`record`] - The record envelope and shared tag handling
//! - [`object_type`], [`script`], [`procedure`], [`task`], [`information`] -
//!   Kind-specific payloads and their key dispatch
//! - [`registry`] - The aggregate store, phases, and lookups
//! - [`resolve`] - The post-load resolve/validate pass
//! - [`search`] - The four-tier search index
//! - [`errors`] - Hard API errors

pub mod errors;
pub mod information;
pub mod object_type;
pub mod procedure;
pub mod record;
pub mod registry;
pub mod resolve;
pub mod script;
pub mod search;
pub mod task;

pub use errors::{RegistryError, RegistryResult};
pub use information::InformationData;
pub use object_type::ObjectTypeData;
pub use procedure::ProcedureData;
pub use record::{Record, RecordData, RecordKind};
pub use registry::{DocRegistry, KnownTag, LoadPhase, ROOT_ELEMENT_TAG, ROOT_OBJECT_TAG};
pub use resolve::BASE_CHAIN_DEPTH_LIMIT;
pub use script::ScriptData;
pub use search::{IndexEntry, SearchIndex};
pub use task::TaskData;

#[cfg(test)]
mod tests {
    mod integration;
    mod phases;
}
