//! The tiered search index.
//!
//! Built after validation, over the fully-resolved registry. Every record
//! files its text fragments into four relevance tiers, highest precedence
//! first: perfect matches, strongs, decents, backups. The index is additive
//! and multi-valued — each tier holds every contributed fragment, not
//! deduplicated — and is write-only during this phase; ranking and query
//! logic belong to the host.

use serde::{Deserialize, Serialize};

use crate::errors::RegistryResult;
use crate::record::{Record, RecordData, RecordKind};
use crate::registry::{DocRegistry, LoadPhase};

/// One indexed text fragment, tagged with the record that contributed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    /// The contributed fragment.
    pub text: String,
    /// Kind of the contributing record.
    pub kind: RecordKind,
    /// Canonical name of the contributing record.
    pub canonical_name: String,
}

/// The four-tier search index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchIndex {
    /// Short identifying tokens expected to match a query exactly.
    pub perfect_matches: Vec<IndexEntry>,
    /// Primary identifying strings (prefixes, owning-object names).
    pub strongs: Vec<IndexEntry>,
    /// Descriptive or secondary text (descriptions, input types).
    pub decents: Vec<IndexEntry>,
    /// Supplementary, lower-signal text (formats, usage examples).
    pub backups: Vec<IndexEntry>,
}

impl SearchIndex {
    /// Total number of entries across all four tiers.
    pub fn len(&self) -> usize {
        self.perfect_matches.len() + self.strongs.len() + self.decents.len() + self.backups.len()
    }

    /// Whether no record contributed anything.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push(tier: &mut Vec<IndexEntry>, record: &Record, text: &str) {
        if text.is_empty() {
            return;
        }
        tier.push(IndexEntry {
            text: text.to_string(),
            kind: record.kind(),
            canonical_name: record.canonical_name(),
        });
    }

    /// Base contribution shared by every record regardless of kind: all
    /// name forms are perfect matches, declared synonyms are strongs.
    fn add_base(&mut self, record: &Record) {
        for form in &record.name_forms {
            Self::push(&mut self.perfect_matches, record, form);
        }
        for synonym in &record.synonyms {
            Self::push(&mut self.strongs, record, synonym);
        }
    }

    /// Kind-specific contributions, layered on top of the base.
    fn add_record(&mut self, record: &Record) {
        self.add_base(record);
        match &record.data {
            RecordData::ObjectType(d) => {
                Self::push(&mut self.strongs, record, &d.prefix);
                Self::push(&mut self.decents, record, &d.description);
                Self::push(&mut self.backups, record, &d.format);
            }
            RecordData::Script(d) => {
                Self::push(&mut self.decents, record, &d.description);
            }
            RecordData::Procedure(d) => {
                Self::push(&mut self.perfect_matches, record, &d.mech_name);
                Self::push(&mut self.strongs, record, &d.mech_object);
                Self::push(&mut self.decents, record, &d.input);
                Self::push(&mut self.decents, record, &d.description);
            }
            RecordData::Task(d) => {
                Self::push(&mut self.perfect_matches, record, &d.mech_name);
                Self::push(&mut self.decents, record, &d.input);
                Self::push(&mut self.decents, record, &d.description);
                for usage in &d.usages {
                    Self::push(&mut self.backups, record, usage);
                }
            }
            RecordData::Information(d) => {
                Self::push(&mut self.decents, record, &d.description);
            }
        }
    }
}

impl DocRegistry {
    /// Walks every finalized record and builds the four-tier search index.
    ///
    /// Requires the resolved phase; moves the registry to the indexed phase.
    pub fn build_search_index(&mut self) -> RegistryResult<SearchIndex> {
        self.require_phase(LoadPhase::Resolved)?;
        let mut index = SearchIndex::default();
        for record in self.records() {
            index.add_record(record);
        }
        self.set_phase(LoadPhase::Indexed);
        Ok(index)
    }
}
