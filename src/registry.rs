//! The aggregate document store.
//!
//! The registry owns every [`Record`], one mapping per kind from canonical
//! lowercase name to record, plus per-kind alias maps (synonyms and
//! alternate name forms) that resolve to the same records. A registry moves
//! through three phases:
//!
//! - **Loading** — records are applied and [`add`](DocRegistry::add)ed.
//! - **Resolved** — after [`resolve`](DocRegistry::resolve): cross-references
//!   are wired and structural errors accumulated in `load_errors`.
//! - **Indexed** — after
//!   [`build_search_index`](DocRegistry::build_search_index).
//!
//! The phase is an explicit field rather than a call-order convention, so
//! ordering violations surface as [`RegistryError::WrongPhase`] instead of
//! silent misbehavior.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::{RegistryError, RegistryResult};
use crate::record::{Record, RecordData, RecordKind};

/// Reserved canonical name of the root object-tag type.
pub const ROOT_OBJECT_TAG: &str = "objecttag";
/// Reserved canonical name of the root element-tag type.
pub const ROOT_ELEMENT_TAG: &str = "elementtag";

/// The lifecycle phase of a [`DocRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadPhase {
    /// Records are still being registered.
    Loading,
    /// All cross-references are wired and validation has run.
    Resolved,
    /// The search index has been built.
    Indexed,
}

impl std::fmt::Display for LoadPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            LoadPhase::Loading => "loading",
            LoadPhase::Resolved => "resolved",
            LoadPhase::Indexed => "indexed",
        };
        f.write_str(label)
    }
}

/// One tag known to the host's tag registry, supplied so the resolve pass
/// can attach tags to the object types that own them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnownTag {
    /// The full tag name, e.g. `PlayerTag.money`.
    pub name: String,
}

impl KnownTag {
    /// Creates a known tag from its full name.
    pub fn new(name: impl Into<String>) -> Self {
        KnownTag { name: name.into() }
    }

    /// The owner-type part before the first dot, lowercased.
    /// Empty if the tag name has no dot.
    pub fn owner(&self) -> String {
        match self.name.split_once('.') {
            Some((before, _)) => before.to_lowercase(),
            None => String::new(),
        }
    }

    /// The tag's suffix after the owner prefix, lowercased.
    pub fn suffix(&self) -> String {
        match self.name.split_once('.') {
            Some((_, after)) => after.to_lowercase(),
            None => self.name.to_lowercase(),
        }
    }
}

/// The aggregate documentation store: one mapping per kind plus the
/// accumulated load-error list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocRegistry {
    /// Object types by canonical name.
    pub object_types: BTreeMap<String, Record>,
    /// Scripts by canonical name.
    pub scripts: BTreeMap<String, Record>,
    /// Procedures by canonical (full) name.
    pub procedures: BTreeMap<String, Record>,
    /// Tasks by canonical name.
    pub tasks: BTreeMap<String, Record>,
    /// Information blocks by canonical name.
    pub information: BTreeMap<String, Record>,
    /// Canonical name of the root object-tag type, set as a side effect of
    /// registering a type named `objecttag`.
    pub object_tag_type: Option<String>,
    /// Canonical name of the root element-tag type, set as a side effect of
    /// registering a type named `elementtag`.
    pub element_tag_type: Option<String>,
    /// Tags known to the host, scanned during resolve to populate each
    /// object type's `sub_tags`.
    pub known_tags: Vec<KnownTag>,
    /// Ordered human-readable diagnostics accumulated by the resolve pass.
    /// Never fatal; the host decides whether to abort a build.
    pub load_errors: Vec<String>,
    /// Per-kind alias maps: alternate lookup key to canonical name.
    /// Populated during resolve from synonyms and alternate name forms.
    pub(crate) aliases: BTreeMap<RecordKind, BTreeMap<String, String>>,
    phase: LoadPhase,
}

impl Default for DocRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl DocRegistry {
    /// Creates an empty registry in the loading phase.
    pub fn new() -> Self {
        DocRegistry {
            object_types: BTreeMap::new(),
            scripts: BTreeMap::new(),
            procedures: BTreeMap::new(),
            tasks: BTreeMap::new(),
            information: BTreeMap::new(),
            object_tag_type: None,
            element_tag_type: None,
            known_tags: Vec::new(),
            load_errors: Vec::new(),
            aliases: BTreeMap::new(),
            phase: LoadPhase::Loading,
        }
    }

    /// The registry's current lifecycle phase.
    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub(crate) fn set_phase(&mut self, phase: LoadPhase) {
        self.phase = phase;
    }

    /// Returns `WrongPhase` unless the registry is in `expected`.
    pub(crate) fn require_phase(&self, expected: LoadPhase) -> RegistryResult<()> {
        if self.phase != expected {
            return Err(RegistryError::WrongPhase {
                expected,
                actual: self.phase,
            });
        }
        Ok(())
    }

    /// Registers one record.
    ///
    /// Derives the registration-time name fields (a procedure's
    /// `object.name` full name, a task's full name, and the lowercase name
    /// forms used as lookup keys), then inserts the record under its
    /// canonical name. Fails with [`RegistryError::DuplicateName`] if the
    /// name is already taken within the kind's mapping, and with
    /// [`RegistryError::WrongPhase`] once loading has completed.
    pub fn add(&mut self, mut record: Record) -> RegistryResult<()> {
        self.require_phase(LoadPhase::Loading)?;
        match &mut record.data {
            RecordData::Procedure(d) => {
                d.full_name = format!("{}.{}", d.mech_object, d.mech_name);
            }
            RecordData::Task(d) => {
                d.full_name = d.mech_name.clone();
            }
            _ => {}
        }
        let canonical = record.canonical_name();
        record.name_forms = match &record.data {
            RecordData::Procedure(d) => {
                vec![d.full_name.to_lowercase(), d.mech_name.to_lowercase()]
            }
            RecordData::Task(d) => {
                vec![d.full_name.to_lowercase(), d.mech_name.to_lowercase()]
            }
            _ => vec![canonical.clone()],
        };
        let kind = record.kind();
        let map = self.map_for_mut(kind);
        if map.contains_key(&canonical) {
            return Err(RegistryError::DuplicateName {
                kind,
                name: canonical,
            });
        }
        map.insert(canonical.clone(), record);
        if kind == RecordKind::ObjectType {
            if canonical == ROOT_OBJECT_TAG {
                self.object_tag_type = Some(canonical);
            } else if canonical == ROOT_ELEMENT_TAG {
                self.element_tag_type = Some(canonical);
            }
        }
        Ok(())
    }

    /// Supplies the host's known-tag list, consulted during resolve.
    pub fn set_known_tags(&mut self, tags: Vec<KnownTag>) {
        self.known_tags = tags;
    }

    /// Looks up a record of one kind by any of its names.
    ///
    /// The name is lowercased, checked against the kind's canonical mapping,
    /// then against its aliases (synonyms and alternate name forms, which
    /// are only in place once the registry has been resolved).
    pub fn find(&self, kind: RecordKind, name: &str) -> Option<&Record> {
        let lower = name.to_lowercase();
        let map = self.map_for(kind);
        if let Some(record) = map.get(&lower) {
            return Some(record);
        }
        let canonical = self.aliases.get(&kind)?.get(&lower)?;
        map.get(canonical)
    }

    /// Looks up a record of any kind by any of its names.
    pub fn find_any(&self, name: &str) -> Option<&Record> {
        ALL_KINDS.iter().find_map(|kind| self.find(*kind, name))
    }

    /// Iterates every record across all kinds.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.object_types
            .values()
            .chain(self.scripts.values())
            .chain(self.procedures.values())
            .chain(self.tasks.values())
            .chain(self.information.values())
    }

    /// Total number of registered records across all kinds.
    pub fn len(&self) -> usize {
        self.object_types.len()
            + self.scripts.len()
            + self.procedures.len()
            + self.tasks.len()
            + self.information.len()
    }

    /// Whether the registry holds no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The mapping for one kind.
    pub fn map_for(&self, kind: RecordKind) -> &BTreeMap<String, Record> {
        match kind {
            RecordKind::ObjectType => &self.object_types,
            RecordKind::Script => &self.scripts,
            RecordKind::Procedure => &self.procedures,
            RecordKind::Task => &self.tasks,
            RecordKind::Information => &self.information,
        }
    }

    pub(crate) fn map_for_mut(&mut self, kind: RecordKind) -> &mut BTreeMap<String, Record> {
        match kind {
            RecordKind::ObjectType => &mut self.object_types,
            RecordKind::Script => &mut self.scripts,
            RecordKind::Procedure => &mut self.procedures,
            RecordKind::Task => &mut self.tasks,
            RecordKind::Information => &mut self.information,
        }
    }
}

/// All record kinds, in the order cross-kind lookups consult them.
pub(crate) const ALL_KINDS: [RecordKind; 5] = [
    RecordKind::ObjectType,
    RecordKind::Script,
    RecordKind::Procedure,
    RecordKind::Task,
    RecordKind::Information,
];
