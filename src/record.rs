//! The documentation record: a tagged union over the five documented kinds.
//!
//! A [`Record`] is built up by feeding it ordered `(key, value)` pairs via
//! [`Record::apply_value`]. Kind-specific keys are handled by the payload in
//! [`RecordData`]; keys no payload recognizes fall through to the shared
//! handling in this module (`synonyms`, `deprecated`). An unrecognized key
//! reports `false` without raising — the caller decides whether that is
//! fatal.

use serde::{Deserialize, Serialize};

use crate::information::InformationData;
use crate::object_type::ObjectTypeData;
use crate::procedure::ProcedureData;
use crate::script::ScriptData;
use crate::task::TaskData;

/// The kind of a documented construct. Fixed at construction, never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RecordKind {
    /// A documented type of object (e.g. `PlayerTag`).
    ObjectType,
    /// A documented script.
    Script,
    /// A documented procedure (compound `object.name` form).
    Procedure,
    /// A documented task.
    Task,
    /// A standalone information block.
    Information,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            RecordKind::ObjectType => "object type",
            RecordKind::Script => "script",
            RecordKind::Procedure => "procedure",
            RecordKind::Task => "task",
            RecordKind::Information => "information",
        };
        f.write_str(label)
    }
}

/// Kind-specific payload of a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RecordData {
    /// Payload for [`RecordKind::ObjectType`].
    ObjectType(ObjectTypeData),
    /// Payload for [`RecordKind::Script`].
    Script(ScriptData),
    /// Payload for [`RecordKind::Procedure`].
    Procedure(ProcedureData),
    /// Payload for [`RecordKind::Task`].
    Task(TaskData),
    /// Payload for [`RecordKind::Information`].
    Information(InformationData),
}

/// One documented construct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// The kind-specific payload.
    pub data: RecordData,
    /// Alternate canonical names declared via the shared `synonyms` tag.
    /// Validated against collisions during the resolve pass.
    pub synonyms: Vec<String>,
    /// Deprecation note from the shared `deprecated` tag, if any.
    pub deprecated: Option<String>,
    /// All lowercase name forms this record answers to. Filled at
    /// registration time; Procedure and Task carry both the compound and the
    /// bare mechanism form.
    pub name_forms: Vec<String>,
}

impl Record {
    /// Creates an empty record of the given kind.
    pub fn new(kind: RecordKind) -> Self {
        let data = match kind {
            RecordKind::ObjectType => RecordData::ObjectType(ObjectTypeData::default()),
            RecordKind::Script => RecordData::Script(ScriptData::default()),
            RecordKind::Procedure => RecordData::Procedure(ProcedureData::default()),
            RecordKind::Task => RecordData::Task(TaskData::default()),
            RecordKind::Information => RecordData::Information(InformationData::default()),
        };
        Record {
            data,
            synonyms: Vec::new(),
            deprecated: None,
            name_forms: Vec::new(),
        }
    }

    /// The kind of this record.
    pub fn kind(&self) -> RecordKind {
        match &self.data {
            RecordData::ObjectType(_) => RecordKind::ObjectType,
            RecordData::Script(_) => RecordKind::Script,
            RecordData::Procedure(_) => RecordKind::Procedure,
            RecordData::Task(_) => RecordKind::Task,
            RecordData::Information(_) => RecordKind::Information,
        }
    }

    /// The primary human-facing name.
    ///
    /// For Procedure and Task this is the full name, which is only derived
    /// at registration time (it depends on fields set by prior tag
    /// applications), so it is empty before the record is added to a
    /// registry.
    pub fn name(&self) -> &str {
        match &self.data {
            RecordData::ObjectType(d) => &d.type_name,
            RecordData::Script(d) => &d.script_name,
            RecordData::Procedure(d) => &d.full_name,
            RecordData::Task(d) => &d.full_name,
            RecordData::Information(d) => &d.info_name,
        }
    }

    /// The lowercase unique key for this record within its kind's mapping.
    pub fn canonical_name(&self) -> String {
        self.name().to_lowercase()
    }

    /// The long-form description, used for link checking and indexing.
    pub fn description(&self) -> &str {
        match &self.data {
            RecordData::ObjectType(d) => &d.description,
            RecordData::Script(d) => &d.description,
            RecordData::Procedure(d) => &d.description,
            RecordData::Task(d) => &d.description,
            RecordData::Information(d) => &d.description,
        }
    }

    /// Applies one `(key, value)` pair to this record.
    ///
    /// Keys match case-sensitively. Returns whether the key was recognized,
    /// either by the kind-specific payload or by the shared handling.
    pub fn apply_value(&mut self, key: &str, value: &str) -> bool {
        let recognized = match &mut self.data {
            RecordData::ObjectType(d) => d.apply(key, value),
            RecordData::Script(d) => d.apply(key, value),
            RecordData::Procedure(d) => d.apply(key, value),
            RecordData::Task(d) => d.apply(key, value),
            RecordData::Information(d) => d.apply(key, value),
        };
        if recognized {
            return true;
        }
        self.apply_shared(key, value)
    }

    /// Shared tag handling every kind falls back to.
    fn apply_shared(&mut self, key: &str, value: &str) -> bool {
        match key {
            "synonyms" => {
                self.synonyms
                    .extend(split_comma_list(value).into_iter().map(|s| s.to_lowercase()));
                true
            }
            "deprecated" => {
                self.deprecated = Some(value.to_string());
                true
            }
            _ => false,
        }
    }
}

/// Splits a comma-separated list value.
///
/// All whitespace is stripped from the value before splitting, not merely
/// trimmed per item: `"A, B ,C"` yields `["A", "B", "C"]`.
pub(crate) fn split_comma_list(value: &str) -> Vec<String> {
    let stripped: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    if stripped.is_empty() {
        return Vec::new();
    }
    stripped.split(',').map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_key_maps_for_every_kind() {
        for kind in [
            RecordKind::ObjectType,
            RecordKind::Script,
            RecordKind::Procedure,
            RecordKind::Task,
            RecordKind::Information,
        ]
        .iter()
        {
            let mut record = Record::new(*kind);
            assert!(record.apply_value("description", "some text"));
            assert_eq!(record.description(), "some text");
        }
    }

    #[test]
    fn test_identical_sequences_yield_identical_records() {
        let pairs = [
            ("name", "PlayerTag"),
            ("prefix", "PL"),
            ("base", "ObjectTag"),
            ("format", "pl@<uuid>"),
            ("description", "A player."),
        ];
        let mut a = Record::new(RecordKind::ObjectType);
        let mut b = Record::new(RecordKind::ObjectType);
        for (key, value) in pairs.iter() {
            a.apply_value(key, value);
            b.apply_value(key, value);
        }
        assert_eq!(a, b);
        assert_eq!(a.canonical_name(), "playertag");
        assert_eq!(b.canonical_name(), "playertag");
    }

    #[test]
    fn test_split_comma_list_strips_all_whitespace() {
        assert_eq!(split_comma_list("A, B ,C"), vec!["A", "B", "C"]);
        assert_eq!(split_comma_list("one two, three"), vec!["onetwo", "three"]);
        assert_eq!(split_comma_list(""), Vec::<String>::new());
        assert_eq!(split_comma_list("   "), Vec::<String>::new());
    }

    #[test]
    fn test_shared_synonyms_tag_applies_on_every_kind() {
        for kind in [
            RecordKind::ObjectType,
            RecordKind::Script,
            RecordKind::Procedure,
            RecordKind::Task,
            RecordKind::Information,
        ]
        .iter()
        {
            let mut record = Record::new(*kind);
            assert!(record.apply_value("synonyms", "Alias, OtherAlias"));
            assert_eq!(record.synonyms, vec!["alias", "otheralias"]);
        }
    }

    #[test]
    fn test_shared_deprecated_tag() {
        let mut record = Record::new(RecordKind::Script);
        assert!(record.apply_value("deprecated", "use NewScript instead"));
        assert_eq!(record.deprecated.as_deref(), Some("use NewScript instead"));
    }

    #[test]
    fn test_unrecognized_key_reports_false() {
        let mut record = Record::new(RecordKind::Task);
        assert!(!record.apply_value("nonsense", "value"));
        // The record is unchanged apart from defaults.
        assert_eq!(record, Record::new(RecordKind::Task));
    }

    #[test]
    fn test_keys_match_case_sensitively() {
        let mut record = Record::new(RecordKind::Script);
        assert!(!record.apply_value("Name", "MyScript"));
        assert!(record.apply_value("name", "MyScript"));
    }
}
