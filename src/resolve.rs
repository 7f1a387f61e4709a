//! The resolve pass: cross-reference wiring and structural validation.
//!
//! Runs once, after every record from every source has been registered.
//! Every check is accumulative — the pass never stops early, and a record
//! with errors stays in the registry and keeps participating in resolution
//! and indexing. The stages, each order-independent across records:
//!
//! 1. Required-field checks per kind.
//! 2. Alias registration: alternate name forms and declared synonyms, with
//!    collision diagnostics for synonyms.
//! 3. Object-type wiring: base/implements resolution with the symmetric
//!    `extended_by` back-relation, naming-convention check, prefix
//!    uniqueness, sub-tag attachment, bounded-depth cycle detection.
//! 4. Linkable-text scan of descriptions for `<@link category name>` markup.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::RegistryResult;
use crate::object_type::ObjectTypeData;
use crate::record::{Record, RecordData, RecordKind};
use crate::registry::{DocRegistry, LoadPhase, ALL_KINDS};

/// How many base-type links the cycle walk follows before declaring a
/// recursive loop. Deep enough to tolerate legitimate hierarchies.
pub const BASE_CHAIN_DEPTH_LIMIT: usize = 20;

/// Inline cross-reference markup: `<@link category name>`.
static LINK_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<@link\s+(\w+)\s+([^>]+)>").expect("invalid link pattern"));

impl DocRegistry {
    /// Runs the resolve pass over the full registry.
    ///
    /// Requires the loading phase; moves the registry to the resolved phase.
    /// Structural problems accumulate in `load_errors` and never fail this
    /// call — the only error is calling it out of phase.
    pub fn resolve(&mut self) -> RegistryResult<()> {
        self.require_phase(LoadPhase::Loading)?;
        self.check_required_fields();
        self.register_aliases();
        self.resolve_object_types();
        self.check_prefix_uniqueness();
        self.check_linkable_text();
        self.set_phase(LoadPhase::Resolved);
        Ok(())
    }

    /// Stage 1: every `RequiredFields` entry must be non-empty.
    fn check_required_fields(&mut self) {
        let mut errors = Vec::new();
        for record in self.records() {
            let display = record.name().to_string();
            for (field, value) in required_fields(record) {
                if value.is_empty() {
                    errors.push(format!(
                        "{} '{}' is missing required field '{}'.",
                        kind_title(record.kind()),
                        display,
                        field
                    ));
                }
            }
        }
        self.load_errors.extend(errors);
    }

    /// Stage 2: register alternate name forms and synonyms as lookup keys.
    ///
    /// A synonym colliding with an existing canonical name or a
    /// previously-registered alias of the same kind is a load error, not an
    /// overwrite. Alternate name forms (a procedure's bare mechanism name)
    /// are first-come-first-served without a diagnostic.
    fn register_aliases(&mut self) {
        let mut errors = Vec::new();
        for kind in ALL_KINDS.iter() {
            let entries: Vec<(String, String, Vec<String>, Vec<String>)> = self
                .map_for(*kind)
                .values()
                .map(|record| {
                    (
                        record.canonical_name(),
                        record.name().to_string(),
                        record.name_forms.clone(),
                        record.synonyms.clone(),
                    )
                })
                .collect();
            for (canonical, display, name_forms, synonyms) in entries {
                for form in name_forms {
                    if form != canonical {
                        self.try_register_alias(*kind, &form, &canonical);
                    }
                }
                for synonym in synonyms {
                    if !self.try_register_alias(*kind, &synonym, &canonical) {
                        errors.push(format!(
                            "{} '{}' declares synonym '{}' which is already in use.",
                            kind_title(*kind),
                            display,
                            synonym
                        ));
                    }
                }
            }
        }
        self.load_errors.extend(errors);
    }

    /// Registers one alias key unless it is already taken. Returns whether
    /// the alias now resolves to `canonical`.
    fn try_register_alias(&mut self, kind: RecordKind, alias: &str, canonical: &str) -> bool {
        if self.map_for(kind).contains_key(alias) {
            return false;
        }
        let kind_aliases = self.aliases.entry(kind).or_insert_with(BTreeMap::new);
        match kind_aliases.get(alias) {
            Some(existing) => existing == canonical,
            None => {
                kind_aliases.insert(alias.to_string(), canonical.to_string());
                true
            }
        }
    }

    /// Stage 3: object-type cross-reference wiring and structural checks.
    fn resolve_object_types(&mut self) {
        let names: Vec<String> = self.object_types.keys().cloned().collect();
        let known_tags = self.known_tags.clone();
        let mut errors = Vec::new();

        for name in &names {
            let (type_name, prefix, base_decl, implements_decl) =
                match object_data(&self.object_types, name) {
                    Some(data) => (
                        data.type_name.clone(),
                        data.prefix.clone(),
                        data.base_type_name.clone(),
                        data.implements_names.clone(),
                    ),
                    None => continue,
                };

            // Base resolution and back-relation. An empty base was already
            // reported as a missing field.
            let base_lower = base_decl.to_lowercase();
            if !base_decl.is_empty() && base_lower != "none" {
                if self.object_types.contains_key(&base_lower) {
                    if let Some(data) = object_data_mut(&mut self.object_types, name) {
                        data.base_type = Some(base_lower.clone());
                    }
                    if let Some(base) = object_data_mut(&mut self.object_types, &base_lower) {
                        base.extended_by.push(name.clone());
                    }
                } else {
                    errors.push(format!(
                        "Object type '{}' specifies base type '{}' which is invalid.",
                        type_name, base_decl
                    ));
                }
            }

            // Implements resolution, symmetric back-relation.
            for implement in &implements_decl {
                let implement_lower = implement.to_lowercase();
                if implement_lower == "none" {
                    continue;
                }
                if self.object_types.contains_key(&implement_lower) {
                    if let Some(data) = object_data_mut(&mut self.object_types, name) {
                        data.implements.push(implement_lower.clone());
                    }
                    if let Some(target) = object_data_mut(&mut self.object_types, &implement_lower)
                    {
                        target.extended_by.push(name.clone());
                    }
                } else {
                    errors.push(format!(
                        "Object type '{}' specifies implement type '{}' which is invalid.",
                        type_name, implement
                    ));
                }
            }

            // Naming convention: a name ending in neither suffix is only
            // valid for fully detached pseudo-types.
            if !type_name.ends_with("Tag")
                && !type_name.ends_with("Object")
                && (prefix != "none" || base_lower != "none")
            {
                errors.push(format!(
                    "Object type '{}' has an unrecognized name format.",
                    type_name
                ));
            }

            // Attach tags whose declared owner matches this type.
            for tag in &known_tags {
                if tag.owner() == *name {
                    if let Some(data) = object_data_mut(&mut self.object_types, name) {
                        data.sub_tags.insert(tag.suffix(), tag.clone());
                    }
                }
            }

            // Bounded cycle walk up the base chain. Reports the last type
            // visited before the bound, not the originating type — matching
            // the reference behavior downstream tooling relies on.
            let mut cursor = object_data(&self.object_types, name)
                .and_then(|data| data.base_type.clone());
            for _ in 0..BASE_CHAIN_DEPTH_LIMIT {
                match &cursor {
                    None => break,
                    Some(current) => {
                        let next = object_data(&self.object_types, current)
                            .map(|data| data.base_type_name.to_lowercase());
                        cursor = next.filter(|base| self.object_types.contains_key(base));
                    }
                }
            }
            if let Some(stuck) = cursor {
                if let Some(data) = object_data(&self.object_types, &stuck) {
                    errors.push(format!(
                        "Object type '{}' has base type '{}' which appears to be a recursive loop.",
                        data.type_name, data.base_type_name
                    ));
                }
            }
        }

        self.load_errors.extend(errors);
    }

    /// Stage 3d: two distinct object types never share a non-`none` prefix.
    ///
    /// Checked once globally, grouping by prefix, so a colliding pair yields
    /// exactly one diagnostic. Iteration is over the name-keyed map, so the
    /// diagnostic names the alphabetically-later type.
    fn check_prefix_uniqueness(&mut self) {
        let mut seen: BTreeMap<String, String> = BTreeMap::new();
        let mut errors = Vec::new();
        for record in self.object_types.values() {
            if let RecordData::ObjectType(data) = &record.data {
                if data.prefix.is_empty() || data.prefix == "none" {
                    continue;
                }
                match seen.get(&data.prefix) {
                    Some(first) => {
                        errors.push(format!(
                            "Object type '{}' uses prefix '{}' which is also used by '{}'.",
                            data.type_name, data.prefix, first
                        ));
                    }
                    None => {
                        seen.insert(data.prefix.clone(), data.type_name.clone());
                    }
                }
            }
        }
        self.load_errors.extend(errors);
    }

    /// Stage 4: every inline cross-reference must name a resolvable record
    /// or a recognized external category.
    fn check_linkable_text(&mut self) {
        let texts: Vec<(RecordKind, String, String)> = self
            .records()
            .filter(|record| !record.description().is_empty())
            .map(|record| {
                (
                    record.kind(),
                    record.name().to_string(),
                    record.description().to_string(),
                )
            })
            .collect();

        let mut errors = Vec::new();
        for (kind, display, text) in texts {
            for capture in LINK_PATTERN.captures_iter(&text) {
                let category = capture[1].to_lowercase();
                let target = capture[2].trim();
                let target_kind = match category.as_str() {
                    "objecttype" => RecordKind::ObjectType,
                    "script" => RecordKind::Script,
                    "procedure" => RecordKind::Procedure,
                    "task" => RecordKind::Task,
                    "info" | "information" => RecordKind::Information,
                    // External references are not resolvable by design.
                    "url" => continue,
                    _ => {
                        errors.push(format!(
                            "{} '{}' uses unknown link category '{}'.",
                            kind_title(kind),
                            display,
                            category
                        ));
                        continue;
                    }
                };
                if self.find(target_kind, target).is_none() {
                    errors.push(format!(
                        "{} '{}' links to {} '{}' which does not exist.",
                        kind_title(kind),
                        display,
                        category,
                        target
                    ));
                }
            }
        }
        self.load_errors.extend(errors);
    }
}

/// Kind label with sentence-initial capitalization, for diagnostics.
pub(crate) fn kind_title(kind: RecordKind) -> &'static str {
    match kind {
        RecordKind::ObjectType => "Object type",
        RecordKind::Script => "Script",
        RecordKind::Procedure => "Procedure",
        RecordKind::Task => "Task",
        RecordKind::Information => "Information",
    }
}

/// The kind-specific list of required fields and their current values.
fn required_fields(record: &Record) -> Vec<(&'static str, &str)> {
    match &record.data {
        RecordData::ObjectType(d) => vec![
            ("name", d.type_name.as_str()),
            ("prefix", d.prefix.as_str()),
            ("base", d.base_type_name.as_str()),
            ("format", d.format.as_str()),
            ("description", d.description.as_str()),
        ],
        RecordData::Script(d) => vec![
            ("name", d.script_name.as_str()),
            ("description", d.description.as_str()),
        ],
        RecordData::Procedure(d) => vec![
            ("object", d.mech_object.as_str()),
            ("name", d.mech_name.as_str()),
            ("input", d.input.as_str()),
            ("description", d.description.as_str()),
        ],
        RecordData::Task(d) => vec![
            ("name", d.mech_name.as_str()),
            ("input", d.input.as_str()),
            ("description", d.description.as_str()),
        ],
        RecordData::Information(d) => vec![
            ("name", d.info_name.as_str()),
            ("description", d.description.as_str()),
        ],
    }
}

fn object_data<'a>(
    map: &'a BTreeMap<String, Record>,
    name: &str,
) -> Option<&'a ObjectTypeData> {
    match map.get(name) {
        Some(Record {
            data: RecordData::ObjectType(data),
            ..
        }) => Some(data),
        _ => None,
    }
}

fn object_data_mut<'a>(
    map: &'a mut BTreeMap<String, Record>,
    name: &str,
) -> Option<&'a mut ObjectTypeData> {
    match map.get_mut(name) {
        Some(Record {
            data: RecordData::ObjectType(data),
            ..
        }) => Some(data),
        _ => None,
    }
}
