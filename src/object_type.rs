//! A documented type of object.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::record::split_comma_list;
use crate::registry::KnownTag;

/// Payload for a documented object type.
///
/// The relationship fields (`base_type`, `implements`, `extended_by`,
/// `sub_tags`) are derived state: they start empty and are populated only
/// during the resolve pass, as canonical-name links into the registry rather
/// than owned references.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ObjectTypeData {
    /// The name of the object type.
    pub type_name: String,
    /// The object identity prefix for this type, lowercased at assignment.
    pub prefix: String,
    /// The declared name of the base type (`"none"` for roots).
    pub base_type_name: String,
    /// Canonical name of the resolved base type, if resolution succeeded.
    pub base_type: Option<String>,
    /// A human-readable explanation of the identity format.
    pub format: String,
    /// The long-form description.
    pub description: String,
    /// Declared names of other types or pseudo-types implemented by this type.
    pub implements_names: Vec<String>,
    /// Canonical names of the resolved implemented types.
    pub implements: Vec<String>,
    /// Canonical names of types whose base or implements resolves to this
    /// type. Derived back-relation, recomputed during every resolve.
    pub extended_by: Vec<String>,
    /// Tags owned directly by this type, keyed by the tag's suffix after the
    /// owner prefix. Populated from the host-supplied known-tag list.
    pub sub_tags: BTreeMap<String, KnownTag>,
    /// The tag base component for generated examples, like `player` for
    /// `PlayerTag`.
    pub example_tag_base: String,
    /// The object string for generated adjust examples, if mismatched from
    /// the tag base, like `<player>` for `PlayerTag`.
    pub example_adjust_object: Option<String>,
    /// Example text blocks for tag return example generation, in order of
    /// first appearance.
    pub example_for_returns: Vec<String>,
    /// Randomly selectable example values of this object type.
    pub example_values: Vec<String>,
    /// Information about matchable options for this type.
    pub matchable: String,
}

impl ObjectTypeData {
    /// Applies one kind-specific key. Returns whether the key was recognized.
    pub(crate) fn apply(&mut self, key: &str, value: &str) -> bool {
        match key {
            "name" => {
                self.type_name = value.to_string();
                true
            }
            "prefix" => {
                self.prefix = value.to_lowercase();
                true
            }
            "base" => {
                self.base_type_name = value.to_string();
                true
            }
            "format" => {
                self.format = value.to_string();
                true
            }
            "description" => {
                self.description = value.to_string();
                true
            }
            "implements" => {
                self.implements_names = split_comma_list(value);
                true
            }
            "exampletagbase" => {
                self.example_tag_base = value.to_string();
                if self.example_adjust_object.is_none() {
                    self.example_adjust_object = Some(format!("<{}>", self.example_tag_base));
                }
                true
            }
            "exampleadjustobject" => {
                self.example_adjust_object = Some(value.to_string());
                true
            }
            "examplevalues" => {
                self.example_values = split_comma_list(value);
                true
            }
            "exampleforreturns" => {
                self.example_for_returns.push(value.to_string());
                true
            }
            "matchable" => {
                self.matchable = value.to_string();
                true
            }
            _ => false,
        }
    }
}
