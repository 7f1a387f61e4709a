//! A documented procedure.

use serde::{Deserialize, Serialize};

/// Payload for a documented procedure.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProcedureData {
    /// The full procedure name, `object.name`. Derived at registration time,
    /// after both fields have been set by prior tag applications.
    pub full_name: String,
    /// The object the procedure applies to.
    pub mech_object: String,
    /// The bare name of the procedure.
    pub mech_name: String,
    /// The input type.
    pub input: String,
    /// The long-form description.
    pub description: String,
    /// Manual examples, in order of first appearance.
    pub examples: Vec<String>,
}

impl ProcedureData {
    /// Applies one kind-specific key. Returns whether the key was recognized.
    pub(crate) fn apply(&mut self, key: &str, value: &str) -> bool {
        match key {
            "object" => {
                self.mech_object = value.to_string();
                true
            }
            "name" => {
                self.mech_name = value.to_string();
                true
            }
            "input" => {
                self.input = value.to_string();
                true
            }
            "description" => {
                self.description = value.to_string();
                true
            }
            "example" => {
                self.examples.push(value.to_string());
                true
            }
            _ => false,
        }
    }
}
