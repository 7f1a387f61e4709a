//! A documented task.

use serde::{Deserialize, Serialize};

/// Payload for a documented task.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TaskData {
    /// The full task name. Equals `mech_name` (no compound form), but the
    /// task still exposes both the full and bare forms as lookup keys for
    /// symmetry with procedures. Derived at registration time.
    pub full_name: String,
    /// The name of the task.
    pub mech_name: String,
    /// The input type.
    pub input: String,
    /// The long-form description.
    pub description: String,
    /// Sample usages, in order of first appearance.
    pub usages: Vec<String>,
    /// Whether the task must be injected.
    pub must_injected: bool,
}

impl TaskData {
    /// Applies one kind-specific key. Returns whether the key was recognized.
    pub(crate) fn apply(&mut self, key: &str, value: &str) -> bool {
        match key {
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
            "usage" => {
                self.usages.push(value.to_string());
                true
            }
            // Only the literal "true" (trimmed, case-insensitive) is truthy;
            // malformed values silently become false.
            "MustInjected" => {
                self.must_injected = value.trim().eq_ignore_ascii_case("true");
                true
            }
            _ => false,
        }
    }
}
