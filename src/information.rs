//! A standalone information block.

use serde::{Deserialize, Serialize};

/// Payload for a standalone information block.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InformationData {
    /// The name of the information block.
    pub info_name: String,
    /// The long-form description.
    pub description: String,
}

impl InformationData {
    /// Applies one kind-specific key. Returns whether the key was recognized.
    pub(crate) fn apply(&mut self, key: &str, value: &str) -> bool {
        match key {
            "name" => {
                self.info_name = value.to_string();
                true
            }
            "description" => {
                self.description = value.to_string();
                true
            }
            _ => false,
        }
    }
}
