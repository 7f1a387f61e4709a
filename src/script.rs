//! A documented script.

use serde::{Deserialize, Serialize};

/// Payload for a documented script.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScriptData {
    /// The name of the script.
    pub script_name: String,
    /// The long-form description.
    pub description: String,
    /// The download link, if any.
    pub download: String,
}

impl ScriptData {
    /// Applies one kind-specific key. Returns whether the key was recognized.
    pub(crate) fn apply(&mut self, key: &str, value: &str) -> bool {
        match key {
            "name" => {
                self.script_name = value.to_string();
                true
            }
            "description" => {
                self.description = value.to_string();
                true
            }
            "download" => {
                self.download = value.to_string();
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::record::{Record, RecordData, RecordKind};

    #[test]
    fn test_script_keys() {
        let mut record = Record::new(RecordKind::Script);
        assert!(record.apply_value("name", "WelcomeKit"));
        assert!(record.apply_value("description", "Gives new players a kit."));
        assert!(record.apply_value("download", "https://example.com/kit"));
        match &record.data {
            RecordData::Script(d) => {
                assert_eq!(d.script_name, "WelcomeKit");
                assert_eq!(d.download, "https://example.com/kit");
            }
            _ => panic!("not a script"),
        }
        assert_eq!(record.canonical_name(), "welcomekit");
    }
}
