use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fixed input file read from the working directory at startup.
pub const RECORD_FILE: &str = "me.json";

/// The parsed contents of `me.json`. The shape is deliberately untyped:
/// whatever fields the file carries flow straight into the templates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactRecord(Value);

impl ContactRecord {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("read contact record {}", path.display()))?;
        let value = serde_json::from_str(&raw)
            .with_context(|| format!("parse contact record {}", path.display()))?;
        Ok(Self(value))
    }

    /// Name used for the banner and animation; empty when absent.
    pub fn name(&self) -> &str {
        self.0.get("name").and_then(Value::as_str).unwrap_or_default()
    }

    pub fn value(&self) -> &Value {
        &self.0
    }

    /// Compact serialization, keys in source order, no trailing newline.
    pub fn to_compact_json(&self) -> anyhow::Result<String> {
        serde_json::to_string(&self.0).context("serialize contact record")
    }
}

impl From<Value> for ContactRecord {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;

    #[test]
    fn load_reads_record_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("me.json");
        fs::write(&path, r#"{"name":"Jo","title":"Engineer"}"#).unwrap();

        let record = ContactRecord::load(&path).unwrap();
        assert_eq!(record.name(), "Jo");
        assert_eq!(record.value()["title"], "Engineer");
    }

    #[test]
    fn load_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = ContactRecord::load(dir.path().join("me.json")).unwrap_err();
        assert!(err.to_string().contains("read contact record"));
    }

    #[test]
    fn load_invalid_json_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("me.json");
        fs::write(&path, "{ not json").unwrap();

        let err = ContactRecord::load(&path).unwrap_err();
        assert!(err.to_string().contains("parse contact record"));
    }

    #[test]
    fn compact_json_round_trips() {
        let value = json!({"name": "Jo", "skills": ["rust", "sql"], "years": 7});
        let record = ContactRecord::from(value.clone());
        let out = record.to_compact_json().unwrap();
        let parsed: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, value);
    }

    #[test]
    fn name_defaults_to_empty_when_absent() {
        let record = ContactRecord::from(json!({"title": "Engineer"}));
        assert_eq!(record.name(), "");
    }
}
