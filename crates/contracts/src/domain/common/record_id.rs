use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Server-assigned identifier.
///
/// The gateway hands ids out as JSON numbers on some endpoints and as strings
/// on others (`store_id: "3"` next to `id: 3`), so the id is kept in its
/// textual form and compared as text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "Value", into = "String")]
pub struct RecordId(String);

impl RecordId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Value> for RecordId {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => RecordId::new(s),
            Value::Number(n) => RecordId(n.to_string()),
            _ => RecordId::default(),
        }
    }
}

impl From<RecordId> for String {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        RecordId::new(value)
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        RecordId(value.to_string())
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numeric_and_textual_ids_compare_equal() {
        let a: RecordId = serde_json::from_value(json!(3)).unwrap();
        let b: RecordId = serde_json::from_value(json!("3")).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "3");
    }

    #[test]
    fn null_id_is_empty() {
        let id: RecordId = serde_json::from_value(json!(null)).unwrap();
        assert!(id.is_empty());
    }
}
