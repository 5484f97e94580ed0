//! Unwrapping of list responses.
//!
//! List endpoints answer either with a bare JSON array or with an envelope
//! `{ "data": [...] }`; an object without `data` counts as an empty list.

use serde::de::DeserializeOwned;
use serde_json::Value;

pub fn unwrap_list<T: DeserializeOwned>(value: Value) -> Result<Vec<T>, serde_json::Error> {
    match value {
        Value::Array(_) => serde_json::from_value(value),
        Value::Object(mut map) => match map.remove("data") {
            Some(data @ Value::Array(_)) => serde_json::from_value(data),
            _ => Ok(Vec::new()),
        },
        _ => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bare_array() {
        let items: Vec<u32> = unwrap_list(json!([1, 2])).unwrap();
        assert_eq!(items, vec![1, 2]);
    }

    #[test]
    fn test_data_envelope() {
        let items: Vec<u32> = unwrap_list(json!({"data": [3], "status": "ok"})).unwrap();
        assert_eq!(items, vec![3]);
    }

    #[test]
    fn test_missing_or_null_data() {
        let items: Vec<u32> = unwrap_list(json!({"data": null})).unwrap();
        assert!(items.is_empty());
        let items: Vec<u32> = unwrap_list(json!({})).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_bad_item_is_an_error() {
        assert!(unwrap_list::<u32>(json!(["x"])).is_err());
    }
}
