use crate::domain::common::{LooseText, RecordId};
use crate::shared::form::FormModel;
use crate::shared::validation::{FieldSchema, ValidationErrors, ValidationRules, Validator};
use serde::{Deserialize, Serialize};

// ============================================================================
// Store type
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreType {
    Store,
    Shop,
    Warehouse,
}

impl StoreType {
    pub const ALL: [StoreType; 3] = [StoreType::Store, StoreType::Shop, StoreType::Warehouse];

    pub fn as_str(&self) -> &'static str {
        match self {
            StoreType::Store => "store",
            StoreType::Shop => "shop",
            StoreType::Warehouse => "warehouse",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StoreType::Store => "Store",
            StoreType::Shop => "Shop",
            StoreType::Warehouse => "Warehouse",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

// ============================================================================
// Store as returned by the gateway
// ============================================================================

/// Store lookup record (`/api/lookup-store`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Store {
    pub id: RecordId,
    pub store_code: LooseText,
    pub store_type: LooseText,
    pub store_name: LooseText,
}

impl Store {
    /// "Main Street (S-01)", as shown in pickers and inventory rows
    pub fn label(&self) -> String {
        format!("{} ({})", self.store_name, self.store_code)
    }
}

/// Find the label of the store with `id`, or `"N/A"`
pub fn store_label(stores: &[Store], id: &RecordId) -> String {
    stores
        .iter()
        .find(|s| &s.id == id)
        .map(Store::label)
        .unwrap_or_else(|| "N/A".to_string())
}

// ============================================================================
// Form
// ============================================================================

const STORE_CODE: FieldSchema =
    FieldSchema::new("store_code", "Store code", ValidationRules::required());
const STORE_TYPE: FieldSchema =
    FieldSchema::new("store_type", "Store type", ValidationRules::required());
const STORE_NAME: FieldSchema =
    FieldSchema::new("store_name", "Store name", ValidationRules::required());

/// Body of `POST /api/lookup-store` and `PUT /api/lookup-store/{id}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StorePayload {
    pub store_code: String,
    pub store_type: StoreType,
    pub store_name: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreForm {
    pub store_code: String,
    pub store_type: String,
    pub store_name: String,
}

impl From<&Store> for StoreForm {
    fn from(store: &Store) -> Self {
        Self {
            store_code: store.store_code.to_string(),
            store_type: store.store_type.to_string(),
            store_name: store.store_name.to_string(),
        }
    }
}

impl FormModel for StoreForm {
    type Payload = StorePayload;

    fn validate(&self) -> Result<StorePayload, ValidationErrors> {
        let mut v = Validator::new();
        let store_code = v.text(&STORE_CODE, &self.store_code);
        let store_type_raw = v.text(&STORE_TYPE, &self.store_type);
        let store_type = StoreType::parse(&store_type_raw);
        if store_type.is_none() && !store_type_raw.is_empty() {
            v.reject(STORE_TYPE.field, "Store type must be store, shop or warehouse");
        }
        let store_name = v.text(&STORE_NAME, &self.store_name);

        let payload = StorePayload {
            store_code,
            store_type: store_type.unwrap_or(StoreType::Store),
            store_name,
        };
        v.finish(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_gateway_store() {
        let store: Store = serde_json::from_value(json!({
            "id": 4,
            "store_code": "S-01",
            "store_type": "warehouse",
            "store_name": "North"
        }))
        .unwrap();
        assert_eq!(store.id, RecordId::from(4i64));
        assert_eq!(store.label(), "North (S-01)");
    }

    #[test]
    fn test_store_label_lookup() {
        let stores = vec![Store {
            id: RecordId::from(1i64),
            store_code: "S-01".into(),
            store_type: "shop".into(),
            store_name: "Main".into(),
        }];
        assert_eq!(store_label(&stores, &RecordId::from("1")), "Main (S-01)");
        assert_eq!(store_label(&stores, &RecordId::from("9")), "N/A");
    }

    #[test]
    fn form_requires_every_field() {
        let errors = StoreForm::default().validate().unwrap_err();
        assert_eq!(errors.get("store_code"), Some("Store code is required"));
        assert_eq!(errors.get("store_type"), Some("Store type is required"));
        assert_eq!(errors.get("store_name"), Some("Store name is required"));
    }

    #[test]
    fn form_rejects_unknown_store_type() {
        let form = StoreForm {
            store_code: "S-02".into(),
            store_type: "kiosk".into(),
            store_name: "Corner".into(),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.get("store_type").is_some());
    }

    #[test]
    fn payload_serializes_lowercase_type() {
        let form = StoreForm {
            store_code: "S-02".into(),
            store_type: "Warehouse".into(),
            store_name: "Corner".into(),
        };
        let payload = form.validate().unwrap();
        assert_eq!(
            serde_json::to_value(payload).unwrap(),
            json!({"store_code": "S-02", "store_type": "warehouse", "store_name": "Corner"})
        );
    }
}
