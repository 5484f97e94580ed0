use crate::domain::a001_store::aggregate::{store_label, Store};
use crate::domain::a002_product::aggregate::{product_label, Product};
use crate::domain::common::{LooseNumber, RecordId};
use crate::shared::form::FormModel;
use crate::shared::validation::{FieldSchema, ValidationErrors, ValidationRules, Validator};
use serde::{Deserialize, Serialize};

/// Quantity of a product held in a store (`/api/store`).
///
/// `store_id` and `product_id` are only checked by the gateway; the client
/// resolves them for display and shows `N/A` when they dangle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryRecord {
    pub id: RecordId,
    pub store_id: RecordId,
    pub product_id: RecordId,
    pub quantity: LooseNumber,
    pub shippingcost: LooseNumber,
    pub purchaseprice: LooseNumber,
}

impl InventoryRecord {
    pub fn store_label(&self, stores: &[Store]) -> String {
        store_label(stores, &self.store_id)
    }

    pub fn product_label(&self, products: &[Product]) -> String {
        product_label(products, &self.product_id)
    }
}

const STORE_ID: FieldSchema = FieldSchema::new("store_id", "Store", ValidationRules::required());
const PRODUCT_ID: FieldSchema =
    FieldSchema::new("product_id", "Product", ValidationRules::required());
const QUANTITY: FieldSchema = FieldSchema::new(
    "quantity",
    "Quantity",
    ValidationRules::required().min(1.0, "Quantity must be at least 1"),
);
const SHIPPING_COST: FieldSchema = FieldSchema::new(
    "shippingcost",
    "Shipping cost",
    ValidationRules::required().min(0.0, "Shipping cost cannot be negative"),
);
const PURCHASE_PRICE: FieldSchema = FieldSchema::new(
    "purchaseprice",
    "Purchase price",
    ValidationRules::required().min(0.0, "Purchase price cannot be negative"),
);

/// Body of `POST /api/store` and `PUT /api/store/{id}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryPayload {
    pub store_id: String,
    pub product_id: String,
    pub quantity: f64,
    pub shippingcost: f64,
    pub purchaseprice: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryForm {
    pub store_id: String,
    pub product_id: String,
    pub quantity: String,
    pub shippingcost: String,
    pub purchaseprice: String,
}

impl From<&InventoryRecord> for InventoryForm {
    fn from(r: &InventoryRecord) -> Self {
        Self {
            store_id: r.store_id.to_string(),
            product_id: r.product_id.to_string(),
            quantity: r.quantity.to_string(),
            shippingcost: r.shippingcost.to_string(),
            purchaseprice: r.purchaseprice.to_string(),
        }
    }
}

impl FormModel for InventoryForm {
    type Payload = InventoryPayload;

    fn validate(&self) -> Result<InventoryPayload, ValidationErrors> {
        let mut v = Validator::new();
        let payload = InventoryPayload {
            store_id: v.text(&STORE_ID, &self.store_id),
            product_id: v.text(&PRODUCT_ID, &self.product_id),
            quantity: v.number(&QUANTITY, &self.quantity),
            shippingcost: v.number(&SHIPPING_COST, &self.shippingcost),
            purchaseprice: v.number(&PURCHASE_PRICE, &self.purchaseprice),
        };
        v.finish(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_schema_bounds() {
        let form = InventoryForm {
            store_id: "1".into(),
            product_id: "2".into(),
            quantity: "0".into(),
            shippingcost: "-1".into(),
            purchaseprice: "ten".into(),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("quantity"), Some("Quantity must be at least 1"));
        assert_eq!(
            errors.get("shippingcost"),
            Some("Shipping cost cannot be negative")
        );
        assert_eq!(
            errors.get("purchaseprice"),
            Some("Purchase price must be a number")
        );
        assert_eq!(errors.get("store_id"), None);
    }

    #[test]
    fn test_valid_payload() {
        let form = InventoryForm {
            store_id: "1".into(),
            product_id: "2".into(),
            quantity: "5".into(),
            shippingcost: "0".into(),
            purchaseprice: "12.5".into(),
        };
        let payload = form.validate().unwrap();
        assert_eq!(payload.quantity, 5.0);
        assert_eq!(payload.purchaseprice, 12.5);
    }

    #[test]
    fn dangling_references_show_na() {
        let record: InventoryRecord = serde_json::from_value(json!({
            "id": 1, "store_id": "7", "product_id": 8,
            "quantity": "3", "shippingcost": null, "purchaseprice": "9.99"
        }))
        .unwrap();
        assert_eq!(record.store_label(&[]), "N/A");
        assert_eq!(record.product_label(&[]), "N/A");
        assert_eq!(record.shippingcost.value(), 0.0);

        let form = InventoryForm::from(&record);
        assert_eq!(form.product_id, "8");
        assert_eq!(form.quantity, "3");
    }
}
