use crate::domain::common::{LooseNumber, LooseText, RecordId};
use crate::shared::form::FormModel;
use crate::shared::validation::{FieldSchema, ValidationErrors, ValidationRules, Validator};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Stock received into the shop (`/api/stock-items`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StockItem {
    pub item_id: RecordId,
    pub product_type: LooseText,
    pub texture: LooseText,
    pub length: LooseText,
    pub color: LooseText,
    pub quantity_added: LooseNumber,
    pub quantity_unit: LooseText,
    pub unit_price: LooseNumber,
    pub purchaseprice: LooseNumber,
    pub shippingcost: LooseNumber,
    pub vendor_name: LooseText,
    pub added_date: LooseText,
}

impl StockItem {
    /// `Wig - Straight - 18" - Black`, as listed in the sale form picker
    pub fn option_label(&self) -> String {
        format!(
            "{} - {} - {}\" - {}",
            self.product_type, self.texture, self.length, self.color
        )
    }
}

const PRODUCT_TYPE: FieldSchema =
    FieldSchema::new("product_type", "Product type", ValidationRules::required());
const TEXTURE: FieldSchema = FieldSchema::new("texture", "Texture", ValidationRules::required());
const LENGTH: FieldSchema = FieldSchema::new(
    "length",
    "Length",
    ValidationRules::required().min(0.0, "Length cannot be negative"),
);
const COLOR: FieldSchema = FieldSchema::new("color", "Color", ValidationRules::required());
const QUANTITY_ADDED: FieldSchema = FieldSchema::new(
    "quantity_added",
    "Quantity",
    ValidationRules::none().min(0.0, "Quantity cannot be negative"),
);
const QUANTITY_UNIT: FieldSchema =
    FieldSchema::new("quantity_unit", "Unit", ValidationRules::none());
const PURCHASE_PRICE: FieldSchema = FieldSchema::new(
    "purchaseprice",
    "Purchase price",
    ValidationRules::none().min(0.0, "Purchase price cannot be negative"),
);
const SHIPPING_COST: FieldSchema = FieldSchema::new(
    "shippingcost",
    "Shipping cost",
    ValidationRules::none().min(0.0, "Shipping cost cannot be negative"),
);
const UNIT_PRICE: FieldSchema = FieldSchema::new(
    "unit_price",
    "Unit price",
    ValidationRules::required().min(0.0, "Unit price cannot be negative"),
);
const VENDOR_NAME: FieldSchema =
    FieldSchema::new("vendor_name", "Vendor name", ValidationRules::none());
const ADDED_DATE: FieldSchema =
    FieldSchema::new("added_date", "Added date", ValidationRules::required());

/// Body of `POST /api/stock-items`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockItemPayload {
    pub product_type: String,
    pub texture: String,
    pub length: f64,
    pub color: String,
    pub quantity_added: f64,
    pub quantity_unit: String,
    pub purchaseprice: f64,
    pub shippingcost: f64,
    pub unit_price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_name: Option<String>,
    pub added_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StockItemForm {
    pub product_type: String,
    pub texture: String,
    pub length: String,
    pub color: String,
    pub quantity_added: String,
    pub quantity_unit: String,
    pub purchaseprice: String,
    pub shippingcost: String,
    pub unit_price: String,
    pub vendor_name: String,
    /// `YYYY-MM-DD`, as produced by a date input
    pub added_date: String,
}

impl StockItemForm {
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            product_type: String::new(),
            texture: String::new(),
            length: String::new(),
            color: String::new(),
            quantity_added: String::new(),
            quantity_unit: String::new(),
            purchaseprice: String::new(),
            shippingcost: String::new(),
            unit_price: String::new(),
            vendor_name: String::new(),
            added_date: date.format("%Y-%m-%d").to_string(),
        }
    }
}

impl Default for StockItemForm {
    fn default() -> Self {
        Self::for_date(Utc::now().date_naive())
    }
}

impl FormModel for StockItemForm {
    type Payload = StockItemPayload;

    fn validate(&self) -> Result<StockItemPayload, ValidationErrors> {
        let mut v = Validator::new();
        let product_type = v.text(&PRODUCT_TYPE, &self.product_type);
        let texture = v.text(&TEXTURE, &self.texture);
        let length = v.number(&LENGTH, &self.length);
        let color = v.text(&COLOR, &self.color);
        let quantity_added = v
            .optional_number(&QUANTITY_ADDED, &self.quantity_added)
            .unwrap_or(0.0);
        let quantity_unit = v.text(&QUANTITY_UNIT, &self.quantity_unit);
        let purchaseprice = v
            .optional_number(&PURCHASE_PRICE, &self.purchaseprice)
            .unwrap_or(0.0);
        let shippingcost = v
            .optional_number(&SHIPPING_COST, &self.shippingcost)
            .unwrap_or(0.0);
        let unit_price = v.number(&UNIT_PRICE, &self.unit_price);
        let vendor_name = v.optional_text(&VENDOR_NAME, &self.vendor_name);

        let added_raw = v.text(&ADDED_DATE, &self.added_date);
        let added_date = match NaiveDate::parse_from_str(&added_raw, "%Y-%m-%d") {
            Ok(d) => d,
            Err(_) => {
                if !added_raw.is_empty() {
                    v.reject(ADDED_DATE.field, "Added date must be a valid date");
                }
                NaiveDate::default()
            }
        };

        v.finish(StockItemPayload {
            product_type,
            texture,
            length,
            color,
            quantity_added,
            quantity_unit,
            purchaseprice,
            shippingcost,
            unit_price,
            vendor_name,
            added_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_form_defaults_to_given_day() {
        let form = StockItemForm::for_date(date(2025, 7, 14));
        assert_eq!(form.added_date, "2025-07-14");
        assert_eq!(form.quantity_unit, "");
    }

    #[test]
    fn unit_price_and_length_are_required() {
        let mut form = StockItemForm::for_date(date(2025, 7, 14));
        form.product_type = "Wig".into();
        form.texture = "Curly".into();
        form.color = "Black".into();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("unit_price"), Some("Unit price is required"));
        assert_eq!(errors.get("length"), Some("Length is required"));
        assert_eq!(errors.get("quantity_added"), None);
    }

    #[test]
    fn optional_numbers_default_to_zero() {
        let mut form = StockItemForm::for_date(date(2025, 7, 14));
        form.product_type = "Wig".into();
        form.texture = "Curly".into();
        form.length = "20".into();
        form.color = "Black".into();
        form.unit_price = "45.5".into();
        let payload = form.validate().unwrap();
        assert_eq!(payload.quantity_added, 0.0);
        assert_eq!(payload.shippingcost, 0.0);

        let body = serde_json::to_value(&payload).unwrap();
        assert_eq!(body["added_date"], json!("2025-07-14"));
        assert_eq!(body["length"], json!(20.0));
        assert!(body.get("vendor_name").is_none());
    }

    #[test]
    fn negative_shipping_is_rejected() {
        let mut form = StockItemForm::for_date(date(2025, 7, 14));
        form.shippingcost = "-3".into();
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.get("shippingcost"),
            Some("Shipping cost cannot be negative")
        );
    }

    #[test]
    fn test_option_label() {
        let item: StockItem = serde_json::from_value(json!({
            "item_id": 3, "product_type": "Wig", "texture": "Straight",
            "length": 18, "color": "Black", "unit_price": "120"
        }))
        .unwrap();
        assert_eq!(item.option_label(), "Wig - Straight - 18\" - Black");
        assert_eq!(item.unit_price.value(), 120.0);
    }
}
