use crate::domain::a004_stock_item::aggregate::StockItem;
use crate::shared::api_error::ApiError;
use crate::shared::form::FormModel;
use crate::shared::notification::Severity;
use crate::shared::validation::{FieldSchema, ValidationErrors, ValidationRules, Validator};
use chrono::{NaiveDate, Utc};
use serde::Serialize;

pub const DEFAULT_PAYMENT_METHOD: &str = "Cash";

/// How the sale price is obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaleMode {
    /// Product fields and `unit_price` come from a selected stock item
    #[default]
    Catalog,
    /// Product fields and `price_per_unit` are typed in
    Manual,
}

const STOCK_ITEM: FieldSchema =
    FieldSchema::new("item_id", "Stock item", ValidationRules::required());
const PRODUCT_TYPE: FieldSchema =
    FieldSchema::new("product_type", "Product type", ValidationRules::required());
const TEXTURE: FieldSchema = FieldSchema::new("texture", "Texture", ValidationRules::required());
const LENGTH: FieldSchema = FieldSchema::new("length", "Length", ValidationRules::required());
const COLOR: FieldSchema = FieldSchema::new("color", "Color", ValidationRules::required());
const QUANTITY_SOLD: FieldSchema = FieldSchema::new(
    "quantity_sold",
    "Quantity sold",
    ValidationRules::required().min(1.0, "Quantity sold must be at least 1"),
);
const QUANTITY_UNIT: FieldSchema =
    FieldSchema::new("quantity_unit", "Unit", ValidationRules::none());
const UNIT_PRICE: FieldSchema = FieldSchema::new(
    "unit_price",
    "Unit price",
    ValidationRules::none().min(0.0, "Unit price cannot be negative"),
);
const PRICE_PER_UNIT: FieldSchema = FieldSchema::new(
    "price_per_unit",
    "Price per unit",
    ValidationRules::required().min(0.0, "Price per unit cannot be negative"),
);
const CUSTOMER_NAME: FieldSchema =
    FieldSchema::new("customer_name", "Customer name", ValidationRules::none());
const PAYMENT_METHOD: FieldSchema =
    FieldSchema::new("payment_method", "Payment method", ValidationRules::none());
const SALE_DATE: FieldSchema =
    FieldSchema::new("sale_date", "Sale date", ValidationRules::required());

/// Body of `POST /api/sales`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalePayload {
    pub product_type: String,
    pub texture: String,
    pub length: String,
    pub color: String,
    pub quantity_sold: f64,
    pub quantity_unit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_unit: Option<f64>,
    pub customer_name: String,
    pub payment_method: String,
    pub sale_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SaleForm {
    pub mode: SaleMode,
    /// `item_id` of the selected stock item, empty when none is selected
    pub item_id: String,
    pub product_type: String,
    pub texture: String,
    pub length: String,
    pub color: String,
    pub quantity_sold: String,
    pub quantity_unit: String,
    pub unit_price: String,
    pub price_per_unit: String,
    pub customer_name: String,
    pub payment_method: String,
    pub sale_date: String,
}

impl SaleForm {
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            mode: SaleMode::Catalog,
            item_id: String::new(),
            product_type: String::new(),
            texture: String::new(),
            length: String::new(),
            color: String::new(),
            quantity_sold: String::new(),
            quantity_unit: String::new(),
            unit_price: String::new(),
            price_per_unit: String::new(),
            customer_name: String::new(),
            payment_method: DEFAULT_PAYMENT_METHOD.to_string(),
            sale_date: date.format("%Y-%m-%d").to_string(),
        }
    }

    /// Product fields are only editable when pricing manually
    pub fn product_fields_read_only(&self) -> bool {
        self.mode == SaleMode::Catalog
    }

    /// Switch pricing mode; the copied product fields are dropped
    pub fn set_mode(&mut self, mode: SaleMode) {
        if self.mode != mode {
            let keep = (
                self.quantity_sold.clone(),
                self.customer_name.clone(),
                self.payment_method.clone(),
                self.sale_date.clone(),
            );
            *self = Self {
                mode,
                quantity_sold: keep.0,
                customer_name: keep.1,
                payment_method: keep.2,
                sale_date: keep.3,
                ..Self::for_date(NaiveDate::default())
            };
        }
    }

    /// Copy product fields and price from the stock item with `item_id`.
    ///
    /// Returns `false` and clears the selection when no item matches.
    pub fn select_stock_item(&mut self, items: &[StockItem], item_id: &str) -> bool {
        match items.iter().find(|i| i.item_id.as_str() == item_id) {
            Some(item) => {
                self.item_id = item.item_id.to_string();
                self.product_type = item.product_type.to_string();
                self.texture = item.texture.to_string();
                self.length = item.length.to_string();
                self.color = item.color.to_string();
                self.quantity_unit = item.quantity_unit.to_string();
                self.unit_price = item.unit_price.to_string();
                true
            }
            None => {
                self.item_id.clear();
                self.product_type.clear();
                self.texture.clear();
                self.length.clear();
                self.color.clear();
                self.quantity_unit.clear();
                self.unit_price.clear();
                false
            }
        }
    }
}

impl Default for SaleForm {
    fn default() -> Self {
        Self::for_date(Utc::now().date_naive())
    }
}

impl FormModel for SaleForm {
    type Payload = SalePayload;

    fn validate(&self) -> Result<SalePayload, ValidationErrors> {
        let mut v = Validator::new();

        let (unit_price, price_per_unit) = match self.mode {
            SaleMode::Catalog => {
                if self.item_id.trim().is_empty() {
                    v.reject(STOCK_ITEM.field, "Select a stock item");
                }
                (
                    Some(v.number(&UNIT_PRICE, &self.unit_price)),
                    None,
                )
            }
            SaleMode::Manual => (None, Some(v.number(&PRICE_PER_UNIT, &self.price_per_unit))),
        };

        let product_type = v.text(&PRODUCT_TYPE, &self.product_type);
        let texture = v.text(&TEXTURE, &self.texture);
        let length = v.text(&LENGTH, &self.length);
        let color = v.text(&COLOR, &self.color);
        let quantity_sold = v.number(&QUANTITY_SOLD, &self.quantity_sold);
        let quantity_unit = v.text(&QUANTITY_UNIT, &self.quantity_unit);
        let customer_name = v.text(&CUSTOMER_NAME, &self.customer_name);
        let payment_method = v
            .optional_text(&PAYMENT_METHOD, &self.payment_method)
            .unwrap_or_else(|| DEFAULT_PAYMENT_METHOD.to_string());

        let sale_raw = v.text(&SALE_DATE, &self.sale_date);
        let sale_date = match NaiveDate::parse_from_str(&sale_raw, "%Y-%m-%d") {
            Ok(d) => d,
            Err(_) => {
                if !sale_raw.is_empty() {
                    v.reject(SALE_DATE.field, "Sale date must be a valid date");
                }
                NaiveDate::default()
            }
        };

        v.finish(SalePayload {
            product_type,
            texture,
            length,
            color,
            quantity_sold,
            quantity_unit,
            unit_price,
            price_per_unit,
            customer_name,
            payment_method,
            sale_date,
        })
    }
}

/// Notification shown when `POST /api/sales` fails
pub fn sale_error_notification(error: &ApiError) -> (String, Severity) {
    match error {
        ApiError::Unprocessable { .. } => (
            "Validation error — please check your input.".to_string(),
            Severity::Warning,
        ),
        ApiError::BadRequest { .. } => ("Insufficient stock.".to_string(), Severity::Danger),
        ApiError::Server { .. } => (
            "Server error — please try again later.".to_string(),
            Severity::Danger,
        ),
        ApiError::Network(_) | ApiError::Offline => (
            "Network error — could not reach server.".to_string(),
            Severity::Danger,
        ),
        ApiError::Client { status, .. } => (
            format!("Error: {} — Something went wrong.", status),
            Severity::Danger,
        ),
        ApiError::Decode(msg) | ApiError::Request(msg) => {
            (format!("Unexpected error: {}", msg), Severity::Danger)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 2).unwrap()
    }

    fn stock() -> Vec<StockItem> {
        serde_json::from_value(json!([
            {"item_id": 1, "product_type": "Wig", "texture": "Straight", "length": 18,
             "color": "Black", "quantity_unit": "pcs", "unit_price": "120.5"},
            {"item_id": "2", "product_type": "Bundle", "texture": "Wavy", "length": "22",
             "color": "Brown", "quantity_unit": "pcs", "unit_price": 80}
        ]))
        .unwrap()
    }

    #[test]
    fn test_defaults() {
        let form = SaleForm::for_date(today());
        assert_eq!(form.payment_method, "Cash");
        assert_eq!(form.sale_date, "2025-08-02");
        assert!(form.product_fields_read_only());
    }

    #[test]
    fn selecting_a_stock_item_copies_fields() {
        let mut form = SaleForm::for_date(today());
        assert!(form.select_stock_item(&stock(), "2"));
        assert_eq!(form.product_type, "Bundle");
        assert_eq!(form.length, "22");
        assert_eq!(form.unit_price, "80");

        assert!(!form.select_stock_item(&stock(), "99"));
        assert_eq!(form.item_id, "");
        assert_eq!(form.product_type, "");
    }

    #[test]
    fn catalog_sale_sends_unit_price() {
        let mut form = SaleForm::for_date(today());
        form.select_stock_item(&stock(), "1");
        form.quantity_sold = "2".into();
        let payload = form.validate().unwrap();
        let body = serde_json::to_value(&payload).unwrap();
        assert_eq!(body["unit_price"], json!(120.5));
        assert!(body.get("price_per_unit").is_none());
        assert_eq!(body["payment_method"], json!("Cash"));
        assert_eq!(body["sale_date"], json!("2025-08-02"));
    }

    #[test]
    fn catalog_sale_requires_selection() {
        let mut form = SaleForm::for_date(today());
        form.quantity_sold = "0".into();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.first_message(), Some("Select a stock item"));
        assert_eq!(
            errors.get("quantity_sold"),
            Some("Quantity sold must be at least 1")
        );
    }

    #[test]
    fn manual_sale_sends_price_per_unit() {
        let mut form = SaleForm::for_date(today());
        form.quantity_sold = "3".into();
        form.set_mode(SaleMode::Manual);
        assert_eq!(form.quantity_sold, "3");
        assert_eq!(form.sale_date, "2025-08-02");
        assert!(!form.product_fields_read_only());

        form.product_type = "Closure".into();
        form.texture = "Body wave".into();
        form.length = "14".into();
        form.color = "Natural".into();
        form.price_per_unit = "60".into();
        let payload = form.validate().unwrap();
        assert_eq!(payload.price_per_unit, Some(60.0));
        assert_eq!(payload.unit_price, None);
    }

    #[test]
    fn failed_sale_detail_survives_for_logging() {
        let error = ApiError::BadRequest {
            message: Some("Only 2 pcs left".into()),
        };
        assert_eq!(sale_error_notification(&error).0, "Insufficient stock.");
        assert_eq!(error.to_string(), "Only 2 pcs left");
        assert_eq!(ApiError::Server { status: 503 }.to_string(), "Server error: 503");
    }

    #[test]
    fn test_sale_error_notification() {
        assert_eq!(
            sale_error_notification(&ApiError::Unprocessable { message: None }).1,
            Severity::Warning
        );
        assert_eq!(
            sale_error_notification(&ApiError::BadRequest { message: None }).0,
            "Insufficient stock."
        );
        assert_eq!(
            sale_error_notification(&ApiError::Server { status: 500 }).0,
            "Server error — please try again later."
        );
        assert_eq!(
            sale_error_notification(&ApiError::Network("timeout".into())).0,
            "Network error — could not reach server."
        );
        assert_eq!(
            sale_error_notification(&ApiError::Client {
                status: 409,
                message: None
            })
            .0,
            "Error: 409 — Something went wrong."
        );
    }
}
