use crate::domain::common::{LooseNumber, LooseText, RecordId};
use crate::shared::export::{ExcelExportable, ExportRecord};
use crate::shared::form::FormModel;
use crate::shared::list::HasProductType;
use crate::shared::validation::{FieldSchema, ValidationErrors, ValidationRules, Validator};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Current stock level per item (`/api/live-inventory`).
///
/// `item_id` addresses deletes, `inventory_id` addresses updates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiveInventoryItem {
    pub item_id: RecordId,
    pub inventory_id: RecordId,
    pub product_type: LooseText,
    pub texture: LooseText,
    pub length: LooseText,
    pub color: LooseText,
    #[serde(rename = "Item_added")]
    pub item_added: LooseNumber,
    pub sold_item: LooseNumber,
    pub quantity_available: LooseNumber,
    pub unit_price: LooseNumber,
    pub stock_value: LooseNumber,
    pub created_at: LooseText,
}

impl LiveInventoryItem {
    /// `created_at` as `M/D/YYYY`
    pub fn added_date_label(&self) -> String {
        us_date(self.created_at.as_str())
    }
}

impl HasProductType for LiveInventoryItem {
    fn product_type(&self) -> &str {
        self.product_type.as_str()
    }
}

impl ExcelExportable for LiveInventoryItem {
    fn to_export_record(&self) -> ExportRecord {
        vec![
            ("Product Type", self.product_type.to_string().into()),
            ("Texture", self.texture.to_string().into()),
            ("Length", self.length.to_string().into()),
            ("Color", self.color.to_string().into()),
            ("Added", self.item_added.value().into()),
            ("Sold Item", self.sold_item.value().into()),
            ("Remaining Qty", self.quantity_available.value().into()),
            ("Unit Price", self.unit_price.value().into()),
            ("Stock Value", self.stock_value.value().into()),
            ("Added Date", self.added_date_label().into()),
        ]
    }
}

pub const STOCK_SHEET: &str = "Stock Data";

/// `Stock Data 2025-07-14.xlsx`
pub fn stock_export_file_name(today: NaiveDate) -> String {
    format!("Stock Data {}.xlsx", today.format("%Y-%m-%d"))
}

/// Formats a gateway timestamp as a US calendar date. Unparseable input is
/// returned unchanged.
pub fn us_date(raw: &str) -> String {
    let raw = raw.trim();
    let date = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").map(|dt| dt.date()))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));

    match date {
        Ok(d) => d.format("%-m/%-d/%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Replace the row with the same `inventory_id` as `updated`
pub fn replace_by_inventory_id(items: &mut [LiveInventoryItem], updated: LiveInventoryItem) -> bool {
    match items
        .iter_mut()
        .find(|i| i.inventory_id == updated.inventory_id)
    {
        Some(slot) => {
            *slot = updated;
            true
        }
        None => false,
    }
}

pub fn remove_by_item_id(items: &mut Vec<LiveInventoryItem>, item_id: &RecordId) {
    items.retain(|i| &i.item_id != item_id);
}

const PRODUCT_TYPE: FieldSchema =
    FieldSchema::new("product_type", "Product type", ValidationRules::required());
const TEXTURE: FieldSchema = FieldSchema::new("texture", "Texture", ValidationRules::required());
const LENGTH: FieldSchema = FieldSchema::new("length", "Length", ValidationRules::required());
const COLOR: FieldSchema = FieldSchema::new("color", "Color", ValidationRules::required());
const QUANTITY_AVAILABLE: FieldSchema = FieldSchema::new(
    "quantity_available",
    "Remaining quantity",
    ValidationRules::required().min(0.0, "Remaining quantity cannot be negative"),
);
const UNIT_PRICE: FieldSchema = FieldSchema::new(
    "unit_price",
    "Unit price",
    ValidationRules::required().min(0.0, "Unit price cannot be negative"),
);

/// Edit modal of the stock view. The whole row is sent back, with the
/// edited fields replaced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LiveInventoryForm {
    pub original: LiveInventoryItem,
    pub product_type: String,
    pub texture: String,
    pub length: String,
    pub color: String,
    pub quantity_available: String,
    pub unit_price: String,
}

impl From<&LiveInventoryItem> for LiveInventoryForm {
    fn from(item: &LiveInventoryItem) -> Self {
        Self {
            original: item.clone(),
            product_type: item.product_type.to_string(),
            texture: item.texture.to_string(),
            length: item.length.to_string(),
            color: item.color.to_string(),
            quantity_available: item.quantity_available.to_string(),
            unit_price: item.unit_price.to_string(),
        }
    }
}

impl FormModel for LiveInventoryForm {
    type Payload = LiveInventoryItem;

    fn validate(&self) -> Result<LiveInventoryItem, ValidationErrors> {
        let mut v = Validator::new();
        let payload = LiveInventoryItem {
            product_type: v.text(&PRODUCT_TYPE, &self.product_type).into(),
            texture: v.text(&TEXTURE, &self.texture).into(),
            length: v.text(&LENGTH, &self.length).into(),
            color: v.text(&COLOR, &self.color).into(),
            quantity_available: v.number(&QUANTITY_AVAILABLE, &self.quantity_available).into(),
            unit_price: v.number(&UNIT_PRICE, &self.unit_price).into(),
            ..self.original.clone()
        };
        v.finish(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::export::{ExportCell, ExportTable};
    use serde_json::json;

    fn items() -> Vec<LiveInventoryItem> {
        serde_json::from_value(json!([
            {"item_id": 1, "inventory_id": 10, "product_type": "Wig", "texture": "Straight",
             "length": "18", "color": "Black", "Item_added": "20", "sold_item": 5,
             "quantity_available": 15, "unit_price": "100", "stock_value": 1500,
             "created_at": "2025-07-03T09:15:00.000Z"},
            {"item_id": 2, "inventory_id": 11, "product_type": "Bundle",
             "quantity_available": "7", "created_at": "2025-12-25 18:00:00"}
        ]))
        .unwrap()
    }

    #[test]
    fn test_us_date() {
        assert_eq!(us_date("2025-07-03T09:15:00.000Z"), "7/3/2025");
        assert_eq!(us_date("2025-12-25 18:00:00"), "12/25/2025");
        assert_eq!(us_date("2025-01-09"), "1/9/2025");
        assert_eq!(us_date("soon"), "soon");
    }

    #[test]
    fn parses_capitalised_item_added() {
        let rows = items();
        assert_eq!(rows[0].item_added.value(), 20.0);
        assert_eq!(rows[1].item_added.value(), 0.0);
        let body = serde_json::to_value(&rows[0]).unwrap();
        assert_eq!(body["Item_added"], json!(20.0));
    }

    #[test]
    fn update_replaces_by_inventory_id() {
        let mut rows = items();
        let mut form = LiveInventoryForm::from(&rows[0]);
        form.quantity_available = "12".into();
        let updated = form.validate().unwrap();
        assert_eq!(updated.item_id, RecordId::from(1i64));
        assert_eq!(updated.sold_item.value(), 5.0);

        assert!(replace_by_inventory_id(&mut rows, updated));
        assert_eq!(rows[0].quantity_available.value(), 12.0);

        let stray = LiveInventoryItem {
            inventory_id: RecordId::from(99i64),
            ..Default::default()
        };
        assert!(!replace_by_inventory_id(&mut rows, stray));
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn delete_removes_by_item_id() {
        let mut rows = items();
        remove_by_item_id(&mut rows, &RecordId::from("2"));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].product_type.as_str(), "Wig");
    }

    #[test]
    fn edit_form_rejects_negative_quantity() {
        let mut form = LiveInventoryForm::from(&items()[0]);
        form.quantity_available = "-1".into();
        form.color = String::new();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("color"), Some("Color is required"));
        assert_eq!(
            errors.get("quantity_available"),
            Some("Remaining quantity cannot be negative")
        );
    }

    #[test]
    fn test_stock_export() {
        let table = ExportTable::from_items(STOCK_SHEET, &items()[..1]);
        assert_eq!(table.headers.len(), 10);
        assert_eq!(table.headers[4], "Added");
        assert_eq!(table.rows[0][9], ExportCell::Text("7/3/2025".into()));
        let day = NaiveDate::from_ymd_opt(2025, 7, 14).unwrap();
        assert_eq!(stock_export_file_name(day), "Stock Data 2025-07-14.xlsx");
    }
}
