use crate::domain::common::{LooseText, RecordId};
use crate::shared::form::FormModel;
use crate::shared::validation::{FieldSchema, ValidationErrors, ValidationRules, Validator};
use serde::{Deserialize, Serialize};

/// Product lookup record (`/api/lookup-product`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    pub id: RecordId,
    pub product_code: LooseText,
    pub product_type: LooseText,
    pub texture: LooseText,
    pub length: LooseText,
    pub color: LooseText,
    pub vendor_name: Option<LooseText>,
}

impl Product {
    /// "P-100 (Wig)"
    pub fn label(&self) -> String {
        format!("{} ({})", self.product_code, self.product_type)
    }
}

/// Find the label of the product with `id`, or `"N/A"`
pub fn product_label(products: &[Product], id: &RecordId) -> String {
    products
        .iter()
        .find(|p| &p.id == id)
        .map(Product::label)
        .unwrap_or_else(|| "N/A".to_string())
}

const PRODUCT_CODE: FieldSchema =
    FieldSchema::new("product_code", "Product code", ValidationRules::required());
const PRODUCT_TYPE: FieldSchema =
    FieldSchema::new("product_type", "Product type", ValidationRules::required());
const TEXTURE: FieldSchema = FieldSchema::new("texture", "Texture", ValidationRules::required());
const LENGTH: FieldSchema = FieldSchema::new("length", "Length", ValidationRules::required());
const COLOR: FieldSchema = FieldSchema::new("color", "Color", ValidationRules::required());
const VENDOR_NAME: FieldSchema =
    FieldSchema::new("vendor_name", "Vendor name", ValidationRules::none());

/// Body of `POST /api/lookup-product` and `PUT /api/lookup-product/{id}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductPayload {
    pub product_code: String,
    pub product_type: String,
    pub texture: String,
    pub length: String,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    pub product_code: String,
    pub product_type: String,
    pub texture: String,
    pub length: String,
    pub color: String,
    pub vendor_name: String,
}

impl From<&Product> for ProductForm {
    fn from(p: &Product) -> Self {
        Self {
            product_code: p.product_code.to_string(),
            product_type: p.product_type.to_string(),
            texture: p.texture.to_string(),
            length: p.length.to_string(),
            color: p.color.to_string(),
            vendor_name: p
                .vendor_name
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
        }
    }
}

impl FormModel for ProductForm {
    type Payload = ProductPayload;

    fn validate(&self) -> Result<ProductPayload, ValidationErrors> {
        let mut v = Validator::new();
        let payload = ProductPayload {
            product_code: v.text(&PRODUCT_CODE, &self.product_code),
            product_type: v.text(&PRODUCT_TYPE, &self.product_type),
            texture: v.text(&TEXTURE, &self.texture),
            length: v.text(&LENGTH, &self.length),
            color: v.text(&COLOR, &self.color),
            vendor_name: v.optional_text(&VENDOR_NAME, &self.vendor_name),
        };
        v.finish(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn filled() -> ProductForm {
        ProductForm {
            product_code: "P-100".into(),
            product_type: "Wig".into(),
            texture: "Straight".into(),
            length: "18".into(),
            color: "Black".into(),
            vendor_name: String::new(),
        }
    }

    #[test]
    fn vendor_name_is_optional() {
        let payload = filled().validate().unwrap();
        assert_eq!(payload.vendor_name, None);
        let body = serde_json::to_value(&payload).unwrap();
        assert!(body.get("vendor_name").is_none());
    }

    #[test]
    fn missing_texture_is_reported() {
        let mut form = filled();
        form.texture = "  ".into();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("texture"), Some("Texture is required"));
    }

    #[test]
    fn numeric_length_from_gateway_round_trips_into_form() {
        let product: Product = serde_json::from_value(json!({
            "id": "12", "product_code": "P-7", "product_type": "Bundle",
            "texture": "Wavy", "length": 22, "color": "Brown", "vendor_name": null
        }))
        .unwrap();
        let form = ProductForm::from(&product);
        assert_eq!(form.length, "22");
        assert_eq!(form.vendor_name, "");
        assert_eq!(product_label(&[product], &RecordId::from(12i64)), "P-7 (Bundle)");
    }
}
