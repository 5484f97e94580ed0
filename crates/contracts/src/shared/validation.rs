//! Field-level validation rules and the error collection produced by them

use crate::domain::common::parse_float_prefix;

/// Validation rules for a field
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub numeric: bool,
    pub min: Option<f64>,
    pub min_error: Option<&'static str>,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            numeric: false,
            min: None,
            min_error: None,
        }
    }

    /// Create validation rules for required field
    pub const fn required() -> Self {
        Self {
            required: true,
            numeric: false,
            min: None,
            min_error: None,
        }
    }

    /// Value must parse as a number
    pub const fn number(self) -> Self {
        Self {
            numeric: true,
            ..self
        }
    }

    /// Lower bound, with the message shown when it is violated
    pub const fn min(self, min: f64, message: &'static str) -> Self {
        Self {
            numeric: true,
            min: Some(min),
            min_error: Some(message),
            ..self
        }
    }

    /// Validate a string value against the rules
    pub fn validate_string(&self, value: &str, field_label: &str) -> Result<(), String> {
        if self.required && value.trim().is_empty() {
            return Err(format!("{} is required", field_label));
        }
        Ok(())
    }

    /// Validate a numeric value against the lower bound
    pub fn validate_number(&self, value: f64, field_label: &str) -> Result<(), String> {
        if let Some(min) = self.min {
            if value < min {
                return Err(self
                    .min_error
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("{} must be at least {}", field_label, min)));
            }
        }

        Ok(())
    }

    /// Parse raw input as a number and check it.
    ///
    /// `Ok(None)` means the field is optional and was left blank.
    pub fn parse_number(&self, raw: &str, field_label: &str) -> Result<Option<f64>, String> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return if self.required {
                Err(format!("{} is required", field_label))
            } else {
                Ok(None)
            };
        }

        // number inputs must be fully numeric, unlike values coming from the gateway
        let value = match parse_float_prefix(trimmed) {
            Some(v) if trimmed.parse::<f64>().is_ok() => v,
            _ => return Err(format!("{} must be a number", field_label)),
        };
        self.validate_number(value, field_label)?;
        Ok(Some(value))
    }
}

/// Declared schema for one form field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSchema {
    pub field: &'static str,
    pub label: &'static str,
    pub rules: ValidationRules,
}

impl FieldSchema {
    pub const fn new(field: &'static str, label: &'static str, rules: ValidationRules) -> Self {
        Self {
            field,
            label,
            rules,
        }
    }
}

/// Error attached to a single field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Validation errors in the order the fields were checked
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error; only the first error per field is kept
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        if self.get(field).is_none() {
            self.errors.push(FieldError {
                field,
                message: message.into(),
            });
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// First message, used as the summary line of a rejected form
    pub fn first_message(&self) -> Option<&str> {
        self.errors.first().map(|e| e.message.as_str())
    }
}

/// Collects field errors while a form is turned into its payload
#[derive(Debug, Default)]
pub struct Validator {
    errors: ValidationErrors,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks a text field and returns it trimmed
    pub fn text(&mut self, schema: &FieldSchema, value: &str) -> String {
        if let Err(e) = schema.rules.validate_string(value, schema.label) {
            self.errors.add(schema.field, e);
        }
        value.trim().to_string()
    }

    /// Checks an optional text field; blank becomes `None`
    pub fn optional_text(&mut self, schema: &FieldSchema, value: &str) -> Option<String> {
        let value = self.text(schema, value);
        if value.is_empty() {
            None
        } else {
            Some(value)
        }
    }

    /// Checks a numeric field; an invalid value yields `0.0` and an error
    pub fn number(&mut self, schema: &FieldSchema, raw: &str) -> f64 {
        self.optional_number(schema, raw).unwrap_or(0.0)
    }

    /// Checks a numeric field that may be left blank
    pub fn optional_number(&mut self, schema: &FieldSchema, raw: &str) -> Option<f64> {
        match schema.rules.parse_number(raw, schema.label) {
            Ok(v) => v,
            Err(e) => {
                self.errors.add(schema.field, e);
                None
            }
        }
    }

    /// Record an error that is not tied to a declared schema rule
    pub fn reject(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.add(field, message);
    }

    pub fn finish<T>(self, value: T) -> Result<T, ValidationErrors> {
        if self.errors.is_empty() {
            Ok(value)
        } else {
            Err(self.errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QTY: FieldSchema = FieldSchema::new(
        "quantity",
        "Quantity",
        ValidationRules::required().min(1.0, "Quantity must be at least 1"),
    );
    const NOTE: FieldSchema = FieldSchema::new("note", "Note", ValidationRules::none());

    #[test]
    fn required_text_rejects_blank() {
        let rules = ValidationRules::required();
        assert_eq!(
            rules.validate_string("   ", "Store code"),
            Err("Store code is required".to_string())
        );
        assert!(rules.validate_string("S-01", "Store code").is_ok());
    }

    #[test]
    fn numbers_are_type_checked_and_bounded() {
        let rules = QTY.rules;
        assert_eq!(rules.parse_number("3", "Quantity"), Ok(Some(3.0)));
        assert_eq!(
            rules.parse_number("0", "Quantity"),
            Err("Quantity must be at least 1".to_string())
        );
        assert_eq!(
            rules.parse_number("3kg", "Quantity"),
            Err("Quantity must be a number".to_string())
        );
        assert_eq!(
            rules.parse_number("", "Quantity"),
            Err("Quantity is required".to_string())
        );
        assert_eq!(ValidationRules::none().number().parse_number(" ", "X"), Ok(None));
    }

    #[test]
    fn only_the_lower_bound_is_enforced() {
        let rules = ValidationRules::required().min(0.0, "Price cannot be negative");
        assert_eq!(rules.validate_number(1e12, "Price"), Ok(()));
        assert_eq!(
            rules.validate_number(-0.01, "Price"),
            Err("Price cannot be negative".to_string())
        );
        let plain = ValidationRules { min: Some(2.0), ..ValidationRules::none() };
        assert_eq!(
            plain.validate_number(1.0, "Count"),
            Err("Count must be at least 2".to_string())
        );
    }

    #[test]
    fn validator_collects_errors_in_order() {
        let mut v = Validator::new();
        let q = v.number(&QTY, "abc");
        let note = v.optional_text(&NOTE, "  ");
        v.reject("store_id", "Store is required");
        assert_eq!(q, 0.0);
        assert_eq!(note, None);

        let errors = v.finish(()).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.first_message(), Some("Quantity must be a number"));
        assert_eq!(errors.get("store_id"), Some("Store is required"));
    }

    #[test]
    fn only_first_error_per_field_is_kept() {
        let mut errors = ValidationErrors::new();
        errors.add("a", "first");
        errors.add("a", "second");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("a"), Some("first"));
    }
}
