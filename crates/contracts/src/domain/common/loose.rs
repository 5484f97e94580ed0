//! Permissive scalars for gateway payloads.
//!
//! The gateway is loose about types: prices come back as `"12.50"`, `12.5`,
//! `null` or not at all, lengths as `18` or `"18"`. These wrappers accept all
//! of them and collapse anything non-numeric to zero, so arithmetic done on
//! top of them never sees a NaN.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Parses the longest numeric prefix of `input` the way a browser's
/// `parseFloat` does: leading whitespace is skipped, trailing garbage is
/// ignored. Returns `None` when there is no numeric prefix or the value is not
/// finite.
pub fn parse_float_prefix(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let mut frac_end = end + 1;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        mantissa_digits += frac_end - (end + 1);
        if mantissa_digits > 0 {
            end = frac_end;
        }
    }

    if mantissa_digits == 0 {
        return None;
    }

    // exponent only counts when at least one digit follows it
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parses a leading integer the way `parseInt(value, 10)` does.
pub fn parse_int_prefix(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return None;
    }

    s[..end].parse::<i64>().ok()
}

/// Decimal number parsed permissively; anything unparseable is `0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "Value", into = "f64")]
pub struct LooseNumber(pub f64);

impl LooseNumber {
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<Value> for LooseNumber {
    fn from(value: Value) -> Self {
        let parsed = match value {
            Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
            Value::String(s) => parse_float_prefix(&s),
            _ => None,
        };
        LooseNumber(parsed.unwrap_or(0.0))
    }
}

impl From<LooseNumber> for f64 {
    fn from(n: LooseNumber) -> Self {
        n.0
    }
}

impl From<f64> for LooseNumber {
    fn from(v: f64) -> Self {
        LooseNumber(if v.is_finite() { v } else { 0.0 })
    }
}

impl fmt::Display for LooseNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whole number parsed permissively (fractions are truncated); anything
/// unparseable is `0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "Value", into = "i64")]
pub struct LooseInteger(pub i64);

impl LooseInteger {
    pub fn value(self) -> i64 {
        self.0
    }
}

impl From<Value> for LooseInteger {
    fn from(value: Value) -> Self {
        let parsed = match value {
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().filter(|v| v.is_finite()).map(|v| v.trunc() as i64)),
            Value::String(s) => parse_int_prefix(&s),
            _ => None,
        };
        LooseInteger(parsed.unwrap_or(0))
    }
}

impl From<LooseInteger> for i64 {
    fn from(n: LooseInteger) -> Self {
        n.0
    }
}

impl From<i64> for LooseInteger {
    fn from(v: i64) -> Self {
        LooseInteger(v)
    }
}

impl fmt::Display for LooseInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Free text that may arrive as a JSON number (`"length": 18`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "Value", into = "String")]
pub struct LooseText(pub String);

impl LooseText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Value> for LooseText {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => LooseText(s),
            Value::Number(n) => LooseText(n.to_string()),
            Value::Bool(b) => LooseText(b.to_string()),
            _ => LooseText::default(),
        }
    }
}

impl From<LooseText> for String {
    fn from(t: LooseText) -> Self {
        t.0
    }
}

impl From<&str> for LooseText {
    fn from(s: &str) -> Self {
        LooseText(s.to_string())
    }
}

impl From<String> for LooseText {
    fn from(s: String) -> Self {
        LooseText(s)
    }
}

impl fmt::Display for LooseText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_float_prefix() {
        assert_eq!(parse_float_prefix("12.50"), Some(12.5));
        assert_eq!(parse_float_prefix("  7"), Some(7.0));
        assert_eq!(parse_float_prefix("3.5kg"), Some(3.5));
        assert_eq!(parse_float_prefix("-2"), Some(-2.0));
        assert_eq!(parse_float_prefix(".5"), Some(0.5));
        assert_eq!(parse_float_prefix("5."), Some(5.0));
        assert_eq!(parse_float_prefix("1e3"), Some(1000.0));
        assert_eq!(parse_float_prefix("2e"), Some(2.0));
        assert_eq!(parse_float_prefix("abc"), None);
        assert_eq!(parse_float_prefix(""), None);
        assert_eq!(parse_float_prefix("."), None);
        assert_eq!(parse_float_prefix("-"), None);
    }

    #[test]
    fn test_parse_int_prefix() {
        assert_eq!(parse_int_prefix("3"), Some(3));
        assert_eq!(parse_int_prefix("3.9"), Some(3));
        assert_eq!(parse_int_prefix(" 12 pcs"), Some(12));
        assert_eq!(parse_int_prefix("x3"), None);
    }

    #[test]
    fn loose_number_defaults_garbage_to_zero() {
        let cases = [json!(null), json!("n/a"), json!(true), json!([1]), json!({})];
        for case in cases {
            let n: LooseNumber = serde_json::from_value(case).unwrap();
            assert_eq!(n.value(), 0.0);
        }
        let n: LooseNumber = serde_json::from_value(json!("19.99")).unwrap();
        assert_eq!(n.value(), 19.99);
    }

    #[test]
    fn loose_integer_truncates() {
        let n: LooseInteger = serde_json::from_value(json!(4.8)).unwrap();
        assert_eq!(n.value(), 4);
        let n: LooseInteger = serde_json::from_value(json!("7 units")).unwrap();
        assert_eq!(n.value(), 7);
    }

    #[test]
    fn loose_text_accepts_numbers() {
        let t: LooseText = serde_json::from_value(json!(18)).unwrap();
        assert_eq!(t.as_str(), "18");
        let t: LooseText = serde_json::from_value(json!(null)).unwrap();
        assert!(t.is_empty());
    }
}
