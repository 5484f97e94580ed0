//! Currency rounding and formatting

/// Rounds to whole cents
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let rounded = (value * 100.0).round() / 100.0;
    // avoid handing out negative zero
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Formats an amount with exactly two decimals (`1234.5` -> `"1234.50"`)
pub fn format_money(value: f64) -> String {
    format!("{:.2}", round2(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(12.345), 12.35);
        assert_eq!(round2(-21.0), -21.0);
        assert_eq!(round2(f64::NAN), 0.0);
        assert_eq!(round2(-0.001), 0.0);
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(12.0), "12.00");
        assert_eq!(format_money(-21.0), "-21.00");
        assert_eq!(format_money(0.1 + 0.2), "0.30");
        assert_eq!(format_money(-0.0), "0.00");
    }
}
