/// Format a gift price for display: rounded to whole units with a `,`
/// separator every three digits. Zero and NaN prices (unlisted or failed
/// quotes) render as the not-available marker.
pub fn format_price(price: f64) -> String {
    if price == 0.0 || price.is_nan() {
        return "N/A".to_string();
    }

    let rounded = price.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let grouped = digits
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap())
        .collect::<Vec<_>>()
        .join(",");

    if rounded < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Current-price display form: two fixed decimals with a dollar suffix.
pub fn format_usd(price: f64) -> String {
    format!("{:.2}$", price)
}

/// Change indicator form: two fixed decimals, explicit `+` on
/// non-negative values, `%` suffix.
pub fn format_percent(change: f64) -> String {
    if change >= 0.0 {
        format!("+{:.2}%", change)
    } else {
        format!("{:.2}%", change)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_and_nan_are_not_available() {
        assert_eq!(format_price(0.0), "N/A");
        assert_eq!(format_price(f64::NAN), "N/A");
    }

    #[test]
    fn test_rounds_then_groups() {
        assert_eq!(format_price(1234567.8), "1,234,568");
        assert_eq!(format_price(1234567.0), "1,234,567");
    }

    #[test]
    fn test_small_values_ungrouped() {
        assert_eq!(format_price(999.4), "999");
        assert_eq!(format_price(42.0), "42");
        assert_eq!(format_price(0.6), "1");
    }

    #[test]
    fn test_group_boundaries() {
        assert_eq!(format_price(1000.0), "1,000");
        assert_eq!(format_price(100000.0), "100,000");
    }

    #[test]
    fn test_usd_form() {
        assert_eq!(format_usd(6.0316), "6.03$");
        assert_eq!(format_usd(6.0), "6.00$");
    }

    #[test]
    fn test_percent_sign_prefix() {
        assert_eq!(format_percent(0.5), "+0.50%");
        assert_eq!(format_percent(0.0), "+0.00%");
        assert_eq!(format_percent(-3.1415), "-3.14%");
    }
}
