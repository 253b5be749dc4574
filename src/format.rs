//! Display formatting for KPI values.

/// Whole numbers get thousands separators; fractional ones keep two decimals.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "-".to_string();
    }
    let rounded = (value * 100.0).round() / 100.0;
    let negative = rounded < 0.0;
    let abs = rounded.abs();
    let whole = abs.trunc() as u64;
    let cents = ((abs - abs.trunc()) * 100.0).round() as u64;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    if cents == 0 {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{:02}", sign, grouped, cents)
    }
}

/// Signed delta and the CSS class for its badge.
pub fn format_variation(variation: f64) -> (String, &'static str) {
    if variation > 0.0 {
        (format!("+{}", format_number(variation)), "variation variation-up")
    } else if variation < 0.0 {
        (format_number(variation), "variation variation-down")
    } else {
        ("=".to_string(), "variation variation-flat")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(13774.0), "13 774");
        assert_eq!(format_number(1234567.5), "1 234 567.50");
        assert_eq!(format_number(-1.04), "-1.04");
        assert_eq!(format_number(99.999), "100");
        assert_eq!(format_number(f64::NAN), "-");
    }

    #[test]
    fn test_format_variation() {
        assert_eq!(format_variation(1779.0), ("+1 779".to_string(), "variation variation-up"));
        assert_eq!(format_variation(-0.3).1, "variation variation-down");
        assert_eq!(format_variation(0.0).0, "=");
    }
}
