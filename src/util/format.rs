//! Display formatting for money-like values.

/// Two decimal places with thousands grouping, e.g. `12345.678` becomes
/// `"12,345.68"`. Non-finite values are passed through as-is so an
/// undefined calculation stays visibly undefined.
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let rendered = format!("{value:.2}");
    let (number, decimals) = rendered
        .split_once('.')
        .unwrap_or((rendered.as_str(), "00"));
    let (sign, digits) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}{grouped}.{decimals}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_and_keeps_two_decimals() {
        assert_eq!(format_amount(315.0), "315.00");
        assert_eq!(format_amount(1234.5), "1,234.50");
        assert_eq!(format_amount(1234567.891), "1,234,567.89");
    }

    #[test]
    fn keeps_the_sign_outside_the_grouping() {
        assert_eq!(format_amount(-1234.5), "-1,234.50");
        assert_eq!(format_amount(-0.25), "-0.25");
    }

    #[test]
    fn small_values_are_untouched() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(999.999), "1,000.00");
    }

    #[test]
    fn non_finite_values_pass_through() {
        assert_eq!(format_amount(f64::NAN), "NaN");
        assert_eq!(format_amount(f64::INFINITY), "inf");
    }
}
