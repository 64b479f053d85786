//! Display formatting for prices and quantities.
//!
//! All rounding happens at render time; callers keep full f64 precision.

/// Format a non-negative magnitude with thousands separators and fixed
/// decimals, e.g. `thousands(65000.12345678, 2)` -> "65,000.12"
pub fn thousands(value: f64, decimals: usize) -> String {
    let rendered = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match rendered.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rendered.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    let digits = int_part.len();
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match frac_part {
        Some(frac) => format!("{}.{}", grouped, frac),
        None => grouped,
    }
}

/// "$65,000.12" (two decimals, cents)
pub fn format_usd(value: f64) -> String {
    if value < 0.0 {
        format!("-${}", thousands(value, 2))
    } else {
        format!("${}", thousands(value, 2))
    }
}

/// Signed dollar delta: "$+1,234.56" / "$-1,234.56"
pub fn format_signed_usd(value: f64) -> String {
    let sign = if value < 0.0 { '-' } else { '+' };
    format!("${}{}", sign, thousands(value, 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thousands_grouping() {
        assert_eq!(thousands(65000.12345678, 2), "65,000.12");
        assert_eq!(thousands(1234567.891, 2), "1,234,567.89");
        assert_eq!(thousands(999.99, 2), "999.99");
        assert_eq!(thousands(0.5, 8), "0.50000000");
        assert_eq!(thousands(1000.0, 0), "1,000");
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(65000.12345678), "$65,000.12");
        assert_eq!(format_usd(-1234.5), "-$1,234.50");
        assert_eq!(format_usd(0.0), "$0.00");
    }

    #[test]
    fn test_format_signed_usd() {
        assert_eq!(format_signed_usd(1500.0), "$+1,500.00");
        assert_eq!(format_signed_usd(-2500.25), "$-2,500.25");
        assert_eq!(format_signed_usd(0.0), "$+0.00");
    }

    #[test]
    fn test_conversion_display_rounds_to_cents() {
        let price = 65000.12345678;
        let amount = 0.5;
        assert_eq!(format_usd(amount * price), "$32,500.06");
    }
}
