//! Display formatting for INR amounts.
//!
//! Indian digit grouping places the first separator after three digits
//! and every two digits after that: 1234567 -> "12,34,567". Amounts are
//! whole rupees site-wide, so fractional paise are never displayed.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

/// Format a whole-rupee amount with the rupee sign and Indian grouping.
pub fn format_inr(amount: Decimal) -> String {
    let rupees = amount.round_dp(0).to_i64().unwrap_or(0);
    let negative = rupees < 0;
    let digits = rupees.unsigned_abs().to_string();

    let mut grouped = String::new();
    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 {
            let remaining = len - i;
            // Separators fall before the last 3 digits, then every 2.
            if remaining >= 3 && (remaining - 3) % 2 == 0 {
                grouped.push(',');
            }
        }
        grouped.push(c);
    }

    if negative {
        format!("-\u{20B9}{}", grouped)
    } else {
        format!("\u{20B9}{}", grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_small_amounts_have_no_separator() {
        assert_eq!(format_inr(dec!(0)), "₹0");
        assert_eq!(format_inr(dec!(999)), "₹999");
    }

    #[test]
    fn test_thousands_group_western_style_first() {
        assert_eq!(format_inr(dec!(1000)), "₹1,000");
        assert_eq!(format_inr(dec!(33500)), "₹33,500");
    }

    #[test]
    fn test_lakhs_and_crores_group_by_two() {
        assert_eq!(format_inr(dec!(123456)), "₹1,23,456");
        assert_eq!(format_inr(dec!(1234567)), "₹12,34,567");
        assert_eq!(format_inr(dec!(12345678)), "₹1,23,45,678");
    }

    #[test]
    fn test_negative_amounts_keep_the_sign_outside() {
        assert_eq!(format_inr(dec!(-16750)), "-₹16,750");
    }
}
