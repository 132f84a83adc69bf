//! Display formatting for the dashboard

use rust_decimal::{Decimal, RoundingStrategy};

pub const CURRENCY_CODE: &str = "LKR";

/// `LKR 12,500.5`: grouped thousands, at most two fraction digits
pub fn format_currency(amount: Decimal) -> String {
    format!("{} {}", CURRENCY_CODE, group_thousands(amount, 2))
}

/// `12.50 kg`: always two fraction digits
pub fn format_weight(weight_kg: Decimal) -> String {
    let rounded = weight_kg.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2} kg", rounded)
}

fn group_thousands(value: Decimal, max_fraction_digits: u32) -> String {
    let rounded = value
        .round_dp_with_strategy(max_fraction_digits, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let text = rounded.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    if rounded.is_sign_negative() && !rounded.is_zero() {
        grouped.insert(0, '-');
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(dec("2500")), "LKR 2,500");
        assert_eq!(format_currency(dec("1234567.50")), "LKR 1,234,567.5");
        assert_eq!(format_currency(dec("999")), "LKR 999");
        assert_eq!(format_currency(dec("0.125")), "LKR 0.13");
        assert_eq!(format_currency(Decimal::ZERO), "LKR 0");
        assert_eq!(format_currency(dec("-1500")), "LKR -1,500");
    }

    #[test]
    fn test_format_weight() {
        assert_eq!(format_weight(dec("12.5")), "12.50 kg");
        assert_eq!(format_weight(dec("0")), "0.00 kg");
        assert_eq!(format_weight(dec("3.14159")), "3.14 kg");
    }
}
