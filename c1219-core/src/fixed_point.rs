//! Implied-decimal price and threshold rendering
//!
//! Prices travel as a bare integer plus a "trailing digits" count taken from
//! the high nibble of the price control byte. The decimal point is inserted
//! textually so no precision is lost to floating point.

use crate::currency::CurrencyCode;
use crate::uint::U48;

/// Placeholder rendered for all-bits-set price and threshold values
pub const NOT_USED: &str = "Not Used";

/// Placeholder rendered when a threshold divisor is zero
pub const INVALID_DIVISOR: &str = "Invalid Divisor";

/// Render `raw` with a decimal point `trailing_digits` places from the right
///
/// `u32::MAX` renders as [`NOT_USED`].
pub fn format_fixed_point(raw: u32, trailing_digits: u8) -> String {
    format_fixed_point_with_sentinel(raw, trailing_digits, u32::MAX)
}

/// Same as [`format_fixed_point`] with a caller supplied "not used" value
pub fn format_fixed_point_with_sentinel(raw: u32, trailing_digits: u8, sentinel: u32) -> String {
    if raw == sentinel {
        return NOT_USED.to_string();
    }

    let digits = raw.to_string();
    let places = trailing_digits as usize;
    if places == 0 {
        return digits;
    }

    if digits.len() <= places {
        let mut out = String::with_capacity(places + 2);
        out.push_str("0.");
        out.extend(std::iter::repeat_n('0', places - digits.len()));
        out.push_str(&digits);
        out
    } else {
        let split = digits.len() - places;
        format!("{}.{}", &digits[..split], &digits[split..])
    }
}

/// Render a price prefixed with the currency symbol
pub fn format_price(raw: u32, trailing_digits: u8, currency: CurrencyCode) -> String {
    if raw == u32::MAX {
        return NOT_USED.to_string();
    }
    format!(
        "{}{}",
        currency.symbol(),
        format_fixed_point(raw, trailing_digits)
    )
}

/// Render a block threshold scaled by the table multiplier and divisor
///
/// `U48::MAX` renders as [`NOT_USED`]; a zero divisor as [`INVALID_DIVISOR`].
/// Two decimals, rounded half up, computed in integers over the full
/// 48-bit by 32-bit range.
pub fn format_threshold(raw: U48, multiplier: u32, divisor: u32, units: &str) -> String {
    if raw.is_not_used() {
        return NOT_USED.to_string();
    }
    if divisor == 0 {
        return INVALID_DIVISOR.to_string();
    }
    let divisor = divisor as u128;
    let hundredths = (raw.get() as u128 * multiplier as u128 * 100 + divisor / 2) / divisor;
    format!("{}.{:02} {}", hundredths / 100, hundredths % 100, units)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_fixed_point_placement() {
        assert_eq!(format_fixed_point(14, 2), "0.14");
        assert_eq!(format_fixed_point(1234, 2), "12.34");
        assert_eq!(format_fixed_point(5, 3), "0.005");
        assert_eq!(format_fixed_point(0, 2), "0.00");
        assert_eq!(format_fixed_point(987, 0), "987");
        assert_eq!(format_fixed_point(100, 2), "1.00");
        assert_eq!(format_fixed_point(1, 15), "0.000000000000001");
    }

    #[test]
    fn test_price_with_currency() {
        assert_eq!(format_price(1234, 2, CurrencyCode::UsDollar), "$12.34");
        assert_eq!(format_price(u32::MAX, 2, CurrencyCode::UsDollar), NOT_USED);
    }

    #[test]
    fn test_threshold() {
        let raw = U48::new(1500).unwrap();
        assert_eq!(format_threshold(raw, 1, 1000, "kWh"), "1.50 kWh");
        assert_eq!(format_threshold(raw, 2, 1, "kWh"), "3000.00 kWh");
        assert_eq!(format_threshold(raw, 1, 0, "kWh"), INVALID_DIVISOR);
        assert_eq!(format_threshold(U48::new(2).unwrap(), 1, 3, "kWh"), "0.67 kWh");
    }

    #[test]
    fn test_threshold_keeps_large_values_exact() {
        // The product is far above 2^53
        let raw = U48::new(0xFFFF_FFFF_FFFE).unwrap();
        assert_eq!(
            format_threshold(raw, 32_769, 1, "Wh"),
            "9223653511831420926.00 Wh"
        );
        assert_eq!(format_threshold(U48::new(1).unwrap(), 1, 3, "Wh"), "0.33 Wh");
    }

    proptest! {
        #[test]
        fn prop_sentinel_price_is_not_used(digits in 0u8..=15) {
            prop_assert_eq!(format_fixed_point(u32::MAX, digits), NOT_USED);
        }

        #[test]
        fn prop_sentinel_threshold_is_not_used(
            multiplier in any::<u32>(),
            divisor in any::<u32>(),
            units in "[a-zA-Z]{0,8}",
        ) {
            prop_assert_eq!(format_threshold(U48::MAX, multiplier, divisor, &units), NOT_USED);
        }

        #[test]
        fn prop_fixed_point_keeps_every_digit(raw in 0u32..u32::MAX, digits in 0u8..=15) {
            let text = format_fixed_point(raw, digits);
            let stripped: String = text.chars().filter(|c| *c != '.').collect();
            prop_assert_eq!(stripped.trim_start_matches('0').to_string(), raw.to_string().trim_start_matches('0').to_string());
            if digits > 0 {
                let fraction = text.split('.').nth(1).unwrap_or("");
                prop_assert_eq!(fraction.len(), digits as usize);
            }
        }
    }
}
