//! Money calculation utilities using rust_decimal for precision
//!
//! All calculations are done using `Decimal` internally, then converted to `f64`
//! for storage/serialization.

use rust_decimal::prelude::*;

/// Rounding: 2 decimal places, half away from zero
const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value, "Non-representable money value, using zero");
        Decimal::ZERO
    })
}

/// Convert Decimal back to f64 for storage, rounded to cents
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// unit_price × quantity
pub fn line_total(unit_price: f64, quantity: i64) -> Decimal {
    to_decimal(unit_price) * Decimal::from(quantity)
}

/// Σ line totals
pub fn sum<I: IntoIterator<Item = Decimal>>(totals: I) -> Decimal {
    totals.into_iter().fold(Decimal::ZERO, |acc, t| acc + t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_decimal_precision() {
        // 0.1 + 0.2 != 0.3 in f64
        let a = 0.1_f64;
        let b = 0.2_f64;
        assert_ne!(a + b, 0.3);

        let sum_dec = to_decimal(a) + to_decimal(b);
        assert_eq!(to_f64(sum_dec), 0.3);
    }

    #[test]
    fn test_accumulation_precision() {
        let total = sum((0..1000).map(|_| to_decimal(0.01)));
        assert_eq!(to_f64(total), 10.0);
    }

    #[test]
    fn test_line_total() {
        assert_eq!(to_f64(line_total(5.99, 2)), 11.98);
        assert_eq!(to_f64(line_total(10.99, 3)), 32.97);
        assert_eq!(to_f64(line_total(7.99, 1)), 7.99);
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        assert_eq!(to_f64(Decimal::new(1005, 3)), 1.01);
        assert_eq!(to_f64(Decimal::new(-1005, 3)), -1.01);
    }

    #[test]
    fn test_order_of_menu_lines() {
        // Cappuccino ×2 + Brekkie Roll + Vanilla Milkshake ×3
        let total = sum([
            line_total(5.99, 2),
            line_total(11.99, 1),
            line_total(7.99, 3),
        ]);
        assert_eq!(to_f64(total), 47.94);
    }
}
