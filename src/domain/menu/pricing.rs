// src/domain/menu/pricing.rs
use crate::domain::promotion::value_objects::Discount;

/// Final charged price in the smallest currency unit.
///
/// A fixed discount price replaces the original verbatim, even when it is
/// higher; it is a pass-through, not a cap. A percentage discount rounds
/// half-up in integer arithmetic, so `1999` at 33% yields `1339`.
pub fn final_price(original: i64, discount: Option<&Discount>) -> i64 {
    match discount {
        None => original,
        Some(Discount::Price(fixed)) => *fixed,
        Some(Discount::Percentage(pct)) => {
            let remaining = i64::from(100 - u16::from(*pct));
            (original * remaining + 50) / 100
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_discount_returns_original() {
        assert_eq!(final_price(1999, None), 1999);
        assert_eq!(final_price(0, None), 0);
    }

    #[test]
    fn fixed_price_is_passed_through_verbatim() {
        assert_eq!(final_price(1999, Some(&Discount::Price(990))), 990);
        // Deliberately not capped at the original price.
        assert_eq!(final_price(1999, Some(&Discount::Price(2500))), 2500);
        assert_eq!(final_price(1999, Some(&Discount::Price(0))), 0);
    }

    #[test]
    fn percentage_rounds_to_nearest() {
        // 1999 - 1999 * 0.33 = 1339.33
        assert_eq!(final_price(1999, Some(&Discount::Percentage(33))), 1339);
        // 1999 - 1999 * 0.25 = 1499.25
        assert_eq!(final_price(1999, Some(&Discount::Percentage(25))), 1499);
        // 150 - 150 * 0.33 = 100.5, half rounds up
        assert_eq!(final_price(150, Some(&Discount::Percentage(33))), 101);
    }

    #[test]
    fn percentage_extremes() {
        assert_eq!(final_price(1999, Some(&Discount::Percentage(0))), 1999);
        assert_eq!(final_price(1999, Some(&Discount::Percentage(100))), 0);
    }
}
