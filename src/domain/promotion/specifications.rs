// src/domain/promotion/specifications.rs
use crate::domain::product::entity::Product;
use crate::domain::promotion::entity::Promotion;
use crate::domain::promotion::value_objects::{TimeOfDay, Weekday};

/// Decides whether a promotion applies to a product at a given day and time.
///
/// An expired promotion never applies, regardless of its window. Coverage is
/// checked by product identity. When several promotions satisfy this
/// specification for the same product, callers apply the first one in their
/// candidate list; there is no precedence by discount size.
pub struct PromotionEligibilitySpec<'a> {
    promotion: &'a Promotion,
    day: Weekday,
    time: TimeOfDay,
}

impl<'a> PromotionEligibilitySpec<'a> {
    pub fn new(promotion: &'a Promotion, day: Weekday, time: TimeOfDay) -> Self {
        Self {
            promotion,
            day,
            time,
        }
    }

    pub fn is_satisfied_by(&self, product: &Product) -> bool {
        !self.promotion.is_expired
            && self.promotion.covers(product.id)
            && self.promotion.is_valid_on(self.day)
            && self.promotion.window.contains(self.time)
    }
}
