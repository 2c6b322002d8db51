// src/domain/promotion/entity.rs
use crate::domain::product::ProductId;
use crate::domain::promotion::value_objects::{Discount, PromotionId, TimeWindow, Weekday};
use chrono::{DateTime, Utc};
use std::collections::BTreeSet;

/// A time-windowed discount covering a set of products. The `Discount` enum
/// guarantees exactly one mode is set; the covered-product relation is an
/// owned id collection, persisted through a join table.
#[derive(Debug, Clone)]
pub struct Promotion {
    pub id: PromotionId,
    pub description: String,
    pub discount: Discount,
    pub valid_days: BTreeSet<Weekday>,
    pub window: TimeWindow,
    pub valid_until: Option<DateTime<Utc>>,
    pub is_expired: bool,
    product_ids: Vec<ProductId>,
    pub created_at: DateTime<Utc>,
}

impl Promotion {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: PromotionId,
        description: String,
        discount: Discount,
        valid_days: BTreeSet<Weekday>,
        window: TimeWindow,
        valid_until: Option<DateTime<Utc>>,
        is_expired: bool,
        product_ids: Vec<ProductId>,
        created_at: DateTime<Utc>,
    ) -> Self {
        let mut promotion = Self {
            id,
            description,
            discount,
            valid_days,
            window,
            valid_until,
            is_expired,
            product_ids: Vec::new(),
            created_at,
        };
        for product_id in product_ids {
            promotion.add_product(product_id);
        }
        promotion
    }

    /// Covered product ids, in insertion order.
    pub fn product_ids(&self) -> &[ProductId] {
        &self.product_ids
    }

    /// Coverage is membership by identity, not value equality.
    pub fn covers(&self, product_id: ProductId) -> bool {
        self.product_ids.contains(&product_id)
    }

    pub fn add_product(&mut self, product_id: ProductId) {
        if !self.covers(product_id) {
            self.product_ids.push(product_id);
        }
    }

    pub fn remove_product(&mut self, product_id: ProductId) {
        self.product_ids.retain(|id| *id != product_id);
    }

    pub fn expire(&mut self) {
        self.is_expired = true;
    }

    pub fn is_valid_on(&self, day: Weekday) -> bool {
        self.valid_days.contains(&day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::promotion::value_objects::Discount;

    fn sample_promotion() -> Promotion {
        Promotion::new(
            PromotionId::generate(),
            "happy hour".into(),
            Discount::Percentage(20),
            BTreeSet::from([Weekday::Mon, Weekday::Fri]),
            TimeWindow::parse("17:00", "19:00").unwrap(),
            None,
            false,
            Vec::new(),
            Utc::now(),
        )
    }

    #[test]
    fn add_product_ignores_duplicates() {
        let mut promotion = sample_promotion();
        let product_id = ProductId::generate();
        promotion.add_product(product_id);
        promotion.add_product(product_id);
        assert_eq!(promotion.product_ids().len(), 1);
        assert!(promotion.covers(product_id));
    }

    #[test]
    fn remove_product_clears_coverage() {
        let mut promotion = sample_promotion();
        let keep = ProductId::generate();
        let drop = ProductId::generate();
        promotion.add_product(keep);
        promotion.add_product(drop);
        promotion.remove_product(drop);
        assert!(promotion.covers(keep));
        assert!(!promotion.covers(drop));
    }

    #[test]
    fn coverage_preserves_insertion_order() {
        let mut promotion = sample_promotion();
        let first = ProductId::generate();
        let second = ProductId::generate();
        promotion.add_product(first);
        promotion.add_product(second);
        assert_eq!(promotion.product_ids(), &[first, second]);
    }
}
