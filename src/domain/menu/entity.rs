// src/domain/menu/entity.rs
use crate::domain::category::{CategoryId, CategoryName};
use crate::domain::menu::pricing;
use crate::domain::product::{Product, ProductId};
use crate::domain::promotion::{
    Discount, Promotion, PromotionEligibilitySpec, PromotionId, TimeOfDay, Weekday,
};
use chrono::{DateTime, Datelike, Utc};
use std::collections::HashMap;
use uuid::Uuid;

/// A menu exists only for the duration of a request; it is identified and
/// named but never persisted.
#[derive(Debug, Clone)]
pub struct Menu {
    pub id: Uuid,
    pub name: String,
}

/// Snapshot of a visible product with its applied promotion and final price.
#[derive(Debug, Clone)]
pub struct MenuEntry {
    pub product_id: ProductId,
    pub name: String,
    pub price: i64,
    pub final_price: i64,
    pub category: Option<CategorySummary>,
    pub promotion: Option<AppliedPromotion>,
}

#[derive(Debug, Clone)]
pub struct CategorySummary {
    pub id: CategoryId,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct AppliedPromotion {
    pub id: PromotionId,
    pub description: String,
    pub discount: Discount,
}

#[derive(Debug, Clone)]
pub struct AssembledMenu {
    pub menu_id: Uuid,
    pub menu_name: String,
    pub items: Vec<MenuEntry>,
}

impl Menu {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }

    /// Project the effective menu for `now`: every visible product paired
    /// with at most one currently-active promotion and its final price.
    ///
    /// This is the only place visibility is filtered. For each visible
    /// product the first eligible promotion in `promotions` wins, so callers
    /// supply candidates in a deterministic order (creation order). A
    /// category id with no entry in `category_names` is silently omitted
    /// from the item. Output order follows `products`; nothing is re-sorted.
    pub fn assemble(
        &self,
        products: &[Product],
        promotions: &[Promotion],
        category_names: &HashMap<CategoryId, CategoryName>,
        now: DateTime<Utc>,
    ) -> AssembledMenu {
        let day = Weekday::from(now.weekday());
        let time = TimeOfDay::from_datetime(&now);

        let items = products
            .iter()
            .filter(|product| product.visible)
            .map(|product| {
                let active = promotions.iter().find(|promotion| {
                    PromotionEligibilitySpec::new(promotion, day, time).is_satisfied_by(product)
                });

                let final_price =
                    pricing::final_price(product.price.cents(), active.map(|p| &p.discount));

                let category = product.category_id.and_then(|id| {
                    category_names.get(&id).map(|name| CategorySummary {
                        id,
                        name: name.as_str().to_owned(),
                    })
                });

                MenuEntry {
                    product_id: product.id,
                    name: product.name.as_str().to_owned(),
                    price: product.price.cents(),
                    final_price,
                    category,
                    promotion: active.map(|promotion| AppliedPromotion {
                        id: promotion.id,
                        description: promotion.description.clone(),
                        discount: promotion.discount,
                    }),
                }
            })
            .collect();

        AssembledMenu {
            menu_id: self.id,
            menu_name: self.name.clone(),
            items,
        }
    }
}
