// tests/support/builders.rs
use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use cardapio_core::domain::category::{Category, CategoryId, CategoryName};
use cardapio_core::domain::product::{Price, Product, ProductId, ProductName};
use cardapio_core::domain::promotion::{
    Discount, Promotion, PromotionId, TimeWindow, Weekday,
};

use super::mocks::fixed_now;

pub fn category(name: &str) -> Category {
    Category::new(CategoryId::generate(), CategoryName::new(name).unwrap())
}

pub struct ProductBuilder {
    id: ProductId,
    name: String,
    price: i64,
    category_id: Option<CategoryId>,
    visible: bool,
}

impl ProductBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            id: ProductId::generate(),
            name: name.into(),
            price: 1000,
            category_id: None,
            visible: true,
        }
    }

    pub fn price(mut self, cents: i64) -> Self {
        self.price = cents;
        self
    }

    pub fn category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn build(self) -> Product {
        Product::new(
            self.id,
            ProductName::new(self.name).unwrap(),
            Price::new(self.price).unwrap(),
            self.category_id,
            self.visible,
        )
    }
}

pub struct PromotionBuilder {
    id: PromotionId,
    description: String,
    discount: Discount,
    valid_days: BTreeSet<Weekday>,
    window: TimeWindow,
    valid_until: Option<DateTime<Utc>>,
    is_expired: bool,
    product_ids: Vec<ProductId>,
    created_at: DateTime<Utc>,
}

impl PromotionBuilder {
    /// Defaults to an all-day Monday percentage promotion covering nothing.
    pub fn new(description: &str) -> Self {
        Self {
            id: PromotionId::generate(),
            description: description.into(),
            discount: Discount::Percentage(10),
            valid_days: BTreeSet::from([Weekday::Mon]),
            window: TimeWindow::parse("00:00", "23:59").unwrap(),
            valid_until: None,
            is_expired: false,
            product_ids: Vec::new(),
            created_at: fixed_now(),
        }
    }

    pub fn discount(mut self, discount: Discount) -> Self {
        self.discount = discount;
        self
    }

    pub fn days(mut self, days: impl IntoIterator<Item = Weekday>) -> Self {
        self.valid_days = days.into_iter().collect();
        self
    }

    pub fn window(mut self, start: &str, end: &str) -> Self {
        self.window = TimeWindow::parse(start, end).unwrap();
        self
    }

    pub fn valid_until(mut self, until: DateTime<Utc>) -> Self {
        self.valid_until = Some(until);
        self
    }

    pub fn expired(mut self) -> Self {
        self.is_expired = true;
        self
    }

    pub fn covering(mut self, product_ids: impl IntoIterator<Item = ProductId>) -> Self {
        self.product_ids.extend(product_ids);
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn build(self) -> Promotion {
        Promotion::new(
            self.id,
            self.description,
            self.discount,
            self.valid_days,
            self.window,
            self.valid_until,
            self.is_expired,
            self.product_ids,
            self.created_at,
        )
    }
}
