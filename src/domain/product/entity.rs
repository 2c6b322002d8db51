// src/domain/product/entity.rs
use crate::domain::category::CategoryId;
use crate::domain::product::value_objects::{Price, ProductId, ProductName};

/// Catalog product. Menu assembly treats this as read-only input; only the
/// explicit mutators below change it.
#[derive(Debug, Clone)]
pub struct Product {
    pub id: ProductId,
    pub name: ProductName,
    pub price: Price,
    pub category_id: Option<CategoryId>,
    pub visible: bool,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: ProductName,
        price: Price,
        category_id: Option<CategoryId>,
        visible: bool,
    ) -> Self {
        Self {
            id,
            name,
            price,
            category_id,
            visible,
        }
    }

    pub fn rename(&mut self, name: ProductName) {
        self.name = name;
    }

    pub fn set_price(&mut self, price: Price) {
        self.price = price;
    }

    pub fn set_category(&mut self, category_id: Option<CategoryId>) {
        self.category_id = category_id;
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}
