// src/domain/category/entity.rs
use crate::domain::category::value_objects::{CategoryId, CategoryName};

/// Pure lookup data used to enrich menu items; no behavior of its own.
#[derive(Debug, Clone)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
}

impl Category {
    pub fn new(id: CategoryId, name: CategoryName) -> Self {
        Self { id, name }
    }

    pub fn rename(&mut self, name: CategoryName) {
        self.name = name;
    }
}
