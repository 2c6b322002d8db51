// src/application/commands/products/service.rs
use std::sync::Arc;

use crate::domain::{category::CategoryRepository, product::ProductRepository};

pub struct ProductCommandService {
    pub(super) product_repo: Arc<dyn ProductRepository>,
    pub(super) category_repo: Arc<dyn CategoryRepository>,
}

impl ProductCommandService {
    pub fn new(
        product_repo: Arc<dyn ProductRepository>,
        category_repo: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            product_repo,
            category_repo,
        }
    }
}
