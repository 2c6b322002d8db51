// src/application/commands/categories/service.rs
use std::sync::Arc;

use crate::domain::category::CategoryRepository;

pub struct CategoryCommandService {
    pub(super) repo: Arc<dyn CategoryRepository>,
}

impl CategoryCommandService {
    pub fn new(repo: Arc<dyn CategoryRepository>) -> Self {
        Self { repo }
    }
}
