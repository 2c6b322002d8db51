// src/application/queries/categories.rs
use crate::application::{
    dto::CategoryDto,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::category::{CategoryId, CategoryRepository};
use std::sync::Arc;
use uuid::Uuid;

pub struct CategoryQueryService {
    repo: Arc<dyn CategoryRepository>,
}

impl CategoryQueryService {
    pub fn new(repo: Arc<dyn CategoryRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_category(&self, id: Uuid) -> ApplicationResult<CategoryDto> {
        let category = self
            .repo
            .find_by_id(CategoryId::from(id))
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;
        Ok(category.into())
    }

    pub async fn list_categories(&self) -> ApplicationResult<Vec<CategoryDto>> {
        let categories = self.repo.list().await?;
        Ok(categories.into_iter().map(Into::into).collect())
    }
}
