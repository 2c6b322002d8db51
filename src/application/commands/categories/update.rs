// src/application/commands/categories/update.rs
use super::CategoryCommandService;
use crate::application::{
    dto::CategoryDto,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::category::{CategoryId, CategoryName};
use uuid::Uuid;

pub struct UpdateCategoryCommand {
    pub id: Uuid,
    pub name: String,
}

impl CategoryCommandService {
    pub async fn update_category(
        &self,
        command: UpdateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let id = CategoryId::from(command.id);
        let mut category = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;

        category.rename(CategoryName::new(command.name)?);
        self.repo.update(&category).await?;
        Ok(category.into())
    }
}
