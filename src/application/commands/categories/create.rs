// src/application/commands/categories/create.rs
use super::CategoryCommandService;
use crate::application::{
    dto::CategoryDto,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::category::{Category, CategoryId, CategoryName};

pub struct CreateCategoryCommand {
    pub name: String,
}

impl CategoryCommandService {
    pub async fn create_category(
        &self,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let name = CategoryName::new(command.name)?;

        if self.repo.find_by_name(&name).await?.is_some() {
            return Err(ApplicationError::conflict(format!(
                "category {name} already exists"
            )));
        }

        let category = Category::new(CategoryId::generate(), name);
        self.repo.insert(&category).await?;
        Ok(category.into())
    }
}
