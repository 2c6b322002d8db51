// src/application/commands/categories/delete.rs
use super::CategoryCommandService;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::category::CategoryId;
use uuid::Uuid;

pub struct DeleteCategoryCommand {
    pub id: Uuid,
}

impl CategoryCommandService {
    pub async fn delete_category(&self, command: DeleteCategoryCommand) -> ApplicationResult<()> {
        let id = CategoryId::from(command.id);
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::not_found("category not found"));
        }
        self.repo.delete(id).await?;
        Ok(())
    }
}
