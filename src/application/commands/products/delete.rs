// src/application/commands/products/delete.rs
use super::ProductCommandService;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::product::ProductId;
use uuid::Uuid;

pub struct DeleteProductCommand {
    pub id: Uuid,
}

impl ProductCommandService {
    pub async fn delete_product(&self, command: DeleteProductCommand) -> ApplicationResult<()> {
        let id = ProductId::from(command.id);
        if self.product_repo.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::not_found("product not found"));
        }
        self.product_repo.delete(id).await?;
        Ok(())
    }
}
