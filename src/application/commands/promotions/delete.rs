// src/application/commands/promotions/delete.rs
use super::PromotionCommandService;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::promotion::PromotionId;
use uuid::Uuid;

pub struct DeletePromotionCommand {
    pub id: Uuid,
}

impl PromotionCommandService {
    pub async fn delete_promotion(&self, command: DeletePromotionCommand) -> ApplicationResult<()> {
        let id = PromotionId::from(command.id);
        if self.promotion_repo.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::not_found("promotion not found"));
        }
        self.promotion_repo.delete(id).await?;
        Ok(())
    }
}
