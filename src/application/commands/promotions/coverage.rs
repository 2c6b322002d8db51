// src/application/commands/promotions/coverage.rs
use super::PromotionCommandService;
use crate::application::{
    dto::PromotionDto,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::promotion::PromotionId;
use uuid::Uuid;

pub struct AddProductsToPromotionCommand {
    pub promotion_id: Uuid,
    pub product_ids: Vec<Uuid>,
}

pub struct RemoveProductsFromPromotionCommand {
    pub promotion_id: Uuid,
    pub product_ids: Vec<Uuid>,
}

impl PromotionCommandService {
    pub async fn add_products_to_promotion(
        &self,
        command: AddProductsToPromotionCommand,
    ) -> ApplicationResult<PromotionDto> {
        let id = PromotionId::from(command.promotion_id);
        let mut promotion = self
            .promotion_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("promotion not found"))?;

        let resolved = self.resolve_products(&command.product_ids).await?;
        if resolved.is_empty() {
            return Err(ApplicationError::validation("no valid products found"));
        }

        for product_id in resolved {
            promotion.add_product(product_id);
        }

        self.promotion_repo.update(&promotion).await?;
        Ok(promotion.into())
    }

    pub async fn remove_products_from_promotion(
        &self,
        command: RemoveProductsFromPromotionCommand,
    ) -> ApplicationResult<PromotionDto> {
        let id = PromotionId::from(command.promotion_id);
        let mut promotion = self
            .promotion_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("promotion not found"))?;

        for product_id in command.product_ids {
            promotion.remove_product(product_id.into());
        }

        self.promotion_repo.update(&promotion).await?;
        Ok(promotion.into())
    }
}
