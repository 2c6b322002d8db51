// src/application/queries/promotions.rs
use crate::application::{
    dto::PromotionDto,
    error::{ApplicationError, ApplicationResult},
    ports::time::Clock,
};
use crate::domain::promotion::{PromotionId, PromotionRepository};
use std::sync::Arc;
use uuid::Uuid;

pub struct PromotionQueryService {
    repo: Arc<dyn PromotionRepository>,
    clock: Arc<dyn Clock>,
}

impl PromotionQueryService {
    pub fn new(repo: Arc<dyn PromotionRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    pub async fn get_promotion(&self, id: Uuid) -> ApplicationResult<PromotionDto> {
        let promotion = self
            .repo
            .find_by_id(PromotionId::from(id))
            .await?
            .ok_or_else(|| ApplicationError::not_found("promotion not found"))?;
        Ok(promotion.into())
    }

    pub async fn list_active_promotions(&self) -> ApplicationResult<Vec<PromotionDto>> {
        let promotions = self.repo.list_active(self.clock.now()).await?;
        Ok(promotions.into_iter().map(Into::into).collect())
    }
}
