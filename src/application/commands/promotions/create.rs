// src/application/commands/promotions/create.rs
use super::PromotionCommandService;
use crate::application::{
    dto::PromotionDto,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::promotion::{Discount, Promotion, PromotionId, TimeWindow};
use chrono::{DateTime, Utc};
use uuid::Uuid;

pub struct CreatePromotionCommand {
    pub description: String,
    pub discount_price: Option<i64>,
    pub discount_percentage: Option<u8>,
    pub valid_days: Vec<String>,
    pub window_start: String,
    pub window_end: String,
    pub valid_until: Option<DateTime<Utc>>,
    pub product_ids: Vec<Uuid>,
}

impl PromotionCommandService {
    pub async fn create_promotion(
        &self,
        command: CreatePromotionCommand,
    ) -> ApplicationResult<PromotionDto> {
        if command.description.trim().is_empty() {
            return Err(ApplicationError::validation(
                "promotion description cannot be empty",
            ));
        }

        let discount = Discount::from_parts(command.discount_price, command.discount_percentage)?;
        let valid_days = Self::parse_days(&command.valid_days)?;
        let window = TimeWindow::parse(&command.window_start, &command.window_end)?;
        let product_ids = self.resolve_products(&command.product_ids).await?;

        let promotion = Promotion::new(
            PromotionId::generate(),
            command.description,
            discount,
            valid_days,
            window,
            command.valid_until,
            false,
            product_ids,
            self.clock.now(),
        );

        self.promotion_repo.insert(&promotion).await?;
        Ok(promotion.into())
    }
}
