// src/application/commands/promotions/update.rs
use super::PromotionCommandService;
use crate::application::{
    dto::PromotionDto,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::promotion::{Discount, Promotion, PromotionId, TimeWindow};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Full replacement of a promotion's own fields. Coverage is edited through
/// the dedicated add/remove operations and is left untouched here.
pub struct UpdatePromotionCommand {
    pub id: Uuid,
    pub description: String,
    pub discount_price: Option<i64>,
    pub discount_percentage: Option<u8>,
    pub valid_days: Vec<String>,
    pub window_start: String,
    pub window_end: String,
    pub valid_until: Option<DateTime<Utc>>,
    pub is_expired: bool,
}

impl PromotionCommandService {
    pub async fn update_promotion(
        &self,
        command: UpdatePromotionCommand,
    ) -> ApplicationResult<PromotionDto> {
        let id = PromotionId::from(command.id);
        let existing = self
            .promotion_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("promotion not found"))?;

        if command.description.trim().is_empty() {
            return Err(ApplicationError::validation(
                "promotion description cannot be empty",
            ));
        }

        let discount = Discount::from_parts(command.discount_price, command.discount_percentage)?;
        let valid_days = Self::parse_days(&command.valid_days)?;
        let window = TimeWindow::parse(&command.window_start, &command.window_end)?;

        let promotion = Promotion::new(
            id,
            command.description,
            discount,
            valid_days,
            window,
            command.valid_until,
            command.is_expired,
            existing.product_ids().to_vec(),
            existing.created_at,
        );

        self.promotion_repo.update(&promotion).await?;
        Ok(promotion.into())
    }
}
