use crate::domain::promotion::Promotion;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TimeRangeDto {
    /// `HH:MM`
    pub start: String,
    /// `HH:MM`
    pub end: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PromotionDto {
    pub id: Uuid,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_price: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_percentage: Option<u8>,
    /// Day codes `MON`..`SUN`.
    pub valid_days: Vec<String>,
    pub time_range: TimeRangeDto,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<DateTime<Utc>>,
    pub is_expired: bool,
    pub product_ids: Vec<Uuid>,
}

impl From<Promotion> for PromotionDto {
    fn from(promotion: Promotion) -> Self {
        Self {
            id: promotion.id.into(),
            discount_price: promotion.discount.price(),
            discount_percentage: promotion.discount.percentage(),
            valid_days: promotion
                .valid_days
                .iter()
                .map(|day| day.code().to_owned())
                .collect(),
            time_range: TimeRangeDto {
                start: promotion.window.start().to_string(),
                end: promotion.window.end().to_string(),
            },
            valid_until: promotion.valid_until,
            is_expired: promotion.is_expired,
            product_ids: promotion.product_ids().iter().copied().map(Into::into).collect(),
            description: promotion.description,
        }
    }
}
