use crate::domain::errors::DomainResult;
use crate::domain::promotion::entity::Promotion;
use crate::domain::promotion::value_objects::PromotionId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait PromotionRepository: Send + Sync {
    async fn insert(&self, promotion: &Promotion) -> DomainResult<()>;
    /// Persists the promotion's own fields and rewrites its coverage rows.
    async fn update(&self, promotion: &Promotion) -> DomainResult<()>;
    async fn delete(&self, id: PromotionId) -> DomainResult<()>;
    async fn find_by_id(&self, id: PromotionId) -> DomainResult<Option<Promotion>>;
    /// Non-expired promotions whose `valid_until` is unset or in the future,
    /// coverage populated, ordered by creation time. The order is load-bearing:
    /// menu assembly applies the first eligible promotion it encounters.
    async fn list_active(&self, now: DateTime<Utc>) -> DomainResult<Vec<Promotion>>;
}
