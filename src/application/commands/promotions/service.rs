// src/application/commands/promotions/service.rs
use std::collections::BTreeSet;
use std::sync::Arc;

use crate::application::error::ApplicationResult;
use crate::application::ports::time::Clock;
use crate::domain::product::{ProductId, ProductRepository};
use crate::domain::promotion::{PromotionRepository, Weekday};
use uuid::Uuid;

pub struct PromotionCommandService {
    pub(super) promotion_repo: Arc<dyn PromotionRepository>,
    pub(super) product_repo: Arc<dyn ProductRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl PromotionCommandService {
    pub fn new(
        promotion_repo: Arc<dyn PromotionRepository>,
        product_repo: Arc<dyn ProductRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            promotion_repo,
            product_repo,
            clock,
        }
    }

    pub(super) fn parse_days(codes: &[String]) -> ApplicationResult<BTreeSet<Weekday>> {
        codes
            .iter()
            .map(|code| Weekday::from_code(code).map_err(Into::into))
            .collect()
    }

    /// Resolve requested coverage against the catalog, dropping ids that do
    /// not name an existing product.
    pub(super) async fn resolve_products(
        &self,
        product_ids: &[Uuid],
    ) -> ApplicationResult<Vec<ProductId>> {
        let mut resolved = Vec::with_capacity(product_ids.len());
        for id in product_ids {
            let id = ProductId::from(*id);
            if self.product_repo.find_by_id(id).await?.is_some() {
                resolved.push(id);
            }
        }
        Ok(resolved)
    }
}
