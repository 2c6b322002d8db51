// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            categories::CategoryCommandService, products::ProductCommandService,
            promotions::PromotionCommandService,
        },
        ports::time::Clock,
        queries::{
            CategoryQueryService, MenuQueryService, ProductQueryService, PromotionQueryService,
        },
    },
    domain::{
        category::CategoryRepository, product::ProductRepository, promotion::PromotionRepository,
    },
};

/// Explicitly wired collaborators. Repositories and the clock are injected
/// once at startup; nothing here is process-global.
pub struct ApplicationServices {
    pub category_commands: Arc<CategoryCommandService>,
    pub product_commands: Arc<ProductCommandService>,
    pub promotion_commands: Arc<PromotionCommandService>,
    pub category_queries: Arc<CategoryQueryService>,
    pub product_queries: Arc<ProductQueryService>,
    pub promotion_queries: Arc<PromotionQueryService>,
    pub menu_queries: Arc<MenuQueryService>,
}

impl ApplicationServices {
    pub fn new(
        category_repo: Arc<dyn CategoryRepository>,
        product_repo: Arc<dyn ProductRepository>,
        promotion_repo: Arc<dyn PromotionRepository>,
        clock: Arc<dyn Clock>,
        default_menu_name: impl Into<String>,
    ) -> Self {
        let category_commands = Arc::new(CategoryCommandService::new(Arc::clone(&category_repo)));
        let product_commands = Arc::new(ProductCommandService::new(
            Arc::clone(&product_repo),
            Arc::clone(&category_repo),
        ));
        let promotion_commands = Arc::new(PromotionCommandService::new(
            Arc::clone(&promotion_repo),
            Arc::clone(&product_repo),
            Arc::clone(&clock),
        ));

        let category_queries = Arc::new(CategoryQueryService::new(Arc::clone(&category_repo)));
        let product_queries = Arc::new(ProductQueryService::new(Arc::clone(&product_repo)));
        let promotion_queries = Arc::new(PromotionQueryService::new(
            Arc::clone(&promotion_repo),
            Arc::clone(&clock),
        ));
        let menu_queries = Arc::new(MenuQueryService::new(
            Arc::clone(&product_repo),
            Arc::clone(&promotion_repo),
            Arc::clone(&category_repo),
            Arc::clone(&clock),
            default_menu_name,
        ));

        Self {
            category_commands,
            product_commands,
            promotion_commands,
            category_queries,
            product_queries,
            promotion_queries,
            menu_queries,
        }
    }
}
