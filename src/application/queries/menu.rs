// src/application/queries/menu.rs
use crate::application::{dto::MenuDto, error::ApplicationResult, ports::time::Clock};
use crate::domain::{
    category::CategoryRepository, menu::Menu, product::ProductRepository,
    promotion::PromotionRepository,
};
use std::collections::HashMap;
use std::sync::Arc;

pub struct GetMenuQuery {
    pub menu_name: Option<String>,
}

/// The effective-menu read path. Pulls catalog snapshots through the three
/// repositories and projects them through the domain assembler; the menu is
/// computed fresh per request and never stored.
pub struct MenuQueryService {
    product_repo: Arc<dyn ProductRepository>,
    promotion_repo: Arc<dyn PromotionRepository>,
    category_repo: Arc<dyn CategoryRepository>,
    clock: Arc<dyn Clock>,
    default_menu_name: String,
}

impl MenuQueryService {
    pub fn new(
        product_repo: Arc<dyn ProductRepository>,
        promotion_repo: Arc<dyn PromotionRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        clock: Arc<dyn Clock>,
        default_menu_name: impl Into<String>,
    ) -> Self {
        Self {
            product_repo,
            promotion_repo,
            category_repo,
            clock,
            default_menu_name: default_menu_name.into(),
        }
    }

    pub async fn get_menu(&self, query: GetMenuQuery) -> ApplicationResult<MenuDto> {
        let now = self.clock.now();

        // The three reads are independent; all must land before assembly,
        // which itself never suspends.
        let (products, promotions, categories) = tokio::try_join!(
            self.product_repo.list(),
            self.promotion_repo.list_active(now),
            self.category_repo.list(),
        )?;

        let category_names: HashMap<_, _> = categories
            .into_iter()
            .map(|category| (category.id, category.name))
            .collect();

        let menu_name = query
            .menu_name
            .unwrap_or_else(|| self.default_menu_name.clone());

        let assembled = Menu::new(menu_name).assemble(&products, &promotions, &category_names, now);
        Ok(assembled.into())
    }
}
