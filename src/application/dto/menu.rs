use crate::domain::menu::{AppliedPromotion, AssembledMenu, CategorySummary, MenuEntry};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MenuDto {
    pub menu_id: Uuid,
    pub menu_name: String,
    pub items: Vec<MenuItemDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemDto {
    pub id: Uuid,
    pub name: String,
    pub price: i64,
    pub final_price: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<MenuCategoryDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotion: Option<MenuPromotionDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MenuCategoryDto {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MenuPromotionDto {
    pub id: Uuid,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_percentage: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_price: Option<i64>,
}

impl From<AssembledMenu> for MenuDto {
    fn from(menu: AssembledMenu) -> Self {
        Self {
            menu_id: menu.menu_id,
            menu_name: menu.menu_name,
            items: menu.items.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<MenuEntry> for MenuItemDto {
    fn from(entry: MenuEntry) -> Self {
        Self {
            id: entry.product_id.into(),
            name: entry.name,
            price: entry.price,
            final_price: entry.final_price,
            category: entry.category.map(Into::into),
            promotion: entry.promotion.map(Into::into),
        }
    }
}

impl From<CategorySummary> for MenuCategoryDto {
    fn from(summary: CategorySummary) -> Self {
        Self {
            id: summary.id.into(),
            name: summary.name,
        }
    }
}

impl From<AppliedPromotion> for MenuPromotionDto {
    fn from(applied: AppliedPromotion) -> Self {
        Self {
            id: applied.id.into(),
            description: applied.description,
            // Zero-valued discounts are omitted from the wire, matching the
            // optional fields of the menu contract.
            discount_percentage: applied.discount.percentage().filter(|pct| *pct != 0),
            discount_price: applied.discount.price().filter(|price| *price != 0),
        }
    }
}
