// src/presentation/http/openapi.rs
use crate::application::dto::{
    CategoryDto, MenuCategoryDto, MenuDto, MenuItemDto, MenuPromotionDto, ProductDto,
    PromotionDto, TimeRangeDto,
};
use crate::presentation::http::controllers::{categories, menu, products, promotions};
use axum::Router;
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Serialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::routes::health,
        categories::create_category,
        categories::list_categories,
        categories::get_category,
        categories::update_category,
        categories::delete_category,
        products::create_product,
        products::list_products,
        products::get_product,
        products::update_product,
        products::delete_product,
        promotions::create_promotion,
        promotions::list_active_promotions,
        promotions::get_promotion,
        promotions::update_promotion,
        promotions::delete_promotion,
        promotions::add_products,
        promotions::remove_products,
        menu::get_menu,
    ),
    components(schemas(
        StatusResponse,
        CategoryDto,
        ProductDto,
        PromotionDto,
        TimeRangeDto,
        MenuDto,
        MenuItemDto,
        MenuCategoryDto,
        MenuPromotionDto,
        categories::CategoryRequest,
        products::ProductRequest,
        promotions::PromotionRequest,
        promotions::CoverageRequest,
    )),
    tags(
        (name = "Menu", description = "Effective menu computed per request."),
        (name = "Categories", description = "Category catalog management."),
        (name = "Products", description = "Product catalog management."),
        (name = "Promotions", description = "Promotion management and product coverage."),
        (name = "System", description = "Service plumbing.")
    )
)]
pub struct ApiDoc;

pub fn docs_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Redoc::with_url("/redoc", ApiDoc::openapi()))
}
