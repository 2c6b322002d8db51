// src/presentation/http/controllers/products.rs
use crate::application::commands::products::{
    CreateProductCommand, DeleteProductCommand, UpdateProductCommand,
};
use crate::application::dto::ProductDto;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

fn default_visible() -> bool {
    true
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    pub name: String,
    /// Price in the smallest currency unit.
    pub price: i64,
    #[serde(default)]
    pub category_id: Option<Uuid>,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

#[utoipa::path(
    post,
    path = "/api/v1/products",
    request_body = ProductRequest,
    responses((status = 200, body = ProductDto), (status = 400, description = "Invalid price or name.")),
    tag = "Products"
)]
pub async fn create_product(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<ProductRequest>,
) -> HttpResult<Json<ProductDto>> {
    state
        .services
        .product_commands
        .create_product(CreateProductCommand {
            name: payload.name,
            price: payload.price,
            category_id: payload.category_id,
            visible: payload.visible,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/products",
    responses((status = 200, body = [ProductDto])),
    tag = "Products"
)]
pub async fn list_products(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<ProductDto>>> {
    state
        .services
        .product_queries
        .list_products()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/products/{id}",
    responses((status = 200, body = ProductDto), (status = 404, description = "Unknown id.")),
    tag = "Products"
)]
pub async fn get_product(
    Extension(state): Extension<HttpState>,
    Path(id): Path<Uuid>,
) -> HttpResult<Json<ProductDto>> {
    state
        .services
        .product_queries
        .get_product(id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/products/{id}",
    request_body = ProductRequest,
    responses((status = 200, body = ProductDto), (status = 404, description = "Unknown id.")),
    tag = "Products"
)]
pub async fn update_product(
    Extension(state): Extension<HttpState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ProductRequest>,
) -> HttpResult<Json<ProductDto>> {
    state
        .services
        .product_commands
        .update_product(UpdateProductCommand {
            id,
            name: payload.name,
            price: payload.price,
            category_id: payload.category_id,
            visible: payload.visible,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/products/{id}",
    responses((status = 204), (status = 404, description = "Unknown id.")),
    tag = "Products"
)]
pub async fn delete_product(
    Extension(state): Extension<HttpState>,
    Path(id): Path<Uuid>,
) -> HttpResult<StatusCode> {
    state
        .services
        .product_commands
        .delete_product(DeleteProductCommand { id })
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}
