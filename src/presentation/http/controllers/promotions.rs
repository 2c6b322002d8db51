// src/presentation/http/controllers/promotions.rs
use crate::application::commands::promotions::{
    AddProductsToPromotionCommand, CreatePromotionCommand, DeletePromotionCommand,
    RemoveProductsFromPromotionCommand, UpdatePromotionCommand,
};
use crate::application::dto::{PromotionDto, TimeRangeDto};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PromotionRequest {
    pub description: String,
    #[serde(default)]
    pub discount_price: Option<i64>,
    #[serde(default)]
    pub discount_percentage: Option<u8>,
    /// Day codes `MON`..`SUN`.
    pub valid_days: Vec<String>,
    pub time_range: TimeRangeDto,
    #[serde(default)]
    pub valid_until: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_expired: bool,
    #[serde(default)]
    pub product_ids: Vec<Uuid>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CoverageRequest {
    pub product_ids: Vec<Uuid>,
}

#[utoipa::path(
    post,
    path = "/api/v1/promotions",
    request_body = PromotionRequest,
    responses((status = 200, body = PromotionDto), (status = 400, description = "Invalid discount or window.")),
    tag = "Promotions"
)]
pub async fn create_promotion(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<PromotionRequest>,
) -> HttpResult<Json<PromotionDto>> {
    state
        .services
        .promotion_commands
        .create_promotion(CreatePromotionCommand {
            description: payload.description,
            discount_price: payload.discount_price,
            discount_percentage: payload.discount_percentage,
            valid_days: payload.valid_days,
            window_start: payload.time_range.start,
            window_end: payload.time_range.end,
            valid_until: payload.valid_until,
            product_ids: payload.product_ids,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/promotions",
    responses((status = 200, body = [PromotionDto])),
    tag = "Promotions"
)]
pub async fn list_active_promotions(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<PromotionDto>>> {
    state
        .services
        .promotion_queries
        .list_active_promotions()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/promotions/{id}",
    responses((status = 200, body = PromotionDto), (status = 404, description = "Unknown id.")),
    tag = "Promotions"
)]
pub async fn get_promotion(
    Extension(state): Extension<HttpState>,
    Path(id): Path<Uuid>,
) -> HttpResult<Json<PromotionDto>> {
    state
        .services
        .promotion_queries
        .get_promotion(id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/promotions/{id}",
    request_body = PromotionRequest,
    responses((status = 200, body = PromotionDto), (status = 404, description = "Unknown id.")),
    tag = "Promotions"
)]
pub async fn update_promotion(
    Extension(state): Extension<HttpState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<PromotionRequest>,
) -> HttpResult<Json<PromotionDto>> {
    state
        .services
        .promotion_commands
        .update_promotion(UpdatePromotionCommand {
            id,
            description: payload.description,
            discount_price: payload.discount_price,
            discount_percentage: payload.discount_percentage,
            valid_days: payload.valid_days,
            window_start: payload.time_range.start,
            window_end: payload.time_range.end,
            valid_until: payload.valid_until,
            is_expired: payload.is_expired,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/promotions/{id}",
    responses((status = 204), (status = 404, description = "Unknown id.")),
    tag = "Promotions"
)]
pub async fn delete_promotion(
    Extension(state): Extension<HttpState>,
    Path(id): Path<Uuid>,
) -> HttpResult<StatusCode> {
    state
        .services
        .promotion_commands
        .delete_promotion(DeletePromotionCommand { id })
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/v1/promotions/{id}/products",
    request_body = CoverageRequest,
    responses((status = 200, body = PromotionDto), (status = 400, description = "No valid products.")),
    tag = "Promotions"
)]
pub async fn add_products(
    Extension(state): Extension<HttpState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CoverageRequest>,
) -> HttpResult<Json<PromotionDto>> {
    state
        .services
        .promotion_commands
        .add_products_to_promotion(AddProductsToPromotionCommand {
            promotion_id: id,
            product_ids: payload.product_ids,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/promotions/{id}/products",
    request_body = CoverageRequest,
    responses((status = 200, body = PromotionDto), (status = 404, description = "Unknown promotion.")),
    tag = "Promotions"
)]
pub async fn remove_products(
    Extension(state): Extension<HttpState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CoverageRequest>,
) -> HttpResult<Json<PromotionDto>> {
    state
        .services
        .promotion_commands
        .remove_products_from_promotion(RemoveProductsFromPromotionCommand {
            promotion_id: id,
            product_ids: payload.product_ids,
        })
        .await
        .into_http()
        .map(Json)
}
