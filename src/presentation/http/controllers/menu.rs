// src/presentation/http/controllers/menu.rs
use crate::application::dto::MenuDto;
use crate::application::queries::GetMenuQuery;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Query};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct MenuParams {
    #[serde(default)]
    pub name: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/menu",
    params(("name" = Option<String>, Query, description = "Menu display name.")),
    responses((status = 200, body = MenuDto)),
    tag = "Menu"
)]
pub async fn get_menu(
    Extension(state): Extension<HttpState>,
    Query(params): Query<MenuParams>,
) -> HttpResult<Json<MenuDto>> {
    state
        .services
        .menu_queries
        .get_menu(GetMenuQuery {
            menu_name: params.name,
        })
        .await
        .into_http()
        .map(Json)
}
