// tests/support/helpers.rs
use std::sync::Arc;

use axum::Router;

use cardapio_core::application::services::ApplicationServices;
use cardapio_core::presentation::http::{routes::build_router, state::HttpState};

use super::mocks::{
    FixedClock, InMemoryCategoryRepo, InMemoryProductRepo, InMemoryPromotionRepo,
};

/// Full router over empty in-memory repositories and a fixed clock.
pub fn make_test_router(allowed_origins: &[String]) -> Router {
    let services = Arc::new(ApplicationServices::new(
        Arc::new(InMemoryCategoryRepo::empty()),
        Arc::new(InMemoryProductRepo::empty()),
        Arc::new(InMemoryPromotionRepo::empty()),
        Arc::new(FixedClock::at_fixed_now()),
        "Menu Principal",
    ));
    build_router(HttpState { services }, allowed_origins)
}
