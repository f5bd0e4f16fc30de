pub mod api;
pub mod health;
pub mod pages;

use axum::{routing::get, Router};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Site pages
        .route("/", get(pages::home))
        .route("/about/", get(pages::about))
        .route("/privacy-policy/", get(pages::privacy_policy))
        .route("/cookie-policy/", get(pages::cookie_policy))
        .route("/salary-calculator/:slug/", get(pages::calculator))
        .route("/salary-calculator/:slug", get(pages::redirect_to_slash))
        // Widget API
        .route("/api/v1/convert", get(api::handle_convert))
        .route("/api/v1/pages/:slug", get(api::handle_page))
        .fallback(pages::not_found)
        .with_state(state)
}
