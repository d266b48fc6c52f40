use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

pub mod error;
pub mod nutrition;
pub mod plans;

pub fn router() -> Router {
    Router::new()
        .route("/", get(|| async { "hybrid-periodizer" }))
        .route("/plans/generate", post(plans::generate_plan_handler))
        .route("/nutrition/daily", post(nutrition::daily_needs_handler))
        .route("/nutrition/weekly", post(nutrition::weekly_needs_handler))
        .layer(CorsLayer::permissive())
}
