use axum::{Router, routing::get};
use serde_json::json;

pub async fn health_handler() -> axum::Json<serde_json::Value> {
    axum::Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Router serving `/health`, merged with the teloxide webhook router when hosting.
/// Pass `None` to serve `/health` alone (useful in tests).
pub fn build_router(webhook_router: Option<Router>) -> Router {
    let base = Router::new().route("/health", get(health_handler));
    match webhook_router {
        Some(r) => base.merge(r),
        None => base,
    }
}
