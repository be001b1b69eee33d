use axum::{routing::get, Router};

/// Liveness routes for the hosting platform's health checks.
pub fn router() -> Router {
    Router::new().route("/", get(alive))
}

async fn alive() -> &'static str {
    "Bot is alive!"
}
