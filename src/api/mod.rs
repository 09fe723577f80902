pub mod handlers;

pub use handlers::*;

use axum::routing::{get, post};

/// 构建 HTTP 路由
pub fn app(router: SharedRouter) -> axum::Router {
    axum::Router::new()
        .route("/health", get(health_check))
        .route("/", get(current_screen))
        .route("/navigate", get(navigate))
        .route("/events", post(dispatch_event))
        .with_state(router)
}
