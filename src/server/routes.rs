use axum::{Router, routing::get};

use super::handlers::{self, AppState};

pub fn create_router(app_state: AppState) -> Router {
    let api = Router::new()
        .route("/trends", get(handlers::trends))
        .route("/colors", get(handlers::colors))
        .route("/categories", get(handlers::categories));

    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .nest("/api", api)
        .with_state(app_state)
}
