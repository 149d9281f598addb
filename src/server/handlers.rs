//! Read-only JSON handlers. None of them can fail: pipeline errors are absorbed by the cache.

use std::sync::Arc;

use axum::{Json, extract::State, response::Html};
use serde::Serialize;

use crate::analysis::{ColorTrend, TrendingItem, current_colors};
use crate::cache::TrendCache;

#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<TrendCache>,
}

#[derive(Debug, Serialize)]
pub struct TrendsResponse {
    pub items: Vec<TrendingItem>,
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
    pub popularity: Vec<u8>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub healthy: bool,
    pub version: String,
}

pub async fn trends(State(state): State<AppState>) -> Json<TrendsResponse> {
    Json(TrendsResponse { items: state.cache.trending_items().await })
}

pub async fn colors() -> Json<ColorTrend> {
    Json(current_colors())
}

pub async fn categories(State(state): State<AppState>) -> Json<CategoriesResponse> {
    let (categories, popularity) = state.cache.categories().await;
    Json(CategoriesResponse { categories, popularity })
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Dashboard page that renders the three API endpoints.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}
