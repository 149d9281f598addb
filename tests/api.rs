use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use trend_scope::analysis::{CATEGORIES, TrendSnapshot};
use trend_scope::cache::TrendCache;
use trend_scope::crawler::{Crawler, FetchError, PageFetcher};
use trend_scope::server::{AppState, create_router};

const FASHION_PAGE: &str = r#"
    <html><body>
      <h1>Sustainable Denim Takes Over</h1>
      <h2>Why Sustainable Labels Win</h2>
      <h3>Vintage Denim Returns</h3>
      <p>Sustainable sustainable streetwear vintage casual athletic formal.</p>
    </body></html>"#;

const HOSTILE_PAGE: &str = r#"
    <html><body>
      <h1>&lt;img/src=x/onerror=alert(1)&gt; look</h1>
      <h2>&lt;img/src=x/onerror=alert(1)&gt;</h2>
      <p>streetwear</p>
    </body></html>"#;

struct StubFetcher {
    page: Option<&'static str>,
    calls: AtomicUsize,
}

#[async_trait]
impl PageFetcher for StubFetcher {
    async fn fetch(&self, _url: &str) -> Result<String, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(page) = self.page {
            Ok(page.to_string())
        } else {
            Err(FetchError::Status(reqwest::StatusCode::BAD_GATEWAY))
        }
    }
}

fn app(online: bool) -> (Arc<StubFetcher>, axum::Router) {
    app_serving(online.then_some(FASHION_PAGE))
}

fn app_serving(page: Option<&'static str>) -> (Arc<StubFetcher>, axum::Router) {
    let fetcher = Arc::new(StubFetcher { page, calls: AtomicUsize::new(0) });
    let crawler = Crawler::new(
        fetcher.clone(),
        vec!["https://one.test/fashion".to_string(), "https://two.test/fashion".to_string()],
    );
    let cache = Arc::new(TrendCache::new(crawler, Duration::from_secs(3600)));
    (fetcher, create_router(AppState { cache }))
}

async fn get_json(app: &axum::Router, uri: &str) -> Value {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn trends_reflect_scraped_headlines() {
    let (_, app) = app(true);

    let body = get_json(&app, "/api/trends").await;
    let items = body["items"].as_array().unwrap();

    assert!(items.len() <= 5);
    assert_eq!(items[0]["name"], "Sustainable");
    // Two pages, each with two "sustainable" headlines.
    assert_eq!(items[0]["trend_score"], 40);
    assert_eq!(items[1]["name"], "Denim");
    assert_eq!(items[1]["trend_score"], 40);
}

#[tokio::test]
async fn categories_are_fixed_and_bounded() {
    let (_, app) = app(true);

    let body = get_json(&app, "/api/categories").await;
    let names: Vec<&str> =
        body["categories"].as_array().unwrap().iter().map(|v| v.as_str().unwrap()).collect();
    let popularity: Vec<u64> =
        body["popularity"].as_array().unwrap().iter().map(|v| v.as_u64().unwrap()).collect();

    assert_eq!(names, CATEGORIES.to_vec());
    assert_eq!(popularity.len(), 6);
    assert!(popularity.iter().all(|p| *p <= 100));
    assert_eq!(popularity[5], 100);
}

#[tokio::test]
async fn colors_return_a_five_color_palette() {
    let (fetcher, app) = app(true);

    let body = get_json(&app, "/api/colors").await;

    assert_eq!(body["colors"].as_array().unwrap().len(), 5);
    assert_eq!(body["popularity"].as_array().unwrap().len(), 5);
    assert_eq!(fetcher.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn unreachable_sources_serve_fallback_json() {
    let (_, app) = app(false);
    let fallback = serde_json::to_value(TrendSnapshot::fallback()).unwrap();

    let trends = get_json(&app, "/api/trends").await;
    assert_eq!(trends["items"], fallback["trending_items"]);

    let categories = get_json(&app, "/api/categories").await;
    assert_eq!(categories["categories"], fallback["categories"]);
    assert_eq!(categories["popularity"], fallback["popularity"]);

    let colors = get_json(&app, "/api/colors").await;
    assert_eq!(colors["colors"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn queries_within_the_interval_reuse_the_snapshot() {
    let (fetcher, app) = app(true);

    get_json(&app, "/api/trends").await;
    get_json(&app, "/api/categories").await;
    get_json(&app, "/api/trends").await;

    // One refresh, two sources.
    assert_eq!(fetcher.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn health_and_index_page_respond() {
    let (_, app) = app(true);

    let health = get_json(&app, "/health").await;
    assert_eq!(health["healthy"], true);

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let page = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(String::from_utf8_lossy(&page).contains("/api/trends"));
}

#[tokio::test]
async fn scraped_markup_stays_inert_on_the_dashboard() {
    let (_, app) = app_serving(Some(HOSTILE_PAGE));

    // The API hands the token back verbatim; rendering it safely is the page's job.
    let trends = get_json(&app, "/api/trends").await;
    assert_eq!(trends["items"][0]["name"], "<img/src=x/onerror=alert(1)>");

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let page = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let page = String::from_utf8_lossy(&page);

    for sink in ["innerHTML", "outerHTML", "insertAdjacentHTML", "document.write"] {
        assert!(!page.contains(sink), "dashboard uses {sink}");
    }
    assert!(page.contains("textContent"));
}
