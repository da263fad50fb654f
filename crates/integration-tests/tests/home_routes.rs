//! Integration tests for the home page HTTP surface.
//!
//! Requests go through the full router (sessions, request ids, security
//! headers) with `tower::ServiceExt::oneshot`. Sessions are seeded directly
//! in the in-memory store and addressed by cookie.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use std::collections::HashMap;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
    response::Response,
};
use http_body_util::BodyExt;
use pocketshop_core::{FilterSelection, Section};
use pocketshop_integration_tests::{
    AddResponse, Call, CallLog, FakeCart, FakeCatalog, feature_images, product, test_state, user,
};
use pocketshop_storefront::middleware::session::SESSION_COOKIE_NAME;
use serde_json::Value;
use tower::ServiceExt;
use tower_sessions::cookie::time::{Duration, OffsetDateTime};
use tower_sessions::session::{Id, Record};
use tower_sessions::{MemoryStore, SessionStore};

struct TestApp {
    router: Router,
    store: MemoryStore,
    log: CallLog,
}

impl TestApp {
    fn new(add_response: AddResponse) -> Self {
        let log = CallLog::default();
        let catalog = FakeCatalog::new(
            vec![product("a", 10), product("b", 20)],
            feature_images(3),
            log.clone(),
        );
        Self::with_catalog(catalog, add_response, log)
    }

    fn with_catalog(catalog: FakeCatalog, add_response: AddResponse, log: CallLog) -> Self {
        let cart = FakeCart::new(add_response, log.clone());
        let store = MemoryStore::default();
        let router = pocketshop_storefront::app(test_state(catalog, cart), store.clone());
        Self { router, store, log }
    }

    /// Seed a session and return its id and cookie header value.
    async fn session(&self, data: HashMap<String, Value>) -> (Id, String) {
        let mut record = Record {
            id: Id::default(),
            data,
            expiry_date: OffsetDateTime::now_utc() + Duration::days(1),
        };
        self.store.create(&mut record).await.unwrap();
        (record.id, format!("{SESSION_COOKIE_NAME}={}", record.id))
    }

    async fn signed_in_session(&self) -> (Id, String) {
        let mut data = HashMap::new();
        data.insert(
            "current_user".to_string(),
            serde_json::to_value(user()).unwrap(),
        );
        self.session(data).await
    }

    async fn session_value(&self, id: &Id, key: &str) -> Option<Value> {
        self.store
            .load(id)
            .await
            .unwrap()
            .and_then(|record| record.data.get(key).cloned())
    }

    async fn send(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.unwrap()
    }

    async fn get(&self, uri: &str) -> Response {
        self.send(Request::get(uri).body(Body::empty()).unwrap())
            .await
    }

    async fn post_form(&self, uri: &str, form: &str, cookie: Option<&str>) -> Response {
        let mut builder = Request::post(uri).header(
            header::CONTENT_TYPE,
            "application/x-www-form-urlencoded",
        );
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        self.send(builder.body(Body::from(form.to_string())).unwrap())
            .await
    }
}

async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn header_str<'a>(response: &'a Response, name: &str) -> Option<&'a str> {
    response.headers().get(name).and_then(|v| v.to_str().ok())
}

// ============================================================================
// Page
// ============================================================================

#[tokio::test]
async fn test_home_page_renders_all_sections() {
    let app = TestApp::new(AddResponse::Success);

    let response = app.get("/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(header_str(&response, "x-request-id").is_some());
    assert!(header_str(&response, "content-security-policy").is_some());

    let body = body_text(response).await;
    assert!(body.contains("Discover Amazing Products"));
    assert!(body.contains("Shop Now"));
    assert!(body.contains("Premium Quality"));
    assert!(body.contains("Latest Trends"));
    assert!(body.contains("Shop by Category"));
    assert!(body.contains("Shop by Brand"));
    assert!(body.contains("Featured Products"));
    assert!(body.contains("Product a"));
    assert!(body.contains("Product b"));
    assert!(body.contains("https://images.example.com/banner-2.jpg"));
    assert!(body.contains("every 15s"));
    assert!(body.contains("/shop/browse/category/phones"));
    assert!(body.contains("/shop/browse/brand/h%26m"));
    assert!(body.contains("--stagger-ms: 100"));
}

#[tokio::test]
async fn test_shop_home_alias_renders_page() {
    let app = TestApp::new(AddResponse::Success);

    let response = app.get("/shop/home").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Featured Products"));
}

#[tokio::test]
async fn test_home_page_survives_backend_failure() {
    let log = CallLog::default();
    let app = TestApp::with_catalog(FakeCatalog::failing(log.clone()), AddResponse::Success, log);

    let response = app.get("/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("Discover Amazing Products"));
    assert!(body.contains("carousel-empty"));
    assert!(!body.contains("every 15s"));
}

#[tokio::test]
async fn test_home_page_greets_signed_in_user() {
    let app = TestApp::new(AddResponse::Success);
    let (_, cookie) = app.signed_in_session().await;

    let response = app
        .send(
            Request::get("/")
                .header(header::COOKIE, cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await;

    assert!(body_text(response).await.contains("Hi, ada"));
}

// ============================================================================
// Carousel fragment
// ============================================================================

#[tokio::test]
async fn test_carousel_next_wraps() {
    let app = TestApp::new(AddResponse::Success);

    let body = body_text(app.get("/shop/carousel?slide=2&go=next").await).await;
    assert!(body.contains(r#"name="slide" value="0""#));
    assert!(!body.contains("<html"));
}

#[tokio::test]
async fn test_carousel_prev_wraps() {
    let app = TestApp::new(AddResponse::Success);

    let body = body_text(app.get("/shop/carousel?slide=0&go=prev").await).await;
    assert!(body.contains(r#"name="slide" value="2""#));
}

#[tokio::test]
async fn test_carousel_select_out_of_range_is_ignored() {
    let app = TestApp::new(AddResponse::Success);

    let body = body_text(app.get("/shop/carousel?slide=1&go=select&to=9").await).await;
    assert!(body.contains(r#"name="slide" value="1""#));

    let body = body_text(app.get("/shop/carousel?slide=1&go=select&to=2").await).await;
    assert!(body.contains(r#"name="slide" value="2""#));
}

// ============================================================================
// Navigation helper
// ============================================================================

#[tokio::test]
async fn test_browse_replaces_filters_and_redirects() {
    let app = TestApp::new(AddResponse::Success);
    let mut data = HashMap::new();
    data.insert(
        "filters".to_string(),
        serde_json::to_value(FilterSelection::single(Section::Brand, "apple")).unwrap(),
    );
    let (id, cookie) = app.session(data).await;

    let response = app
        .post_form("/shop/browse/category/phones", "", Some(&cookie))
        .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(header_str(&response, "location"), Some("/shop/listing"));

    let stored = app.session_value(&id, "filters").await.unwrap();
    assert_eq!(stored, serde_json::json!({ "category": ["phones"] }));
}

#[tokio::test]
async fn test_browse_decodes_entry_ids() {
    let app = TestApp::new(AddResponse::Success);
    let (id, cookie) = app.session(HashMap::new()).await;

    let response = app
        .post_form("/shop/browse/brand/h%26m", "", Some(&cookie))
        .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let stored = app.session_value(&id, "filters").await.unwrap();
    assert_eq!(stored, serde_json::json!({ "brand": ["h&m"] }));
}

#[tokio::test]
async fn test_browse_rejects_unknown_section_and_entry() {
    let app = TestApp::new(AddResponse::Success);

    let response = app.post_form("/shop/browse/color/red", "", None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app.post_form("/shop/browse/brand/nokia", "", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ============================================================================
// Cart guard
// ============================================================================

#[tokio::test]
async fn test_add_to_cart_anonymous_gets_login_prompt() {
    let app = TestApp::new(AddResponse::Success);

    let response = app.post_form("/shop/cart/add", "product_id=a", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(header_str(&response, "hx-retarget"), Some("#modal-root"));
    assert!(header_str(&response, "hx-trigger").is_none());

    let body = body_text(response).await;
    assert!(body.contains(r#"id="login-prompt""#));
    assert!(body.contains(" open"));
    assert_eq!(app.log.cart_calls(), 0);
}

#[tokio::test]
async fn test_add_to_cart_signed_in_updates_badge_and_toasts() {
    let app = TestApp::new(AddResponse::Success);
    let (_, cookie) = app.signed_in_session().await;

    let response = app
        .post_form("/shop/cart/add", "product_id=a", Some(&cookie))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let trigger: Value =
        serde_json::from_str(header_str(&response, "hx-trigger").unwrap()).unwrap();
    assert_eq!(trigger["showToast"]["title"], "Product is added to cart");
    assert!(trigger.get("cart-updated").is_some());

    assert_eq!(body_text(response).await.trim(), "1");

    let cart_flow: Vec<Call> = app
        .log
        .calls()
        .into_iter()
        .filter(|c| matches!(c, Call::AddItem { .. } | Call::FetchCart(_)))
        .collect();
    assert_eq!(cart_flow.len(), 2);
    assert!(matches!(cart_flow[0], Call::AddItem { quantity: 1, .. }));
    assert!(matches!(cart_flow[1], Call::FetchCart(_)));
}

#[tokio::test]
async fn test_add_to_cart_declined_is_silent() {
    let app = TestApp::new(AddResponse::Declined);
    let (_, cookie) = app.signed_in_session().await;

    let response = app
        .post_form("/shop/cart/add", "product_id=a", Some(&cookie))
        .await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(header_str(&response, "hx-trigger").is_none());
    assert_eq!(app.log.count(|c| matches!(c, Call::FetchCart(_))), 0);
}

#[tokio::test]
async fn test_add_to_cart_requires_product_id() {
    let app = TestApp::new(AddResponse::Success);

    let response = app.post_form("/shop/cart/add", "product_id=", None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ============================================================================
// Details dialog
// ============================================================================

#[tokio::test]
async fn test_details_fragment_opens_dialog() {
    let app = TestApp::new(AddResponse::Success);

    let response = app.get("/shop/products/a/details").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains(r#"id="product-details""#));
    assert!(body.contains(" open"));
    assert!(body.contains("Product a"));
    assert!(body.contains("$10.00"));
}

#[tokio::test]
async fn test_details_for_missing_product_is_empty() {
    let app = TestApp::new(AddResponse::Success);

    let response = app.get("/shop/products/missing/details").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.is_empty());
}

#[tokio::test]
async fn test_dialog_close_is_empty() {
    let app = TestApp::new(AddResponse::Success);

    let response = app.get("/shop/dialog/close").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.is_empty());
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_health_and_readiness() {
    let app = TestApp::new(AddResponse::Success);

    let response = app.get("/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "ok");

    // No database behind the lazy pool
    let response = app.get("/health/ready").await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let app = TestApp::new(AddResponse::Success);

    let response = app
        .send(
            Request::get("/health")
                .header("x-request-id", "req-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

    assert_eq!(header_str(&response, "x-request-id"), Some("req-123"));
}
