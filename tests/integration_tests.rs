//! Integration tests for the Derown Technology site.
//!
//! These tests exercise the full wiring: preference store on disk, both
//! providers, and the axum router, without binding a socket.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

use derown_site::analytics::Analytics;
use derown_site::config::Config;
use derown_site::prefs::{ConsentPrefs, ConsentState, LanguagePrefs, CONSENT_KEY, LANGUAGE_KEY};
use derown_site::server::{self, AppState};
use derown_site::storage::PreferenceStore;

// ==================== Test Helpers ====================

/// Create a test config with a store under the temp dir and a submission
/// delay short enough for tests.
fn create_test_config(temp_dir: &TempDir) -> Config {
    Config {
        port: 0,
        preferences_file: temp_dir
            .path()
            .join("preferences.json")
            .to_str()
            .unwrap()
            .to_string(),
        submission_delay_ms: 10,
    }
}

fn create_test_state(temp_dir: &TempDir) -> (AppState, Arc<Analytics>, PreferenceStore) {
    let config = create_test_config(temp_dir);
    let store = PreferenceStore::open(&config.preferences_file);
    let analytics = Arc::new(Analytics::new());
    let language = Arc::new(LanguagePrefs::load(store.clone()));
    let consent = Arc::new(ConsentPrefs::load(store.clone(), Arc::clone(&analytics)));

    let state = AppState::new(Arc::new(config), language, consent);
    (state, analytics, store)
}

fn create_test_router(temp_dir: &TempDir) -> (Router, AppState, Arc<Analytics>, PreferenceStore) {
    let (state, analytics, store) = create_test_state(temp_dir);
    let router = server::router(state.clone());
    (router, state, analytics, store)
}

async fn get(router: &Router, uri: &str) -> (StatusCode, String) {
    let response = router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .expect("request should succeed");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should collect");
    (status, String::from_utf8(bytes.to_vec()).expect("utf-8 body"))
}

async fn post_form(router: &Router, uri: &str, body: &str) -> (StatusCode, Option<String>) {
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .expect("request should succeed");

    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .map(|v| v.to_str().unwrap().to_string());
    (status, location)
}

async fn post_form_body(router: &Router, uri: &str, body: &str) -> (StatusCode, String) {
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .expect("request should succeed");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should collect");
    (status, String::from_utf8(bytes.to_vec()).expect("utf-8 body"))
}

// ==================== Route Rendering Tests ====================

#[tokio::test]
async fn test_every_page_renders() {
    let temp_dir = TempDir::new().unwrap();
    let (router, _state, _analytics, _store) = create_test_router(&temp_dir);

    for uri in [
        "/",
        "/company",
        "/products",
        "/products/1",
        "/software",
        "/press",
        "/partners",
        "/contact",
        "/privacy-policy",
        "/cookie-policy",
    ] {
        let (status, body) = get(&router, uri).await;
        assert_eq!(status, StatusCode::OK, "{uri} should render");
        assert!(body.contains("Derown Technology"), "{uri} should be branded");
    }
}

#[tokio::test]
async fn test_unknown_product_id_is_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let (router, _state, _analytics, _store) = create_test_router(&temp_dir);

    let (status, body) = get(&router, "/products/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Product not found"));

    let (status, body) = get(&router, "/products/not-a-number").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Product not found"));
}

#[tokio::test]
async fn test_product_detail_shows_specifications() {
    let temp_dir = TempDir::new().unwrap();
    let (router, _state, _analytics, _store) = create_test_router(&temp_dir);

    let (status, body) = get(&router, "/products/1").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Fabric Spreader XL-2000"));
    assert!(body.contains("Maximum Spreading Width"));
    assert!(body.contains("Related Products"));
}

// ==================== Filter Rendering Tests ====================

#[tokio::test]
async fn test_product_filters_narrow_the_grid() {
    let temp_dir = TempDir::new().unwrap();
    let (router, _state, _analytics, _store) = create_test_router(&temp_dir);

    let (_, body) = get(&router, "/products?category=cuttingTables&sector=apparel").await;
    assert!(body.contains("Cutting Table CT-5000"));
    assert!(!body.contains("Fabric Spreader XL-2000"));
    assert!(!body.contains("Heavy-Duty Cutting Table HDT-8000"));
}

#[tokio::test]
async fn test_partner_search_narrows_the_grid() {
    let temp_dir = TempDir::new().unwrap();
    let (router, _state, _analytics, _store) = create_test_router(&temp_dir);

    let (_, body) = get(&router, "/partners?q=DataFabric").await;
    assert!(body.contains("DataFabric AI"));
    assert!(!body.contains("TextileTech Inc."));
}

#[tokio::test]
async fn test_press_pagination_and_category_reset() {
    let temp_dir = TempDir::new().unwrap();
    let (router, _state, _analytics, _store) = create_test_router(&temp_dir);

    // Six releases, four visible: the two oldest are hidden.
    let (_, body) = get(&router, "/press").await;
    assert!(body.contains("Unveils New Fabric Spreader"));
    assert!(!body.contains("Launches New IoT Dashboard"));
    assert!(body.contains("Load More"));

    // Load more reveals the rest.
    let (_, body) = get(&router, "/press?visible=8").await;
    assert!(body.contains("Launches New IoT Dashboard"));
    assert!(!body.contains("Load More"));

    // Category filter narrows.
    let (_, body) = get(&router, "/press?category=companyNews").await;
    assert!(body.contains("Expands Operations to South America"));
    assert!(!body.contains("Unveils New Fabric Spreader"));
}

// ==================== Language Flow Tests ====================

#[tokio::test]
async fn test_pages_default_to_english_lang_attribute() {
    let temp_dir = TempDir::new().unwrap();
    let (router, _state, _analytics, _store) = create_test_router(&temp_dir);

    let (_, body) = get(&router, "/").await;
    assert!(body.contains(r#"<html lang="en">"#));
}

#[tokio::test]
async fn test_language_switch_persists_and_updates_document() {
    let temp_dir = TempDir::new().unwrap();
    let (router, state, _analytics, store) = create_test_router(&temp_dir);

    let (status, location) = post_form(&router, "/language", "code=it&redirect=/company").await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location.as_deref(), Some("/company"));

    assert_eq!(state.language.current().code(), "it");
    assert_eq!(store.get(LANGUAGE_KEY), Some("it".to_string()));

    let (_, body) = get(&router, "/company").await;
    assert!(body.contains(r#"<html lang="it">"#));
    // No Italian dictionary is bundled, so the text falls back to English.
    assert!(body.contains("Our Company"));
}

#[tokio::test]
async fn test_invalid_language_code_is_ignored() {
    let temp_dir = TempDir::new().unwrap();
    let (router, state, _analytics, store) = create_test_router(&temp_dir);

    let (status, _) = post_form(&router, "/language", "code=tlh&redirect=/").await;
    assert_eq!(status, StatusCode::SEE_OTHER);

    assert_eq!(state.language.current().code(), "en");
    assert_eq!(store.get(LANGUAGE_KEY), None);
}

#[tokio::test]
async fn test_language_survives_restart() {
    let temp_dir = TempDir::new().unwrap();

    {
        let (router, _state, _analytics, _store) = create_test_router(&temp_dir);
        post_form(&router, "/language", "code=pt&redirect=/").await;
    }

    // A fresh state over the same preferences file adopts the stored code.
    let (state, _analytics, _store) = create_test_state(&temp_dir);
    assert_eq!(state.language.current().code(), "pt");
}

// ==================== Consent Flow Tests ====================

#[tokio::test]
async fn test_banner_shows_until_decided() {
    let temp_dir = TempDir::new().unwrap();
    let (router, state, analytics, store) = create_test_router(&temp_dir);

    let (_, body) = get(&router, "/").await;
    assert!(body.contains(r#"class="cookie-consent""#));
    assert!(body.contains("Cookie Consent"));

    let (status, location) = post_form(&router, "/consent/accept", "redirect=/products").await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location.as_deref(), Some("/products"));

    assert_eq!(state.consent.state(), ConsentState::Accepted);
    assert_eq!(store.get(CONSENT_KEY), Some("true".to_string()));
    assert_eq!(analytics.times_initialized(), 1);

    let (_, body) = get(&router, "/").await;
    assert!(!body.contains(r#"class="cookie-consent""#));
}

#[tokio::test]
async fn test_decline_hides_banner_without_analytics() {
    let temp_dir = TempDir::new().unwrap();
    let (router, state, analytics, store) = create_test_router(&temp_dir);

    post_form(&router, "/consent/decline", "redirect=/").await;

    assert_eq!(state.consent.state(), ConsentState::Declined);
    assert_eq!(store.get(CONSENT_KEY), Some("false".to_string()));
    assert_eq!(analytics.times_initialized(), 0);

    let (_, body) = get(&router, "/").await;
    assert!(!body.contains(r#"class="cookie-consent""#));
}

#[tokio::test]
async fn test_reset_brings_the_banner_back() {
    let temp_dir = TempDir::new().unwrap();
    let (router, state, _analytics, store) = create_test_router(&temp_dir);

    post_form(&router, "/consent/accept", "redirect=/").await;
    post_form(&router, "/consent/reset", "redirect=/cookie-policy").await;

    assert_eq!(state.consent.state(), ConsentState::Unset);
    assert_eq!(store.get(CONSENT_KEY), None);

    let (_, body) = get(&router, "/").await;
    assert!(body.contains(r#"class="cookie-consent""#));
}

#[tokio::test]
async fn test_repeat_accepts_do_not_refire_analytics() {
    let temp_dir = TempDir::new().unwrap();
    let (router, _state, analytics, _store) = create_test_router(&temp_dir);

    post_form(&router, "/consent/accept", "redirect=/").await;
    post_form(&router, "/consent/accept", "redirect=/").await;
    post_form(&router, "/consent/accept", "redirect=/").await;

    assert_eq!(analytics.times_initialized(), 1);
}

#[tokio::test]
async fn test_consent_survives_restart() {
    let temp_dir = TempDir::new().unwrap();

    {
        let (router, _state, _analytics, _store) = create_test_router(&temp_dir);
        post_form(&router, "/consent/decline", "redirect=/").await;
    }

    let (state, analytics, _store) = create_test_state(&temp_dir);
    assert_eq!(state.consent.state(), ConsentState::Declined);
    assert_eq!(analytics.times_initialized(), 0);
}

// ==================== Contact Flow Tests ====================

#[tokio::test]
async fn test_contact_page_renders_empty_form() {
    let temp_dir = TempDir::new().unwrap();
    let (router, _state, _analytics, _store) = create_test_router(&temp_dir);

    let (status, body) = get(&router, "/contact").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Send us a message"));
    assert!(body.contains("honeypot"));
}

#[tokio::test]
async fn test_contact_submission_success() {
    let temp_dir = TempDir::new().unwrap();
    let (router, _state, _analytics, _store) = create_test_router(&temp_dir);

    let body = "name=Ada%20Lovelace&email=ada%40example.com&phone=&company=&subject=Quote\
                &message=Please%20send%20a%20quote.&honeypot=";
    let (status, page) = post_form_body(&router, "/contact", body).await;

    assert_eq!(status, StatusCode::OK);
    assert!(page.contains("Your message has been sent successfully"));
    // The form is cleared after a successful submission.
    assert!(!page.contains("Ada Lovelace"));
}

#[tokio::test]
async fn test_contact_submission_validation_errors() {
    let temp_dir = TempDir::new().unwrap();
    let (router, _state, _analytics, _store) = create_test_router(&temp_dir);

    let body = "name=&email=not-an-email&phone=&company=&subject=&message=Hi&honeypot=";
    let (status, page) = post_form_body(&router, "/contact", body).await;

    assert_eq!(status, StatusCode::OK);
    assert!(page.contains("This field is required"));
    assert!(page.contains("Please enter a valid email address"));
    assert!(!page.contains("has been sent successfully"));
    // Entered values are kept so the visitor can correct them.
    assert!(page.contains("not-an-email"));
}

#[tokio::test]
async fn test_contact_spam_pretends_success() {
    let temp_dir = TempDir::new().unwrap();
    let (router, _state, _analytics, _store) = create_test_router(&temp_dir);

    let body = "name=&email=&phone=&company=&subject=&message=&honeypot=buy%20now";
    let (status, page) = post_form_body(&router, "/contact", body).await;

    assert_eq!(status, StatusCode::OK);
    assert!(page.contains("Your message has been sent successfully"));
    assert!(!page.contains("This field is required"));
}
