//! HTTP layer: application state, router, and handlers.
//!
//! Handlers read the shared providers, build a page context, and render.
//! Mutations (language switch, consent, contact submission) go through the
//! providers' operations and redirect back to the page they came from.

use crate::config::Config;
use crate::contact::{ContactForm, SubmitOutcome, ValidationErrors};
use crate::pages::{self, ContactStatus, PageContext};
use crate::partners::PartnerQuery;
use crate::prefs::{ConsentPrefs, LanguagePrefs};
use crate::press::PressQuery;
use crate::products::{self, ProductFilter};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Form, Router};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Everything handlers need, threaded through axum state. Constructed
/// explicitly in `main` (and per-test), never global.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub language: Arc<LanguagePrefs>,
    pub consent: Arc<ConsentPrefs>,
}

impl AppState {
    pub fn new(
        config: Arc<Config>,
        language: Arc<LanguagePrefs>,
        consent: Arc<ConsentPrefs>,
    ) -> Self {
        Self {
            config,
            language,
            consent,
        }
    }

    fn page_context(&self) -> PageContext {
        PageContext {
            language: self.language.current(),
            consent: self.consent.state(),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/company", get(company))
        .route("/products", get(products_index))
        .route("/products/:id", get(product_detail))
        .route("/software", get(software))
        .route("/press", get(press_index))
        .route("/partners", get(partners_index))
        .route("/contact", get(contact_index).post(contact_submit))
        .route("/privacy-policy", get(privacy_policy))
        .route("/cookie-policy", get(cookie_policy))
        .route("/language", post(change_language))
        .route("/consent/accept", post(accept_cookies))
        .route("/consent/decline", post(decline_cookies))
        .route("/consent/reset", post(reset_consent))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ==================== Page Handlers ====================

async fn home(State(state): State<AppState>) -> Html<String> {
    let ctx = state.page_context();
    Html(pages::home(&ctx).into_string())
}

async fn company(State(state): State<AppState>) -> Html<String> {
    let ctx = state.page_context();
    Html(pages::company(&ctx).into_string())
}

#[derive(Debug, Default, Deserialize)]
struct ProductParams {
    category: Option<String>,
    sector: Option<String>,
}

async fn products_index(
    State(state): State<AppState>,
    Query(params): Query<ProductParams>,
) -> Html<String> {
    let ctx = state.page_context();
    let filter = ProductFilter::from_keys(params.category.as_deref(), params.sector.as_deref());
    Html(pages::products(&ctx, filter).into_string())
}

async fn product_detail(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let ctx = state.page_context();

    // Non-numeric ids get the same not-found view as unknown ones.
    match id.parse::<u32>().ok().and_then(products::find) {
        Some(product) => Html(pages::product_detail(&ctx, product).into_string()).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Html(pages::product_not_found(&ctx).into_string()),
        )
            .into_response(),
    }
}

async fn software(State(state): State<AppState>) -> Html<String> {
    let ctx = state.page_context();
    Html(pages::software(&ctx).into_string())
}

#[derive(Debug, Default, Deserialize)]
struct PressParams {
    q: Option<String>,
    category: Option<String>,
    visible: Option<usize>,
}

async fn press_index(
    State(state): State<AppState>,
    Query(params): Query<PressParams>,
) -> Html<String> {
    let ctx = state.page_context();
    let query = PressQuery::from_keys(params.q.as_deref(), params.category.as_deref(), params.visible);
    Html(pages::press(&ctx, &query).into_string())
}

#[derive(Debug, Default, Deserialize)]
struct PartnerParams {
    q: Option<String>,
    category: Option<String>,
    region: Option<String>,
}

async fn partners_index(
    State(state): State<AppState>,
    Query(params): Query<PartnerParams>,
) -> Html<String> {
    let ctx = state.page_context();
    let query = PartnerQuery::from_keys(
        params.q.as_deref(),
        params.category.as_deref(),
        params.region.as_deref(),
    );
    Html(pages::partners(&ctx, &query).into_string())
}

async fn contact_index(State(state): State<AppState>) -> Html<String> {
    let ctx = state.page_context();
    Html(
        pages::contact(
            &ctx,
            &ContactForm::default(),
            &ValidationErrors::default(),
            ContactStatus::None,
        )
        .into_string(),
    )
}

async fn contact_submit(
    State(state): State<AppState>,
    Form(mut form): Form<ContactForm>,
) -> Html<String> {
    let ctx = state.page_context();
    let outcome = form.submit(state.config.submission_delay()).await;

    let (errors, status) = match outcome {
        SubmitOutcome::Invalid(errors) => (errors, ContactStatus::None),
        SubmitOutcome::Sent => (ValidationErrors::default(), ContactStatus::Success),
        SubmitOutcome::Failed => (ValidationErrors::default(), ContactStatus::Error),
    };

    Html(pages::contact(&ctx, &form, &errors, status).into_string())
}

async fn privacy_policy(State(state): State<AppState>) -> Html<String> {
    let ctx = state.page_context();
    Html(pages::privacy_policy(&ctx).into_string())
}

async fn cookie_policy(State(state): State<AppState>) -> Html<String> {
    let ctx = state.page_context();
    Html(pages::cookie_policy(&ctx).into_string())
}

// ==================== Mutation Handlers ====================

#[derive(Debug, Deserialize)]
struct LanguageForm {
    #[serde(default)]
    code: String,
    redirect: Option<String>,
}

async fn change_language(
    State(state): State<AppState>,
    Form(form): Form<LanguageForm>,
) -> Redirect {
    state.language.change(&form.code);
    redirect_back(form.redirect)
}

#[derive(Debug, Default, Deserialize)]
struct ConsentForm {
    redirect: Option<String>,
}

async fn accept_cookies(State(state): State<AppState>, Form(form): Form<ConsentForm>) -> Redirect {
    state.consent.accept();
    redirect_back(form.redirect)
}

async fn decline_cookies(State(state): State<AppState>, Form(form): Form<ConsentForm>) -> Redirect {
    state.consent.decline();
    redirect_back(form.redirect)
}

async fn reset_consent(State(state): State<AppState>, Form(form): Form<ConsentForm>) -> Redirect {
    state.consent.reset();
    redirect_back(form.redirect)
}

/// Redirect to the page the action came from.
fn redirect_back(redirect: Option<String>) -> Redirect {
    Redirect::to(&sanitize_redirect(redirect))
}

/// Only site-local paths are honored; anything else lands on the home page.
fn sanitize_redirect(redirect: Option<String>) -> String {
    redirect
        .filter(|r| r.starts_with('/') && !r.starts_with("//"))
        .unwrap_or_else(|| "/".to_string())
}
