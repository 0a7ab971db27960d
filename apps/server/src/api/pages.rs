use std::sync::Arc;

use crate::{components::VerificationStep, main_lib::AppState};
use axum::{
    extract::{Query, State},
    response::Html,
    routing::get,
    Router,
};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
struct VerifyQuery {
    error: Option<String>,
    code: Option<String>,
}

/// Server-rendered email verification step. The auth backend redirects here
/// with `?error=` after a rejected code.
async fn verify_page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<VerifyQuery>,
) -> Html<String> {
    let step = VerificationStep {
        error: query.error.as_deref(),
        value: query.code.as_deref().unwrap_or_default(),
        verify_action: &state.verify_action,
        resend_href: &state.resend_url,
        ..Default::default()
    };
    Html(page("Verify your email", &step.render()))
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\"><title>{}</title></head><body>{}</body></html>",
        title, body
    )
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/verify", get(verify_page))
}
