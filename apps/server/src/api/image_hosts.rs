use std::sync::Arc;

use crate::{image_hosts::ImageHostPolicy, main_lib::AppState};
use axum::{extract::State, routing::get, Json, Router};

async fn get_image_hosts(State(state): State<Arc<AppState>>) -> Json<ImageHostPolicy> {
    Json(state.image_hosts.clone())
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/image-hosts", get(get_image_hosts))
}
