use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use fundboard_core::contributions::{Contribution, NewContribution};
use fundboard_core::Error as CoreError;

async fn create_contribution(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<Contribution>)> {
    let new_contribution: NewContribution =
        serde_json::from_slice(&body).map_err(CoreError::from)?;
    let contribution = state
        .contribution_service
        .create_contribution(new_contribution)
        .await?;
    Ok((StatusCode::CREATED, Json(contribution)))
}

async fn get_member_contributions(
    Path(member_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Contribution>>> {
    let contributions = state
        .contribution_service
        .get_member_contributions(&member_id)
        .await?;
    Ok(Json(contributions))
}

async fn get_project_contributions(
    Path(project_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Contribution>>> {
    let contributions = state
        .contribution_service
        .get_project_contributions(&project_id)
        .await?;
    Ok(Json(contributions))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/contributions", post(create_contribution))
        .route(
            "/members/{member_id}/contributions",
            get(get_member_contributions),
        )
        .route(
            "/projects/{project_id}/contributions",
            get(get_project_contributions),
        )
}
