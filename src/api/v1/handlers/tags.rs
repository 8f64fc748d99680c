/*
 * Responsibility
 * - /tags 系 handler
 * - 会社 (tenant) と user id は token 由来の UserPrincipal からのみ取る
 */
use axum::{Json, extract::State};

use crate::{
    api::v1::{
        dto::tags::{CreateTagRequest, TagResponse},
        extractors::Authenticated,
    },
    error::AppError,
    state::AppState,
};

pub async fn add_tag(
    State(state): State<AppState>,
    Authenticated(principal): Authenticated,
    Json(req): Json<CreateTagRequest>,
) -> Result<Json<TagResponse>, AppError> {
    let name = req
        .name()
        .ok_or_else(|| AppError::Unprocessable("No name".to_string()))?;
    let company_id = principal.company_id.ok_or(AppError::Forbidden)?;

    tracing::info!(user_id = principal.user_id, company_id, "save new tag");

    let tag = state
        .tags
        .save_tag(name, company_id, principal.user_id)
        .await?;

    Ok(Json(tag.into()))
}

pub async fn available_tags(
    State(state): State<AppState>,
    Authenticated(principal): Authenticated,
) -> Result<Json<Vec<TagResponse>>, AppError> {
    // No company yet: nothing is visible.
    let Some(company_id) = principal.company_id else {
        return Ok(Json(Vec::new()));
    };

    let tags = state
        .tags
        .available_tags(company_id, principal.user_id)
        .await?;

    Ok(Json(tags.into_iter().map(TagResponse::from).collect()))
}
