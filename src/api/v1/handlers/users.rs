/*
 * Responsibility
 * - /management/api/v1/users 系 handler
 * - 権限 (authority) のチェックは routes の guard で済んでいる前提
 * - ここでは tenant (company) の範囲チェックだけを行う
 */
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

use crate::{
    api::v1::{
        authorities::{COMPANY_ADMIN, USER_WRITE},
        dto::users::{ListUsersQuery, UpdateUserRequest, UserResponse},
        extractors::{Authenticated, UserPrincipal},
    },
    error::AppError,
    services::directory::User,
    state::AppState,
};

/// Whether `principal` may edit `target`.
///
/// - USER_WRITE: anyone
/// - COMPANY_ADMIN: users of the same company
/// - otherwise (COMPANY_USER): only themselves
fn may_update(principal: &UserPrincipal, target: &User) -> bool {
    if principal.has_authority(USER_WRITE) {
        return true;
    }
    if principal.has_authority(COMPANY_ADMIN)
        && principal.company_id.is_some()
        && principal.company_id == target.company_id
    {
        return true;
    }
    principal.user_id == target.id
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    tracing::info!(user_id, "delete user");

    if state.users.delete_user(user_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("user"))
    }
}

pub async fn update_user(
    State(state): State<AppState>,
    Authenticated(principal): Authenticated,
    Json(req): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, AppError> {
    req.validate()
        .map_err(|msg| AppError::bad_request("INVALID_USER", msg))?;

    tracing::info!(user_id = req.id, by = principal.user_id, "update user");

    let target = state
        .users
        .get_user(req.id)
        .await?
        .ok_or(AppError::not_found("user"))?;

    if !may_update(&principal, &target) {
        return Err(AppError::Forbidden);
    }

    let row = state
        .users
        .update_user(req.into())
        .await?
        .ok_or(AppError::not_found("user"))?;

    Ok(Json(row.into()))
}

pub async fn list_users(
    State(state): State<AppState>,
    Authenticated(principal): Authenticated,
    Query(query): Query<ListUsersQuery>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let company_id = principal.company_id.ok_or(AppError::Forbidden)?;

    let rows = state.users.list_users(company_id, query.page()).await?;

    Ok(Json(rows.into_iter().map(UserResponse::from).collect()))
}

pub async fn activate_user(
    State(state): State<AppState>,
    Authenticated(principal): Authenticated,
    Path(user_id): Path<i64>,
) -> Result<Json<UserResponse>, AppError> {
    let company_id = principal.company_id.ok_or(AppError::Forbidden)?;

    tracing::info!(user_id, company_id, "activate user");

    // Users of other companies are reported as missing.
    let target = state
        .users
        .get_user(user_id)
        .await?
        .filter(|u| u.company_id == Some(company_id))
        .ok_or(AppError::not_found("user"))?;

    let row = state
        .users
        .activate_user(target.id)
        .await?
        .ok_or(AppError::not_found("user"))?;

    Ok(Json(row.into()))
}
