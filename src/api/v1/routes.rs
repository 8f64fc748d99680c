/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - /api/v1 (health, me, tags) と /management/api/v1 (users) の 2 系統
 * - guard (authority) が必要な route はここで route 単位に宣言する
 */
use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::middleware::auth::{AuthorityRule, guarded};
use crate::state::AppState;

use crate::api::v1::authorities::{COMPANY_ADMIN, COMPANY_USER, USER_WRITE};
use crate::api::v1::handlers::{
    health::health,
    me::me,
    tags::{add_tag, available_tags},
    users::{activate_user, delete_user, list_users, update_user},
};

/// Mounted under `/api/v1`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/me", get(me))
        .route("/tags/addTag", post(add_tag))
        .route("/tags/availableTags", get(available_tags))
}

/// Mounted under `/management/api/v1`. Every route declares a guard.
pub fn management_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users/{id}",
            guarded(delete(delete_user), AuthorityRule::has_authority(USER_WRITE)),
        )
        .route(
            "/users/update",
            guarded(
                put(update_user),
                AuthorityRule::has_any_authority([USER_WRITE, COMPANY_USER, COMPANY_ADMIN]),
            ),
        )
        .route(
            "/users/list",
            guarded(
                get(list_users),
                AuthorityRule::has_any_authority([COMPANY_ADMIN]),
            ),
        )
        .route(
            "/users/activate/{user_id}",
            guarded(
                get(activate_user),
                AuthorityRule::has_any_authority([COMPANY_ADMIN]),
            ),
        )
}
