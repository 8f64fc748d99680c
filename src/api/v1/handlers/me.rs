/*
 * Responsibility
 * - GET /me (現在のリクエストの認証状態を返す)
 * - 匿名でも 200 を返す (guard なし)
 */
use axum::Json;

use crate::api::v1::{dto::me::MeResponse, extractors::MaybeAuthenticated};

pub async fn me(MaybeAuthenticated(principal): MaybeAuthenticated) -> Json<MeResponse> {
    Json(MeResponse::from(principal))
}
