/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - auth: TokenVerifier (起動時に secret から生成、以後 read-only)
 *   - bypass: 認証をスキップするパス
 *   - users / tags: business service (外部協調者)
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use std::sync::Arc;

use crate::middleware::auth::BypassRoutes;
use crate::services::auth::TokenVerifier;
use crate::services::directory::{TagService, UserService};

#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<TokenVerifier>,
    pub bypass: Arc<BypassRoutes>,
    pub users: Arc<dyn UserService>,
    pub tags: Arc<dyn TagService>,
}

impl AppState {
    pub fn new(
        auth: Arc<TokenVerifier>,
        bypass: BypassRoutes,
        users: Arc<dyn UserService>,
        tags: Arc<dyn TagService>,
    ) -> Self {
        Self {
            auth,
            bypass: Arc::new(bypass),
            users,
            tags,
        }
    }
}
