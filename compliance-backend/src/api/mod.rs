// compliance-backend/src/api/mod.rs
use crate::middleware::auth::IdentityProvider;
use crate::service::requirement_service::RequirementService;
use std::sync::Arc;

pub mod dto;
pub mod handlers;

/// 統一されたアプリケーション状態
///
/// 接続プールはプロセス起動時に一度だけ作られ、ここを通じて全リクエストで
/// 共有される（グローバルなアンビエント参照は持たない）。
#[derive(Clone)]
pub struct AppState {
    pub requirement_service: Arc<RequirementService>,
    pub identity_provider: Arc<dyn IdentityProvider>,
}

impl AppState {
    pub fn new(
        requirement_service: Arc<RequirementService>,
        identity_provider: Arc<dyn IdentityProvider>,
    ) -> Self {
        Self {
            requirement_service,
            identity_provider,
        }
    }
}
