// compliance-backend/src/middleware/auth.rs

use crate::api::AppState;
use crate::error::AppError;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// リクエストを実行している認証済みの主体
///
/// created_by の出所はこの構造体のみ。リクエストボディからは決して取らない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerIdentity {
    pub user_id: Uuid,
}

/// 呼び出し元のアイデンティティを解決するプロバイダー
///
/// 「アイデンティティを返すか、失敗するか」だけを契約とする差し替え点。
/// 本物の認証基盤への置き換えはこのトレイトの実装を差し替えるだけでよく、
/// 解決できない場合は必ずリクエストを拒否する（既定IDへのフォールバックはしない）。
#[async_trait::async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn authenticate(&self, headers: &HeaderMap) -> Result<CallerIdentity, AppError>;
}

/// JWTのクレーム
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// ユーザーID
    pub sub: Uuid,
    /// 有効期限（Unix時間）
    pub exp: usize,
}

/// HS256のBearerトークンを検証するプロバイダー
pub struct JwtIdentityProvider {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtIdentityProvider {
    pub fn new(secret: &str) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }
}

#[async_trait::async_trait]
impl IdentityProvider for JwtIdentityProvider {
    async fn authenticate(&self, headers: &HeaderMap) -> Result<CallerIdentity, AppError> {
        let token = extract_bearer_token(headers)
            .ok_or_else(|| AppError::Unauthorized("Missing authentication token".to_string()))?;

        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|_| AppError::Unauthorized("Invalid authentication token".to_string()))?;

        Ok(CallerIdentity {
            user_id: token_data.claims.sub,
        })
    }
}

/// AuthorizationヘッダーからBearerトークンを取り出す
fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// 全ハンドラーの前段でアイデンティティを添付するミドルウェア
///
/// プロバイダーが解決に失敗した場合はここで401を返し、ハンドラーは実行されない。
pub async fn require_identity(
    State(app_state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let identity = app_state
        .identity_provider
        .authenticate(req.headers())
        .await?;

    tracing::debug!(user_id = %identity.user_id, "Caller identity attached");

    req.extensions_mut().insert(identity);
    Ok(next.run(req).await)
}

/// ハンドラー引数としてアイデンティティを取り出すエクストラクター
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub CallerIdentity);

impl AuthenticatedUser {
    pub fn user_id(&self) -> Uuid {
        self.0.user_id
    }
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // require_identity ミドルウェアを通っていなければエラー
        parts
            .extensions
            .get::<CallerIdentity>()
            .cloned()
            .map(AuthenticatedUser)
            .ok_or_else(|| AppError::Unauthorized("Authentication required".to_string()))
    }
}
