// tests/common/auth_helper.rs

use compliance_backend::middleware::auth::Claims;
use jsonwebtoken::{encode, EncodingKey, Header};
use uuid::Uuid;

/// テスト用アプリと共有するJWTシークレット
pub const TEST_JWT_SECRET: &str = "test-jwt-secret";

/// 指定したユーザーIDのBearerトークンを発行する
pub fn create_token_for(user_id: Uuid) -> String {
    let claims = Claims {
        sub: user_id,
        exp: (chrono::Utc::now() + chrono::Duration::hours(1)).timestamp() as usize,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
    )
    .unwrap()
}

/// 新規ユーザーIDとそのトークンのペアを生成する
pub fn create_test_user() -> (Uuid, String) {
    let user_id = Uuid::new_v4();
    let token = create_token_for(user_id);
    (user_id, token)
}
