// tests/common/app_helper.rs

use axum::body::Body;
use axum::http::Request;
use axum::Router;
use compliance_backend::api::handlers::requirement_handler::compliance_router;
use compliance_backend::api::AppState;
use compliance_backend::middleware::auth::JwtIdentityProvider;
use compliance_backend::service::requirement_service::RequirementService;
use serde_json::Value;
use std::sync::Arc;

use crate::common;

/// 本番同等のルーターを実データベース上に構築する
pub async fn setup_app() -> (Router, common::db::TestDatabase) {
    common::init_test_env();

    let db = common::db::TestDatabase::new().await;

    let requirement_service = Arc::new(RequirementService::new(db.connection.clone()));
    let identity_provider = Arc::new(JwtIdentityProvider::new(common::auth_helper::TEST_JWT_SECRET));
    let app_state = AppState::new(requirement_service, identity_provider);

    (compliance_router(app_state), db)
}

/// ヘルパー関数：JSONリクエストを作成
pub fn create_request(method: &str, path: &str, token: &str, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(path)
        .header("Authorization", format!("Bearer {}", token));

    if let Some(json_body) = body {
        builder = builder.header("Content-Type", "application/json");
        builder
            .body(Body::from(serde_json::to_string(&json_body).unwrap()))
            .unwrap()
    } else {
        builder.body(Body::empty()).unwrap()
    }
}

/// ヘルパー関数：認証ヘッダーなしのリクエストを作成
pub fn create_unauthenticated_request(method: &str, path: &str, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(path);

    if let Some(json_body) = body {
        builder = builder.header("Content-Type", "application/json");
        builder
            .body(Body::from(serde_json::to_string(&json_body).unwrap()))
            .unwrap()
    } else {
        builder.body(Body::empty()).unwrap()
    }
}
