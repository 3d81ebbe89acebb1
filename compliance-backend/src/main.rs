// src/main.rs
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use compliance_backend::api::handlers::requirement_handler::compliance_router;
use compliance_backend::api::AppState;
use compliance_backend::config::Config;
use compliance_backend::db::create_db_pool;
use compliance_backend::middleware::auth::JwtIdentityProvider;
use compliance_backend::service::requirement_service::RequirementService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // トレーシングの設定
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "compliance_backend=info,tower_http=info".into()),
        )
        .with(fmt::layer())
        .init();

    tracing::info!("Starting Compliance Tracker backend server...");

    // 設定を読み込む
    // JWT_SECRET が無い場合はここで失敗する。既定のアイデンティティで
    // 黙って起動するフォールバックは存在しない。
    let app_config = Config::from_env()?;

    // データベース接続を作成
    let db_pool = create_db_pool(&app_config).await?;
    tracing::info!("Database pool created successfully.");

    // サービスとアイデンティティプロバイダーの作成
    let requirement_service = Arc::new(RequirementService::new(db_pool.clone()));
    let identity_provider = Arc::new(JwtIdentityProvider::new(&app_config.jwt_secret));
    let app_state = AppState::new(requirement_service, identity_provider);

    // ルーターの設定
    let app_router = compliance_router(app_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    // サーバーの起動
    tracing::info!(
        "Router configured. Server listening on {}",
        app_config.server_addr
    );

    let listener = TcpListener::bind(&app_config.server_addr).await?;
    axum::serve(listener, app_router.into_make_service()).await?;

    Ok(())
}
