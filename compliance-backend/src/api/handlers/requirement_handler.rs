// src/api/handlers/requirement_handler.rs
use crate::api::dto::requirement_dto::{
    CreateRequirementDto, DeleteRequirementResponse, RequirementDto, UpdateRequirementDto,
};
use crate::api::AppState;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::{require_identity, AuthenticatedUser};
use axum::{
    extract::{FromRequestParts, Json, Path, State},
    http::{request::Parts, StatusCode},
    middleware,
    response::IntoResponse,
    routing::get,
    Router,
};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

// カスタムUUID抽出器
//
// 不正な形式のIDは存在しないIDとは区別し、404ではなく400で返す。
pub struct UuidPath(pub Uuid);

impl<S> FromRequestParts<S> for UuidPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // パスパラメータを文字列として最初に抽出
        let Path(path_str) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::ValidationErrors(vec!["Invalid path parameter".to_string()]))?;

        // UUIDをパースして検証エラー形式で返す
        let uuid = Uuid::parse_str(&path_str).map_err(|_| {
            AppError::ValidationErrors(vec![format!("Invalid UUID format: '{}'", path_str)])
        })?;

        Ok(UuidPath(uuid))
    }
}

// --- CRUD Handlers ---

pub async fn create_requirement_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<CreateRequirementDto>,
) -> AppResult<impl IntoResponse> {
    payload.validate()?;

    info!(
        user_id = %user.user_id(),
        title = payload.title.as_deref().unwrap_or(""),
        regulation = payload.regulation.as_deref().unwrap_or(""),
        "Creating compliance requirement"
    );

    let requirement_dto = app_state
        .requirement_service
        .create_requirement(user.user_id(), payload)
        .await?;

    info!(
        user_id = %user.user_id(),
        requirement_id = %requirement_dto.id,
        "Compliance requirement created successfully"
    );

    Ok((StatusCode::CREATED, Json(requirement_dto)))
}

pub async fn get_requirement_handler(
    State(app_state): State<AppState>,
    _user: AuthenticatedUser,
    UuidPath(id): UuidPath,
) -> AppResult<Json<RequirementDto>> {
    let requirement_dto = app_state.requirement_service.get_requirement(id).await?;
    Ok(Json(requirement_dto))
}

pub async fn list_requirements_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
) -> AppResult<Json<Vec<RequirementDto>>> {
    let requirements = app_state.requirement_service.list_requirements().await?;

    info!(
        user_id = %user.user_id(),
        requirement_count = %requirements.len(),
        "Compliance requirements retrieved"
    );

    Ok(Json(requirements))
}

pub async fn update_requirement_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    UuidPath(id): UuidPath,
    Json(payload): Json<UpdateRequirementDto>,
) -> AppResult<Json<RequirementDto>> {
    payload.validate()?;

    info!(
        user_id = %user.user_id(),
        requirement_id = %id,
        "Updating compliance requirement"
    );

    let requirement_dto = app_state
        .requirement_service
        .update_requirement(id, payload)
        .await?;

    Ok(Json(requirement_dto))
}

pub async fn delete_requirement_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    UuidPath(id): UuidPath,
) -> AppResult<Json<DeleteRequirementResponse>> {
    app_state.requirement_service.delete_requirement(id).await?;

    info!(
        user_id = %user.user_id(),
        requirement_id = %id,
        "Compliance requirement deleted"
    );

    Ok(Json(DeleteRequirementResponse {
        message: "Compliance requirement deleted".to_string(),
    }))
}

// ヘルスチェック
pub async fn health_check_handler() -> &'static str {
    "Compliance Tracker Backend API"
}

// --- Router ---

pub fn compliance_router(app_state: AppState) -> Router {
    // /api/compliance 配下は全てアイデンティティ必須
    let protected = Router::new()
        .route(
            "/api/compliance",
            get(list_requirements_handler).post(create_requirement_handler),
        )
        .route(
            "/api/compliance/{id}",
            get(get_requirement_handler)
                .patch(update_requirement_handler)
                .delete(delete_requirement_handler),
        )
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            require_identity,
        ));

    Router::new()
        .merge(protected)
        // ヘルスチェックエンドポイントは認証不要
        .route("/health", get(health_check_handler))
        .with_state(app_state)
}
