// tests/service_tests.rs
//
// RequirementService に対するサービス層テスト。

mod common;

use compliance_backend::api::dto::requirement_dto::UpdateRequirementDto;
use compliance_backend::error::AppError;
use compliance_backend::service::requirement_service::RequirementService;
use uuid::Uuid;

#[tokio::test]
async fn test_create_requirement_service() {
    // データベースをセットアップ
    let db = common::db::TestDatabase::new().await;
    let service = RequirementService::new(db.connection.clone());
    let caller = Uuid::new_v4();

    // 要件作成
    let payload = common::test_data::create_test_requirement();
    let created = service.create_requirement(caller, payload).await.unwrap();

    // 検証
    assert_eq!(created.title, "Data Retention Policy");
    assert_eq!(created.regulation, "GDPR");
    assert_eq!(created.status, "Pending");
    assert!(!created.reminder_enabled);
    assert_eq!(created.reminder_frequency, None);
    assert_eq!(created.created_by, caller);
    assert!(created.created_at <= created.last_updated);
}

#[tokio::test]
async fn test_create_requirement_trims_text_fields() {
    let db = common::db::TestDatabase::new().await;
    let service = RequirementService::new(db.connection.clone());

    let mut payload = common::test_data::create_test_requirement();
    payload.title = Some("  Data Retention Policy  ".to_string());
    payload.assigned_to = Some("  dpo@example.com ".to_string());

    let created = service
        .create_requirement(Uuid::new_v4(), payload)
        .await
        .unwrap();

    assert_eq!(created.title, "Data Retention Policy");
    assert_eq!(created.assigned_to.as_deref(), Some("dpo@example.com"));
}

#[tokio::test]
async fn test_create_requirement_rejects_invalid_enums() {
    let db = common::db::TestDatabase::new().await;
    let service = RequirementService::new(db.connection.clone());
    let caller = Uuid::new_v4();

    let mut payload = common::test_data::create_test_requirement();
    payload.regulation = Some("FERPA".to_string());
    let result = service.create_requirement(caller, payload).await;
    assert!(matches!(result, Err(AppError::ValidationErrors(_))));

    let mut payload = common::test_data::create_test_requirement();
    payload.status = Some("Done".to_string());
    let result = service.create_requirement(caller, payload).await;
    assert!(matches!(result, Err(AppError::ValidationErrors(_))));

    let mut payload = common::test_data::create_test_requirement();
    payload.reminder_frequency = Some("Hourly".to_string());
    let result = service.create_requirement(caller, payload).await;
    assert!(matches!(result, Err(AppError::ValidationErrors(_))));

    // 何も永続化されていない
    let requirements = service.list_requirements().await.unwrap();
    assert!(requirements.is_empty());
}

#[tokio::test]
async fn test_get_requirement_service() {
    let db = common::db::TestDatabase::new().await;
    let service = RequirementService::new(db.connection.clone());

    let created = service
        .create_requirement(Uuid::new_v4(), common::test_data::create_full_requirement())
        .await
        .unwrap();

    let retrieved = service.get_requirement(created.id).await.unwrap();

    assert_eq!(retrieved.id, created.id);
    assert_eq!(retrieved.title, created.title);
    assert_eq!(retrieved.status, created.status);
    assert_eq!(retrieved.reminder_frequency.as_deref(), Some("Quarterly"));

    // 存在しないIDはNotFound
    let result = service.get_requirement(Uuid::new_v4()).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn test_list_requirements_service() {
    let db = common::db::TestDatabase::new().await;
    let service = RequirementService::new(db.connection.clone());
    let caller = Uuid::new_v4();

    service
        .create_requirement(
            caller,
            common::test_data::create_test_requirement_with_title("Req A"),
        )
        .await
        .unwrap();
    service
        .create_requirement(
            caller,
            common::test_data::create_test_requirement_with_title("Req B"),
        )
        .await
        .unwrap();

    let requirements = service.list_requirements().await.unwrap();
    assert_eq!(requirements.len(), 2);
}

#[tokio::test]
async fn test_update_requirement_merges_only_present_fields() {
    let db = common::db::TestDatabase::new().await;
    let service = RequirementService::new(db.connection.clone());

    let created = service
        .create_requirement(Uuid::new_v4(), common::test_data::create_full_requirement())
        .await
        .unwrap();

    let patch = UpdateRequirementDto {
        status: Some("Completed".to_string()),
        ..common::test_data::empty_update()
    };
    let updated = service.update_requirement(created.id, patch).await.unwrap();

    assert_eq!(updated.status, "Completed");
    // 他のフィールドはそのまま
    assert_eq!(updated.title, created.title);
    assert_eq!(updated.description, created.description);
    assert_eq!(updated.assigned_to, created.assigned_to);
    assert_eq!(updated.created_by, created.created_by);
    // last_updated は必ず進む
    assert!(updated.last_updated >= created.last_updated);
}

#[tokio::test]
async fn test_update_requirement_validation_and_not_found() {
    let db = common::db::TestDatabase::new().await;
    let service = RequirementService::new(db.connection.clone());

    let created = service
        .create_requirement(Uuid::new_v4(), common::test_data::create_test_requirement())
        .await
        .unwrap();

    // 列挙外のstatusは拒否され、レコードは変わらない
    let patch = UpdateRequirementDto {
        status: Some("Archived".to_string()),
        ..common::test_data::empty_update()
    };
    let result = service.update_requirement(created.id, patch).await;
    assert!(matches!(result, Err(AppError::ValidationErrors(_))));

    let unchanged = service.get_requirement(created.id).await.unwrap();
    assert_eq!(unchanged.status, "Pending");

    // 空白のみのtitleも拒否
    let patch = UpdateRequirementDto {
        title: Some("   ".to_string()),
        ..common::test_data::empty_update()
    };
    let result = service.update_requirement(created.id, patch).await;
    assert!(matches!(result, Err(AppError::ValidationErrors(_))));

    // 存在しないIDはNotFound
    let patch = UpdateRequirementDto {
        status: Some("Completed".to_string()),
        ..common::test_data::empty_update()
    };
    let result = service.update_requirement(Uuid::new_v4(), patch).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn test_delete_requirement_service() {
    let db = common::db::TestDatabase::new().await;
    let service = RequirementService::new(db.connection.clone());

    let created = service
        .create_requirement(Uuid::new_v4(), common::test_data::create_test_requirement())
        .await
        .unwrap();

    service.delete_requirement(created.id).await.unwrap();

    // 削除済みIDへの再削除はNotFound
    let result = service.delete_requirement(created.id).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    let result = service.get_requirement(created.id).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
}
