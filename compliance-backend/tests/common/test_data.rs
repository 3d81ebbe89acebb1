// tests/common/test_data.rs

use compliance_backend::api::dto::requirement_dto::{CreateRequirementDto, UpdateRequirementDto};

/// テスト用の最小限の要件作成データを生成
pub fn create_test_requirement() -> CreateRequirementDto {
    CreateRequirementDto {
        title: Some("Data Retention Policy".to_string()),
        description: None,
        regulation: Some("GDPR".to_string()),
        category: None,
        status: None,
        due_date: None,
        assigned_to: None,
        notes: None,
        reminder_enabled: None,
        reminder_date: None,
        reminder_frequency: None,
    }
}

/// タイトルを指定して要件作成データを生成
pub fn create_test_requirement_with_title(title: &str) -> CreateRequirementDto {
    CreateRequirementDto {
        title: Some(title.to_string()),
        ..create_test_requirement()
    }
}

/// 全フィールドが埋まった要件作成データを生成
pub fn create_full_requirement() -> CreateRequirementDto {
    CreateRequirementDto {
        title: Some("Annual HIPAA risk assessment".to_string()),
        description: Some("Review access controls and encryption at rest".to_string()),
        regulation: Some("HIPAA".to_string()),
        category: Some("Security".to_string()),
        status: Some("In Progress".to_string()),
        due_date: Some(chrono::Utc::now() + chrono::Duration::days(30)),
        assigned_to: Some("security-team".to_string()),
        notes: Some("Carry over findings from last year".to_string()),
        reminder_enabled: Some(true),
        reminder_date: Some(chrono::Utc::now() + chrono::Duration::days(23)),
        reminder_frequency: Some("Quarterly".to_string()),
    }
}

/// 空のパッチ更新データを生成
pub fn empty_update() -> UpdateRequirementDto {
    UpdateRequirementDto::default()
}
