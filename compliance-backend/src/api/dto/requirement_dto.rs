// src/api/dto/requirement_dto.rs
use crate::domain::requirement_model;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// ワイヤ表現は元のAPI契約に合わせてcamelCase。
// createdBy やタイムスタンプ類はシステム側で採番するためDTOには存在せず、
// クライアントが送ってきても未知フィールドとして黙って無視される。

// --- Request DTOs ---

#[derive(Deserialize, Serialize, Debug, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequirementDto {
    // 必須項目も Option で受け、欠落はサービス層で検証エラーとして返す
    // （デシリアライズ段階で弾くと 400 ではなく 422 になってしまうため）
    #[validate(length(
        max = 200,
        message = "Title must not exceed 200 characters"
    ))]
    pub title: Option<String>,

    #[validate(length(
        max = 2000,
        message = "Description must not exceed 2000 characters"
    ))]
    pub description: Option<String>,

    // enum系フィールドは文字列で受けてサービス層で列挙集合と突き合わせる
    pub regulation: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>, // 省略時は Pending
    pub due_date: Option<DateTime<Utc>>,
    pub assigned_to: Option<String>,

    #[validate(length(max = 2000, message = "Notes must not exceed 2000 characters"))]
    pub notes: Option<String>,

    pub reminder_enabled: Option<bool>, // 省略時は false
    pub reminder_date: Option<DateTime<Utc>>,
    pub reminder_frequency: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Default, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequirementDto {
    #[validate(length(
        max = 200,
        message = "Title must not exceed 200 characters"
    ))]
    pub title: Option<String>,

    #[validate(length(
        max = 2000,
        message = "Description must not exceed 2000 characters"
    ))]
    pub description: Option<String>,

    pub regulation: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub assigned_to: Option<String>,

    #[validate(length(max = 2000, message = "Notes must not exceed 2000 characters"))]
    pub notes: Option<String>,

    pub reminder_enabled: Option<bool>,
    pub reminder_date: Option<DateTime<Utc>>,
    pub reminder_frequency: Option<String>,
}

// --- Response DTOs ---

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RequirementDto {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub regulation: String,
    pub category: Option<String>,
    pub status: String,
    pub due_date: Option<DateTime<Utc>>,
    pub assigned_to: Option<String>,
    pub notes: Option<String>,
    pub last_updated: DateTime<Utc>,
    pub created_by: Uuid,
    pub reminder_enabled: bool,
    pub reminder_date: Option<DateTime<Utc>>,
    pub reminder_frequency: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// SeaORM の Model から RequirementDto への変換
impl From<requirement_model::Model> for RequirementDto {
    fn from(model: requirement_model::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            regulation: model.regulation,
            category: model.category,
            status: model.status,
            due_date: model.due_date,
            assigned_to: model.assigned_to,
            notes: model.notes,
            last_updated: model.last_updated,
            created_by: model.created_by,
            reminder_enabled: model.reminder_enabled,
            reminder_date: model.reminder_date,
            reminder_frequency: model.reminder_frequency,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct DeleteRequirementResponse {
    pub message: String,
}
