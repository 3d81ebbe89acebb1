// src/repository/requirement_repository.rs
use crate::api::dto::requirement_dto::{CreateRequirementDto, UpdateRequirementDto};
use crate::domain::requirement_model::{
    self, ActiveModel as RequirementActiveModel, Entity as RequirementEntity,
};
use crate::domain::requirement_status::RequirementStatus;
use chrono::Utc;
use sea_orm::{entity::*, DbConn, DbErr, DeleteResult, Set};
use sea_orm::{Order, QueryOrder};
use uuid::Uuid;

pub struct RequirementRepository {
    db: DbConn,
}

impl RequirementRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<requirement_model::Model>, DbErr> {
        RequirementEntity::find_by_id(id).one(&self.db).await
    }

    pub async fn find_all(&self) -> Result<Vec<requirement_model::Model>, DbErr> {
        RequirementEntity::find()
            .order_by(requirement_model::Column::CreatedAt, Order::Desc)
            .all(&self.db)
            .await
    }

    pub async fn create(
        &self,
        created_by: Uuid,
        payload: CreateRequirementDto,
    ) -> Result<requirement_model::Model, DbErr> {
        // title / regulation の存在はサービス層で検証済み
        let new_requirement = RequirementActiveModel {
            title: Set(payload.title.unwrap_or_default()),
            description: Set(payload.description),
            regulation: Set(payload.regulation.unwrap_or_default()),
            category: Set(payload.category),
            status: Set(payload
                .status
                .unwrap_or_else(|| RequirementStatus::default().to_string())),
            due_date: Set(payload.due_date),
            assigned_to: Set(payload.assigned_to),
            notes: Set(payload.notes),
            created_by: Set(created_by),
            reminder_enabled: Set(payload.reminder_enabled.unwrap_or(false)),
            reminder_date: Set(payload.reminder_date),
            reminder_frequency: Set(payload.reminder_frequency),
            ..Default::default()
        };
        new_requirement.insert(&self.db).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        payload: UpdateRequirementDto,
    ) -> Result<Option<requirement_model::Model>, DbErr> {
        let requirement = match RequirementEntity::find_by_id(id).one(&self.db).await? {
            Some(r) => r,
            None => return Ok(None), // 要件が見つからなければ None を返す
        };

        // 元のデータを元に ActiveModel を作成し、存在するフィールドだけをマージする
        let mut active_model: RequirementActiveModel = requirement.into();

        if let Some(title_val) = payload.title {
            active_model.title = Set(title_val);
        }

        if payload.description.is_some() {
            active_model.description = Set(payload.description);
        }

        if let Some(regulation_val) = payload.regulation {
            active_model.regulation = Set(regulation_val);
        }

        if payload.category.is_some() {
            active_model.category = Set(payload.category);
        }

        if let Some(status_val) = payload.status {
            active_model.status = Set(status_val);
        }

        if payload.due_date.is_some() {
            active_model.due_date = Set(payload.due_date);
        }

        if payload.assigned_to.is_some() {
            active_model.assigned_to = Set(payload.assigned_to);
        }

        if payload.notes.is_some() {
            active_model.notes = Set(payload.notes);
        }

        if let Some(reminder_enabled_val) = payload.reminder_enabled {
            active_model.reminder_enabled = Set(reminder_enabled_val);
        }

        if payload.reminder_date.is_some() {
            active_model.reminder_date = Set(payload.reminder_date);
        }

        if payload.reminder_frequency.is_some() {
            active_model.reminder_frequency = Set(payload.reminder_frequency);
        }

        // 受理された変更は必ず last_updated を進める（マージ内容の有無に依らない）
        active_model.last_updated = Set(Utc::now());

        Ok(Some(active_model.update(&self.db).await?))
    }

    pub async fn delete(&self, id: Uuid) -> Result<DeleteResult, DbErr> {
        RequirementEntity::delete_by_id(id).exec(&self.db).await
    }
}
