// src/service/requirement_service.rs

use crate::api::dto::requirement_dto::{
    CreateRequirementDto, RequirementDto, UpdateRequirementDto,
};
use crate::db::DbPool;
use crate::domain::regulation::Regulation;
use crate::domain::reminder_frequency::ReminderFrequency;
use crate::domain::requirement_status::RequirementStatus;
use crate::error::{AppError, AppResult};
use crate::repository::requirement_repository::RequirementRepository;
use std::sync::Arc;
use uuid::Uuid;

pub struct RequirementService {
    repo: Arc<RequirementRepository>,
}

impl RequirementService {
    pub fn new(db_pool: DbPool) -> Self {
        Self {
            repo: Arc::new(RequirementRepository::new(db_pool)),
        }
    }

    // --- CRUD ---

    /// 要件を新規作成する
    ///
    /// created_by は必ずAPI層が解決した呼び出し元アイデンティティから取る。
    pub async fn create_requirement(
        &self,
        created_by: Uuid,
        mut payload: CreateRequirementDto,
    ) -> AppResult<RequirementDto> {
        normalize_create(&mut payload);

        let mut errors = Vec::new();

        match payload.title.as_deref() {
            None | Some("") => errors.push("Title is required and cannot be blank".to_string()),
            Some(_) => {}
        }

        match payload.regulation.as_deref() {
            None | Some("") => errors.push("Regulation is required".to_string()),
            Some(regulation) => {
                if let Err(e) = regulation.parse::<Regulation>() {
                    errors.push(e);
                }
            }
        }

        if let Some(status) = &payload.status {
            if let Err(e) = status.parse::<RequirementStatus>() {
                errors.push(e);
            }
        }

        if let Some(frequency) = &payload.reminder_frequency {
            if let Err(e) = frequency.parse::<ReminderFrequency>() {
                errors.push(e);
            }
        }

        if !errors.is_empty() {
            return Err(AppError::ValidationErrors(errors));
        }

        let created = self.repo.create(created_by, payload).await?;
        Ok(created.into())
    }

    pub async fn get_requirement(&self, id: Uuid) -> AppResult<RequirementDto> {
        let requirement = self.repo.find_by_id(id).await?.ok_or_else(|| {
            AppError::NotFound(format!("Compliance requirement with id {} not found", id))
        })?;
        Ok(requirement.into())
    }

    pub async fn list_requirements(&self) -> AppResult<Vec<RequirementDto>> {
        let requirements = self.repo.find_all().await?;
        Ok(requirements.into_iter().map(Into::into).collect())
    }

    /// 存在するフィールドだけをマージするパッチ更新
    pub async fn update_requirement(
        &self,
        id: Uuid,
        mut payload: UpdateRequirementDto,
    ) -> AppResult<RequirementDto> {
        normalize_update(&mut payload);

        let mut errors = Vec::new();

        if let Some(title) = &payload.title {
            if title.is_empty() {
                errors.push("Title cannot be blank".to_string());
            }
        }

        if let Some(regulation) = &payload.regulation {
            if let Err(e) = regulation.parse::<Regulation>() {
                errors.push(e);
            }
        }

        if let Some(status) = &payload.status {
            if let Err(e) = status.parse::<RequirementStatus>() {
                errors.push(e);
            }
        }

        if let Some(frequency) = &payload.reminder_frequency {
            if let Err(e) = frequency.parse::<ReminderFrequency>() {
                errors.push(e);
            }
        }

        if !errors.is_empty() {
            return Err(AppError::ValidationErrors(errors));
        }

        let updated = self.repo.update(id, payload).await?.ok_or_else(|| {
            AppError::NotFound(format!("Compliance requirement with id {} not found", id))
        })?;
        Ok(updated.into())
    }

    pub async fn delete_requirement(&self, id: Uuid) -> AppResult<()> {
        let delete_result = self.repo.delete(id).await?;
        if delete_result.rows_affected == 0 {
            Err(AppError::NotFound(format!(
                "Compliance requirement with id {} not found for deletion",
                id
            )))
        } else {
            Ok(())
        }
    }
}

// テキスト項目は保存前にトリムする（スキーマ契約）
fn normalize_create(payload: &mut CreateRequirementDto) {
    trim_opt(&mut payload.title);
    trim_opt(&mut payload.regulation);
    trim_opt(&mut payload.description);
    trim_opt(&mut payload.category);
    trim_opt(&mut payload.status);
    trim_opt(&mut payload.assigned_to);
    trim_opt(&mut payload.notes);
    trim_opt(&mut payload.reminder_frequency);
}

fn normalize_update(payload: &mut UpdateRequirementDto) {
    trim_opt(&mut payload.title);
    trim_opt(&mut payload.regulation);
    trim_opt(&mut payload.description);
    trim_opt(&mut payload.category);
    trim_opt(&mut payload.status);
    trim_opt(&mut payload.assigned_to);
    trim_opt(&mut payload.notes);
    trim_opt(&mut payload.reminder_frequency);
}

fn trim_in_place(value: &mut String) {
    let trimmed = value.trim();
    if trimmed.len() != value.len() {
        *value = trimmed.to_string();
    }
}

fn trim_opt(value: &mut Option<String>) {
    if let Some(v) = value {
        trim_in_place(v);
    }
}
