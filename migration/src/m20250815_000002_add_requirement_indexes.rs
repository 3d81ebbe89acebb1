use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // status カラムにインデックスを追加
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .table(ComplianceRequirements::Table)
                    .name("idx_compliance_requirements_status")
                    .col(ComplianceRequirements::Status)
                    .to_owned(),
            )
            .await?;

        // due_date カラムにインデックスを追加
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .table(ComplianceRequirements::Table)
                    .name("idx_compliance_requirements_due_date")
                    .col(ComplianceRequirements::DueDate)
                    .to_owned(),
            )
            .await?;

        // created_at カラムにインデックスを追加（一覧の並び順用）
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .table(ComplianceRequirements::Table)
                    .name("idx_compliance_requirements_created_at")
                    .col(ComplianceRequirements::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // インデックスを削除
        manager
            .drop_index(
                Index::drop()
                    .if_exists()
                    .table(ComplianceRequirements::Table)
                    .name("idx_compliance_requirements_status")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .if_exists()
                    .table(ComplianceRequirements::Table)
                    .name("idx_compliance_requirements_due_date")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .if_exists()
                    .table(ComplianceRequirements::Table)
                    .name("idx_compliance_requirements_created_at")
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum ComplianceRequirements {
    Table,
    Status,
    DueDate,
    CreatedAt,
}
