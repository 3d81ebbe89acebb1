use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ComplianceRequirements::Table)
                    .if_not_exists() // テーブルが存在しない場合のみ作成
                    .col(
                        ColumnDef::new(ComplianceRequirements::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ComplianceRequirements::Title)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ComplianceRequirements::Description).text())
                    .col(
                        ColumnDef::new(ComplianceRequirements::Regulation)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ComplianceRequirements::Category).string())
                    .col(
                        ColumnDef::new(ComplianceRequirements::Status)
                            .string()
                            .not_null()
                            .default("Pending"), // デフォルト値
                    )
                    .col(ColumnDef::new(ComplianceRequirements::DueDate).timestamp_with_time_zone())
                    .col(ColumnDef::new(ComplianceRequirements::AssignedTo).string())
                    .col(ColumnDef::new(ComplianceRequirements::Notes).text())
                    .col(
                        ColumnDef::new(ComplianceRequirements::LastUpdated)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(ComplianceRequirements::CreatedBy)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ComplianceRequirements::ReminderEnabled)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(ComplianceRequirements::ReminderDate)
                            .timestamp_with_time_zone(),
                    )
                    .col(ColumnDef::new(ComplianceRequirements::ReminderFrequency).string())
                    .col(
                        ColumnDef::new(ComplianceRequirements::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()), // DEFAULT NOW()
                    )
                    .col(
                        ColumnDef::new(ComplianceRequirements::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()), // DEFAULT NOW()
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(ComplianceRequirements::Table)
                    .to_owned(),
            )
            .await
    }
}

/// Iden Enum for the 'compliance_requirements' table and its columns
#[derive(DeriveIden)]
enum ComplianceRequirements {
    Table,
    Id,
    Title,
    Description,
    Regulation,
    Category,
    Status,
    DueDate,
    AssignedTo,
    Notes,
    LastUpdated,
    CreatedBy,
    ReminderEnabled,
    ReminderDate,
    ReminderFrequency,
    CreatedAt,
    UpdatedAt,
}
