// migration/src/lib.rs
pub use sea_orm_migration::prelude::*;

// マイグレーションモジュール
mod m20250815_000001_create_compliance_requirements_table;
mod m20250815_000002_add_requirement_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            // 1. 基本テーブル作成
            Box::new(m20250815_000001_create_compliance_requirements_table::Migration),
            // 2. インデックス追加
            Box::new(m20250815_000002_add_requirement_indexes::Migration),
        ]
    }
}
