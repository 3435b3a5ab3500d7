pub use sea_orm_migration::prelude::*;
pub struct Migrator;

pub mod m20240301_000001_create_current_tables;
pub mod m20240301_000002_create_snapshot_tables;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_current_tables::Migration),
            Box::new(m20240301_000002_create_snapshot_tables::Migration),
        ]
    }
}
