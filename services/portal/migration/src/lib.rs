use sea_orm_migration::prelude::*;

mod m20260801_000001_create_profiles;
mod m20260801_000002_create_quotes;
mod m20260801_000003_create_transactions;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_create_profiles::Migration),
            Box::new(m20260801_000002_create_quotes::Migration),
            Box::new(m20260801_000003_create_transactions::Migration),
        ]
    }
}
