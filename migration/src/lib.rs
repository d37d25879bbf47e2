pub use sea_orm_migration::prelude::*;

mod m20260720_000001_create_employees;

pub struct Migrator;
#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20260720_000001_create_employees::Migration)]
    }
}
