pub use sea_orm_migration::prelude::*;

mod m20251201_000001_create_elf_profiles_table;
mod m20251201_000002_create_toy_orders_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251201_000001_create_elf_profiles_table::Migration),
            Box::new(m20251201_000002_create_toy_orders_table::Migration),
        ]
    }
}
