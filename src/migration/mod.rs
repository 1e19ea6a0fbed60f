pub use sea_orm_migration::prelude::*;

mod m20220922_000001_create_menu_item;
mod m20220922_000002_create_cinema_system;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20220922_000001_create_menu_item::Migration),
            Box::new(m20220922_000002_create_cinema_system::Migration),
        ]
    }
}
