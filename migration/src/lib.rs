pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_bookings;
mod m20250601_000002_create_contacts;
mod m20250601_000003_create_feedback;
mod m20250601_000004_create_photos;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_bookings::Migration),
            Box::new(m20250601_000002_create_contacts::Migration),
            Box::new(m20250601_000003_create_feedback::Migration),
            Box::new(m20250601_000004_create_photos::Migration),
        ]
    }
}
