pub use sea_orm_migration::prelude::*;

mod m20261017_000001_user;
mod m20261017_000002_ingredient;
mod m20261017_000003_recipe;
mod m20261017_000004_recipe_ingredient;
mod m20261017_000005_user_recipe_relation;
mod m20261017_000006_subscription;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261017_000001_user::Migration),
            Box::new(m20261017_000002_ingredient::Migration),
            Box::new(m20261017_000003_recipe::Migration),
            Box::new(m20261017_000004_recipe_ingredient::Migration),
            Box::new(m20261017_000005_user_recipe_relation::Migration),
            Box::new(m20261017_000006_subscription::Migration),
        ]
    }
}
