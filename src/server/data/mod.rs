//! Data access layer repositories.
//!
//! Repositories wrap SeaORM queries per table and are generic over
//! [`sea_orm::ConnectionTrait`], so the same repository runs on the shared connection or
//! inside a transaction. They return raw [`sea_orm::DbErr`]s, translating constraint
//! violations into domain errors is left to the services.

pub mod ingredient;
pub mod recipe;
pub mod recipe_ingredient;
pub mod relation;
pub mod shopping_list;
pub mod subscription;
pub mod user;
