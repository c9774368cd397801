//! Test fixture modules for database record creation.
//!
//! Each submodule adds an accessor to [`TestContext`](crate::TestContext) returning a
//! fixture helper for one area of the schema:
//!
//! - `user` - user accounts
//! - `ingredient` - catalog ingredients
//! - `recipe` - recipes and their ingredient lines
//! - `relation` - favorites and shopping cart entries
//! - `subscription` - author subscriptions

pub mod ingredient;
pub mod recipe;
pub mod relation;
pub mod subscription;
pub mod user;
