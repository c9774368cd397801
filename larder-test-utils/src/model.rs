//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main larder crate to keep fixture signatures short.

pub type UserModel = entity::user::Model;

pub type IngredientModel = entity::ingredient::Model;

pub type RecipeModel = entity::recipe::Model;
