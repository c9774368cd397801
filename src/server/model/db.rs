//! Database model type aliases.
//!
//! Short aliases for the SeaORM entity models used across repositories and services, so
//! that signatures don't need to spell out the `entity` crate paths.

/// A registered user who may publish recipes and subscribe to other authors.
pub type UserModel = entity::user::Model;

/// A catalog ingredient.
///
/// # Fields (from `entity::ingredient::Model`)
/// - `id` - Primary key
/// - `name` - Normalized name, unique across the catalog
/// - `measurement_unit` - Unit the ingredient's amounts are expressed in
pub type IngredientModel = entity::ingredient::Model;

/// A published recipe, owned by exactly one author.
///
/// # Fields (from `entity::recipe::Model`)
/// - `id` - Primary key
/// - `author_id` - Foreign key to the publishing user
/// - `name` - Name, unique per author ignoring case
/// - `text` - Cooking instructions
/// - `image` - Reference to an image in the external image store
/// - `cooking_time` - Minutes, at least 1
/// - `created_at` - Publication timestamp, newest recipes are listed first
pub type RecipeModel = entity::recipe::Model;
