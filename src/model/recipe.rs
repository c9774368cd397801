use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::user::UserDto;

/// An ingredient line of a recipe as submitted by a client
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IngredientLineDto {
    /// Catalog ingredient ID
    pub id: i32,
    pub amount: i32,
}

/// An ingredient line of a recipe joined with its catalog entry
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecipeIngredientDto {
    pub id: i32,
    pub name: String,
    pub measurement_unit: String,
    pub amount: i32,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct RecipeDto {
    pub id: i32,
    pub author: UserDto,
    pub ingredients: Vec<RecipeIngredientDto>,
    pub name: String,
    pub image: Option<String>,
    pub text: String,
    pub cooking_time: i32,
    pub is_favorited: bool,
    pub is_in_shopping_cart: bool,
    pub created_at: NaiveDateTime,
}

/// Compact recipe representation used in favorites, carts and author previews
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ShortRecipeDto {
    pub id: i32,
    pub name: String,
    pub image: Option<String>,
    pub cooking_time: i32,
}

impl From<entity::recipe::Model> for ShortRecipeDto {
    fn from(model: entity::recipe::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            image: model.image,
            cooking_time: model.cooking_time,
        }
    }
}

/// Request body to create a recipe
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct NewRecipeDto {
    pub name: String,
    pub text: String,
    /// Reference to an image already stored in the image store
    pub image: Option<String>,
    pub cooking_time: i32,
    pub ingredients: Vec<IngredientLineDto>,
}

/// Request body to update a recipe, omitted fields are left unchanged
///
/// When `ingredients` is present it replaces every ingredient line of the recipe.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateRecipeDto {
    pub name: Option<String>,
    pub text: Option<String>,
    pub image: Option<String>,
    pub cooking_time: Option<i32>,
    pub ingredients: Option<Vec<IngredientLineDto>>,
}

/// Filters for listing recipes
#[derive(Clone, Copy, Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RecipeFilterParams {
    /// Only recipes published by this user ID
    pub author: Option<i32>,
    /// Only recipes the current user has favorited
    pub is_favorited: Option<bool>,
    /// Only recipes in the current user's shopping cart
    pub is_in_shopping_cart: Option<bool>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct RecipeLinkDto {
    #[serde(rename = "short-link")]
    pub short_link: String,
}
