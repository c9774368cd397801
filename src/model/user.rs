use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::recipe::ShortRecipeDto;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    /// Whether the current user is subscribed to this user
    pub is_subscribed: bool,
}

impl UserDto {
    pub fn from_model(model: entity::user::Model, is_subscribed: bool) -> Self {
        Self {
            id: model.id,
            email: model.email,
            username: model.username,
            first_name: model.first_name,
            last_name: model.last_name,
            is_subscribed,
        }
    }
}

/// Request body to create a user
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct NewUserDto {
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

/// An author the current user is subscribed to, with a preview of their recipes
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct SubscriptionDto {
    pub author: UserDto,
    /// Number of recipes published by the author, unaffected by the preview limit
    pub recipes_count: u64,
    pub recipes: Vec<ShortRecipeDto>,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RecipesLimitParams {
    /// Maximum number of recipes in each author preview, `0` or absent means unlimited
    pub recipes_limit: Option<u64>,
}
