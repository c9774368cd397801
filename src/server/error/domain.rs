use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

/// Violations of the recipe, ingredient, relation and subscription rules.
///
/// Each variant maps to its own machine-readable code so clients can tell, for example,
/// a recipe that was "already removed" apart from one that was "removed now".
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    /// An ingredient name collides with an existing catalog entry, or a recipe lists
    /// the same ingredient more than once.
    #[error("Duplicate ingredient: {0}")]
    DuplicateIngredient(String),
    #[error("Ingredient ID {0} does not exist")]
    UnknownIngredient(i32),
    #[error("Amount {amount} for ingredient ID {ingredient_id} must be at least 1")]
    InvalidAmount { ingredient_id: i32, amount: i32 },
    #[error("A recipe requires at least one ingredient")]
    EmptyIngredientList,
    #[error("Cooking time of {0} minutes is invalid, it must be at least 1 minute")]
    InvalidCookingTime(i32),
    #[error("Invalid value for {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },
    #[error("Users cannot subscribe to themselves")]
    SelfSubscription,
    #[error("Ingredient ID {0} is used by at least one recipe")]
    IngredientInUse(i32),
    #[error("{0}")]
    AlreadyExists(String),
    #[error("{0}")]
    NotFound(String),
}

impl DomainError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::DuplicateIngredient(_) => "duplicate_ingredient",
            Self::UnknownIngredient(_) => "unknown_ingredient",
            Self::InvalidAmount { .. } => "invalid_amount",
            Self::EmptyIngredientList => "empty_ingredient_list",
            Self::InvalidCookingTime(_) => "invalid_cooking_time",
            Self::InvalidField { .. } => "invalid_field",
            Self::SelfSubscription => "self_subscription",
            Self::IngredientInUse(_) => "ingredient_in_use",
            Self::AlreadyExists(_) => "already_exists",
            Self::NotFound(_) => "not_found",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::AlreadyExists(_) | Self::IngredientInUse(_) => StatusCode::CONFLICT,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    pub fn invalid_field(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            reason: reason.into(),
        }
    }
}

impl IntoResponse for DomainError {
    fn into_response(self) -> Response {
        tracing::debug!(code = self.code(), "{}", self);

        error_response(self.status(), self.code(), self.to_string())
    }
}
