use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("User ID is not present in session")]
    UserNotInSession,
    #[error("User ID {0:?} not found in database despite having an active session")]
    UserNotInDatabase(i32),
    #[error("User ID {user_id} is not the author of recipe ID {recipe_id}")]
    NotRecipeAuthor { user_id: i32, recipe_id: i32 },
}

impl AuthError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::UserNotInSession => "unauthorized",
            Self::UserNotInDatabase(_) => "user_not_found",
            Self::NotRecipeAuthor { .. } => "forbidden",
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotInSession => error_response(
                StatusCode::UNAUTHORIZED,
                self.code(),
                "Authentication required",
            ),
            Self::UserNotInDatabase(_) => {
                error_response(StatusCode::NOT_FOUND, self.code(), "User not found")
            }
            Self::NotRecipeAuthor { .. } => error_response(
                StatusCode::FORBIDDEN,
                self.code(),
                "Only the author can change this recipe",
            ),
        }
    }
}
