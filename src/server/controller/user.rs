use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{NewUserDto, UserDto},
    },
    server::{
        controller::util::get_user::{get_user_from_session, get_viewer_id},
        error::{domain::DomainError, Error},
        model::app::AppState,
        service::user::UserService,
    },
};

pub static USER_TAG: &str = "user";

/// Create a user account
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = NewUserDto,
    responses(
        (status = 201, description = "User created", body = UserDto),
        (status = 400, description = "Invalid user fields", body = ErrorDto),
        (status = 409, description = "Email or username already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(user): Json<NewUserDto>,
) -> Result<impl IntoResponse, Error> {
    let user = UserService::new(&state.db).create_user(user).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Get the user currently logged in
#[utoipa::path(
    get,
    path = "/api/users/me",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_current_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    Ok((StatusCode::OK, Json(user)))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User found", body = UserDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let viewer = get_viewer_id(&state, &session).await?;

    let Some(user) = UserService::new(&state.db)
        .get_user(viewer, user_id)
        .await?
    else {
        return Err(DomainError::NotFound(format!("User ID {} not found", user_id)).into());
    };

    Ok((StatusCode::OK, Json(user)))
}
