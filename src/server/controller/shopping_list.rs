use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, shopping::ShoppingListItemDto},
    server::{
        controller::util::get_user::get_user_from_session,
        error::Error,
        model::app::AppState,
        service::shopping_list::{render_shopping_list, ShoppingListService},
    },
};

pub static SHOPPING_LIST_TAG: &str = "shopping list";

/// File name suggested to clients downloading the shopping list
pub static SHOPPING_LIST_FILE_NAME: &str = "shopping_list.txt";

/// Get the ingredients of every recipe in the shopping cart, summed per ingredient
#[utoipa::path(
    get,
    path = "/api/recipes/shopping_list",
    tag = SHOPPING_LIST_TAG,
    responses(
        (status = 200, description = "Aggregated shopping list", body = Vec<ShoppingListItemDto>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_shopping_list(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let items = ShoppingListService::new(&state.db)
        .aggregate(user.id)
        .await?;

    Ok((StatusCode::OK, Json(items)))
}

/// Download the shopping list as a plain text file
#[utoipa::path(
    get,
    path = "/api/recipes/download_shopping_cart",
    tag = SHOPPING_LIST_TAG,
    responses(
        (status = 200, description = "Shopping list as a text attachment", body = String, content_type = "text/plain"),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn download_shopping_list(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let items = ShoppingListService::new(&state.db)
        .aggregate(user.id)
        .await?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", SHOPPING_LIST_FILE_NAME),
            ),
        ],
        render_shopping_list(&items),
    ))
}
