use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        ingredient::{IngredientDto, IngredientSearchParams, NewIngredientDto},
    },
    server::{
        controller::util::get_user::get_user_from_session, error::Error, model::app::AppState,
        service::ingredient::IngredientService,
    },
};

pub static INGREDIENT_TAG: &str = "ingredient";

/// Search the ingredient catalog
///
/// Returns every ingredient whose name starts with `name`, ignoring case, ordered by name.
#[utoipa::path(
    get,
    path = "/api/ingredients",
    tag = INGREDIENT_TAG,
    params(IngredientSearchParams),
    responses(
        (status = 200, description = "Matching ingredients", body = Vec<IngredientDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_ingredients(
    State(state): State<AppState>,
    Query(params): Query<IngredientSearchParams>,
) -> Result<impl IntoResponse, Error> {
    let ingredients = IngredientService::new(&state.db)
        .search(params.name.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(ingredients)))
}

/// Register a catalog ingredient
#[utoipa::path(
    post,
    path = "/api/ingredients",
    tag = INGREDIENT_TAG,
    request_body = NewIngredientDto,
    responses(
        (status = 201, description = "Ingredient registered", body = IngredientDto),
        (status = 400, description = "Invalid or duplicate ingredient", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_ingredient(
    State(state): State<AppState>,
    session: Session,
    Json(ingredient): Json<NewIngredientDto>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let ingredient = IngredientService::new(&state.db)
        .register(ingredient)
        .await?;

    Ok((StatusCode::CREATED, Json(ingredient)))
}

#[utoipa::path(
    get,
    path = "/api/ingredients/{id}",
    tag = INGREDIENT_TAG,
    params(("id" = i32, Path, description = "Ingredient ID")),
    responses(
        (status = 200, description = "Ingredient found", body = IngredientDto),
        (status = 404, description = "Ingredient not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ingredient(
    State(state): State<AppState>,
    Path(ingredient_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let ingredient = IngredientService::new(&state.db)
        .resolve(ingredient_id)
        .await?;

    Ok((StatusCode::OK, Json(ingredient)))
}

/// Remove an ingredient no recipe uses
#[utoipa::path(
    delete,
    path = "/api/ingredients/{id}",
    tag = INGREDIENT_TAG,
    params(("id" = i32, Path, description = "Ingredient ID")),
    responses(
        (status = 204, description = "Ingredient removed"),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Ingredient not found", body = ErrorDto),
        (status = 409, description = "Ingredient is used by a recipe", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_ingredient(
    State(state): State<AppState>,
    session: Session,
    Path(ingredient_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    IngredientService::new(&state.db)
        .remove(ingredient_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
