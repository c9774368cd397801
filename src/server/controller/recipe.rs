use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, PageDto, PageParams},
        recipe::{
            IngredientLineDto, NewRecipeDto, RecipeDto, RecipeFilterParams, RecipeIngredientDto,
            RecipeLinkDto, UpdateRecipeDto,
        },
    },
    server::{
        controller::util::get_user::{get_user_from_session, get_viewer_id},
        error::Error,
        model::app::AppState,
        service::recipe::{ingredient::RecipeIngredientService, RecipeService},
    },
};

pub static RECIPE_TAG: &str = "recipe";

/// List recipes, newest first
///
/// The `is_favorited` and `is_in_shopping_cart` filters only apply to a logged in user.
#[utoipa::path(
    get,
    path = "/api/recipes",
    tag = RECIPE_TAG,
    params(RecipeFilterParams, PageParams),
    responses(
        (status = 200, description = "A page of recipes", body = PageDto<RecipeDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_recipes(
    State(state): State<AppState>,
    session: Session,
    Query(filters): Query<RecipeFilterParams>,
    Query(page): Query<PageParams>,
) -> Result<impl IntoResponse, Error> {
    let viewer = get_viewer_id(&state, &session).await?;

    let recipes = RecipeService::new(&state.db)
        .list(viewer, filters, page)
        .await?;

    Ok((StatusCode::OK, Json(recipes)))
}

/// Publish a recipe
#[utoipa::path(
    post,
    path = "/api/recipes",
    tag = RECIPE_TAG,
    request_body = NewRecipeDto,
    responses(
        (status = 201, description = "Recipe published", body = RecipeDto),
        (status = 400, description = "Invalid recipe or ingredient lines", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 409, description = "A recipe by this name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_recipe(
    State(state): State<AppState>,
    session: Session,
    Json(recipe): Json<NewRecipeDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let recipe = RecipeService::new(&state.db).create(user.id, recipe).await?;

    Ok((StatusCode::CREATED, Json(recipe)))
}

#[utoipa::path(
    get,
    path = "/api/recipes/{id}",
    tag = RECIPE_TAG,
    params(("id" = i32, Path, description = "Recipe ID")),
    responses(
        (status = 200, description = "Recipe found", body = RecipeDto),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_recipe(
    State(state): State<AppState>,
    session: Session,
    Path(recipe_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let viewer = get_viewer_id(&state, &session).await?;

    let recipe = RecipeService::new(&state.db).get(viewer, recipe_id).await?;

    Ok((StatusCode::OK, Json(recipe)))
}

/// Update a recipe, omitted fields are left unchanged
#[utoipa::path(
    patch,
    path = "/api/recipes/{id}",
    tag = RECIPE_TAG,
    params(("id" = i32, Path, description = "Recipe ID")),
    request_body = UpdateRecipeDto,
    responses(
        (status = 200, description = "Recipe updated", body = RecipeDto),
        (status = 400, description = "Invalid recipe or ingredient lines", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Not the author of the recipe", body = ErrorDto),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 409, description = "A recipe by this name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_recipe(
    State(state): State<AppState>,
    session: Session,
    Path(recipe_id): Path<i32>,
    Json(changes): Json<UpdateRecipeDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let recipe = RecipeService::new(&state.db)
        .update(user.id, recipe_id, changes)
        .await?;

    Ok((StatusCode::OK, Json(recipe)))
}

#[utoipa::path(
    delete,
    path = "/api/recipes/{id}",
    tag = RECIPE_TAG,
    params(("id" = i32, Path, description = "Recipe ID")),
    responses(
        (status = 204, description = "Recipe deleted"),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Not the author of the recipe", body = ErrorDto),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_recipe(
    State(state): State<AppState>,
    session: Session,
    Path(recipe_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    RecipeService::new(&state.db)
        .delete(user.id, recipe_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the ingredient lines of a recipe, ordered by ingredient name
#[utoipa::path(
    get,
    path = "/api/recipes/{id}/ingredients",
    tag = RECIPE_TAG,
    params(("id" = i32, Path, description = "Recipe ID")),
    responses(
        (status = 200, description = "Ingredient lines of the recipe", body = Vec<RecipeIngredientDto>),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_recipe_ingredients(
    State(state): State<AppState>,
    Path(recipe_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let report = RecipeIngredientService::new(&state.db)
        .get_ingredient_report(recipe_id)
        .await?;

    Ok((StatusCode::OK, Json(report)))
}

/// Replace every ingredient line of a recipe
///
/// The new lines fully replace the existing ones. On any error the existing lines are kept.
#[utoipa::path(
    put,
    path = "/api/recipes/{id}/ingredients",
    tag = RECIPE_TAG,
    params(("id" = i32, Path, description = "Recipe ID")),
    request_body = Vec<IngredientLineDto>,
    responses(
        (status = 200, description = "Ingredient lines replaced", body = Vec<RecipeIngredientDto>),
        (status = 400, description = "Invalid ingredient lines", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Not the author of the recipe", body = ErrorDto),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_recipe_ingredients(
    State(state): State<AppState>,
    session: Session,
    Path(recipe_id): Path<i32>,
    Json(lines): Json<Vec<IngredientLineDto>>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let report = RecipeIngredientService::new(&state.db)
        .set_ingredients(user.id, recipe_id, &lines)
        .await?;

    Ok((StatusCode::OK, Json(report)))
}

/// Get a short link to a recipe
#[utoipa::path(
    get,
    path = "/api/recipes/{id}/get-link",
    tag = RECIPE_TAG,
    params(("id" = i32, Path, description = "Recipe ID")),
    responses(
        (status = 200, description = "Short link to the recipe", body = RecipeLinkDto),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_recipe_link(
    State(state): State<AppState>,
    Path(recipe_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let link = RecipeService::new(&state.db)
        .link(recipe_id, &state.public_url)
        .await?;

    Ok((StatusCode::OK, Json(link)))
}

/// Follow a recipe short link
///
/// # Responses
/// - 307 (Temporary Redirect): Redirects to the recipe page
/// - 404 (Not Found): Recipe does not exist
#[utoipa::path(
    get,
    path = "/s/{id}",
    tag = RECIPE_TAG,
    params(("id" = i32, Path, description = "Recipe ID")),
    responses(
        (status = 307, description = "Redirect to the recipe page"),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn follow_short_link(
    State(state): State<AppState>,
    Path(recipe_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    RecipeService::new(&state.db).get(None, recipe_id).await?;

    Ok(Redirect::temporary(&format!("/recipes/{}", recipe_id)))
}
