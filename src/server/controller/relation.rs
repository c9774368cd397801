//! Favorites and shopping cart endpoints.
//!
//! Both share [`RelationService`], differing only in the [`RelationKind`] they act on.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::user_recipe_relation::RelationKind;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, PageDto, PageParams},
        recipe::ShortRecipeDto,
    },
    server::{
        controller::util::get_user::get_user_from_session, error::Error, model::app::AppState,
        service::relation::RelationService,
    },
};

pub static RELATION_TAG: &str = "relation";

#[utoipa::path(
    post,
    path = "/api/recipes/{id}/favorite",
    tag = RELATION_TAG,
    params(("id" = i32, Path, description = "Recipe ID")),
    responses(
        (status = 201, description = "Recipe added to favorites", body = ShortRecipeDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 409, description = "Recipe already in favorites", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite(
    state: State<AppState>,
    session: Session,
    path: Path<i32>,
) -> Result<impl IntoResponse, Error> {
    add(RelationKind::Favorite, state, session, path).await
}

#[utoipa::path(
    delete,
    path = "/api/recipes/{id}/favorite",
    tag = RELATION_TAG,
    params(("id" = i32, Path, description = "Recipe ID")),
    responses(
        (status = 204, description = "Recipe removed from favorites"),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Recipe not found or not in favorites", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite(
    state: State<AppState>,
    session: Session,
    path: Path<i32>,
) -> Result<impl IntoResponse, Error> {
    remove(RelationKind::Favorite, state, session, path).await
}

#[utoipa::path(
    post,
    path = "/api/recipes/{id}/shopping_cart",
    tag = RELATION_TAG,
    params(("id" = i32, Path, description = "Recipe ID")),
    responses(
        (status = 201, description = "Recipe added to the shopping cart", body = ShortRecipeDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 409, description = "Recipe already in the shopping cart", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_to_shopping_cart(
    state: State<AppState>,
    session: Session,
    path: Path<i32>,
) -> Result<impl IntoResponse, Error> {
    add(RelationKind::ShoppingCart, state, session, path).await
}

#[utoipa::path(
    delete,
    path = "/api/recipes/{id}/shopping_cart",
    tag = RELATION_TAG,
    params(("id" = i32, Path, description = "Recipe ID")),
    responses(
        (status = 204, description = "Recipe removed from the shopping cart"),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Recipe not found or not in the shopping cart", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_from_shopping_cart(
    state: State<AppState>,
    session: Session,
    path: Path<i32>,
) -> Result<impl IntoResponse, Error> {
    remove(RelationKind::ShoppingCart, state, session, path).await
}

/// List the current user's favorite recipes, most recently added first
#[utoipa::path(
    get,
    path = "/api/users/me/favorites",
    tag = RELATION_TAG,
    params(PageParams),
    responses(
        (status = 200, description = "A page of favorite recipes", body = PageDto<ShortRecipeDto>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_favorites(
    state: State<AppState>,
    session: Session,
    page: Query<PageParams>,
) -> Result<impl IntoResponse, Error> {
    list(RelationKind::Favorite, state, session, page).await
}

/// List the recipes in the current user's shopping cart, most recently added first
#[utoipa::path(
    get,
    path = "/api/users/me/shopping_cart",
    tag = RELATION_TAG,
    params(PageParams),
    responses(
        (status = 200, description = "A page of recipes in the shopping cart", body = PageDto<ShortRecipeDto>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_shopping_cart(
    state: State<AppState>,
    session: Session,
    page: Query<PageParams>,
) -> Result<impl IntoResponse, Error> {
    list(RelationKind::ShoppingCart, state, session, page).await
}

async fn add(
    kind: RelationKind,
    State(state): State<AppState>,
    session: Session,
    Path(recipe_id): Path<i32>,
) -> Result<(StatusCode, Json<ShortRecipeDto>), Error> {
    let user = get_user_from_session(&state, &session).await?;

    let recipe = RelationService::new(&state.db)
        .add(kind, user.id, recipe_id)
        .await?;

    Ok((StatusCode::CREATED, Json(recipe)))
}

async fn remove(
    kind: RelationKind,
    State(state): State<AppState>,
    session: Session,
    Path(recipe_id): Path<i32>,
) -> Result<StatusCode, Error> {
    let user = get_user_from_session(&state, &session).await?;

    RelationService::new(&state.db)
        .remove(kind, user.id, recipe_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

async fn list(
    kind: RelationKind,
    State(state): State<AppState>,
    session: Session,
    Query(page): Query<PageParams>,
) -> Result<(StatusCode, Json<PageDto<ShortRecipeDto>>), Error> {
    let user = get_user_from_session(&state, &session).await?;

    let recipes = RelationService::new(&state.db)
        .list_for_user(kind, user.id, page)
        .await?;

    Ok((StatusCode::OK, Json(recipes)))
}
