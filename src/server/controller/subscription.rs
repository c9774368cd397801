use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, PageDto, PageParams},
        user::{RecipesLimitParams, SubscriptionDto},
    },
    server::{
        controller::util::get_user::get_user_from_session, error::Error, model::app::AppState,
        service::subscription::SubscriptionService,
    },
};

pub static SUBSCRIPTION_TAG: &str = "subscription";

/// Subscribe to an author's recipes
#[utoipa::path(
    post,
    path = "/api/users/{id}/subscribe",
    tag = SUBSCRIPTION_TAG,
    params(("id" = i32, Path, description = "Author's user ID"), RecipesLimitParams),
    responses(
        (status = 201, description = "Subscribed to the author", body = SubscriptionDto),
        (status = 400, description = "Cannot subscribe to yourself", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Author not found", body = ErrorDto),
        (status = 409, description = "Already subscribed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn subscribe(
    State(state): State<AppState>,
    session: Session,
    Path(author_id): Path<i32>,
    Query(limit): Query<RecipesLimitParams>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let subscription = SubscriptionService::new(&state.db)
        .subscribe(user.id, author_id, limit.recipes_limit)
        .await?;

    Ok((StatusCode::CREATED, Json(subscription)))
}

#[utoipa::path(
    delete,
    path = "/api/users/{id}/subscribe",
    tag = SUBSCRIPTION_TAG,
    params(("id" = i32, Path, description = "Author's user ID")),
    responses(
        (status = 204, description = "Unsubscribed from the author"),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Author not found or not subscribed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unsubscribe(
    State(state): State<AppState>,
    session: Session,
    Path(author_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    SubscriptionService::new(&state.db)
        .unsubscribe(user.id, author_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List the authors the current user follows, most recent subscription first
#[utoipa::path(
    get,
    path = "/api/users/subscriptions",
    tag = SUBSCRIPTION_TAG,
    params(RecipesLimitParams, PageParams),
    responses(
        (status = 200, description = "A page of followed authors", body = PageDto<SubscriptionDto>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_subscriptions(
    State(state): State<AppState>,
    session: Session,
    Query(limit): Query<RecipesLimitParams>,
    Query(page): Query<PageParams>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let subscriptions = SubscriptionService::new(&state.db)
        .list_subscriptions(user.id, limit, page)
        .await?;

    Ok((StatusCode::OK, Json(subscriptions)))
}
