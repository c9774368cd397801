use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use larder::{
    model::{
        api::{ErrorDto, PageDto, PageParams},
        recipe::ShortRecipeDto,
    },
    server::{
        controller::relation::{
            add_favorite, add_to_shopping_cart, list_shopping_cart, remove_favorite,
            remove_from_shopping_cart,
        },
        model::session::user::SessionUserId,
    },
};

use super::*;

#[tokio::test]
async fn add_favorite_returns_created() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_recipe_tables().build().await?;
    let alice = test.user().insert_user("alice").await?;
    let soup = test.recipe().insert_recipe(alice.id, "Soup").await?;
    SessionUserId::insert(&test.session, alice.id).await.unwrap();

    let result = add_favorite(
        State(test.into_app_state()),
        test.session.clone(),
        Path(soup.id),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let recipe: ShortRecipeDto = body_json(resp).await;
    assert_eq!(recipe.id, soup.id);

    Ok(())
}

/// Expect 409 with the already_exists code on a repeated add
#[tokio::test]
async fn add_to_cart_twice_returns_conflict() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_recipe_tables().build().await?;
    let alice = test.user().insert_user("alice").await?;
    let soup = test.recipe().insert_recipe(alice.id, "Soup").await?;
    test.relation().insert_cart_entry(alice.id, soup.id).await?;
    SessionUserId::insert(&test.session, alice.id).await.unwrap();

    let result = add_to_shopping_cart(
        State(test.into_app_state()),
        test.session.clone(),
        Path(soup.id),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let error: ErrorDto = body_json(resp).await;
    assert_eq!(error.code, "already_exists");

    Ok(())
}

#[tokio::test]
async fn remove_from_cart_returns_no_content() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_recipe_tables().build().await?;
    let alice = test.user().insert_user("alice").await?;
    let soup = test.recipe().insert_recipe(alice.id, "Soup").await?;
    test.relation().insert_cart_entry(alice.id, soup.id).await?;
    SessionUserId::insert(&test.session, alice.id).await.unwrap();

    let result = remove_from_shopping_cart(
        State(test.into_app_state()),
        test.session.clone(),
        Path(soup.id),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    Ok(())
}

/// Expect 404 when removing a favorite that was never added
#[tokio::test]
async fn remove_absent_favorite_returns_not_found() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_recipe_tables().build().await?;
    let alice = test.user().insert_user("alice").await?;
    let soup = test.recipe().insert_recipe(alice.id, "Soup").await?;
    SessionUserId::insert(&test.session, alice.id).await.unwrap();

    let result = remove_favorite(
        State(test.into_app_state()),
        test.session.clone(),
        Path(soup.id),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn list_cart_returns_user_recipes() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_recipe_tables().build().await?;
    let alice = test.user().insert_user("alice").await?;
    let soup = test.recipe().insert_recipe(alice.id, "Soup").await?;
    test.recipe().insert_recipe(alice.id, "Stew").await?;
    test.relation().insert_cart_entry(alice.id, soup.id).await?;
    SessionUserId::insert(&test.session, alice.id).await.unwrap();

    let result = list_shopping_cart(
        State(test.into_app_state()),
        test.session.clone(),
        Query(PageParams::default()),
    )
    .await;

    assert!(result.is_ok());
    let page: PageDto<ShortRecipeDto> = body_json(result.unwrap().into_response()).await;
    assert_eq!(page.count, 1);
    assert_eq!(page.results[0].id, soup.id);

    Ok(())
}
