use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use larder::{
    model::{
        api::{ErrorDto, PageDto, PageParams},
        user::{RecipesLimitParams, SubscriptionDto},
    },
    server::{
        controller::subscription::{list_subscriptions, subscribe, unsubscribe},
        model::session::user::SessionUserId,
    },
};

use super::*;

#[tokio::test]
async fn subscribe_returns_created() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_recipe_tables().build().await?;
    let alice = test.user().insert_user("alice").await?;
    let bob = test.user().insert_user("bob").await?;
    test.recipe().insert_recipe(bob.id, "Soup").await?;
    test.recipe().insert_recipe(bob.id, "Stew").await?;
    SessionUserId::insert(&test.session, alice.id).await.unwrap();

    let result = subscribe(
        State(test.into_app_state()),
        test.session.clone(),
        Path(bob.id),
        Query(RecipesLimitParams {
            recipes_limit: Some(1),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let subscription: SubscriptionDto = body_json(resp).await;
    assert!(subscription.author.is_subscribed);
    assert_eq!(subscription.recipes_count, 2);
    assert_eq!(subscription.recipes.len(), 1);

    Ok(())
}

/// Expect 400 with the self_subscription code
#[tokio::test]
async fn subscribe_to_self_returns_bad_request() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_recipe_tables().build().await?;
    let alice = test.user().insert_user("alice").await?;
    SessionUserId::insert(&test.session, alice.id).await.unwrap();

    let result = subscribe(
        State(test.into_app_state()),
        test.session.clone(),
        Path(alice.id),
        Query(RecipesLimitParams::default()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: ErrorDto = body_json(resp).await;
    assert_eq!(error.code, "self_subscription");

    Ok(())
}

#[tokio::test]
async fn unsubscribe_returns_no_content() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_recipe_tables().build().await?;
    let alice = test.user().insert_user("alice").await?;
    let bob = test.user().insert_user("bob").await?;
    test.subscription().insert_subscription(alice.id, bob.id).await?;
    SessionUserId::insert(&test.session, alice.id).await.unwrap();

    let result = unsubscribe(
        State(test.into_app_state()),
        test.session.clone(),
        Path(bob.id),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    Ok(())
}

#[tokio::test]
async fn list_returns_followed_authors() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_recipe_tables().build().await?;
    let alice = test.user().insert_user("alice").await?;
    let bob = test.user().insert_user("bob").await?;
    test.subscription().insert_subscription(alice.id, bob.id).await?;
    SessionUserId::insert(&test.session, alice.id).await.unwrap();

    let result = list_subscriptions(
        State(test.into_app_state()),
        test.session.clone(),
        Query(RecipesLimitParams::default()),
        Query(PageParams::default()),
    )
    .await;

    assert!(result.is_ok());
    let page: PageDto<SubscriptionDto> = body_json(result.unwrap().into_response()).await;
    assert_eq!(page.count, 1);
    assert_eq!(page.results[0].author.id, bob.id);

    Ok(())
}
