use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use larder::{
    model::user::{NewUserDto, UserDto},
    server::{
        controller::user::{create_user, get_current_user, get_user},
        model::session::user::SessionUserId,
    },
};

use super::*;

#[tokio::test]
async fn create_returns_created() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recipe_tables().build().await?;

    let result = create_user(
        State(test.into_app_state()),
        Json(NewUserDto {
            email: "anna@example.com".to_string(),
            username: "anna".to_string(),
            first_name: "Anna".to_string(),
            last_name: "Smith".to_string(),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Expect 409 when the username is taken
#[tokio::test]
async fn create_returns_conflict_for_taken_username() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_recipe_tables()
        .with_user("anna")
        .build()
        .await?;

    let result = create_user(
        State(test.into_app_state()),
        Json(NewUserDto {
            email: "other@example.com".to_string(),
            username: "anna".to_string(),
            first_name: "Anna".to_string(),
            last_name: "Smith".to_string(),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

#[tokio::test]
async fn get_current_user_returns_session_user() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_recipe_tables().build().await?;
    let alice = test.user().insert_user("alice").await?;
    SessionUserId::insert(&test.session, alice.id).await.unwrap();

    let result = get_current_user(State(test.into_app_state()), test.session.clone()).await;

    assert!(result.is_ok());
    let user: UserDto = body_json(result.unwrap().into_response()).await;
    assert_eq!(user.id, alice.id);

    Ok(())
}

/// Expect is_subscribed to reflect the logged in viewer
#[tokio::test]
async fn get_user_reports_subscription() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_recipe_tables().build().await?;
    let alice = test.user().insert_user("alice").await?;
    let bob = test.user().insert_user("bob").await?;
    test.subscription().insert_subscription(alice.id, bob.id).await?;
    SessionUserId::insert(&test.session, alice.id).await.unwrap();

    let result = get_user(
        State(test.into_app_state()),
        test.session.clone(),
        Path(bob.id),
    )
    .await;

    assert!(result.is_ok());
    let user: UserDto = body_json(result.unwrap().into_response()).await;
    assert!(user.is_subscribed);

    Ok(())
}

#[tokio::test]
async fn get_user_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recipe_tables().build().await?;

    let result = get_user(State(test.into_app_state()), test.session.clone(), Path(1)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
