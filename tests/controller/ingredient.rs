use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use larder::{
    model::{
        api::ErrorDto,
        ingredient::{IngredientDto, IngredientSearchParams, NewIngredientDto},
    },
    server::{
        controller::ingredient::{
            get_ingredient, register_ingredient, remove_ingredient, search_ingredients,
        },
        model::session::user::SessionUserId,
    },
};

use super::*;

/// Expect 201 with the normalized name for a logged in user
#[tokio::test]
async fn register_returns_created() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_recipe_tables().build().await?;
    let alice = test.user().insert_user("alice").await?;
    SessionUserId::insert(&test.session, alice.id).await.unwrap();

    let result = register_ingredient(
        State(test.into_app_state()),
        test.session.clone(),
        Json(NewIngredientDto {
            name: "  Salt ".to_string(),
            measurement_unit: "g".to_string(),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let ingredient: IngredientDto = body_json(resp).await;
    assert_eq!(ingredient.name, "salt");

    Ok(())
}

/// Expect 401 without a user in session
#[tokio::test]
async fn register_requires_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recipe_tables().build().await?;

    let result = register_ingredient(
        State(test.into_app_state()),
        test.session.clone(),
        Json(NewIngredientDto {
            name: "salt".to_string(),
            measurement_unit: "g".to_string(),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 400 with the duplicate_ingredient code for a taken name
#[tokio::test]
async fn register_rejects_duplicate() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_recipe_tables()
        .with_ingredient("salt", "g")
        .build()
        .await?;
    let alice = test.user().insert_user("alice").await?;
    SessionUserId::insert(&test.session, alice.id).await.unwrap();

    let result = register_ingredient(
        State(test.into_app_state()),
        test.session.clone(),
        Json(NewIngredientDto {
            name: "SALT".to_string(),
            measurement_unit: "kg".to_string(),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: ErrorDto = body_json(resp).await;
    assert_eq!(error.code, "duplicate_ingredient");

    Ok(())
}

#[tokio::test]
async fn search_filters_by_prefix() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_recipe_tables()
        .with_ingredient("salt", "g")
        .with_ingredient("sugar", "g")
        .with_ingredient("egg", "pcs")
        .build()
        .await?;

    let result = search_ingredients(
        State(test.into_app_state()),
        Query(IngredientSearchParams {
            name: Some("S".to_string()),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let ingredients: Vec<IngredientDto> = body_json(resp).await;
    let names: Vec<&str> = ingredients.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["salt", "sugar"]);

    Ok(())
}

#[tokio::test]
async fn get_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recipe_tables().build().await?;

    let result = get_ingredient(State(test.into_app_state()), Path(1)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 409 while a recipe uses the ingredient
#[tokio::test]
async fn remove_returns_conflict_when_in_use() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_recipe_tables().build().await?;
    let alice = test.user().insert_user("alice").await?;
    let salt = test.ingredient().insert_ingredient("salt", "g").await?;
    test.recipe()
        .insert_recipe_with_ingredients(alice.id, "Soup", &[(salt.id, 5)])
        .await?;
    SessionUserId::insert(&test.session, alice.id).await.unwrap();

    let result = remove_ingredient(
        State(test.into_app_state()),
        test.session.clone(),
        Path(salt.id),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect 500 when required database tables don't exist
#[tokio::test]
async fn search_fails_without_tables() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = search_ingredients(
        State(test.into_app_state()),
        Query(IngredientSearchParams::default()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let error: ErrorDto = body_json(resp).await;
    assert_eq!(error.code, "transaction_aborted");

    Ok(())
}
