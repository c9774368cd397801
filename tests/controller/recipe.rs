use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use larder::{
    model::{
        api::{ErrorDto, PageDto, PageParams},
        recipe::{
            IngredientLineDto, NewRecipeDto, RecipeDto, RecipeFilterParams, RecipeIngredientDto,
            RecipeLinkDto, UpdateRecipeDto,
        },
    },
    server::{
        controller::recipe::{
            create_recipe, delete_recipe, follow_short_link, get_recipe, get_recipe_ingredients,
            get_recipe_link, list_recipes, set_recipe_ingredients, update_recipe,
        },
        model::session::user::SessionUserId,
    },
};

use super::*;

fn new_recipe(ingredient_id: i32) -> NewRecipeDto {
    NewRecipeDto {
        name: "Pancakes".to_string(),
        text: "Whisk and fry".to_string(),
        image: None,
        cooking_time: 20,
        ingredients: vec![IngredientLineDto {
            id: ingredient_id,
            amount: 250,
        }],
    }
}

#[tokio::test]
async fn create_returns_created() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_recipe_tables().build().await?;
    let alice = test.user().insert_user("alice").await?;
    let flour = test.ingredient().insert_ingredient("flour", "g").await?;
    SessionUserId::insert(&test.session, alice.id).await.unwrap();

    let result = create_recipe(
        State(test.into_app_state()),
        test.session.clone(),
        Json(new_recipe(flour.id)),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let recipe: RecipeDto = body_json(resp).await;
    assert_eq!(recipe.author.id, alice.id);
    assert_eq!(recipe.ingredients.len(), 1);

    Ok(())
}

#[tokio::test]
async fn create_requires_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recipe_tables().build().await?;

    let result = create_recipe(
        State(test.into_app_state()),
        test.session.clone(),
        Json(new_recipe(1)),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 404 and a cleared session when the session user no longer exists
#[tokio::test]
async fn create_clears_stale_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recipe_tables().build().await?;
    SessionUserId::insert(&test.session, 42).await.unwrap();

    let result = create_recipe(
        State(test.into_app_state()),
        test.session.clone(),
        Json(new_recipe(1)),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(SessionUserId::get(&test.session).await.unwrap(), None);

    Ok(())
}

/// Expect anonymous listing to work with relation filters ignored
#[tokio::test]
async fn list_allows_anonymous() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_recipe_tables().build().await?;
    let alice = test.user().insert_user("alice").await?;
    test.recipe().insert_recipe(alice.id, "Soup").await?;
    test.recipe().insert_recipe(alice.id, "Stew").await?;

    let result = list_recipes(
        State(test.into_app_state()),
        test.session.clone(),
        Query(RecipeFilterParams {
            is_in_shopping_cart: Some(true),
            ..Default::default()
        }),
        Query(PageParams::default()),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let page: PageDto<RecipeDto> = body_json(resp).await;
    assert_eq!(page.count, 2);

    Ok(())
}

/// Expect the favorited flag to be computed for the logged in viewer
#[tokio::test]
async fn get_reports_viewer_flags() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_recipe_tables().build().await?;
    let alice = test.user().insert_user("alice").await?;
    let bob = test.user().insert_user("bob").await?;
    let soup = test.recipe().insert_recipe(alice.id, "Soup").await?;
    test.relation().insert_favorite(bob.id, soup.id).await?;
    SessionUserId::insert(&test.session, bob.id).await.unwrap();

    let result = get_recipe(
        State(test.into_app_state()),
        test.session.clone(),
        Path(soup.id),
    )
    .await;

    assert!(result.is_ok());
    let recipe: RecipeDto = body_json(result.unwrap().into_response()).await;
    assert!(recipe.is_favorited);
    assert!(!recipe.is_in_shopping_cart);

    Ok(())
}

/// Expect 403 when another user updates the recipe
#[tokio::test]
async fn update_returns_forbidden_for_other_user() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_recipe_tables().build().await?;
    let alice = test.user().insert_user("alice").await?;
    let bob = test.user().insert_user("bob").await?;
    let soup = test.recipe().insert_recipe(alice.id, "Soup").await?;
    SessionUserId::insert(&test.session, bob.id).await.unwrap();

    let result = update_recipe(
        State(test.into_app_state()),
        test.session.clone(),
        Path(soup.id),
        Json(UpdateRecipeDto {
            cooking_time: Some(5),
            ..Default::default()
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

#[tokio::test]
async fn delete_returns_no_content() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_recipe_tables().build().await?;
    let alice = test.user().insert_user("alice").await?;
    let soup = test.recipe().insert_recipe(alice.id, "Soup").await?;
    SessionUserId::insert(&test.session, alice.id).await.unwrap();

    let result = delete_recipe(
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

/// Expect 400 with the duplicate code and the prior lines kept
#[tokio::test]
async fn set_ingredients_rejects_duplicate() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_recipe_tables().build().await?;
    let alice = test.user().insert_user("alice").await?;
    let flour = test.ingredient().insert_ingredient("flour", "g").await?;
    let soup = test
        .recipe()
        .insert_recipe_with_ingredients(alice.id, "Soup", &[(flour.id, 100)])
        .await?;
    SessionUserId::insert(&test.session, alice.id).await.unwrap();

    let line = IngredientLineDto {
        id: flour.id,
        amount: 1,
    };
    let result = set_recipe_ingredients(
        State(test.into_app_state()),
        test.session.clone(),
        Path(soup.id),
        Json(vec![line, line]),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: ErrorDto = body_json(resp).await;
    assert_eq!(error.code, "duplicate_ingredient");

    let result = get_recipe_ingredients(State(test.into_app_state()), Path(soup.id)).await;
    let report: Vec<RecipeIngredientDto> = body_json(result.unwrap().into_response()).await;
    assert_eq!(report.len(), 1);
    assert_eq!(report[0].amount, 100);

    Ok(())
}

#[tokio::test]
async fn get_link_uses_public_url() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_recipe_tables().build().await?;
    let alice = test.user().insert_user("alice").await?;
    let soup = test.recipe().insert_recipe(alice.id, "Soup").await?;

    let result = get_recipe_link(State(test.into_app_state()), Path(soup.id)).await;

    assert!(result.is_ok());
    let link: RecipeLinkDto = body_json(result.unwrap().into_response()).await;
    assert_eq!(link.short_link, format!("{}/s/{}", TEST_PUBLIC_URL, soup.id));

    Ok(())
}

#[tokio::test]
async fn short_link_redirects_to_recipe() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_recipe_tables().build().await?;
    let alice = test.user().insert_user("alice").await?;
    let soup = test.recipe().insert_recipe(alice.id, "Soup").await?;

    let result = follow_short_link(State(test.into_app_state()), Path(soup.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap(),
        &format!("/recipes/{}", soup.id)
    );

    Ok(())
}

#[tokio::test]
async fn short_link_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recipe_tables().build().await?;

    let result = follow_short_link(State(test.into_app_state()), Path(1)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
