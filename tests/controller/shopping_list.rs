use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
};
use larder::{
    model::shopping::ShoppingListItemDto,
    server::{
        controller::shopping_list::{download_shopping_list, get_shopping_list},
        model::session::user::SessionUserId,
    },
};

use super::*;

#[tokio::test]
async fn get_returns_summed_items() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_recipe_tables().build().await?;
    let alice = test.user().insert_user("alice").await?;
    let salt = test.ingredient().insert_ingredient("salt", "g").await?;
    let soup = test
        .recipe()
        .insert_recipe_with_ingredients(alice.id, "Soup", &[(salt.id, 5)])
        .await?;
    let stew = test
        .recipe()
        .insert_recipe_with_ingredients(alice.id, "Stew", &[(salt.id, 7)])
        .await?;
    test.relation().insert_cart_entry(alice.id, soup.id).await?;
    test.relation().insert_cart_entry(alice.id, stew.id).await?;
    SessionUserId::insert(&test.session, alice.id).await.unwrap();

    let result = get_shopping_list(State(test.into_app_state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let items: Vec<ShoppingListItemDto> = body_json(resp).await;
    assert_eq!(
        items,
        vec![ShoppingListItemDto {
            name: "salt".to_string(),
            measurement_unit: "g".to_string(),
            total_amount: 12,
        }]
    );

    Ok(())
}

/// Expect a text attachment with the header line and one line per ingredient
#[tokio::test]
async fn download_returns_text_attachment() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_recipe_tables().build().await?;
    let alice = test.user().insert_user("alice").await?;
    let flour = test.ingredient().insert_ingredient("flour", "g").await?;
    let egg = test.ingredient().insert_ingredient("egg", "pcs").await?;
    let cake = test
        .recipe()
        .insert_recipe_with_ingredients(alice.id, "Cake", &[(flour.id, 200), (egg.id, 3)])
        .await?;
    test.relation().insert_cart_entry(alice.id, cake.id).await?;
    SessionUserId::insert(&test.session, alice.id).await.unwrap();

    let result = download_shopping_list(State(test.into_app_state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_DISPOSITION).unwrap(),
        "attachment; filename=\"shopping_list.txt\""
    );
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/plain; charset=utf-8"
    );

    let body = String::from_utf8(body_bytes(resp).await).unwrap();
    assert_eq!(body, "Список покупок:\n\negg - 3 pcs\nflour - 200 g\n");

    Ok(())
}

#[tokio::test]
async fn download_requires_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recipe_tables().build().await?;

    let result = download_shopping_list(State(test.into_app_state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
