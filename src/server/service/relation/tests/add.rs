use super::*;

#[tokio::test]
async fn adds_recipe_to_cart() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_recipe_tables().build().await?;
    let alice = test.user().insert_user("alice").await?;
    let cake = test.recipe().insert_recipe(alice.id, "Cake").await?;

    let relation_service = RelationService::new(&test.db);
    let result = relation_service
        .add(RelationKind::ShoppingCart, alice.id, cake.id)
        .await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap(), ShortRecipeDto::from(cake));

    Ok(())
}

/// Expect AlreadyExists on the second identical add
#[tokio::test]
async fn fails_when_added_twice() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_recipe_tables().build().await?;
    let alice = test.user().insert_user("alice").await?;
    let cake = test.recipe().insert_recipe(alice.id, "Cake").await?;

    let relation_service = RelationService::new(&test.db);
    relation_service
        .add(RelationKind::Favorite, alice.id, cake.id)
        .await?;
    let result = relation_service
        .add(RelationKind::Favorite, alice.id, cake.id)
        .await;

    assert!(matches!(
        result,
        Err(Error::DomainError(DomainError::AlreadyExists(_)))
    ));

    Ok(())
}

/// Expect exactly one of two concurrent identical adds to succeed
#[tokio::test]
async fn concurrent_adds_succeed_once() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_recipe_tables().build().await?;
    let alice = test.user().insert_user("alice").await?;
    let cake = test.recipe().insert_recipe(alice.id, "Cake").await?;

    let relation_service = RelationService::new(&test.db);
    let (first, second) = tokio::join!(
        relation_service.add(RelationKind::ShoppingCart, alice.id, cake.id),
        relation_service.add(RelationKind::ShoppingCart, alice.id, cake.id),
    );

    let results = [first, second];
    let succeeded = results.iter().filter(|result| result.is_ok()).count();
    let duplicates = results
        .iter()
        .filter(|result| {
            matches!(
                result,
                Err(Error::DomainError(DomainError::AlreadyExists(_)))
            )
        })
        .count();

    assert_eq!(succeeded, 1);
    assert_eq!(duplicates, 1);

    Ok(())
}

/// Expect a recipe in favorites to still be addable to the cart
#[tokio::test]
async fn kinds_are_independent() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_recipe_tables().build().await?;
    let alice = test.user().insert_user("alice").await?;
    let cake = test.recipe().insert_recipe(alice.id, "Cake").await?;
    test.relation().insert_favorite(alice.id, cake.id).await?;

    let relation_service = RelationService::new(&test.db);
    let result = relation_service
        .add(RelationKind::ShoppingCart, alice.id, cake.id)
        .await;

    assert!(result.is_ok());

    Ok(())
}

#[tokio::test]
async fn fails_for_nonexistent_recipe() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_recipe_tables().build().await?;
    let alice = test.user().insert_user("alice").await?;

    let relation_service = RelationService::new(&test.db);
    let result = relation_service
        .add(RelationKind::Favorite, alice.id, 1)
        .await;

    assert!(matches!(
        result,
        Err(Error::DomainError(DomainError::NotFound(_)))
    ));

    Ok(())
}

/// Expect NotFound when the recipe is deleted between its lookup and the insert
#[tokio::test]
async fn maps_deleted_recipe_to_not_found() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_recipe_tables().build().await?;
    let alice = test.user().insert_user("alice").await?;
    let cake = test.recipe().insert_recipe(alice.id, "Cake").await?;
    RecipeRepository::new(&test.db).delete(cake.id).await?;

    let insert = RelationRepository::new(&test.db)
        .create(RelationKind::Favorite, alice.id, cake.id)
        .await;

    assert!(insert.is_err());
    let result = relation_insert_error(insert.unwrap_err(), RelationKind::Favorite, cake.id);
    assert!(matches!(
        result,
        Error::DomainError(DomainError::NotFound(_))
    ));

    Ok(())
}
