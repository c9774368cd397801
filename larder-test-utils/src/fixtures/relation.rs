//! Favorite and shopping cart fixture utilities.

use chrono::Utc;
use entity::user_recipe_relation::RelationKind;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{TestContext, TestError};

impl TestContext {
    pub fn relation<'a>(&'a mut self) -> RelationFixtures<'a> {
        RelationFixtures { test: self }
    }
}

pub struct RelationFixtures<'a> {
    pub test: &'a mut TestContext,
}

impl<'a> RelationFixtures<'a> {
    /// Insert a relation of the provided kind between a user and a recipe.
    pub async fn insert_relation(
        &self,
        kind: RelationKind,
        user_id: i32,
        recipe_id: i32,
    ) -> Result<(), TestError> {
        let relation = entity::user_recipe_relation::ActiveModel {
            kind: ActiveValue::Set(kind.as_str().to_string()),
            user_id: ActiveValue::Set(user_id),
            recipe_id: ActiveValue::Set(recipe_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        entity::prelude::UserRecipeRelation::insert(relation)
            .exec_without_returning(&self.test.db)
            .await?;

        Ok(())
    }

    /// Put a recipe into the user's shopping cart.
    pub async fn insert_cart_entry(&self, user_id: i32, recipe_id: i32) -> Result<(), TestError> {
        self.insert_relation(RelationKind::ShoppingCart, user_id, recipe_id)
            .await
    }

    /// Mark a recipe as one of the user's favorites.
    pub async fn insert_favorite(&self, user_id: i32, recipe_id: i32) -> Result<(), TestError> {
        self.insert_relation(RelationKind::Favorite, user_id, recipe_id)
            .await
    }
}
