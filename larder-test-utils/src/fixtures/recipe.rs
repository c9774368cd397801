//! Recipe fixture utilities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait};

use crate::{model::RecipeModel, TestContext, TestError};

impl TestContext {
    pub fn recipe<'a>(&'a mut self) -> RecipeFixtures<'a> {
        RecipeFixtures { test: self }
    }
}

pub struct RecipeFixtures<'a> {
    pub test: &'a mut TestContext,
}

impl<'a> RecipeFixtures<'a> {
    /// Insert a recipe with a cooking time of 30 minutes and no ingredient lines.
    pub async fn insert_recipe(
        &self,
        author_id: i32,
        name: &str,
    ) -> Result<RecipeModel, TestError> {
        let recipe = entity::recipe::ActiveModel {
            author_id: ActiveValue::Set(author_id),
            name: ActiveValue::Set(name.to_string()),
            text: ActiveValue::Set(format!("How to cook {}", name)),
            image: ActiveValue::Set(None),
            cooking_time: ActiveValue::Set(30),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(recipe.insert(&self.test.db).await?)
    }

    /// Insert a recipe along with its ingredient lines.
    ///
    /// # Arguments
    /// - `author_id` - ID of the user publishing the recipe
    /// - `name` - Recipe name
    /// - `lines` - `(ingredient_id, amount)` pairs, inserted without validation
    pub async fn insert_recipe_with_ingredients(
        &self,
        author_id: i32,
        name: &str,
        lines: &[(i32, i32)],
    ) -> Result<RecipeModel, TestError> {
        let recipe = self.insert_recipe(author_id, name).await?;

        if !lines.is_empty() {
            let models = lines.iter().map(|(ingredient_id, amount)| {
                entity::recipe_ingredient::ActiveModel {
                    recipe_id: ActiveValue::Set(recipe.id),
                    ingredient_id: ActiveValue::Set(*ingredient_id),
                    amount: ActiveValue::Set(*amount),
                }
            });

            entity::prelude::RecipeIngredient::insert_many(models)
                .exec_without_returning(&self.test.db)
                .await?;
        }

        Ok(recipe)
    }
}
