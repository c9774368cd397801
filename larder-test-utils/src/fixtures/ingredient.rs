//! Catalog ingredient fixture utilities.

use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{model::IngredientModel, TestContext, TestError};

impl TestContext {
    pub fn ingredient<'a>(&'a mut self) -> IngredientFixtures<'a> {
        IngredientFixtures { test: self }
    }
}

pub struct IngredientFixtures<'a> {
    pub test: &'a mut TestContext,
}

impl<'a> IngredientFixtures<'a> {
    /// Insert a catalog ingredient as provided, without normalizing its name.
    pub async fn insert_ingredient(
        &self,
        name: &str,
        measurement_unit: &str,
    ) -> Result<IngredientModel, TestError> {
        let ingredient = entity::ingredient::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            measurement_unit: ActiveValue::Set(measurement_unit.to_string()),
            ..Default::default()
        };

        Ok(ingredient.insert(&self.test.db).await?)
    }
}
