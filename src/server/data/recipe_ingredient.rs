use std::collections::HashMap;

use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, FromQueryResult, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::model::recipe::IngredientLineDto;

/// An ingredient line of a recipe joined with its catalog entry
#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult)]
pub struct IngredientReportRow {
    pub recipe_id: i32,
    pub ingredient_id: i32,
    pub name: String,
    pub measurement_unit: String,
    pub amount: i32,
}

pub struct RecipeIngredientRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RecipeIngredientRepository<'a, C> {
    /// Creates a new instance of [`RecipeIngredientRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Replaces every ingredient line of a recipe with the provided lines
    ///
    /// Deletes all prior lines then inserts the new set. Neither statement is atomic with the
    /// other on its own: pass a transaction as the connection so a failed insert leaves the
    /// prior lines in place.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of prior lines removed
    pub async fn replace_for_recipe(
        &self,
        recipe_id: i32,
        lines: &[IngredientLineDto],
    ) -> Result<u64, DbErr> {
        let removed = entity::prelude::RecipeIngredient::delete_many()
            .filter(entity::recipe_ingredient::Column::RecipeId.eq(recipe_id))
            .exec(self.db)
            .await?
            .rows_affected;

        if lines.is_empty() {
            return Ok(removed);
        }

        let models = lines
            .iter()
            .map(|line| entity::recipe_ingredient::ActiveModel {
                recipe_id: ActiveValue::Set(recipe_id),
                ingredient_id: ActiveValue::Set(line.id),
                amount: ActiveValue::Set(line.amount),
            });

        entity::prelude::RecipeIngredient::insert_many(models)
            .exec_without_returning(self.db)
            .await?;

        Ok(removed)
    }

    /// Ingredient lines of a recipe joined with the catalog, ordered by ingredient name
    pub async fn get_report(&self, recipe_id: i32) -> Result<Vec<IngredientReportRow>, DbErr> {
        self.get_reports(&[recipe_id]).await
    }

    /// Ingredient reports of several recipes at once, keyed by recipe ID
    ///
    /// Recipes without lines have no entry in the map.
    pub async fn get_reports_for_recipes(
        &self,
        recipe_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<IngredientReportRow>>, DbErr> {
        let mut reports: HashMap<i32, Vec<IngredientReportRow>> = HashMap::new();

        for row in self.get_reports(recipe_ids).await? {
            reports.entry(row.recipe_id).or_default().push(row);
        }

        Ok(reports)
    }

    async fn get_reports(&self, recipe_ids: &[i32]) -> Result<Vec<IngredientReportRow>, DbErr> {
        if recipe_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::RecipeIngredient::find()
            .select_only()
            .column(entity::recipe_ingredient::Column::RecipeId)
            .column(entity::recipe_ingredient::Column::IngredientId)
            .column(entity::ingredient::Column::Name)
            .column(entity::ingredient::Column::MeasurementUnit)
            .column(entity::recipe_ingredient::Column::Amount)
            .inner_join(entity::ingredient::Entity)
            .filter(entity::recipe_ingredient::Column::RecipeId.is_in(recipe_ids.iter().copied()))
            .order_by_asc(entity::recipe_ingredient::Column::RecipeId)
            .order_by_asc(entity::ingredient::Column::Name)
            .into_model::<IngredientReportRow>()
            .all(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    mod replace_for_recipe {
        use larder_test_utils::prelude::*;

        use crate::{
            model::recipe::IngredientLineDto,
            server::{
                data::recipe_ingredient::RecipeIngredientRepository,
                util::db::is_unique_violation,
            },
        };

        /// Expect prior lines to be removed and the new lines to be all that remains
        #[tokio::test]
        async fn replaces_all_lines() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_recipe_tables().build().await?;
            let author = test.user().insert_user("alice").await?;
            let flour = test.ingredient().insert_ingredient("flour", "g").await?;
            let sugar = test.ingredient().insert_ingredient("sugar", "g").await?;
            let eggs = test.ingredient().insert_ingredient("eggs", "pcs").await?;
            let recipe = test
                .recipe()
                .insert_recipe_with_ingredients(
                    author.id,
                    "Cake",
                    &[(flour.id, 200), (sugar.id, 100)],
                )
                .await?;

            let repo = RecipeIngredientRepository::new(&test.db);
            let removed = repo
                .replace_for_recipe(recipe.id, &[IngredientLineDto { id: eggs.id, amount: 3 }])
                .await?;

            assert_eq!(removed, 2);

            let report = repo.get_report(recipe.id).await?;
            assert_eq!(report.len(), 1);
            assert_eq!(report[0].ingredient_id, eggs.id);
            assert_eq!(report[0].name, "eggs");
            assert_eq!(report[0].measurement_unit, "pcs");
            assert_eq!(report[0].amount, 3);

            Ok(())
        }

        /// Expect the composite primary key to reject an ingredient listed twice
        #[tokio::test]
        async fn rejects_duplicate_ingredient() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_recipe_tables().build().await?;
            let author = test.user().insert_user("alice").await?;
            let salt = test.ingredient().insert_ingredient("salt", "g").await?;
            let recipe = test.recipe().insert_recipe(author.id, "Soup").await?;

            let repo = RecipeIngredientRepository::new(&test.db);
            let result = repo
                .replace_for_recipe(
                    recipe.id,
                    &[
                        IngredientLineDto { id: salt.id, amount: 1 },
                        IngredientLineDto { id: salt.id, amount: 2 },
                    ],
                )
                .await;

            assert!(result.is_err());
            assert!(is_unique_violation(&result.unwrap_err()));

            Ok(())
        }
    }

    mod get_reports_for_recipes {
        use larder_test_utils::prelude::*;

        use crate::server::data::recipe_ingredient::RecipeIngredientRepository;

        /// Expect lines grouped per recipe and sorted by ingredient name
        #[tokio::test]
        async fn groups_by_recipe() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_recipe_tables().build().await?;
            let author = test.user().insert_user("alice").await?;
            let sugar = test.ingredient().insert_ingredient("sugar", "g").await?;
            let flour = test.ingredient().insert_ingredient("flour", "g").await?;
            let cake = test
                .recipe()
                .insert_recipe_with_ingredients(
                    author.id,
                    "Cake",
                    &[(sugar.id, 100), (flour.id, 200)],
                )
                .await?;
            let bread = test
                .recipe()
                .insert_recipe_with_ingredients(author.id, "Bread", &[(flour.id, 500)])
                .await?;
            let empty = test.recipe().insert_recipe(author.id, "Water").await?;

            let repo = RecipeIngredientRepository::new(&test.db);
            let reports = repo
                .get_reports_for_recipes(&[cake.id, bread.id, empty.id])
                .await?;

            let cake_names: Vec<&str> = reports[&cake.id].iter().map(|r| r.name.as_str()).collect();
            assert_eq!(cake_names, vec!["flour", "sugar"]);
            assert_eq!(reports[&bread.id].len(), 1);
            assert!(!reports.contains_key(&empty.id));

            Ok(())
        }
    }
}
