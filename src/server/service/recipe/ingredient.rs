use std::collections::HashSet;

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::recipe::{IngredientLineDto, RecipeIngredientDto},
    server::{
        data::{
            ingredient::IngredientRepository,
            recipe::RecipeRepository,
            recipe_ingredient::{IngredientReportRow, RecipeIngredientRepository},
        },
        error::{auth::AuthError, domain::DomainError, Error},
        util::db::{is_foreign_key_violation, is_unique_violation},
    },
};

/// Service maintaining the ingredient lines of recipes.
///
/// Lines are never patched: every update replaces the whole set inside one transaction.
pub struct RecipeIngredientService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RecipeIngredientService<'a> {
    /// Creates a new instance of RecipeIngredientService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Replaces every ingredient line of a recipe.
    ///
    /// The lines are validated before anything is written. The recipe lookup, the
    /// ingredient lookup, the removal of prior lines and the insertion of new ones then share
    /// one transaction, so any failure leaves the prior lines untouched.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user making the change, must be the recipe's author
    /// - `recipe_id` - ID of the recipe to update
    /// - `lines` - The complete new set of ingredient lines
    ///
    /// # Returns
    /// - `Ok(Vec<RecipeIngredientDto>)` - The recipe's ingredient report after the change
    /// - `Err(Error::DomainError(DomainError::EmptyIngredientList))` - No lines provided
    /// - `Err(Error::DomainError(DomainError::DuplicateIngredient))` - An ingredient is listed twice
    /// - `Err(Error::DomainError(DomainError::InvalidAmount))` - An amount is below 1
    /// - `Err(Error::DomainError(DomainError::NotFound))` - Recipe does not exist
    /// - `Err(Error::AuthError(AuthError::NotRecipeAuthor))` - User is not the recipe's author
    /// - `Err(Error::DomainError(DomainError::UnknownIngredient))` - An ingredient ID is not in the catalog
    /// - `Err(Error::DbErr)` - Database operation failed, nothing was changed
    pub async fn set_ingredients(
        &self,
        user_id: i32,
        recipe_id: i32,
        lines: &[IngredientLineDto],
    ) -> Result<Vec<RecipeIngredientDto>, Error> {
        validate_lines(lines)?;

        let txn = self.db.begin().await?;

        let Some(recipe) = RecipeRepository::new(&txn).get_by_id(recipe_id).await? else {
            return Err(recipe_not_found(recipe_id).into());
        };

        if recipe.author_id != user_id {
            return Err(AuthError::NotRecipeAuthor { user_id, recipe_id }.into());
        }

        replace_lines(&txn, recipe_id, lines).await?;

        let report = RecipeIngredientRepository::new(&txn)
            .get_report(recipe_id)
            .await?;

        txn.commit().await?;

        tracing::info!(
            user_id,
            recipe_id,
            lines = lines.len(),
            "Replaced recipe ingredients"
        );

        Ok(report.into_iter().map(RecipeIngredientDto::from).collect())
    }

    /// Ingredient lines of a recipe joined with the catalog, ordered by ingredient name.
    ///
    /// # Returns
    /// - `Ok(Vec<RecipeIngredientDto>)` - The recipe's current lines
    /// - `Err(Error::DomainError(DomainError::NotFound))` - Recipe does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_ingredient_report(
        &self,
        recipe_id: i32,
    ) -> Result<Vec<RecipeIngredientDto>, Error> {
        if RecipeRepository::new(self.db)
            .get_by_id(recipe_id)
            .await?
            .is_none()
        {
            return Err(recipe_not_found(recipe_id).into());
        }

        let report = RecipeIngredientRepository::new(self.db)
            .get_report(recipe_id)
            .await?;

        Ok(report.into_iter().map(RecipeIngredientDto::from).collect())
    }
}

impl From<IngredientReportRow> for RecipeIngredientDto {
    fn from(row: IngredientReportRow) -> Self {
        Self {
            id: row.ingredient_id,
            name: row.name,
            measurement_unit: row.measurement_unit,
            amount: row.amount,
        }
    }
}

/// Checks a set of ingredient lines without touching the database.
///
/// Duplicates are reported before amounts, so a list repeating an ingredient always fails
/// with [`DomainError::DuplicateIngredient`].
pub fn validate_lines(lines: &[IngredientLineDto]) -> Result<(), DomainError> {
    if lines.is_empty() {
        return Err(DomainError::EmptyIngredientList);
    }

    let mut seen = HashSet::with_capacity(lines.len());
    for line in lines {
        if !seen.insert(line.id) {
            return Err(DomainError::DuplicateIngredient(format!(
                "ingredient ID {} is listed more than once",
                line.id
            )));
        }
    }

    if let Some(line) = lines.iter().find(|line| line.amount < 1) {
        return Err(DomainError::InvalidAmount {
            ingredient_id: line.id,
            amount: line.amount,
        });
    }

    Ok(())
}

/// Swaps the ingredient lines of a recipe for `lines`, which must already be validated.
///
/// Meant to run on a transaction shared with the caller's other writes. The catalog rows
/// are share-locked until that transaction ends, so a listed ingredient cannot be removed
/// between the existence check and the insert.
pub(super) async fn replace_lines<C: ConnectionTrait>(
    conn: &C,
    recipe_id: i32,
    lines: &[IngredientLineDto],
) -> Result<(), Error> {
    let ids: Vec<i32> = lines.iter().map(|line| line.id).collect();
    let existing: HashSet<i32> = IngredientRepository::new(conn)
        .lock_existing_ids(&ids)
        .await?
        .into_iter()
        .collect();

    if let Some(missing) = ids.iter().find(|id| !existing.contains(id)) {
        return Err(DomainError::UnknownIngredient(*missing).into());
    }

    RecipeIngredientRepository::new(conn)
        .replace_for_recipe(recipe_id, lines)
        .await
        .map_err(|err| -> Error {
            if is_unique_violation(&err) {
                DomainError::DuplicateIngredient(format!(
                    "recipe ID {} lists an ingredient more than once",
                    recipe_id
                ))
                .into()
            } else if is_foreign_key_violation(&err) {
                // Catalog rows are locked, only the recipe itself can have gone.
                recipe_not_found(recipe_id).into()
            } else {
                err.into()
            }
        })?;

    Ok(())
}

pub(super) fn recipe_not_found(recipe_id: i32) -> DomainError {
    DomainError::NotFound(format!("Recipe ID {} not found", recipe_id))
}
