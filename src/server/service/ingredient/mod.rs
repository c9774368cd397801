//! Ingredient catalog service.
//!
//! The catalog is the single source of truth for ingredient identities. Every name entering
//! or being compared against the catalog goes through
//! [`normalize_ingredient_name`](crate::server::util::name::normalize_ingredient_name).

#[cfg(test)]
mod tests;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::ingredient::{IngredientDto, NewIngredientDto},
    server::{
        data::ingredient::IngredientRepository,
        error::{domain::DomainError, Error},
        util::{
            db::{is_foreign_key_violation, is_unique_violation},
            name::normalize_ingredient_name,
            validate::{require_text, MAX_INGREDIENT_NAME_LENGTH, MAX_UNIT_LENGTH},
        },
    },
};

/// Service for registering, looking up and removing catalog ingredients.
pub struct IngredientService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> IngredientService<'a> {
    /// Creates a new instance of IngredientService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new catalog ingredient.
    ///
    /// The name is normalized before the length and uniqueness checks. The measurement unit
    /// is not part of the identity, so registering a known name with another unit still
    /// collides. The unique index on the name decides between concurrent registrations.
    ///
    /// # Arguments
    /// - `ingredient` - Name and measurement unit as submitted
    ///
    /// # Returns
    /// - `Ok(IngredientDto)` - The registered ingredient with its normalized name
    /// - `Err(Error::DomainError(DomainError::InvalidField))` - Name or unit blank or too long
    /// - `Err(Error::DomainError(DomainError::DuplicateIngredient))` - Normalized name already registered
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn register(&self, ingredient: NewIngredientDto) -> Result<IngredientDto, Error> {
        let name = normalize_ingredient_name(&ingredient.name);
        let name = require_text("name", &name, MAX_INGREDIENT_NAME_LENGTH)?;
        let measurement_unit =
            require_text("measurement_unit", &ingredient.measurement_unit, MAX_UNIT_LENGTH)?;

        let ingredient_repo = IngredientRepository::new(self.db);

        let created = ingredient_repo
            .create(name.clone(), measurement_unit)
            .await
            .map_err(|err| -> Error {
                if is_unique_violation(&err) {
                    DomainError::DuplicateIngredient(name.clone()).into()
                } else {
                    err.into()
                }
            })?;

        tracing::info!(
            ingredient_id = created.id,
            name = %created.name,
            "Registered ingredient"
        );

        Ok(created.into())
    }

    /// Resolves an ingredient by ID.
    ///
    /// # Returns
    /// - `Ok(IngredientDto)` - Ingredient found
    /// - `Err(Error::DomainError(DomainError::NotFound))` - No ingredient with this ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn resolve(&self, ingredient_id: i32) -> Result<IngredientDto, Error> {
        let ingredient_repo = IngredientRepository::new(self.db);

        let Some(ingredient) = ingredient_repo.get_by_id(ingredient_id).await? else {
            return Err(ingredient_not_found(ingredient_id).into());
        };

        Ok(ingredient.into())
    }

    /// Searches the catalog for ingredients whose name starts with `prefix`, ignoring case.
    ///
    /// Results are ordered by name. Without a prefix the whole catalog is returned.
    pub async fn search(&self, prefix: Option<&str>) -> Result<Vec<IngredientDto>, Error> {
        let ingredient_repo = IngredientRepository::new(self.db);

        let prefix = prefix.map(normalize_ingredient_name);
        let ingredients = ingredient_repo
            .search_query(prefix.as_deref())
            .all(self.db)
            .await?;

        Ok(ingredients.into_iter().map(IngredientDto::from).collect())
    }

    /// Removes an ingredient no recipe references.
    ///
    /// The reference check and the deletion run in one transaction, a recipe gaining the
    /// ingredient concurrently is still caught by the restricting foreign key.
    ///
    /// # Returns
    /// - `Ok(())` - Ingredient removed
    /// - `Err(Error::DomainError(DomainError::NotFound))` - No ingredient with this ID
    /// - `Err(Error::DomainError(DomainError::IngredientInUse))` - At least one recipe lists it
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn remove(&self, ingredient_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;
        let ingredient_repo = IngredientRepository::new(&txn);

        if ingredient_repo.get_by_id(ingredient_id).await?.is_none() {
            return Err(ingredient_not_found(ingredient_id).into());
        }

        if ingredient_repo.is_referenced(ingredient_id).await? {
            return Err(DomainError::IngredientInUse(ingredient_id).into());
        }

        ingredient_repo
            .delete(ingredient_id)
            .await
            .map_err(|err| -> Error {
                if is_foreign_key_violation(&err) {
                    DomainError::IngredientInUse(ingredient_id).into()
                } else {
                    err.into()
                }
            })?;

        txn.commit().await?;

        tracing::info!(ingredient_id, "Removed ingredient");

        Ok(())
    }
}

fn ingredient_not_found(ingredient_id: i32) -> DomainError {
    DomainError::NotFound(format!("Ingredient ID {} not found", ingredient_id))
}
