//! Favorites and shopping cart membership.
//!
//! Both are relations between a user and a recipe distinguished by [`RelationKind`]. Each
//! `(kind, user, recipe)` triple exists at most once, enforced by the primary key so that
//! concurrent identical requests cannot both succeed.

#[cfg(test)]
mod tests;

use entity::user_recipe_relation::RelationKind;
use sea_orm::{DatabaseConnection, DbErr, PaginatorTrait};

use crate::{
    model::{
        api::{PageDto, PageParams},
        recipe::ShortRecipeDto,
    },
    server::{
        data::{recipe::RecipeRepository, relation::RelationRepository},
        error::{domain::DomainError, Error},
        util::db::{is_foreign_key_violation, is_unique_violation},
    },
};

pub struct RelationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RelationService<'a> {
    /// Creates a new instance of RelationService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a recipe to the user's favorites or shopping cart.
    ///
    /// # Arguments
    /// - `kind` - Favorite or shopping cart
    /// - `user_id` - ID of the user adding the recipe
    /// - `recipe_id` - ID of the recipe to add
    ///
    /// # Returns
    /// - `Ok(ShortRecipeDto)` - The added recipe
    /// - `Err(Error::DomainError(DomainError::NotFound))` - Recipe does not exist
    /// - `Err(Error::DomainError(DomainError::AlreadyExists))` - Recipe was already added
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn add(
        &self,
        kind: RelationKind,
        user_id: i32,
        recipe_id: i32,
    ) -> Result<ShortRecipeDto, Error> {
        let Some(recipe) = RecipeRepository::new(self.db).get_by_id(recipe_id).await? else {
            return Err(DomainError::NotFound(format!("Recipe ID {} not found", recipe_id)).into());
        };

        RelationRepository::new(self.db)
            .create(kind, user_id, recipe_id)
            .await
            .map_err(|err| relation_insert_error(err, kind, recipe_id))?;

        tracing::debug!(user_id, recipe_id, kind = kind.as_str(), "Added recipe relation");

        Ok(recipe.into())
    }

    /// Removes a recipe from the user's favorites or shopping cart.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of relations removed, always 1
    /// - `Err(Error::DomainError(DomainError::NotFound))` - Recipe does not exist or was not added
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn remove(
        &self,
        kind: RelationKind,
        user_id: i32,
        recipe_id: i32,
    ) -> Result<u64, Error> {
        if RecipeRepository::new(self.db)
            .get_by_id(recipe_id)
            .await?
            .is_none()
        {
            return Err(DomainError::NotFound(format!("Recipe ID {} not found", recipe_id)).into());
        }

        let result = RelationRepository::new(self.db)
            .delete(kind, user_id, recipe_id)
            .await?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound(format!(
                "Recipe ID {} is not in your {}",
                recipe_id,
                describe(kind)
            ))
            .into());
        }

        tracing::debug!(user_id, recipe_id, kind = kind.as_str(), "Removed recipe relation");

        Ok(result.rows_affected)
    }

    /// Lists the recipes a user holds in a relation of `kind`, most recently added first.
    pub async fn list_for_user(
        &self,
        kind: RelationKind,
        user_id: i32,
        page: PageParams,
    ) -> Result<PageDto<ShortRecipeDto>, Error> {
        let paginator = RelationRepository::new(self.db)
            .list_query(kind, user_id)
            .paginate(self.db, page.page_size());
        let totals = paginator.num_items_and_pages().await?;
        let recipes = paginator.fetch_page(page.page_index()).await?;

        Ok(PageDto {
            count: totals.number_of_items,
            page: page.page_index() + 1,
            pages: totals.number_of_pages,
            results: recipes.into_iter().map(ShortRecipeDto::from).collect(),
        })
    }
}

/// Maps a rejected relation insert to the domain error reported to the client.
///
/// A foreign key violation means the recipe was deleted after it was looked up.
fn relation_insert_error(err: DbErr, kind: RelationKind, recipe_id: i32) -> Error {
    if is_unique_violation(&err) {
        DomainError::AlreadyExists(format!(
            "Recipe ID {} is already in your {}",
            recipe_id,
            describe(kind)
        ))
        .into()
    } else if is_foreign_key_violation(&err) {
        DomainError::NotFound(format!("Recipe ID {} not found", recipe_id)).into()
    } else {
        err.into()
    }
}

fn describe(kind: RelationKind) -> &'static str {
    match kind {
        RelationKind::Favorite => "favorites",
        RelationKind::ShoppingCart => "shopping cart",
    }
}
