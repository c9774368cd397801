//! Recipe authoring and listing.
//!
//! Creating and updating a recipe writes the recipe row and its ingredient lines in one
//! transaction. Read paths decorate recipes with per-viewer flags: whether the viewer
//! favorited the recipe, holds it in their shopping cart and follows its author.

pub mod ingredient;

#[cfg(test)]
mod tests;

use std::collections::{HashMap, HashSet};

use entity::user_recipe_relation::RelationKind;
use sea_orm::{ConnectionTrait, DatabaseConnection, PaginatorTrait, TransactionTrait};

use crate::{
    model::{
        api::{PageDto, PageParams},
        recipe::{
            NewRecipeDto, RecipeDto, RecipeFilterParams, RecipeIngredientDto, RecipeLinkDto,
            UpdateRecipeDto,
        },
        user::UserDto,
    },
    server::{
        data::{
            recipe::{RecipeChanges, RecipeFields, RecipeFilter, RecipeRepository},
            recipe_ingredient::RecipeIngredientRepository,
            relation::RelationRepository,
            subscription::SubscriptionRepository,
            user::UserRepository,
        },
        error::{auth::AuthError, domain::DomainError, Error},
        model::db::RecipeModel,
        service::recipe::ingredient::{recipe_not_found, replace_lines, validate_lines},
        util::{
            db::is_unique_violation,
            validate::{require_text, MAX_RECIPE_NAME_LENGTH},
        },
    },
};

pub struct RecipeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RecipeService<'a> {
    /// Creates a new instance of RecipeService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Publishes a new recipe along with its ingredient lines.
    ///
    /// All fields are validated before the transaction begins. The name check, the recipe
    /// insert and the ingredient lines then commit together or not at all.
    ///
    /// # Arguments
    /// - `author_id` - ID of the user publishing the recipe
    /// - `recipe` - Recipe fields and ingredient lines as submitted
    ///
    /// # Returns
    /// - `Ok(RecipeDto)` - The published recipe as seen by its author
    /// - `Err(Error::DomainError(DomainError::InvalidField))` - Name or text blank or too long
    /// - `Err(Error::DomainError(DomainError::InvalidCookingTime))` - Cooking time below 1 minute
    /// - `Err(Error::DomainError(_))` - Ingredient lines rejected, see
    ///   [`RecipeIngredientService::set_ingredients`](ingredient::RecipeIngredientService::set_ingredients)
    /// - `Err(Error::DomainError(DomainError::AlreadyExists))` - Author already has a recipe by this name
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create(&self, author_id: i32, recipe: NewRecipeDto) -> Result<RecipeDto, Error> {
        let name = require_text("name", &recipe.name, MAX_RECIPE_NAME_LENGTH)?;
        let text = require_text("text", &recipe.text, usize::MAX)?;
        validate_cooking_time(recipe.cooking_time)?;
        validate_lines(&recipe.ingredients)?;

        let txn = self.db.begin().await?;
        let recipe_repo = RecipeRepository::new(&txn);

        if recipe_repo.name_taken(author_id, &name, None).await? {
            return Err(name_taken(&name).into());
        }

        let created = recipe_repo
            .create(
                author_id,
                RecipeFields {
                    name: name.clone(),
                    text,
                    image: recipe.image,
                    cooking_time: recipe.cooking_time,
                },
            )
            .await
            .map_err(|err| -> Error {
                if is_unique_violation(&err) {
                    name_taken(&name).into()
                } else {
                    err.into()
                }
            })?;

        replace_lines(&txn, created.id, &recipe.ingredients).await?;

        txn.commit().await?;

        tracing::info!(author_id, recipe_id = created.id, "Published recipe");

        self.get(Some(author_id), created.id).await
    }

    /// Updates a recipe, only the author may do so.
    ///
    /// Omitted fields keep their value. Provided ingredient lines replace every existing
    /// line in the same transaction as the field changes.
    ///
    /// # Returns
    /// - `Ok(RecipeDto)` - The updated recipe as seen by its author
    /// - `Err(Error::DomainError(DomainError::NotFound))` - Recipe does not exist
    /// - `Err(Error::AuthError(AuthError::NotRecipeAuthor))` - User is not the recipe's author
    /// - `Err(Error::DomainError(DomainError::AlreadyExists))` - Renamed to a name the author already uses
    /// - `Err(Error::DomainError(_))` - A field or the ingredient lines failed validation
    /// - `Err(Error::DbErr)` - Database operation failed, nothing was changed
    pub async fn update(
        &self,
        user_id: i32,
        recipe_id: i32,
        changes: UpdateRecipeDto,
    ) -> Result<RecipeDto, Error> {
        let name = changes
            .name
            .as_deref()
            .map(|name| require_text("name", name, MAX_RECIPE_NAME_LENGTH))
            .transpose()?;
        let text = changes
            .text
            .as_deref()
            .map(|text| require_text("text", text, usize::MAX))
            .transpose()?;
        if let Some(cooking_time) = changes.cooking_time {
            validate_cooking_time(cooking_time)?;
        }
        if let Some(lines) = &changes.ingredients {
            validate_lines(lines)?;
        }

        let txn = self.db.begin().await?;
        let recipe_repo = RecipeRepository::new(&txn);

        let recipe = authored_recipe(&recipe_repo, user_id, recipe_id).await?;

        if let Some(name) = &name {
            if recipe_repo
                .name_taken(recipe.author_id, name, Some(recipe_id))
                .await?
            {
                return Err(name_taken(name).into());
            }
        }

        recipe_repo
            .update(
                recipe,
                RecipeChanges {
                    name: name.clone(),
                    text,
                    image: changes.image,
                    cooking_time: changes.cooking_time,
                },
            )
            .await
            .map_err(|err| -> Error {
                if is_unique_violation(&err) {
                    name_taken(name.as_deref().unwrap_or_default()).into()
                } else {
                    err.into()
                }
            })?;

        if let Some(lines) = &changes.ingredients {
            replace_lines(&txn, recipe_id, lines).await?;
        }

        txn.commit().await?;

        tracing::info!(user_id, recipe_id, "Updated recipe");

        self.get(Some(user_id), recipe_id).await
    }

    /// Deletes a recipe, only the author may do so.
    ///
    /// Ingredient lines, favorites and cart entries of the recipe go with it.
    ///
    /// # Returns
    /// - `Ok(())` - Recipe deleted
    /// - `Err(Error::DomainError(DomainError::NotFound))` - Recipe does not exist
    /// - `Err(Error::AuthError(AuthError::NotRecipeAuthor))` - User is not the recipe's author
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn delete(&self, user_id: i32, recipe_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;
        let recipe_repo = RecipeRepository::new(&txn);

        authored_recipe(&recipe_repo, user_id, recipe_id).await?;
        recipe_repo.delete(recipe_id).await?;

        txn.commit().await?;

        tracing::info!(user_id, recipe_id, "Deleted recipe");

        Ok(())
    }

    /// Gets a recipe as seen by `viewer`, anonymous viewers see every flag unset.
    ///
    /// # Returns
    /// - `Ok(RecipeDto)` - Recipe found
    /// - `Err(Error::DomainError(DomainError::NotFound))` - Recipe does not exist
    /// - `Err(Error::InternalError)` - Recipe's author is missing
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get(&self, viewer: Option<i32>, recipe_id: i32) -> Result<RecipeDto, Error> {
        let Some(recipe) = RecipeRepository::new(self.db).get_by_id(recipe_id).await? else {
            return Err(recipe_not_found(recipe_id).into());
        };

        let mut recipes = build_recipe_dtos(self.db, viewer, vec![recipe]).await?;

        recipes
            .pop()
            .ok_or_else(|| Error::InternalError(format!("Recipe ID {} vanished", recipe_id)))
    }

    /// Lists recipes newest first, one page at a time.
    ///
    /// The favorite and shopping cart filters apply only when set to `true` and only for
    /// an authenticated viewer, otherwise they are ignored.
    pub async fn list(
        &self,
        viewer: Option<i32>,
        filters: RecipeFilterParams,
        page: PageParams,
    ) -> Result<PageDto<RecipeDto>, Error> {
        let filter = RecipeFilter {
            author_id: filters.author,
            favorited_by: viewer.filter(|_| filters.is_favorited == Some(true)),
            in_cart_of: viewer.filter(|_| filters.is_in_shopping_cart == Some(true)),
        };

        let paginator = RecipeRepository::new(self.db)
            .list_query(filter)
            .paginate(self.db, page.page_size());
        let totals = paginator.num_items_and_pages().await?;
        let recipes = paginator.fetch_page(page.page_index()).await?;

        Ok(PageDto {
            count: totals.number_of_items,
            page: page.page_index() + 1,
            pages: totals.number_of_pages,
            results: build_recipe_dtos(self.db, viewer, recipes).await?,
        })
    }

    /// Builds the short link of a recipe.
    ///
    /// # Arguments
    /// - `recipe_id` - Recipe to link to
    /// - `public_url` - Base URL the service is reachable at, without a trailing slash
    ///
    /// # Returns
    /// - `Ok(RecipeLinkDto)` - Link of the form `{public_url}/s/{recipe_id}`
    /// - `Err(Error::DomainError(DomainError::NotFound))` - Recipe does not exist
    pub async fn link(&self, recipe_id: i32, public_url: &str) -> Result<RecipeLinkDto, Error> {
        if RecipeRepository::new(self.db)
            .get_by_id(recipe_id)
            .await?
            .is_none()
        {
            return Err(recipe_not_found(recipe_id).into());
        }

        Ok(RecipeLinkDto {
            short_link: format!("{}/s/{}", public_url, recipe_id),
        })
    }
}

/// Loads a recipe for modification by `user_id`.
async fn authored_recipe<C: ConnectionTrait>(
    recipe_repo: &RecipeRepository<'_, C>,
    user_id: i32,
    recipe_id: i32,
) -> Result<RecipeModel, Error> {
    let Some(recipe) = recipe_repo.get_by_id(recipe_id).await? else {
        return Err(recipe_not_found(recipe_id).into());
    };

    if recipe.author_id != user_id {
        return Err(AuthError::NotRecipeAuthor { user_id, recipe_id }.into());
    }

    Ok(recipe)
}

fn validate_cooking_time(cooking_time: i32) -> Result<(), DomainError> {
    if cooking_time < 1 {
        return Err(DomainError::InvalidCookingTime(cooking_time));
    }

    Ok(())
}

fn name_taken(name: &str) -> DomainError {
    DomainError::AlreadyExists(format!("You already have a recipe named {:?}", name))
}

/// Decorates recipes with their author, ingredient lines and the viewer's flags.
///
/// Issues a fixed number of queries regardless of how many recipes are provided. The
/// order of `recipes` is preserved.
async fn build_recipe_dtos<C: ConnectionTrait>(
    db: &C,
    viewer: Option<i32>,
    recipes: Vec<RecipeModel>,
) -> Result<Vec<RecipeDto>, Error> {
    if recipes.is_empty() {
        return Ok(Vec::new());
    }

    let recipe_ids: Vec<i32> = recipes.iter().map(|recipe| recipe.id).collect();
    let mut author_ids: Vec<i32> = recipes.iter().map(|recipe| recipe.author_id).collect();
    author_ids.sort_unstable();
    author_ids.dedup();

    let authors: HashMap<i32, _> = UserRepository::new(db)
        .get_many_by_ids(&author_ids)
        .await?
        .into_iter()
        .map(|user| (user.id, user))
        .collect();

    let (followed, favorited, in_cart) = match viewer {
        Some(viewer_id) => {
            let relation_repo = RelationRepository::new(db);

            let followed: HashSet<i32> = SubscriptionRepository::new(db)
                .followed_author_ids(viewer_id, &author_ids)
                .await?
                .into_iter()
                .collect();
            let favorited: HashSet<i32> = relation_repo
                .recipe_ids_for_user(RelationKind::Favorite, viewer_id, &recipe_ids)
                .await?
                .into_iter()
                .collect();
            let in_cart: HashSet<i32> = relation_repo
                .recipe_ids_for_user(RelationKind::ShoppingCart, viewer_id, &recipe_ids)
                .await?
                .into_iter()
                .collect();

            (followed, favorited, in_cart)
        }
        None => Default::default(),
    };

    let mut reports = RecipeIngredientRepository::new(db)
        .get_reports_for_recipes(&recipe_ids)
        .await?;

    recipes
        .into_iter()
        .map(|recipe| {
            let Some(author) = authors.get(&recipe.author_id).cloned() else {
                return Err(Error::InternalError(format!(
                    "Author ID {} of recipe ID {} not found",
                    recipe.author_id, recipe.id
                )));
            };

            let ingredients = reports
                .remove(&recipe.id)
                .unwrap_or_default()
                .into_iter()
                .map(RecipeIngredientDto::from)
                .collect();

            Ok(RecipeDto {
                id: recipe.id,
                author: UserDto::from_model(author, followed.contains(&recipe.author_id)),
                ingredients,
                is_favorited: favorited.contains(&recipe.id),
                is_in_shopping_cart: in_cart.contains(&recipe.id),
                name: recipe.name,
                image: recipe.image,
                text: recipe.text,
                cooking_time: recipe.cooking_time,
                created_at: recipe.created_at,
            })
        })
        .collect()
}
