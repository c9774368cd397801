//! Author subscriptions and the author views built from them.

#[cfg(test)]
mod tests;

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, PaginatorTrait};

use crate::{
    model::{
        api::{PageDto, PageParams},
        recipe::ShortRecipeDto,
        user::{RecipesLimitParams, SubscriptionDto, UserDto},
    },
    server::{
        data::{
            recipe::RecipeRepository, subscription::SubscriptionRepository, user::UserRepository,
        },
        error::{domain::DomainError, Error},
        model::db::UserModel,
        util::db::{is_foreign_key_violation, is_unique_violation},
    },
};

pub struct SubscriptionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SubscriptionService<'a> {
    /// Creates a new instance of SubscriptionService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Subscribes a user to an author's recipes.
    ///
    /// # Arguments
    /// - `subscriber_id` - ID of the user subscribing
    /// - `author_id` - ID of the author to follow
    /// - `recipes_limit` - Maximum number of recipes in the returned preview, `None` or `0` for all
    ///
    /// # Returns
    /// - `Ok(SubscriptionDto)` - The followed author with their recipe preview
    /// - `Err(Error::DomainError(DomainError::SelfSubscription))` - Subscriber and author are the same user
    /// - `Err(Error::DomainError(DomainError::NotFound))` - Author does not exist
    /// - `Err(Error::DomainError(DomainError::AlreadyExists))` - Already subscribed
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn subscribe(
        &self,
        subscriber_id: i32,
        author_id: i32,
        recipes_limit: Option<u64>,
    ) -> Result<SubscriptionDto, Error> {
        if subscriber_id == author_id {
            return Err(DomainError::SelfSubscription.into());
        }

        let Some(author) = UserRepository::new(self.db).get_by_id(author_id).await? else {
            return Err(author_not_found(author_id).into());
        };

        SubscriptionRepository::new(self.db)
            .create(subscriber_id, author_id)
            .await
            .map_err(|err| subscription_insert_error(err, author_id))?;

        tracing::debug!(subscriber_id, author_id, "Subscribed to author");

        build_subscription_dto(self.db, author, recipes_limit).await
    }

    /// Removes a subscription.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of subscriptions removed, always 1
    /// - `Err(Error::DomainError(DomainError::NotFound))` - Author does not exist or was not followed
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn unsubscribe(&self, subscriber_id: i32, author_id: i32) -> Result<u64, Error> {
        if UserRepository::new(self.db)
            .get_by_id(author_id)
            .await?
            .is_none()
        {
            return Err(author_not_found(author_id).into());
        }

        let result = SubscriptionRepository::new(self.db)
            .delete(subscriber_id, author_id)
            .await?;

        if result.rows_affected == 0 {
            return Err(
                DomainError::NotFound(format!("Not subscribed to user ID {}", author_id)).into(),
            );
        }

        tracing::debug!(subscriber_id, author_id, "Unsubscribed from author");

        Ok(result.rows_affected)
    }

    /// Lists the authors a user follows, most recent subscription first.
    ///
    /// Each entry carries the author's total recipe count and a preview of their newest
    /// recipes capped by `recipes_limit`, where `0` or absent means no cap.
    pub async fn list_subscriptions(
        &self,
        subscriber_id: i32,
        limit: RecipesLimitParams,
        page: PageParams,
    ) -> Result<PageDto<SubscriptionDto>, Error> {
        let paginator = SubscriptionRepository::new(self.db)
            .authors_query(subscriber_id)
            .paginate(self.db, page.page_size());
        let totals = paginator.num_items_and_pages().await?;
        let authors = paginator.fetch_page(page.page_index()).await?;

        let mut results = Vec::with_capacity(authors.len());
        for author in authors {
            results.push(build_subscription_dto(self.db, author, limit.recipes_limit).await?);
        }

        Ok(PageDto {
            count: totals.number_of_items,
            page: page.page_index() + 1,
            pages: totals.number_of_pages,
            results,
        })
    }
}

/// Builds the view of a followed author, the subscriber always follows them.
async fn build_subscription_dto<C: ConnectionTrait>(
    db: &C,
    author: UserModel,
    recipes_limit: Option<u64>,
) -> Result<SubscriptionDto, Error> {
    let recipe_repo = RecipeRepository::new(db);
    let recipes_limit = recipes_limit.filter(|limit| *limit > 0);

    let recipes_count = recipe_repo
        .count_by_authors(&[author.id])
        .await?
        .get(&author.id)
        .copied()
        .unwrap_or(0);
    let recipes = recipe_repo
        .preview_by_author(author.id, recipes_limit)
        .await?;

    Ok(SubscriptionDto {
        author: UserDto::from_model(author, true),
        recipes_count,
        recipes: recipes.into_iter().map(ShortRecipeDto::from).collect(),
    })
}

/// Maps a rejected subscription insert to the domain error reported to the client.
///
/// A foreign key violation means the author was deleted after they were looked up.
fn subscription_insert_error(err: DbErr, author_id: i32) -> Error {
    if is_unique_violation(&err) {
        DomainError::AlreadyExists(format!("Already subscribed to user ID {}", author_id)).into()
    } else if is_foreign_key_violation(&err) {
        author_not_found(author_id).into()
    } else {
        err.into()
    }
}

fn author_not_found(author_id: i32) -> DomainError {
    DomainError::NotFound(format!("User ID {} not found", author_id))
}
