use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select,
};

pub struct SubscriptionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SubscriptionRepository<'a, C> {
    /// Creates a new instance of [`SubscriptionRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Subscribes `subscriber_id` to `author_id`
    ///
    /// The primary key rejects a pair already present with
    /// [`sea_orm::SqlErr::UniqueConstraintViolation`] and the check constraint rejects
    /// subscribing to oneself.
    pub async fn create(&self, subscriber_id: i32, author_id: i32) -> Result<(), DbErr> {
        let subscription = entity::subscription::ActiveModel {
            subscriber_id: ActiveValue::Set(subscriber_id),
            author_id: ActiveValue::Set(author_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        entity::prelude::Subscription::insert(subscription)
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    /// Deletes a subscription
    ///
    /// Returns OK regardless of the subscription existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, subscriber_id: i32, author_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Subscription::delete_by_id((subscriber_id, author_id))
            .exec(self.db)
            .await
    }

    /// Query of the authors `subscriber_id` follows, most recent subscription first
    pub fn authors_query(&self, subscriber_id: i32) -> Select<entity::user::Entity> {
        entity::prelude::User::find()
            .join(
                JoinType::InnerJoin,
                entity::subscription::Relation::Author.def().rev(),
            )
            .filter(entity::subscription::Column::SubscriberId.eq(subscriber_id))
            .order_by_desc(entity::subscription::Column::CreatedAt)
            .order_by_desc(entity::user::Column::Id)
    }

    /// Which of the provided authors `subscriber_id` follows
    pub async fn followed_author_ids(
        &self,
        subscriber_id: i32,
        author_ids: &[i32],
    ) -> Result<Vec<i32>, DbErr> {
        if author_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Subscription::find()
            .select_only()
            .column(entity::subscription::Column::AuthorId)
            .filter(entity::subscription::Column::SubscriberId.eq(subscriber_id))
            .filter(entity::subscription::Column::AuthorId.is_in(author_ids.iter().copied()))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    mod create {
        use larder_test_utils::prelude::*;

        use crate::server::{
            data::subscription::SubscriptionRepository, util::db::is_unique_violation,
        };

        #[tokio::test]
        async fn rejects_duplicate_pair() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_recipe_tables().build().await?;
            let alice = test.user().insert_user("alice").await?;
            let bob = test.user().insert_user("bob").await?;

            let repo = SubscriptionRepository::new(&test.db);
            repo.create(alice.id, bob.id).await?;
            let result = repo.create(alice.id, bob.id).await;

            assert!(result.is_err());
            assert!(is_unique_violation(&result.unwrap_err()));

            Ok(())
        }
    }

    mod authors_query {
        use larder_test_utils::prelude::*;

        use crate::server::data::subscription::SubscriptionRepository;

        /// Expect only followed authors, newest subscription first
        #[tokio::test]
        async fn lists_followed_authors() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_recipe_tables().build().await?;
            let alice = test.user().insert_user("alice").await?;
            let bob = test.user().insert_user("bob").await?;
            let carol = test.user().insert_user("carol").await?;
            let dave = test.user().insert_user("dave").await?;
            test.subscription().insert_subscription(alice.id, bob.id).await?;
            tokio::time::sleep(std::time::Duration::from_millis(5)).await;
            test.subscription().insert_subscription(alice.id, carol.id).await?;
            test.subscription().insert_subscription(dave.id, alice.id).await?;

            let repo = SubscriptionRepository::new(&test.db);
            let authors = repo.authors_query(alice.id).all(&test.db).await?;

            let names: Vec<&str> = authors.iter().map(|u| u.username.as_str()).collect();
            assert_eq!(names, vec!["carol", "bob"]);

            let followed = repo
                .followed_author_ids(alice.id, &[bob.id, dave.id])
                .await?;
            assert_eq!(followed, vec![bob.id]);

            Ok(())
        }
    }

    mod delete {
        use larder_test_utils::prelude::*;

        use crate::server::data::subscription::SubscriptionRepository;

        #[tokio::test]
        async fn reports_rows_removed() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_recipe_tables().build().await?;
            let alice = test.user().insert_user("alice").await?;
            let bob = test.user().insert_user("bob").await?;
            test.subscription().insert_subscription(alice.id, bob.id).await?;

            let repo = SubscriptionRepository::new(&test.db);

            assert_eq!(repo.delete(alice.id, bob.id).await?.rows_affected, 1);
            assert_eq!(repo.delete(alice.id, bob.id).await?.rows_affected, 0);

            Ok(())
        }
    }
}
