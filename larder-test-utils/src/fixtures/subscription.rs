//! Author subscription fixture utilities.

use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{TestContext, TestError};

impl TestContext {
    pub fn subscription<'a>(&'a mut self) -> SubscriptionFixtures<'a> {
        SubscriptionFixtures { test: self }
    }
}

pub struct SubscriptionFixtures<'a> {
    pub test: &'a mut TestContext,
}

impl<'a> SubscriptionFixtures<'a> {
    /// Subscribe `subscriber_id` to the recipes of `author_id`.
    pub async fn insert_subscription(
        &self,
        subscriber_id: i32,
        author_id: i32,
    ) -> Result<(), TestError> {
        let subscription = entity::subscription::ActiveModel {
            subscriber_id: ActiveValue::Set(subscriber_id),
            author_id: ActiveValue::Set(author_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        entity::prelude::Subscription::insert(subscription)
            .exec_without_returning(&self.test.db)
            .await?;

        Ok(())
    }
}
