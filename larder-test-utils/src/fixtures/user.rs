//! User fixture utilities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{model::UserModel, TestContext, TestError};

impl TestContext {
    pub fn user<'a>(&'a mut self) -> UserFixtures<'a> {
        UserFixtures { test: self }
    }
}

pub struct UserFixtures<'a> {
    pub test: &'a mut TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a user into the database.
    ///
    /// The email is derived from the username so both stay unique together.
    ///
    /// # Returns
    /// - `Ok(UserModel)` - The created user record
    /// - `Err(TestError::DbErr)` - Username already taken or user table missing
    pub async fn insert_user(&self, username: &str) -> Result<UserModel, TestError> {
        let user = entity::user::ActiveModel {
            email: ActiveValue::Set(format!("{}@example.com", username)),
            username: ActiveValue::Set(username.to_string()),
            first_name: ActiveValue::Set("Test".to_string()),
            last_name: ActiveValue::Set("User".to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(user.insert(&self.test.db).await?)
    }
}
