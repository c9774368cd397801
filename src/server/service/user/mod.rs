#[cfg(test)]
mod tests;

use sea_orm::DatabaseConnection;

use crate::{
    model::user::{NewUserDto, UserDto},
    server::{
        data::{subscription::SubscriptionRepository, user::UserRepository},
        error::{domain::DomainError, Error},
        util::{
            db::is_unique_violation,
            validate::{require_text, validate_email, validate_username, MAX_NAME_LENGTH},
        },
    },
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of UserService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a user account.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The created user
    /// - `Err(Error::DomainError(DomainError::InvalidField))` - A field failed validation
    /// - `Err(Error::DomainError(DomainError::AlreadyExists))` - Email or username already taken
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_user(&self, user: NewUserDto) -> Result<UserDto, Error> {
        let user = NewUserDto {
            email: validate_email(&user.email)?,
            username: validate_username(&user.username)?,
            first_name: require_text("first_name", &user.first_name, MAX_NAME_LENGTH)?,
            last_name: require_text("last_name", &user.last_name, MAX_NAME_LENGTH)?,
        };

        let created = UserRepository::new(self.db)
            .create(user)
            .await
            .map_err(|err| -> Error {
                if is_unique_violation(&err) {
                    DomainError::AlreadyExists("Email or username already taken".to_string())
                        .into()
                } else {
                    err.into()
                }
            })?;

        tracing::info!(user_id = created.id, username = %created.username, "Created user");

        Ok(UserDto::from_model(created, false))
    }

    /// Gets a user profile as seen by `viewer`.
    ///
    /// # Returns
    /// - `Ok(Some(UserDto))` - User found, `is_subscribed` reflects whether the viewer follows them
    /// - `Ok(None)` - No user with this ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_user(
        &self,
        viewer: Option<i32>,
        user_id: i32,
    ) -> Result<Option<UserDto>, Error> {
        let Some(user) = UserRepository::new(self.db).get_by_id(user_id).await? else {
            return Ok(None);
        };

        let is_subscribed = match viewer {
            Some(viewer_id) => !SubscriptionRepository::new(self.db)
                .followed_author_ids(viewer_id, &[user_id])
                .await?
                .is_empty(),
            None => false,
        };

        Ok(Some(UserDto::from_model(user, is_subscribed)))
    }
}
