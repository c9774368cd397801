use tower_sessions::Session;

use crate::{
    model::user::UserDto,
    server::{
        error::{auth::AuthError, Error},
        model::{app::AppState, session::user::SessionUserId},
        service::user::UserService,
    },
};

/// Retrieves user information from session and then from database
///
/// # Arguments
/// - `state`: Application state with database connection
/// - `session`: The user's session
///
/// # Returns
/// - `Ok(UserDto)`: User found
/// - `Err(Error::AuthError(AuthError::UserNotInSession))`: User ID not present in session
/// - `Err(Error::AuthError(AuthError::UserNotInDatabase))`: User ID exists in session but not found in database (session is cleared)
/// - `Err(Error)`: Internal errors (database query failures, session errors, etc.)
pub async fn get_user_from_session(state: &AppState, session: &Session) -> Result<UserDto, Error> {
    let Some(user_id) = SessionUserId::get(session).await? else {
        return Err(Error::AuthError(AuthError::UserNotInSession));
    };

    let Some(user) = UserService::new(&state.db)
        .get_user(None, user_id)
        .await?
    else {
        session.clear().await;

        tracing::debug!(
            "Session cleared for user ID {} with active session but was not found in database",
            user_id
        );

        return Err(Error::AuthError(AuthError::UserNotInDatabase(user_id)));
    };

    Ok(user)
}

/// Resolves the ID of the user viewing a read-only endpoint
///
/// Anonymous callers are allowed. A session pointing at a user that no longer exists is
/// cleared and the request continues as anonymous.
///
/// # Returns
/// - `Ok(Some(i32))`: Authenticated viewer
/// - `Ok(None)`: Anonymous viewer
/// - `Err(Error)`: Session or database failure
pub async fn get_viewer_id(state: &AppState, session: &Session) -> Result<Option<i32>, Error> {
    match get_user_from_session(state, session).await {
        Ok(user) => Ok(Some(user.id)),
        Err(Error::AuthError(AuthError::UserNotInSession))
        | Err(Error::AuthError(AuthError::UserNotInDatabase(_))) => Ok(None),
        Err(err) => Err(err),
    }
}
