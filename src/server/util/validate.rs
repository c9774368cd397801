//! Validation of user-supplied text fields.

use crate::server::error::domain::DomainError;

/// Maximum length of names and usernames.
pub const MAX_NAME_LENGTH: usize = 150;

/// Maximum length of an email address.
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Maximum length of an ingredient name.
pub const MAX_INGREDIENT_NAME_LENGTH: usize = 128;

/// Maximum length of a measurement unit.
pub const MAX_UNIT_LENGTH: usize = 64;

/// Maximum length of a recipe name.
pub const MAX_RECIPE_NAME_LENGTH: usize = 256;

/// Trims `value` and checks it is neither blank nor longer than `max_len` characters.
///
/// # Returns
/// - `Ok(String)` - The trimmed value
/// - `Err(DomainError::InvalidField)` - Value is blank or too long
pub fn require_text(
    field: &'static str,
    value: &str,
    max_len: usize,
) -> Result<String, DomainError> {
    let value = value.trim();

    if value.is_empty() {
        return Err(DomainError::invalid_field(field, "must not be blank"));
    }

    if value.chars().count() > max_len {
        return Err(DomainError::invalid_field(
            field,
            format!("must be at most {} characters", max_len),
        ));
    }

    Ok(value.to_string())
}

/// Usernames are limited to letters, digits and `.@+-_`.
pub fn validate_username(username: &str) -> Result<String, DomainError> {
    let username = require_text("username", username, MAX_NAME_LENGTH)?;

    let valid = username
        .chars()
        .all(|c| c.is_alphanumeric() || matches!(c, '_' | '.' | '@' | '+' | '-'));

    if !valid {
        return Err(DomainError::invalid_field(
            "username",
            "may only contain letters, digits and .@+-_",
        ));
    }

    Ok(username)
}

/// Checks the address has a non-empty local part and domain separated by a single `@`.
pub fn validate_email(email: &str) -> Result<String, DomainError> {
    let email = require_text("email", email, MAX_EMAIL_LENGTH)?;

    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    };

    if !valid {
        return Err(DomainError::invalid_field("email", "is not a valid email address"));
    }

    Ok(email)
}
