//! Error types for the Larder server application.
//!
//! This module provides the error handling system with specialized error types for
//! configuration, authentication and recipe domain rules. All errors implement
//! `IntoResponse` for Axum HTTP responses and use `thiserror` for error definitions.
//! Every response body carries a stable machine-readable code alongside the message.

pub mod auth;
pub mod config;
pub mod domain;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, domain::DomainError},
};

/// Main error type for the Larder server application.
///
/// Aggregates the domain-specific error types and external library errors into a single
/// error type, with `#[from]` conversions so that `?` works across layers.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Authentication errors (session, ownership of a recipe)
/// - Domain errors (ingredient, recipe, relation and subscription rules)
/// - Datastore errors, surfaced unchanged and never retried by the core
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (no user in session, not the author of a recipe).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Violation of a recipe domain rule.
    #[error(transparent)]
    DomainError(#[from] DomainError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug in Larder's code.
    #[error("Internal error with Larder's code, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Datastore error, including aborted transactions.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// I/O error while binding or serving the HTTP listener.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl Error {
    /// Stable machine-readable code reported to API consumers.
    pub fn code(&self) -> &'static str {
        match self {
            Self::AuthError(err) => err.code(),
            Self::DomainError(err) => err.code(),
            Self::DbErr(_) => "transaction_aborted",
            _ => "internal_error",
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400/404/409 - Domain rule violations, see [`DomainError`]
/// - 401/403/404 - Authentication failures, see [`AuthError`]
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::DomainError(err) => err.into_response(),
            Self::DbErr(err) => {
                InternalServerError::with_code("transaction_aborted", err).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

#[cfg(test)]
impl From<Error> for larder_test_utils::TestError {
    fn from(err: Error) -> Self {
        Self::ServiceError(Box::new(err))
    }
}

/// Builds the JSON error body shared by every error response.
pub(crate) fn error_response(
    status: StatusCode,
    code: &str,
    message: impl Into<String>,
) -> Response {
    (
        status,
        Json(ErrorDto {
            code: code.to_string(),
            error: message.into(),
        }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E> InternalServerError<E> {
    /// Wraps an error whose 500 response should carry a specific error code.
    pub fn with_code(code: &'static str, err: E) -> CodedInternalServerError<E> {
        CodedInternalServerError { code, err }
    }
}

/// A 500 Internal Server Error carrying a specific error code.
pub struct CodedInternalServerError<E> {
    code: &'static str,
    err: E,
}

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        InternalServerError::with_code("internal_error", self.0).into_response()
    }
}

impl<E: std::fmt::Display> IntoResponse for CodedInternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!(code = self.code, "{}", self.err);

        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            self.code,
            "Internal server error",
        )
    }
}
