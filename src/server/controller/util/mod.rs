//! Helpers shared by the controllers.
//!
//! Resolves the user behind a request's session, either requiring one for endpoints that
//! act on the user's own data or accepting anonymous callers on read-only endpoints.

pub mod get_user;
