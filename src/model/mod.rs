//! Request and response bodies exchanged with API consumers.

pub mod api;
pub mod ingredient;
pub mod recipe;
pub mod shopping;
pub mod user;
