//! HTTP controller endpoints for the Larder web API.
//!
//! This module contains Axum handlers for the ingredient catalog, recipes, favorites,
//! shopping carts, subscriptions and users. Controllers resolve the current user from the
//! session, call into the services and map results onto HTTP responses. Each handler is
//! annotated with utoipa for the OpenAPI document.

pub mod ingredient;
pub mod recipe;
pub mod relation;
pub mod shopping_list;
pub mod subscription;
pub mod user;
pub mod util;
