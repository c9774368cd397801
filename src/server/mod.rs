//! Server application core modules.
//!
//! This module contains all server-side functionality for the Larder application, including
//! HTTP routing, session handling, database operations and the recipe domain services. It
//! provides the backend for publishing recipes, keeping favorites and shopping carts,
//! subscribing to authors and downloading the aggregated shopping list.

#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
