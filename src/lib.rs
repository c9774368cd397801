//! Recipe sharing backend.
//!
//! Users publish recipes composed of catalog ingredients, favorite recipes, collect recipes
//! into a shopping cart, subscribe to other authors and download a consolidated shopping list.

pub mod model;
pub mod server;
