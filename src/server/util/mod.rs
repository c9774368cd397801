//! Utility functions and helpers for server operations.
//!
//! This module provides reusable helpers shared by repositories and services: ingredient
//! name normalization, classification of datastore constraint errors and validation of
//! user-supplied text fields.

pub mod db;
pub mod name;
pub mod validate;
