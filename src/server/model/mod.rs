//! Server application models and type definitions.
//!
//! This module contains application state, database model type aliases and session data
//! structures. These models bridge database entities and HTTP handlers.

pub mod app;
pub mod db;
pub mod session;
