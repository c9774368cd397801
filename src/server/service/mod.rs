//! Service layer for business rules and transactions.
//!
//! Services validate input, coordinate repositories and translate datastore failures into
//! domain errors. Writes spanning several rows share one transaction so that a failure
//! leaves no partial state behind.

pub mod ingredient;
pub mod recipe;
pub mod relation;
pub mod shopping_list;
pub mod subscription;
pub mod user;
