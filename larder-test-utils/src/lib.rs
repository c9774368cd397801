//! Test utilities shared by the Larder unit and integration tests.
//!
//! Tests are set up in two phases: a [`TestBuilder`] declares the tables and fixtures a
//! test needs, then [`TestBuilder::build`] returns a [`TestContext`] backed by an in-memory
//! SQLite database and an in-memory session store.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{constant::TEST_PUBLIC_URL, TestBuilder, TestContext, TestError};
}
