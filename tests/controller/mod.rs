//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with extractors built by hand, verifying status codes,
//! response bodies and error mapping without running an HTTP server.

mod ingredient;
mod recipe;
mod relation;
mod shopping_list;
mod subscription;
mod user;

use larder_test_utils::prelude::*;

use crate::util::{body_bytes, body_json, TestContextExt};
