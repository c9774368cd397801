//! Test configuration constants.

/// Public base URL used when building short links in tests.
pub static TEST_PUBLIC_URL: &str = "http://localhost:8080";
