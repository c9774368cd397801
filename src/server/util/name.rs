//! Ingredient name normalization.

/// Normalizes an ingredient name for storage and comparison.
///
/// Runs of whitespace collapse to a single space, leading and trailing whitespace is removed
/// and the result is lowercased. Two names refer to the same ingredient exactly when their
/// normalized forms are equal, so `"  Sea   Salt "` and `"sea salt"` collide.
///
/// # Example
/// ```ignore
/// assert_eq!(normalize_ingredient_name("  Sea   SALT "), "sea salt");
/// ```
pub fn normalize_ingredient_name(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
