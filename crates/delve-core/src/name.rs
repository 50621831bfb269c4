//! Name comparison shared by items, enemies, and inventory entries.
//!
//! Both equality and mention checks fold case with [`str::to_lowercase`], so
//! two names are either the same everywhere or distinct everywhere.

/// Whether `a` and `b` name the same thing. Surrounding whitespace in `b` is
/// ignored.
pub fn same_name(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.trim().to_lowercase()
}

/// Whether `phrase` contains `name` as a case-insensitive substring.
///
/// An empty name is never mentioned.
pub fn mentions(phrase: &str, name: &str) -> bool {
    !name.is_empty() && phrase.to_lowercase().contains(&name.to_lowercase())
}
