//! Key escaping and step rendering

use std::borrow::Cow;

/// Substrings that carry meaning in the query grammar
///
/// `::ancestor` also covers `::ancestor-or-self`.
const SIGNIFICANT_TOKENS: [&str; 6] = ["..", "*", "::ancestor", "//", "[", "]"];

/// Whether `key` has to be wrapped in double quotes to stay re-queryable
#[inline]
#[must_use]
pub fn needs_quoting(key: &str) -> bool {
    SIGNIFICANT_TOKENS.iter().any(|token| key.contains(token))
}

/// Wraps `key` in double quotes when it contains a significant token
///
/// Double quotes inside the key are left as they are. A key such as
/// `a"]` therefore renders as `"a"]"`, which a reader can only split
/// heuristically. This is a known limitation of the path format.
#[must_use]
pub fn escape_key(key: &str) -> Cow<'_, str> {
    if needs_quoting(key) {
        Cow::Owned(format!("\"{key}\""))
    } else {
        Cow::Borrowed(key)
    }
}

/// Appends a mapping step for `key` to `path`
#[inline]
pub fn push_key(path: &mut String, key: &str) {
    path.push('/');
    if needs_quoting(key) {
        path.push('"');
        path.push_str(key);
        path.push('"');
    } else {
        path.push_str(key);
    }
}

/// Appends a sequence step for `index` to `path`
#[inline]
pub fn push_index(path: &mut String, index: usize) {
    path.push_str("/*[");
    path.push_str(&index.to_string());
    path.push(']');
}
