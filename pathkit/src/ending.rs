//! Directory endings.
//!
//! A path that names a directory conventionally ends with a separator.
//! These helpers add, drop, and test that trailing slash on the
//! normalized form of a path.

use crate::canonicalize::normalize;

/// Append a trailing slash when one is missing.
///
/// The empty path becomes `/`.
///
/// # Examples
///
/// ```
/// use pathkit::ensure_directory_ending;
///
/// assert_eq!(ensure_directory_ending("/user/john"), "/user/john/");
/// assert_eq!(ensure_directory_ending("/user/john/"), "/user/john/");
/// assert_eq!(ensure_directory_ending(""), "/");
/// ```
#[must_use]
pub fn ensure_directory_ending(path: &str) -> String {
    if path.is_empty() {
        return "/".to_string();
    }

    let mut normalized = normalize(path);
    if !normalized.ends_with('/') {
        normalized.push('/');
    }
    normalized
}

/// Remove one trailing slash, if present.
///
/// Only a single separator is dropped; `a//` becomes `a/`.
///
/// # Examples
///
/// ```
/// use pathkit::remove_directory_ending;
///
/// assert_eq!(remove_directory_ending("/user/oss/"), "/user/oss");
/// assert_eq!(remove_directory_ending("/user/oss"), "/user/oss");
/// assert_eq!(remove_directory_ending(""), "");
/// ```
#[must_use]
pub fn remove_directory_ending(path: &str) -> String {
    if path.is_empty() {
        return String::new();
    }

    let mut normalized = normalize(path);
    if normalized.ends_with('/') {
        normalized.pop();
    }
    normalized
}

/// True when the path ends with a separator.
///
/// # Examples
///
/// ```
/// use pathkit::has_directory_ending;
///
/// assert!(has_directory_ending("/user/oss/"));
/// assert!(has_directory_ending("C:\\node\\"));
/// assert!(!has_directory_ending("/user/oss"));
/// assert!(!has_directory_ending(""));
/// ```
#[must_use]
pub fn has_directory_ending(path: &str) -> bool {
    path.ends_with('/') || path.ends_with('\\')
}
