//! Conversion between paths and URIs.

use crate::canonicalize::canonicalize;
use crate::parse;
use crate::util;

/// Return the URI that represents a path.
///
/// The path is canonicalized first. A path that already carries a scheme
/// is returned as such, an empty path stays empty. Everything else is
/// prefixed with `file://`, gaining a leading `/` unless it already
/// starts with one or opens with a drive letter.
///
/// # Examples
///
/// ```
/// use pathkit::to_uri;
///
/// assert_eq!(to_uri("/node/site"), "file:///node/site");
/// assert_eq!(to_uri("css/style.css"), "file:///css/style.css");
/// assert_eq!(to_uri("C:\\node"), "file://C:/node");
/// assert_eq!(to_uri("http://example.com/bg.jpg"), "http://example.com/bg.jpg");
/// ```
#[must_use]
pub fn to_uri(path: &str) -> String {
    let canonical = canonicalize(path);

    if canonical.is_empty() || canonical.contains("://") {
        return canonical;
    }

    if canonical.starts_with('/') || util::drive_prefixed(&canonical) {
        format!("file://{canonical}")
    } else {
        format!("file:///{canonical}")
    }
}

/// Extract the path a URI addresses.
///
/// The URI is canonicalized and its scheme removed. Input without a
/// scheme passes through canonicalization only.
///
/// # Examples
///
/// ```
/// use pathkit::from_uri;
///
/// assert_eq!(from_uri("file:///node/site"), "/node/site");
/// assert_eq!(from_uri("file://C:/node"), "C:/node");
/// assert_eq!(from_uri("/node/site"), "/node/site");
/// ```
#[must_use]
pub fn from_uri(uri: &str) -> String {
    let canonical = canonicalize(uri);
    let (_, rest) = parse::detach_scheme(&canonical);
    rest.to_string()
}

/// True if a path points to a local resource.
///
/// Local means non-empty and without a scheme. The path is inspected
/// as given.
///
/// # Examples
///
/// ```
/// use pathkit::is_local;
///
/// assert!(is_local("/node/site"));
/// assert!(is_local("css/style.css"));
/// assert!(!is_local("http://example.com/bg.jpg"));
/// assert!(!is_local(""));
/// ```
#[must_use]
pub fn is_local(path: &str) -> bool {
    !path.is_empty() && !path.contains("://")
}
