//! Separator normalization and canonicalization.
//!
//! Canonicalization folds the segments of a path left to right:
//! empty and `.` segments are dropped, `..` pops the segment before it,
//! and an unpoppable `..` survives only in paths with no scheme and no
//! root. The scheme and root themselves pass through untouched.

use crate::parse;

/// Convert every backslash in a path to a forward slash.
///
/// This is the only separator handling in the library; nothing else ever
/// inspects the platform.
///
/// # Examples
///
/// ```
/// use pathkit::normalize;
///
/// assert_eq!(normalize("C:\\user\\docs\\Letter.txt"), "C:/user/docs/Letter.txt");
/// assert_eq!(normalize("/already/forward"), "/already/forward");
/// ```
#[must_use]
pub fn normalize(path: &str) -> String {
    path.replace('\\', "/")
}

/// Canonicalize a path.
///
/// Normalizes separators, then resolves `.` and `..` segments against the
/// path's own structure. No filesystem access takes place, so a `..` that
/// would climb out of an anchored path is silently discarded, and a
/// leading `..` in an unanchored path is preserved.
///
/// Canonicalization is idempotent.
///
/// # Examples
///
/// ```
/// use pathkit::canonicalize;
///
/// assert_eq!(canonicalize("/node/site/../css/style.css"), "/node/css/style.css");
/// assert_eq!(canonicalize("\\node\\site\\..\\css\\style.css"), "/node/css/style.css");
/// assert_eq!(canonicalize("a/./b//c"), "a/b/c");
/// assert_eq!(canonicalize("../outside"), "../outside");
/// assert_eq!(canonicalize("/.."), "/");
/// ```
#[must_use]
pub fn canonicalize(path: &str) -> String {
    if path.is_empty() {
        return String::new();
    }

    let normalized = normalize(path);
    let parsed = parse::parse(&normalized);
    let anchored = parsed.is_anchored();

    let mut canonical: Vec<&str> = Vec::new();

    for part in parsed.rest.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }

        if part == ".." && matches!(canonical.last(), Some(&last) if last != "..") {
            canonical.pop();
            continue;
        }

        if part != ".." || !anchored {
            canonical.push(part);
        }
    }

    format!("{}{}", parsed.anchor(), canonical.join("/"))
}
