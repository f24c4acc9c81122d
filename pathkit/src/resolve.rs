//! Conversion between absolute and relative paths.

use crate::canonicalize::canonicalize;
use crate::error::{Error, Result};
use crate::parse;
use crate::util;

/// Turn a relative path into an absolute one.
///
/// An already absolute `path` is returned canonicalized, ignoring `base`.
/// Otherwise `path` is glued behind `base` (trailing separators trimmed)
/// and the whole canonicalized, with `base`'s scheme carried over.
///
/// # Errors
///
/// Returns [`Error::NotAbsolute`] when `base` is not an absolute path.
///
/// # Examples
///
/// ```
/// use pathkit::to_absolute;
///
/// assert_eq!(to_absolute("css/../style.css", "/node/site").unwrap(), "/node/site/style.css");
/// assert_eq!(to_absolute("/etc/motd", "/node/site").unwrap(), "/etc/motd");
/// assert!(to_absolute("style.css", "node/site").is_err());
/// ```
pub fn to_absolute(path: &str, base: &str) -> Result<String> {
    if !parse::is_absolute(base) {
        return Err(Error::NotAbsolute {
            base: base.to_string(),
        });
    }

    if parse::is_absolute(path) {
        return Ok(canonicalize(path));
    }

    let (scheme, base_rest) = parse::detach_scheme(base);
    let scheme = scheme.unwrap_or("");
    let glued = format!("{}/{path}", util::trim_end_any(base_rest, "/\\"));

    Ok(format!("{scheme}{}", canonicalize(&glued)))
}

/// Turn a path into a path relative to `base`.
///
/// Both arguments are canonicalized and split into anchor (scheme plus
/// root) and rest. A relative `path` under an absolute `base` is
/// considered already resolved and is returned as-is. Otherwise the two
/// rests are walked in lockstep: shared leading segments are consumed,
/// every remaining base segment becomes one `..`, and the leftover path
/// segments follow. Once the walk hits a mismatch it never re-matches,
/// even if later segments happen to coincide.
///
/// # Errors
///
/// Returns [`Error::MissingBase`] when `path` is anchored but `base` is
/// not, and [`Error::RootMismatch`] when both are anchored differently.
///
/// # Examples
///
/// ```
/// use pathkit::to_relative;
///
/// assert_eq!(
///     to_relative("/node/site/../css/style.css", "/node/site").unwrap(),
///     "../css/style.css"
/// );
/// assert_eq!(to_relative("/base/path/sub", "/base/path").unwrap(), "sub");
/// assert!(to_relative("/node", "C:/node").is_err());
/// ```
pub fn to_relative(path: &str, base: &str) -> Result<String> {
    let canonical_path = canonicalize(path);
    let canonical_base = canonicalize(base);

    let path_parts = parse::parse(&canonical_path);
    let base_parts = parse::parse(&canonical_base);
    let anchor = path_parts.anchor();
    let base_anchor = base_parts.anchor();

    // A relative path under an absolute base is taken as already
    // resolved against it.
    if anchor.is_empty() && !base_anchor.is_empty() {
        log::debug!("'{path}' is already relative; base '{base}' ignored");

        if base_parts.rest.is_empty() {
            return Ok(util::trim_start_any(path_parts.rest, "./\\").to_string());
        }
        return Ok(path_parts.rest.to_string());
    }

    if !anchor.is_empty() && base_anchor.is_empty() {
        return Err(Error::MissingBase {
            path: path.to_string(),
            base: base.to_string(),
        });
    }

    if !base_anchor.is_empty() && anchor != base_anchor {
        return Err(Error::RootMismatch {
            path: path.to_string(),
            base: base.to_string(),
        });
    }

    if base_parts.rest.is_empty() {
        return Ok(path_parts.rest.to_string());
    }

    let segments: Vec<&str> = path_parts.rest.split('/').collect();
    let base_segments: Vec<&str> = base_parts.rest.split('/').collect();

    // Count the shared leading run; everything after it mismatches for
    // good, so one ".." per leftover base segment points back to the
    // fork and the leftover path segments lead down from there.
    let mut matched = 0;
    while matched < base_segments.len() && segments.get(matched) == Some(&base_segments[matched]) {
        matched += 1;
    }

    let mut relative = "../".repeat(base_segments.len() - matched);
    relative.push_str(&segments[matched..].join("/"));

    Ok(util::trim_end_any(&relative, "/").to_string())
}
