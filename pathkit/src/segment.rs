//! Segment access.
//!
//! Segments are the `/`-delimited tokens of a path's canonical form after
//! the scheme has been detached. A rooted path contributes a leading empty
//! token, so `/node/site` has the segments `""`, `"node"`, `"site"` and
//! `getSegment`-style indexing counts from that empty token.

use crate::canonicalize::canonicalize;
use crate::error::{Error, Result};
use crate::parse;

/// Canonical scheme-free form shared by the segment operations.
fn canonical_rest(path: &str) -> String {
    let (_, rest) = parse::detach_scheme(path);
    canonicalize(rest)
}

/// Return the segment at position `idx`.
///
/// # Errors
///
/// Returns [`Error::EmptyPath`] for the empty path and
/// [`Error::IndexOutOfBounds`] when `idx` is not a valid position.
///
/// # Examples
///
/// ```
/// use pathkit::segment;
///
/// assert_eq!(segment("/node/site/main.js", 2).unwrap(), "site");
/// assert_eq!(segment("test/hello", 0).unwrap(), "test");
/// assert!(segment("/node", 5).is_err());
/// ```
pub fn segment(path: &str, idx: usize) -> Result<String> {
    if path.is_empty() {
        return Err(Error::EmptyPath);
    }

    let canonical = canonical_rest(path);
    let segments: Vec<&str> = canonical.split('/').collect();

    match segments.get(idx) {
        Some(found) => Ok((*found).to_string()),
        None => Err(Error::IndexOutOfBounds {
            index: idx,
            count: segments.len(),
        }),
    }
}

/// Return the number of segments in a path.
///
/// A path that canonicalizes to a bare root has no countable segments
/// and reports 0.
///
/// # Errors
///
/// Returns [`Error::EmptyPath`] for the empty path.
///
/// # Examples
///
/// ```
/// use pathkit::segment_count;
///
/// assert_eq!(segment_count("test/hello").unwrap(), 2);
/// assert_eq!(segment_count("/node/site").unwrap(), 3);
/// assert_eq!(segment_count("/").unwrap(), 0);
/// ```
pub fn segment_count(path: &str) -> Result<usize> {
    if path.is_empty() {
        return Err(Error::EmptyPath);
    }

    let canonical = canonical_rest(path);
    let segments: Vec<&str> = canonical.split('/').collect();

    if segments.iter().all(|segment| segment.is_empty()) {
        Ok(0)
    } else {
        Ok(segments.len())
    }
}

/// Invoke `visitor` once per canonical segment, in order.
///
/// Empty tokens produced by a bare root are visited too; this mirrors
/// the indexing of [`segment`] rather than the counting of
/// [`segment_count`].
///
/// # Examples
///
/// ```
/// use pathkit::for_each_segment;
///
/// let mut collected = Vec::new();
/// for_each_segment("/node/./site", |segment| collected.push(segment.to_string()));
/// assert_eq!(collected, ["", "node", "site"]);
/// ```
pub fn for_each_segment(path: &str, mut visitor: impl FnMut(&str)) {
    let canonical = canonical_rest(path);

    for segment in canonical.split('/') {
        visitor(segment);
    }
}
