//! Path containment and common-ancestor computation.
//!
//! Three ways of comparing paths live here:
//!
//! - [`is_base_path`] tests containment on canonical forms.
//! - [`common_prefix`] finds the longest shared character prefix; it is
//!   not path-aware and can cut in the middle of a segment.
//! - [`common_path`] finds the longest shared ancestor segment-wise,
//!   treating `.` as a separator alongside `/` and `\`.

use crate::canonicalize::canonicalize;
use crate::parse;
use crate::util;

/// True if `base` is a base path of `of`.
///
/// Both arguments are canonicalized, then compared as strings with a
/// separator appended so that `/base/path` is a base of itself and of
/// `/base/path/sub`, but not of `/base/pathology`.
///
/// # Examples
///
/// ```
/// use pathkit::is_base_path;
///
/// assert!(is_base_path("/base/path", "/base/path/sub"));
/// assert!(is_base_path("/base/path", "/base/path"));
/// assert!(!is_base_path("/base/path", "/base/pathology"));
/// assert!(!is_base_path("/base/path/sub", "/base/path"));
/// ```
#[must_use]
pub fn is_base_path(base: &str, of: &str) -> bool {
    let base = canonicalize(base);
    let of = canonicalize(of) + "/";

    of.starts_with(&format!("{}/", util::trim_end_any(&base, "/")))
}

/// Return the longest common character prefix of `paths`.
///
/// Purely lexicographic: the extremes of the sorted inputs bound every
/// other element, so only those two are compared. An empty slice yields
/// `""`.
///
/// # Examples
///
/// ```
/// use pathkit::common_prefix;
///
/// assert_eq!(common_prefix(&["foo", "foobar"]), "foo");
/// assert_eq!(common_prefix(&["/base/path/sub", "/base/path"]), "/base/path");
/// assert_eq!(common_prefix(&["abc", "xyz"]), "");
/// ```
#[must_use]
pub fn common_prefix<S: AsRef<str>>(paths: &[S]) -> String {
    let mut sorted: Vec<&str> = paths.iter().map(AsRef::as_ref).collect();
    sorted.sort_unstable();

    let (first, last) = match (sorted.first(), sorted.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return String::new(),
    };

    for ((pos, ch), other) in first.char_indices().zip(last.chars()) {
        if ch != other {
            return first[..pos].to_string();
        }
    }

    first.to_string()
}

/// Three-character drive form such as `C:/`.
fn drive_form(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(
        (chars.next(), chars.next(), chars.next(), chars.next()),
        (Some(_), Some(':'), Some(_), None)
    )
}

/// True for a scheme-only result: `…:///` or `…://C:/`.
fn scheme_root_form(s: &str) -> bool {
    if s.ends_with(":///") {
        return true;
    }

    let bytes = s.as_bytes();
    s.ends_with(":/")
        && bytes.len() >= 6
        && (bytes[bytes.len() - 3].is_ascii_alphanumeric() || bytes[bytes.len() - 3] == b'_')
        && s[..s.len() - 3].ends_with("://")
}

/// Shape the accumulated common tokens into the final answer.
fn finish(shared: &str, scheme: &str) -> String {
    let glued = format!("{scheme}{shared}");

    // Nothing but a root survived under the scheme; keep it verbatim.
    if scheme_root_form(&glued) {
        return glued;
    }

    if shared.is_empty() || drive_form(shared) {
        return shared.to_string();
    }

    if shared == "/" {
        format!("{scheme}/")
    } else {
        format!("{scheme}{}", &shared[..shared.len() - 1])
    }
}

/// Return the longest common base path of `paths`.
///
/// Each path is split on `/`, `\`, and `.`; the shared leading tokens are
/// rejoined with `/`. Schemes are stripped before splitting, and only the
/// last-seen scheme survives into the result. Dots in matched segments
/// therefore resurface as slashes. An empty slice yields `""`.
///
/// # Examples
///
/// ```
/// use pathkit::common_path;
///
/// assert_eq!(common_path(&["/base/path/sub", "/base/path"]), "/base/path");
/// assert_eq!(common_path(&["/base/sub1", "/base/sub2"]), "/base");
/// assert_eq!(common_path(&["/abc", "/xyz"]), "/");
/// ```
#[must_use]
pub fn common_path<S: AsRef<str>>(paths: &[S]) -> String {
    let mut token_lists: Vec<Vec<&str>> = Vec::with_capacity(paths.len());
    let mut scheme = "";

    for path in paths {
        let (found, rest) = parse::detach_scheme(path.as_ref());
        match found {
            Some(found) => {
                if !scheme.is_empty() && scheme != found {
                    log::debug!("mixed schemes in common_path; keeping last seen '{found}'");
                }
                scheme = found;
            }
            None => scheme = "",
        }
        token_lists.push(rest.split(|c| c == '/' || c == '\\' || c == '.').collect());
    }

    if token_lists.is_empty() {
        return String::new();
    }

    let mut shared = String::new();

    for (column, token) in token_lists[0].iter().enumerate() {
        let agreed = token_lists[1..]
            .iter()
            .all(|tokens| tokens.get(column) == Some(token));

        if !agreed {
            return finish(&shared, scheme);
        }

        shared.push_str(token);
        shared.push('/');
    }

    finish(&shared, scheme)
}
