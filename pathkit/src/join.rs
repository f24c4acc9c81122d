//! Path joining.

use crate::canonicalize::canonicalize;
use crate::util;

/// Join path fragments into one canonical path.
///
/// Empty fragments are skipped. The first surviving fragment seeds the
/// result; each later fragment is appended behind exactly one separator,
/// with its own leading slashes stripped. When the seed carries a scheme
/// the next fragment keeps its leading slash, so `["file://", "/css"]`
/// joins to `file:///css` rather than the rootless `file://css`. The
/// joined result is canonicalized.
///
/// # Examples
///
/// ```
/// use pathkit::join;
///
/// assert_eq!(join(&["/path/to/test/", "/subdir"]), "/path/to/test/subdir");
/// assert_eq!(join(&["css", "..", "style.css"]), "style.css");
/// assert_eq!(join(&["file://", "/node/site"]), "file:///node/site");
/// assert_eq!(join::<&str>(&[]), "");
/// ```
#[must_use]
pub fn join<S: AsRef<str>>(paths: &[S]) -> String {
    let mut joined: Option<String> = None;
    let mut was_scheme = false;

    for path in paths {
        let path = path.as_ref();

        if path.is_empty() {
            continue;
        }

        if let Some(acc) = joined.as_mut() {
            if !acc.ends_with('/') && !acc.ends_with('\\') {
                acc.push('/');
            }

            if was_scheme {
                acc.push_str(path);
            } else {
                acc.push_str(util::trim_start_any(path, "/"));
            }
            was_scheme = false;
        } else {
            was_scheme = path.contains("://");
            joined = Some(path.to_string());
        }
    }

    match joined {
        Some(ref seeded) => canonicalize(seeded),
        None => String::new(),
    }
}
