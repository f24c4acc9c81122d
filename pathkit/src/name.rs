//! Filename, directory, and extension access.

use crate::canonicalize::canonicalize;
use crate::parse;
use crate::util;

/// Return the directory name of a path.
///
/// The path is canonicalized first. Cutting at the last separator keeps
/// the scheme and never truncates a root: the directory of `/style.css`
/// is `/`, and the directory of `C:/style.css` is `C:/`. A path without
/// any separator has no directory and yields `""`.
///
/// # Examples
///
/// ```
/// use pathkit::directory;
///
/// assert_eq!(directory("/node/site/style.css"), "/node/site");
/// assert_eq!(directory("/style.css"), "/");
/// assert_eq!(directory("C:/style.css"), "C:/");
/// assert_eq!(directory("style.css"), "");
/// ```
#[must_use]
pub fn directory(path: &str) -> String {
    if path.is_empty() {
        return String::new();
    }

    let canonical = canonicalize(path);
    let (scheme, rest) = parse::detach_scheme(&canonical);
    let scheme = scheme.unwrap_or("");

    match rest.rfind('/') {
        None => String::new(),
        Some(0) => format!("{scheme}/"),
        Some(2) if util::drive_prefixed(rest) => format!("{scheme}{}", &rest[..3]),
        Some(pos) => format!("{scheme}{}", &rest[..pos]),
    }
}

/// Return the filename of a path.
///
/// Works on the raw path: one trailing separator is ignored, everything
/// up to the last separator is dropped.
///
/// # Examples
///
/// ```
/// use pathkit::file_name;
///
/// assert_eq!(file_name("/node/site/style.css"), "style.css");
/// assert_eq!(file_name("/node/site/"), "site");
/// assert_eq!(file_name(""), "");
/// ```
#[must_use]
pub fn file_name(path: &str) -> String {
    util::basename(path, None).to_string()
}

/// Return the extension of a path.
///
/// The extension is everything after the last `.` anywhere in the path,
/// not just within the final segment, so `extension("/node.d/site")` is
/// `"d/site"`. No dot means no extension.
///
/// # Examples
///
/// ```
/// use pathkit::extension;
///
/// assert_eq!(extension("/node/site.css"), "css");
/// assert_eq!(extension("/node/site"), "");
/// assert_eq!(extension("archive.tar.gz"), "gz");
/// ```
#[must_use]
pub fn extension(path: &str) -> String {
    match path.rfind('.') {
        Some(pos) => path[pos + 1..].to_string(),
        None => String::new(),
    }
}

/// True if a path has an extension.
///
/// # Examples
///
/// ```
/// use pathkit::has_extension;
///
/// assert!(has_extension("/node/site.css"));
/// assert!(!has_extension("/node/site"));
/// ```
#[must_use]
pub fn has_extension(path: &str) -> bool {
    !extension(path).is_empty()
}

/// True if a path's extension is one of `extensions`.
///
/// Leading dots on the filter entries are ignored, so `"css"` and
/// `".css"` filter alike. An empty filter behaves like
/// [`has_extension`]. The comparison is case-sensitive.
///
/// # Examples
///
/// ```
/// use pathkit::has_extension_in;
///
/// assert!(has_extension_in("/node/site.css", &["css", "sass"]));
/// assert!(has_extension_in("/node/site.css", &[".css"]));
/// assert!(!has_extension_in("/node/site.css", &["js"]));
/// ```
#[must_use]
pub fn has_extension_in<S: AsRef<str>>(path: &str, extensions: &[S]) -> bool {
    if path.is_empty() {
        return false;
    }

    if extensions.is_empty() {
        return has_extension(path);
    }

    let actual = extension(path);
    extensions
        .iter()
        .any(|ext| util::trim_start_any(ext.as_ref(), ".") == actual)
}

/// Replace the extension of a path.
///
/// Leading dots on `ext` are ignored. A path ending in `/` names a
/// directory and is returned unchanged; a path without an extension has
/// `ext` appended behind a dot.
///
/// # Examples
///
/// ```
/// use pathkit::replace_extension;
///
/// assert_eq!(replace_extension("/node/site/style.css", "sass"), "/node/site/style.sass");
/// assert_eq!(replace_extension("/node/site/style.css", ".sass"), "/node/site/style.sass");
/// assert_eq!(replace_extension("/node/readme", "md"), "/node/readme.md");
/// assert_eq!(replace_extension("/node/site/", "css"), "/node/site/");
/// ```
#[must_use]
pub fn replace_extension(path: &str, ext: &str) -> String {
    if path.is_empty() {
        return String::new();
    }

    let actual = extension(path);
    let ext = util::trim_start_any(ext, ".");

    // Directories have no extension to replace.
    if path.ends_with('/') {
        return path.to_string();
    }

    if actual.is_empty() {
        let dot = if path.ends_with('.') { "" } else { "." };
        return format!("{path}{dot}{ext}");
    }

    format!("{}{ext}", &path[..path.len() - actual.len()])
}
