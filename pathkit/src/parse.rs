//! Scheme and root detection.
//!
//! Every path decomposes into an optional scheme (everything up to and
//! including the first `://`), a [`Root`], and the rest. The decomposition
//! is computed in a single pass by [`parse`] and threaded through the
//! higher-level operations instead of being re-derived at each call site.
//!
//! Root detection accepts both separators: `/x`, `\x`, `C:/x`, `C:\x`, and
//! the bare drive `C:` are all absolute. Rendered roots always use the
//! forward-slash form (`/` or `C:/`).

use std::fmt;

use crate::util;

/// The absolute anchor of a path, if any.
///
/// # Examples
///
/// ```
/// use pathkit::Root;
///
/// assert!(Root::Posix.is_absolute());
/// assert!(Root::Drive('C').is_absolute());
/// assert!(!Root::Relative.is_absolute());
///
/// assert_eq!(Root::Drive('c').to_string(), "c:/");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Root {
    /// No anchor; the path is relative.
    Relative,
    /// A POSIX root: the path starts with `/` or `\`.
    Posix,
    /// A drive-letter root such as `C:/`, `C:\`, or the bare `C:`.
    ///
    /// The letter keeps the case it had in the input.
    Drive(char),
}

impl Root {
    /// True for any variant other than [`Root::Relative`].
    #[must_use]
    pub fn is_absolute(self) -> bool {
        !matches!(self, Self::Relative)
    }
}

impl fmt::Display for Root {
    /// Renders the textual root form; `Relative` renders as the empty string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Relative => Ok(()),
            Self::Posix => write!(f, "/"),
            Self::Drive(letter) => write!(f, "{letter}:/"),
        }
    }
}

/// A path decomposed into scheme, root, and rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Parsed<'a> {
    /// The scheme including its `://` separator, if present.
    pub scheme: Option<&'a str>,
    /// The detected root.
    pub root: Root,
    /// Everything after the scheme and root, unmodified.
    pub rest: &'a str,
}

impl Parsed<'_> {
    /// Scheme and rendered root rejoined; the first half of [`split`].
    pub fn anchor(&self) -> String {
        format!("{}{}", self.scheme.unwrap_or(""), self.root)
    }

    /// True when the path carries a scheme or a root.
    ///
    /// Canonicalization drops unresolvable `..` segments from anchored
    /// paths and keeps them otherwise.
    pub fn is_anchored(&self) -> bool {
        self.scheme.is_some() || self.root.is_absolute()
    }
}

/// Split `path` at the first `://`, if any.
///
/// The scheme half keeps the `://` separator. The content before the
/// separator is not validated; locality checks live elsewhere.
pub(crate) fn detach_scheme(path: &str) -> (Option<&str>, &str) {
    match path.find("://") {
        Some(pos) => (Some(&path[..pos + 3]), &path[pos + 3..]),
        None => (None, path),
    }
}

/// Decompose `path` into scheme, root, and rest in one pass.
pub(crate) fn parse(path: &str) -> Parsed<'_> {
    let (scheme, rest) = detach_scheme(path);
    let bytes = rest.as_bytes();

    if !bytes.is_empty() && (bytes[0] == b'/' || bytes[0] == b'\\') {
        return Parsed {
            scheme,
            root: Root::Posix,
            rest: &rest[1..],
        };
    }

    if bytes.len() >= 2 && util::is_drive_letter(bytes[0] as char) && bytes[1] == b':' {
        let letter = bytes[0] as char;

        // Bare drive: "C:" is a root of its own.
        if bytes.len() == 2 {
            return Parsed {
                scheme,
                root: Root::Drive(letter),
                rest: "",
            };
        }

        if bytes[2] == b'/' || bytes[2] == b'\\' {
            return Parsed {
                scheme,
                root: Root::Drive(letter),
                rest: &rest[3..],
            };
        }
    }

    Parsed {
        scheme,
        root: Root::Relative,
        rest,
    }
}

/// Split a path into its anchor (scheme plus root) and the rest.
///
/// The anchor carries the scheme even when no root follows it, so
/// `"file://node"` splits into `("file://", "node")`. Empty input yields
/// `("", "")`.
///
/// # Examples
///
/// ```
/// use pathkit::split;
///
/// assert_eq!(split("C:/node"), ("C:/".to_string(), "node".to_string()));
/// assert_eq!(
///     split("file:///css/style.css"),
///     ("file:///".to_string(), "css/style.css".to_string())
/// );
/// assert_eq!(split("node/site"), (String::new(), "node/site".to_string()));
/// ```
#[must_use]
pub fn split(path: &str) -> (String, String) {
    let parsed = parse(path);
    (parsed.anchor(), parsed.rest.to_string())
}

/// Return the root of a path, scheme included.
///
/// A relative path has no root even when it carries a scheme, so the
/// result is either empty or ends with `/`.
///
/// # Examples
///
/// ```
/// use pathkit::root;
///
/// assert_eq!(root("/js/main.js"), "/");
/// assert_eq!(root("C:/css/style.css"), "C:/");
/// assert_eq!(root("file:///js/main.js"), "file:///");
/// assert_eq!(root("js/main.js"), "");
/// ```
#[must_use]
pub fn root(path: &str) -> String {
    let parsed = parse(path);

    if parsed.root.is_absolute() {
        parsed.anchor()
    } else {
        String::new()
    }
}

/// True if a given path is absolute.
///
/// The scheme is ignored; what counts is the remainder starting with a
/// separator or a drive root (`C:/`, `C:\`, or the bare `C:`).
///
/// # Examples
///
/// ```
/// use pathkit::is_absolute;
///
/// assert!(is_absolute("C:/css/style.css"));
/// assert!(is_absolute("/css/style.css"));
/// assert!(is_absolute("file:///css/style.css"));
/// assert!(!is_absolute("css/style.css"));
/// assert!(!is_absolute(""));
/// ```
#[must_use]
pub fn is_absolute(path: &str) -> bool {
    parse(path).root.is_absolute()
}

/// True if a given path is relative.
///
/// Exact negation of [`is_absolute`], so the empty path counts as
/// relative.
///
/// # Examples
///
/// ```
/// use pathkit::is_relative;
///
/// assert!(is_relative("node/site/style.css"));
/// assert!(!is_relative("/node/site/style.css"));
/// ```
#[must_use]
pub fn is_relative(path: &str) -> bool {
    !is_absolute(path)
}
