//! String primitives shared by the path operations.
//!
//! These helpers know nothing about schemes or roots; they are plain
//! slicing over `&str`. Callers always pass explicit character sets.

/// True iff `ch` can serve as a drive letter.
///
/// Drive detection is ASCII-only: `C:` and `c:` are drives, `Ä:` is not.
pub(crate) const fn is_drive_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}

/// True when `s` opens with a drive letter and colon, separator or not.
pub(crate) fn drive_prefixed(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() >= 2 && is_drive_letter(bytes[0] as char) && bytes[1] == b':'
}

/// Remove a maximal run of characters drawn from `charset` from the start.
pub(crate) fn trim_start_any<'a>(s: &'a str, charset: &str) -> &'a str {
    s.trim_start_matches(|c| charset.contains(c))
}

/// Remove a maximal run of characters drawn from `charset` from the end.
pub(crate) fn trim_end_any<'a>(s: &'a str, charset: &str) -> &'a str {
    s.trim_end_matches(|c| charset.contains(c))
}

/// Extract the final component of `path`.
///
/// Strips at most one trailing separator, then everything up to and
/// including the last `/` or `\`. When `suffix` is given and the component
/// ends with it, the suffix is removed as well.
pub(crate) fn basename<'a>(path: &'a str, suffix: Option<&str>) -> &'a str {
    let mut b = path;

    if b.ends_with('/') || b.ends_with('\\') {
        b = &b[..b.len() - 1];
    }

    if let Some(pos) = b.rfind(|c| c == '/' || c == '\\') {
        b = &b[pos + 1..];
    }

    if let Some(suffix) = suffix {
        if let Some(stripped) = b.strip_suffix(suffix) {
            b = stripped;
        }
    }

    b
}
