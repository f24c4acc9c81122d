//! Integration tests for canonicalization and path decomposition.
//!
//! This test suite verifies that:
//! - Canonicalization resolves dot segments against every root flavor
//! - Backslash input always comes out in forward-slash form
//! - Joining fragments and re-splitting the result agree
//! - Segment access, names, and extensions see the canonical shape
//! - Out-of-range segment access reports the offending index
//!
//! Every operation here is plain string manipulation. Nothing touches
//! the filesystem, so the expectations hold on any platform and for
//! paths that do not exist.

use pathkit::{
    canonicalize, directory, ensure_directory_ending, extension, file_name, for_each_segment,
    has_directory_ending, has_extension, has_extension_in, is_absolute, is_relative, join,
    remove_directory_ending, replace_extension, root, segment, segment_count, split, Error,
};

// =============================================================================
// Canonicalization
// =============================================================================

#[test]
fn test_canonicalize_resolves_dot_segments() {
    // Parent and current-directory segments fold away; the root stays.
    assert_eq!(
        canonicalize("/node/site/../css/style.css"),
        "/node/css/style.css"
    );
    assert_eq!(canonicalize("css/./../style.css"), "style.css");
}

#[test]
fn test_canonicalize_each_root_flavor() {
    // POSIX, drive, and scheme roots all anchor the path the same way.
    assert_eq!(canonicalize("/node/../css"), "/css");
    assert_eq!(canonicalize("C:/node/../css"), "C:/css");
    assert_eq!(canonicalize("C:\\node\\..\\css"), "C:/css");
    assert_eq!(canonicalize("file:///node/../css"), "file:///css");
}

#[test]
fn test_canonicalize_parent_cannot_escape_an_anchor() {
    // Under a root, or a bare scheme, ".." stops at the anchor instead
    // of climbing out of it.
    assert_eq!(canonicalize("/../../css"), "/css");
    assert_eq!(canonicalize("C:/../css"), "C:/css");
    assert_eq!(canonicalize("file://../css"), "file://css");
}

#[test]
fn test_canonicalize_keeps_leading_parents_when_relative() {
    // Without an anchor the leading ".." segments must survive; they
    // still mean something to a later to_absolute call.
    assert_eq!(canonicalize("../../css"), "../../css");
    assert_eq!(canonicalize("a/../../css"), "../css");
}

#[test]
fn test_canonical_output_feeds_every_other_operation() {
    // A messy path and its canonical form are interchangeable inputs.
    let messy = "C:\\node\\site\\..\\css\\style.css";
    let clean = canonicalize(messy);

    assert_eq!(clean, "C:/css/style.css");
    assert_eq!(directory(messy), directory(&clean));
    assert_eq!(root(messy), root(&clean));
    assert_eq!(
        segment_count(messy).unwrap(),
        segment_count(&clean).unwrap()
    );
}

// =============================================================================
// Joining
// =============================================================================

#[test]
fn test_join_builds_and_cleans() {
    assert_eq!(join(&["/node", "site", "style.css"]), "/node/site/style.css");
    assert_eq!(
        join(&["/node/", "/site/", "/style.css"]),
        "/node/site/style.css"
    );
    assert_eq!(join(&["/node", "..", "css"]), "/css");
}

#[test]
fn test_join_skips_empty_fragments() {
    assert_eq!(join(&["", "/node", "", "css"]), "/node/css");
    assert_eq!(join::<&str>(&[]), "");
}

#[test]
fn test_join_keeps_scheme_roots_intact() {
    // A seed ending in "://" keeps the next fragment's leading slash,
    // which is what forms the file:/// root.
    assert_eq!(join(&["file://", "/node", "/css"]), "file:///node/css");
    assert_eq!(join(&["file://node", "css"]), "file://node/css");
}

// =============================================================================
// Splitting and Roots
// =============================================================================

#[test]
fn test_split_and_root_agree() {
    for path in ["/css/style.css", "C:/css/style.css", "file:///css/style.css"] {
        let (anchor, rest) = split(path);
        assert_eq!(anchor, root(path), "anchor of {path:?}");
        assert_eq!(format!("{anchor}{rest}"), path, "rejoined {path:?}");
    }
}

#[test]
fn test_scheme_without_root_splits_but_has_no_root() {
    // The anchor side of split keeps a bare scheme, yet such a path has
    // no root and counts as relative.
    assert_eq!(
        split("file://css"),
        ("file://".to_string(), "css".to_string())
    );
    assert_eq!(root("file://css"), "");
    assert!(is_relative("file://css"));
}

#[test]
fn test_root_examples() {
    assert_eq!(root("C:/css/style.css"), "C:/");
    assert_eq!(root("/js/main.js"), "/");
    assert_eq!(root("js/main.js"), "");
}

#[test]
fn test_absolute_windows_forms() {
    // All three drive spellings count as absolute.
    assert!(is_absolute("C:"));
    assert!(is_absolute("C:/"));
    assert!(is_absolute("C:\\css"));
    // A colon without a separator is just a strange relative name.
    assert!(is_relative("C:css"));
}

// =============================================================================
// Segments
// =============================================================================

#[test]
fn test_segment_access_counts_the_root_slot() {
    // Rooted paths carry an empty first segment standing for the root.
    let path = "/node/site/main.js";
    assert_eq!(segment_count(path).unwrap(), 4);
    assert_eq!(segment(path, 0).unwrap(), "");
    assert_eq!(segment(path, 2).unwrap(), "site");
}

#[test]
fn test_segment_sees_canonical_shape() {
    // Dot segments are resolved before indexing.
    let path = "/node/site/../css/style.css";
    assert_eq!(segment_count(path).unwrap(), 4);
    assert_eq!(segment(path, 1).unwrap(), "node");
    assert_eq!(segment(path, 2).unwrap(), "css");
}

#[test]
fn test_for_each_segment_matches_indexed_access() {
    let path = "C:/node/site";
    let mut seen = Vec::new();
    for_each_segment(path, |part| seen.push(part.to_string()));

    assert_eq!(seen.len(), segment_count(path).unwrap());
    for (idx, part) in seen.iter().enumerate() {
        assert_eq!(segment(path, idx).unwrap(), *part);
    }
}

#[test]
fn test_segment_errors_name_the_problem() {
    assert_eq!(segment("", 0).unwrap_err(), Error::EmptyPath);

    let err = segment("/node/site", 9).unwrap_err();
    assert!(err.is_out_of_bounds());
    assert!(
        err.to_string().contains('9'),
        "message should carry the index: {err}"
    );
}

// =============================================================================
// Names and Extensions
// =============================================================================

#[test]
fn test_name_parts_of_a_file_path() {
    let path = "/node/site/style.css";

    assert_eq!(directory(path), "/node/site");
    assert_eq!(file_name(path), "style.css");
    assert_eq!(extension(path), "css");
}

#[test]
fn test_directory_stops_at_the_root() {
    assert_eq!(directory("/style.css"), "/");
    assert_eq!(directory("C:/style.css"), "C:/");
    assert_eq!(directory("file:///style.css"), "file:///");
}

#[test]
fn test_replace_extension_round_trip() {
    let sass = replace_extension("/node/site/style.css", "sass");
    assert_eq!(sass, "/node/site/style.sass");
    assert_eq!(extension(&sass), "sass");
    assert_eq!(replace_extension(&sass, ".css"), "/node/site/style.css");
}

#[test]
fn test_extension_scans_the_whole_path() {
    // The last dot wins even when it sits in a directory name, so a
    // dotted directory leaks into the reported extension.
    assert_eq!(extension("/node.d/site"), "d/site");
    assert!(has_extension("/node.d/site"));
}

#[test]
fn test_extension_filters() {
    let path = "/node/site/style.css";
    assert!(has_extension_in(path, &["css", "sass"]));
    assert!(has_extension_in(path, &[".css"]));
    assert!(!has_extension_in(path, &["js"]));
}

// =============================================================================
// Directory Endings
// =============================================================================

#[test]
fn test_directory_ending_round_trip() {
    let with = ensure_directory_ending("/node/site");
    assert_eq!(with, "/node/site/");
    assert!(has_directory_ending(&with));

    let without = remove_directory_ending(&with);
    assert_eq!(without, "/node/site");
    assert!(!has_directory_ending(&without));
}

#[test]
fn test_directory_ending_normalizes_backslashes() {
    assert_eq!(ensure_directory_ending("C:\\node"), "C:/node/");
    assert_eq!(remove_directory_ending("C:\\node\\"), "C:/node");
    // The predicate answers on the raw path.
    assert!(has_directory_ending("C:\\node\\"));
}
