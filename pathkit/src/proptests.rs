//! Property-based tests for path manipulation.
//!
//! Note: The operation modules carry property tests next to their code.
//! This module focuses on laws that span more than one operation.

use crate::parse;
use crate::{
    canonicalize, ensure_directory_ending, for_each_segment, from_uri, has_directory_ending,
    is_absolute, is_base_path, is_relative, join, root, split, to_absolute, to_relative, to_uri,
};
use proptest::prelude::*;

// Strategy for generating path segments
fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,10}"
}

fn relative_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(segment_strategy(), 1..6).prop_map(|parts| parts.join("/"))
}

fn absolute_path_strategy() -> impl Strategy<Value = String> {
    relative_path_strategy().prop_map(|rest| format!("/{rest}"))
}

// Anchors and token soup with dots, empties, and both separators
fn messy_path_strategy() -> impl Strategy<Value = String> {
    let anchor = prop_oneof![
        Just(String::new()),
        Just("/".to_string()),
        Just("C:/".to_string()),
        Just("C:\\".to_string()),
        Just("file://".to_string()),
        Just("file:///".to_string()),
        Just("file://C:/".to_string()),
    ];
    let token = prop_oneof![
        segment_strategy(),
        Just(".".to_string()),
        Just("..".to_string()),
        Just(String::new()),
    ];
    let separator = prop_oneof![Just("/".to_string()), Just("\\".to_string())];

    (anchor, prop::collection::vec((token, separator), 0..6)).prop_map(|(anchor, parts)| {
        let mut path = anchor;
        for (token, separator) in parts {
            path.push_str(&token);
            path.push_str(&separator);
        }
        path
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Canonicalization is idempotent: canonicalize(canonicalize(p)) == canonicalize(p)
    #[test]
    fn canonicalization_idempotent(path in messy_path_strategy()) {
        let once = canonicalize(&path);
        let twice = canonicalize(&once);
        prop_assert_eq!(once, twice);
    }

    // Canonical output uses single forward slashes and has no "." tokens
    #[test]
    fn canonical_output_is_separator_clean(path in messy_path_strategy()) {
        let canonical = canonicalize(&path);
        let (_, rest) = parse::detach_scheme(&canonical);

        prop_assert!(!canonical.contains('\\'));
        prop_assert!(!rest.contains("//"));
        prop_assert!(!rest.split('/').any(|part| part == "."));
    }

    // The root of a path survives canonicalization
    #[test]
    fn root_survives_canonicalization(path in messy_path_strategy()) {
        prop_assert_eq!(root(&canonicalize(&path)), root(&path));
    }

    // Every path is either absolute or relative, never both
    #[test]
    fn absolute_and_relative_disagree(path in messy_path_strategy()) {
        prop_assert_ne!(is_absolute(&path), is_relative(&path));
    }

    // The two halves of split rejoin into the input for clean paths
    #[test]
    fn split_halves_rejoin(path in absolute_path_strategy()) {
        let (anchor, rest) = split(&path);
        prop_assert_eq!(format!("{anchor}{rest}"), path);
    }

    // Making a path relative to a base and absolute again round-trips
    #[test]
    fn relative_round_trip(path in absolute_path_strategy(), base in absolute_path_strategy()) {
        let relative = to_relative(&path, &base).unwrap();
        let restored = to_absolute(&relative, &base).unwrap();
        prop_assert_eq!(restored, canonicalize(&path));
    }

    // Absolute paths survive the URI round trip
    #[test]
    fn uri_round_trip(path in absolute_path_strategy()) {
        prop_assert_eq!(from_uri(&to_uri(&path)), canonicalize(&path));
    }

    // Joining fragments under an absolute base stays under that base
    #[test]
    fn joined_paths_stay_under_base(base in absolute_path_strategy(), tail in relative_path_strategy()) {
        let joined = join(&[base.clone(), tail]);
        prop_assert!(is_base_path(&base, &joined));
    }

    // Adding a directory ending is idempotent
    #[test]
    fn ensure_directory_ending_idempotent(path in messy_path_strategy()) {
        let once = ensure_directory_ending(&path);
        let twice = ensure_directory_ending(&once);
        prop_assert!(has_directory_ending(&once));
        prop_assert_eq!(once, twice);
    }

    // The segments of a clean absolute path rejoin into the path
    #[test]
    fn segments_rejoin(path in absolute_path_strategy()) {
        let mut collected = Vec::new();
        for_each_segment(&path, |segment| collected.push(segment.to_string()));
        prop_assert_eq!(collected.join("/"), path);
    }
}
