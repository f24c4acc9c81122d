#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathkit
//!
//! A library for manipulating textual paths.
//!
//! Paths here are plain strings: the filesystem is never touched, so the
//! operations work the same for paths that do not exist, on any platform,
//! and for URIs such as `file:///node/site`. Both `/` and `\` are
//! understood as separators on input; output always uses `/`. POSIX roots
//! (`/`), Windows drive roots (`C:/`, `C:\`, bare `C:`), and scheme
//! prefixes (`file://`, `http://`) are recognized everywhere.
//!
//! ## Core Types
//!
//! - [`Root`]: The detected anchor of a path
//! - [`Error`] and [`Result`]: Error handling types
//!
//! ## Examples
//!
//! ```
//! use pathkit::{join, to_relative, to_uri};
//!
//! // Fragments are glued and the result canonicalized
//! let path = join(&["/node", "site", "..", "css/style.css"]);
//! assert_eq!(path, "/node/css/style.css");
//!
//! // Paths can be related to a base
//! let relative = to_relative(&path, "/node/site").unwrap();
//! assert_eq!(relative, "../css/style.css");
//!
//! // And expressed as URIs
//! assert_eq!(to_uri(&path), "file:///node/css/style.css");
//! ```

pub mod canonicalize;
pub mod ending;
pub mod error;
pub mod join;
pub mod name;
pub mod parse;
pub mod relationship;
pub mod resolve;
pub mod segment;
pub mod uri;
mod util;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export the operations at crate root for convenience
pub use canonicalize::{canonicalize, normalize};
pub use ending::{ensure_directory_ending, has_directory_ending, remove_directory_ending};
pub use error::{Error, Result};
pub use join::join;
pub use name::{
    directory, extension, file_name, has_extension, has_extension_in, replace_extension,
};
pub use parse::{is_absolute, is_relative, root, split, Root};
pub use relationship::{common_path, common_prefix, is_base_path};
pub use resolve::{to_absolute, to_relative};
pub use segment::{for_each_segment, segment, segment_count};
pub use uri::{from_uri, is_local, to_uri};
