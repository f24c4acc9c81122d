//! Error types for the pathkit library.
//!
//! This module provides the error taxonomy for all path operations,
//! using `thiserror` for ergonomic error handling. Operations that cannot
//! fail return their values directly and do not appear here.

use thiserror::Error;

/// Result type alias for operations that may fail with a pathkit error.
///
/// # Examples
///
/// ```
/// use pathkit::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok(String::from("/templates"))
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pathkit library.
///
/// Every variant represents a caller contract violation; the library holds
/// no state, so a failed operation has no effect beyond the returned error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An operation that requires a non-empty path was given `""`.
    #[error("empty path")]
    EmptyPath,

    /// A segment index was outside the valid range.
    #[error("segment index {index} out of bounds for path with {count} segment(s)")]
    IndexOutOfBounds {
        /// The requested segment index.
        index: usize,
        /// The number of segments the path actually has.
        count: usize,
    },

    /// A base path that must be absolute was relative.
    #[error("base path '{base}' is not absolute")]
    NotAbsolute {
        /// The offending base path.
        base: String,
    },

    /// Two paths could not be related because their roots differ.
    #[error("cannot relate '{path}' to '{base}': the paths belong to different roots")]
    RootMismatch {
        /// The path being converted.
        path: String,
        /// The base path it was compared against.
        base: String,
    },

    /// An absolute path was given a relative base to resolve against.
    #[error("cannot make absolute path '{path}' relative to non-absolute base '{base}'")]
    MissingBase {
        /// The absolute path being converted.
        path: String,
        /// The relative base path that was rejected.
        base: String,
    },
}

impl Error {
    /// Check if the error indicates two paths with incompatible roots.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::Error;
    ///
    /// let err = Error::RootMismatch {
    ///     path: String::from("C:/site"),
    ///     base: String::from("/site"),
    /// };
    /// assert!(err.is_root_mismatch());
    /// ```
    #[must_use]
    pub fn is_root_mismatch(&self) -> bool {
        matches!(self, Self::RootMismatch { .. })
    }

    /// Check if the error indicates an out-of-bounds segment index.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::Error;
    ///
    /// let err = Error::IndexOutOfBounds { index: 7, count: 3 };
    /// assert!(err.is_out_of_bounds());
    /// ```
    #[must_use]
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, Self::IndexOutOfBounds { .. })
    }
}
