//! Error types for EDI parsing and serialization.
//!
//! The engine is deliberately permissive: classifying the dialect from the
//! first three characters of the input is the only validation performed,
//! and [`Error::UnrecognizedFormat`] is the one error every caller must be
//! prepared to handle. Headers of a *recognized*
//! dialect that are too short to hold their fixed-position delimiter table
//! fail fast with [`Error::TruncatedHeader`] rather than reading out of
//! range.
//!
//! ## Examples
//!
//! ```rust
//! use edilex::{parse, Error};
//!
//! let result = parse("Hello there");
//! assert!(matches!(result, Err(Error::UnrecognizedFormat)));
//! ```

use crate::Dialect;
use thiserror::Error;

/// Represents all possible errors that can occur while parsing or
/// serializing EDI interchanges.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input does not begin with any known dialect tag.
    ///
    /// Raised when the first three characters match none of `UNA`, `UNB`,
    /// `STX`, or `ISA`. This is the contractual error of the engine: a
    /// malformed body of a recognized dialect is *not* rejected.
    #[error(
        "unrecognized EDI format; accepted formats: EDIFACT, TRADACOMS, ANSI X12 \
         (input must begin with UNA, UNB, STX, or ISA)"
    )]
    UnrecognizedFormat,

    /// A recognized delimiter header (`UNA` or `ISA`) is shorter than its
    /// fixed width, so the delimiter table cannot be read.
    #[error(
        "truncated {dialect} delimiter header: expected at least {expected} characters, found {found}"
    )]
    TruncatedHeader {
        dialect: Dialect,
        expected: usize,
        found: usize,
    },

    /// IO error while reading input in the file/reader wrappers.
    #[error("IO error: {0}")]
    Io(String),
}

impl Error {
    /// Creates a truncated-header error for a fixed-width header that came
    /// up short.
    pub fn truncated_header(dialect: Dialect, expected: usize, found: usize) -> Self {
        Error::TruncatedHeader {
            dialect,
            expected,
            found,
        }
    }

    /// Creates an I/O error for file/reader failures.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use edilex::Error;
    ///
    /// let err = Error::io("file not found");
    /// assert!(err.to_string().contains("file not found"));
    /// ```
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
