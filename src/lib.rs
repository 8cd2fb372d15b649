//! # edilex
//!
//! A tokenizing/escaping engine for flat-file EDI interchanges: EDIFACT,
//! TRADACOMS, and ANSI X12.
//!
//! ## What it does
//!
//! EDI messages are flat, delimiter-separated text. This library detects
//! the dialect and its special characters from the first bytes of the
//! input, splits the text into segments → data elements → components while
//! respecting escape sequences of arbitrary run length, coerces each
//! component into a typed scalar (null, integer, or string), and
//! serializes the structure back to byte-exact EDI text.
//!
//! ## Key Features
//!
//! - **Three dialects**: EDIFACT (`UNA`/`UNB`), TRADACOMS (`STX`), and
//!   ANSI X12 (`ISA`), with per-dialect delimiter detection
//! - **Correct escaping**: the even/odd escape-run ambiguity is resolved
//!   with a single linear scan, not lookbehind tricks
//! - **Typed components**: canonical integers become integers (arbitrary
//!   precision via `BigInt`), everything else stays text
//! - **Round-trip**: `parse(serialize(s)) == s` for quirk-free structures
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! edilex = "0.1"
//! ```
//!
//! ### Parsing
//!
//! ```rust
//! use edilex::{edi, parse};
//!
//! let segments = parse("UNB+IATB:1+6XPPC+LHPPC+940101:0950+1'").unwrap();
//!
//! assert_eq!(
//!     segments,
//!     edi![["UNB", ["IATB", 1], ["6XPPC"], ["LHPPC"], [940101, "0950"], [1]]]
//! );
//! ```
//!
//! ### Serializing
//!
//! ```rust
//! use edilex::{edi, serialize};
//!
//! let segments = edi![["LIN", [1], [1], ["0764569104", "IB"]]];
//! assert_eq!(serialize(&segments), "UNA:+.? 'LIN+1+1+0764569104:IB'");
//! ```
//!
//! ### Probing delimiters
//!
//! ```rust
//! use edilex::special_characters;
//!
//! let chars = special_characters("UNA!^,\\ ~").unwrap();
//! assert_eq!(chars.element_separator, '^');
//! assert_eq!(chars.escape_character, Some('\\'));
//! ```
//!
//! ## Error Model
//!
//! The engine validates exactly one thing: that the input begins with a
//! known dialect tag (`UNA`, `UNB`, `STX`, or `ISA`); anything else is
//! [`Error::UnrecognizedFormat`]. A recognized `UNA`/`ISA` header too short
//! for its fixed-width delimiter table fails with
//! [`Error::TruncatedHeader`]. Garbage *bodies* of a recognized dialect are
//! not rejected — schema validation is out of scope.
//!
//! ## Concurrency
//!
//! Every parse and serialize call is pure and self-contained: no shared
//! state, no I/O beyond the explicit file/reader wrappers. Calls are safe
//! to issue concurrently without any locking.
//!
//! ## Format Notes
//!
//! See the [`spec`] module for a description of the three wire formats.

pub mod chars;
pub mod detect;
pub mod error;
pub mod macros;
pub mod options;
pub mod parser;
pub mod ser;
pub mod spec;
pub mod value;

pub use chars::{Dialect, SpecialCharacters};
pub use error::{Error, Result};
pub use options::SerializeOptions;
pub use parser::Parser;
pub use value::{Element, Segment, Value};

use std::io;
use std::path::Path;

/// Parses an EDI interchange into segments.
///
/// Detects the dialect and special characters from the start of the input,
/// then splits and coerces the body. Line breaks in EDIFACT/TRADACOMS
/// input are ignored; an ANSI X12 segment separator may itself be a
/// newline.
///
/// # Examples
///
/// ```rust
/// use edilex::{edi, parse};
///
/// let segments = parse("UNB+1'LIN+1+1+0764569104:IB'QTY+1:25'").unwrap();
/// assert_eq!(
///     segments,
///     edi![["UNB", [1]], ["LIN", [1], [1], ["0764569104", "IB"]], ["QTY", [1, 25]]]
/// );
/// ```
///
/// # Errors
///
/// [`Error::UnrecognizedFormat`] if the input begins with none of `UNA`,
/// `UNB`, `STX`, or `ISA`; [`Error::TruncatedHeader`] if a recognized
/// delimiter header is too short.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse(input: &str) -> Result<Vec<Segment>> {
    // Fold line breaks before detection so a wrapped UNA header still
    // yields its delimiters. X12 input is exempt: its segment separator
    // may itself be a newline.
    if input.get(..3) == Some("ISA") {
        let chars = detect::detect(input)?;
        return Ok(Parser::new(chars).parse(input));
    }
    let folded = parser::fold_line_breaks(input);
    let chars = detect::detect(&folded)?;
    Ok(Parser::new(chars).parse(&folded))
}

/// Parses an EDI interchange read from a file.
///
/// # Errors
///
/// [`Error::Io`] if the file cannot be read, otherwise as [`parse`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Vec<Segment>> {
    let contents = std::fs::read_to_string(path).map_err(|e| Error::io(&e.to_string()))?;
    parse(&contents)
}

/// Parses an EDI interchange from an I/O stream.
///
/// # Examples
///
/// ```rust
/// use edilex::parse_reader;
/// use std::io::Cursor;
///
/// let segments = parse_reader(Cursor::new(b"QTY+1'" as &[u8]));
/// assert!(segments.is_err()); // no dialect tag
///
/// let segments = parse_reader(Cursor::new(b"UNB+1'" as &[u8])).unwrap();
/// assert_eq!(segments.len(), 1);
/// ```
///
/// # Errors
///
/// [`Error::Io`] if reading fails, otherwise as [`parse`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_reader<R: io::Read>(mut reader: R) -> Result<Vec<Segment>> {
    let mut contents = String::new();
    reader
        .read_to_string(&mut contents)
        .map_err(|e| Error::io(&e.to_string()))?;
    parse(&contents)
}

/// Parses an EDI interchange from bytes.
///
/// # Errors
///
/// [`Error::Io`] if the bytes are not valid UTF-8, otherwise as [`parse`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_slice(input: &[u8]) -> Result<Vec<Segment>> {
    let text = std::str::from_utf8(input).map_err(|e| Error::io(&e.to_string()))?;
    parse(text)
}

/// Returns the special-character table a header fragment declares, without
/// parsing a body.
///
/// Empty input and fragments with no recognizable dialect tag both yield
/// the EDIFACT defaults; recognized fragments yield the table [`parse`]
/// would use (`UNA`/`ISA` overrides included).
///
/// # Examples
///
/// ```rust
/// use edilex::{special_characters, SpecialCharacters};
///
/// assert_eq!(special_characters("").unwrap(), SpecialCharacters::default());
///
/// let chars = special_characters("UNA!^,\\ ~").unwrap();
/// assert_eq!(chars.component_separator, '!');
/// assert_eq!(chars.segment_separator, '~');
/// ```
///
/// # Errors
///
/// [`Error::TruncatedHeader`] if a `UNA`/`ISA` fragment is too short to
/// hold its delimiter table.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn special_characters(header: &str) -> Result<SpecialCharacters> {
    match detect::detect(header) {
        Err(Error::UnrecognizedFormat) => Ok(SpecialCharacters::edifact()),
        other => other,
    }
}

/// Serializes segments to EDI text with the canonical EDIFACT character
/// set, prefixed by the `UNA` service header.
///
/// # Examples
///
/// ```rust
/// use edilex::{edi, serialize};
///
/// let segments = edi![["QTY", [1, 25]]];
/// assert_eq!(serialize(&segments), "UNA:+.? 'QTY+1:25'");
/// ```
#[must_use]
pub fn serialize(segments: &[Segment]) -> String {
    serialize_with_options(segments, &SerializeOptions::default())
}

/// Serializes segments to EDI text with custom options.
///
/// # Examples
///
/// ```rust
/// use edilex::{edi, serialize_with_options, SerializeOptions};
///
/// let segments = edi![["QTY", [1, 25]]];
/// let options = SerializeOptions::new().with_service_header(false);
/// assert_eq!(serialize_with_options(&segments, &options), "QTY+1:25'");
/// ```
#[must_use]
pub fn serialize_with_options(segments: &[Segment], options: &SerializeOptions) -> String {
    ser::serialize_segments(segments, options)
}
