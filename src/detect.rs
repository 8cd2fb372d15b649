//! Format detection: dialect classification and delimiter-header parsing.
//!
//! The first three characters of an interchange decide everything:
//!
//! | Prefix | Dialect | Delimiters |
//! |--------|---------|------------|
//! | `UNA`  | EDIFACT | read from the `UNA` service string advice |
//! | `UNB`  | EDIFACT | canonical defaults (`:` `+` `.` `?` `'`) |
//! | `STX`  | TRADACOMS | EDIFACT defaults, never overridden |
//! | `ISA`  | ANSI X12 | read from fixed offsets of the `ISA` header |
//!
//! Anything else fails with [`Error::UnrecognizedFormat`]. That prefix check
//! is the only validation performed here; a recognized dialect with a
//! garbage (but full-width) header is taken at face value and its
//! delimiters propagate downstream.

use crate::{Dialect, Error, Result, SpecialCharacters};

/// Number of characters a `UNA` service string advice occupies: the tag
/// plus six service characters.
const UNA_HEADER_LEN: usize = 9;

/// Minimum width of an `ISA` header: the segment separator sits at
/// character offset 105.
const ISA_HEADER_LEN: usize = 106;

/// Inspects the start of the raw text and produces the special-character
/// table in force for the rest of the interchange.
///
/// # Errors
///
/// [`Error::UnrecognizedFormat`] if the input does not begin with `UNA`,
/// `UNB`, `STX`, or `ISA`; [`Error::TruncatedHeader`] if a `UNA` or `ISA`
/// header is present but too short to hold its delimiter table.
pub fn detect(input: &str) -> Result<SpecialCharacters> {
    match input.get(..3) {
        Some("UNA") => una_characters(input),
        Some("UNB") => Ok(SpecialCharacters::edifact()),
        Some("STX") => Ok(SpecialCharacters::tradacoms()),
        Some("ISA") => isa_characters(input),
        _ => Err(Error::UnrecognizedFormat),
    }
}

/// Reads the six service characters following a literal `UNA` tag.
///
/// The service string advice is fixed-position: component separator,
/// element separator, decimal notation, escape character, one reserved
/// character (always a space today), segment separator.
fn una_characters(input: &str) -> Result<SpecialCharacters> {
    let header: Vec<char> = input.chars().take(UNA_HEADER_LEN).collect();
    if header.len() < UNA_HEADER_LEN {
        return Err(Error::truncated_header(
            Dialect::Edifact,
            UNA_HEADER_LEN,
            header.len(),
        ));
    }
    Ok(SpecialCharacters {
        dialect: Dialect::Edifact,
        component_separator: header[3],
        element_separator: header[4],
        decimal_notation: Some(header[5]),
        escape_character: Some(header[6]),
        segment_separator: header[8],
    })
}

/// Reads the three X12 delimiters from their fixed `ISA` offsets: element
/// separator at 3, component separator at 104, segment separator at 105.
fn isa_characters(input: &str) -> Result<SpecialCharacters> {
    let header: Vec<char> = input.chars().take(ISA_HEADER_LEN).collect();
    if header.len() < ISA_HEADER_LEN {
        return Err(Error::truncated_header(
            Dialect::Ansix12,
            ISA_HEADER_LEN,
            header.len(),
        ));
    }
    Ok(SpecialCharacters::ansix12(header[3], header[104], header[105]))
}
