//! The per-dialect special-character table.
//!
//! Every EDI dialect reserves a handful of single characters for structure:
//! a segment separator, a data-element separator, a component separator,
//! and (for the EDIFACT family) an escape character and a decimal notation
//! mark. [`SpecialCharacters`] is the immutable value object holding those
//! five characters plus the [`Dialect`] they were detected for.
//!
//! The table is always an explicit value threaded into each parse or
//! serialize call; there is no process-wide default that can be mutated.
//!
//! ## Examples
//!
//! ```rust
//! use edilex::SpecialCharacters;
//!
//! let chars = SpecialCharacters::default();
//! assert_eq!(chars.component_separator, ':');
//! assert_eq!(chars.element_separator, '+');
//! assert_eq!(chars.segment_separator, '\'');
//! assert_eq!(chars.escape_character, Some('?'));
//! assert_eq!(chars.decimal_notation, Some('.'));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// The EDI dialect of an interchange, derived once from its first three
/// characters.
///
/// The dialect drives every downstream behavioral branch: whether escaping
/// applies, whether `=` separates the tag from the first element, and how
/// the delimiter header is laid out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dialect {
    /// UN/EDIFACT (`UNA` or `UNB` prefix).
    Edifact,
    /// TRADACOMS (`STX` prefix). Uses the EDIFACT default delimiters; there
    /// is no per-file override.
    Tradacoms,
    /// ANSI X12 (`ISA` prefix). No escape character, no decimal notation.
    Ansix12,
}

impl Dialect {
    /// Returns `true` if this dialect supports an escape (release)
    /// character. ANSI X12 has none; its delimiters can never occur inside
    /// data.
    #[inline]
    #[must_use]
    pub const fn has_escaping(&self) -> bool {
        !matches!(self, Dialect::Ansix12)
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::Edifact => write!(f, "EDIFACT"),
            Dialect::Tradacoms => write!(f, "TRADACOMS"),
            Dialect::Ansix12 => write!(f, "ANSI X12"),
        }
    }
}

/// The delimiter/escape characters in force for one interchange.
///
/// Constructed once per parse call by the format detector (defaults
/// overridden by a `UNA` or `ISA` header) and read-only from then on. All
/// present characters are assumed distinct; the dialect specifications make
/// colliding delimiters undefined, and the engine does not validate them.
///
/// # Examples
///
/// ```rust
/// use edilex::{special_characters, SpecialCharacters};
///
/// // A UNA header overrides every EDIFACT default.
/// let chars = special_characters("UNA!^,\\ ~").unwrap();
/// assert_eq!(chars.component_separator, '!');
/// assert_eq!(chars.segment_separator, '~');
///
/// // No header: the canonical defaults.
/// assert_eq!(special_characters("").unwrap(), SpecialCharacters::default());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialCharacters {
    /// Which dialect this table was detected for.
    pub dialect: Dialect,
    /// Separates components within a data element (`:` by default).
    pub component_separator: char,
    /// Separates data elements within a segment (`+` by default).
    pub element_separator: char,
    /// Terminates a segment (`'` by default).
    pub segment_separator: char,
    /// The release character that escapes the other delimiters (`?` by
    /// default). Absent for ANSI X12.
    pub escape_character: Option<char>,
    /// Decimal mark for numeric data (`.` by default). Absent for ANSI X12.
    pub decimal_notation: Option<char>,
}

impl Default for SpecialCharacters {
    fn default() -> Self {
        Self::edifact()
    }
}

impl SpecialCharacters {
    /// The canonical EDIFACT service characters: `:`, `+`, `'`, `?`, `.`.
    ///
    /// TRADACOMS interchanges always use this table as well.
    #[must_use]
    pub const fn edifact() -> Self {
        SpecialCharacters {
            dialect: Dialect::Edifact,
            component_separator: ':',
            element_separator: '+',
            segment_separator: '\'',
            escape_character: Some('?'),
            decimal_notation: Some('.'),
        }
    }

    /// The EDIFACT defaults tagged as TRADACOMS.
    #[must_use]
    pub const fn tradacoms() -> Self {
        SpecialCharacters {
            dialect: Dialect::Tradacoms,
            component_separator: ':',
            element_separator: '+',
            segment_separator: '\'',
            escape_character: Some('?'),
            decimal_notation: Some('.'),
        }
    }

    /// An ANSI X12 table with the three delimiters read from an `ISA`
    /// header. X12 defines no escape character and no decimal notation;
    /// both are explicitly absent rather than defaulted.
    #[must_use]
    pub const fn ansix12(element: char, component: char, segment: char) -> Self {
        SpecialCharacters {
            dialect: Dialect::Ansix12,
            component_separator: component,
            element_separator: element,
            segment_separator: segment,
            escape_character: None,
            decimal_notation: None,
        }
    }

    /// Returns `true` if `ch` is one of the three structural delimiters or
    /// the escape character itself. These are the characters that must be
    /// escaped when they appear literally inside string data.
    #[inline]
    #[must_use]
    pub fn is_special(&self, ch: char) -> bool {
        ch == self.segment_separator
            || ch == self.element_separator
            || ch == self.component_separator
            || self.escape_character == Some(ch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edifact_defaults() {
        let chars = SpecialCharacters::default();
        assert_eq!(chars.dialect, Dialect::Edifact);
        assert_eq!(chars.component_separator, ':');
        assert_eq!(chars.element_separator, '+');
        assert_eq!(chars.segment_separator, '\'');
        assert_eq!(chars.escape_character, Some('?'));
        assert_eq!(chars.decimal_notation, Some('.'));
    }

    #[test]
    fn test_ansix12_has_no_escape() {
        let chars = SpecialCharacters::ansix12('*', '>', '~');
        assert_eq!(chars.dialect, Dialect::Ansix12);
        assert_eq!(chars.escape_character, None);
        assert_eq!(chars.decimal_notation, None);
        assert!(!chars.dialect.has_escaping());
    }

    #[test]
    fn test_is_special() {
        let chars = SpecialCharacters::default();
        assert!(chars.is_special('\''));
        assert!(chars.is_special('+'));
        assert!(chars.is_special(':'));
        assert!(chars.is_special('?'));
        assert!(!chars.is_special('.'));
        assert!(!chars.is_special('A'));
    }
}
