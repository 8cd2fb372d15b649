//! The escape-aware hierarchical splitter.
//!
//! Parsing is three nested splits — segments on the segment separator,
//! elements on the element separator, components on the component separator
//! — where a separator only counts when it is *unescaped*. A separator is
//! escaped when an odd number of consecutive escape characters immediately
//! precedes it: each escape pair denotes one literal escape character, so an
//! even run leaves the separator structural.
//!
//! ```text
//! LIN+even????+123   the '+' follows four escapes  -> unescaped, splits
//! LIN+odd???+123     the '+' follows three escapes -> escaped, literal
//! ```
//!
//! The splitter resolves this with a single linear scan that counts the
//! escape run before each character and classifies its parity directly; no
//! lookbehind or placeholder rewriting is involved. ANSI X12 has no escape
//! character at all, so its splits are plain.
//!
//! Split semantics deliberately drop trailing empty pieces and produce no
//! pieces for empty input, so two consecutive segment separators yield an
//! empty [`Segment`] and an empty element yields an empty component list.

use crate::value::Element;
use crate::{Segment, SpecialCharacters, Value};

/// A configured parser for one interchange.
///
/// Holds the detected [`SpecialCharacters`] table; the table is read-only
/// for the duration of the parse and nothing is shared across calls.
///
/// Most users should call [`crate::parse`], which runs format detection
/// first and then delegates here.
pub struct Parser {
    chars: SpecialCharacters,
}

impl Parser {
    /// Creates a parser using the given special-character table.
    #[must_use]
    pub fn new(chars: SpecialCharacters) -> Self {
        Parser { chars }
    }

    /// Splits the input into segments, elements, and coerced components.
    ///
    /// The dialect tag on the character table decides the behavioral
    /// branches: newline folding and escape handling for the EDIFACT
    /// family, plain splits for ANSI X12, and the TRADACOMS `=` tag
    /// separator rewrite when detected.
    #[must_use]
    pub fn parse(&self, input: &str) -> Vec<Segment> {
        // Line breaks carry no meaning in the EDIFACT family. X12 input is
        // left untouched: its segment separator may itself be a newline.
        let input = if self.chars.dialect.has_escaping() {
            fold_line_breaks(input)
        } else {
            input.to_string()
        };

        let mut segments = self.split(&input, self.chars.segment_separator);

        // UNA service segments were already consumed by the detector.
        if self.chars.dialect.has_escaping() {
            segments.retain(|segment| !segment.starts_with("UNA"));
        }

        // TRADACOMS separates the tag from the first element with '='
        // instead of '+'. Detected positionally: every segment carries '='
        // at character offset 3. A header flag would be sturdier, but this
        // matches the deployed behavior.
        let is_tradacoms = !segments.is_empty()
            && segments
                .iter()
                .all(|segment| segment.chars().nth(3) == Some('='));

        segments
            .iter()
            .map(|segment| self.parse_segment(segment, is_tradacoms))
            .collect()
    }

    /// Splits one raw segment into its tag and data elements.
    fn parse_segment(&self, raw: &str, rewrite_tag_separator: bool) -> Segment {
        let raw = if rewrite_tag_separator {
            replace_tag_separator(raw, self.chars.element_separator)
        } else {
            raw.to_string()
        };

        let mut pieces = self.split(&raw, self.chars.element_separator);
        if pieces.is_empty() {
            return Segment::empty();
        }

        // The first piece degenerates to a bare tag, never an element.
        let tag = pieces.remove(0);
        let elements = pieces
            .iter()
            .map(|element| self.parse_element(element))
            .collect();
        Segment {
            tag: Some(tag),
            elements,
        }
    }

    /// Splits one raw element into coerced components.
    fn parse_element(&self, raw: &str) -> Element {
        self.split(raw, self.chars.component_separator)
            .iter()
            .map(|component| Value::coerce(component, &self.chars))
            .collect()
    }

    /// Splits on `separator`, honoring escape parity when the dialect has
    /// an escape character. Trailing empty pieces are dropped and empty
    /// input yields no pieces.
    fn split(&self, text: &str, separator: char) -> Vec<String> {
        let mut pieces = match self.chars.escape_character {
            Some(escape) => split_unescaped(text, separator, escape),
            None => text.split(separator).map(str::to_string).collect(),
        };
        while pieces.last().is_some_and(String::is_empty) {
            pieces.pop();
        }
        pieces
    }
}

/// Splits `text` on every occurrence of `separator` preceded by an even
/// run (zero included) of consecutive escape characters.
fn split_unescaped(text: &str, separator: char, escape: char) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut escape_run = 0usize;

    for ch in text.chars() {
        if ch == separator && escape_run % 2 == 0 {
            pieces.push(std::mem::take(&mut current));
        } else {
            current.push(ch);
        }
        escape_run = if ch == escape { escape_run + 1 } else { 0 };
    }
    pieces.push(current);
    pieces
}

/// Deletes every whitespace run that contains a line break; runs without
/// one are kept as-is. Idempotent: folded text has no line breaks left.
pub(crate) fn fold_line_breaks(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut run = String::new();
    let mut run_has_break = false;

    for ch in input.chars() {
        if ch.is_whitespace() {
            run.push(ch);
            run_has_break |= ch == '\n';
        } else {
            if !run_has_break {
                out.push_str(&run);
            }
            run.clear();
            run_has_break = false;
            out.push(ch);
        }
    }
    if !run_has_break {
        out.push_str(&run);
    }
    out
}

/// Replaces the character at offset 3 (the TRADACOMS `=`) with the element
/// separator so the element split treats the tag like any other piece.
fn replace_tag_separator(segment: &str, element_separator: char) -> String {
    let mut chars: Vec<char> = segment.chars().collect();
    if chars.len() >= 4 {
        chars[3] = element_separator;
    }
    chars.into_iter().collect()
}
