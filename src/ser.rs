//! Serialization back to EDI text.
//!
//! The serializer is the exact inverse of the parse pipeline, always
//! emitting the canonical EDIFACT character set (`:` `+` `'` `?`); dialect-
//! specific output tables are not supported. Components join with `:`,
//! elements (including the bare tag) join with `+`, segments join with `'`,
//! and one trailing `'` terminates the interchange.
//!
//! String components are re-escaped on the way out: every structural
//! character they contain — the three separators and the escape character
//! itself — is prefixed with `?`. Integers emit their digits and `Null`
//! emits nothing, which is what makes `parse(serialize(s))` reproduce `s`.
//!
//! ## Examples
//!
//! ```rust
//! use edilex::{edi, serialize};
//!
//! let segments = edi![["QTY", [1, 25]]];
//! assert_eq!(serialize(&segments), "UNA:+.? 'QTY+1:25'");
//! ```

use crate::options::SerializeOptions;
use crate::value::Element;
use crate::{Segment, SpecialCharacters, Value};

/// The literal `UNA` service string advice for the canonical character set.
const SERVICE_HEADER: &str = "UNA:+.? '";

/// Serializes segments to EDI text using the given options.
///
/// Empty segments serialize to the empty string, so consecutive segment
/// separators reappear exactly where empty segments sat. The `UNA` service
/// header is prepended unless disabled in `options` or the first segment
/// already carries the `UNA` tag.
#[must_use]
pub fn serialize_segments(segments: &[Segment], options: &SerializeOptions) -> String {
    // An empty interchange has no segment to terminate; at most the
    // service header (itself a complete segment) is emitted.
    if segments.is_empty() {
        return if options.service_header {
            SERVICE_HEADER.to_string()
        } else {
            String::new()
        };
    }

    let chars = SpecialCharacters::edifact();

    let mut output = segments
        .iter()
        .map(|segment| serialize_segment(segment, &chars))
        .collect::<Vec<_>>()
        .join(&chars.segment_separator.to_string());

    let first_is_una = segments
        .first()
        .and_then(Segment::tag)
        .is_some_and(|tag| tag == "UNA");
    if options.service_header && !first_is_una {
        output.insert_str(0, SERVICE_HEADER);
    }

    output.push(chars.segment_separator);
    output
}

fn serialize_segment(segment: &Segment, chars: &SpecialCharacters) -> String {
    let mut pieces = Vec::with_capacity(segment.elements.len() + 1);
    if let Some(tag) = segment.tag() {
        pieces.push(tag.to_string());
    }
    pieces.extend(
        segment
            .elements
            .iter()
            .map(|element| serialize_element(element, chars)),
    );
    pieces.join(&chars.element_separator.to_string())
}

fn serialize_element(element: &Element, chars: &SpecialCharacters) -> String {
    element
        .iter()
        .map(|component| serialize_component(component, chars))
        .collect::<Vec<_>>()
        .join(&chars.component_separator.to_string())
}

/// Renders one component, escaping structural characters inside strings.
/// Integers and `Null` can never contain delimiters and emit literally.
fn serialize_component(component: &Value, chars: &SpecialCharacters) -> String {
    match component {
        Value::String(s) => escape(s, chars),
        other => other.to_string(),
    }
}

/// Prefixes every structural character with the escape character, undoing
/// what [`Value::coerce`] stripped: `"+"` becomes `"?+"`, `"?"` becomes
/// `"??"`.
fn escape(raw: &str, chars: &SpecialCharacters) -> String {
    let Some(escape) = chars.escape_character else {
        return raw.to_string();
    };

    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if chars.is_special(ch) {
            out.push(escape);
        }
        out.push(ch);
    }
    out
}
