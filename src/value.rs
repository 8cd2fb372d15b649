//! The parsed data model: segments, elements, and typed component values.
//!
//! An EDI interchange parses into a `Vec<Segment>`. Each [`Segment`] holds a
//! bare tag (the degenerate first split piece, e.g. `"UNB"`) and an ordered
//! list of [`Element`]s; each element is an ordered list of [`Value`]
//! components.
//!
//! ## Component typing
//!
//! A raw component string coerces into exactly one of three scalar shapes:
//!
//! - [`Value::Null`] — the component was empty after escape stripping
//! - an integer — the string is the *canonical* base-10 rendering of an
//!   integer ([`Value::Integer`] within `i64`, [`Value::BigInt`] beyond)
//! - [`Value::String`] — everything else
//!
//! Canonical means re-stringifying the parsed integer reproduces the input
//! exactly: `"-5"` coerces to `-5`, but `"007"`, `"+5"`, and `"1 2"` all
//! stay strings. Typing by exact round-trip rather than by digit inspection
//! is what keeps serialization byte-exact.
//!
//! ## Examples
//!
//! ```rust
//! use edilex::{SpecialCharacters, Value};
//!
//! let chars = SpecialCharacters::default();
//! assert_eq!(Value::coerce("-5", &chars), Value::Integer(-5));
//! assert_eq!(Value::coerce("007", &chars), Value::String("007".to_string()));
//! assert_eq!(Value::coerce("", &chars), Value::Null);
//! assert_eq!(Value::coerce("?+?:", &chars), Value::String("+:".to_string()));
//! ```

use crate::SpecialCharacters;
use num_bigint::BigInt;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A single coerced component scalar.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    /// An absent component (empty string after escape stripping).
    #[default]
    Null,
    /// A canonical base-10 integer within `i64` range.
    Integer(i64),
    /// A canonical base-10 integer outside `i64` range.
    BigInt(BigInt),
    /// Any other text, with escape markers already stripped.
    String(String),
}

/// One data element: an ordered run of components. May be empty when the
/// raw element text was empty.
pub type Element = Vec<Value>;

/// One logical record of an interchange: a bare tag plus its data elements.
///
/// The tag is deliberately *not* wrapped in an [`Element`]; EDI treats the
/// leading piece of a segment as an opaque identifier, and that asymmetry is
/// preserved here. A segment parsed from two consecutive segment separators
/// is entirely empty: no tag, no elements.
///
/// # Examples
///
/// ```rust
/// use edilex::{edi, parse};
///
/// let segments = parse("UNA:+.? 'QTY+1:25'").unwrap();
/// assert_eq!(segments, edi![["QTY", [1, 25]]]);
/// assert_eq!(segments[0].tag(), Some("QTY"));
/// ```
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Segment {
    /// The segment tag, or `None` for an empty segment.
    pub tag: Option<String>,
    /// The data elements following the tag.
    pub elements: Vec<Element>,
}

impl Segment {
    /// Creates a segment with the given tag and elements.
    #[must_use]
    pub fn new(tag: impl Into<String>, elements: Vec<Element>) -> Self {
        Segment {
            tag: Some(tag.into()),
            elements,
        }
    }

    /// Creates an empty segment (no tag, no elements), as produced by two
    /// consecutive segment separators.
    #[must_use]
    pub fn empty() -> Self {
        Segment::default()
    }

    /// The segment tag, if any.
    #[inline]
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Returns `true` if the segment has neither tag nor elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tag.is_none() && self.elements.is_empty()
    }
}

impl Value {
    /// Coerces one raw component string into a typed scalar.
    ///
    /// Surrounding whitespace is trimmed, escape sequences are stripped (for
    /// dialects that have an escape character), the empty string becomes
    /// [`Value::Null`], and canonical integers become integer values. The
    /// integer check is an exact round-trip comparison, so non-canonical
    /// digit strings such as `"007"` stay strings.
    #[must_use]
    pub fn coerce(raw: &str, chars: &SpecialCharacters) -> Value {
        let trimmed = raw.trim();
        let text = match chars.escape_character {
            Some(escape) => unescape(trimmed, escape, chars),
            None => trimmed.to_string(),
        };

        if text.is_empty() {
            return Value::Null;
        }
        if let Ok(n) = text.parse::<i64>() {
            if n.to_string() == text {
                return Value::Integer(n);
            }
        }
        // Digit strings of any length coerce when canonical.
        if let Ok(n) = text.parse::<BigInt>() {
            if n.to_string() == text {
                return Value::BigInt(n);
            }
        }
        Value::String(text)
    }

    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` if the value is an integer (of either width).
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Value::Integer(_) | Value::BigInt(_))
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// If the value is an `i64`-width integer, returns it. Otherwise
    /// returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use edilex::Value;
    ///
    /// assert_eq!(Value::Integer(42).as_i64(), Some(42));
    /// assert_eq!(Value::from("42nd").as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it. Otherwise
    /// returns `None`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is a big integer, returns a reference to it. Otherwise
    /// returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bigint(&self) -> Option<&BigInt> {
        match self {
            Value::BigInt(n) => Some(n),
            _ => None,
        }
    }
}

/// Strips escape markers from a raw component: every `<escape><special>`
/// two-character run collapses to the special character alone, so `"??"`
/// becomes `"?"` and `"?+"` becomes `"+"`. An escape character before a
/// non-special character is kept literally.
fn unescape(raw: &str, escape: char, chars: &SpecialCharacters) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut iter = raw.chars().peekable();
    while let Some(ch) = iter.next() {
        if ch == escape {
            if let Some(&next) = iter.peek() {
                if chars.is_special(next) {
                    out.push(next);
                    iter.next();
                    continue;
                }
            }
        }
        out.push(ch);
    }
    out
}

impl fmt::Display for Value {
    /// Writes the component text without any escaping: `Null` is empty,
    /// integers render their digits, strings render verbatim.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Integer(n) => write!(f, "{}", n),
            Value::BigInt(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "{}", s),
        }
    }
}

impl From<i8> for Value {
    fn from(value: i8) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<i16> for Value {
    fn from(value: i16) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<BigInt> for Value {
    fn from(value: BigInt) -> Self {
        Value::BigInt(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Integer(n) => serializer.serialize_i64(*n),
            Value::BigInt(n) => serializer.collect_str(n),
            Value::String(s) => serializer.serialize_str(s),
        }
    }
}

/// Integers beyond `i64` serialize as JSON strings; an incoming string
/// that is the canonical rendering of such an integer is one of ours and
/// comes back as [`Value::BigInt`]. Anything `i64`-sized or non-canonical
/// stays a string (small canonical integers arrive as JSON numbers).
fn revive_big_integer(s: &str) -> Option<Value> {
    if s.parse::<i64>().is_ok() {
        return None;
    }
    let n = s.parse::<BigInt>().ok()?;
    if n.to_string() == s {
        Some(Value::BigInt(n))
    } else {
        None
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Visitor;

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an EDI component scalar (null, integer, or string)")
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(Value::Integer(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                if value <= i64::MAX as u64 {
                    Ok(Value::Integer(value as i64))
                } else {
                    Ok(Value::BigInt(BigInt::from(value)))
                }
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(revive_big_integer(value)
                    .unwrap_or_else(|| Value::String(value.to_string())))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(revive_big_integer(&value).unwrap_or(Value::String(value)))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                deserializer.deserialize_any(self)
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars() -> SpecialCharacters {
        SpecialCharacters::default()
    }

    #[test]
    fn test_coerce_integers() {
        assert_eq!(Value::coerce("1", &chars()), Value::Integer(1));
        assert_eq!(Value::coerce("-123", &chars()), Value::Integer(-123));
        assert_eq!(Value::coerce("0", &chars()), Value::Integer(0));
        assert_eq!(Value::coerce("940101", &chars()), Value::Integer(940101));
    }

    #[test]
    fn test_non_canonical_digits_stay_strings() {
        assert_eq!(
            Value::coerce("0350", &chars()),
            Value::String("0350".to_string())
        );
        assert_eq!(
            Value::coerce("007", &chars()),
            Value::String("007".to_string())
        );
        assert_eq!(
            Value::coerce("+5", &chars()),
            Value::String("+5".to_string())
        );
        assert_eq!(
            Value::coerce("-0", &chars()),
            Value::String("-0".to_string())
        );
    }

    #[test]
    fn test_coerce_beyond_i64() {
        let big = "99999999999999999999";
        assert_eq!(
            Value::coerce(big, &chars()),
            Value::BigInt(big.parse::<BigInt>().unwrap())
        );
    }

    #[test]
    fn test_coerce_null_and_trim() {
        assert_eq!(Value::coerce("", &chars()), Value::Null);
        assert_eq!(Value::coerce("   ", &chars()), Value::Null);
        assert_eq!(Value::coerce(" 25 ", &chars()), Value::Integer(25));
        assert_eq!(
            Value::coerce(" a b ", &chars()),
            Value::String("a b".to_string())
        );
    }

    #[test]
    fn test_unescape_pairs() {
        assert_eq!(
            Value::coerce("?+?:?'??", &chars()),
            Value::String("+:'?".to_string())
        );
        // Escape before a non-special character stays literal.
        assert_eq!(
            Value::coerce("?x", &chars()),
            Value::String("?x".to_string())
        );
    }

    #[test]
    fn test_no_unescaping_without_escape_character() {
        let x12 = SpecialCharacters::ansix12('*', '>', '~');
        assert_eq!(
            Value::coerce("?+", &x12),
            Value::String("?+".to_string())
        );
    }

    #[test]
    fn test_json_round_trip_revives_big_integers() {
        let big = Value::coerce("99999999999999999999", &chars());
        let json = serde_json::to_value(&big).unwrap();
        assert_eq!(json, serde_json::json!("99999999999999999999"));
        assert_eq!(serde_json::from_value::<Value>(json).unwrap(), big);
    }

    #[test]
    fn test_json_digit_strings_stay_strings() {
        // i64-sized and non-canonical digit strings are real string data.
        for raw in ["42", "007", "-0", "00999999999999999999999"] {
            let value = serde_json::from_value::<Value>(serde_json::json!(raw)).unwrap();
            assert_eq!(value, Value::String(raw.to_string()));
        }
    }

    #[test]
    fn test_display_is_unescaped_literal() {
        assert_eq!(Value::Null.to_string(), "");
        assert_eq!(Value::Integer(-7).to_string(), "-7");
        assert_eq!(Value::from("A+B").to_string(), "A+B");
    }

    #[test]
    fn test_segment_accessors() {
        let seg = Segment::new("UNB", vec![vec![Value::Integer(1)]]);
        assert_eq!(seg.tag(), Some("UNB"));
        assert!(!seg.is_empty());
        assert!(Segment::empty().is_empty());
    }
}
