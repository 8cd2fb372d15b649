//! The [`edi!`] macro for building `Vec<Segment>` literals.
//!
//! Mirrors the shape of the wire format: each segment is a bracketed list
//! whose first entry is the tag, followed by bracketed elements whose
//! entries are components. Components may be integers, string literals, or
//! the bare word `null`.
//!
//! ```rust
//! use edilex::{edi, parse};
//!
//! let expected = edi![
//!     ["UNB", [1]],
//!     ["LIN", [1], [1], ["0764569104", "IB"]],
//!     ["QTY", [1, 25]],
//! ];
//! assert_eq!(parse("UNB+1'LIN+1+1+0764569104:IB'QTY+1:25'").unwrap(), expected);
//! ```

/// Builds a `Vec<Segment>` from a bracketed literal.
///
/// `[]` denotes an empty segment, `["TAG"]` a tag-only segment, and
/// `["TAG", [components...], ...]` a full segment. `null` inside an
/// element produces [`crate::Value::Null`]; any other entry goes through
/// `Value::from`.
#[macro_export]
macro_rules! edi {
    ( $( $segment:tt ),* $(,)? ) => {
        vec![ $( $crate::edi_segment!($segment) ),* ]
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! edi_segment {
    // An empty segment, as between two consecutive segment separators.
    ([]) => {
        $crate::Segment::empty()
    };

    ([ $tag:expr $(, $element:tt )* $(,)? ]) => {
        $crate::Segment::new($tag, vec![ $( $crate::edi_element!($element) ),* ])
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! edi_element {
    ([ $($components:tt)* ]) => {
        $crate::edi_components!([] $($components)*)
    };
}

// Accumulating muncher: `null` must be matched as a bare token before the
// expression fallback can swallow it.
#[doc(hidden)]
#[macro_export]
macro_rules! edi_components {
    ([ $($out:expr),* ]) => {
        vec![ $($out),* ]
    };
    ([ $($out:expr),* ] null) => {
        $crate::edi_components!([ $($out,)* $crate::Value::Null ])
    };
    ([ $($out:expr),* ] null, $($rest:tt)*) => {
        $crate::edi_components!([ $($out,)* $crate::Value::Null ] $($rest)*)
    };
    ([ $($out:expr),* ] $component:expr) => {
        $crate::edi_components!([ $($out,)* $crate::Value::from($component) ])
    };
    ([ $($out:expr),* ] $component:expr, $($rest:tt)*) => {
        $crate::edi_components!([ $($out,)* $crate::Value::from($component) ] $($rest)*)
    };
}

#[cfg(test)]
mod tests {
    use crate::{Segment, Value};

    #[test]
    fn test_edi_macro_segments() {
        let segments = edi![["UNB", ["IATB", 1], ["6XPPC"]]];
        assert_eq!(
            segments,
            vec![Segment::new(
                "UNB",
                vec![
                    vec![Value::from("IATB"), Value::Integer(1)],
                    vec![Value::from("6XPPC")],
                ],
            )]
        );
    }

    #[test]
    fn test_edi_macro_null_and_empty() {
        let segments = edi![["PDI", [], ["Y", null, 3]], []];
        assert_eq!(
            segments,
            vec![
                Segment::new(
                    "PDI",
                    vec![
                        vec![],
                        vec![Value::from("Y"), Value::Null, Value::Integer(3)],
                    ],
                ),
                Segment::empty(),
            ]
        );
    }

    #[test]
    fn test_edi_macro_tag_only_and_negative() {
        let segments = edi![["UNT"], ["QTY", [-5]]];
        assert_eq!(segments[0], Segment::new("UNT", vec![]));
        assert_eq!(segments[1], Segment::new("QTY", vec![vec![Value::Integer(-5)]]));
    }

    #[test]
    fn test_edi_macro_empty_interchange() {
        let segments: Vec<Segment> = edi![];
        assert!(segments.is_empty());
    }
}
