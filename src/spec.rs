//! EDI Wire Format Notes
//!
//! This module documents the three flat-file EDI dialects this library
//! tokenizes, as implemented here.
//!
//! # Overview
//!
//! An EDI interchange is plain delimiter-separated text with no binary
//! framing. Three nested levels of structure exist:
//!
//! - **Segment** — one logical record, terminated by the segment separator
//! - **Data element** — a field within a segment, separated by the element
//!   separator
//! - **Component** — a sub-field within an element, separated by the
//!   component separator
//!
//! ```text
//! UNB+IATB:1+6XPPC+LHPPC+940101:0950+1'
//! ^tag ^element with two components    ^segment separator
//! ```
//!
//! The first piece of every segment is its *tag* (`UNB`, `LIN`, `QTY`, …),
//! an opaque identifier rather than a data element.
//!
//! # Dialects
//!
//! | Dialect | Leading tag | Delimiters | Escaping |
//! |---------|-------------|------------|----------|
//! | EDIFACT | `UNA` or `UNB` | defaults `:` `+` `.` `?` `'`, overridable via `UNA` | yes (`?`) |
//! | TRADACOMS | `STX` | EDIFACT defaults, never overridden | yes (`?`) |
//! | ANSI X12 | `ISA` | read from the fixed-width `ISA` header | none |
//!
//! ## EDIFACT service string advice
//!
//! An interchange may begin with a nine-character `UNA` segment assigning
//! all service characters positionally:
//!
//! ```text
//! UNA:+.? '
//!    ││││ └─ segment separator
//!    ││││└── reserved (space)
//!    │││└─── escape (release) character
//!    ││└──── decimal notation
//!    │└───── element separator
//!    └────── component separator
//! ```
//!
//! Without `UNA` the defaults shown above apply. The `UNA` segment is
//! consumed during detection and never appears in parsed output.
//!
//! ## TRADACOMS
//!
//! TRADACOMS separates the tag from the first element with `=` instead of
//! the element separator (`QTY=1+A:B`). This library detects that shape
//! positionally — every segment carrying `=` at character offset 3 — and
//! rewrites it before splitting elements.
//!
//! ## ANSI X12
//!
//! The `ISA` header is fixed-width: the element separator is the character
//! at offset 3, the component separator at offset 104, the segment
//! separator at offset 105. X12 has no escape character and no decimal
//! notation; a delimiter can never occur inside X12 data. The segment
//! separator is frequently a newline, so X12 input is never line-folded.
//!
//! # Escaping
//!
//! In the EDIFACT family, the escape character releases the following
//! special character: `?+` is a literal `+`, `??` a literal `?`. A
//! delimiter is structural exactly when an *even* number of consecutive
//! escape characters precedes it:
//!
//! ```text
//! LIN+A Giant?'s tale'     one escape  -> literal ', one segment
//! LIN+Trouble????+156'     four escapes -> literal ??, then a real +
//! ```
//!
//! # Component typing
//!
//! Each component coerces to null (empty), integer (canonical base-10
//! rendering only), or string. See [`crate::Value`] for the exact rules.
//!
//! # Line breaks
//!
//! EDIFACT and TRADACOMS interchanges are frequently wrapped for human
//! eyes; line breaks and the whitespace hugging them carry no meaning and
//! are folded away before splitting.

// This module contains only documentation; no implementation code
