//! Configuration options for EDI serialization.
//!
//! Output is always the canonical EDIFACT character set; the only knob is
//! whether the literal `UNA:+.? '` service string advice is prepended.
//!
//! ## Examples
//!
//! ```rust
//! use edilex::{edi, serialize_with_options, SerializeOptions};
//!
//! let segments = edi![["QTY", [1]]];
//!
//! let options = SerializeOptions::new().with_service_header(false);
//! assert_eq!(serialize_with_options(&segments, &options), "QTY+1'");
//! ```

/// Configuration options for EDI serialization.
///
/// # Examples
///
/// ```rust
/// use edilex::SerializeOptions;
///
/// // Default: the UNA service header is emitted.
/// let options = SerializeOptions::new();
/// assert!(options.service_header);
///
/// let options = SerializeOptions::new().with_service_header(false);
/// assert!(!options.service_header);
/// ```
#[derive(Clone, Debug)]
pub struct SerializeOptions {
    /// Whether to prepend the `UNA:+.? '` service string advice. Ignored
    /// when the first segment's tag is already `UNA`.
    pub service_header: bool,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        SerializeOptions {
            service_header: true,
        }
    }
}

impl SerializeOptions {
    /// Creates default options (service header on).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether the `UNA` service header is prepended.
    #[must_use]
    pub fn with_service_header(mut self, service_header: bool) -> Self {
        self.service_header = service_header;
        self
    }
}
