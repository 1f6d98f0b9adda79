//! Configuration options for structured field parsing.
//!
//! The defaults reproduce the lenient behavior of widely deployed parsers.
//! [`ParseOptions`] tightens the places where that behavior is looser than
//! RFC 8941:
//!
//! - malformed Base-64 inside a byte sequence
//! - decimals whose integer part has more than 12 digits
//! - text left over after the last member of a list or dictionary
//!
//! ## Examples
//!
//! ```rust
//! use serde_sfv::{parse_item_line_with_options, ParseOptions, ErrorKind};
//!
//! // Lenient: the malformed payload decodes to an empty byte sequence
//! let item = parse_item_line_with_options(":K:", &ParseOptions::new()).unwrap();
//! assert_eq!(item.bare.as_byte_seq(), Some(&[][..]));
//!
//! // Strict: the same payload is rejected
//! let err = parse_item_line_with_options(":K:", &ParseOptions::strict()).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Unrecognized);
//! ```

/// Configuration options for structured field parsing.
///
/// # Examples
///
/// ```rust
/// use serde_sfv::ParseOptions;
///
/// // Default lenient options
/// let options = ParseOptions::new();
/// assert!(!options.strict_byte_sequences);
///
/// // Everything tightened
/// let options = ParseOptions::strict();
/// assert!(options.rfc_decimal_limits);
///
/// // Custom configuration
/// let options = ParseOptions::new().with_strict_byte_sequences(true);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Reject byte sequences whose payload is not valid Base-64.
    pub strict_byte_sequences: bool,
    /// Limit the integer part of a decimal to 12 digits.
    pub rfc_decimal_limits: bool,
    /// Reject anything but spaces after the last list member or dictionary pair.
    pub strict_trailing: bool,
}

impl ParseOptions {
    /// Creates default (lenient) options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options with every check enabled.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_sfv::ParseOptions;
    ///
    /// let options = ParseOptions::strict();
    /// assert!(options.strict_byte_sequences);
    /// ```
    #[must_use]
    pub fn strict() -> Self {
        ParseOptions {
            strict_byte_sequences: true,
            rfc_decimal_limits: true,
            strict_trailing: true,
        }
    }

    /// Sets whether malformed Base-64 payloads are rejected.
    ///
    /// When `false` (the default), a malformed payload yields an empty byte
    /// sequence and a `tracing` debug event.
    #[must_use]
    pub fn with_strict_byte_sequences(mut self, strict: bool) -> Self {
        self.strict_byte_sequences = strict;
        self
    }

    /// Sets whether decimals are limited to 12 integer digits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_sfv::{parse_item_line_with_options, ParseOptions};
    ///
    /// let options = ParseOptions::new().with_rfc_decimal_limits(true);
    /// assert!(parse_item_line_with_options("123456789012.5", &options).is_ok());
    /// assert!(parse_item_line_with_options("1234567890123.5", &options).is_err());
    /// ```
    #[must_use]
    pub fn with_rfc_decimal_limits(mut self, limit: bool) -> Self {
        self.rfc_decimal_limits = limit;
        self
    }

    /// Sets whether a list or dictionary must end after its last member.
    ///
    /// When `false` (the default), parsing stops at the first top-level
    /// member that is not followed by `,` and the rest of the input is
    /// ignored. When `true`, that leftover fails with `Unrecognized`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_sfv::{parse_list_line, parse_list_line_with_options, Encode, ParseOptions};
    ///
    /// assert_eq!(parse_list_line("a b").unwrap().encode(), "a");
    ///
    /// let options = ParseOptions::new().with_strict_trailing(true);
    /// assert!(parse_list_line_with_options("a b", &options).is_err());
    /// ```
    #[must_use]
    pub fn with_strict_trailing(mut self, strict: bool) -> Self {
        self.strict_trailing = strict;
        self
    }
}
