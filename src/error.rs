//! Error types for structured field parsing.
//!
//! Parsing can fail in exactly three ways, and the first failure aborts the
//! whole call: there is no partial result and no resynchronisation.
//!
//! ## Error Categories
//!
//! - **Unexpected end of input**: a construct was still open when the input ran
//!   out (unterminated string, byte sequence or inner list, dangling `=`, lone `-`)
//! - **Unrecognized character**: a character matched no production at its position
//!   (illegal character, bad escape, malformed boolean, trailing garbage)
//! - **Too many digits**: an integer or decimal exceeded its digit budget
//!
//! Every error carries the byte offset in the (joined) input where parsing stopped.
//! Encoding never fails, so there are no serialization errors.
//!
//! ## Examples
//!
//! ```rust
//! use serde_sfv::{parse_item_line, ErrorKind};
//!
//! let err = parse_item_line("5 garbage").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Unrecognized);
//! assert_eq!(err.position(), 2);
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while parsing a structured field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Input ended while a construct was still open
    #[error("unexpected end of input at position {pos}")]
    UnexpectedEol { pos: usize },

    /// A character did not match any grammar production at its position
    #[error("unrecognized character {found:?} at position {pos}")]
    Unrecognized { pos: usize, found: char },

    /// A number exceeded its digit budget
    #[error("too many digits in number at position {pos}")]
    TooManyDigits { pos: usize },
}

/// The category of an [`Error`], without its position.
///
/// # Examples
///
/// ```rust
/// use serde_sfv::{parse_item_line, ErrorKind};
///
/// let err = parse_item_line("1234567890123456").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::TooManyDigits);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    UnexpectedEol,
    Unrecognized,
    TooManyDigits,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::UnexpectedEol => f.write_str("unexpected end of input"),
            ErrorKind::Unrecognized => f.write_str("unrecognized character"),
            ErrorKind::TooManyDigits => f.write_str("too many digits"),
        }
    }
}

impl Error {
    /// Creates an unexpected end-of-input error at `pos`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_sfv::Error;
    ///
    /// let err = Error::unexpected_eol(4);
    /// assert!(err.to_string().contains("position 4"));
    /// ```
    pub fn unexpected_eol(pos: usize) -> Self {
        Error::UnexpectedEol { pos }
    }

    /// Creates an unrecognized-character error for `found` at `pos`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_sfv::Error;
    ///
    /// let err = Error::unrecognized(2, '!');
    /// assert!(err.to_string().contains("'!'"));
    /// ```
    pub fn unrecognized(pos: usize, found: char) -> Self {
        Error::Unrecognized { pos, found }
    }

    /// Creates a too-many-digits error at `pos`.
    pub fn too_many_digits(pos: usize) -> Self {
        Error::TooManyDigits { pos }
    }

    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Error::UnexpectedEol { .. } => ErrorKind::UnexpectedEol,
            Error::Unrecognized { .. } => ErrorKind::Unrecognized,
            Error::TooManyDigits { .. } => ErrorKind::TooManyDigits,
        }
    }

    /// Returns the byte offset where parsing stopped.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Error::UnexpectedEol { pos }
            | Error::Unrecognized { pos, .. }
            | Error::TooManyDigits { pos } => *pos,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
