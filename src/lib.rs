//! # serde_sfv
//!
//! A parser and canonical serializer for HTTP Structured Field Values
//! ([RFC 8941](https://www.rfc-editor.org/rfc/rfc8941)).
//!
//! ## What are Structured Fields?
//!
//! Structured fields give HTTP header values a common, typed grammar: lists,
//! dictionaries and items, each optionally carrying parameters. A header such as
//! `Priority: u=2, i` or `Accept-CH: Sec-CH-UA, Sec-CH-UA-Model` is a structured
//! field. This crate converts such text to a typed tree and back; it does not
//! know what any particular header means.
//!
//! ## Key Features
//!
//! - **Bidirectional**: parse text into [`List`], [`Dict`] or [`Item`], and
//!   encode any tree back to canonical text with [`Encode`]
//! - **Order Preserving**: dictionaries and parameters keep wire order, and
//!   re-adding a key replaces its value in place
//! - **Exact Decimals**: decimals are fixed-point with three fractional digits
//! - **Serde Compatible**: every node serializes to the JSON shape used by the
//!   community structured-field test suite
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! serde_sfv = "0.1"
//! ```
//!
//! ### Parsing and Encoding
//!
//! ```rust
//! use serde_sfv::{parse_dict_line, BareItem, Encode, Member};
//!
//! let dict = parse_dict_line("u=2, i").unwrap();
//!
//! let urgency = dict
//!     .get("u")
//!     .and_then(Member::as_item)
//!     .and_then(|item| item.bare.as_integer());
//! assert_eq!(urgency, Some(2));
//! assert_eq!(dict.get("i").and_then(Member::as_item).map(|i| &i.bare), Some(&BareItem::Bool(true)));
//!
//! assert_eq!(dict.encode(), "u=2, i");
//! ```
//!
//! ### Multi-line Headers
//!
//! ```rust
//! use serde_sfv::{parse_list, Encode};
//!
//! let list = parse_list(["sugar, tea", "rum"]).unwrap();
//! assert_eq!(list.encode(), "sugar, tea, rum");
//! ```
//!
//! ### Building Values
//!
//! ```rust
//! use serde_sfv::{sf_dict, sf_params, BareItem, Encode, InnerList, Item};
//!
//! let dict = sf_dict! {
//!     "a" => InnerList::new(vec![Item::new(1), Item::new(2)]),
//!     "b" => Item::with_params(3, sf_params! { "valid" => true }),
//! };
//! assert_eq!(dict.encode(), "a=(1 2), b=3;valid");
//! ```
//!
//! ## Errors
//!
//! Parsing stops at the first problem and reports one of three kinds, with the
//! byte offset where it stopped. See [`Error`].
//!
//! ## Format Specification
//!
//! The accepted grammar is summarised in the [`grammar`] module.

pub mod error;
pub mod grammar;
pub mod macros;
pub mod map;
pub mod options;
pub mod parser;
pub mod ser;
pub mod value;

mod chars;

pub use error::{Error, ErrorKind, Result};
pub use map::{Dict, Params};
pub use options::ParseOptions;
pub use parser::{join_lines, Parser};
pub use ser::{to_string, Encode, Serializer};
pub use value::{BareItem, Decimal, InnerList, Item, List, Member, Pair, Param};

/// Parses a dictionary field given as one or more header lines.
///
/// # Examples
///
/// ```rust
/// use serde_sfv::{parse_dict, Encode};
///
/// let dict = parse_dict(["foo=1", "bar=2"]).unwrap();
/// assert_eq!(dict.encode(), "foo=1, bar=2");
/// ```
///
/// # Errors
///
/// Returns an error if the joined text is not a valid dictionary.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_dict<I, S>(lines: I) -> Result<Dict>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parse_dict_with_options(lines, &ParseOptions::default())
}

/// Parses a dictionary field given as one or more header lines, with custom options.
///
/// # Errors
///
/// Returns an error if the joined text is not a valid dictionary.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_dict_with_options<I, S>(lines: I, options: &ParseOptions) -> Result<Dict>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parse_dict_line_with_options(&join_lines(lines), options)
}

/// Parses a single-line dictionary field.
///
/// # Examples
///
/// ```rust
/// use serde_sfv::{parse_dict_line, Encode};
///
/// let dict = parse_dict_line("a=?0, b, c; foo=bar").unwrap();
/// assert_eq!(dict.encode(), "a=?0, b, c;foo=bar");
///
/// // Empty input is an empty dictionary, not an error
/// assert!(parse_dict_line("").unwrap().is_empty());
/// ```
///
/// # Errors
///
/// Returns an error if `line` is not a valid dictionary.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_dict_line(line: &str) -> Result<Dict> {
    parse_dict_line_with_options(line, &ParseOptions::default())
}

/// Parses a single-line dictionary field with custom options.
///
/// # Errors
///
/// Returns an error if `line` is not a valid dictionary.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_dict_line_with_options(line: &str, options: &ParseOptions) -> Result<Dict> {
    Parser::new(line, options).parse_dict()
}

/// Parses a list field given as one or more header lines.
///
/// # Examples
///
/// ```rust
/// use serde_sfv::{parse_list, Encode};
///
/// let list = parse_list(["sugar, tea", "rum"]).unwrap();
/// assert_eq!(list.encode(), "sugar, tea, rum");
/// ```
///
/// # Errors
///
/// Returns an error if the joined text is not a valid list.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_list<I, S>(lines: I) -> Result<List>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parse_list_with_options(lines, &ParseOptions::default())
}

/// Parses a list field given as one or more header lines, with custom options.
///
/// # Errors
///
/// Returns an error if the joined text is not a valid list.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_list_with_options<I, S>(lines: I, options: &ParseOptions) -> Result<List>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parse_list_line_with_options(&join_lines(lines), options)
}

/// Parses a single-line list field.
///
/// # Examples
///
/// ```rust
/// use serde_sfv::parse_list_line;
///
/// let list = parse_list_line("abc;a=1;b=2; cde_456, (ghi;jk=4 l);q=\"9\";r=w").unwrap();
/// assert_eq!(list.len(), 2);
/// ```
///
/// # Errors
///
/// Returns an error if `line` is not a valid list.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_list_line(line: &str) -> Result<List> {
    parse_list_line_with_options(line, &ParseOptions::default())
}

/// Parses a single-line list field with custom options.
///
/// # Errors
///
/// Returns an error if `line` is not a valid list.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_list_line_with_options(line: &str, options: &ParseOptions) -> Result<List> {
    Parser::new(line, options).parse_list()
}

/// Parses a single-line item field. Trailing non-space content is rejected.
///
/// # Examples
///
/// ```rust
/// use serde_sfv::{parse_item_line, Encode, ErrorKind};
///
/// let item = parse_item_line("5; foo=bar").unwrap();
/// assert_eq!(item.encode(), "5;foo=bar");
///
/// let err = parse_item_line("5 garbage").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Unrecognized);
/// ```
///
/// # Errors
///
/// Returns an error if `line` is not exactly one valid item.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_item_line(line: &str) -> Result<Item> {
    parse_item_line_with_options(line, &ParseOptions::default())
}

/// Parses a single-line item field with custom options.
///
/// # Errors
///
/// Returns an error if `line` is not exactly one valid item.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_item_line_with_options(line: &str, options: &ParseOptions) -> Result<Item> {
    Parser::new(line, options).parse_item()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dict_scenarios() {
        let cases = [
            (r#"en="Applepie", da=:w4ZibGV0w6ZydGU=:"#, r#"en="Applepie", da=:w4ZibGV0w6ZydGU=:"#),
            ("a=?0, b, c; foo=bar", "a=?0, b, c;foo=bar"),
            ("rating=1.5, feelings=(joy sadness)", "rating=1.5, feelings=(joy sadness)"),
            (
                "a=(1 2), b=3, c=4;aa=bb, d=(5 6);valid",
                "a=(1 2), b=3, c=4;aa=bb, d=(5 6);valid",
            ),
        ];
        for (input, expected) in cases {
            let dict = parse_dict_line(input).unwrap();
            assert_eq!(dict.encode(), expected, "{}", input);
        }
    }

    #[test]
    fn test_item_scenarios() {
        let cases = [
            ("5; foo=bar", "5;foo=bar"),
            ("4.5", "4.5"),
            (r#""hello world""#, r#""hello world""#),
            ("foo123/456", "foo123/456"),
        ];
        for (input, expected) in cases {
            let item = parse_item_line(input).unwrap();
            assert_eq!(item.encode(), expected, "{}", input);
        }
    }

    #[test]
    fn test_multi_line() {
        assert_eq!(parse_dict(["foo=1", "bar=2"]).unwrap().encode(), "foo=1, bar=2");
        assert_eq!(parse_list(["sugar, tea", "rum"]).unwrap().encode(), "sugar, tea, rum");
        assert!(parse_list(["", "   "]).unwrap().is_empty());
    }

    #[test]
    fn test_from_str() {
        let dict: Dict = "a=1".parse().unwrap();
        assert_eq!(dict.len(), 1);
        let list: List = "1, 2".parse().unwrap();
        assert_eq!(list.len(), 2);
        let item: Item = "?1".parse().unwrap();
        assert_eq!(item.bare, BareItem::Bool(true));
    }
}
