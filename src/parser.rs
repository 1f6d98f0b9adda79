//! Structured field parsing.
//!
//! This module provides the recursive-descent [`Parser`] that turns header text
//! into a typed value tree. Each production consumes a prefix of the remaining
//! input and advances a single cursor; the first error aborts the whole parse.
//!
//! ## Overview
//!
//! - **Single pass**: O(n) with one byte of lookahead and no backtracking
//!   beyond the spaces skipped while looking for a parameter
//! - **Dispatch by first byte**: `-`/digit, `"`, `*`/letter, `:` and `?` select
//!   the number, string, token, byte sequence and boolean parsers
//! - **Positions in errors**: every [`Error`] records the byte offset where
//!   parsing stopped
//!
//! ## Usage
//!
//! Most users should use the entry points in the crate root:
//!
//! ```rust
//! use serde_sfv::{parse_list_line, Encode};
//!
//! let list = parse_list_line("sugar, tea, rum").unwrap();
//! assert_eq!(list.len(), 3);
//! assert_eq!(list.encode(), "sugar, tea, rum");
//! ```

use crate::chars;
use crate::{
    BareItem, Decimal, Dict, Error, InnerList, Item, List, Member, Pair, ParseOptions, Params,
    Result,
};
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;

/// Upper bound on the digits of an integer or decimal.
const MAX_DIGITS: usize = 15;
/// Upper bound on fractional digits of a decimal.
const MAX_FRACTION_DIGITS: usize = 3;
/// Upper bound on integer digits of a decimal under [`ParseOptions::rfc_decimal_limits`].
const MAX_DECIMAL_INTEGER_DIGITS: usize = 12;

// Padding may be omitted and trailing bits may be non-zero.
const BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Trims each fragment, drops empty ones and joins the rest with `", "`.
///
/// This is how a field split over several header lines is reassembled before
/// parsing.
///
/// # Examples
///
/// ```rust
/// use serde_sfv::join_lines;
///
/// assert_eq!(join_lines(["  sugar, tea ", "", "rum"]), "sugar, tea, rum");
/// assert_eq!(join_lines(Vec::<String>::new()), "");
/// ```
pub fn join_lines<I, S>(fragments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut joined = String::new();
    for fragment in fragments {
        let trimmed = fragment.as_ref().trim();
        if trimmed.is_empty() {
            continue;
        }
        if !joined.is_empty() {
            joined.push_str(", ");
        }
        joined.push_str(trimmed);
    }
    joined
}

/// The structured field parser.
///
/// Created over one line of input with [`Parser::new`]; call exactly one of
/// [`Parser::parse_list`], [`Parser::parse_dict`] or [`Parser::parse_item`].
///
/// # Examples
///
/// ```rust
/// use serde_sfv::{ParseOptions, Parser};
///
/// let options = ParseOptions::default();
/// let mut parser = Parser::new("u=2, i", &options);
/// let dict = parser.parse_dict().unwrap();
/// assert_eq!(dict.len(), 2);
/// ```
pub struct Parser<'a> {
    input: &'a str,
    position: usize,
    options: &'a ParseOptions,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str, options: &'a ParseOptions) -> Self {
        Parser {
            input,
            position: 0,
            options,
        }
    }

    /// Parses the whole input as a list. Empty input yields an empty list.
    pub fn parse_list(&mut self) -> Result<List> {
        let mut list = List::new();
        self.skip_spaces();
        if self.at_end() {
            return Ok(list);
        }
        loop {
            list.push(self.parse_member()?);
            if !self.next_member()? {
                return Ok(list);
            }
        }
    }

    /// Parses the whole input as a dictionary. Empty input yields an empty
    /// dictionary; a repeated key keeps its first position and its last value.
    pub fn parse_dict(&mut self) -> Result<Dict> {
        let mut dict = Dict::new();
        self.skip_spaces();
        if self.at_end() {
            return Ok(dict);
        }
        loop {
            let pair = self.parse_pair()?;
            dict.add(pair.key, pair.value);
            if !self.next_member()? {
                return Ok(dict);
            }
        }
    }

    /// Parses the whole input as a single item; trailing content is rejected.
    pub fn parse_item(&mut self) -> Result<Item> {
        let item = self.parse_item_prefix()?;
        self.skip_spaces();
        if !self.at_end() {
            return Err(self.unrecognized_here());
        }
        Ok(item)
    }

    /// Returns the current byte offset.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }
}

impl Parser<'_> {
    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.position).copied()
    }

    fn at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn skip_spaces(&mut self) {
        while self.peek() == Some(b' ') {
            self.position += 1;
        }
    }

    /// Error for the character at the cursor, or end of input if there is none.
    fn unrecognized_here(&self) -> Error {
        match self.input[self.position..].chars().next() {
            Some(found) => Error::unrecognized(self.position, found),
            None => Error::unexpected_eol(self.position),
        }
    }

    /// After a top-level member: `Ok(true)` if a `,` was consumed, `Ok(false)`
    /// if the field ends here. Leftover text ends the field unless
    /// [`ParseOptions::strict_trailing`] is set.
    fn next_member(&mut self) -> Result<bool> {
        self.skip_spaces();
        match self.peek() {
            None => Ok(false),
            Some(b',') => {
                self.position += 1;
                Ok(true)
            }
            Some(_) if self.options.strict_trailing => Err(self.unrecognized_here()),
            Some(_) => Ok(false),
        }
    }

    fn parse_pair(&mut self) -> Result<Pair> {
        let key = self.parse_key()?;
        let value = if self.peek() == Some(b'=') {
            self.position += 1;
            self.parse_member()?
        } else {
            let params = self.parse_params()?;
            Member::Item(Item::with_params(true, params))
        };
        Ok(Pair { key, value })
    }

    fn parse_member(&mut self) -> Result<Member> {
        self.skip_spaces();
        match self.peek() {
            None => Err(Error::unexpected_eol(self.position)),
            Some(b'(') => self.parse_inner_list().map(Member::InnerList),
            Some(_) => self.parse_item_prefix().map(Member::Item),
        }
    }

    fn parse_inner_list(&mut self) -> Result<InnerList> {
        // Caller guarantees the opening parenthesis
        self.position += 1;
        let mut items = Vec::new();
        loop {
            self.skip_spaces();
            match self.peek() {
                None => return Err(Error::unexpected_eol(self.position)),
                Some(b')') => {
                    self.position += 1;
                    break;
                }
                Some(_) => {}
            }
            items.push(self.parse_item_prefix()?);
            match self.peek() {
                None => return Err(Error::unexpected_eol(self.position)),
                Some(b' ') | Some(b')') => {}
                Some(_) => return Err(self.unrecognized_here()),
            }
        }
        let params = self.parse_params()?;
        Ok(InnerList::with_params(items, params))
    }

    fn parse_item_prefix(&mut self) -> Result<Item> {
        let bare = self.parse_bare_item()?;
        let params = self.parse_params()?;
        Ok(Item::with_params(bare, params))
    }

    fn parse_params(&mut self) -> Result<Params> {
        let mut params = Params::new();
        loop {
            let start = self.position;
            self.skip_spaces();
            if self.peek() != Some(b';') {
                // Spaces belong to the caller unless a parameter follows
                self.position = start;
                return Ok(params);
            }
            self.position += 1;
            let key = self.parse_key()?;
            let value = if self.peek() == Some(b'=') {
                self.position += 1;
                self.parse_bare_item()?
            } else {
                BareItem::Bool(true)
            };
            params.add(key, value);
        }
    }

    fn parse_key(&mut self) -> Result<String> {
        self.skip_spaces();
        match self.peek() {
            None => return Err(Error::unexpected_eol(self.position)),
            Some(b) if !chars::is_key_start(b) => return Err(self.unrecognized_here()),
            Some(_) => {}
        }
        let start = self.position;
        while self.peek().is_some_and(chars::is_key_char) {
            self.position += 1;
        }
        Ok(self.input[start..self.position].to_string())
    }

    fn parse_bare_item(&mut self) -> Result<BareItem> {
        self.skip_spaces();
        match self.peek() {
            None => Err(Error::unexpected_eol(self.position)),
            Some(b) if b == b'-' || chars::is_digit(b) => self.parse_number(),
            Some(b'"') => self.parse_string(),
            Some(b) if chars::is_token_start(b) => Ok(self.parse_token()),
            Some(b':') => self.parse_byte_seq(),
            Some(b'?') => self.parse_bool(),
            Some(_) => Err(self.unrecognized_here()),
        }
    }

    fn parse_number(&mut self) -> Result<BareItem> {
        let negative = self.peek() == Some(b'-');
        if negative {
            self.position += 1;
        }
        match self.peek() {
            None => return Err(Error::unexpected_eol(self.position)),
            Some(b) if !chars::is_digit(b) => return Err(self.unrecognized_here()),
            Some(_) => {}
        }

        let mut value: i64 = 0;
        let mut digits = 0;
        // Digits after the decimal point, once one has been seen
        let mut fraction: Option<usize> = None;
        while let Some(b) = self.peek() {
            if chars::is_digit(b) {
                if digits == MAX_DIGITS {
                    return Err(Error::too_many_digits(self.position));
                }
                if let Some(n) = fraction {
                    if n == MAX_FRACTION_DIGITS {
                        return Err(Error::too_many_digits(self.position));
                    }
                    fraction = Some(n + 1);
                }
                value = value * 10 + i64::from(b - b'0');
                digits += 1;
            } else if b == b'.' {
                if fraction.is_some() {
                    break;
                }
                if self.options.rfc_decimal_limits && digits > MAX_DECIMAL_INTEGER_DIGITS {
                    return Err(Error::too_many_digits(self.position));
                }
                fraction = Some(0);
            } else {
                break;
            }
            self.position += 1;
        }

        let value = if negative { -value } else { value };
        match fraction {
            None => Ok(BareItem::Integer(value)),
            // A point must be followed by at least one digit
            Some(0) => Err(Error::unrecognized(self.position - 1, '.')),
            Some(n) => {
                let scale = 10i64.pow((MAX_FRACTION_DIGITS - n) as u32);
                Ok(BareItem::Decimal(Decimal::from_scaled(value * scale)))
            }
        }
    }

    fn parse_string(&mut self) -> Result<BareItem> {
        self.position += 1;
        let mut result = String::new();
        loop {
            match self.peek() {
                None => return Err(Error::unexpected_eol(self.position)),
                Some(b'"') => {
                    self.position += 1;
                    return Ok(BareItem::String(result));
                }
                Some(b'\\') => {
                    self.position += 1;
                    match self.peek() {
                        None => return Err(Error::unexpected_eol(self.position)),
                        Some(c @ (b'"' | b'\\')) => result.push(c as char),
                        Some(_) => return Err(self.unrecognized_here()),
                    }
                }
                Some(c) if chars::is_print(c) => result.push(c as char),
                Some(_) => return Err(self.unrecognized_here()),
            }
            self.position += 1;
        }
    }

    fn parse_token(&mut self) -> BareItem {
        let start = self.position;
        self.position += 1;
        while self.peek().is_some_and(chars::is_token_char) {
            self.position += 1;
        }
        BareItem::Token(self.input[start..self.position].to_string())
    }

    fn parse_byte_seq(&mut self) -> Result<BareItem> {
        self.position += 1;
        let start = self.position;
        loop {
            match self.peek() {
                None => return Err(Error::unexpected_eol(self.position)),
                Some(b':') => break,
                Some(b) if chars::is_base64_char(b) => self.position += 1,
                Some(_) => return Err(self.unrecognized_here()),
            }
        }
        let payload = &self.input[start..self.position];
        self.position += 1;

        match BASE64.decode(payload) {
            Ok(bytes) => Ok(BareItem::ByteSeq(bytes)),
            Err(err) if self.options.strict_byte_sequences => {
                tracing::debug!(position = start, error = %err, "rejecting malformed byte sequence");
                let found = payload.chars().next().unwrap_or(':');
                Err(Error::unrecognized(start, found))
            }
            Err(err) => {
                tracing::debug!(
                    position = start,
                    len = payload.len(),
                    error = %err,
                    "dropping malformed byte sequence"
                );
                Ok(BareItem::ByteSeq(Vec::new()))
            }
        }
    }

    fn parse_bool(&mut self) -> Result<BareItem> {
        self.position += 1;
        let value = match self.peek() {
            None => return Err(Error::unexpected_eol(self.position)),
            Some(b'0') => false,
            Some(b'1') => true,
            Some(_) => return Err(self.unrecognized_here()),
        };
        self.position += 1;
        Ok(BareItem::Bool(value))
    }
}
