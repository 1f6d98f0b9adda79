//! Structured Field Values grammar
//!
//! This module documents the textual format accepted by the parser and
//! produced by the encoder, as implemented by this library.
//!
//! # Overview
//!
//! A structured field is a single line of text with one of three top-level
//! shapes. The application decides which shape a given header uses; the text
//! alone does not say.
//!
//! | Shape | Example | Parsed with |
//! |-------|---------|-------------|
//! | List | `sugar, tea, rum` | [`parse_list_line`](crate::parse_list_line) |
//! | Dictionary | `u=2, i` | [`parse_dict_line`](crate::parse_dict_line) |
//! | Item | `5;foo=bar` | [`parse_item_line`](crate::parse_item_line) |
//!
//! # Top Level
//!
//! ```text
//! list       = [ member *( OWS "," OWS member ) ]
//! dictionary = [ pair *( OWS "," OWS pair ) ]
//! member     = item / inner-list
//! pair       = key ( "=" member / parameters )
//! ```
//!
//! **Rules**:
//! - Leading spaces are skipped; empty input is an empty list or dictionary
//! - A `,` must be followed by another member: `a, b,` fails at end of input
//! - Parsing stops at the first member not followed by `,`; leftover text is
//!   ignored unless [`ParseOptions::strict_trailing`](crate::ParseOptions) is set
//! - A dictionary key without `=` has the value `?1`, and may carry parameters
//!   directly: `c;foo=bar`
//! - A repeated dictionary key keeps its first position and takes the last value
//!
//! # Items and Inner Lists
//!
//! ```text
//! item       = bare-item parameters
//! inner-list = "(" *SP [ item *( 1*SP item ) *SP ] ")" parameters
//! parameters = *( ";" key [ "=" bare-item ] )
//! ```
//!
//! Inner-list items are separated by spaces only (no commas) and cannot
//! themselves be inner lists. `()` is a valid, empty inner list. Parameters
//! attached after `)` belong to the inner list, not to its last item.
//!
//! # Keys
//!
//! ```text
//! key = ( lcalpha / "*" ) *( lcalpha / DIGIT / "_" / "-" / "." / "*" )
//! ```
//!
//! # Bare Items
//!
//! The first character selects the type:
//!
//! | First character | Type | Example |
//! |-----------------|------|---------|
//! | `-` or digit | Integer or Decimal | `42`, `-1.5` |
//! | `"` | String | `"hello world"` |
//! | `*` or letter | Token | `gzip`, `text/html` |
//! | `:` | Byte Sequence | `:aGVsbG8=:` |
//! | `?` | Boolean | `?1`, `?0` |
//!
//! ## Numbers
//!
//! - At most 15 digits in total, and at most 3 after the decimal point
//! - A decimal point must be followed by at least one digit: `1.` is rejected
//! - Decimals are held as integers scaled by 1000 and always encode with at
//!   least one fractional digit: `1.0`, `1.5`, `1.05`
//! - [`ParseOptions::rfc_decimal_limits`](crate::ParseOptions) additionally
//!   limits the integer part of a decimal to 12 digits
//!
//! ## Strings
//!
//! Printable ASCII (`0x20`..=`0x7E`) between double quotes. The only escapes
//! are `\"` and `\\`; any other backslash sequence is rejected.
//!
//! ## Tokens
//!
//! Start with a letter or `*`, continue with letters, digits and
//! ``! # $ % & ' * + - . ^ _ ` | ~ : /``.
//!
//! ## Byte Sequences
//!
//! Standard (not URL-safe) Base-64 between colons. Padding may be omitted.
//! A payload that is not valid Base-64 decodes to an empty byte sequence
//! unless [`ParseOptions::strict_byte_sequences`](crate::ParseOptions) is set.
//!
//! # Multi-line Fields
//!
//! A field split across several header lines is reassembled with
//! [`join_lines`](crate::join_lines): each line is trimmed, empty lines are
//! dropped, and the rest are joined with `", "`.
//!
//! **Example**:
//! ```text
//! Example-List: sugar, tea
//! Example-List: rum
//! ```
//! parses the same as `sugar, tea, rum`.
//!
//! # Errors
//!
//! | Kind | Raised when |
//! |------|-------------|
//! | [`UnexpectedEol`](crate::ErrorKind::UnexpectedEol) | input ends inside a string, byte sequence, inner list, after `=`, `-`, `?` or `,` |
//! | [`Unrecognized`](crate::ErrorKind::Unrecognized) | a character fits no production at its position |
//! | [`TooManyDigits`](crate::ErrorKind::TooManyDigits) | a number exceeds its digit budget |
