//! Canonical text encoding.
//!
//! This module provides the [`Encode`] trait, implemented by every node of the
//! value tree, and the [`Serializer`] that accumulates output. Encoding is
//! total: any value the model can hold renders without error.
//!
//! ## Canonical Form
//!
//! - List members and dictionary entries are joined with `", "`
//! - Inner-list items are joined with a single space
//! - Each parameter is prefixed with `;`
//! - A parameter or dictionary value that is exactly `?1` is written as the
//!   bare key (`a;flag` rather than `a;flag=?1`)
//! - Decimals drop trailing fractional zeros but keep at least one digit
//!
//! ## Usage
//!
//! ```rust
//! use serde_sfv::{parse_dict_line, Encode};
//!
//! let dict = parse_dict_line("a=?0, b, c; foo=bar").unwrap();
//! assert_eq!(dict.encode(), "a=?0, b, c;foo=bar");
//! ```
//!
//! ## Direct Serializer Usage
//!
//! ```rust
//! use serde_sfv::{BareItem, Encode, Serializer};
//!
//! let mut serializer = Serializer::new();
//! serializer.write_bare_item(&BareItem::from(42));
//! serializer.write_str(", ");
//! serializer.write_bare_item(&BareItem::from(true));
//! assert_eq!(serializer.into_inner(), "42, ?1");
//! ```

use crate::{BareItem, Decimal, Dict, InnerList, Item, List, Member, Pair, Param, Params};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::fmt::Write as _;

/// Renders a value-tree node as canonical structured field text.
pub trait Encode {
    /// Appends the canonical text of `self` to `out`.
    fn encode_to(&self, out: &mut String);

    /// Returns the canonical text of `self`.
    fn encode(&self) -> String {
        let mut out = String::new();
        self.encode_to(&mut out);
        out
    }
}

/// Encodes any node to its canonical text.
///
/// # Examples
///
/// ```rust
/// use serde_sfv::{to_string, Decimal, Item};
///
/// assert_eq!(to_string(&Item::new(Decimal::from_scaled(4_500))), "4.5");
/// ```
#[must_use]
pub fn to_string<T>(value: &T) -> String
where
    T: ?Sized + Encode,
{
    value.encode()
}

/// Accumulates canonical structured field text.
#[derive(Debug, Default)]
pub struct Serializer {
    output: String,
}

impl Serializer {
    pub fn new() -> Self {
        // Header values are short; 64 bytes covers most of them
        Serializer {
            output: String::with_capacity(64),
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    /// Appends raw text without validation.
    pub fn write_str(&mut self, s: &str) {
        self.output.push_str(s);
    }

    pub fn write_list(&mut self, list: &List) {
        for (i, member) in list.iter().enumerate() {
            if i > 0 {
                self.output.push_str(", ");
            }
            self.write_member(member);
        }
    }

    pub fn write_dict(&mut self, dict: &Dict) {
        for (i, (key, value)) in dict.iter().enumerate() {
            if i > 0 {
                self.output.push_str(", ");
            }
            self.write_entry(key, value);
        }
    }

    pub fn write_member(&mut self, member: &Member) {
        match member {
            Member::Item(item) => self.write_item(item),
            Member::InnerList(list) => self.write_inner_list(list),
        }
    }

    pub fn write_inner_list(&mut self, list: &InnerList) {
        self.output.push('(');
        for (i, item) in list.items.iter().enumerate() {
            if i > 0 {
                self.output.push(' ');
            }
            self.write_item(item);
        }
        self.output.push(')');
        self.write_params(&list.params);
    }

    pub fn write_item(&mut self, item: &Item) {
        self.write_bare_item(&item.bare);
        self.write_params(&item.params);
    }

    pub fn write_params(&mut self, params: &Params) {
        for (key, value) in params {
            self.write_param(key, value);
        }
    }

    pub fn write_param(&mut self, key: &str, value: &BareItem) {
        self.output.push(';');
        self.output.push_str(key);
        if *value != BareItem::Bool(true) {
            self.output.push('=');
            self.write_bare_item(value);
        }
    }

    pub fn write_bare_item(&mut self, bare: &BareItem) {
        match bare {
            BareItem::Integer(i) => {
                let _ = write!(self.output, "{}", i);
            }
            BareItem::Decimal(d) => self.write_decimal(*d),
            BareItem::String(s) => self.write_string(s),
            BareItem::Token(t) => self.output.push_str(t),
            BareItem::ByteSeq(b) => {
                self.output.push(':');
                STANDARD.encode_string(b, &mut self.output);
                self.output.push(':');
            }
            BareItem::Bool(b) => self.output.push_str(if *b { "?1" } else { "?0" }),
        }
    }

    pub fn write_decimal(&mut self, decimal: Decimal) {
        let scaled = decimal.scaled();
        if scaled < 0 {
            self.output.push('-');
        }
        let magnitude = scaled.unsigned_abs();
        let int_part = magnitude / Decimal::SCALE as u64;
        let frac_part = magnitude % Decimal::SCALE as u64;
        let _ = write!(self.output, "{}.", int_part);

        let mut digits = format!("{:03}", frac_part);
        while digits.len() > 1 && digits.ends_with('0') {
            digits.pop();
        }
        self.output.push_str(&digits);
    }

    /// Writes a quoted string. Characters outside printable ASCII cannot occur
    /// in parsed values; when present they are written as ASCII escapes so the
    /// output stays ASCII-only.
    pub fn write_string(&mut self, s: &str) {
        self.output.push('"');
        for ch in s.chars() {
            match ch {
                '"' => self.output.push_str("\\\""),
                '\\' => self.output.push_str("\\\\"),
                ' '..='~' => self.output.push(ch),
                '\n' => self.output.push_str("\\n"),
                '\r' => self.output.push_str("\\r"),
                '\t' => self.output.push_str("\\t"),
                c if (c as u32) < 0x80 => {
                    let _ = write!(self.output, "\\x{:02x}", c as u32);
                }
                c if (c as u32) <= 0xffff => {
                    let _ = write!(self.output, "\\u{:04x}", c as u32);
                }
                c => {
                    let _ = write!(self.output, "\\U{:08x}", c as u32);
                }
            }
        }
        self.output.push('"');
    }

    fn write_entry(&mut self, key: &str, value: &Member) {
        self.output.push_str(key);
        match value {
            // Implicit `true`: only the parameters follow the key
            Member::Item(item) if item.bare == BareItem::Bool(true) => {
                self.write_params(&item.params);
            }
            _ => {
                self.output.push('=');
                self.write_member(value);
            }
        }
    }
}

macro_rules! impl_encode {
    ($($t:ty => $method:ident),* $(,)?) => {
        $(
            impl Encode for $t {
                fn encode_to(&self, out: &mut String) {
                    let mut serializer = Serializer {
                        output: std::mem::take(out),
                    };
                    serializer.$method(self);
                    *out = serializer.into_inner();
                }
            }
        )*
    };
}

impl_encode!(
    List => write_list,
    Dict => write_dict,
    Member => write_member,
    InnerList => write_inner_list,
    Item => write_item,
    Params => write_params,
    BareItem => write_bare_item,
);

impl Encode for Decimal {
    fn encode_to(&self, out: &mut String) {
        let mut serializer = Serializer {
            output: std::mem::take(out),
        };
        serializer.write_decimal(*self);
        *out = serializer.into_inner();
    }
}

impl Encode for Pair {
    fn encode_to(&self, out: &mut String) {
        let mut serializer = Serializer {
            output: std::mem::take(out),
        };
        serializer.write_entry(&self.key, &self.value);
        *out = serializer.into_inner();
    }
}

impl Encode for Param {
    fn encode_to(&self, out: &mut String) {
        let mut serializer = Serializer {
            output: std::mem::take(out),
        };
        serializer.write_param(&self.key, &self.value);
        *out = serializer.into_inner();
    }
}
