//! The typed value tree of a structured field.
//!
//! Parsing produces one of three top-level shapes, and every node can be
//! encoded back to canonical text:
//!
//! - [`List`]: an ordered sequence of [`Member`]s
//! - [`Dict`](crate::Dict): an ordered map of keys to [`Member`]s
//! - [`Item`]: a single [`BareItem`] with its [`Params`]
//!
//! A [`Member`] is either an [`Item`] or an [`InnerList`]; inner lists hold
//! items only, so they cannot nest. A [`BareItem`] is one of six primitive
//! types. Both unions are closed.
//!
//! ## Creating Values
//!
//! ```rust
//! use serde_sfv::{BareItem, Decimal, InnerList, Item, Encode};
//!
//! let integer = BareItem::from(42);
//! let decimal = BareItem::Decimal(Decimal::from_scaled(1_500));
//! let string = BareItem::from("hello");
//! let token = BareItem::token("gzip").unwrap();
//! let bytes = BareItem::from(&b"hi"[..]);
//!
//! let list = InnerList::new(vec![Item::new(integer), Item::new(token)]);
//! assert_eq!(list.encode(), "(42 gzip)");
//! assert_eq!(decimal.encode(), "1.5");
//! assert_eq!(string.encode(), "\"hello\"");
//! assert_eq!(bytes.encode(), ":aGk=:");
//! ```
//!
//! ## Serde
//!
//! Every node implements `Serialize` and `Deserialize` using the JSON shape of
//! the community structured-field test suite: tokens and byte sequences become
//! `{"__type": ..., "value": ...}` objects, items become `[bare, params]`, and
//! parameters and dictionaries become arrays of `[key, value]` pairs.

use crate::chars;
use crate::ser::Encode;
use crate::{Dict, Error, Params, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

/// A fixed-point number with exactly three fractional digits.
///
/// The value is stored as an integer scaled by 1000, so `1.5` is held as `1500`.
///
/// # Examples
///
/// ```rust
/// use serde_sfv::Decimal;
///
/// assert_eq!(Decimal::from_scaled(1_000).to_string(), "1.0");
/// assert_eq!(Decimal::from_scaled(1_050).to_string(), "1.05");
/// assert_eq!(Decimal::from_f64(-2.3456).unwrap().scaled(), -2_346);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Decimal(i64);

impl Decimal {
    /// Number of scaled units in one whole.
    pub const SCALE: i64 = 1000;

    /// Creates a decimal from its ×1000 scaled representation.
    #[inline]
    #[must_use]
    pub const fn from_scaled(scaled: i64) -> Self {
        Decimal(scaled)
    }

    /// Returns the ×1000 scaled representation.
    #[inline]
    #[must_use]
    pub const fn scaled(self) -> i64 {
        self.0
    }

    /// Rounds `value` half away from zero to three fractional digits.
    ///
    /// Returns `None` for non-finite values and values outside the `i64`
    /// scaled range.
    #[must_use]
    pub fn from_f64(value: f64) -> Option<Self> {
        let scaled = (value * Self::SCALE as f64).round();
        if scaled.is_finite() && scaled >= i64::MIN as f64 && scaled < i64::MAX as f64 {
            Some(Decimal(scaled as i64))
        } else {
            None
        }
    }

    /// Converts the decimal to an `f64`.
    #[inline]
    #[must_use]
    pub fn as_f64(self) -> f64 {
        self.0 as f64 / Self::SCALE as f64
    }
}

/// A primitive value without parameters.
///
/// # Examples
///
/// ```rust
/// use serde_sfv::BareItem;
///
/// let value = BareItem::from(true);
/// assert!(value.is_bool());
/// assert_eq!(value.as_bool(), Some(true));
/// assert_eq!(value.as_integer(), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum BareItem {
    Integer(i64),
    Decimal(Decimal),
    /// Unescaped ASCII text.
    String(String),
    Token(String),
    /// Raw bytes; Base-64 on the wire.
    ByteSeq(Vec<u8>),
    Bool(bool),
}

impl BareItem {
    /// Creates a string item, rejecting characters outside printable ASCII.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_sfv::BareItem;
    ///
    /// assert!(BareItem::string("plain \"quoted\" text").is_ok());
    /// assert!(BareItem::string("tab\there").is_err());
    /// assert!(BareItem::string("füü").is_err());
    /// ```
    pub fn string(s: impl Into<String>) -> Result<Self> {
        let s = s.into();
        match s
            .char_indices()
            .find(|&(_, c)| !c.is_ascii() || !chars::is_print(c as u8))
        {
            Some((pos, found)) => Err(Error::unrecognized(pos, found)),
            None => Ok(BareItem::String(s)),
        }
    }

    /// Creates a token item, rejecting anything the token grammar does not allow.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_sfv::BareItem;
    ///
    /// assert!(BareItem::token("text/html").is_ok());
    /// assert!(BareItem::token("1abc").is_err());
    /// assert!(BareItem::token("").is_err());
    /// ```
    pub fn token(s: impl Into<String>) -> Result<Self> {
        let s = s.into();
        if chars::is_token(&s) {
            return Ok(BareItem::Token(s));
        }
        let pos = match s.as_bytes().first() {
            None => return Err(Error::unexpected_eol(0)),
            Some(&b) if !chars::is_token_start(b) => 0,
            Some(_) => s
                .bytes()
                .position(|b| !chars::is_token_char(b))
                .unwrap_or_default(),
        };
        let found = s[pos..].chars().next().unwrap_or_default();
        Err(Error::unrecognized(pos, found))
    }

    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, BareItem::Integer(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_decimal(&self) -> bool {
        matches!(self, BareItem::Decimal(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, BareItem::String(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_token(&self) -> bool {
        matches!(self, BareItem::Token(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_byte_seq(&self) -> bool {
        matches!(self, BareItem::ByteSeq(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, BareItem::Bool(_))
    }

    #[inline]
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            BareItem::Integer(i) => Some(*i),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            BareItem::Decimal(d) => Some(*d),
            _ => None,
        }
    }

    /// If the value is a string, returns it. Tokens are not returned here;
    /// use [`BareItem::as_token`].
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            BareItem::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_token(&self) -> Option<&str> {
        match self {
            BareItem::Token(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_byte_seq(&self) -> Option<&[u8]> {
        match self {
            BareItem::ByteSeq(b) => Some(b),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            BareItem::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

/// A bare item together with its parameters.
///
/// # Examples
///
/// ```rust
/// use serde_sfv::{Encode, Item, Params};
///
/// let mut params = Params::new();
/// params.add("foo", serde_sfv::BareItem::token("bar").unwrap());
/// let item = Item::with_params(5, params);
/// assert_eq!(item.encode(), "5;foo=bar");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    pub bare: BareItem,
    pub params: Params,
}

impl Item {
    /// Creates an item with no parameters.
    #[must_use]
    pub fn new(bare: impl Into<BareItem>) -> Self {
        Item {
            bare: bare.into(),
            params: Params::new(),
        }
    }

    #[must_use]
    pub fn with_params(bare: impl Into<BareItem>, params: Params) -> Self {
        Item {
            bare: bare.into(),
            params,
        }
    }
}

/// A parenthesised sequence of items with parameters of its own.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct InnerList {
    pub items: Vec<Item>,
    pub params: Params,
}

impl InnerList {
    #[must_use]
    pub fn new(items: Vec<Item>) -> Self {
        InnerList {
            items,
            params: Params::new(),
        }
    }

    #[must_use]
    pub fn with_params(items: Vec<Item>, params: Params) -> Self {
        InnerList { items, params }
    }
}

/// A member of a list or the value of a dictionary entry.
#[derive(Clone, Debug, PartialEq)]
pub enum Member {
    Item(Item),
    InnerList(InnerList),
}

impl Member {
    #[inline]
    #[must_use]
    pub fn as_item(&self) -> Option<&Item> {
        match self {
            Member::Item(item) => Some(item),
            Member::InnerList(_) => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_inner_list(&self) -> Option<&InnerList> {
        match self {
            Member::InnerList(list) => Some(list),
            Member::Item(_) => None,
        }
    }

    /// Returns the parameters attached to the item or inner list.
    #[must_use]
    pub fn params(&self) -> &Params {
        match self {
            Member::Item(item) => &item.params,
            Member::InnerList(list) => &list.params,
        }
    }
}

/// A dictionary entry.
#[derive(Clone, Debug, PartialEq)]
pub struct Pair {
    pub key: String,
    pub value: Member,
}

/// A parameter entry.
#[derive(Clone, Debug, PartialEq)]
pub struct Param {
    pub key: String,
    pub value: BareItem,
}

/// An ordered sequence of members, the value of a list field.
///
/// # Examples
///
/// ```rust
/// use serde_sfv::{Encode, Item, List};
///
/// let mut list = List::new();
/// list.push(Item::new(serde_sfv::BareItem::token("sugar").unwrap()));
/// list.push(Item::new(serde_sfv::BareItem::token("tea").unwrap()));
/// assert_eq!(list.len(), 2);
/// assert_eq!(list.encode(), "sugar, tea");
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub struct List(Vec<Member>);

impl List {
    #[must_use]
    pub fn new() -> Self {
        List(Vec::new())
    }

    pub fn push(&mut self, member: impl Into<Member>) {
        self.0.push(member.into());
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<Member> {
        self.0
    }
}

impl Deref for List {
    type Target = [Member];

    fn deref(&self) -> &[Member] {
        &self.0
    }
}

impl From<Vec<Member>> for List {
    fn from(members: Vec<Member>) -> Self {
        List(members)
    }
}

impl FromIterator<Member> for List {
    fn from_iter<T: IntoIterator<Item = Member>>(iter: T) -> Self {
        List(iter.into_iter().collect())
    }
}

impl IntoIterator for List {
    type Item = Member;
    type IntoIter = std::vec::IntoIter<Member>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Member;
    type IntoIter = std::slice::Iter<'a, Member>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// From implementations for building bare items from primitives

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for BareItem {
                fn from(value: $t) -> Self {
                    BareItem::Integer(value as i64)
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<Decimal> for BareItem {
    fn from(value: Decimal) -> Self {
        BareItem::Decimal(value)
    }
}

impl From<bool> for BareItem {
    fn from(value: bool) -> Self {
        BareItem::Bool(value)
    }
}

/// Unchecked: see [`BareItem::string`] for validation.
impl From<&str> for BareItem {
    fn from(value: &str) -> Self {
        BareItem::String(value.to_string())
    }
}

impl From<String> for BareItem {
    fn from(value: String) -> Self {
        BareItem::String(value)
    }
}

impl From<Vec<u8>> for BareItem {
    fn from(value: Vec<u8>) -> Self {
        BareItem::ByteSeq(value)
    }
}

impl From<&[u8]> for BareItem {
    fn from(value: &[u8]) -> Self {
        BareItem::ByteSeq(value.to_vec())
    }
}

impl From<Item> for Member {
    fn from(value: Item) -> Self {
        Member::Item(value)
    }
}

impl From<InnerList> for Member {
    fn from(value: InnerList) -> Self {
        Member::InnerList(value)
    }
}

impl From<BareItem> for Member {
    fn from(value: BareItem) -> Self {
        Member::Item(Item::new(value))
    }
}

impl From<BareItem> for Item {
    fn from(value: BareItem) -> Self {
        Item::new(value)
    }
}

// Canonical text rendering

macro_rules! impl_display_via_encode {
    ($($t:ty),*) => {
        $(
            impl fmt::Display for $t {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.encode())
                }
            }
        )*
    };
}

impl_display_via_encode!(Decimal, BareItem, Item, InnerList, Member, Pair, Param, List, Dict, Params);

impl FromStr for List {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::parse_list_line(s)
    }
}

impl FromStr for Dict {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::parse_dict_line(s)
    }
}

impl FromStr for Item {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::parse_item_line(s)
    }
}

// Serde: the JSON shape of the structured-field test suite

const TYPE_FIELD: &str = "__type";
const VALUE_FIELD: &str = "value";

impl Serialize for BareItem {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            BareItem::Integer(i) => serializer.serialize_i64(*i),
            BareItem::Decimal(d) => serializer.serialize_f64(d.as_f64()),
            BareItem::String(s) => serializer.serialize_str(s),
            BareItem::Token(t) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry(TYPE_FIELD, "token")?;
                map.serialize_entry(VALUE_FIELD, t)?;
                map.end()
            }
            BareItem::ByteSeq(b) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry(TYPE_FIELD, "binary")?;
                map.serialize_entry(VALUE_FIELD, &STANDARD.encode(b))?;
                map.end()
            }
            BareItem::Bool(b) => serializer.serialize_bool(*b),
        }
    }
}

impl<'de> Deserialize<'de> for BareItem {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BareItemVisitor;

        impl<'de> Visitor<'de> for BareItemVisitor {
            type Value = BareItem;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a structured field bare item")
            }

            fn visit_bool<E>(self, value: bool) -> std::result::Result<BareItem, E> {
                Ok(BareItem::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> std::result::Result<BareItem, E> {
                Ok(BareItem::Integer(value))
            }

            fn visit_u64<E>(self, value: u64) -> std::result::Result<BareItem, E>
            where
                E: de::Error,
            {
                i64::try_from(value)
                    .map(BareItem::Integer)
                    .map_err(|_| E::custom(format!("integer {} out of range", value)))
            }

            fn visit_f64<E>(self, value: f64) -> std::result::Result<BareItem, E>
            where
                E: de::Error,
            {
                Decimal::from_f64(value)
                    .map(BareItem::Decimal)
                    .ok_or_else(|| E::custom(format!("decimal {} out of range", value)))
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<BareItem, E> {
                Ok(BareItem::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> std::result::Result<BareItem, E> {
                Ok(BareItem::String(value))
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<BareItem, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut kind: Option<String> = None;
                let mut value: Option<String> = None;
                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        TYPE_FIELD => kind = Some(map.next_value()?),
                        VALUE_FIELD => value = Some(map.next_value()?),
                        _ => {
                            map.next_value::<de::IgnoredAny>()?;
                        }
                    }
                }
                let kind = kind.ok_or_else(|| de::Error::missing_field(TYPE_FIELD))?;
                let value = value.ok_or_else(|| de::Error::missing_field(VALUE_FIELD))?;
                match kind.as_str() {
                    "token" => Ok(BareItem::Token(value)),
                    "binary" => STANDARD
                        .decode(value.as_bytes())
                        .map(BareItem::ByteSeq)
                        .map_err(de::Error::custom),
                    other => Err(de::Error::unknown_variant(other, &["token", "binary"])),
                }
            }
        }

        deserializer.deserialize_any(BareItemVisitor)
    }
}

impl Serialize for Params {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for Params {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let pairs = Vec::<(String, BareItem)>::deserialize(deserializer)?;
        Ok(pairs.into_iter().collect())
    }
}

impl Serialize for Item {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (&self.bare, &self.params).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Item {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (bare, params) = <(BareItem, Params)>::deserialize(deserializer)?;
        Ok(Item { bare, params })
    }
}

impl Serialize for InnerList {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (&self.items, &self.params).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for InnerList {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (items, params) = <(Vec<Item>, Params)>::deserialize(deserializer)?;
        Ok(InnerList { items, params })
    }
}

impl Serialize for Member {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Member::Item(item) => item.serialize(serializer),
            Member::InnerList(list) => list.serialize(serializer),
        }
    }
}

// An inner list's first element is an array; an item's is a bare item.
#[derive(Deserialize)]
#[serde(untagged)]
enum MemberRepr {
    InnerList(Vec<Item>, Params),
    Item(BareItem, Params),
}

impl<'de> Deserialize<'de> for Member {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match MemberRepr::deserialize(deserializer)? {
            MemberRepr::InnerList(items, params) => Member::InnerList(InnerList { items, params }),
            MemberRepr::Item(bare, params) => Member::Item(Item { bare, params }),
        })
    }
}

impl Serialize for List {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for List {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec::<Member>::deserialize(deserializer).map(List)
    }
}

impl Serialize for Dict {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for Dict {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let pairs = Vec::<(String, Member)>::deserialize(deserializer)?;
        Ok(pairs.into_iter().collect())
    }
}
