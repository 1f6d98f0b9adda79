//! Ordered, keyed containers for dictionaries and parameter lists.
//!
//! This module provides [`Dict`] and [`Params`], thin wrappers around
//! [`IndexMap`]. Both share one rule: adding an existing key replaces its
//! value *in place*, keeping the key's original position. Key order is part
//! of the wire format, so it is also part of equality: two dictionaries with
//! the same entries in a different order are not equal.
//!
//! ## Examples
//!
//! ```rust
//! use serde_sfv::{Dict, Encode, Item};
//!
//! let mut dict = Dict::new();
//! dict.add("a", Item::new(1));
//! dict.add("b", Item::new(2));
//! dict.add("a", Item::new(3));
//!
//! assert_eq!(dict.encode(), "a=3, b=2");
//! ```

use crate::chars;
use crate::{BareItem, Error, Member, Pair, Param, Result};
use indexmap::IndexMap;

/// An ordered map of keys to list members, the value of a dictionary field.
///
/// # Examples
///
/// ```rust
/// use serde_sfv::{Dict, Item, Member};
///
/// let mut dict = Dict::new();
/// dict.add("first", Item::new(1));
/// dict.add("second", Item::new(2));
///
/// // Iteration maintains insertion order
/// let keys: Vec<_> = dict.keys().map(String::as_str).collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Dict(IndexMap<String, Member>);

impl Dict {
    /// Creates an empty `Dict`.
    #[must_use]
    pub fn new() -> Self {
        Dict(IndexMap::new())
    }

    /// Creates an empty `Dict` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Dict(IndexMap::with_capacity(capacity))
    }

    /// Adds a member under `key`.
    ///
    /// If the key is already present its value is replaced without moving it,
    /// and the old value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_sfv::{Dict, Encode, Item};
    ///
    /// let mut dict = Dict::new();
    /// assert!(dict.add("a", Item::new(1)).is_none());
    /// dict.add("b", Item::new(2));
    /// assert!(dict.add("a", Item::new(3)).is_some());
    /// assert_eq!(dict.encode(), "a=3, b=2");
    /// ```
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<Member>) -> Option<Member> {
        self.0.insert(key.into(), value.into())
    }

    /// Like [`Dict::add`], but rejects keys that could not be parsed back.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_sfv::{Dict, Item};
    ///
    /// let mut dict = Dict::new();
    /// assert!(dict.try_add("ok-key", Item::new(1)).is_ok());
    /// assert!(dict.try_add("Bad", Item::new(1)).is_err());
    /// ```
    pub fn try_add(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Member>,
    ) -> Result<Option<Member>> {
        let key = key.into();
        check_key(&key)?;
        Ok(self.add(key, value))
    }

    /// Returns the member stored under `key`, or `None` if absent.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Member> {
        self.0.get(key)
    }

    /// Returns `true` if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys, in wire order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Member> {
        self.0.keys()
    }

    /// Returns an iterator over the members, in wire order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, Member> {
        self.0.values()
    }

    /// Returns an iterator over the key-member pairs, in wire order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Member> {
        self.0.iter()
    }
}

impl PartialEq for Dict {
    fn eq(&self, other: &Self) -> bool {
        self.0.iter().eq(other.0.iter())
    }
}

impl IntoIterator for Dict {
    type Item = (String, Member);
    type IntoIter = indexmap::map::IntoIter<String, Member>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Dict {
    type Item = (&'a String, &'a Member);
    type IntoIter = indexmap::map::Iter<'a, String, Member>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Member)> for Dict {
    fn from_iter<T: IntoIterator<Item = (String, Member)>>(iter: T) -> Self {
        let mut dict = Dict::new();
        for (key, value) in iter {
            dict.add(key, value);
        }
        dict
    }
}

impl FromIterator<Pair> for Dict {
    fn from_iter<T: IntoIterator<Item = Pair>>(iter: T) -> Self {
        iter.into_iter().map(|p| (p.key, p.value)).collect()
    }
}

/// An ordered map of keys to bare items, attached to an item or inner list.
///
/// # Examples
///
/// ```rust
/// use serde_sfv::{Decimal, Encode, Params};
///
/// let mut params = Params::new();
/// params.add("q", Decimal::from_scaled(500));
/// params.add("a", true);
/// assert_eq!(params.encode(), ";q=0.5;a");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Params(IndexMap<String, BareItem>);

impl Params {
    /// Creates an empty `Params`.
    #[must_use]
    pub fn new() -> Self {
        Params(IndexMap::new())
    }

    /// Creates an empty `Params` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Params(IndexMap::with_capacity(capacity))
    }

    /// Adds a parameter, replacing an existing value in place.
    ///
    /// Returns the replaced value, if any.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<BareItem>) -> Option<BareItem> {
        self.0.insert(key.into(), value.into())
    }

    /// Like [`Params::add`], but rejects keys that could not be parsed back.
    pub fn try_add(
        &mut self,
        key: impl Into<String>,
        value: impl Into<BareItem>,
    ) -> Result<Option<BareItem>> {
        let key = key.into();
        check_key(&key)?;
        Ok(self.add(key, value))
    }

    /// Returns the value of parameter `key`, or `None` if absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_sfv::{BareItem, Params};
    ///
    /// let mut params = Params::new();
    /// params.add("u", 3);
    /// assert_eq!(params.get("u"), Some(&BareItem::Integer(3)));
    /// assert_eq!(params.get("i"), None);
    /// ```
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&BareItem> {
        self.0.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> indexmap::map::Keys<'_, String, BareItem> {
        self.0.keys()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, BareItem> {
        self.0.iter()
    }
}

impl PartialEq for Params {
    fn eq(&self, other: &Self) -> bool {
        self.0.iter().eq(other.0.iter())
    }
}

impl IntoIterator for Params {
    type Item = (String, BareItem);
    type IntoIter = indexmap::map::IntoIter<String, BareItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = (&'a String, &'a BareItem);
    type IntoIter = indexmap::map::Iter<'a, String, BareItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, BareItem)> for Params {
    fn from_iter<T: IntoIterator<Item = (String, BareItem)>>(iter: T) -> Self {
        let mut params = Params::new();
        for (key, value) in iter {
            params.add(key, value);
        }
        params
    }
}

impl FromIterator<Param> for Params {
    fn from_iter<T: IntoIterator<Item = Param>>(iter: T) -> Self {
        iter.into_iter().map(|p| (p.key, p.value)).collect()
    }
}

fn check_key(key: &str) -> Result<()> {
    if chars::is_key(key) {
        return Ok(());
    }
    // First offending byte: the start byte when it cannot open a key, else the
    // first byte outside the key alphabet.
    let pos = match key.as_bytes().first() {
        None => return Err(Error::unexpected_eol(0)),
        Some(&b) if !chars::is_key_start(b) => 0,
        Some(_) => key
            .bytes()
            .position(|b| !chars::is_key_char(b))
            .unwrap_or_default(),
    };
    let found = key[pos..].chars().next().unwrap_or_default();
    Err(Error::unrecognized(pos, found))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ErrorKind, Item};

    #[test]
    fn test_add_preserves_position() {
        let mut dict = Dict::new();
        dict.add("a", Item::new(1));
        dict.add("b", Item::new(2));
        let old = dict.add("a", Item::new(3));

        assert_eq!(old, Some(Member::Item(Item::new(1))));
        let keys: Vec<_> = dict.keys().cloned().collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(dict.get("a"), Some(&Member::Item(Item::new(3))));
    }

    #[test]
    fn test_params_add_preserves_position() {
        let mut params = Params::new();
        params.add("x", 1);
        params.add("y", 2);
        params.add("x", false);

        let entries: Vec<_> = params.iter().collect();
        assert_eq!(entries[0], (&"x".to_string(), &BareItem::Bool(false)));
        assert_eq!(entries[1], (&"y".to_string(), &BareItem::Integer(2)));
    }

    #[test]
    fn test_equality_is_order_sensitive() {
        let ab: Params = vec![
            ("a".to_string(), BareItem::Integer(1)),
            ("b".to_string(), BareItem::Integer(2)),
        ]
        .into_iter()
        .collect();
        let ba: Params = vec![
            ("b".to_string(), BareItem::Integer(2)),
            ("a".to_string(), BareItem::Integer(1)),
        ]
        .into_iter()
        .collect();
        assert_ne!(ab, ba);
        assert_eq!(ab, ab.clone());
    }

    #[test]
    fn test_get_absent() {
        let dict = Dict::new();
        assert!(dict.get("missing").is_none());
        assert!(!dict.contains_key("missing"));
        assert!(dict.is_empty());
    }

    #[test]
    fn test_try_add_rejects_bad_keys() {
        let mut params = Params::new();
        let err = params.try_add("Upper", 1).unwrap_err();
        assert_eq!(err, Error::unrecognized(0, 'U'));

        let err = params.try_add("ab cd", 1).unwrap_err();
        assert_eq!(err, Error::unrecognized(2, ' '));

        let err = params.try_add("", 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedEol);

        assert!(params.try_add("*ok_key-1.x", 1).is_ok());
        assert_eq!(params.len(), 1);
    }
}
