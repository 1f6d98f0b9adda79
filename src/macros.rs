/// Builds a [`Params`](crate::Params) from `key => value` pairs.
///
/// Values go through `Into<BareItem>`; repeated keys follow the
/// replace-in-place rule of [`Params::add`](crate::Params::add).
///
/// ```rust
/// use serde_sfv::{sf_params, Decimal, Encode};
///
/// let params = sf_params! { "q" => Decimal::from_scaled(500), "secure" => true };
/// assert_eq!(params.encode(), ";q=0.5;secure");
/// ```
#[macro_export]
macro_rules! sf_params {
    () => {
        $crate::Params::new()
    };

    ($($key:literal => $value:expr),+ $(,)?) => {{
        let mut params = $crate::Params::new();
        $(
            params.add($key, $value);
        )+
        params
    }};
}

/// Builds a [`Dict`](crate::Dict) from `key => member` pairs.
///
/// Values go through `Into<Member>`, so items, inner lists and bare items
/// are all accepted.
///
/// ```rust
/// use serde_sfv::{sf_dict, BareItem, Encode, InnerList, Item};
///
/// let dict = sf_dict! {
///     "u" => BareItem::from(2),
///     "i" => BareItem::from(true),
///     "l" => InnerList::new(vec![Item::new(1), Item::new(2)]),
/// };
/// assert_eq!(dict.encode(), "u=2, i, l=(1 2)");
/// ```
#[macro_export]
macro_rules! sf_dict {
    () => {
        $crate::Dict::new()
    };

    ($($key:literal => $value:expr),+ $(,)?) => {{
        let mut dict = $crate::Dict::new();
        $(
            dict.add($key, $value);
        )+
        dict
    }};
}

#[cfg(test)]
mod tests {
    use crate::{BareItem, Dict, Item, Member, Params};

    #[test]
    fn test_sf_params_empty() {
        assert_eq!(sf_params!(), Params::new());
    }

    #[test]
    fn test_sf_params_replace_in_place() {
        let params = sf_params! { "a" => 1, "b" => 2, "a" => 3 };
        let entries: Vec<_> = params.into_iter().collect();
        assert_eq!(
            entries,
            vec![
                ("a".to_string(), BareItem::Integer(3)),
                ("b".to_string(), BareItem::Integer(2)),
            ]
        );
    }

    #[test]
    fn test_sf_dict() {
        assert_eq!(sf_dict!(), Dict::new());

        let dict = sf_dict! { "a" => Item::new(false) };
        assert_eq!(dict.get("a"), Some(&Member::Item(Item::new(false))));
    }
}
