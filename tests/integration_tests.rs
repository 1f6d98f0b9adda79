use serde_sfv::{
    parse_dict, parse_dict_line, parse_dict_line_with_options, parse_item_line, parse_list,
    parse_list_line, parse_list_line_with_options, BareItem, Decimal, Dict, Encode, Error,
    ErrorKind, InnerList, Item, List, Member, ParseOptions, Params,
};

fn token(s: &str) -> BareItem {
    BareItem::Token(s.to_string())
}

#[test]
fn test_dict_implicit_true_with_params() {
    let dict = parse_dict_line("a=?0, b, c; foo=bar").unwrap();

    let keys: Vec<_> = dict.keys().cloned().collect();
    assert_eq!(keys, vec!["a", "b", "c"]);

    assert_eq!(dict.get("a"), Some(&Member::Item(Item::new(false))));
    assert_eq!(dict.get("b"), Some(&Member::Item(Item::new(true))));

    let c = dict.get("c").and_then(Member::as_item).unwrap();
    assert_eq!(c.bare, BareItem::Bool(true));
    assert_eq!(c.params.get("foo"), Some(&token("bar")));

    assert_eq!(dict.encode(), "a=?0, b, c;foo=bar");
}

#[test]
fn test_dict_mixed_members_roundtrip() {
    let input = "a=(1 2), b=3, c=4;aa=bb, d=(5 6);valid";
    let dict = parse_dict_line(input).unwrap();

    let a = dict.get("a").and_then(Member::as_inner_list).unwrap();
    assert_eq!(a.items, vec![Item::new(1), Item::new(2)]);
    assert!(a.params.is_empty());

    let d = dict.get("d").and_then(Member::as_inner_list).unwrap();
    assert_eq!(d.params.get("valid"), Some(&BareItem::Bool(true)));

    assert_eq!(dict.encode(), input);
}

#[test]
fn test_reference_examples() {
    let dict = parse_dict_line(r#"en="Applepie", da=:w4ZibGV0w6ZydGU=:"#).unwrap();
    assert_eq!(
        dict.get("en").and_then(Member::as_item).map(|i| &i.bare),
        Some(&BareItem::String("Applepie".to_string()))
    );
    assert_eq!(
        dict.get("da")
            .and_then(Member::as_item)
            .and_then(|i| i.bare.as_byte_seq()),
        Some("Æbletærte".as_bytes())
    );
    assert_eq!(dict.encode(), r#"en="Applepie", da=:w4ZibGV0w6ZydGU=:"#);

    let dict = parse_dict_line("rating=1.5, feelings=(joy sadness)").unwrap();
    assert_eq!(
        dict.get("rating")
            .and_then(Member::as_item)
            .and_then(|i| i.bare.as_decimal()),
        Some(Decimal::from_scaled(1_500))
    );
    assert_eq!(dict.encode(), "rating=1.5, feelings=(joy sadness)");

    let item = parse_item_line("5; foo=bar").unwrap();
    assert_eq!(item.bare, BareItem::Integer(5));
    assert_eq!(item.encode(), "5;foo=bar");
}

#[test]
fn test_token_with_slash() {
    let item = parse_item_line("foo123/456").unwrap();
    assert_eq!(item.bare, token("foo123/456"));
    assert!(item.params.is_empty());
}

#[test]
fn test_list_with_params_and_inner_lists() {
    let list = parse_list_line(r#"abc;a=1;b=2; cde_456, (ghi;jk=4 l);q="9";r=w"#).unwrap();
    assert_eq!(list.len(), 2);

    let first = list[0].as_item().unwrap();
    assert_eq!(first.bare, token("abc"));
    let keys: Vec<_> = first.params.keys().cloned().collect();
    assert_eq!(keys, vec!["a", "b", "cde_456"]);

    let second = list[1].as_inner_list().unwrap();
    assert_eq!(second.items.len(), 2);
    assert_eq!(second.items[0].params.get("jk"), Some(&BareItem::Integer(4)));
    assert_eq!(second.params.get("q"), Some(&BareItem::String("9".to_string())));
    assert_eq!(second.params.get("r"), Some(&token("w")));

    assert_eq!(list.encode(), r#"abc;a=1;b=2;cde_456, (ghi;jk=4 l);q="9";r=w"#);
}

#[test]
fn test_empty_inputs() {
    assert!(parse_list_line("").unwrap().is_empty());
    assert!(parse_list_line("   ").unwrap().is_empty());
    assert!(parse_dict_line("").unwrap().is_empty());
    assert!(parse_list(Vec::<&str>::new()).unwrap().is_empty());
    assert!(parse_dict(["", " "]).unwrap().is_empty());

    // An item field has no empty form
    assert_eq!(parse_item_line(""), Err(Error::unexpected_eol(0)));
}

#[test]
fn test_empty_inner_list() {
    let list = parse_list_line("(), ( )").unwrap();
    assert_eq!(list[0], Member::InnerList(InnerList::new(Vec::new())));
    assert_eq!(list[1], Member::InnerList(InnerList::new(Vec::new())));
    assert_eq!(list.encode(), "(), ()");
}

#[test]
fn test_multi_line_fields() {
    let dict = parse_dict(["foo=1", "bar=2"]).unwrap();
    assert_eq!(dict.encode(), "foo=1, bar=2");

    let list = parse_list(["sugar, tea", "rum"]).unwrap();
    let tokens: Vec<_> = list
        .iter()
        .filter_map(Member::as_item)
        .filter_map(|i| i.bare.as_token())
        .collect();
    assert_eq!(tokens, vec!["sugar", "tea", "rum"]);

    let owned = vec![String::from("  a=1 "), String::new(), String::from("b")];
    assert_eq!(parse_dict(&owned).unwrap().encode(), "a=1, b");
}

#[test]
fn test_duplicate_dict_key_keeps_position() {
    let dict = parse_dict_line("a=1, b=2, a=3").unwrap();
    let keys: Vec<_> = dict.keys().cloned().collect();
    assert_eq!(keys, vec!["a", "b"]);
    assert_eq!(dict.encode(), "a=3, b=2");

    let item = parse_item_line("1;x=1;y=2;x=3").unwrap();
    assert_eq!(item.encode(), "1;x=3;y=2");
}

#[test]
fn test_upsert_keeps_position() {
    let mut dict = Dict::new();
    dict.add("a", BareItem::from(1));
    dict.add("b", BareItem::from(2));
    let old = dict.add("a", BareItem::from(3));

    assert_eq!(old, Some(Member::Item(Item::new(1))));
    assert_eq!(dict.encode(), "a=3, b=2");
}

#[test]
fn test_errors() {
    let cases = [
        ("1234567890123456", ErrorKind::TooManyDigits),
        ("1.2345", ErrorKind::TooManyDigits),
        (r#""abc\"#, ErrorKind::UnexpectedEol),
        (r#""abc"#, ErrorKind::UnexpectedEol),
        (":aGVsbG8=", ErrorKind::UnexpectedEol),
        ("5 garbage", ErrorKind::Unrecognized),
        ("1.", ErrorKind::Unrecognized),
        ("?2", ErrorKind::Unrecognized),
        ("@", ErrorKind::Unrecognized),
    ];
    for (input, kind) in cases {
        let err = parse_item_line(input).unwrap_err();
        assert_eq!(err.kind(), kind, "{}", input);
    }

    assert_eq!(parse_item_line("5 garbage"), Err(Error::unrecognized(2, 'g')));
}

#[test]
fn test_trailing_comma() {
    assert_eq!(parse_list_line("a, b,"), Err(Error::unexpected_eol(5)));
    assert_eq!(parse_list_line("a, b, "), Err(Error::unexpected_eol(6)));
    assert_eq!(parse_dict_line("a=1,"), Err(Error::unexpected_eol(4)));
}

#[test]
fn test_trailing_content_in_list() {
    // By default the field ends at the first member not followed by a comma
    let list = parse_list_line("a b").unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list.encode(), "a");

    let dict = parse_dict_line("a=1 b=2").unwrap();
    assert_eq!(dict.encode(), "a=1");
    assert!(!dict.contains_key("b"));

    assert_eq!(parse_list_line("(1 2) x").unwrap().encode(), "(1 2)");
    assert_eq!(parse_list_line("a, b c, d").unwrap().encode(), "a, b");

    let strict = ParseOptions::new().with_strict_trailing(true);
    assert_eq!(
        parse_list_line_with_options("a b", &strict),
        Err(Error::unrecognized(2, 'b'))
    );
    assert_eq!(
        parse_dict_line_with_options("a=1 b=2", &strict),
        Err(Error::unrecognized(4, 'b'))
    );
    assert_eq!(
        parse_list_line_with_options("(1 2) x", &strict),
        Err(Error::unrecognized(6, 'x'))
    );
    assert!(parse_list_line_with_options("a, b  ", &strict).is_ok());

    // Item fields reject leftovers in every mode
    assert!(parse_item_line("5 garbage").is_err());
}

#[test]
fn test_dict_key_rules() {
    assert!(parse_dict_line("*a.b-c_d*=1").is_ok());
    assert_eq!(parse_dict_line("A=1"), Err(Error::unrecognized(0, 'A')));
    assert_eq!(parse_dict_line("1a=1"), Err(Error::unrecognized(0, '1')));
    // The key ends at the uppercase letter, which ends the field
    assert_eq!(parse_dict_line("aB=1").unwrap().encode(), "a");
    assert_eq!(
        parse_dict_line_with_options("aB=1", &ParseOptions::strict()),
        Err(Error::unrecognized(1, 'B'))
    );
}

#[test]
fn test_error_display() {
    let err = parse_item_line("1234567890123456").unwrap_err();
    assert!(err.to_string().contains("15"));
    assert_eq!(err.position(), 15);
}

#[test]
fn test_build_and_encode() {
    let mut params = Params::new();
    params.add("q", Decimal::from_scaled(500));
    params.add("secure", true);

    let mut list = List::new();
    list.push(Item::with_params(BareItem::token("gzip").unwrap(), params));
    list.push(InnerList::new(vec![Item::new("a b"), Item::new(&b"\x00\xff"[..])]));
    list.push(Item::new(Decimal::from_scaled(-2_000)));

    assert_eq!(list.encode(), r#"gzip;q=0.5;secure, ("a b" :AP8=:), -2.0"#);

    let reparsed = parse_list_line(&list.encode()).unwrap();
    assert_eq!(reparsed, list);
}

#[test]
fn test_display_and_from_str() {
    let dict: Dict = "u=2, i".parse().unwrap();
    assert_eq!(dict.to_string(), "u=2, i");
    assert_eq!(format!("{}", dict.get("u").unwrap()), "2");

    let item: Item = "\"x\";a=?0".parse().unwrap();
    assert_eq!(item.to_string(), "\"x\";a=?0");

    assert!("a,".parse::<List>().is_err());
}

#[test]
fn test_checked_constructors() {
    assert!(BareItem::string("plain ascii").is_ok());
    assert_eq!(
        BareItem::string("tab\there").unwrap_err().kind(),
        ErrorKind::Unrecognized
    );
    assert!(BareItem::token("text/html").is_ok());
    assert!(BareItem::token("9lives").is_err());

    let mut dict = Dict::new();
    assert!(dict.try_add("ok", BareItem::from(1)).is_ok());
    assert!(dict.try_add("Bad", BareItem::from(1)).is_err());
    assert_eq!(dict.len(), 1);
}
