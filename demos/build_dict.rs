//! Building structured values in code and encoding them.
//!
//! Run with: cargo run --example build_dict

use serde_sfv::{sf_dict, sf_params, BareItem, Dict, Encode, InnerList, Item};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Signature-Input style dictionary
    let components = ["@method", "@authority", "content-digest"]
        .iter()
        .map(|c| BareItem::string(*c).map(Item::new))
        .collect::<Result<Vec<_>, _>>()?;

    let signature_input = sf_dict! {
        "sig1" => InnerList::with_params(
            components,
            sf_params! {
                "created" => 1_618_884_473,
                "keyid" => "test-key-ed25519",
            },
        ),
    };
    println!("Signature-Input: {}", signature_input);

    // Validated keys and tokens
    let mut dict = Dict::new();
    dict.try_add("format", BareItem::token("text/html")?)?;
    dict.try_add("level", Item::with_params(1, sf_params! { "draft" => true }))?;
    dict.try_add("checksum", BareItem::from(&b"\xde\xad\xbe\xef"[..]))?;
    println!("Dictionary:      {}", dict.encode());

    // Invalid keys are reported instead of producing unparseable output
    if let Err(e) = dict.try_add("Upper", BareItem::from(1)) {
        println!("Rejected key:    {}", e);
    }

    // Replacing a key keeps its position
    dict.add("format", BareItem::token("application/json")?);
    println!("After replace:   {}", dict);

    let reparsed: Dict = dict.encode().parse()?;
    assert_eq!(reparsed, dict);
    println!("✓ Round-trip successful");

    Ok(())
}
