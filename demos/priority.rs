//! Reading the `Priority` header (RFC 9218) as a structured dictionary.
//!
//! Run with: cargo run --example priority

use serde_sfv::{parse_dict_line, BareItem, Member};
use std::error::Error;

#[derive(Debug, PartialEq)]
struct Priority {
    urgency: i64,
    incremental: bool,
}

impl Default for Priority {
    fn default() -> Self {
        Priority {
            urgency: 3,
            incremental: false,
        }
    }
}

fn parse_priority(header: &str) -> Result<Priority, Box<dyn Error>> {
    let dict = parse_dict_line(header)?;
    let mut priority = Priority::default();

    // Unknown keys and out-of-range values are ignored, as the header requires
    if let Some(urgency) = dict
        .get("u")
        .and_then(Member::as_item)
        .and_then(|item| item.bare.as_integer())
    {
        if (0..=7).contains(&urgency) {
            priority.urgency = urgency;
        }
    }
    if let Some(BareItem::Bool(incremental)) = dict.get("i").and_then(Member::as_item).map(|i| &i.bare) {
        priority.incremental = *incremental;
    }

    Ok(priority)
}

fn main() -> Result<(), Box<dyn Error>> {
    for header in ["u=2, i", "u=5", "i=?0, u=9", "", "u=1, x=(a b), i"] {
        let priority = parse_priority(header)?;
        println!("{:<18} => {:?}", format!("{:?}", header), priority);
    }

    match parse_priority("u=2,") {
        Ok(_) => println!("unexpected success"),
        Err(e) => println!("\"u=2,\" rejected: {}", e),
    }

    Ok(())
}
