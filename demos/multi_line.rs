//! Combining a field that arrived on several header lines.
//!
//! Run with: cargo run --example multi_line

use serde_sfv::{join_lines, parse_list, Encode, Member};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Example-List: sugar, tea
    // Example-List: rum
    let lines = ["sugar, tea", "  ", "rum;proof=40"];

    println!("Joined: {}", join_lines(lines));

    let list = parse_list(lines)?;
    for member in &list {
        match member {
            Member::Item(item) => println!("  item {} with {} params", item.bare, item.params.len()),
            Member::InnerList(inner) => println!("  inner list of {}", inner.items.len()),
        }
    }
    println!("Canonical: {}", list.encode());

    Ok(())
}
