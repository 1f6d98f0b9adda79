//! Tightening the parser with ParseOptions.
//!
//! Run with: cargo run --example strict_options

use serde_sfv::{parse_item_line, parse_item_line_with_options, ParseOptions};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let inputs = [":aGVsbG8=:", ":aGVsbG8:", ":a:", "1234567890123.5"];

    println!("Default options:");
    for input in inputs {
        match parse_item_line(input) {
            Ok(item) => println!("  {:<18} => {:?}", input, item.bare),
            Err(e) => println!("  {:<18} => error: {}", input, e),
        }
    }

    // Reject undecodable byte sequences and apply RFC decimal limits
    let strict = ParseOptions::strict();
    println!("\nStrict options:");
    for input in inputs {
        match parse_item_line_with_options(input, &strict) {
            Ok(item) => println!("  {:<18} => {:?}", input, item.bare),
            Err(e) => println!("  {:<18} => error: {} ({})", input, e, e.kind()),
        }
    }

    // Options can also be set one at a time
    let options = ParseOptions::new().with_strict_byte_sequences(true);
    assert!(parse_item_line_with_options("1234567890123.5", &options).is_ok());

    Ok(())
}
