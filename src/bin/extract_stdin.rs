//! Simple CLI that reads HTML from stdin and prints the extraction result
//! as JSON on stdout.

use rs_readability::extract_bytes;
use std::io::{self, Read};

fn main() {
    let mut html = Vec::new();
    if io::stdin().read_to_end(&mut html).is_err() {
        eprintln!("Failed to read from stdin");
        std::process::exit(1);
    }

    match extract_bytes(&html) {
        Ok(result) => {
            println!("{}", serde_json::to_string(&result).unwrap_or_default());
        }
        Err(err) => {
            eprintln!("Extraction failed: {err}");
            std::process::exit(1);
        }
    }
}
