//! Simple CLI that reads HTML from stdin and outputs the extracted
//! content as JSON on stdout.
//!
//! Usage: `extract_stdin <page-url> < page.html`
//!
//! The page URL argument supplies the origin for image URL resolution;
//! no network access is performed.

use std::env;
use std::io::{self, Read};
use std::process::ExitCode;

fn main() -> ExitCode {
    let Some(page_url) = env::args().nth(1) else {
        eprintln!("usage: extract_stdin <page-url> < page.html");
        return ExitCode::FAILURE;
    };

    let mut html = Vec::new();
    if io::stdin().read_to_end(&mut html).is_err() {
        eprintln!("Failed to read from stdin");
        return ExitCode::FAILURE;
    }

    match pagelift::extract_document_bytes(&html, &page_url) {
        Ok(result) => {
            println!("{}", serde_json::to_string(&result).unwrap_or_default());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
