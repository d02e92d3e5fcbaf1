//! CLI shell over the scraping pipeline.
//!
//! Usage: `scrape_page <url> [--json] [--direct]`
//!
//! Fetches the page, prints the title, the extracted text blocks and the
//! image URLs. `--json` prints the full result record instead; `--direct`
//! skips the retrieval gateway. Logging follows `RUST_LOG`.

use std::env;
use std::error::Error;
use std::process::ExitCode;

use pagelift::{BlockKind, Options, ScrapeResult};

fn print_text(result: &ScrapeResult) {
    println!("{}", result.title);
    println!("{}", result.source_url);

    if !result.text_blocks.is_empty() {
        println!("\n--- Text ({} blocks) ---", result.text_blocks.len());
        for block in &result.text_blocks {
            match block.kind {
                BlockKind::Heading(level) => println!("[h{level}] {}", block.text),
                BlockKind::Paragraph | BlockKind::ListItem => println!("{}", block.text),
            }
        }
    }

    if !result.images.is_empty() {
        println!("\n--- Images ({}) ---", result.images.len());
        println!("{}", result.image_links_joined());
    }
}

async fn run() -> Result<(), Box<dyn Error>> {
    let mut url = None;
    let mut as_json = false;
    let mut direct = false;

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--json" => as_json = true,
            "--direct" => direct = true,
            other => url = Some(other.to_string()),
        }
    }

    let Some(url) = url else {
        return Err("usage: scrape_page <url> [--json] [--direct]".into());
    };

    let mut options = Options::default();
    if direct {
        options.gateway = None;
    }

    let result = pagelift::scrape_with_options(&url, &options).await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_text(&result);
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
