use anyhow::{Context, Result};
use chrono::{Duration, Local};
use fetcher::{CatIndicesFetcher, build_catalog_url};
use parser::parse_indices;
use report::{print_largest_indexes, print_least_balanced, print_most_shards};
use std::io::{self, BufRead};
use tracing::info;

mod fetcher;
mod models;
mod parser;
mod report;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let stdin = io::stdin();
    let mut input = stdin.lock();

    let raw = match acquire_raw_data(&mut input).await? {
        Some(raw) => raw,
        // Invalid mode is a clean no-op exit, not an error
        None => return Ok(()),
    };

    let records = parse_indices(&raw).context("Failed to parse index metadata")?;
    info!("Parsed {} index records", records.len());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    print_largest_indexes(&records, &mut out)?;
    print_most_shards(&records, &mut out)?;
    print_least_balanced(&records, &mut out)?;

    Ok(())
}

/// Prompts for a data source and returns the raw listing body, or `None`
/// when the selected mode is not recognized.
async fn acquire_raw_data(input: &mut impl BufRead) -> Result<Option<String>> {
    let mode = prompt(input, "Enter mode (file/api):")?;

    if mode.eq_ignore_ascii_case("file") {
        let file_name = prompt(input, "Enter filename (e.g., example-in.json): ")?;
        let path = file_name.trim();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path))?;
        Ok(Some(raw))
    } else if mode.eq_ignore_ascii_case("api") {
        let endpoint = prompt(input, "Enter endpoint: ")?;
        let yesterday = Local::now().date_naive() - Duration::days(1);
        let url = build_catalog_url(endpoint.trim(), yesterday);

        let fetcher = CatIndicesFetcher::new()?;
        let raw = fetcher.fetch_raw(&url).await?;
        Ok(Some(raw))
    } else {
        println!("Invalid input mode.");
        Ok(None)
    }
}

fn prompt(input: &mut impl BufRead, message: &str) -> Result<String> {
    println!("{}", message);

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read from input")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
