//! `urlroute parse <url>` – print URI components as JSON.

use anyhow::{Context, Result};
use urlroute_core::Uri;

pub fn run_parse(url: &str) -> Result<()> {
    let uri = Uri::parse(url).with_context(|| format!("parse {url}"))?;
    let json = serde_json::to_string_pretty(&uri)?;
    println!("{json}");
    Ok(())
}
