//! Import command implementation

use anyhow::{Context, Result};
use folio_core::parse_markdown;
use std::fs;

/// Import a markdown file into a note JSON document
pub fn import(input: &str, output: &str) -> Result<()> {
    let text = fs::read_to_string(input)
        .with_context(|| format!("Failed to read input file: {}", input))?;

    let note = parse_markdown(&text);

    tracing::info!(blocks = note.blocks.len(), "imported markdown");

    let json = note
        .to_json()
        .context("Failed to encode note document")?;
    fs::write(output, json).with_context(|| format!("Failed to write output file: {}", output))?;

    println!("Imported {} blocks -> {}", note.blocks.len(), output);

    Ok(())
}
