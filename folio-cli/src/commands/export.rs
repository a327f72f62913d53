//! Export command implementation

use anyhow::{Context, Result};
use folio_core::{emit_markdown, NoteContent};
use std::fs;

/// Export a note JSON document to markdown
pub fn export(input: &str, output: &str) -> Result<()> {
    let json = fs::read_to_string(input)
        .with_context(|| format!("Failed to read input file: {}", input))?;

    let note = NoteContent::from_json(&json)
        .with_context(|| format!("Failed to decode note document: {}", input))?;

    let text = emit_markdown(&note);

    tracing::info!(blocks = note.blocks.len(), "exported note");

    fs::write(output, text)
        .with_context(|| format!("Failed to write output file: {}", output))?;

    println!("Exported {} blocks -> {}", note.blocks.len(), output);

    Ok(())
}
