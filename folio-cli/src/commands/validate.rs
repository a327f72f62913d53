//! Validate command implementation

use anyhow::{bail, Context, Result};
use folio_core::{validate_block, NoteContent};
use std::fs;

/// Validate the blocks of a note document
pub fn validate(input: &str, strict: bool) -> Result<()> {
    let json = fs::read_to_string(input)
        .with_context(|| format!("Failed to read input file: {}", input))?;

    let note = NoteContent::from_json(&json)
        .with_context(|| format!("Failed to decode note document: {}", input))?;

    let invalid: Vec<_> = note
        .blocks
        .iter()
        .filter(|block| !validate_block(block))
        .collect();

    println!("Valid blocks: {}", note.blocks.len() - invalid.len());
    println!("Invalid blocks: {}", invalid.len());
    for block in &invalid {
        eprintln!("  invalid {} block: {}", block.kind, block.id);
    }

    if strict && !invalid.is_empty() {
        bail!("Validation failed for {}", input);
    }

    Ok(())
}
