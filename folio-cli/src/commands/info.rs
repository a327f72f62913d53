//! Info command implementation

use anyhow::{Context, Result};
use folio_core::{full_text, preview, NoteContent};
use std::collections::BTreeMap;
use std::fs;

const PREVIEW_LENGTH: usize = 60;

/// Display information about a note document
pub fn info(input: &str, as_json: bool) -> Result<()> {
    let json = fs::read_to_string(input)
        .with_context(|| format!("Failed to read input file: {}", input))?;

    let note = NoteContent::from_json(&json)
        .with_context(|| format!("Failed to decode note document: {}", input))?;

    let mut kind_counts: BTreeMap<&str, usize> = BTreeMap::new();
    for block in &note.blocks {
        *kind_counts.entry(block.kind.as_str()).or_insert(0) += 1;
    }

    if as_json {
        let payload = serde_json::json!({
            "version": note.version,
            "blocks": note.blocks.len(),
            "kinds": kind_counts,
            "searchTextLength": full_text(&note.blocks).chars().count(),
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!("Note document ({} blocks, version {})", note.blocks.len(), note.version);
    for (kind, count) in &kind_counts {
        println!("  {:>4} {}", count, kind);
    }
    println!();
    for block in &note.blocks {
        println!("  [{}] {}", block.kind, preview(block, PREVIEW_LENGTH));
    }

    Ok(())
}
