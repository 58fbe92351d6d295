//! Plain text rendering for RTF documents.

use crate::error::Result;
use crate::model::{Document, ModifierKey, Section, Table};

use super::{CleanupPipeline, RenderOptions};

/// Convert a document to plain text.
///
/// Paragraph boundaries become newlines, tables are laid out one row per
/// line. Picture data is left out unless requested.
pub fn to_text(doc: &Document, options: &RenderOptions) -> Result<String> {
    let mut output = String::new();

    for section in &doc.sections {
        match section.table() {
            Some(table) => {
                if !output.is_empty() && !output.ends_with('\n') {
                    output.push('\n');
                }
                render_table(&mut output, table, options);
            }
            None => render_section(&mut output, section, options),
        }
    }

    if let Some(ref cleanup_options) = options.cleanup {
        let pipeline = CleanupPipeline::new(cleanup_options.clone())?;
        output = pipeline.process(&output);
    }

    Ok(output.trim().to_string())
}

fn render_section(output: &mut String, section: &Section, options: &RenderOptions) {
    let mods = &section.modifiers;
    if mods.flag(ModifierKey::Paragraph) {
        output.push('\n');
    } else if options.include_pictures || !mods.flag(ModifierKey::Picture) {
        output.push_str(&section.text);
    }
}

fn render_table(output: &mut String, table: &Table, options: &RenderOptions) {
    for row in &table.rows {
        let cells: Vec<String> = row
            .cells
            .iter()
            .map(|cell| {
                let mut text = String::new();
                for section in &cell.sections {
                    render_section(&mut text, section, options);
                }
                text.trim().replace('\n', " ")
            })
            .collect();
        output.push_str(&cells.join(&options.cell_separator));
        output.push('\n');
    }
}
