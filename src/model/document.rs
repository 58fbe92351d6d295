//! Document-level types.

use super::{Colour, Font, ModifierKey, Section, Table};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A parsed RTF document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Fonts keyed by font number; numbering may be sparse
    pub font_table: BTreeMap<i32, Font>,

    /// Colours in table order, addressed by index
    pub colour_table: Vec<Colour>,

    /// Default font number (`\deffN`)
    pub default_font: i32,

    /// Document character set
    pub character_set: CharacterSet,

    /// ANSI code page (`\ansicpgN`)
    pub code_page: Option<i32>,

    /// Formatted sections in document order
    pub sections: Vec<Section>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// US spelling alias for the colour table.
    pub fn color_table(&self) -> &[Colour] {
        &self.colour_table
    }

    /// Get a font by number.
    pub fn font(&self, number: i32) -> Option<&Font> {
        self.font_table.get(&number)
    }

    /// Get a colour by table index.
    pub fn colour(&self, index: usize) -> Option<&Colour> {
        self.colour_table.get(index)
    }

    /// Add a section to the document body.
    pub fn add_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// Iterate over the tables in the document body.
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.sections.iter().filter_map(Section::table)
    }

    /// Check if the document body has no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Get plain text content of the entire document.
    ///
    /// Tables are placed on their own lines, cells separated by tabs.
    pub fn plain_text(&self) -> String {
        let mut text = String::new();
        for section in &self.sections {
            match section.table() {
                Some(table) => {
                    if !text.is_empty() && !text.ends_with('\n') {
                        text.push('\n');
                    }
                    text.push_str(&table.plain_text());
                    text.push('\n');
                }
                None if section.modifiers.flag(ModifierKey::Paragraph) => text.push('\n'),
                None => text.push_str(&section.text),
            }
        }
        text
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "RTF Document:")?;
        writeln!(f, "  Font Table:")?;
        for font in self.font_table.values() {
            writeln!(f, "    {}", font)?;
        }

        writeln!(f, "  Colour Table:")?;
        for (idx, colour) in self.colour_table.iter().enumerate() {
            writeln!(f, "    {}: {}", idx, colour)?;
        }

        writeln!(f, "  Body:")?;
        writeln!(f)?;
        for section in &self.sections {
            let keys: Vec<_> = section
                .modifiers
                .iter()
                .map(|(key, value)| format!("{:?}: {}", key, value))
                .collect();
            writeln!(f, "{{{}}}", keys.join(", "))?;
            writeln!(f, "{}", section.plain_text())?;
        }
        Ok(())
    }
}

/// Character set declared in the document header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterSet {
    /// ANSI (`\ansi`)
    #[default]
    Ansi,
    /// Apple Macintosh (`\mac`)
    Mac,
    /// IBM PC code page 437 (`\pc`)
    Pc,
    /// IBM PC code page 850 (`\pca`)
    Pca,
}

impl fmt::Display for CharacterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharacterSet::Ansi => write!(f, "ansi"),
            CharacterSet::Mac => write!(f, "mac"),
            CharacterSet::Pc => write!(f, "pc"),
            CharacterSet::Pca => write!(f, "pca"),
        }
    }
}
