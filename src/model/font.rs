//! Font table entries.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A font table entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Font {
    /// Font number (`\fN`), the key in the font table
    pub number: i32,

    /// Font name
    pub name: String,

    /// Alternate name (`\falt`)
    pub alternate_name: String,

    /// Non-tagged name (`\fname`)
    pub non_tagged_name: String,

    /// PANOSE classification string (`\panose`)
    pub panose: String,

    /// Theme font slot
    pub theme: Option<FontTheme>,

    /// Font pitch (`\fprqN`)
    pub pitch: FontPitch,

    /// Character set number (`\fcharsetN`)
    pub character_set: Option<i32>,

    /// Font family (`\froman`, `\fswiss`, ...)
    pub family_command: FontFamily,
}

impl Font {
    /// Create a new font with a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Create a numbered font with a name.
    pub fn numbered(number: i32, name: impl Into<String>) -> Self {
        Self {
            number,
            ..Self::new(name)
        }
    }

    /// Strip the `;` terminators and trailing whitespace from every name.
    pub fn cleanup_names(&mut self) {
        for name in [
            &mut self.name,
            &mut self.alternate_name,
            &mut self.non_tagged_name,
        ] {
            let cleaned = name.trim_end().trim_end_matches(';').trim_end().len();
            name.truncate(cleaned);
        }
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.number, self.name)
    }
}

/// Font family command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    /// Unknown or default family
    #[default]
    Nil,
    /// Proportionally spaced serif
    Roman,
    /// Proportionally spaced sans serif
    Swiss,
    /// Fixed-pitch
    Modern,
    /// Script
    Script,
    /// Decorative
    Decor,
    /// Technical, symbol and mathematical
    Tech,
    /// Arabic, Hebrew and other bidirectional fonts
    Bidi,
}

impl FontFamily {
    /// Look up a family from its control word (`froman`, `fswiss`, ...).
    pub fn from_control(name: &str) -> Option<Self> {
        match name {
            "fnil" => Some(FontFamily::Nil),
            "froman" => Some(FontFamily::Roman),
            "fswiss" => Some(FontFamily::Swiss),
            "fmodern" => Some(FontFamily::Modern),
            "fscript" => Some(FontFamily::Script),
            "fdecor" => Some(FontFamily::Decor),
            "ftech" => Some(FontFamily::Tech),
            "fbidi" => Some(FontFamily::Bidi),
            _ => None,
        }
    }
}

/// Font pitch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontPitch {
    #[default]
    Default,
    Fixed,
    Variable,
}

impl FontPitch {
    /// Decode a `\fprqN` value.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(FontPitch::Default),
            1 => Some(FontPitch::Fixed),
            2 => Some(FontPitch::Variable),
            _ => None,
        }
    }
}

/// Theme font slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontTheme {
    LoMajor,
    HiMajor,
    DbMajor,
    BiMajor,
    LoMinor,
    HiMinor,
    DbMinor,
    BiMinor,
}

impl FontTheme {
    /// Look up a theme from its control word (`flomajor`, `fhiminor`, ...).
    pub fn from_control(name: &str) -> Option<Self> {
        match name {
            "flomajor" => Some(FontTheme::LoMajor),
            "fhimajor" => Some(FontTheme::HiMajor),
            "fdbmajor" => Some(FontTheme::DbMajor),
            "fbimajor" => Some(FontTheme::BiMajor),
            "flominor" => Some(FontTheme::LoMinor),
            "fhiminor" => Some(FontTheme::HiMinor),
            "fdbminor" => Some(FontTheme::DbMinor),
            "fbiminor" => Some(FontTheme::BiMinor),
            _ => None,
        }
    }
}
