//! Text cleanup applied to rendered plain text.

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::error::{Error, Result};

/// Cleanup preset levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CleanupPreset {
    /// Unicode NFC normalization only
    Minimal,
    /// NFC, whitespace and blank line cleanup
    #[default]
    Standard,
}

/// Options for text cleanup.
#[derive(Debug, Clone)]
pub struct CleanupOptions {
    /// Normalize Unicode to NFC form
    pub normalize_unicode: bool,

    /// Remove Unicode replacement characters (U+FFFD) left by undecodable bytes
    pub remove_replacement_char: bool,

    /// Strip trailing spaces and collapse runs of spaces
    pub normalize_whitespace: bool,

    /// Maximum consecutive newlines (0 = unlimited)
    pub max_consecutive_newlines: u8,
}

impl CleanupOptions {
    /// Create options from a preset.
    pub fn from_preset(preset: CleanupPreset) -> Self {
        match preset {
            CleanupPreset::Minimal => Self::minimal(),
            CleanupPreset::Standard => Self::standard(),
        }
    }

    /// Minimal cleanup options.
    pub fn minimal() -> Self {
        Self {
            normalize_unicode: true,
            remove_replacement_char: false,
            normalize_whitespace: false,
            max_consecutive_newlines: 0,
        }
    }

    /// Standard cleanup options.
    pub fn standard() -> Self {
        Self {
            normalize_unicode: true,
            remove_replacement_char: true,
            normalize_whitespace: true,
            max_consecutive_newlines: 2,
        }
    }
}

impl Default for CleanupOptions {
    fn default() -> Self {
        Self::standard()
    }
}

/// Text cleanup pipeline.
#[derive(Debug)]
pub struct CleanupPipeline {
    options: CleanupOptions,
    space_runs: Regex,
    trailing_space: Regex,
    newline_runs: Option<Regex>,
}

impl CleanupPipeline {
    /// Create a new cleanup pipeline with the given options.
    pub fn new(options: CleanupOptions) -> Result<Self> {
        let newline_runs = match options.max_consecutive_newlines {
            0 => None,
            max => Some(compile(&format!(r"\n{{{},}}", u32::from(max) + 1))?),
        };

        Ok(Self {
            space_runs: compile(r"[ ]{2,}")?,
            trailing_space: compile(r"(?m)[ \t]+$")?,
            newline_runs,
            options,
        })
    }

    /// Create a pipeline from a preset.
    pub fn from_preset(preset: CleanupPreset) -> Result<Self> {
        Self::new(CleanupOptions::from_preset(preset))
    }

    /// Process text through the cleanup pipeline.
    pub fn process(&self, text: &str) -> String {
        let mut result = if self.options.normalize_unicode {
            text.nfc().collect::<String>()
        } else {
            text.to_string()
        };

        if self.options.remove_replacement_char {
            result.retain(|c| c != '\u{FFFD}');
        }

        if self.options.normalize_whitespace {
            result = self.space_runs.replace_all(&result, " ").into_owned();
            result = self.trailing_space.replace_all(&result, "").into_owned();
        }

        if let Some(ref re) = self.newline_runs {
            let limit = "\n".repeat(usize::from(self.options.max_consecutive_newlines));
            result = re.replace_all(&result, limit.as_str()).into_owned();
        }

        result
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| Error::Render(format!("Invalid cleanup pattern: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unicode_normalization() {
        let pipeline = CleanupPipeline::from_preset(CleanupPreset::Minimal).unwrap();
        // e + combining acute accent
        let result = pipeline.process("Cafe\u{0301}");
        assert_eq!(result, "Caf\u{00e9}");
    }

    #[test]
    fn test_whitespace_normalization() {
        let pipeline = CleanupPipeline::from_preset(CleanupPreset::Standard).unwrap();
        let result = pipeline.process("one   two  \nthree\t\n");
        assert_eq!(result, "one two\nthree\n");
    }

    #[test]
    fn test_newline_limit() {
        let pipeline = CleanupPipeline::from_preset(CleanupPreset::Standard).unwrap();
        assert_eq!(pipeline.process("a\n\n\n\n\nb"), "a\n\nb");
        assert_eq!(pipeline.process("a\n\nb"), "a\n\nb");
    }

    #[test]
    fn test_replacement_char_removed() {
        let pipeline = CleanupPipeline::new(CleanupOptions::standard()).unwrap();
        assert_eq!(pipeline.process("ab\u{FFFD}c"), "abc");

        let pipeline = CleanupPipeline::new(CleanupOptions::minimal()).unwrap();
        assert_eq!(pipeline.process("ab\u{FFFD}c"), "ab\u{FFFD}c");
    }
}
