//! # unrtf
//!
//! RTF parsing library for Rust.
//!
//! This library reads RTF markup and produces a structured document model:
//! formatted text sections, the font and colour tables, and tables. The
//! model can be rendered to plain text or JSON.
//!
//! ## Quick Start
//!
//! ```
//! use unrtf::{parse_str, ModifierKey};
//!
//! fn main() -> unrtf::Result<()> {
//!     let doc = parse_str(r"{\rtf1\ansi {\fonttbl {\f0 Arial;}}\f0\fs48 Hello, {\b World}!}")?;
//!
//!     assert_eq!(doc.font_table[&0].name, "Arial");
//!     assert_eq!(doc.sections[0].modifiers.font_size(), Some(24.0));
//!     assert!(doc.sections[1].modifiers.flag(ModifierKey::Bold));
//!     assert_eq!(doc.plain_text(), "Hello, World!");
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Single pass**: control words are tokenized on demand, no backtracking
//! - **Formatting snapshots**: every section owns its modifiers
//! - **Font and colour tables**: including theme, pitch and charset data
//! - **Tables**: rows, cells and column geometry in points
//! - **Code pages**: `\'hh` escapes decoded through `encoding_rs`

pub mod detect;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;
pub mod units;

// Re-export commonly used types
pub use detect::{
    detect_format, detect_format_from_bytes, detect_format_from_path, is_rtf, RtfFormat,
};
pub use error::{Error, Result};
pub use model::{
    Cell, CharacterSet, Color, Colour, ColourTheme, Document, Font, FontFamily, FontPitch,
    FontTheme, Justification, ModifierKey, Modifiers, Row, Section, Table, Value,
};
pub use parser::{ErrorMode, ParseOptions, RtfParser};
pub use render::{CleanupOptions, CleanupPreset, JsonFormat, RenderOptions};

use std::io::Read;
use std::path::Path;

/// Parse an RTF string and return a structured document.
///
/// # Example
///
/// ```
/// use unrtf::parse_str;
///
/// let doc = parse_str(r"{\rtf1 \fs60 Hello {\fs30 World}}").unwrap();
/// assert_eq!(doc.sections.len(), 2);
/// ```
pub fn parse_str(src: &str) -> Result<Document> {
    RtfParser::new().parse(src)
}

/// Parse an RTF string with custom options.
///
/// # Example
///
/// ```
/// use unrtf::{parse_str_with_options, ParseOptions};
///
/// let options = ParseOptions::new().lenient();
/// let doc = parse_str_with_options(r"{\rtf1 \cellx1000 text}", options).unwrap();
/// assert_eq!(doc.plain_text(), "text");
/// ```
pub fn parse_str_with_options(src: &str, options: ParseOptions) -> Result<Document> {
    RtfParser::with_options(options).parse(src)
}

/// Parse RTF from bytes.
///
/// Bytes that are not valid UTF-8 are decoded as Windows-1252.
pub fn parse_bytes(data: &[u8]) -> Result<Document> {
    RtfParser::new().parse_bytes(data)
}

/// Parse RTF from bytes with custom options.
pub fn parse_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Document> {
    RtfParser::with_options(options).parse_bytes(data)
}

/// Parse RTF from a reader.
///
/// # Example
///
/// ```no_run
/// use unrtf::parse_reader;
/// use std::fs::File;
///
/// let file = File::open("document.rtf").unwrap();
/// let doc = parse_reader(file).unwrap();
/// ```
pub fn parse_reader<R: Read>(reader: R) -> Result<Document> {
    RtfParser::new().parse_reader(reader)
}

/// Parse RTF from a reader with custom options.
pub fn parse_reader_with_options<R: Read>(reader: R, options: ParseOptions) -> Result<Document> {
    RtfParser::with_options(options).parse_reader(reader)
}

/// Parse an RTF file and return a structured document.
///
/// # Example
///
/// ```no_run
/// use unrtf::parse_file;
///
/// let doc = parse_file("document.rtf").unwrap();
/// println!("Sections: {}", doc.sections.len());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    RtfParser::new().parse_file(path)
}

/// Parse an RTF file with custom options.
pub fn parse_file_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Document> {
    RtfParser::with_options(options).parse_file(path)
}

/// Extract plain text from an RTF file.
///
/// # Example
///
/// ```no_run
/// use unrtf::extract_text;
///
/// let text = extract_text("document.rtf").unwrap();
/// println!("{}", text);
/// ```
pub fn extract_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = parse_file(path)?;
    Ok(doc.plain_text())
}

/// Convert an RTF file to plain text with render options.
///
/// # Example
///
/// ```no_run
/// use unrtf::{to_text, CleanupPreset, RenderOptions};
///
/// let options = RenderOptions::new().with_cleanup_preset(CleanupPreset::Standard);
/// let text = to_text("document.rtf", &options).unwrap();
/// ```
pub fn to_text<P: AsRef<Path>>(path: P, options: &RenderOptions) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_text(&doc, options)
}

/// Convert an RTF file to JSON.
///
/// # Example
///
/// ```no_run
/// use unrtf::{to_json, JsonFormat};
///
/// let json = to_json("document.rtf", JsonFormat::Pretty).unwrap();
/// std::fs::write("output.json", json).unwrap();
/// ```
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_json(&doc, format)
}

/// Builder for parsing and rendering RTF documents.
///
/// # Example
///
/// ```
/// use unrtf::{CleanupPreset, Unrtf};
///
/// let text = Unrtf::new()
///     .lenient()
///     .with_cleanup(CleanupPreset::Standard)
///     .parse_str(r"{\rtf1 One\par\par\par\par Two}")?
///     .to_text()?;
/// assert_eq!(text, "One\n\nTwo");
/// # Ok::<(), unrtf::Error>(())
/// ```
pub struct Unrtf {
    parse_options: ParseOptions,
    render_options: RenderOptions,
}

impl Unrtf {
    /// Create a new Unrtf builder.
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions::default(),
            render_options: RenderOptions::default(),
        }
    }

    /// Enable lenient parsing mode.
    pub fn lenient(mut self) -> Self {
        self.parse_options = self.parse_options.lenient();
        self
    }

    /// Silence unknown control word reports.
    pub fn quiet(mut self) -> Self {
        self.parse_options = self.parse_options.with_unknown_control_reports(false);
        self
    }

    /// Force an encoding for `\'hh` escapes.
    pub fn with_encoding(mut self, encoding: &'static encoding_rs::Encoding) -> Self {
        self.parse_options = self.parse_options.with_encoding(encoding);
        self
    }

    /// Set cleanup preset.
    pub fn with_cleanup(mut self, preset: CleanupPreset) -> Self {
        self.render_options = self.render_options.with_cleanup_preset(preset);
        self
    }

    /// Include picture data in text output.
    pub fn with_pictures(mut self) -> Self {
        self.render_options = self.render_options.with_pictures(true);
        self
    }

    /// Parse an RTF string.
    pub fn parse_str(self, src: &str) -> Result<UnrtfResult> {
        let document = RtfParser::with_options(self.parse_options).parse(src)?;
        Ok(UnrtfResult {
            document,
            render_options: self.render_options,
        })
    }

    /// Parse RTF from bytes.
    pub fn parse_bytes(self, data: &[u8]) -> Result<UnrtfResult> {
        let document = RtfParser::with_options(self.parse_options).parse_bytes(data)?;
        Ok(UnrtfResult {
            document,
            render_options: self.render_options,
        })
    }

    /// Parse an RTF file.
    pub fn parse<P: AsRef<Path>>(self, path: P) -> Result<UnrtfResult> {
        let document = RtfParser::with_options(self.parse_options).parse_file(path)?;
        Ok(UnrtfResult {
            document,
            render_options: self.render_options,
        })
    }
}

impl Default for Unrtf {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of parsing an RTF document.
pub struct UnrtfResult {
    /// The parsed document
    pub document: Document,
    /// Render options to use
    render_options: RenderOptions,
}

impl UnrtfResult {
    /// Convert to plain text.
    pub fn to_text(&self) -> Result<String> {
        render::to_text(&self.document, &self.render_options)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Get plain text without cleanup.
    pub fn plain_text(&self) -> String {
        self.document.plain_text()
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrtf_builder() {
        let unrtf = Unrtf::new()
            .lenient()
            .quiet()
            .with_cleanup(CleanupPreset::Standard);

        assert!(matches!(
            unrtf.parse_options.error_mode,
            parser::ErrorMode::Lenient
        ));
        assert!(!unrtf.parse_options.report_unknown_controls);
        assert!(unrtf.render_options.cleanup.is_some());
    }

    #[test]
    fn test_unrtf_builder_default() {
        let builder = Unrtf::default();
        assert!(builder.render_options.cleanup.is_none());
        assert!(!builder.parse_options.is_lenient());
    }

    #[test]
    fn test_unrtf_builder_with_pictures() {
        let result = Unrtf::new()
            .with_pictures()
            .parse_str(r"{\rtf1 {\pict\pngblip 0a0b}}")
            .unwrap();
        assert_eq!(result.to_text().unwrap(), "0a0b");
    }

    #[test]
    fn test_unrtf_builder_with_encoding() {
        let result = Unrtf::new()
            .with_encoding(encoding_rs::WINDOWS_1251)
            .parse_str(r"{\rtf1 \'c0}")
            .unwrap();
        assert_eq!(result.plain_text(), "А");
    }

    #[test]
    fn test_unrtf_builder_parse_invalid_bytes() {
        let result = Unrtf::new().parse_bytes(b"not rtf");
        assert!(matches!(result, Err(Error::InvalidDocument(_))));
    }

    #[test]
    fn test_parse_bytes_empty_data() {
        assert!(parse_bytes(&[]).is_err());
    }

    #[test]
    fn test_parse_bytes_unknown_magic() {
        let data = [0xFF, 0xFE, 0x00, 0x01, 0x02, 0x03];
        assert!(parse_bytes(&data).is_err());
    }

    #[test]
    fn test_parse_bytes_valid() {
        let doc = parse_bytes(b"{\\rtf1 Hello}").unwrap();
        assert_eq!(doc.plain_text(), "Hello");
    }

    #[test]
    fn test_parse_reader() {
        let reader = std::io::Cursor::new(b"{\\rtf1\\b Bold}".to_vec());
        let doc = parse_reader(reader).unwrap();
        assert!(doc.sections[0].modifiers.flag(ModifierKey::Bold));
    }

    #[test]
    fn test_parse_file_missing() {
        let result = parse_file("/nonexistent/document.rtf");
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_parser_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RtfParser>();
        assert_send_sync::<Document>();
    }

    #[test]
    fn test_json_format_variants() {
        let doc = parse_str(r"{\rtf1 x}").unwrap();
        assert!(render::to_json(&doc, JsonFormat::Pretty).is_ok());
        assert!(render::to_json(&doc, JsonFormat::Compact).is_ok());
    }
}
