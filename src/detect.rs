//! RTF format detection and validation.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// RTF header information.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RtfFormat {
    /// RTF major version (always 1 for accepted documents)
    pub version: u32,
    /// Byte offset of the opening `{` in the input
    pub offset: usize,
}

impl std::fmt::Display for RtfFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RTF {}", self.version)
    }
}

/// Opening group plus version marker.
const RTF_MAGIC: &str = "{\\rtf";
const SUPPORTED_VERSION: u32 = 1;
const UTF8_BOM: char = '\u{feff}';

/// Detect the RTF header in a string.
///
/// The document must start with `{\rtf1`, optionally preceded by
/// whitespace or a byte order mark.
///
/// # Example
/// ```
/// use unrtf::detect::detect_format;
///
/// let format = detect_format(r"{\rtf1\ansi Hello}").unwrap();
/// assert_eq!(format.version, 1);
/// ```
pub fn detect_format(src: &str) -> Result<RtfFormat> {
    let trimmed = src.trim_start_matches(|c: char| c == UTF8_BOM || c.is_whitespace());
    let offset = src.len() - trimmed.len();

    let rest = trimmed
        .strip_prefix(RTF_MAGIC)
        .ok_or_else(|| Error::invalid("Opening \\rtf1 missing"))?;

    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    let version = digits
        .parse::<u32>()
        .map_err(|_| Error::invalid("Opening \\rtf1 missing"))?;
    if version != SUPPORTED_VERSION {
        return Err(Error::invalid(format!(
            "Unsupported RTF version {}",
            version
        )));
    }

    Ok(RtfFormat { version, offset })
}

/// Detect the RTF header from bytes.
///
/// Only the leading ASCII bytes are inspected, so a prefix of the file is
/// enough.
pub fn detect_format_from_bytes(data: &[u8]) -> Result<RtfFormat> {
    let header = String::from_utf8_lossy(data);
    detect_format(&header)
}

/// Detect the RTF header of a file.
///
/// # Example
/// ```no_run
/// use unrtf::detect::detect_format_from_path;
///
/// let format = detect_format_from_path("document.rtf").unwrap();
/// println!("{}", format);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<RtfFormat> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file).take(64);
    let mut header = Vec::new();
    reader.read_to_end(&mut header)?;
    detect_format_from_bytes(&header)
}

/// Check if a file is an RTF document.
pub fn is_rtf<P: AsRef<Path>>(path: P) -> bool {
    detect_format_from_path(path).is_ok()
}

/// Check if bytes start with an RTF header.
pub fn is_rtf_bytes(data: &[u8]) -> bool {
    detect_format_from_bytes(data).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_valid_rtf() {
        let format = detect_format(r"{\rtf1\ansi\deff0 Hello}").unwrap();
        assert_eq!(format.version, 1);
        assert_eq!(format.offset, 0);
        assert_eq!(format.to_string(), "RTF 1");
    }

    #[test]
    fn test_detect_skips_leading_whitespace_and_bom() {
        let format = detect_format("\u{feff}\r\n  {\\rtf1 x}").unwrap();
        assert_eq!(format.offset, "\u{feff}\r\n  ".len());
    }

    #[test]
    fn test_detect_missing_marker() {
        let result = detect_format(r"{\ansi\deff0 Hello}");
        assert!(matches!(result, Err(Error::InvalidDocument(_))));
    }

    #[test]
    fn test_detect_marker_not_first() {
        let result = detect_format(r"{\ansi\deff0\rtf1 Hello}");
        assert!(matches!(result, Err(Error::InvalidDocument(_))));
    }

    #[test]
    fn test_detect_unsupported_version() {
        let result = detect_format(r"{\rtf2 Hello}");
        assert!(matches!(result, Err(Error::InvalidDocument(_))));
        assert!(detect_format(r"{\rtf Hello}").is_err());
    }

    #[test]
    fn test_is_rtf_bytes() {
        assert!(is_rtf_bytes(b"{\\rtf1\\ansi}"));
        assert!(!is_rtf_bytes(b"%PDF-1.4\n"));
        assert!(!is_rtf_bytes(b""));
    }
}
