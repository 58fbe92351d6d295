//! Parsing options and configuration.

use encoding_rs::Encoding;

/// Options for parsing RTF documents.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Error handling mode
    pub error_mode: ErrorMode,

    /// Whether unknown control words are reported through the log
    pub report_unknown_controls: bool,

    /// Encoding for `\'hh` escapes, overriding the document's code page
    pub encoding: Option<&'static Encoding>,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Enable lenient mode (warn about misplaced table words and continue).
    pub fn lenient(mut self) -> Self {
        self.error_mode = ErrorMode::Lenient;
        self
    }

    /// Enable or disable unknown control word reports.
    pub fn with_unknown_control_reports(mut self, report: bool) -> Self {
        self.report_unknown_controls = report;
        self
    }

    /// Force an encoding for hex escapes.
    pub fn with_encoding(mut self, encoding: &'static Encoding) -> Self {
        self.encoding = Some(encoding);
        self
    }

    /// Check if lenient mode is enabled.
    pub fn is_lenient(&self) -> bool {
        self.error_mode == ErrorMode::Lenient
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            error_mode: ErrorMode::Strict,
            report_unknown_controls: true,
            encoding: None,
        }
    }
}

/// Error handling mode during parsing.
///
/// Only recoverable anomalies are affected; missing headers and unbalanced
/// braces are always fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Fail on table control words used outside a table
    #[default]
    Strict,
    /// Log and skip them
    Lenient,
}
