//! Rendering options and configuration.

use super::{CleanupOptions, CleanupPreset};

/// Options for rendering document content.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Text cleanup options
    pub cleanup: Option<CleanupOptions>,

    /// Include picture data (hex) in text output
    pub include_pictures: bool,

    /// Separator placed between table cells
    pub cell_separator: String,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set cleanup options.
    pub fn with_cleanup(mut self, options: CleanupOptions) -> Self {
        self.cleanup = Some(options);
        self
    }

    /// Set cleanup from a preset.
    pub fn with_cleanup_preset(mut self, preset: CleanupPreset) -> Self {
        self.cleanup = Some(CleanupOptions::from_preset(preset));
        self
    }

    /// Disable cleanup.
    pub fn without_cleanup(mut self) -> Self {
        self.cleanup = None;
        self
    }

    /// Include or skip picture data.
    pub fn with_pictures(mut self, include: bool) -> Self {
        self.include_pictures = include;
        self
    }

    /// Set the table cell separator.
    pub fn with_cell_separator(mut self, separator: impl Into<String>) -> Self {
        self.cell_separator = separator.into();
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            cleanup: None,
            include_pictures: false,
            cell_separator: "\t".to_string(),
        }
    }
}
