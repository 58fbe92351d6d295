//! RTF parsing module.

mod charset;
mod colour_table;
pub mod control;
mod font_table;
mod formatting;
mod options;
mod rtf_parser;

pub use charset::{charset_encoding, codepage_to_encoding};
pub use colour_table::parse_colour_table;
pub use control::{next_control, Control, ControlWord};
pub use font_table::parse_font_table;
pub use formatting::{FormattingStack, Frame};
pub use options::{ErrorMode, ParseOptions};
pub use rtf_parser::RtfParser;
