//! Document model types for RTF content representation.
//!
//! This module defines the output of the parser: an ordered list of
//! formatted sections plus the font and colour tables. The model is plain
//! data and is built only by [`crate::parser::RtfParser`].

mod colour;
mod document;
mod font;
mod section;
mod table;

pub use colour::{Color, Colour, ColourTheme};
pub use document::{CharacterSet, Document};
pub use font::{Font, FontFamily, FontPitch, FontTheme};
pub use section::{Justification, ModifierKey, Modifiers, Section, Value};
pub use table::{Cell, Row, Table};
