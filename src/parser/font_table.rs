//! `\fonttbl` group parsing.

use super::charset::push_decoded;
use super::control::{next_control, Control};
use crate::model::{Font, FontFamily, FontPitch, FontTheme};
use encoding_rs::Encoding;
use std::collections::BTreeMap;

/// Which name field plain characters are collected into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Name,
    Alternate,
    NonTagged,
    Panose,
}

#[derive(Debug, Default)]
struct FontBuilder {
    font: Option<Font>,
    bytes: Vec<u8>,
}

impl FontBuilder {
    fn open(&mut self) -> &mut Font {
        self.font.get_or_insert_with(Font::default)
    }

    fn push(&mut self, target: Target, c: char) {
        if let Some(font) = self.font.as_mut() {
            target_field(font, target).push(c);
        }
    }

    fn push_byte(&mut self, byte: u8) {
        if self.font.is_some() {
            self.bytes.push(byte);
        }
    }

    /// Decode buffered `\'hh` bytes into `target`.
    fn flush_bytes(&mut self, target: Target, encoding: Option<&'static Encoding>) {
        if self.bytes.is_empty() {
            return;
        }
        if let Some(font) = self.font.as_mut() {
            push_decoded(target_field(font, target), &self.bytes, encoding);
        }
        self.bytes.clear();
    }

    fn finish(&mut self, fonts: &mut BTreeMap<i32, Font>) {
        if let Some(mut font) = self.font.take() {
            font.cleanup_names();
            log::trace!("Font table entry {}", font);
            fonts.insert(font.number, font);
        }
    }
}

fn target_field(font: &mut Font, target: Target) -> &mut String {
    match target {
        Target::Name => &mut font.name,
        Target::Alternate => &mut font.alternate_name,
        Target::NonTagged => &mut font.non_tagged_name,
        Target::Panose => &mut font.panose,
    }
}

/// Parse a font table starting just after `\fonttbl`.
///
/// Entries may be brace delimited (`{\f0 Arial;}`) or bare (`\f0 Arial;`).
/// Returns the position of the brace closing the table, or the input length
/// when the table is never closed.
pub fn parse_font_table(
    src: &[char],
    mut pos: usize,
    fonts: &mut BTreeMap<i32, Font>,
    encoding: Option<&'static Encoding>,
) -> usize {
    let mut depth = 1usize;
    let mut target = Target::Name;
    let mut builder = FontBuilder::default();

    while let Some(&c) = src.get(pos) {
        let hex_follows = c == '\\' && src.get(pos + 1) == Some(&'\'');
        if !hex_follows && !matches!(c, '\r' | '\n') {
            builder.flush_bytes(target, encoding);
        }

        match c {
            '{' => {
                depth += 1;
                if depth == 2 {
                    builder.finish(fonts);
                    builder.open();
                    target = Target::Name;
                }
            }
            '}' => {
                depth -= 1;
                match depth {
                    0 => {
                        builder.finish(fonts);
                        return pos;
                    }
                    1 => {
                        builder.finish(fonts);
                        target = Target::Name;
                    }
                    _ => target = Target::Name,
                }
            }
            '\\' => {
                let (control, next) = next_control(src, pos + 1);
                match control {
                    Control::Hex(byte) => builder.push_byte(byte),
                    Control::Symbol('*') => {}
                    Control::Symbol(symbol @ ('{' | '}' | '\\')) => {
                        builder.push(target, symbol)
                    }
                    Control::Symbol(_) => target = Target::Name,
                    Control::Word { name, value } => {
                        builder.flush_bytes(target, encoding);
                        target = apply_control(&mut builder, &name, value);
                    }
                }
                pos = next;
                continue;
            }
            '\r' | '\n' => {}
            ';' if depth == 1 => {
                builder.push(target, c);
                builder.finish(fonts);
                target = Target::Name;
            }
            _ => builder.push(target, c),
        }
        pos += 1;
    }

    builder.flush_bytes(target, encoding);
    builder.finish(fonts);
    src.len()
}

/// Apply a control word to the entry under construction and return the
/// buffer that following characters go to.
fn apply_control(builder: &mut FontBuilder, name: &str, value: Option<i32>) -> Target {
    match name {
        "falt" => return Target::Alternate,
        "fname" => return Target::NonTagged,
        "panose" => return Target::Panose,
        "f" => builder.open().number = value.unwrap_or(0),
        "fprq" => {
            let code = value.unwrap_or(0);
            match FontPitch::from_code(code) {
                Some(pitch) => builder.open().pitch = pitch,
                None => log::debug!("Ignoring font pitch {}", code),
            }
        }
        "fcharset" => builder.open().character_set = value,
        _ => {
            if let Some(theme) = FontTheme::from_control(name) {
                builder.open().theme = Some(theme);
            } else if let Some(family) = FontFamily::from_control(name) {
                builder.open().family_command = family;
            }
        }
    }
    Target::Name
}
