//! RTF document parser.

use std::fs;
use std::io::Read;
use std::mem;
use std::path::Path;

use encoding_rs::Encoding;

use crate::detect::detect_format;
use crate::error::{Error, Result};
use crate::model::{Document, ModifierKey, Section, Table, Value};
use crate::units::twips_to_points;

use super::charset::{charset_encoding, codepage_to_encoding, push_decoded};
use super::colour_table::parse_colour_table;
use super::control::{next_control, ControlWord};
use super::font_table::parse_font_table;
use super::formatting::FormattingStack;
use super::options::ParseOptions;

/// U+2028, delivered as a newline boundary.
const LINE_SEPARATOR: i32 = 0x2028;

/// RTF document parser.
///
/// The parser only holds options; every call to [`RtfParser::parse`] runs
/// with fresh state, so one parser can be shared between threads.
#[derive(Debug, Clone, Default)]
pub struct RtfParser {
    options: ParseOptions,
}

impl RtfParser {
    /// Create a parser with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with custom options.
    pub fn with_options(options: ParseOptions) -> Self {
        Self { options }
    }

    /// The options this parser runs with.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse RTF source into a document.
    pub fn parse(&self, src: &str) -> Result<Document> {
        let format = detect_format(src)?;
        let chars: Vec<char> = src[format.offset..].chars().collect();

        let mut state = ParseState::new(&self.options);
        state.run(&chars)?;
        Ok(state.doc)
    }

    /// Parse RTF from raw bytes.
    ///
    /// RTF is 7-bit clean, but files in the wild carry raw 8-bit text; input
    /// that is not valid UTF-8 is decoded as Windows-1252.
    pub fn parse_bytes(&self, data: &[u8]) -> Result<Document> {
        let src = decode_input(data);
        self.parse(&src)
    }

    /// Parse RTF from a reader.
    pub fn parse_reader<R: Read>(&self, mut reader: R) -> Result<Document> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        self.parse_bytes(&data)
    }

    /// Parse an RTF file.
    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<Document> {
        let data = fs::read(path)?;
        self.parse_bytes(&data)
    }
}

fn decode_input(data: &[u8]) -> String {
    match std::str::from_utf8(data) {
        Ok(src) => src.to_string(),
        Err(_) => {
            let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(data);
            decoded.into_owned()
        }
    }
}

/// Where emitted sections go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Context {
    Document,
    TableCell { section: usize, cell: usize },
}

/// State of a single parse.
struct ParseState<'a> {
    options: &'a ParseOptions,
    doc: Document,
    stack: FormattingStack,
    contexts: Vec<Context>,
    text: String,
    bytes: Vec<u8>,
    depth: usize,
    pending_skip: u32,
    encoding: Option<&'static Encoding>,
}

impl<'a> ParseState<'a> {
    fn new(options: &'a ParseOptions) -> Self {
        Self {
            options,
            doc: Document::new(),
            stack: FormattingStack::new(),
            contexts: vec![Context::Document],
            text: String::new(),
            bytes: Vec::new(),
            depth: 0,
            pending_skip: 0,
            encoding: options.encoding.or(Some(encoding_rs::WINDOWS_1252)),
        }
    }

    fn run(&mut self, src: &[char]) -> Result<()> {
        let mut pos = 0;

        while let Some(&c) = src.get(pos) {
            match c {
                '\\' => {
                    let (control, next) = next_control(src, pos + 1);
                    let word = ControlWord::classify(control);
                    if !matches!(word, ControlWord::Hex(_)) {
                        self.decode_bytes();
                    }
                    pos = self.dispatch(word, src, next)?;
                    continue;
                }
                '{' => self.open_group(),
                '}' => {
                    self.close_group()?;
                    if self.depth == 0 {
                        check_trailing(&src[pos + 1..])?;
                        break;
                    }
                }
                '\r' | '\n' => {}
                _ => {
                    self.decode_bytes();
                    self.push_char(c);
                }
            }
            pos += 1;
        }

        if self.depth != 0 {
            return Err(Error::invalid("Unbalanced {}s"));
        }
        self.flush();
        Ok(())
    }

    fn open_group(&mut self) {
        self.flush();
        self.pending_skip = 0;
        self.stack.push();
        self.depth += 1;
    }

    fn close_group(&mut self) -> Result<()> {
        if self.depth == 0 {
            return Err(Error::invalid("Unbalanced {}s"));
        }
        self.flush();
        self.pending_skip = 0;
        self.stack.pop();
        self.depth -= 1;
        Ok(())
    }

    /// Handle one control word. Returns the position to continue from.
    fn dispatch(&mut self, word: ControlWord, src: &[char], pos: usize) -> Result<usize> {
        use ControlWord as W;
        use ModifierKey as K;

        // a control word stands in for one fallback character after \uN
        if self.pending_skip > 0
            && !matches!(word, W::Hex(_) | W::Literal(_) | W::NonBreakingHyphen)
        {
            self.pending_skip -= 1;
        }

        match word {
            W::Rtf | W::InTable | W::OptionalHyphen | W::Ignored => {}
            W::Ansi | W::Mac | W::Pc | W::Pca => {
                self.doc.character_set = match word {
                    W::Mac => crate::model::CharacterSet::Mac,
                    W::Pc => crate::model::CharacterSet::Pc,
                    W::Pca => crate::model::CharacterSet::Pca,
                    _ => crate::model::CharacterSet::Ansi,
                };
                self.update_encoding();
            }
            W::AnsiCodePage(code_page) => {
                self.doc.code_page = Some(code_page);
                self.update_encoding();
            }
            W::DefaultFont(n) => self.doc.default_font = n,

            W::FontTable => {
                return Ok(parse_font_table(
                    src,
                    pos,
                    &mut self.doc.font_table,
                    self.encoding,
                ));
            }
            W::ColourTable => return Ok(parse_colour_table(src, pos, &mut self.doc.colour_table)),
            W::Stylesheet | W::Info | W::IgnorableDestination => {
                log::debug!("Skipping destination group at {}", pos);
                return Ok(skip_group(src, pos));
            }

            W::Font(n) => match self.doc.font(n).cloned() {
                Some(font) => self.set_modifier(K::Font, font),
                None => log::debug!("Font {} is not in the font table", n),
            },
            W::FontSize(half_points) => self.set_modifier(K::FontSize, f64::from(half_points) / 2.0),
            W::Bold(on) => self.toggle(K::Bold, on),
            W::Italic(on) => self.toggle(K::Italic, on),
            W::Underline(on) => self.toggle(K::Underline, on),
            W::UnderlineNone => self.toggle(K::Underline, false),
            W::Superscript => self.set_modifier(K::Superscript, true),
            W::Subscript => self.set_modifier(K::Subscript, true),
            W::NoSuperSub => {
                self.toggle(K::Superscript, false);
                self.toggle(K::Subscript, false);
            }
            W::Strike(on) => self.toggle(K::Strikethrough, on),
            W::SmallCaps(on) => self.toggle(K::SmallCaps, on),
            W::Foreground(n) => self.set_colour(K::ForegroundColour, n),
            W::Background(n) => self.set_colour(K::BackgroundColour, n),
            W::Plain | W::ParagraphDefault => {
                self.flush();
                self.stack.current_mut().modifiers.clear();
            }

            W::Justify(justification) => self.set_modifier(K::Justification, justification),
            W::FirstLineIndent(n) => self.set_distance(K::FirstLineIndent, n),
            W::LeftIndent(n) => self.set_distance(K::LeftIndent, n),
            W::RightIndent(n) => self.set_distance(K::RightIndent, n),
            W::MarginLeft(n) => self.set_distance(K::LeftMargin, n),
            W::MarginRight(n) => self.set_distance(K::RightMargin, n),
            W::MarginTop(n) => self.set_distance(K::TopMargin, n),
            W::MarginBottom(n) => self.set_distance(K::BottomMargin, n),
            W::SpaceBefore(n) => self.set_distance(K::SpaceBefore, n),
            W::SpaceAfter(n) => self.set_distance(K::SpaceAfter, n),

            W::Par => self.boundary(K::Paragraph, ""),
            W::Line => self.boundary(K::Newline, "\n"),
            W::Tab => self.boundary(K::Tab, "\t"),
            W::LQuote => self.boundary(K::LQuote, "'"),
            W::RQuote => self.boundary(K::RQuote, "'"),
            W::LDblQuote => self.boundary(K::LDblQuote, "\""),
            W::RDblQuote => self.boundary(K::RDblQuote, "\""),
            W::EmDash => self.boundary(K::EmDash, "--"),
            W::EnDash => self.boundary(K::EnDash, "-"),
            W::NonBreakingSpace => self.boundary(K::Nbsp, " "),
            W::NonBreakingHyphen => self.push_char('-'),
            W::Literal(c) => self.push_char(c),
            W::Unicode(n) => self.push_unicode(n),
            W::UnicodeSkip(n) => {
                self.stack.current_mut().unicode_skip = u32::try_from(n).unwrap_or(0);
            }
            W::Hex(byte) => {
                if self.pending_skip > 0 {
                    self.pending_skip -= 1;
                } else {
                    self.bytes.push(byte);
                }
            }

            W::Picture => self.set_modifier(K::Picture, true),
            W::PictureFormat(format) => self.set_modifier(K::PictureFormat, format),
            W::PictureWidth(n) => self.set_distance(K::PictureWidth, n),
            W::PictureHeight(n) => self.set_distance(K::PictureHeight, n),
            W::PictureGoalWidth(n) => self.set_distance(K::PictureGoalWidth, n),
            W::PictureGoalHeight(n) => self.set_distance(K::PictureGoalHeight, n),
            W::PictureScaleX(n) => self.set_modifier(K::PictureScaleX, n),
            W::PictureScaleY(n) => self.set_modifier(K::PictureScaleY, n),

            W::RowDefaults => self.start_row()?,
            W::RowHalfGap(n) => {
                self.with_table("trgaph", |table| table.half_gap = twips_to_points(n))?
            }
            W::RowLeft(n) => {
                self.with_table("trleft", |table| table.left_margin = twips_to_points(n))?
            }
            W::CellBoundary(n) => self.with_table("cellx", |table| {
                if let Some(row) = table.current_row_mut() {
                    row.end_positions.push(twips_to_points(n));
                }
            })?,
            W::CellEnd => self.end_cell()?,
            W::RowEnd => self.end_row()?,

            W::Unknown { name, value } => {
                if self.options.report_unknown_controls {
                    match value {
                        Some(value) => log::warn!("Unknown control \\{}{} at {}", name, value, pos),
                        None => log::warn!("Unknown control \\{} at {}", name, pos),
                    }
                }
            }
        }

        Ok(pos)
    }

    fn update_encoding(&mut self) {
        if self.options.encoding.is_some() {
            return;
        }
        self.encoding = self
            .doc
            .code_page
            .and_then(codepage_to_encoding)
            .or_else(|| charset_encoding(self.doc.character_set));
    }

    /// Decode the pending run of `\'hh` bytes into the text buffer.
    fn decode_bytes(&mut self) {
        if !self.bytes.is_empty() {
            push_decoded(&mut self.text, &self.bytes, self.encoding);
            self.bytes.clear();
        }
    }

    fn push_char(&mut self, c: char) {
        if self.pending_skip > 0 {
            self.pending_skip -= 1;
        } else {
            self.text.push(c);
        }
    }

    fn push_unicode(&mut self, value: i32) {
        let code = if value < 0 { value + 65536 } else { value };

        if code == LINE_SEPARATOR {
            self.boundary(ModifierKey::Newline, "\n");
        } else {
            match u32::try_from(code).ok().and_then(char::from_u32) {
                Some(c) => self.text.push(c),
                None => log::debug!("Invalid unicode escape \\u{}", value),
            }
        }
        self.pending_skip = self.stack.current().unicode_skip;
    }

    // Sections

    /// Emit the pending text as a section carrying the current modifiers.
    fn flush(&mut self) {
        self.decode_bytes();
        if self.text.is_empty() {
            return;
        }
        let text = mem::take(&mut self.text);
        let section = Section::new(text, self.stack.current().modifiers.clone());
        self.emit(section);
    }

    fn emit(&mut self, section: Section) {
        if let Some(&Context::TableCell { section: index, cell }) = self.contexts.last() {
            let row = self
                .doc
                .sections
                .get_mut(index)
                .and_then(Section::table_mut)
                .and_then(Table::current_row_mut);
            if let Some(row) = row {
                row.cell_mut(cell).sections.push(section);
                return;
            }
        }
        self.doc.add_section(section);
    }

    /// Emit a one-off section marked with `key`, isolated from its
    /// neighbours.
    fn boundary(&mut self, key: ModifierKey, text: &str) {
        self.flush();
        self.stack.push();
        self.stack.current_mut().modifiers.insert(key, true);
        let section = Section::new(text, self.stack.current().modifiers.clone());
        self.stack.pop();
        self.emit(section);
    }

    fn set_modifier(&mut self, key: ModifierKey, value: impl Into<Value>) {
        self.flush();
        self.stack.current_mut().modifiers.insert(key, value);
    }

    fn toggle(&mut self, key: ModifierKey, on: bool) {
        if on {
            self.set_modifier(key, true);
        } else {
            self.flush();
            self.stack.current_mut().modifiers.remove(key);
        }
    }

    fn set_distance(&mut self, key: ModifierKey, twips: i32) {
        self.set_modifier(key, twips_to_points(twips));
    }

    fn set_colour(&mut self, key: ModifierKey, index: i32) {
        let colour = usize::try_from(index)
            .ok()
            .and_then(|i| self.doc.colour(i))
            .cloned();
        match colour {
            Some(colour) => self.set_modifier(key, colour),
            None => log::debug!("Colour {} is not in the colour table", index),
        }
    }

    // Tables

    fn current_table(&mut self) -> Option<&mut Table> {
        match self.contexts.last() {
            Some(&Context::TableCell { section, .. }) => {
                self.doc.sections.get_mut(section).and_then(Section::table_mut)
            }
            _ => None,
        }
    }

    fn outside_table(&self, word: &str) -> Result<()> {
        if self.options.is_lenient() {
            log::warn!("Ignoring \\{} outside of a table", word);
            Ok(())
        } else {
            Err(Error::invalid(format!("\\{} outside of a table", word)))
        }
    }

    fn with_table(&mut self, word: &str, apply: impl FnOnce(&mut Table)) -> Result<()> {
        match self.current_table() {
            Some(table) => {
                apply(table);
                Ok(())
            }
            None => self.outside_table(word),
        }
    }

    /// `\trowd`: open a row, continuing the preceding table if there is one.
    fn start_row(&mut self) -> Result<()> {
        self.flush();
        if matches!(self.contexts.last(), Some(Context::TableCell { .. })) {
            log::debug!("Row defaults inside an open row; closing it");
            self.end_row()?;
        }

        let last = self.doc.sections.len().checked_sub(1);
        let continued = last.and_then(|index| {
            let table = self.doc.sections[index].table_mut()?;
            table.add_row();
            Some(index)
        });

        let index = match continued {
            Some(index) => index,
            None => {
                let mut table = Table::new();
                table.add_row();
                let mut modifiers = self.stack.current().modifiers.clone();
                modifiers.insert(ModifierKey::Table, table);
                self.doc.add_section(Section::new("", modifiers));
                self.doc.sections.len() - 1
            }
        };

        self.contexts.push(Context::TableCell {
            section: index,
            cell: 0,
        });
        Ok(())
    }

    /// `\cell`: close the current cell and move to the next slot.
    fn end_cell(&mut self) -> Result<()> {
        self.flush();
        let (index, cell) = match self.contexts.last() {
            Some(&Context::TableCell { section, cell }) => (section, cell),
            _ => return self.outside_table("cell"),
        };

        let row = self
            .doc
            .sections
            .get_mut(index)
            .and_then(Section::table_mut)
            .and_then(Table::current_row_mut);
        let slots = match row {
            Some(row) => {
                row.cell_mut(cell);
                row.slot_count()
            }
            None => return Ok(()),
        };

        if cell + 1 < slots {
            if let Some(Context::TableCell { cell: current, .. }) = self.contexts.last_mut() {
                *current += 1;
            }
        }
        Ok(())
    }

    /// `\row`: close the row, dropping it when no cell was produced.
    fn end_row(&mut self) -> Result<()> {
        self.flush();
        if !matches!(self.contexts.last(), Some(Context::TableCell { .. })) {
            return self.outside_table("row");
        }

        if let Some(table) = self.current_table() {
            if table.current_row().is_some_and(|row| row.is_empty()) {
                table.rows.pop();
            }
        }
        self.contexts.pop();
        Ok(())
    }
}

/// Validate what follows the root group.
///
/// Whitespace and stray groups are ignored; a closing brace with no
/// matching opening brace is an error.
fn check_trailing(rest: &[char]) -> Result<()> {
    let mut depth = 0usize;
    let mut chars = rest.iter();
    while let Some(&c) = chars.next() {
        match c {
            '\\' => {
                chars.next();
            }
            '{' => depth += 1,
            '}' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| Error::invalid("Unbalanced {}s"))?;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(Error::invalid("Unbalanced {}s"));
    }
    if rest.iter().any(|c| !c.is_whitespace()) {
        log::debug!("Ignoring content after the root group");
    }
    Ok(())
}

/// Skip to the brace closing the group that contains `pos`.
fn skip_group(src: &[char], mut pos: usize) -> usize {
    let mut depth = 1usize;
    while let Some(&c) = src.get(pos) {
        match c {
            '\\' => pos += 1,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return pos;
                }
            }
            _ => {}
        }
        pos += 1;
    }
    src.len()
}
