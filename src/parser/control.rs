//! Control word tokenizer.
//!
//! [`next_control`] lexes a single control from a character slice, starting
//! just after the backslash. [`ControlWord::classify`] then maps the raw
//! control onto the closed set of words the parser understands.

use crate::model::Justification;

/// A raw control as it appears in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Control {
    /// A letter sequence with an optional signed numeric parameter
    Word { name: String, value: Option<i32> },
    /// A `\'hh` hex escape
    Hex(u8),
    /// A single non-letter character (`\{`, `\\`, `\*`, `\~`, ...)
    Symbol(char),
}

impl Control {
    /// Name of the control, for diagnostics.
    pub fn name(&self) -> String {
        match self {
            Control::Word { name, .. } => name.clone(),
            Control::Hex(_) => "'".to_string(),
            Control::Symbol(c) => c.to_string(),
        }
    }
}

/// Lex one control starting at `pos`, the position after the backslash.
///
/// Returns the control and the position of the first character after it. A
/// single space delimiting a control word belongs to the word and is
/// skipped.
pub fn next_control(src: &[char], pos: usize) -> (Control, usize) {
    let Some(&first) = src.get(pos) else {
        return (
            Control::Word {
                name: String::new(),
                value: None,
            },
            pos,
        );
    };

    if first == '\'' {
        return lex_hex(src, pos + 1);
    }

    if !first.is_ascii_alphabetic() {
        return (Control::Symbol(first), pos + 1);
    }

    let mut end = pos;
    while src.get(end).is_some_and(|c| c.is_ascii_alphabetic()) {
        end += 1;
    }
    let name: String = src[pos..end].iter().collect();

    let (value, mut end) = lex_parameter(src, end);

    // a trailing asterisk after the parameter is not part of the word
    if src.get(end) == Some(&'*') {
        end += 1;
    }
    if src.get(end) == Some(&' ') {
        end += 1;
    }

    (Control::Word { name, value }, end)
}

fn lex_hex(src: &[char], pos: usize) -> (Control, usize) {
    let mut value: u32 = 0;
    let mut end = pos;
    while end < pos + 2 {
        match src.get(end).and_then(|c| c.to_digit(16)) {
            Some(digit) => value = value * 16 + digit,
            None => break,
        }
        end += 1;
    }

    if end == pos {
        return (
            Control::Word {
                name: "'".to_string(),
                value: None,
            },
            pos,
        );
    }
    // at most two hex digits, so the value always fits
    (Control::Hex(value as u8), end)
}

fn lex_parameter(src: &[char], pos: usize) -> (Option<i32>, usize) {
    let negative = src.get(pos) == Some(&'-');
    let start = if negative { pos + 1 } else { pos };

    let mut end = start;
    let mut magnitude: i64 = 0;
    while let Some(digit) = src.get(end).and_then(|c| c.to_digit(10)) {
        magnitude = (magnitude * 10 + i64::from(digit)).min(i64::from(i32::MAX) + 1);
        end += 1;
    }

    if end == start {
        return (None, pos);
    }

    let signed = if negative { -magnitude } else { magnitude };
    let value = signed.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
    (Some(value), end)
}

/// Picture formats named by their blip control words.
pub const PICTURE_FORMATS: [(&str, &str); 6] = [
    ("jpegblip", "jpeg"),
    ("pngblip", "png"),
    ("wbitmap", "bmp"),
    ("wmetafile", "wmf"),
    ("emfblip", "emf"),
    ("macpict", "pict"),
];

/// The control words recognized by the main dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlWord {
    // Header and destinations
    Rtf,
    Ansi,
    Mac,
    Pc,
    Pca,
    AnsiCodePage(i32),
    DefaultFont(i32),
    FontTable,
    ColourTable,
    Stylesheet,
    Info,
    IgnorableDestination,

    // Character formatting
    Font(i32),
    FontSize(i32),
    Bold(bool),
    Italic(bool),
    Underline(bool),
    UnderlineNone,
    Superscript,
    Subscript,
    NoSuperSub,
    Strike(bool),
    SmallCaps(bool),
    Foreground(i32),
    Background(i32),
    Plain,
    ParagraphDefault,

    // Paragraph formatting
    Justify(Justification),
    FirstLineIndent(i32),
    LeftIndent(i32),
    RightIndent(i32),
    MarginLeft(i32),
    MarginRight(i32),
    MarginTop(i32),
    MarginBottom(i32),
    SpaceBefore(i32),
    SpaceAfter(i32),

    // Text and boundaries
    Par,
    Line,
    Tab,
    LQuote,
    RQuote,
    LDblQuote,
    RDblQuote,
    EmDash,
    EnDash,
    NonBreakingSpace,
    NonBreakingHyphen,
    OptionalHyphen,
    Unicode(i32),
    UnicodeSkip(i32),
    Hex(u8),
    Literal(char),
    Ignored,

    // Pictures
    Picture,
    PictureFormat(&'static str),
    PictureWidth(i32),
    PictureHeight(i32),
    PictureGoalWidth(i32),
    PictureGoalHeight(i32),
    PictureScaleX(i32),
    PictureScaleY(i32),

    // Tables
    RowDefaults,
    RowHalfGap(i32),
    RowLeft(i32),
    CellBoundary(i32),
    InTable,
    CellEnd,
    RowEnd,

    Unknown { name: String, value: Option<i32> },
}

impl ControlWord {
    /// Classify a raw control.
    pub fn classify(control: Control) -> Self {
        match control {
            Control::Hex(byte) => ControlWord::Hex(byte),
            Control::Symbol(symbol) => Self::classify_symbol(symbol),
            Control::Word { name, value } => Self::classify_word(name, value),
        }
    }

    fn classify_symbol(symbol: char) -> Self {
        match symbol {
            '{' | '}' | '\\' => ControlWord::Literal(symbol),
            '*' => ControlWord::IgnorableDestination,
            '~' => ControlWord::NonBreakingSpace,
            '_' => ControlWord::NonBreakingHyphen,
            '-' => ControlWord::OptionalHyphen,
            '\n' => ControlWord::Line,
            '\r' => ControlWord::Ignored,
            _ => ControlWord::Unknown {
                name: symbol.to_string(),
                value: None,
            },
        }
    }

    fn classify_word(name: String, value: Option<i32>) -> Self {
        let n = value.unwrap_or(0);
        let on = value != Some(0);

        match name.as_str() {
            "rtf" => ControlWord::Rtf,
            "ansi" => ControlWord::Ansi,
            "mac" => ControlWord::Mac,
            "pc" => ControlWord::Pc,
            "pca" => ControlWord::Pca,
            "ansicpg" => ControlWord::AnsiCodePage(n),
            "deff" => ControlWord::DefaultFont(n),
            "fonttbl" => ControlWord::FontTable,
            "colortbl" => ControlWord::ColourTable,
            "stylesheet" => ControlWord::Stylesheet,
            "info" => ControlWord::Info,

            "f" => ControlWord::Font(n),
            // 24 half-points is the RTF default size
            "fs" => ControlWord::FontSize(value.unwrap_or(24)),
            "b" => ControlWord::Bold(on),
            "i" => ControlWord::Italic(on),
            "ul" => ControlWord::Underline(on),
            "ulnone" => ControlWord::UnderlineNone,
            "super" => ControlWord::Superscript,
            "sub" => ControlWord::Subscript,
            "nosupersub" => ControlWord::NoSuperSub,
            "strike" => ControlWord::Strike(on),
            "scaps" => ControlWord::SmallCaps(on),
            "cf" => ControlWord::Foreground(n),
            "cb" => ControlWord::Background(n),
            "plain" => ControlWord::Plain,
            "pard" => ControlWord::ParagraphDefault,

            "ql" => ControlWord::Justify(Justification::Left),
            "qr" => ControlWord::Justify(Justification::Right),
            "qj" => ControlWord::Justify(Justification::Full),
            "qc" => ControlWord::Justify(Justification::Center),
            "fi" => ControlWord::FirstLineIndent(n),
            "li" => ControlWord::LeftIndent(n),
            "ri" => ControlWord::RightIndent(n),
            "margl" => ControlWord::MarginLeft(n),
            "margr" => ControlWord::MarginRight(n),
            "margt" => ControlWord::MarginTop(n),
            "margb" => ControlWord::MarginBottom(n),
            "sb" => ControlWord::SpaceBefore(n),
            "sa" => ControlWord::SpaceAfter(n),

            "par" => ControlWord::Par,
            "line" => ControlWord::Line,
            "tab" => ControlWord::Tab,
            "lquote" => ControlWord::LQuote,
            "rquote" => ControlWord::RQuote,
            "ldblquote" => ControlWord::LDblQuote,
            "rdblquote" => ControlWord::RDblQuote,
            "emdash" => ControlWord::EmDash,
            "endash" => ControlWord::EnDash,
            "u" => ControlWord::Unicode(n),
            "uc" => ControlWord::UnicodeSkip(n),

            "pict" => ControlWord::Picture,
            "picw" => ControlWord::PictureWidth(n),
            "pich" => ControlWord::PictureHeight(n),
            "picwgoal" => ControlWord::PictureGoalWidth(n),
            "pichgoal" => ControlWord::PictureGoalHeight(n),
            "picscalex" => ControlWord::PictureScaleX(n),
            "picscaley" => ControlWord::PictureScaleY(n),

            "trowd" => ControlWord::RowDefaults,
            "trgaph" => ControlWord::RowHalfGap(n),
            "trleft" => ControlWord::RowLeft(n),
            "cellx" => ControlWord::CellBoundary(n),
            "intbl" => ControlWord::InTable,
            "cell" => ControlWord::CellEnd,
            "row" => ControlWord::RowEnd,

            other => match PICTURE_FORMATS.iter().find(|(word, _)| *word == other) {
                Some((_, format)) => ControlWord::PictureFormat(format),
                None => ControlWord::Unknown { name, value },
            },
        }
    }
}
