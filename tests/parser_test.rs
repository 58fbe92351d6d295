//! Integration tests for RTF parsing.

use unrtf::{
    parse_bytes, parse_str, parse_str_with_options, CharacterSet, Error, FontFamily, FontPitch,
    Justification, ModifierKey, ParseOptions, RtfParser,
};

const SAMPLE: &str = r"{\rtf1\ansi\ansicpg1252\deff0
{\fonttbl{\f0\froman\fcharset0\fprq2 Times New Roman;}{\f1\fswiss Arial;}}
{\colortbl;\red255\green0\blue0;\red0\green128\blue0;}
{\info{\title Sample}{\author Someone}}
\pard\qc\f1\fs32 Title\par
\pard\f0\fs24 Some {\b bold} and {\i\cf1 red italic} text.\par
}";

#[test]
fn test_parse_sample_header() {
    let doc = parse_str(SAMPLE).unwrap();

    assert_eq!(doc.character_set, CharacterSet::Ansi);
    assert_eq!(doc.code_page, Some(1252));
    assert_eq!(doc.default_font, 0);
}

#[test]
fn test_parse_sample_font_table() {
    let doc = parse_str(SAMPLE).unwrap();

    assert_eq!(doc.font_table.len(), 2);
    let times = &doc.font_table[&0];
    assert_eq!(times.name, "Times New Roman");
    assert_eq!(times.family_command, FontFamily::Roman);
    assert_eq!(times.pitch, FontPitch::Variable);
    assert_eq!(times.character_set, Some(0));
    assert_eq!(doc.font_table[&1].family_command, FontFamily::Swiss);
}

#[test]
fn test_parse_sample_colour_table() {
    let doc = parse_str(SAMPLE).unwrap();

    assert_eq!(doc.colour_table.len(), 3);
    assert!(doc.colour_table[0].use_default);
    assert_eq!(doc.colour_table[1].rgb(), (255, 0, 0));
    assert_eq!(doc.color_table()[2].rgb(), (0, 128, 0));
}

#[test]
fn test_parse_sample_body() {
    let doc = parse_str(SAMPLE).unwrap();

    let title = &doc.sections[0];
    assert_eq!(title.text, "Title");
    assert_eq!(title.modifiers.justification(), Some(Justification::Center));
    assert_eq!(title.modifiers.font_size(), Some(16.0));
    assert_eq!(title.modifiers.font().map(|f| f.name.as_str()), Some("Arial"));

    let bold = doc.sections.iter().find(|s| s.text == "bold").unwrap();
    assert!(bold.modifiers.flag(ModifierKey::Bold));
    assert_eq!(bold.modifiers.font_size(), Some(12.0));

    let red = doc.sections.iter().find(|s| s.text == "red italic").unwrap();
    assert!(red.modifiers.flag(ModifierKey::Italic));
    assert!(!red.modifiers.contains(ModifierKey::Bold));
    assert_eq!(
        red.modifiers
            .colour(ModifierKey::ForegroundColour)
            .map(|c| c.rgb()),
        Some((255, 0, 0))
    );
}

#[test]
fn test_parse_sample_plain_text() {
    let doc = parse_str(SAMPLE).unwrap();
    assert_eq!(
        doc.plain_text(),
        "Title\nSome bold and red italic text.\n"
    );
}

#[test]
fn test_info_group_is_not_text() {
    let doc = parse_str(SAMPLE).unwrap();
    assert!(!doc.plain_text().contains("Someone"));
}

#[test]
fn test_sections_own_their_modifiers() {
    let mut doc = parse_str(r"{\rtf1 \b one{\i two}}").unwrap();

    doc.sections[0].modifiers.remove(ModifierKey::Bold);
    assert!(doc.sections[1].modifiers.flag(ModifierKey::Bold));
}

#[test]
fn test_empty_document() {
    let doc = parse_str(r"{\rtf1}").unwrap();
    assert!(doc.is_empty());
    assert_eq!(doc.plain_text(), "");
}

#[test]
fn test_leading_whitespace_before_header() {
    let doc = parse_str("  \n{\\rtf1 text}").unwrap();
    assert_eq!(doc.plain_text(), "text");
}

#[test]
fn test_invalid_documents() {
    for src in ["", "plain text", r"{\ansi text}", r"{\rtf1 text", r"{\rtf1 text}}"] {
        let result = parse_str(src);
        assert!(
            matches!(result, Err(Error::InvalidDocument(_))),
            "{:?} should be rejected",
            src
        );
    }
}

#[test]
fn test_mac_character_set_decodes_escapes() {
    let doc = parse_str(r"{\rtf1\mac na\'8fve}").unwrap();
    assert_eq!(doc.character_set, CharacterSet::Mac);
    assert_eq!(doc.plain_text(), "naève");
}

#[test]
fn test_unicode_with_fallback() {
    let doc = parse_str(r"{\rtf1\uc1 \u8364? and \u-4064?}").unwrap();
    assert_eq!(doc.plain_text(), "\u{20ac} and \u{f020}");
}

#[test]
fn test_unicode_skip_is_scoped_to_group() {
    let doc = parse_str(r"{\rtf1 {\uc2 \u8364xx}\u8364?}").unwrap();
    assert_eq!(doc.plain_text(), "\u{20ac}\u{20ac}");
}

#[test]
fn test_parse_bytes_utf8() {
    let doc = parse_bytes("{\\rtf1 déjà vu}".as_bytes()).unwrap();
    assert_eq!(doc.plain_text(), "déjà vu");
}

#[test]
fn test_lenient_option() {
    let src = r"{\rtf1 \cell stray}";
    assert!(parse_str(src).is_err());

    let doc = parse_str_with_options(src, ParseOptions::new().lenient()).unwrap();
    assert_eq!(doc.plain_text(), "stray");
}

#[test]
fn test_parser_reuse() {
    let parser = RtfParser::new();

    let first = parser.parse(r"{\rtf1 \b one}").unwrap();
    let second = parser.parse(r"{\rtf1 two}").unwrap();

    assert!(first.sections[0].modifiers.flag(ModifierKey::Bold));
    assert!(second.sections[0].modifiers.is_empty());
}

#[test]
fn test_parser_shared_between_threads() {
    let parser = std::sync::Arc::new(RtfParser::new());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let parser = parser.clone();
            std::thread::spawn(move || {
                let src = format!("{{\\rtf1 thread {}}}", i);
                parser.parse(&src).unwrap().plain_text()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), format!("thread {}", i));
    }
}

#[test]
fn test_document_display() {
    let doc = parse_str(r"{\rtf1{\fonttbl{\f0 Arial;}}{\colortbl;\red1\green2\blue3;}\b Hi}").unwrap();
    let dump = doc.to_string();

    assert!(dump.starts_with("RTF Document:"));
    assert!(dump.contains("0: Arial"));
    assert!(dump.contains("0: default"));
    assert!(dump.contains("1: [1, 2, 3]"));
    assert!(dump.contains("Hi"));
}
