//! Code page handling for `\'hh` escapes.

use crate::model::CharacterSet;
use encoding_rs::Encoding;

/// Map a Windows code page number (`\ansicpgN`) to an encoding.
pub fn codepage_to_encoding(code_page: i32) -> Option<&'static Encoding> {
    let encoding = match code_page {
        874 => encoding_rs::WINDOWS_874,
        932 => encoding_rs::SHIFT_JIS,
        936 => encoding_rs::GBK,
        949 => encoding_rs::EUC_KR,
        950 => encoding_rs::BIG5,
        1250 => encoding_rs::WINDOWS_1250,
        1251 => encoding_rs::WINDOWS_1251,
        1252 => encoding_rs::WINDOWS_1252,
        1253 => encoding_rs::WINDOWS_1253,
        1254 => encoding_rs::WINDOWS_1254,
        1255 => encoding_rs::WINDOWS_1255,
        1256 => encoding_rs::WINDOWS_1256,
        1257 => encoding_rs::WINDOWS_1257,
        1258 => encoding_rs::WINDOWS_1258,
        10000 => encoding_rs::MACINTOSH,
        20866 => encoding_rs::KOI8_R,
        65001 => encoding_rs::UTF_8,
        _ => return None,
    };
    Some(encoding)
}

/// Encoding implied by the document character set.
///
/// The IBM PC code pages have no `encoding_rs` equivalent; bytes then map
/// straight to Latin-1.
pub fn charset_encoding(character_set: CharacterSet) -> Option<&'static Encoding> {
    match character_set {
        CharacterSet::Ansi => Some(encoding_rs::WINDOWS_1252),
        CharacterSet::Mac => Some(encoding_rs::MACINTOSH),
        CharacterSet::Pc | CharacterSet::Pca => None,
    }
}

/// Decode a run of escaped bytes and append it to `out`.
///
/// Runs must be decoded whole: multi-byte code pages (Shift-JIS, GBK,
/// UTF-8) split one character across several `\'hh` escapes.
pub fn push_decoded(out: &mut String, bytes: &[u8], encoding: Option<&'static Encoding>) {
    if bytes.is_empty() {
        return;
    }
    match encoding {
        Some(encoding) => {
            let (decoded, had_errors) = encoding.decode_without_bom_handling(bytes);
            if had_errors {
                log::debug!("Malformed {} byte run {:02x?}", encoding.name(), bytes);
            }
            out.push_str(&decoded);
        }
        None => out.extend(bytes.iter().copied().map(char::from)),
    }
}
