//! Codepoint validity and renderability predicates.
//!
//! The engine works on raw `u32` codepoints as reported by font
//! introspection.
//! Two predicates are used throughout: [`validate`] checks that a value is a
//! Unicode scalar value at all, [`is_graphic`] checks that it is a defined,
//! printable, non-space character worth showing in a preview.

use icu_properties::props::GeneralCategory;
use icu_properties::{CodePointMapData, CodePointMapDataBorrowed};
use lazy_static::lazy_static;

/// The largest valid Unicode codepoint.
pub const MAX_CODEPOINT: u32 = 0x10FFFF;

lazy_static! {
    /// The general category property map, backed by compiled ICU data.
    static ref GENERAL_CATEGORY: CodePointMapDataBorrowed<'static, GeneralCategory> =
        CodePointMapData::<GeneralCategory>::new();
}

/// Returns whether `codepoint` is a valid Unicode scalar value.
///
/// Surrogates and values beyond [`MAX_CODEPOINT`] are rejected.
///
/// # Example
///
/// ```
/// # use scripta::unicode::validate;
/// assert!(validate(0x41));
/// assert!(!validate(0xD800));
/// assert!(!validate(0x110000));
/// ```
pub fn validate(codepoint: u32) -> bool {
    core::char::from_u32(codepoint).is_some()
}

/// Returns whether `codepoint` is a defined, printable, non-space character.
///
/// Control, format, unassigned, surrogate, and separator codepoints are not
/// graphic. Private-use codepoints are considered graphic since fonts
/// commonly map glyphs into the private-use area.
pub fn is_graphic(codepoint: u32) -> bool {
    if !validate(codepoint) {
        return false;
    }
    !matches!(
        GENERAL_CATEGORY.get32(codepoint),
        GeneralCategory::Control
            | GeneralCategory::Format
            | GeneralCategory::Surrogate
            | GeneralCategory::Unassigned
            | GeneralCategory::SpaceSeparator
            | GeneralCategory::LineSeparator
            | GeneralCategory::ParagraphSeparator
    )
}

/// Builds a string from a sequence of codepoints.
///
/// Returns `None` if any codepoint is invalid or not graphic; a preview
/// string with holes is worse than no preview string.
pub fn codepoints_to_string<I>(codepoints: I) -> Option<String>
where
    I: IntoIterator<Item = u32>,
{
    let mut result = String::new();
    for codepoint in codepoints {
        if !is_graphic(codepoint) {
            return None;
        }
        result.push(core::char::from_u32(codepoint)?);
    }
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_scalar_values() {
        assert!(validate(0x0));
        assert!(validate(0x41));
        assert!(validate(0xD7FF));
        assert!(validate(0xE000));
        assert!(validate(MAX_CODEPOINT));
    }

    #[test]
    fn test_validate_rejects_surrogates() {
        assert!(!validate(0xD800));
        assert!(!validate(0xDBFF));
        assert!(!validate(0xDFFF));
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        assert!(!validate(MAX_CODEPOINT + 1));
        assert!(!validate(u32::MAX));
    }

    #[test]
    fn test_is_graphic_letters_and_symbols() {
        assert!(is_graphic('A' as u32));
        assert!(is_graphic('ß' as u32));
        assert!(is_graphic('漢' as u32));
        assert!(is_graphic('€' as u32));
    }

    #[test]
    fn test_is_graphic_rejects_controls_and_spaces() {
        assert!(!is_graphic(0x00)); // NUL
        assert!(!is_graphic(0x0A)); // LINE FEED
        assert!(!is_graphic(0x20)); // SPACE
        assert!(!is_graphic(0xAD)); // SOFT HYPHEN (format)
        assert!(!is_graphic(0x2028)); // LINE SEPARATOR
    }

    #[test]
    fn test_is_graphic_accepts_private_use() {
        assert!(is_graphic(0xE000));
        assert!(is_graphic(0xF8FF));
    }

    #[test]
    fn test_is_graphic_rejects_unassigned_and_invalid() {
        assert!(!is_graphic(0x0378)); // unassigned
        assert!(!is_graphic(0xD800));
        assert!(!is_graphic(MAX_CODEPOINT + 1));
    }

    #[test]
    fn test_codepoints_to_string() {
        assert_eq!(
            codepoints_to_string(vec![0x41, 0x42, 0x43]),
            Some("ABC".to_string())
        );
        assert_eq!(codepoints_to_string(Vec::new()), Some(String::new()));
    }

    #[test]
    fn test_codepoints_to_string_aborts_on_invalid() {
        assert_eq!(codepoints_to_string(vec![0x41, 0xD800, 0x42]), None);
        assert_eq!(codepoints_to_string(vec![0x41, 0x0A]), None);
    }
}
