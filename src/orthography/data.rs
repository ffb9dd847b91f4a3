//! The orthography reference database.
//!
//! Per-language codepoint requirements, grouped into script families.
//! The tables are process-wide immutable reference data; they are loaded
//! once and never mutated, which makes them safe for unsynchronized
//! concurrent reads.
//!
//! The requirement lists are derived from the Fontaine font analysis
//! project's orthography descriptions. Each definition names an anchor
//! codepoint used to cheaply rule the orthography out before its full
//! requirement list is walked.

use super::{OrthographyDef, ScriptFamily};
use crate::orthography::Requirement::{Range, Single};
use lazy_static::lazy_static;

/// A pangram suitable for previewing fonts with plain Latin coverage.
///
/// Used as the fallback preview for well-covered `"Basic Latin"` fonts and
/// as the locale sample string for locales without a curated pangram.
pub const GENERIC_PANGRAM: &str = "The quick brown fox jumps over the lazy dog.";

/// Curated pangrams keyed by ISO 639-1 language code.
const PANGRAMS: [(&str, &str); 5] = [
    ("de", "Zwölf Boxkämpfer jagen Viktor quer über den großen Sylter Deich."),
    ("es", "El veloz murciélago hindú comía feliz cardillo y kiwi."),
    ("fr", "Portez ce vieux whisky au juge blond qui fume."),
    ("nl", "Pa's wijze lynx bezag vroom het fikse aquaduct."),
    ("pt", "Um pequeno jabuti xereta viu dez cegonhas felizes."),
];

lazy_static! {
    static ref LOCALE_PANGRAM: &'static str = {
        let locale = std::env::var("LC_ALL")
            .or_else(|_| std::env::var("LC_MESSAGES"))
            .or_else(|_| std::env::var("LANG"))
            .unwrap_or_default();
        pangram_for_locale(&locale)
    };
}

/// Returns the pangram for the language of the current locale.
///
/// Falls back to [`GENERIC_PANGRAM`] when the locale has no curated pangram.
pub fn localized_pangram() -> &'static str {
    &LOCALE_PANGRAM
}

fn pangram_for_locale(locale: &str) -> &'static str {
    // strip territory, codeset, and modifier, e.g. "de_AT.UTF-8" -> "de"
    let language = locale
        .split(|ch| ch == '_' || ch == '.' || ch == '@')
        .next()
        .unwrap_or("");
    PANGRAMS
        .iter()
        .find(|(code, _)| *code == language)
        .map_or(GENERIC_PANGRAM, |&(_, pangram)| pangram)
}

/// The Latin script family.
pub static LATIN: [OrthographyDef; 8] = [
    OrthographyDef {
        name: "Basic Latin",
        native: "Basic Latin",
        key: 0x0041, // LATIN CAPITAL LETTER A
        sample: "AaBbCcGgQqRrSsZz",
        requirements: &[Range(0x0041, 0x005A), Range(0x0061, 0x007A)],
    },
    OrthographyDef {
        name: "Western European",
        native: "Western European",
        key: 0x00C0, // LATIN CAPITAL LETTER A WITH GRAVE
        sample: "ÁàåÇçæÐðéîñöœßþÿ",
        requirements: &[
            Range(0x00C0, 0x00CF),
            Range(0x00D0, 0x00D6),
            Range(0x00D8, 0x00DF),
            Range(0x00E0, 0x00EF),
            Range(0x00F0, 0x00F6),
            Range(0x00F8, 0x00FF),
        ],
    },
    OrthographyDef {
        name: "Catalan",
        native: "Català",
        key: 0x013F, // LATIN CAPITAL LETTER L WITH MIDDLE DOT
        sample: "ÀàÇçÉéÍíĿŀÚúÑñ",
        requirements: &[
            Single(0x00C0),
            Single(0x00E0),
            Single(0x00C7),
            Single(0x00E7),
            Single(0x00C8),
            Single(0x00E8),
            Single(0x00C9),
            Single(0x00E9),
            Single(0x00CD),
            Single(0x00ED),
            Single(0x00CF),
            Single(0x00EF),
            Single(0x013F),
            Single(0x0140),
            Single(0x00D2),
            Single(0x00F2),
            Single(0x00D3),
            Single(0x00F3),
            Single(0x00DA),
            Single(0x00FA),
            Single(0x00DC),
            Single(0x00FC),
            Single(0x00D1),
            Single(0x00F1),
        ],
    },
    OrthographyDef {
        name: "Baltic",
        native: "Baltic",
        key: 0x0136, // LATIN CAPITAL LETTER K WITH CEDILLA
        sample: "ĀāĄąčĖęīĶļŅšž",
        requirements: &[
            Single(0x0100),
            Single(0x0101),
            Single(0x0104),
            Single(0x0105),
            Single(0x010C),
            Single(0x010D),
            Single(0x0112),
            Single(0x0113),
            Single(0x0116),
            Single(0x0117),
            Single(0x0118),
            Single(0x0119),
            Single(0x0122),
            Single(0x0123),
            Single(0x012A),
            Single(0x012B),
            Single(0x012E),
            Single(0x012F),
            Single(0x0136),
            Single(0x0137),
            Single(0x013B),
            Single(0x013C),
            Single(0x0145),
            Single(0x0146),
            Single(0x0160),
            Single(0x0161),
            Single(0x016A),
            Single(0x016B),
            Single(0x017D),
            Single(0x017E),
            Single(0x014C),
            Single(0x014D),
            Single(0x0156),
            Single(0x0157),
            Single(0x0172),
            Single(0x0173),
        ],
    },
    OrthographyDef {
        name: "Turkish",
        native: "Türkçe",
        key: 0x0130, // LATIN CAPITAL LETTER I WITH DOT ABOVE
        sample: "ÂâÇçĞğİıÖöŞşÛû",
        requirements: &[
            Single(0x00C2),
            Single(0x00E2),
            Single(0x00C7),
            Single(0x00E7),
            Single(0x011E),
            Single(0x011F),
            Single(0x00CE),
            Single(0x00EE),
            Single(0x0130),
            Single(0x0131),
            Single(0x00D6),
            Single(0x00F6),
            Single(0x015E),
            Single(0x015F),
            Single(0x00DB),
            Single(0x00FB),
            Single(0x00DC),
            Single(0x00FC),
        ],
    },
    OrthographyDef {
        name: "Romanian",
        native: "Română",
        key: 0x021A, // LATIN CAPITAL LETTER T WITH COMMA BELOW
        sample: "ÂâĂăÎîȘșȚț",
        requirements: &[
            Single(0x00C2),
            Single(0x00E2),
            Single(0x0102),
            Single(0x0103),
            Single(0x00CE),
            Single(0x00EE),
            Single(0x0218),
            Single(0x0219),
            Single(0x021A),
            Single(0x021B),
        ],
    },
    OrthographyDef {
        name: "Dutch",
        native: "Nederlands",
        key: 0x0132, // LATIN CAPITAL LIGATURE IJ
        sample: "ÁáËëĲĳÛû",
        requirements: &[
            Single(0x00C1),
            Single(0x00E1),
            Single(0x00C2),
            Single(0x00E2),
            Single(0x00C8),
            Single(0x00E8),
            Single(0x00C9),
            Single(0x00E9),
            Single(0x00CA),
            Single(0x00EA),
            Single(0x00CB),
            Single(0x00EB),
            Single(0x00CD),
            Single(0x00ED),
            Single(0x00CF),
            Single(0x00EF),
            Single(0x0132),
            Single(0x0133),
            Single(0x00D3),
            Single(0x00F3),
            Single(0x00D4),
            Single(0x00F4),
            Single(0x00D6),
            Single(0x00F6),
            Single(0x00DA),
            Single(0x00FA),
            Single(0x00DB),
            Single(0x00FB),
            Single(0x00C4),
            Single(0x00E4),
            Single(0x00DC),
            Single(0x00FC),
        ],
    },
    OrthographyDef {
        name: "Pinyin",
        native: "汉语拼音",
        key: 0x01DA, // LATIN SMALL LETTER U WITH DIAERESIS AND CARON
        sample: "āáǎàēéěèǘǚǜü",
        requirements: &[
            Single(0x0101),
            Single(0x00E1),
            Single(0x01CE),
            Single(0x00E0),
            Single(0x0113),
            Single(0x00E9),
            Single(0x011B),
            Single(0x00E8),
            Single(0x012B),
            Single(0x00ED),
            Single(0x01D0),
            Single(0x00EC),
            Single(0x014D),
            Single(0x00F3),
            Single(0x01D2),
            Single(0x00F2),
            Single(0x016B),
            Single(0x00FA),
            Single(0x01D4),
            Single(0x00F9),
            Single(0x01D6),
            Single(0x01D8),
            Single(0x01DA),
            Single(0x01DC),
            Single(0x00FC),
        ],
    },
];

/// The Greek script family.
pub static GREEK: [OrthographyDef; 3] = [
    OrthographyDef {
        name: "Basic Greek",
        native: "Ελληνικό αλφάβητο",
        key: 0x03A9, // GREEK CAPITAL LETTER OMEGA
        sample: "ΑαΒβΓγΔδΕεΞξΩω",
        requirements: &[
            Single(0x0386),
            Single(0x0388),
            Single(0x0389),
            Single(0x038A),
            Single(0x038C),
            Single(0x038E),
            Single(0x038F),
            Single(0x0390),
            Range(0x0391, 0x03A1),
            Range(0x03A3, 0x03A9),
            Range(0x03AA, 0x03B0),
            Range(0x03B1, 0x03C9),
            Range(0x03CA, 0x03CE),
        ],
    },
    OrthographyDef {
        name: "Polytonic Greek",
        native: "Polytonic Greek",
        key: 0x1F21, // GREEK SMALL LETTER ETA WITH DASIA
        sample: "ἡἔἂὄὗὥᾏᾟ",
        requirements: &[
            Range(0x1F00, 0x1F15),
            Range(0x1F18, 0x1F1D),
            Range(0x1F20, 0x1F45),
            Range(0x1F48, 0x1F4D),
            Range(0x1F50, 0x1F57),
            Single(0x1F59),
            Single(0x1F5B),
            Single(0x1F5D),
            Range(0x1F5F, 0x1F7D),
            Range(0x1F80, 0x1FB4),
            Range(0x1FB6, 0x1FBC),
            Range(0x1FC2, 0x1FC4),
            Range(0x1FC6, 0x1FD3),
            Range(0x1FD6, 0x1FDB),
            Range(0x1FE0, 0x1FEC),
            Range(0x1FF2, 0x1FF4),
            Range(0x1FF6, 0x1FFC),
        ],
    },
    OrthographyDef {
        name: "Archaic Greek Letters",
        native: "Archaic Greek Letters",
        key: 0x03E0, // GREEK LETTER SAMPI
        sample: "ϘϙϚϛϜϞϟϠϡ",
        requirements: &[
            Single(0x0370),
            Single(0x0371),
            Single(0x0372),
            Single(0x0373),
            Single(0x0376),
            Single(0x0377),
            Range(0x03D8, 0x03E1),
            Single(0x03F7),
            Single(0x03F8),
            Single(0x03FA),
            Single(0x03FB),
        ],
    },
];

/// The Arabic script family.
pub static ARABIC: [OrthographyDef; 5] = [
    OrthographyDef {
        name: "Arabic",
        native: "العربية",
        key: 0x0639, // ARABIC LETTER AIN
        sample: "ا ب ت ث ج ح خ د ذ ر ز س",
        requirements: &[
            Range(0x0621, 0x063A),
            Range(0x0640, 0x0652),
            Range(0x0660, 0x0669),
        ],
    },
    OrthographyDef {
        name: "Farsi",
        native: "فارسی",
        key: 0x067E, // ARABIC LETTER PEH
        sample: "پ چ ژ ک گ ۀ ی",
        requirements: &[
            Single(0x067E),
            Single(0x0686),
            Single(0x0698),
            Single(0x06A9),
            Single(0x06AF),
            Single(0x06CC),
            Range(0x06F0, 0x06F9),
        ],
    },
    OrthographyDef {
        name: "Urdu",
        native: "اُردو",
        key: 0x0679, // ARABIC LETTER TTEH
        sample: "ٹ پ چ ڈ ڐ ژ ڙ ے",
        requirements: &[
            Single(0x0679),
            Single(0x067E),
            Single(0x0686),
            Single(0x0688),
            Single(0x0691),
            Single(0x0698),
            Single(0x06A9),
            Single(0x06AF),
            Single(0x06BA),
            Single(0x06BE),
            Single(0x06C0),
            Single(0x06C1),
            Single(0x06C2),
            Single(0x06C3),
            Single(0x06CC),
            Single(0x06D2),
            Single(0x06D3),
            Single(0x06D4),
            Range(0x06F0, 0x06F9),
        ],
    },
    OrthographyDef {
        name: "Kazakh",
        native: "قازاق",
        key: 0x06AD, // ARABIC LETTER NG
        sample: "ٴ ٵ ٷ ٸ پ چ ڭ گ ۆ ۉ",
        requirements: &[
            Single(0x0674),
            Single(0x0675),
            Single(0x0676),
            Single(0x0677),
            Single(0x0678),
            Single(0x067E),
            Single(0x0686),
            Single(0x06AD),
            Single(0x06AF),
            Single(0x06C6),
            Single(0x06C9),
            Single(0x06CB),
            Single(0x06D5),
        ],
    },
    OrthographyDef {
        name: "Pashto",
        native: "پښتو",
        key: 0x0685, // ARABIC LETTER HAH WITH THREE DOTS ABOVE
        sample: "ټ پ ځ ڂ څ چ ډ ړ ګ ې",
        requirements: &[
            Single(0x067C),
            Single(0x067E),
            Single(0x0681),
            Single(0x0685),
            Single(0x0686),
            Single(0x0689),
            Single(0x0693),
            Single(0x0696),
            Single(0x0698),
            Single(0x069A),
            Single(0x06AB),
            Single(0x06BC),
            Single(0x06CD),
            Single(0x06D0),
        ],
    },
];

/// The Chinese script family.
pub static CHINESE: [OrthographyDef; 2] = [
    OrthographyDef {
        name: "Chinese Zhuyin Fuhao",
        native: "注音符號",
        key: 0x3105, // BOPOMOFO LETTER B
        sample: "ㄅㄆㄇㄈㄉㄊㄋㄌ",
        requirements: &[Range(0x3105, 0x312C)],
    },
    OrthographyDef {
        name: "CJK Unified",
        native: "CJK Unified",
        key: 0x4E00, // CJK UNIFIED IDEOGRAPH-4E00
        sample: "天地玄黃宇宙洪荒",
        requirements: &[Range(0x4E00, 0x9FA5)],
    },
];

/// The Japanese script family.
pub static JAPANESE: [OrthographyDef; 1] = [OrthographyDef {
    name: "Japanese Kana",
    native: "仮名",
    key: 0x3042, // HIRAGANA LETTER A
    sample: "いろはにほへと",
    requirements: &[
        Range(0x3041, 0x3094),
        Range(0x3099, 0x309E),
        Range(0x30A1, 0x30FE),
    ],
}];

/// The Korean script family.
pub static KOREAN: [OrthographyDef; 2] = [
    OrthographyDef {
        name: "Korean Jamo",
        native: "자모",
        key: 0x3131, // HANGUL LETTER KIYEOK
        sample: "ㄱㄲㄳㄴㄵㄶㄷㄸㄹㄺ",
        requirements: &[Range(0x1100, 0x11FF), Range(0x3131, 0x318E)],
    },
    OrthographyDef {
        name: "Korean Hangul",
        native: "한글 / 조선글",
        key: 0xAC00, // HANGUL SYLLABLE GA
        sample: "",
        requirements: &[Range(0xAC00, 0xD7A3)],
    },
];

/// Orthographies outside the named script families.
pub static MISC: [OrthographyDef; 15] = [
    OrthographyDef {
        name: "Basic Cyrillic",
        native: "Кири́ллица",
        key: 0x0414, // CYRILLIC CAPITAL LETTER DE
        sample: "АБВГДЕЖЗИЙКЛ",
        requirements: &[Range(0x0410, 0x044F)],
    },
    OrthographyDef {
        name: "Hebrew",
        native: "עִבְרִית",
        key: 0x05D0, // HEBREW LETTER ALEF
        sample: "א ב ד ה ו ז ח ט י",
        requirements: &[Range(0x05D0, 0x05EA)],
    },
    OrthographyDef {
        name: "Armenian",
        native: "Հայերեն",
        key: 0x0561, // ARMENIAN SMALL LETTER AYB
        sample: "ԱաԲբԳգԴդ",
        requirements: &[
            Range(0x0531, 0x0556),
            Range(0x0559, 0x055F),
            Range(0x0561, 0x0587),
            Single(0x0589),
            Single(0x058A),
        ],
    },
    OrthographyDef {
        name: "Georgian",
        native: "ქართული დამწერლობა",
        key: 0x10D0, // GEORGIAN LETTER AN
        sample: "აბგდვზთი",
        requirements: &[Range(0x10D0, 0x10F0), Range(0x10A0, 0x10C0)],
    },
    OrthographyDef {
        name: "Syriac",
        native: "ܠܫܢܐ ܣܘܪܝܝܐ",
        key: 0x0710, // SYRIAC LETTER ALAPH
        sample: "ܐ ܒ ܓ ܔ ܕ ܩ ܫ ܬ",
        requirements: &[Range(0x0710, 0x072C)],
    },
    OrthographyDef {
        name: "Thaana",
        native: "ތާނަ",
        key: 0x0780, // THAANA LETTER HAA
        sample: "ހ ށ ނ ރ ބ ޅ ކ އ",
        requirements: &[Range(0x0780, 0x07B0)],
    },
    OrthographyDef {
        name: "Devanagari",
        native: "देवनागरी",
        key: 0x0915, // DEVANAGARI LETTER KA
        sample: "क ख ग घ ङ च छ ज झ ञ ट",
        requirements: &[
            Range(0x0905, 0x0914),
            Range(0x0915, 0x0939),
            Range(0x093F, 0x094C),
            Single(0x094D),
            Range(0x0958, 0x095F),
            Range(0x0960, 0x0965),
            Range(0x0966, 0x096F),
            Single(0x0970),
        ],
    },
    OrthographyDef {
        name: "Thai",
        native: "ภาษาไทย",
        key: 0x0E01, // THAI CHARACTER KO KAI
        sample: "ฟหกดสวงท",
        requirements: &[Range(0x0E01, 0x0E3A), Range(0x0E3F, 0x0E5B)],
    },
    OrthographyDef {
        name: "Lao",
        native: "ພາສາລາວ",
        key: 0x0E81, // LAO LETTER KO
        sample: "ກຂຄງຈຊຍດ",
        requirements: &[
            Single(0x0E81),
            Single(0x0E82),
            Single(0x0E84),
            Single(0x0E87),
            Single(0x0E88),
            Single(0x0E8A),
            Single(0x0E8D),
            Range(0x0E94, 0x0E97),
            Range(0x0E99, 0x0E9F),
            Single(0x0EA1),
            Single(0x0EA2),
            Single(0x0EA3),
            Single(0x0EA5),
            Single(0x0EA7),
            Single(0x0EAA),
            Single(0x0EAB),
            Range(0x0EAD, 0x0EB9),
            Single(0x0EBB),
            Single(0x0EBC),
            Single(0x0EBD),
            Range(0x0EC0, 0x0EC4),
            Single(0x0EC6),
            Range(0x0EC8, 0x0ECD),
            Range(0x0ED0, 0x0ED9),
            Single(0x0EDC),
            Single(0x0EDD),
        ],
    },
    OrthographyDef {
        name: "Khmer",
        native: "អក្សរខ្មែរ",
        key: 0x1780, // KHMER LETTER KA
        sample: "កខគឃងចឆជ",
        requirements: &[Range(0x1780, 0x17DC), Range(0x17E0, 0x17E9)],
    },
    OrthographyDef {
        name: "Ethiopic",
        native: "ግዕዝ",
        key: 0x1210, // ETHIOPIC SYLLABLE HHA
        sample: "ሀ ሁ ሂ ሃ ሄ ህ ሆ ሐ ሑ ሒ",
        requirements: &[
            Range(0x1200, 0x1248),
            Range(0x124A, 0x124D),
            Range(0x1250, 0x1256),
            Single(0x1258),
            Range(0x125A, 0x125D),
            Range(0x1260, 0x1288),
            Range(0x128A, 0x128D),
            Range(0x1290, 0x12B0),
            Range(0x12B2, 0x12B5),
            Range(0x12B8, 0x12BE),
            Single(0x12C0),
            Range(0x12C2, 0x12C5),
            Range(0x12C8, 0x12D6),
            Range(0x12D8, 0x1310),
            Range(0x1312, 0x1315),
            Range(0x1318, 0x135A),
            Range(0x135F, 0x137C),
        ],
    },
    OrthographyDef {
        name: "Cherokee",
        native: "ᏣᎳᎩ",
        key: 0x13E3, // CHEROKEE LETTER TSA
        sample: "ᎠᎣᎤᎴᎺᎾᏃᏆᏒᏔᏣᏫᏲᏴ",
        requirements: &[Range(0x13A0, 0x13F4)],
    },
    OrthographyDef {
        name: "Ogham",
        native: "Ogham",
        key: 0x1681, // OGHAM LETTER BEITH
        sample: "ᚁᚂᚃᚄᚋᚌᚍᚎ",
        requirements: &[Range(0x1680, 0x169C)],
    },
    OrthographyDef {
        name: "Runic",
        native: "ᚠᚢᚦᛆᚱᚴ",
        key: 0x16A0, // RUNIC LETTER FEHU FEOH FE F
        sample: "ᚠᚡᚢᚣᚤᚥᚦᚧ",
        requirements: &[Range(0x16A0, 0x16F0)],
    },
    OrthographyDef {
        name: "Currencies",
        native: "Currencies",
        key: 0x20A6, // NAIRA SIGN
        sample: "$¢£¥₧€₭",
        requirements: &[
            Single(0x0024),
            Range(0x00A2, 0x00A5),
            Single(0x058F),
            Single(0x060B),
            Single(0x09F2),
            Single(0x09F3),
            Single(0x09FB),
            Single(0x0AF1),
            Single(0x0BF9),
            Single(0x0E3F),
            Single(0x17DB),
            Range(0x20A0, 0x20BD),
            Single(0xA838),
            Single(0xFDFC),
            Single(0xFE69),
            Single(0xFF04),
            Single(0xFFE0),
            Single(0xFFE1),
            Single(0xFFE5),
            Single(0xFFE6),
        ],
    },
];

/// Every script family in evaluation order.
///
/// The Latin, Greek, and Arabic families are gated on the anchor codepoint
/// of their first definition; the remaining families are always evaluated.
pub static FAMILIES: [ScriptFamily; 7] = [
    ScriptFamily {
        name: "Latin",
        gated: true,
        definitions: &LATIN,
    },
    ScriptFamily {
        name: "Greek",
        gated: true,
        definitions: &GREEK,
    },
    ScriptFamily {
        name: "Arabic",
        gated: true,
        definitions: &ARABIC,
    },
    ScriptFamily {
        name: "Chinese",
        gated: false,
        definitions: &CHINESE,
    },
    ScriptFamily {
        name: "Japanese",
        gated: false,
        definitions: &JAPANESE,
    },
    ScriptFamily {
        name: "Korean",
        gated: false,
        definitions: &KOREAN,
    },
    ScriptFamily {
        name: "Miscellaneous",
        gated: false,
        definitions: &MISC,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charset::Charset;
    use crate::orthography::{evaluate, Requirement, SAMPLE_KEY, UNCATEGORIZED};
    use std::collections::HashSet;

    fn all_definitions() -> impl Iterator<Item = &'static OrthographyDef> {
        FAMILIES.iter().flat_map(|family| family.definitions.iter())
    }

    #[test]
    fn test_families_are_non_empty() {
        for family in FAMILIES.iter() {
            assert!(
                !family.definitions.is_empty(),
                "family {} has no definitions",
                family.name
            );
        }
    }

    #[test]
    fn test_names_are_unique_and_unreserved() {
        let mut names = HashSet::new();
        for def in all_definitions() {
            assert!(names.insert(def.name), "duplicate name {:?}", def.name);
            assert_ne!(def.name, SAMPLE_KEY);
            assert_ne!(def.name, UNCATEGORIZED);
        }
    }

    #[test]
    fn test_requirements_are_well_formed() {
        for def in all_definitions() {
            assert!(
                !def.requirements.is_empty(),
                "{} has no requirements",
                def.name
            );
            for requirement in def.requirements {
                if let Requirement::Range(start, end) = *requirement {
                    assert!(start <= end, "inverted range in {}", def.name);
                }
            }
        }
    }

    #[test]
    fn test_keys_are_part_of_requirements() {
        for def in all_definitions() {
            let contains_key = def
                .requirements
                .iter()
                .flat_map(Requirement::expand)
                .any(|codepoint| codepoint == def.key);
            assert!(contains_key, "{} key is not a requirement", def.name);
        }
    }

    #[test]
    fn test_full_requirement_match_yields_full_coverage() {
        for def in all_definitions() {
            let charset: Charset = def
                .requirements
                .iter()
                .flat_map(Requirement::expand)
                .collect();
            let evaluation = evaluate(&charset, def, false);
            assert_eq!(evaluation.coverage, 100.0, "{}", def.name);
        }
    }

    #[test]
    fn test_pangram_for_locale() {
        assert_eq!(pangram_for_locale("fr_FR.UTF-8"), PANGRAMS[2].1);
        assert_eq!(pangram_for_locale("de"), PANGRAMS[0].1);
        assert_eq!(pangram_for_locale("de_AT@euro"), PANGRAMS[0].1);
        assert_eq!(pangram_for_locale("ja_JP.UTF-8"), GENERIC_PANGRAM);
        assert_eq!(pangram_for_locale(""), GENERIC_PANGRAM);
        assert_eq!(pangram_for_locale("C"), GENERIC_PANGRAM);
    }
}
