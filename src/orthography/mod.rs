//! # Orthography detection
//!
//! Determines the extent to which a font supports the writing systems known
//! to the reference database in [`data`].
//!
//! The entry to this module is the [`detect`] function.
//! It evaluates a [`Charset`] against every orthography definition and
//! returns an [`OrthographyResults`] value.
//!
//! ```
//! # use scripta::charset::Charset;
//! # use scripta::ctx::Context;
//! # use scripta::orthography::detect;
//! let ctx = Context::default();
//! let charset: Charset = (0x41..=0x5A).chain(0x61..=0x7A).collect();
//! let results = detect(Some(&charset), &ctx);
//! assert_eq!(results.entries()["Basic Latin"].coverage, 100.0);
//! ```
//!
//! Results serialize to a flat map with one member per detected orthography
//! and a reserved `"sample"` member:
//!
//! ```text
//! {
//!   "Basic Latin": {
//!     "name": "Basic Latin",
//!     "native": "Basic Latin",
//!     "sample": "AaBbCcGgQqRrSsZz",
//!     "coverage": 100.0,
//!     "filter": [65, 66, ... 122]
//!   },
//!   ...,
//!   "sample": null
//! }
//! ```
//!
//! `"sample"` is `null` if the font supports rendering the sample string of
//! the system locale (see [`Context::locale_sample`](crate::ctx::Context::locale_sample)).
//! Otherwise it holds the sample string of the best-covered orthography, or,
//! should that fail, a string randomly generated from the characters
//! available in the font.

pub mod data;

mod evaluate;
mod sample;
mod select;

pub use evaluate::{evaluate, family_is_relevant, Evaluation};
pub use sample::random_sample;
pub use select::{select_default, select_sample};

use crate::charset::Charset;
use crate::ctx::Context;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::ops::RangeInclusive;

/// The reserved result-map key holding the preview sample.
///
/// Reference data must not define an orthography with this name.
pub const SAMPLE_KEY: &str = "sample";

/// The name of the synthetic entry produced for charsets that match no
/// orthography definition.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// A single entry in an orthography definition's requirement list.
///
/// Ranges are inclusive on both ends and expand to one codepoint per member
/// at evaluation time; a range is never collapsed into a single test.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Requirement {
    /// One required codepoint.
    Single(u32),
    /// A required range of codepoints, `(start, end)` inclusive.
    Range(u32, u32),
}

impl Requirement {
    /// Returns the codepoints tested for this requirement, in order.
    pub fn expand(&self) -> RangeInclusive<u32> {
        match *self {
            Requirement::Single(codepoint) => codepoint..=codepoint,
            Requirement::Range(start, end) => start..=end,
        }
    }
}

/// The static definition of one orthography.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct OrthographyDef {
    /// The english name of the orthography.
    pub name: &'static str,
    /// The untranslated name of the orthography.
    pub native: &'static str,
    /// The anchor codepoint used to cheaply rule the orthography out.
    pub key: u32,
    /// Representative sample characters, empty if none are curated.
    pub sample: &'static str,
    /// The required codepoints, in evaluation order.
    pub requirements: &'static [Requirement],
}

/// A group of orthography definitions sharing a script.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct ScriptFamily {
    /// The name of the family.
    pub name: &'static str,
    /// Whether the family is skipped when the charset lacks the anchor
    /// codepoint of the family's first definition.
    pub gated: bool,
    /// The definitions of the family, in evaluation order.
    pub definitions: &'static [OrthographyDef],
}

/// The coverage of one orthography by one font.
///
/// Produced by [`detect`] only for orthographies with coverage greater
/// than zero.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct CoverageResult {
    /// The english name of the orthography.
    pub name: String,
    /// The untranslated name of the orthography.
    pub native: String,
    /// Representative sample characters, empty if none are curated.
    pub sample: String,
    /// The percentage of required codepoints present in the charset, in `[0, 100]`.
    pub coverage: f64,
    /// Every codepoint that was tested, hit or miss, in evaluation order.
    pub filter: Vec<u32>,
}

/// The outcome of evaluating one font against the reference database.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct OrthographyResults {
    entries: BTreeMap<String, CoverageResult>,
    sample: Option<String>,
}

impl OrthographyResults {
    /// The detected orthographies, keyed by name.
    pub fn entries(&self) -> &BTreeMap<String, CoverageResult> {
        &self.entries
    }

    /// The preview sample for the font.
    ///
    /// `None` means no custom sample is needed: either the font already
    /// renders the locale sample string, or the charset was absent or empty.
    pub fn sample(&self) -> Option<&str> {
        self.sample.as_deref()
    }

    /// Returns the best-covered orthography, if any were detected.
    pub fn default_orthography(&self) -> Option<&CoverageResult> {
        select_default(&self.entries)
    }
}

impl Serialize for OrthographyResults {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len() + 1))?;
        for (name, result) in &self.entries {
            map.serialize_entry(name, result)?;
        }
        map.serialize_entry(SAMPLE_KEY, &self.sample)?;
        map.end()
    }
}

/// Evaluates a charset against every known orthography.
///
/// An absent charset, or a charset without graphic codepoints, produces a
/// result with no entries and no sample.
/// A charset that matches no orthography definition produces a single
/// synthetic [`UNCATEGORIZED`] entry covering the entire charset.
///
/// # Example
///
/// ```
/// # use scripta::ctx::Context;
/// # use scripta::orthography::detect;
/// let ctx = Context::default();
/// let results = detect(None, &ctx);
/// assert!(results.entries().is_empty());
/// assert_eq!(results.sample(), None);
/// ```
pub fn detect(charset: Option<&Charset>, ctx: &Context) -> OrthographyResults {
    match charset {
        Some(charset) => detect_charset(charset, ctx),
        None => OrthographyResults::default(),
    }
}

fn detect_charset(charset: &Charset, ctx: &Context) -> OrthographyResults {
    let graphic = charset.graphic_codepoints();

    if graphic.is_empty() {
        log::trace!("charset has no graphic codepoints, nothing to evaluate");
        return OrthographyResults::default();
    }

    let mut entries = BTreeMap::new();

    for family in data::FAMILIES.iter() {
        if !family_is_relevant(charset, family) {
            log::trace!("skipping {} orthographies ...", family.name);
            continue;
        }

        log::trace!("evaluating {} orthographies ...", family.name);

        for def in family.definitions {
            let evaluation = evaluate(charset, def, true);

            if evaluation.coverage > 0.0 {
                let result = CoverageResult {
                    name: def.name.to_string(),
                    native: def.native.to_string(),
                    sample: def.sample.to_string(),
                    coverage: evaluation.coverage,
                    filter: evaluation.filter.unwrap_or_default(),
                };
                entries.insert(def.name.to_string(), result);
            }
        }
    }

    if entries.is_empty() {
        log::trace!("no orthography matched, falling back to {}", UNCATEGORIZED);
        let uncategorized = CoverageResult {
            name: UNCATEGORIZED.to_string(),
            native: UNCATEGORIZED.to_string(),
            sample: String::new(),
            coverage: 100.0,
            filter: graphic,
        };
        entries.insert(UNCATEGORIZED.to_string(), uncategorized);
    }

    let sample = select_sample(&entries, charset, ctx);

    OrthographyResults { entries, sample }
}

/// Returns a preview sample string for the given charset.
///
/// Returns `None` if the font supports rendering the sample string of the
/// system locale and no custom sample is needed.
/// Otherwise the sample string of the best-covered orthography is returned,
/// falling back to a string randomly generated from the characters available
/// in the font.
pub fn sample_string(charset: &Charset, ctx: &Context) -> Option<String> {
    detect(Some(charset), ctx).sample
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_ctx() -> Context {
        // pin the locale sample so tests are independent of the environment
        let mut ctx = Context::new();
        ctx.locale_sample = Some(data::GENERIC_PANGRAM.to_string());
        ctx
    }

    fn basic_latin_charset() -> Charset {
        (0x41..=0x5A).chain(0x61..=0x7A).collect()
    }

    #[test]
    fn test_absent_charset() {
        let results = detect(None, &test_ctx());
        assert!(results.entries().is_empty());
        assert_eq!(results.sample(), None);
    }

    #[test]
    fn test_empty_charset() {
        let charset = Charset::new();
        let results = detect(Some(&charset), &test_ctx());
        assert!(results.entries().is_empty());
        assert_eq!(results.sample(), None);
    }

    #[test]
    fn test_charset_without_graphic_codepoints() {
        let charset: Charset = vec![0x00, 0x0A, 0x20].into_iter().collect();
        let results = detect(Some(&charset), &test_ctx());
        assert!(results.entries().is_empty());
        assert_eq!(results.sample(), None);
    }

    #[test]
    fn test_basic_latin_detection() {
        let charset = basic_latin_charset();
        let results = detect(Some(&charset), &test_ctx());

        let latin = &results.entries()["Basic Latin"];
        assert_eq!(latin.coverage, 100.0);
        assert_eq!(latin.filter.len(), 52);
        assert_eq!(latin.native, "Basic Latin");

        // the anchor codepoints of the other Latin orthographies are absent
        assert!(!results.entries().contains_key("Catalan"));
        assert!(!results.entries().contains_key("Western European"));
        assert!(!results.entries().contains_key("Basic Greek"));

        // A-Z/a-z misses the spaces of the locale pangram, so the sample of
        // the best-covered orthography is used
        assert_eq!(results.sample(), Some("AaBbCcGgQqRrSsZz"));
    }

    #[test]
    fn test_locale_sample_short_circuit() {
        let charset = Charset::from_text(data::GENERIC_PANGRAM);
        let results = detect(Some(&charset), &test_ctx());
        assert!(!results.entries().is_empty());
        assert_eq!(results.sample(), None);
    }

    #[test]
    fn test_uncategorized_fallback() {
        // dingbats matching no orthography anchor
        let charset: Charset = vec![0x2713, 0x2665, 0x263A].into_iter().collect();
        let results = detect(Some(&charset), &test_ctx());

        assert_eq!(results.entries().len(), 1);
        let uncategorized = &results.entries()[UNCATEGORIZED];
        assert_eq!(uncategorized.coverage, 100.0);
        assert_eq!(uncategorized.filter, [0x263A, 0x2665, 0x2713]);

        // no curated sample applies, so one is drawn from the charset
        let sample = results.sample().unwrap();
        assert_eq!(sample.chars().count(), 24);
        assert!(sample.chars().all(|ch| charset.has(ch as u32)));
    }

    #[test]
    fn test_greek_charset_detection() {
        let charset: Charset = (0x386..=0x3CE).collect();
        let results = detect(Some(&charset), &test_ctx());
        assert_eq!(results.entries()["Basic Greek"].coverage, 100.0);
        assert!(!results.entries().contains_key("Basic Latin"));
    }

    #[test]
    fn test_default_orthography_accessor() {
        let charset = basic_latin_charset();
        let results = detect(Some(&charset), &test_ctx());
        let default = results.default_orthography().unwrap();
        assert_eq!(default.name, "Basic Latin");
    }

    #[test]
    fn test_sample_string_for_supported_locale() {
        let charset = Charset::from_text(data::GENERIC_PANGRAM);
        assert_eq!(sample_string(&charset, &test_ctx()), None);
    }

    #[test]
    fn test_sample_string_for_unsupported_locale() {
        let charset = basic_latin_charset();
        let sample = sample_string(&charset, &test_ctx());
        assert_eq!(sample.as_deref(), Some("AaBbCcGgQqRrSsZz"));
    }

    #[test]
    fn test_serialized_shape_of_degenerate_results() {
        let results = detect(None, &test_ctx());
        let value = serde_json::to_value(&results).unwrap();
        assert_eq!(value, serde_json::json!({ "sample": null }));
    }

    #[test]
    fn test_serialized_shape_of_entries() {
        let charset = basic_latin_charset();
        let results = detect(Some(&charset), &test_ctx());
        let value = serde_json::to_value(&results).unwrap();

        let latin = &value["Basic Latin"];
        assert_eq!(latin["name"], "Basic Latin");
        assert_eq!(latin["native"], "Basic Latin");
        assert_eq!(latin["sample"], "AaBbCcGgQqRrSsZz");
        assert_eq!(latin["coverage"], 100.0);
        assert_eq!(latin["filter"][0], 0x41);
        assert_eq!(value["sample"], "AaBbCcGgQqRrSsZz");
    }

    #[test]
    fn test_requirement_expansion() {
        assert_eq!(
            Requirement::Single(0x41).expand().collect::<Vec<u32>>(),
            [0x41]
        );
        assert_eq!(
            Requirement::Range(0x41, 0x44).expand().collect::<Vec<u32>>(),
            [0x41, 0x42, 0x43, 0x44]
        );
    }
}
