//! Default-orthography and sample-string selection.

use super::data::GENERIC_PANGRAM;
use super::{random_sample, CoverageResult};
use crate::charset::Charset;
use crate::ctx::Context;
use itertools::Itertools;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// The coverage an orthography must exceed before its curated sample is
/// considered representative of the font.
const SAMPLE_COVERAGE_THRESHOLD: f64 = 90.0;

fn compare_results(a: &CoverageResult, b: &CoverageResult) -> Ordering {
    a.coverage
        .total_cmp(&b.coverage)
        .then(a.filter.len().cmp(&b.filter.len()))
}

/// Returns the best-covered orthography of a result map.
///
/// Results are ordered by coverage first and by the size of the tested
/// codepoint set second; the maximum under this ordering wins, so ties on
/// coverage resolve toward the orthography that tested more codepoints.
///
/// Returns `None` if the map is empty.
pub fn select_default(
    entries: &BTreeMap<String, CoverageResult>,
) -> Option<&CoverageResult> {
    entries
        .values()
        .sorted_by(|a, b| compare_results(a, b))
        .last()
}

/// Decides the preview sample for a charset, given the assembled result map.
///
/// The decision is linear:
///
/// 1. The charset renders every codepoint of the locale sample string —
///    no custom sample is needed, `None` is returned.
/// 2. The best-covered orthography exceeds 90% coverage and carries a
///    curated sample — that sample is returned.
/// 3. A `"Basic Latin"` entry exceeds 90% coverage — the generic Latin
///    pangram is returned.
/// 4. Otherwise a string is drawn at random from the charset itself.
///
/// Curated samples are preferred over the generic pangram, which is
/// preferred over random sampling.
pub fn select_sample(
    entries: &BTreeMap<String, CoverageResult>,
    charset: &Charset,
    ctx: &Context,
) -> Option<String> {
    if charset.has_text(ctx.locale_sample()) {
        return None;
    }

    if let Some(default) = select_default(entries) {
        if default.coverage > SAMPLE_COVERAGE_THRESHOLD && !default.sample.is_empty() {
            return Some(default.sample.clone());
        }
    }

    if let Some(latin) = entries.get("Basic Latin") {
        if latin.coverage > SAMPLE_COVERAGE_THRESHOLD {
            return Some(GENERIC_PANGRAM.to_string());
        }
    }

    Some(random_sample(charset, ctx))
}
