//! Coverage evaluation of a single orthography definition.

use super::{OrthographyDef, ScriptFamily};
use crate::charset::Charset;

/// The outcome of evaluating one orthography definition against a charset.
#[derive(Debug, PartialEq, Clone)]
pub struct Evaluation {
    /// The percentage of required codepoints present in the charset, in `[0, 100]`.
    pub coverage: f64,
    /// Every codepoint that was tested, hit or miss, in evaluation order.
    ///
    /// Only recorded when requested; `None` otherwise.
    pub filter: Option<Vec<u32>>,
}

impl Evaluation {
    fn zero() -> Self {
        Evaluation {
            coverage: 0.0,
            filter: None,
        }
    }
}

/// Evaluates the given orthography definition against a charset.
///
/// If the charset lacks the definition's anchor codepoint the coverage is
/// zero and no requirements are walked. Otherwise every requirement counts
/// as one try per codepoint, with ranges expanded inclusively; the coverage
/// is the percentage of tries found in the charset.
///
/// With `want_filter` the returned [`Evaluation`] records each tested
/// codepoint in traversal order, whether it was a hit or not.
///
/// # Example
///
/// ```
/// # use scripta::charset::Charset;
/// # use scripta::orthography::{data, evaluate};
/// let basic_latin = &data::LATIN[0];
/// let charset: Charset = (0x41..=0x5A).chain(0x61..=0x7A).collect();
/// let evaluation = evaluate(&charset, basic_latin, false);
/// assert_eq!(evaluation.coverage, 100.0);
/// ```
pub fn evaluate(charset: &Charset, def: &OrthographyDef, want_filter: bool) -> Evaluation {
    // without the anchor codepoint there is no point in going further
    if !charset.has(def.key) {
        return Evaluation::zero();
    }

    let mut hits: u32 = 0;
    let mut tries: u32 = 0;
    let mut filter = if want_filter { Some(Vec::new()) } else { None };

    for requirement in def.requirements {
        for codepoint in requirement.expand() {
            tries += 1;
            if charset.has(codepoint) {
                hits += 1;
            }
            if let Some(filter) = filter.as_mut() {
                filter.push(codepoint);
            }
        }
    }

    // guards malformed definitions with an empty requirement list
    if tries == 0 {
        log::trace!("definition {:?} has no requirements", def.name);
        return Evaluation {
            coverage: 0.0,
            filter,
        };
    }

    Evaluation {
        coverage: 100.0 * f64::from(hits) / f64::from(tries),
        filter,
    }
}

/// Returns whether a script family is worth evaluating for the given charset.
///
/// Gated families are skipped when the charset lacks the anchor codepoint of
/// the family's first definition; non-gated families are always evaluated.
pub fn family_is_relevant(charset: &Charset, family: &ScriptFamily) -> bool {
    if !family.gated {
        return true;
    }
    family
        .definitions
        .first()
        .map_or(false, |def| charset.has(def.key))
}
