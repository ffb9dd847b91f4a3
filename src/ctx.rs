//! The context with which a coverage query is performed.

use crate::orthography::data::localized_pangram;

/// The number of codepoints drawn by the random charset sampler.
const DEFAULT_RANDOM_SAMPLE_LENGTH: usize = 24;

/// A context defines customization options.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Context {
    /// The sample string of the system locale.
    ///
    /// When the charset of a font covers every codepoint of this string no
    /// custom preview sample is produced for the font; the caller is expected
    /// to fall back to its regular preview text.
    ///
    /// `None` selects the built-in pangram returned by [`localized_pangram`] for the current locale.
    pub locale_sample: Option<String>,
    /// The number of codepoints drawn by [`orthography::random_sample`](crate::orthography::random_sample).
    pub random_sample_length: usize,
}

impl Context {
    /// Creates a context with the default options.
    pub fn new() -> Self {
        Context {
            locale_sample: None,
            random_sample_length: DEFAULT_RANDOM_SAMPLE_LENGTH,
        }
    }

    /// Returns the sample string of the system locale.
    ///
    /// This is either the [`locale_sample`](Context::locale_sample) override
    /// or the built-in localized pangram.
    pub fn locale_sample(&self) -> &str {
        self.locale_sample
            .as_deref()
            .unwrap_or_else(|| localized_pangram())
    }
}

impl Default for Context {
    fn default() -> Self {
        Context::new()
    }
}
