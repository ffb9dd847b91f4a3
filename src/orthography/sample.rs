//! Random preview-text generation from a charset.

use crate::charset::Charset;
use crate::ctx::Context;
use rand::Rng;

/// Returns a string drawn at random from the graphic codepoints of a charset.
///
/// The string consists of [`random_sample_length`](crate::ctx::Context::random_sample_length)
/// independent, uniform draws with replacement, concatenated in draw order.
/// A charset without graphic codepoints yields the empty string.
///
/// Consecutive calls may return different strings; callers must not rely on
/// the output being reproducible, only on every codepoint being a renderable
/// member of the charset.
pub fn random_sample(charset: &Charset, ctx: &Context) -> String {
    let codepoints = charset.graphic_codepoints();
    let mut result = String::new();

    if codepoints.is_empty() {
        return result;
    }

    let mut rng = rand::thread_rng();

    for _ in 0..ctx.random_sample_length {
        let index = rng.gen_range(0..codepoints.len());
        // graphic codepoints are always valid scalar values
        if let Some(ch) = core::char::from_u32(codepoints[index]) {
            result.push(ch);
        }
    }

    result
}
