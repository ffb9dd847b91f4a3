//! # The Scripta Orthography Coverage Engine
//!
//! *Scripta* determines which writing systems ("orthographies") a font
//! supports, given the set of Unicode codepoints the font can render.
//!
//! For every known orthography the engine computes a coverage percentage,
//! records the codepoints that were tested, selects a single best default
//! orthography, and produces a representative sample string suitable for
//! previewing the font.
//!
//! The engine is a pure function over its inputs: reading the codepoint
//! coverage out of a font file is the concern of a font-introspection
//! library and is consumed here as a prebuilt [`Charset`](crate::charset::Charset).
//!
//! ## Usage
//!
//! ```
//! use scripta::charset::Charset;
//! use scripta::ctx::Context;
//! use scripta::orthography;
//!
//! let ctx = Context::default();
//! let charset: Charset = (0x41..=0x5A).chain(0x61..=0x7A).collect();
//! let results = orthography::detect(Some(&charset), &ctx);
//! assert!(results.entries().contains_key("Basic Latin"));
//! ```

#![deny(missing_docs, missing_debug_implementations)]

pub mod charset;
pub mod ctx;
pub mod orthography;
pub mod unicode;
