//! The codepoint coverage of a font.

use crate::unicode::is_graphic;
use std::collections::BTreeSet;
use std::iter::FromIterator;

/// The set of Unicode codepoints a font can render.
///
/// A charset is produced by font introspection and is not mutated during a
/// coverage query; the engine only tests membership and iterates the set.
///
/// A `BTreeSet` is used since results are reported in ascending codepoint
/// order.
///
/// # Example
///
/// ```
/// # use scripta::charset::Charset;
/// let charset: Charset = "Hamburgefonstiv".chars().collect();
/// assert!(charset.has('H' as u32));
/// assert!(!charset.has('Q' as u32));
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct Charset(BTreeSet<u32>);

impl Charset {
    /// Creates an empty charset.
    pub fn new() -> Self {
        Charset(BTreeSet::new())
    }

    /// Creates a charset containing every codepoint of the given text.
    pub fn from_text(text: &str) -> Self {
        text.chars().collect()
    }

    /// Returns whether the charset contains the given codepoint.
    pub fn has(&self, codepoint: u32) -> bool {
        self.0.contains(&codepoint)
    }

    /// Returns whether the charset contains every codepoint of `text`.
    pub fn has_text(&self, text: &str) -> bool {
        text.chars().all(|ch| self.has(ch as u32))
    }

    /// Adds a codepoint to the charset.
    pub fn insert(&mut self, codepoint: u32) {
        self.0.insert(codepoint);
    }

    /// Returns the number of codepoints in the charset.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the charset contains no codepoints.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the codepoints in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied()
    }

    /// Returns the graphic codepoints of the charset in ascending order.
    ///
    /// Codepoints that fail [`is_graphic`](crate::unicode::is_graphic) are of
    /// no use for coverage reporting or previews and are dropped.
    pub fn graphic_codepoints(&self) -> Vec<u32> {
        self.iter().filter(|&x| is_graphic(x)).collect()
    }
}

impl FromIterator<u32> for Charset {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Charset(iter.into_iter().collect())
    }
}

impl FromIterator<char> for Charset {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Charset(iter.into_iter().map(|ch| ch as u32).collect())
    }
}

impl Extend<u32> for Charset {
    fn extend<I: IntoIterator<Item = u32>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership() {
        let charset: Charset = vec![0x41, 0x42, 0x43].into_iter().collect();
        assert!(charset.has(0x41));
        assert!(!charset.has(0x44));
        assert_eq!(charset.len(), 3);
    }

    #[test]
    fn test_from_text() {
        let charset = Charset::from_text("abc");
        assert!(charset.has('a' as u32));
        assert!(charset.has('b' as u32));
        assert!(charset.has('c' as u32));
        assert_eq!(charset.len(), 3);
    }

    #[test]
    fn test_has_text() {
        let charset = Charset::from_text("The quickbrownfxjmpsvlazydg.");
        assert!(charset.has_text("The quick brown fox"));
        assert!(!charset.has_text("Zebra"));
        assert!(charset.has_text(""));
    }

    #[test]
    fn test_iteration_order_is_ascending() {
        let charset: Charset = vec![0x5A, 0x41, 0x4D].into_iter().collect();
        let codepoints: Vec<u32> = charset.iter().collect();
        assert_eq!(codepoints, [0x41, 0x4D, 0x5A]);
    }

    #[test]
    fn test_duplicates_are_collapsed() {
        let charset: Charset = "aaab".chars().collect();
        assert_eq!(charset.len(), 2);
    }

    #[test]
    fn test_graphic_codepoints_filters_non_graphic() {
        // control, space, and letter codepoints
        let charset: Charset = vec![0x00, 0x0A, 0x20, 0x41, 0x62].into_iter().collect();
        assert_eq!(charset.graphic_codepoints(), [0x41, 0x62]);
    }

    #[test]
    fn test_empty_charset() {
        let charset = Charset::new();
        assert!(charset.is_empty());
        assert_eq!(charset.graphic_codepoints(), Vec::<u32>::new());
    }

    #[test]
    fn test_insert_and_extend() {
        let mut charset = Charset::new();
        charset.insert(0x41);
        charset.extend(0x61..=0x63);
        assert_eq!(charset.len(), 4);
        assert!(charset.has(0x62));
    }
}
