//! Word-triplet extraction.
//!
//! Walks a sanitized buffer once and yields every window of three
//! consecutive words as a slice of that buffer. Nothing is copied; each
//! candidate borrows `[start_of_word1, end_of_word3)`.
//!
//! ```text
//! "the cat sat on"  ->  "the cat sat", "cat sat on"
//! ```
//!
//! For `N` words exactly `max(0, N - 2)` candidates are produced. A word ends
//! at a separator or at the end of the buffer. Empty words (only possible on
//! unsanitized input with repeated separators) are skipped.

use memchr::{memchr, memchr_iter};

use crate::analyzer::sanitizer::SEPARATOR;

/// Lazy iterator over the triplet candidates of a sanitized buffer.
///
/// One pass, not restartable. Create a new one to re-scan.
#[derive(Debug, Clone)]
pub struct TripletIter<'a> {
    buf: &'a [u8],
    pos: usize,
    /// Start offsets of the last three words, oldest first.
    starts: [usize; 3],
    /// Words seen so far, saturating at 3.
    seen: u8,
}

impl<'a> TripletIter<'a> {
    /// Starts scanning `sanitized` from the beginning.
    #[inline]
    pub fn new(sanitized: &'a [u8]) -> Self {
        Self {
            buf: sanitized,
            pos: 0,
            starts: [0; 3],
            seen: 0,
        }
    }
}

impl<'a> Iterator for TripletIter<'a> {
    type Item = &'a [u8];

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let buf = self.buf;

        while self.pos < buf.len() {
            let start = self.pos;
            let end = memchr(SEPARATOR, &buf[start..]).map_or(buf.len(), |i| start + i);
            self.pos = end + 1;

            if end == start {
                continue;
            }

            self.starts = [self.starts[1], self.starts[2], start];
            if self.seen < 3 {
                self.seen += 1;
            }
            if self.seen == 3 {
                return Some(&buf[self.starts[0]..end]);
            }
        }

        None
    }
}

impl core::iter::FusedIterator for TripletIter<'_> {}

/// Extracts triplets from `sanitized`, calling `callback` for each one.
///
/// # Example
///
/// ```
/// use triplets_core::analyzer::extractor::extract_triplets;
///
/// let mut out = Vec::new();
/// extract_triplets(b"a b c d", |t| out.push(t));
/// assert_eq!(out, [&b"a b c"[..], &b"b c d"[..]]);
/// ```
#[inline]
pub fn extract_triplets<'a, F>(sanitized: &'a [u8], mut callback: F)
where
    F: FnMut(&'a [u8]),
{
    for triplet in TripletIter::new(sanitized) {
        callback(triplet);
    }
}

/// Counts the separator-delimited, non-empty words of `sanitized`.
pub fn count_words(sanitized: &[u8]) -> usize {
    let mut words = 0usize;
    let mut start = 0usize;

    for i in memchr_iter(SEPARATOR, sanitized) {
        if i > start {
            words += 1;
        }
        start = i + 1;
    }

    if start < sanitized.len() {
        words += 1;
    }

    words
}

/// Number of triplets a buffer with `words` words yields.
#[inline(always)]
pub const fn count_triplets(words: usize) -> usize {
    words.saturating_sub(2)
}
