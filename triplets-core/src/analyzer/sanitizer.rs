//! Byte-level input sanitizer.
//!
//! Folds arbitrary bytes into the compact form the rest of the pipeline
//! expects: lowercase ASCII letters, ASCII digits and single separators.
//!
//! ```text
//! "Hello!!! World... Hello!!! World"  ->  "hello world hello world"
//! ```
//!
//! Everything that is not `[A-Za-z0-9]` (punctuation, whitespace, control
//! bytes, every byte of a multi-byte UTF-8 sequence) maps to [`SEPARATOR`].
//! Runs of separators collapse to the first one. Separators at the very
//! start are dropped and a single trailing one is trimmed, so the output
//! never begins or ends with a separator.

/// The one byte that delimits words after sanitization.
pub const SEPARATOR: u8 = b' ';

const fn build_fold_table() -> [u8; 256] {
    let mut table = [SEPARATOR; 256];
    let mut b = 0usize;
    while b < 256 {
        let byte = b as u8;
        if byte.is_ascii_lowercase() || byte.is_ascii_digit() {
            table[b] = byte;
        } else if byte.is_ascii_uppercase() {
            table[b] = byte + (b'a' - b'A');
        }
        b += 1;
    }
    table
}

/// Maps every byte to its lowercase alphanumeric form or to [`SEPARATOR`].
static FOLD_TABLE: [u8; 256] = build_fold_table();

/// Single-pass, in-place sanitizer.
///
/// O(n) time, no allocation for the in-place paths. There are no error
/// conditions: any byte sequence is accepted and empty input yields empty
/// output.
///
/// # Examples
///
/// ```
/// use triplets_core::analyzer::Sanitizer;
///
/// let mut buf = b"  The CAT, sat...".to_vec();
/// Sanitizer.sanitize(&mut buf);
/// assert_eq!(buf, b"the cat sat");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Sanitizer;

impl Sanitizer {
    /// Sanitizes `buf` in place and returns the length of the valid prefix.
    ///
    /// Bytes past the returned length are left in an unspecified state.
    #[inline]
    pub fn sanitize_in_place(&self, buf: &mut [u8]) -> usize {
        let mut wrote = 0usize;
        // Starts set so leading separators are dropped.
        let mut prev_sep = true;

        for read in 0..buf.len() {
            let b = FOLD_TABLE[buf[read] as usize];
            if b == SEPARATOR {
                if !prev_sep {
                    buf[wrote] = SEPARATOR;
                    wrote += 1;
                    prev_sep = true;
                }
            } else {
                buf[wrote] = b;
                wrote += 1;
                prev_sep = false;
            }
        }

        if prev_sep && wrote > 0 {
            wrote -= 1;
        }

        wrote
    }

    /// Sanitizes a vector in place, truncating it to the sanitized length.
    #[inline]
    pub fn sanitize(&self, buf: &mut Vec<u8>) {
        let len = self.sanitize_in_place(buf);
        buf.truncate(len);
    }

    /// Sanitizes `input` into an existing buffer.
    ///
    /// Clears `out` first and reuses its capacity when sufficient.
    pub fn sanitize_into(&self, input: &[u8], out: &mut Vec<u8>) {
        out.clear();
        out.extend_from_slice(input);
        self.sanitize(out);
    }

    /// Sanitizes `input` and returns a new buffer.
    pub fn sanitized(&self, input: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(input.len());
        self.sanitize_into(input, &mut out);
        out
    }
}
