//! Top-3 word-triplet counting.
//!
//! Finds the three most frequent runs of three consecutive words in a text
//! buffer. Case is folded and every run of non-alphanumeric bytes counts as a
//! single word break.
//!
//! ```text
//! raw bytes -> sanitize -> extract triplets -> partition -> prefilter -> count -> top 3
//! ```
//!
//! # Example
//!
//! ```
//! use triplets_core::top_triplets;
//!
//! let top = top_triplets(b"Hello!!! World... Hello!!! World");
//! assert_eq!(top.counts(), [1, 1, 0]);
//! assert_eq!(top.to_string().lines().count(), 3);
//! ```

pub mod analyzer;
pub mod counter;

pub use counter::{RunStats, TripletCounter};
pub use triplets_types::{
    CounterConfig, PartitionStrategy, TopK, TopTriplets, TripletRecord, DEFAULT_HASH_BITS,
};

/// Counts the top three triplets of `raw` with the default configuration.
///
/// Copies `raw` once; use [`TripletCounter::count`] to sanitize a buffer you
/// own in place.
pub fn top_triplets(raw: &[u8]) -> TopTriplets {
    let mut buf = raw.to_vec();
    TripletCounter::new().count(&mut buf)
}
