//! Core types shared across the triplets workspace.
//!
//! This crate holds the value types that flow between the counting pipeline
//! and its callers. Keeping them separate means:
//!
//! - **No dependencies**: the types build on `core` and `std` only
//! - **Shared vocabulary**: the core pipeline and the CLI agree on one record shape
//! - **Clean boundaries**: no circular dependencies between crates

#![warn(missing_docs)]

use core::fmt;
use core::str::FromStr;

/// Default number of hash bits for by-hash partitioning (8192 buckets).
pub const DEFAULT_HASH_BITS: u8 = 13;

/// Upper bound on `hash_bits`. Beyond this the bucket table itself dominates memory.
pub const MAX_HASH_BITS: u8 = 24;

/// A word triplet together with its exact occurrence count.
///
/// The text is the normalized form: lowercase ASCII words joined by single
/// spaces. The default record (empty text, count 0) is the placeholder used
/// for unfilled ranks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TripletRecord {
    /// Normalized triplet text.
    pub text: String,
    /// Exact number of occurrences in the input.
    pub count: u32,
}

impl TripletRecord {
    /// Creates a new record.
    #[inline]
    pub fn new(text: impl Into<String>, count: u32) -> Self {
        Self {
            text: text.into(),
            count,
        }
    }

    /// Returns `true` for the empty placeholder record.
    #[inline(always)]
    pub fn is_placeholder(&self) -> bool {
        self.count == 0
    }
}

impl fmt::Display for TripletRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.text, self.count)
    }
}

/// Anything ranked by an occurrence count.
pub trait Counted {
    /// Occurrence count used for ranking.
    fn count(&self) -> u32;
}

impl Counted for TripletRecord {
    #[inline(always)]
    fn count(&self) -> u32 {
        self.count
    }
}

impl<T> Counted for (T, u32) {
    #[inline(always)]
    fn count(&self) -> u32 {
        self.1
    }
}

/// Fixed-size running top-k, highest count first.
///
/// Backed by a plain `[T; K]` kept in descending count order. Insertion is a
/// linear scan for the first slot the new item beats or ties, followed by a
/// one-slot shift of everything below it; the previous last entry falls off.
/// Ties go to the newcomer, so among equal counts the most recently offered
/// item ranks highest.
///
/// Unfilled slots hold `T::default()`, which must report a count of 0.
/// Zero-count items are never inserted, so placeholders are only ever
/// displaced by real entries.
///
/// `K` must be at least 1.
///
/// # Example
///
/// ```
/// use triplets_types::{TopTriplets, TripletRecord};
///
/// let mut top = TopTriplets::new();
/// top.offer(TripletRecord::new("a b c", 2));
/// top.offer(TripletRecord::new("b c d", 5));
///
/// assert_eq!(top.counts(), [5, 2, 0]);
/// assert_eq!(top.threshold(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopK<T, const K: usize> {
    ranks: [T; K],
}

/// The global top-3 record reported to output.
pub type TopTriplets = TopK<TripletRecord, 3>;

impl<T: Counted + Default, const K: usize> Default for TopK<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Counted + Default, const K: usize> TopK<T, K> {
    /// Creates a record with every slot set to the zero-count placeholder.
    pub fn new() -> Self {
        Self {
            ranks: core::array::from_fn(|_| T::default()),
        }
    }

    /// Offers an item, returning the rank it landed on.
    ///
    /// Returns `None` if the item has a zero count or is beaten by every
    /// current entry.
    #[inline]
    pub fn offer(&mut self, item: T) -> Option<usize> {
        let count = item.count();
        if count == 0 {
            return None;
        }

        let rank = self.ranks.iter().position(|r| count >= r.count())?;
        self.ranks[rank..].rotate_right(1);
        self.ranks[rank] = item;
        Some(rank)
    }

    /// Merges a partial record into this one.
    ///
    /// Entries of `other` are offered in rank order. When the two records
    /// cover disjoint item sets the result is the top-k of their union.
    pub fn merge(&mut self, other: TopK<T, K>) {
        for item in other.ranks {
            if self.offer(item).is_none() {
                // `other` is sorted, so nothing after this can rank either.
                break;
            }
        }
    }

    /// Count of the last-ranked entry; anything at or below it cannot change the counts.
    #[inline(always)]
    pub fn threshold(&self) -> u32 {
        self.ranks[K - 1].count()
    }

    /// Counts of all slots, highest first.
    pub fn counts(&self) -> [u32; K] {
        core::array::from_fn(|i| self.ranks[i].count())
    }

    /// Number of slots holding a real (non-zero) entry.
    pub fn filled(&self) -> usize {
        self.ranks.iter().take_while(|r| r.count() > 0).count()
    }
}

impl<T, const K: usize> TopK<T, K> {
    /// Returns the entry at `rank` (0 = highest).
    #[inline]
    pub fn get(&self, rank: usize) -> Option<&T> {
        self.ranks.get(rank)
    }

    /// Iterates slots from highest to lowest.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.ranks.iter()
    }

    /// Converts every slot, keeping the order.
    pub fn map<U, F>(self, f: F) -> TopK<U, K>
    where
        F: FnMut(T) -> U,
    {
        TopK {
            ranks: self.ranks.map(f),
        }
    }
}

impl<T, const K: usize> IntoIterator for TopK<T, K> {
    type Item = T;
    type IntoIter = core::array::IntoIter<T, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranks.into_iter()
    }
}

impl<'a, T, const K: usize> IntoIterator for &'a TopK<T, K> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranks.iter()
    }
}

/// One `<text> - <count>` line per slot, highest first.
impl<const K: usize> fmt::Display for TopK<TripletRecord, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for record in &self.ranks {
            writeln!(f, "{}", record)?;
        }
        Ok(())
    }
}

/// How candidate triplets are split into buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartitionStrategy {
    /// Bucket index is the candidate's byte length.
    ByLength,
    /// Bucket index is a content hash masked to a power-of-two bucket count.
    ByHash,
}

impl fmt::Display for PartitionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartitionStrategy::ByLength => write!(f, "length"),
            PartitionStrategy::ByHash => write!(f, "hash"),
        }
    }
}

/// Error returned when parsing an unknown partition strategy name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStrategyError {
    /// The rejected input.
    pub input: String,
}

impl fmt::Display for ParseStrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown partition strategy '{}' (expected 'length' or 'hash')",
            self.input
        )
    }
}

impl core::error::Error for ParseStrategyError {}

impl FromStr for PartitionStrategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "length" | "len" => Ok(PartitionStrategy::ByLength),
            "hash" => Ok(PartitionStrategy::ByHash),
            _ => Err(ParseStrategyError {
                input: s.to_string(),
            }),
        }
    }
}

/// Counting pipeline configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterConfig {
    /// Bucket assignment strategy.
    pub partition: PartitionStrategy,
    /// `log2` of the bucket count for [`PartitionStrategy::ByHash`].
    /// Values outside `1..=MAX_HASH_BITS` are clamped.
    pub hash_bits: u8,
    /// Run the collision-count pre-filter before exact counting.
    pub prefilter: bool,
    /// Skip a bucket outright when its candidate count does not exceed the threshold.
    pub skip_small_buckets: bool,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self::by_hash()
    }
}

impl CounterConfig {
    /// Length-partitioned counting with all pruning enabled.
    pub const fn by_length() -> Self {
        Self {
            partition: PartitionStrategy::ByLength,
            hash_bits: DEFAULT_HASH_BITS,
            prefilter: true,
            skip_small_buckets: true,
        }
    }

    /// Hash-partitioned counting (8192 buckets) with all pruning enabled.
    pub const fn by_hash() -> Self {
        Self {
            partition: PartitionStrategy::ByHash,
            hash_bits: DEFAULT_HASH_BITS,
            prefilter: true,
            skip_small_buckets: true,
        }
    }

    /// Effective hash bits after clamping.
    pub const fn effective_hash_bits(&self) -> u8 {
        if self.hash_bits == 0 {
            1
        } else if self.hash_bits > MAX_HASH_BITS {
            MAX_HASH_BITS
        } else {
            self.hash_bits
        }
    }

    /// Number of buckets used by [`PartitionStrategy::ByHash`].
    pub const fn hash_buckets(&self) -> usize {
        1usize << self.effective_hash_bits()
    }
}
