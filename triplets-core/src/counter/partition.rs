//! Candidate partitioning.
//!
//! Splits the candidate stream into buckets that are counted independently.
//! Every occurrence of a given triplet lands in the same bucket, so a
//! bucket-local count is the global count.

use core::hash::Hasher;

use rustc_hash::{FxHashMap, FxHasher};
use smallvec::SmallVec;
use triplets_types::{PartitionStrategy, MAX_HASH_BITS};

/// A bucket of candidate triplets, each a slice of the sanitized buffer.
///
/// Most hash buckets of small inputs hold a handful of candidates, so the
/// first few live inline.
pub type Bucket<'a> = SmallVec<[&'a [u8]; 4]>;

/// Assigns candidates to buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partitioner {
    strategy: PartitionStrategy,
    buckets: usize,
}

impl Partitioner {
    /// Length partitioning for candidates of at most `max_len` bytes.
    ///
    /// Candidates are grouped by exact byte length. Only lengths that occur
    /// get a bucket, so one very long token costs one bucket, not one per byte.
    pub const fn by_length(max_len: usize) -> Self {
        Self {
            strategy: PartitionStrategy::ByLength,
            buckets: max_len + 1,
        }
    }

    /// Hash partitioning into `2^bits` buckets (`bits` clamped to `1..=MAX_HASH_BITS`).
    pub fn by_hash(bits: u8) -> Self {
        let bits = bits.clamp(1, MAX_HASH_BITS);
        Self {
            strategy: PartitionStrategy::ByHash,
            buckets: 1usize << bits,
        }
    }

    /// The strategy in use.
    #[inline(always)]
    pub const fn strategy(&self) -> PartitionStrategy {
        self.strategy
    }

    /// Number of distinct bucket keys.
    ///
    /// For length partitioning this is the length bound plus one, an upper
    /// limit on the buckets [`partition`](Self::partition) returns.
    #[inline(always)]
    pub const fn bucket_count(&self) -> usize {
        self.buckets
    }

    /// Bucket key of `candidate`. Deterministic for identical bytes.
    ///
    /// # Panics
    ///
    /// With length partitioning, panics if `candidate` is longer than the
    /// bound the partitioner was built for. That is a sizing bug in the
    /// caller, not bad input.
    #[inline]
    pub fn bucket_of(&self, candidate: &[u8]) -> usize {
        match self.strategy {
            PartitionStrategy::ByLength => {
                let len = candidate.len();
                assert!(
                    len < self.buckets,
                    "partition: {}-byte candidate exceeds length bound {}",
                    len,
                    self.buckets - 1
                );
                len
            }
            PartitionStrategy::ByHash => fold(content_hash(candidate)) & (self.buckets - 1),
        }
    }

    /// Distributes `candidates` into buckets.
    ///
    /// Hash partitioning returns all `bucket_count()` buckets, indexed by key.
    /// Length partitioning returns one bucket per occurring length, shortest
    /// first.
    pub fn partition<'a, I>(&self, candidates: I) -> Vec<Bucket<'a>>
    where
        I: IntoIterator<Item = &'a [u8]>,
    {
        match self.strategy {
            PartitionStrategy::ByLength => {
                let mut by_len: FxHashMap<usize, Bucket<'a>> = FxHashMap::default();
                for candidate in candidates {
                    by_len
                        .entry(self.bucket_of(candidate))
                        .or_default()
                        .push(candidate);
                }

                let mut occupied: Vec<(usize, Bucket<'a>)> = by_len.into_iter().collect();
                occupied.sort_unstable_by_key(|(len, _)| *len);
                occupied.into_iter().map(|(_, bucket)| bucket).collect()
            }
            PartitionStrategy::ByHash => {
                let mut buckets: Vec<Bucket<'a>> = vec![Bucket::new(); self.buckets];
                for candidate in candidates {
                    buckets[self.bucket_of(candidate)].push(candidate);
                }
                buckets
            }
        }
    }
}

#[inline(always)]
fn content_hash(bytes: &[u8]) -> u64 {
    let mut hasher = FxHasher::default();
    hasher.write(bytes);
    hasher.finish()
}

/// Folds the high half into the low half.
///
/// On 32-bit targets the hasher is 32 bits wide and the high half is zero,
/// so this degrades to the plain hash instead of a constant.
#[inline(always)]
fn fold(hash: u64) -> usize {
    (hash ^ (hash >> 32)) as usize
}

/// Bucket indices ordered by candidate count, largest first.
///
/// Ties keep index order, so the order is deterministic for a given input.
pub fn largest_first(buckets: &[Bucket<'_>]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..buckets.len()).collect();
    order.sort_by(|&a, &b| buckets[b].len().cmp(&buckets[a].len()));
    order
}
