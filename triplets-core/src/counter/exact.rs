//! Exact per-bucket counting.

use rustc_hash::FxHashMap;
use triplets_types::{TopK, TopTriplets, TripletRecord};

/// Result of exactly counting one bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketCount {
    /// The bucket's three highest-count triplets.
    pub top: TopTriplets,
    /// Number of distinct triplets seen in the bucket.
    pub distinct: usize,
}

/// Counts `candidates` exactly and returns the bucket's top three.
///
/// Keys borrow the sanitized buffer; only the three winners are copied into
/// owned [`TripletRecord`]s. Among equal counts the entry visited last in map
/// order ranks highest, which is not stable across runs.
pub fn count_bucket(candidates: &[&[u8]]) -> BucketCount {
    let mut counts: FxHashMap<&[u8], u32> =
        FxHashMap::with_capacity_and_hasher(candidates.len(), Default::default());

    for &candidate in candidates {
        *counts.entry(candidate).or_insert(0) += 1;
    }

    let mut local: TopK<(&[u8], u32), 3> = TopK::new();
    for (&text, &count) in &counts {
        local.offer((text, count));
    }

    BucketCount {
        top: local.map(|(text, count)| {
            TripletRecord::new(String::from_utf8_lossy(text), count)
        }),
        distinct: counts.len(),
    }
}
