//! Pipeline driver.
//!
//! Runs sanitize -> extract -> partition, then walks the buckets largest
//! first. Each bucket is pre-filtered against the current threshold,
//! counted exactly, and merged into the running top three; the merge raises
//! the threshold the next bucket is filtered with.
//!
//! Bucket order only affects how much work pruning saves. The reported
//! counts are the same for any order.

use tracing::{debug, info, trace};
use triplets_types::{PartitionStrategy, TopTriplets};

use crate::analyzer::{count_words, TripletIter};
use crate::counter::exact::count_bucket;
use crate::counter::partition::{largest_first, Bucket, Partitioner};
use crate::counter::stats::RunStats;
use crate::counter::types::TripletCounter;

impl TripletCounter {
    /// Sanitizes `buf` in place and returns its top three triplets.
    ///
    /// `buf` is truncated to the sanitized text.
    pub fn count(&mut self, buf: &mut Vec<u8>) -> TopTriplets {
        let raw_bytes = buf.len();
        self.sanitizer.sanitize(buf);

        let top = self.count_sanitized(buf);
        self.stats.raw_bytes = raw_bytes;
        top
    }

    /// Returns the top three triplets of an already sanitized buffer.
    pub fn count_sanitized(&mut self, sanitized: &[u8]) -> TopTriplets {
        let mut stats = RunStats {
            raw_bytes: sanitized.len(),
            sanitized_bytes: sanitized.len(),
            ..RunStats::default()
        };

        let (partitioner, mut buckets) = self.partition(sanitized);
        stats.buckets = buckets.len();
        stats.candidates = buckets.iter().map(|b| b.len()).sum();
        stats.words = if stats.candidates > 0 {
            stats.candidates + 2
        } else {
            count_words(sanitized)
        };

        debug!(
            strategy = %partitioner.strategy(),
            buckets = stats.buckets,
            candidates = stats.candidates,
            "partitioned candidates"
        );

        let top = self.count_buckets(&mut buckets, &mut stats);

        info!(%stats, "triplet count finished");
        self.stats = stats;
        self.runs += 1;
        top
    }

    fn partition<'a>(&self, sanitized: &'a [u8]) -> (Partitioner, Vec<Bucket<'a>>) {
        match self.config.partition {
            PartitionStrategy::ByLength => {
                // Bound taken from the data so the length assert cannot fire.
                let candidates: Vec<&'a [u8]> = TripletIter::new(sanitized).collect();
                let max_len = candidates.iter().map(|c| c.len()).max().unwrap_or(0);
                let partitioner = Partitioner::by_length(max_len);
                (partitioner, partitioner.partition(candidates))
            }
            PartitionStrategy::ByHash => {
                let partitioner = Partitioner::by_hash(self.config.effective_hash_bits());
                (partitioner, partitioner.partition(TripletIter::new(sanitized)))
            }
        }
    }

    fn count_buckets(
        &mut self,
        buckets: &mut [Bucket<'_>],
        stats: &mut RunStats,
    ) -> TopTriplets {
        let mut top = TopTriplets::new();
        let order = largest_first(buckets);

        for (position, &index) in order.iter().enumerate() {
            let bucket = &mut buckets[index];
            if bucket.is_empty() {
                break;
            }

            let threshold = top.threshold();

            // Sorted largest first: once one bucket is too small, all the rest are.
            if self.config.skip_small_buckets && bucket.len() <= threshold as usize {
                stats.buckets_skipped = order[position..]
                    .iter()
                    .take_while(|&&i| !buckets[i].is_empty())
                    .count();
                trace!(
                    remaining = stats.buckets_skipped,
                    threshold,
                    "remaining buckets cannot beat threshold"
                );
                break;
            }

            let before = bucket.len();
            if self.config.prefilter && threshold > 0 {
                stats.pruned += self.prefilter.retain(bucket, threshold);
            }
            if bucket.is_empty() {
                trace!(bucket = index, candidates = before, threshold, "bucket fully pruned");
                continue;
            }

            let counted = count_bucket(bucket);
            stats.buckets_counted += 1;
            stats.distinct_counted += counted.distinct;

            debug!(
                bucket = index,
                candidates = before,
                kept = bucket.len(),
                distinct = counted.distinct,
                threshold,
                best = counted.top.threshold(),
                "bucket counted"
            );

            top.merge(counted.top);
        }

        top
    }
}
