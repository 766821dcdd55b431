//! Run statistics.

use crate::counter::types::TripletCounter;

/// A snapshot of what the last counting run did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Bytes handed to the pipeline before sanitization.
    pub raw_bytes: usize,
    /// Bytes left after sanitization.
    pub sanitized_bytes: usize,
    /// Words in the sanitized buffer.
    pub words: usize,
    /// Triplet candidates extracted.
    pub candidates: usize,
    /// Buckets the partitioner produced, including empty ones.
    pub buckets: usize,
    /// Buckets that went through exact counting.
    pub buckets_counted: usize,
    /// Non-empty buckets skipped because they were too small to beat the threshold.
    pub buckets_skipped: usize,
    /// Candidates removed by the pre-filter.
    pub pruned: usize,
    /// Distinct triplets inserted into exact counters.
    pub distinct_counted: usize,
}

impl TripletCounter {
    /// Returns statistics for the most recent run.
    #[inline(always)]
    #[must_use]
    pub fn stats(&self) -> RunStats {
        self.stats
    }
}

impl RunStats {
    /// Fraction of candidates that never reached exact counting (0.0-1.0).
    pub fn pruned_ratio(&self) -> f32 {
        if self.candidates == 0 {
            return 0.0;
        }
        self.pruned as f32 / self.candidates as f32
    }
}

impl core::fmt::Display for RunStats {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} bytes -> {} sanitized, {} words, {} triplets, {}/{} buckets counted ({} skipped), {} pruned ({:.1}%), {} distinct",
            self.raw_bytes,
            self.sanitized_bytes,
            self.words,
            self.candidates,
            self.buckets_counted,
            self.buckets,
            self.buckets_skipped,
            self.pruned,
            self.pruned_ratio() * 100.0,
            self.distinct_counted
        )
    }
}
