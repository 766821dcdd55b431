//! Counter state and constructors.

use triplets_types::CounterConfig;

use crate::analyzer::Sanitizer;
use crate::counter::prefilter::PreFilter;
use crate::counter::stats::RunStats;

/// Top-3 word-triplet counter.
///
/// Owns the configuration and the scratch state reused between buckets and
/// between runs. One instance processes one buffer at a time; create several
/// to count several buffers concurrently.
///
/// # Example
///
/// ```
/// use triplets_core::TripletCounter;
///
/// let mut buf = b"The cat sat on the mat. The cat sat!".to_vec();
/// let top = TripletCounter::new().count(&mut buf);
///
/// assert_eq!(top.get(0).unwrap().text, "the cat sat");
/// assert_eq!(top.counts(), [2, 1, 1]);
/// ```
#[derive(Debug)]
pub struct TripletCounter {
    pub(crate) config: CounterConfig,
    pub(crate) sanitizer: Sanitizer,
    pub(crate) prefilter: PreFilter,
    pub(crate) stats: RunStats,
    /// Completed runs since construction.
    pub(crate) runs: u64,
}

impl Default for TripletCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl TripletCounter {
    /// Creates a counter with the default configuration.
    pub fn new() -> Self {
        Self::with_config(CounterConfig::default())
    }

    /// Creates a counter with a custom configuration.
    pub fn with_config(config: CounterConfig) -> Self {
        Self {
            config,
            sanitizer: Sanitizer,
            prefilter: PreFilter::new(),
            stats: RunStats::default(),
            runs: 0,
        }
    }

    /// The active configuration.
    #[inline(always)]
    #[must_use]
    pub fn config(&self) -> CounterConfig {
        self.config
    }

    /// Number of completed runs.
    #[inline(always)]
    #[must_use]
    pub fn runs(&self) -> u64 {
        self.runs
    }
}
