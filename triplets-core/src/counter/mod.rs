//! Bucketed top-3 triplet counting.
//!
//! Candidates are split into buckets so exact counting only ever holds one
//! bucket's distinct triplets at a time. A running global threshold (the
//! count of the current 3rd place) lets later buckets be skipped or
//! pre-filtered.
//!
//! Pipeline:
//! - **partition**: by byte length or by content hash
//! - **prefilter**: collision-count estimate drops candidates that cannot beat the threshold
//! - **exact**: hash-map count of the survivors, top three per bucket
//! - **driver**: largest bucket first, merging each bucket into the global top three
//!
//! Threading:
//! - [`TripletCounter`] owns reusable scratch buffers and takes `&mut self`.
//!   Use one counter per thread.

mod driver;
pub mod exact;
pub mod partition;
pub mod prefilter;
mod stats;
mod types;

pub use exact::{count_bucket, BucketCount};
pub use partition::{largest_first, Bucket, Partitioner};
pub use prefilter::PreFilter;
pub use stats::RunStats;
pub use types::TripletCounter;
