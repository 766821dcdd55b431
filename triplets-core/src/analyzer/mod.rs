//! Text analysis stages.
//!
//! - **Sanitizer**: folds raw bytes into lowercase words and single separators
//! - **Extractor**: yields every run of three consecutive words as a borrowed slice

pub mod extractor;
pub mod sanitizer;

pub use extractor::{count_triplets, count_words, extract_triplets, TripletIter};
pub use sanitizer::{Sanitizer, SEPARATOR};
