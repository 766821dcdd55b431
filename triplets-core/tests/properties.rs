use std::collections::HashMap;

use proptest::prelude::*;
use triplets_core::analyzer::{count_triplets, count_words, Sanitizer, TripletIter, SEPARATOR};
use triplets_core::counter::{Bucket, PreFilter};
use triplets_core::{CounterConfig, PartitionStrategy, TripletCounter};

// --- REFERENCE ---

/// Brute-force top-3 counts, computed without any pipeline code.
fn reference_top3(raw: &[u8]) -> ([u32; 3], HashMap<String, u32>) {
    let text = String::from_utf8_lossy(raw).to_ascii_lowercase();
    let words: Vec<&str> = text
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();

    let mut counts: HashMap<String, u32> = HashMap::new();
    for w in words.windows(3) {
        *counts.entry(w.join(" ")).or_insert(0) += 1;
    }

    let mut sorted: Vec<u32> = counts.values().copied().collect();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    sorted.resize(3.max(sorted.len()), 0);

    ([sorted[0], sorted[1], sorted[2]], counts)
}

// --- STRATEGIES ---

const VOCAB: [&str; 7] = ["the", "cat", "Sat", "on", "MAT", "a", "dog"];
const SEPARATORS: [&str; 6] = [" ", "  ", ", ", "!!! ", "\n", "\t...\r\n"];

prop_compose! {
    fn arb_text()(
        parts in proptest::collection::vec((0..VOCAB.len(), 0..SEPARATORS.len()), 0..300),
        lead in 0..SEPARATORS.len(),
    ) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(SEPARATORS[lead].as_bytes());
        for (w, s) in parts {
            out.extend_from_slice(VOCAB[w].as_bytes());
            out.extend_from_slice(SEPARATORS[s].as_bytes());
        }
        out
    }
}

prop_compose! {
    fn arb_config()(
        by_length in any::<bool>(),
        hash_bits in 1u8..=13,
        prefilter in any::<bool>(),
        skip_small_buckets in any::<bool>(),
    ) -> CounterConfig {
        CounterConfig {
            partition: if by_length { PartitionStrategy::ByLength } else { PartitionStrategy::ByHash },
            hash_bits,
            prefilter,
            skip_small_buckets,
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn sanitize_is_idempotent(raw in proptest::collection::vec(any::<u8>(), 0..512)) {
        let once = Sanitizer.sanitized(&raw);
        let twice = Sanitizer.sanitized(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn sanitized_has_single_inner_separators(raw in proptest::collection::vec(any::<u8>(), 0..512)) {
        let out = Sanitizer.sanitized(&raw);
        prop_assert!(!out.windows(2).any(|w| w[0] == SEPARATOR && w[1] == SEPARATOR));
        prop_assert_ne!(out.first(), Some(&SEPARATOR));
        prop_assert_ne!(out.last(), Some(&SEPARATOR));
        prop_assert!(out
            .iter()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || *b == SEPARATOR));
    }

    #[test]
    fn sanitize_ignores_case(raw in "[a-zA-Z0-9 .,!]{0,128}") {
        let lower = Sanitizer.sanitized(raw.to_ascii_lowercase().as_bytes());
        let upper = Sanitizer.sanitized(raw.to_ascii_uppercase().as_bytes());
        prop_assert_eq!(lower, upper);
    }

    #[test]
    fn triplet_count_is_conserved(raw in arb_text()) {
        let sanitized = Sanitizer.sanitized(&raw);
        let words = count_words(&sanitized);
        prop_assert_eq!(TripletIter::new(&sanitized).count(), count_triplets(words));
    }

    #[test]
    fn prefilter_never_drops_a_winner(raw in arb_text(), threshold in 0u32..6) {
        let sanitized = Sanitizer.sanitized(&raw);
        let candidates: Vec<&[u8]> = TripletIter::new(&sanitized).collect();

        let mut truth: HashMap<&[u8], u32> = HashMap::new();
        for &c in &candidates {
            *truth.entry(c).or_insert(0) += 1;
        }

        let mut bucket: Bucket<'_> = candidates.iter().copied().collect();
        let pruned = PreFilter::new().retain(&mut bucket, threshold);
        prop_assert_eq!(pruned + bucket.len(), candidates.len());

        for (text, &count) in &truth {
            if count > threshold {
                let kept = bucket.iter().filter(|c| *c == text).count() as u32;
                prop_assert_eq!(kept, count);
            }
        }
    }

    #[test]
    fn top3_matches_brute_force(raw in arb_text(), config in arb_config()) {
        let (expected, counts) = reference_top3(&raw);

        let mut buf = raw.clone();
        let top = TripletCounter::with_config(config).count(&mut buf);
        prop_assert_eq!(top.counts(), expected);

        for record in top.iter().filter(|r| r.count > 0) {
            prop_assert_eq!(counts.get(&record.text).copied(), Some(record.count));
        }

        let ties_for_first = counts.values().filter(|&&c| c == expected[0]).count();
        if expected[0] > 0 && ties_for_first == 1 {
            let best = counts
                .iter()
                .find(|&(_, &c)| c == expected[0])
                .map(|(t, _)| t.as_str());
            prop_assert_eq!(Some(top.get(0).unwrap().text.as_str()), best);
        }
    }

    #[test]
    fn pruning_never_changes_counts(raw in arb_text()) {
        let pruned = TripletCounter::new().count(&mut raw.clone());
        let exhaustive = TripletCounter::with_config(CounterConfig {
            prefilter: false,
            skip_small_buckets: false,
            ..CounterConfig::default()
        })
        .count(&mut raw.clone());

        prop_assert_eq!(pruned.counts(), exhaustive.counts());
    }
}
