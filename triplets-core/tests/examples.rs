use rstest::rstest;
use triplets_core::analyzer::Sanitizer;
use triplets_core::{top_triplets, CounterConfig, TripletCounter, TripletRecord};

#[rstest]
#[case(b"the cat sat on the mat the cat sat", "the cat sat on the mat the cat sat")]
#[case(b"Hello!!! World... Hello!!! World", "hello world hello world")]
#[case(b"ABC def", "abc def")]
#[case(b"abc DEF", "abc def")]
#[case(b"  ...leading and trailing...  ", "leading and trailing")]
#[case(b"caf\xc3\xa9 au lait", "caf au lait")]
#[case(b"", "")]
fn sanitizes(#[case] raw: &[u8], #[case] expected: &str) {
    assert_eq!(Sanitizer.sanitized(raw), expected.as_bytes());
}

#[rstest]
#[case(CounterConfig::by_hash())]
#[case(CounterConfig::by_length())]
#[case(CounterConfig { prefilter: false, ..CounterConfig::by_hash() })]
#[case(CounterConfig { hash_bits: 1, ..CounterConfig::by_hash() })]
fn cat_sat_on_the_mat(#[case] config: CounterConfig) {
    let mut buf = b"the cat sat on the mat the cat sat".to_vec();
    let top = TripletCounter::with_config(config).count(&mut buf);

    assert_eq!(top.get(0), Some(&TripletRecord::new("the cat sat", 2)));
    assert_eq!(top.counts(), [2, 1, 1]);

    let others = ["cat sat on", "sat on the", "on the mat", "the mat the", "mat the cat"];
    for record in top.iter().skip(1) {
        assert!(others.contains(&record.text.as_str()), "{}", record);
    }
}

#[rstest]
#[case(b"")]
#[case(b"...!!!   ")]
#[case(b"one")]
#[case(b"one two")]
fn no_triplets_prints_placeholders(#[case] raw: &[u8]) {
    let top = top_triplets(raw);
    assert_eq!(top.counts(), [0, 0, 0]);
    assert_eq!(top.to_string(), " - 0\n - 0\n - 0\n");
}

#[rstest]
#[case(b"Hello!!! World... Hello!!! World")]
#[case(b"hello world hello world\n")]
fn two_distinct_triplets(#[case] raw: &[u8]) {
    let top = top_triplets(raw);
    assert_eq!(top.counts(), [1, 1, 0]);

    let rendered = top.to_string();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines.contains(&"hello world hello - 1"));
    assert!(lines.contains(&"world hello world - 1"));
    assert_eq!(lines[2], " - 0");
}

#[rstest]
#[case(b"a b c a b c a b c", [3, 2, 2])]
#[case(b"x y z", [1, 0, 0])]
#[case(b"1 2 3 1 2 3 4", [2, 1, 1])]
fn ranks_by_count(#[case] raw: &[u8], #[case] expected: [u32; 3]) {
    assert_eq!(top_triplets(raw).counts(), expected);
}
