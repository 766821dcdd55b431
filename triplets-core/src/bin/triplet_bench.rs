//! Triplet counting benchmark.
//!
//! Measures each stage of the counting pipeline on a large text file such as
//! a Wikipedia abstracts dump, and reports throughput.
//!
//! ## Stages
//!
//! 1. **Sanitize**: case folding and separator collapse, in place
//! 2. **Extract**: walking a sanitized buffer for triplet candidates
//! 3. **Pipeline**: sanitize + partition + prefilter + exact count
//!
//! ## Usage
//!
//! ```bash
//! # All stages, hash partitioning
//! ./target/release/triplet_bench /path/to/wiki.txt
//!
//! # Length partitioning
//! ./target/release/triplet_bench /path/to/wiki.txt length
//! ```
//!
//! ## Example Output
//!
//! ```text
//! === Pipeline (hash) ===
//! --------------------------------
//! Mode        : Pipeline
//! Elapsed     : 0.912 s
//! Throughput  : 0.54 GiB/s
//! Triplets    : 84_102_337
//! Triplets/s  : 92_217_475
//! --------------------------------
//! ```
//!
//! Build in release mode and use an input of 100MB+ for stable numbers.

use std::env;
use std::fs;
use std::time::{Duration, Instant};

use triplets_core::analyzer::{Sanitizer, TripletIter};
use triplets_core::{CounterConfig, PartitionStrategy, TripletCounter};

const WARMUP_RUNS: usize = 1;
const MEASURE_RUNS: usize = 5;

fn main() -> std::io::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: triplet_bench <path> [length|hash]");
        std::process::exit(1);
    }

    let path = &args[1];

    let strategy = match args.get(2).map(|s| s.parse::<PartitionStrategy>()) {
        Some(Ok(strategy)) => strategy,
        Some(Err(e)) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
        None => PartitionStrategy::ByHash,
    };

    println!("Loading file...");
    let input = fs::read(path)?;

    println!("File size: {}", fmt_bytes(input.len() as u64));
    println!("Strategy:  {}\n", strategy);

    bench_sanitize(&input);
    bench_extract(&input);
    bench_pipeline(&input, strategy);

    Ok(())
}

fn bench_sanitize(input: &[u8]) {
    let mut buf = Vec::with_capacity(input.len());

    println!("=== Sanitize ===");

    warmup(|| {
        Sanitizer.sanitize_into(input, &mut buf);
    });

    let elapsed = measure(|| {
        Sanitizer.sanitize_into(input, &mut buf);
        std::hint::black_box(buf.len());
    });

    print_perf("Sanitize", input.len(), elapsed, 0);
}

fn bench_extract(input: &[u8]) {
    let sanitized = Sanitizer.sanitized(input);

    println!("=== Extract ===");

    warmup(|| {
        std::hint::black_box(TripletIter::new(&sanitized).count());
    });

    let mut triplets = 0u64;
    let elapsed = measure(|| {
        triplets = TripletIter::new(&sanitized).count() as u64;
        std::hint::black_box(triplets);
    });

    print_perf("Extract", sanitized.len(), elapsed, triplets);
}

fn bench_pipeline(input: &[u8], strategy: PartitionStrategy) {
    let config = CounterConfig {
        partition: strategy,
        ..CounterConfig::default()
    };
    let mut counter = TripletCounter::with_config(config);
    let mut buf = Vec::with_capacity(input.len());

    println!("=== Pipeline ({}) ===", strategy);

    warmup(|| {
        buf.clear();
        buf.extend_from_slice(input);
        std::hint::black_box(counter.count(&mut buf));
    });

    let elapsed = measure(|| {
        buf.clear();
        buf.extend_from_slice(input);
        std::hint::black_box(counter.count(&mut buf));
    });

    let stats = counter.stats();
    print_perf("Pipeline", input.len(), elapsed, stats.candidates as u64);
    println!("{}\n", stats);
}

fn warmup<F: FnMut()>(mut f: F) {
    for _ in 0..WARMUP_RUNS {
        f();
    }
}

fn measure<F: FnMut()>(mut f: F) -> Duration {
    let mut total = Duration::ZERO;

    for _ in 0..MEASURE_RUNS {
        let start = Instant::now();
        f();
        total += start.elapsed();
    }

    total / MEASURE_RUNS as u32
}

fn print_perf(label: &str, input_bytes: usize, elapsed: Duration, triplets: u64) {
    let secs = elapsed.as_secs_f64();
    let gib = input_bytes as f64 / (1024.0 * 1024.0 * 1024.0);

    println!("--------------------------------");
    println!("Mode        : {}", label);
    println!("Elapsed     : {:.3} s", secs);
    println!("Throughput  : {:.3} GiB/s", gib / secs);

    if triplets > 0 {
        println!("Triplets    : {}", fmt_count(triplets));
        println!("Triplets/s  : {}", fmt_count((triplets as f64 / secs) as u64));
    }

    println!("--------------------------------\n");
}

fn fmt_bytes(b: u64) -> String {
    if b >= 1024 * 1024 * 1024 {
        format!("{:.2} GiB", b as f64 / (1024.0 * 1024.0 * 1024.0))
    } else if b >= 1024 * 1024 {
        format!("{:.2} MiB", b as f64 / (1024.0 * 1024.0))
    } else if b >= 1024 {
        format!("{:.2} KiB", b as f64 / 1024.0)
    } else {
        format!("{} B", b)
    }
}

fn fmt_count(n: u64) -> String {
    let s = n.to_string();
    let mut out = String::with_capacity(s.len() + s.len() / 3);

    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push('_');
        }
        out.push(ch);
    }

    out.chars().rev().collect()
}
