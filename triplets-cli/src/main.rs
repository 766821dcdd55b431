use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, ValueEnum};
use tracing::{debug, error, info, Level};
use triplets_core::TripletCounter;
use triplets_types::{CounterConfig, PartitionStrategy, DEFAULT_HASH_BITS};

mod error;

use error::{CliError, CliResult};

/// Prints the three most frequent word triplets of a text file.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Text file to analyze.
    file: PathBuf,

    /// How candidates are split into buckets before exact counting.
    #[arg(long, value_enum, default_value_t = Partition::Hash)]
    partition: Partition,

    /// log2 of the bucket count for hash partitioning (clamped to 1..=24).
    #[arg(long, default_value_t = DEFAULT_HASH_BITS)]
    hash_bits: u8,

    /// Send every candidate straight to exact counting.
    #[arg(long, default_value_t = false)]
    no_prefilter: bool,

    /// Print run statistics to stderr.
    #[arg(long, default_value_t = false)]
    stats: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Partition {
    Length,
    Hash,
}

impl From<Partition> for PartitionStrategy {
    fn from(p: Partition) -> Self {
        match p {
            Partition::Length => PartitionStrategy::ByLength,
            Partition::Hash => PartitionStrategy::ByHash,
        }
    }
}

impl Cli {
    fn config(&self) -> CounterConfig {
        CounterConfig {
            partition: self.partition.into(),
            hash_bits: self.hash_bits,
            prefilter: !self.no_prefilter,
            ..CounterConfig::default()
        }
    }
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn read_input(path: &Path) -> CliResult<Vec<u8>> {
    fs::read(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn main() {
    let cli = Cli::parse();

    // stdout carries only the result lines.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(log_level(cli.verbose))
        .init();

    let mut buf = read_input(&cli.file).unwrap_or_else(|e| {
        error!("{}", e);
        process::exit(1);
    });
    info!("loaded {} ({} bytes)", cli.file.display(), buf.len());

    let config = cli.config();
    debug!(?config, "counter configuration");

    let mut counter = TripletCounter::with_config(config);
    let top = counter.count(&mut buf);

    print!("{}", top);

    if cli.stats {
        eprintln!("{}", counter.stats());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_library_config() {
        let cli = Cli::try_parse_from(["triplets", "input.txt"]).unwrap();
        assert_eq!(cli.file, PathBuf::from("input.txt"));
        assert_eq!(cli.config(), CounterConfig::default());
        assert_eq!(log_level(cli.verbose), Level::WARN);
    }

    #[test]
    fn flags_map_onto_config() {
        let cli = Cli::try_parse_from([
            "triplets",
            "--partition",
            "length",
            "--hash-bits",
            "8",
            "--no-prefilter",
            "-vv",
            "input.txt",
        ])
        .unwrap();

        let config = cli.config();
        assert_eq!(config.partition, PartitionStrategy::ByLength);
        assert_eq!(config.hash_bits, 8);
        assert!(!config.prefilter);
        assert!(config.skip_small_buckets);
        assert_eq!(log_level(cli.verbose), Level::DEBUG);
    }

    #[test]
    fn file_argument_is_required() {
        assert!(Cli::try_parse_from(["triplets"]).is_err());
    }

    #[test]
    fn unknown_partition_rejected() {
        assert!(Cli::try_parse_from(["triplets", "--partition", "tree", "x"]).is_err());
    }

    #[test]
    fn read_error_names_path() {
        let err = read_input(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.txt"));
    }
}
