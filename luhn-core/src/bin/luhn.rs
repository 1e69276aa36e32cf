//! Luhn summarizer command line.
//!
//! ## Usage
//!
//! ```bash
//! # Three-sentence summary of a file, settings from luhn.toml / LUHN__* env
//! luhn summarize article.html
//!
//! # Read stdin, override count and language, print per-sentence scores
//! cat article.txt | luhn summarize -n 2 -l ru --scores
//!
//! # Throughput of the pipeline stages on a large file
//! ./target/release/luhn bench /path/to/wiki.txt
//! ```
//!
//! ## Bench output
//!
//! ```text
//! === Summarize ===
//! --------------------------------
//! Mode        : Summarize
//! Elapsed     : 0.452 s
//! Throughput  : 0.218 GiB/s
//! Sentences   : 1_548_923
//! Sentences/s : 3_426_547
//! --------------------------------
//! ```
//!
//! Build in release mode and use a large input (100MB+) for stable numbers.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{filter::LevelFilter, fmt};

use luhn_core::analyzer::{sentences, strip_markup_into, TextNormalizer};
use luhn_core::settings::{self, Settings};
use luhn_core::{Language, Summarizer};

const WARMUP_RUNS: usize = 1;
const MEASURE_RUNS: usize = 5;

/// Luhn extractive summarizer.
#[derive(Debug, Parser)]
#[command(name = "luhn", version, about = "Luhn extractive summarizer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Increase logging verbosity (-v, -vv, -vvv).
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Summarize a document (stdin when no file is given).
    Summarize(SummarizeArgs),
    /// Measure throughput of markup stripping, normalization and summarization.
    Bench(BenchArgs),
}

#[derive(Debug, Args)]
struct SummarizeArgs {
    /// Document to summarize.
    #[arg(value_name = "FILE")]
    path: Option<PathBuf>,
    /// Number of sentences in the summary (overrides settings).
    #[arg(short = 'n', long = "sentences")]
    sentences: Option<usize>,
    /// Stop-word language, `en` or `ru` (overrides settings).
    #[arg(short = 'l', long = "language")]
    language: Option<Language>,
    /// Settings file to use instead of ./luhn.toml.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Print every sentence score instead of the summary.
    #[arg(long)]
    scores: bool,
    /// Print document statistics to stderr.
    #[arg(long)]
    stats: bool,
}

#[derive(Debug, Args)]
struct BenchArgs {
    /// Large UTF-8 text file.
    #[arg(value_name = "FILE")]
    path: PathBuf,
    /// Sentences per summary.
    #[arg(short = 'n', long = "sentences", default_value_t = 3)]
    sentences: usize,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(determine_log_level(cli.verbose));

    if let Err(err) = run(cli) {
        eprintln!("error: {err:#}");
        process::exit(1);
    }
}

fn determine_log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn init_tracing(level: LevelFilter) {
    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::warn!("Tracing subscriber already set; skipping re-initialization.");
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Summarize(args) => summarize(args),
        Commands::Bench(args) => bench(args),
    }
}

fn summarize(args: SummarizeArgs) -> Result<()> {
    let mut settings = match &args.config {
        Some(path) => settings::load_from(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => settings::load().context("failed to load settings")?,
    };
    apply_overrides(&mut settings, &args);
    debug!(?settings, "effective settings");

    let text = read_input(args.path.as_deref())?;
    let summarizer = Summarizer::with_config(settings.summarizer_config());

    if args.stats {
        eprintln!("{}", summarizer.stats(&text));
    }

    if args.scores {
        for scored in summarizer.rank(&text) {
            println!("{scored}");
        }
        return Ok(());
    }

    let summary = summarizer.summarize_default(&text)?;
    println!("{summary}");
    Ok(())
}

fn apply_overrides(settings: &mut Settings, args: &SummarizeArgs) {
    if let Some(count) = args.sentences {
        settings.sentence_count = count;
    }
    if let Some(language) = args.language {
        settings.language = language;
    }
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

fn bench(args: BenchArgs) -> Result<()> {
    println!("Loading file...");
    let input = fs::read_to_string(&args.path)
        .with_context(|| format!("failed to read {} as UTF-8", args.path.display()))?;

    println!("File size: {}\n", fmt_bytes(input.len() as u64));

    let content = bench_strip(&input);
    bench_normalize(&content);
    bench_summarize(&input, args.sentences)?;

    Ok(())
}

fn bench_strip(input: &str) -> String {
    let mut out = String::with_capacity(input.len());

    println!("=== Strip markup ===");

    warmup(|| strip_markup_into(input, &mut out));
    let elapsed = measure(|| strip_markup_into(input, &mut out));

    print_perf("Strip", input.len(), elapsed, 0);
    out
}

fn bench_normalize(content: &str) {
    let normalizer = TextNormalizer::default();
    let mut out = String::with_capacity(content.len());

    println!("=== Normalize ===");

    warmup(|| normalizer.normalize_into(content, &mut out));
    let elapsed = measure(|| normalizer.normalize_into(content, &mut out));

    print_perf("Normalize", content.len(), elapsed, 0);
}

fn bench_summarize(input: &str, sentence_count: usize) -> Result<()> {
    let summarizer = Summarizer::default();

    println!("=== Summarize ===");

    warmup(|| {
        std::hint::black_box(summarizer.summarize(input, sentence_count).ok());
    });

    let mut failure = None;
    let elapsed = measure(|| match summarizer.summarize(input, sentence_count) {
        Ok(summary) => {
            std::hint::black_box(summary);
        }
        Err(err) => failure = Some(err),
    });
    if let Some(err) = failure {
        return Err(err.into());
    }

    let mut content = String::with_capacity(input.len());
    strip_markup_into(input, &mut content);
    let count = sentences(&content).len() as u64;

    print_perf("Summarize", input.len(), elapsed, count);
    Ok(())
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

fn print_perf(label: &str, input_bytes: usize, elapsed: Duration, sentences: u64) {
    let secs = elapsed.as_secs_f64();
    let gib = input_bytes as f64 / (1024.0 * 1024.0 * 1024.0);

    println!("--------------------------------");
    println!("Mode        : {}", label);
    println!("Elapsed     : {:.3} s", secs);
    println!("Throughput  : {:.3} GiB/s", gib / secs);

    if sentences > 0 {
        println!("Sentences   : {}", fmt_count(sentences));
        println!("Sentences/s : {}", fmt_count((sentences as f64 / secs) as u64));
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
