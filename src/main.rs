use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use log::{LevelFilter, Log, Metadata, Record};
use sacount::index::{BuildOptions, IndexReader, build, stats};
use sacount::output;
use sacount::utils::{AppConfig, Encoding};
use std::path::{Path, PathBuf};
use termcolor::ColorChoice;

#[derive(Parser)]
#[command(name = "sacount")]
#[command(about = "Suffix array n-gram and co-occurrence counting")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory holding named indexes (overrides the config file)
    #[arg(short, long, global = true)]
    dir: Option<PathBuf>,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// When to use colors
    #[arg(long, value_enum, default_value_t = ColorMode::Auto, global = true)]
    color: ColorMode,
}

#[derive(Subcommand)]
enum Commands {
    /// Build an index from a corpus file
    Build {
        /// Corpus file to index
        corpus: PathBuf,

        /// Index name (defaults to the corpus file stem)
        #[arg(short, long)]
        name: Option<String>,

        /// Treat every byte as a character of its own
        #[arg(long)]
        single_byte: bool,

        /// Refine first-byte buckets in parallel
        #[arg(long)]
        parallel: bool,

        /// Suppress progress output
        #[arg(short, long)]
        quiet: bool,
    },
    /// Count occurrences of one or more strings
    Count {
        /// Index name
        name: String,

        /// Strings to count
        #[arg(required = true)]
        queries: Vec<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Count a word and the word immediately followed by another
    Bigram {
        /// Index name
        name: String,

        /// First word
        first: String,

        /// Word that must follow the first one directly
        second: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List n-grams with their counts
    Ngrams {
        /// Index name
        name: String,

        /// Gram length in characters
        #[arg(short, default_value_t = 1)]
        n: usize,

        /// Only show the K most frequent grams
        #[arg(long)]
        top: Option<usize>,

        /// Treat every byte as a character of its own
        #[arg(long)]
        single_byte: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show index statistics
    Stats {
        /// Index name
        name: String,
    },
    /// List all indexes
    List,
}

#[derive(Clone, Copy, ValueEnum)]
enum ColorMode {
    Auto,
    Always,
    Never,
}

impl From<ColorMode> for ColorChoice {
    fn from(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Auto => ColorChoice::Auto,
            ColorMode::Always => ColorChoice::Always,
            ColorMode::Never => ColorChoice::Never,
        }
    }
}

/// Minimal stderr logger for the command line
struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = AppConfig::load()?;
    let index_dir = config.resolve_index_dir(cli.dir.as_deref())?;
    let color: ColorChoice = cli.color.into();

    match cli.command {
        Commands::Build {
            corpus,
            name,
            single_byte,
            parallel,
            quiet,
        } => {
            let name = match name.or_else(|| build::default_name(&corpus)) {
                Some(name) => name,
                None => bail!("Cannot derive an index name from {}", corpus.display()),
            };
            let options = BuildOptions {
                encoding: encoding_for(&config, single_byte),
                parallel_sort: parallel || config.parallel_sort,
                parallel_threshold: config.parallel_threshold,
            };
            let index =
                build::build_index_with_progress(&corpus, &name, &index_dir, &options, quiet)?;
            if !quiet {
                println!("Indexed {} positions as '{}'", index.len(), name);
            }
        }
        Commands::Count {
            name,
            queries,
            json,
        } => {
            let index = open(&index_dir, &name)?;
            let counts = index.query().count_many(&queries);
            let mut results = Vec::with_capacity(queries.len());
            for (query, count) in queries.into_iter().zip(counts) {
                let count = count.with_context(|| format!("Query {:?} failed", query))?;
                results.push((query, count));
            }
            if json {
                output::print_json(&output::counts_json(&results))?;
            } else {
                output::print_counts(&results, color)?;
            }
        }
        Commands::Bigram {
            name,
            first,
            second,
            json,
        } => {
            let index = open(&index_dir, &name)?;
            let result = index
                .query()
                .bigram_count(first.as_bytes(), second.as_bytes())?;
            if json {
                output::print_json(&output::bigram_json(&first, &second, &result))?;
            } else {
                output::print_bigram(&first, &second, &result, color)?;
            }
        }
        Commands::Ngrams {
            name,
            n,
            top,
            single_byte,
            json,
        } => {
            let index = open(&index_dir, &name)?;
            let encoding = encoding_for(&config, single_byte);
            let counts = match top {
                Some(limit) => index.query().top_ngrams(n, limit, encoding),
                None => index.query().ngram_counts(n, encoding),
            };
            if json {
                output::print_json(&output::ngrams_json(&counts))?;
            } else {
                output::print_ngrams(&counts, color)?;
            }
        }
        Commands::Stats { name } => {
            stats::show_stats(&index_dir, &name)?;
        }
        Commands::List => {
            stats::list_indexes(&index_dir)?;
        }
    }

    Ok(())
}

fn encoding_for(config: &AppConfig, single_byte: bool) -> Encoding {
    if single_byte {
        Encoding::SingleByte
    } else {
        config.encoding
    }
}

fn open(index_dir: &Path, name: &str) -> Result<sacount::index::SuffixIndex> {
    IndexReader::open(index_dir, name)
        .with_context(|| format!("Failed to open index '{}' in {}", name, index_dir.display()))
}
