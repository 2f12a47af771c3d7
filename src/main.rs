use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing::{debug, info};

use headlines::config::{parse_delimiter, Config};
use headlines::dataset::read_headlines;
use headlines::output::{json, terminal};
use headlines::pipeline::{self, RunOptions};
use headlines::words::{parse_rank, select, SortStrategy, Tokenizer};

/// Headlines: the most frequent words in a dataset of news headlines.
///
/// Words are ranked by count (descending), then alphabetically. Every word
/// whose count reaches the count of the word at rank N is printed, so ties
/// at the boundary are never cut off.
#[derive(Parser)]
#[command(name = "headlines", version, about)]
struct Cli {
    /// Delimited dataset file (prompted for if omitted)
    file: Option<PathBuf>,

    /// Zero-based rank whose count sets the cutoff (prompted for if omitted)
    #[arg(short = 'n', long = "rank", allow_hyphen_values = true)]
    rank: Option<String>,

    /// Zero-based headline field index (default: 4, or HEADLINES_COLUMN)
    #[arg(long)]
    column: Option<usize>,

    /// Ignore words of at most this many characters (default: 2)
    #[arg(long)]
    trivial_len: Option<usize>,

    /// Field delimiter, a single character or `tab` (default: ,)
    #[arg(long)]
    delimiter: Option<String>,

    /// Sort used for ranking: std or merge (default: std)
    #[arg(long)]
    sort: Option<SortStrategy>,

    /// Print the selected words as a JSON array
    #[arg(long)]
    json: bool,

    /// Show a progress bar while counting
    #[arg(long)]
    progress: bool,
}

fn main() {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so stdout carries only the ranked words
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("headlines=warn")),
        )
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        fatal(&format!("{e:#}"));
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = apply_overrides(Config::load()?, cli)?;
    debug!(?config, "Loaded configuration");

    let path = match &cli.file {
        Some(path) => path.clone(),
        None => PathBuf::from(prompt("File: ")?),
    };

    let headlines = match read_headlines(&path, &config.dataset_options()) {
        Ok(headlines) => headlines,
        Err(e) => fatal(&e.to_string()),
    };

    let options = RunOptions {
        tokenizer: Tokenizer::new(config.trivial_len),
        sort: config.sort,
        show_progress: cli.progress,
    };
    let ranked = pipeline::run(&headlines, &options)?;

    let raw_rank = match &cli.rank {
        Some(raw) => raw.clone(),
        None => prompt("N:")?,
    };
    let n = match parse_rank(&raw_rank) {
        Some(n) => n,
        None => fatal("Could not read N"),
    };

    let selected = match select(&ranked, n) {
        Ok(selected) => selected,
        Err(e) => fatal(&e.to_string()),
    };
    info!(n, selected = selected.len(), "Printing selected words");

    if cli.json {
        json::write_json(&mut io::stdout().lock(), selected)?;
    } else {
        terminal::display_words(selected)?;
    }

    Ok(())
}

/// Layer CLI flags over the environment-derived config.
fn apply_overrides(mut config: Config, cli: &Cli) -> Result<Config> {
    if let Some(column) = cli.column {
        config.headline_column = column;
    }
    if let Some(trivial_len) = cli.trivial_len {
        config.trivial_len = trivial_len;
    }
    if let Some(delimiter) = &cli.delimiter {
        config.delimiter = parse_delimiter(delimiter).context("Invalid --delimiter")?;
    }
    if let Some(sort) = cli.sort {
        config.sort = sort;
    }
    Ok(config)
}

/// Print `label`, then read one line from stdin without its line ending.
fn prompt(label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Report a user-facing error and exit with status 1.
fn fatal(message: &str) -> ! {
    eprintln!("{} {}", "ERROR:".red().bold(), message);
    std::process::exit(1);
}
