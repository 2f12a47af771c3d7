use std::env;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::dataset::{DatasetOptions, HEADLINE_INDEX};
use crate::words::tokenizer::TRIVIAL_WORD_LENGTH;
use crate::words::SortStrategy;

/// Central configuration loaded from environment variables.
///
/// Every setting has a default matching the standard news dataset layout.
/// The .env file is loaded automatically at startup via dotenvy, and CLI
/// flags override whatever is loaded here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Zero-based field index of the headline in each record
    pub headline_column: usize,
    /// Words of at most this many characters are ignored
    pub trivial_len: usize,
    /// Field delimiter of the dataset file
    pub delimiter: u8,
    /// Which sort backs the ranking stage
    pub sort: SortStrategy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            headline_column: HEADLINE_INDEX,
            trivial_len: TRIVIAL_WORD_LENGTH,
            delimiter: b',',
            sort: SortStrategy::Std,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup. Unset variables
    /// fall back to defaults; set-but-malformed ones are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let headline_column = parse_var(&lookup, "HEADLINES_COLUMN")?
            .unwrap_or(defaults.headline_column);
        let trivial_len =
            parse_var(&lookup, "HEADLINES_TRIVIAL_LEN")?.unwrap_or(defaults.trivial_len);
        let delimiter = match lookup("HEADLINES_DELIMITER") {
            Some(raw) => parse_delimiter(&raw).context("Invalid HEADLINES_DELIMITER")?,
            None => defaults.delimiter,
        };
        let sort = match lookup("HEADLINES_SORT") {
            Some(raw) => raw
                .parse::<SortStrategy>()
                .map_err(|e| anyhow::anyhow!("Invalid HEADLINES_SORT: {e}"))?,
            None => defaults.sort,
        };

        Ok(Self {
            headline_column,
            trivial_len,
            delimiter,
            sort,
        })
    }

    /// Options for the dataset reader derived from this config.
    pub fn dataset_options(&self) -> DatasetOptions {
        DatasetOptions {
            headline_column: self.headline_column,
            delimiter: self.delimiter,
        }
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .with_context(|| format!("Invalid {key}: '{raw}'"))
        })
        .transpose()
}

/// Parse a delimiter given as a single ASCII character. `\t` and `tab`
/// are accepted for tab-separated files.
pub fn parse_delimiter(raw: &str) -> Result<u8> {
    match raw {
        "\\t" | "tab" => return Ok(b'\t'),
        _ => {}
    }
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() => Ok(c as u8),
        _ => anyhow::bail!("delimiter must be a single ASCII character, got '{raw}'"),
    }
}
