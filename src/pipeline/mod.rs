// Counting pipeline: headlines -> tokens -> frequency table -> ranked list.
//
// Strictly sequential. Every headline is ingested before ranking starts,
// and ranking finishes before anything is selected.

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::words::{FrequencyTable, RankedList, SortStrategy, Tokenizer};

/// Knobs for one counting run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    pub tokenizer: Tokenizer,
    pub sort: SortStrategy,
    /// Draw a progress bar on stderr while ingesting headlines
    pub show_progress: bool,
}

/// Tokenize every headline into a fresh frequency table.
pub fn count_words<S: AsRef<str>>(
    headlines: &[S],
    tokenizer: &Tokenizer,
    show_progress: bool,
) -> Result<FrequencyTable> {
    let pb = if show_progress {
        let pb = ProgressBar::new(headlines.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar().template("  Counting [{bar:30}] {pos}/{len} ({eta})")?,
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut table = FrequencyTable::new();
    for headline in headlines {
        table.observe_headline(tokenizer, headline.as_ref());
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(table)
}

/// Count and rank the words of every headline.
pub fn run<S: AsRef<str>>(headlines: &[S], options: &RunOptions) -> Result<RankedList> {
    let table = count_words(headlines, &options.tokenizer, options.show_progress)?;

    info!(
        records = headlines.len(),
        tokens = table.total_observed(),
        distinct = table.len(),
        "Counted headline words"
    );

    let ranked = options.sort.ranker().rank(table.into_entries());

    if let Some(top) = ranked.get(0) {
        info!(
            sort = %options.sort,
            top_word = top.text(),
            top_count = top.count(),
            "Ranked words"
        );
    }

    Ok(ranked)
}
