// Word counting core — tokenize, accumulate, rank, select.

pub mod frequency;
pub mod ranker;
pub mod selector;
pub mod tokenizer;

pub use frequency::{FrequencyTable, WordEntry};
pub use ranker::{rank_order, MergeRanker, RankedList, Ranker, SortRanker, SortStrategy};
pub use selector::{cutoff, parse_rank, select};
pub use tokenizer::Tokenizer;
