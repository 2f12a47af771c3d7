// Headlines: most frequent words across a dataset of news headlines.
//
// This is the library root. `words` holds the counting and ranking core;
// the other modules read datasets, wire the stages together, and render
// results.

pub mod config;
pub mod dataset;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod words;
