// Output formatting — plain word/count lines and JSON.

pub mod json;
pub mod terminal;

use crate::words::WordEntry;

/// Format one selected entry as `<word> : <count>`.
pub fn format_line(entry: &WordEntry) -> String {
    format!("{} : {}", entry.text(), entry.count())
}
