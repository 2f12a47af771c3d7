// Line-oriented output for selected words.
//
// Each entry becomes exactly one `<word> : <count>` line. An empty
// selection writes nothing at all.

use std::io::Write;

use anyhow::Result;

use super::format_line;
use crate::words::WordEntry;

/// Write one line per entry, in the order given.
pub fn write_lines<W: Write>(out: &mut W, entries: &[WordEntry]) -> Result<()> {
    for entry in entries {
        writeln!(out, "{}", format_line(entry))?;
    }
    out.flush()?;
    Ok(())
}

/// Print entries to stdout.
pub fn display_words(entries: &[WordEntry]) -> Result<()> {
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    write_lines(&mut lock, entries)
}
