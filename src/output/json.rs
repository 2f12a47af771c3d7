// JSON output for selected words, for piping into other tools.

use std::io::Write;

use anyhow::{Context, Result};

use crate::words::WordEntry;

/// Write entries as a JSON array of `{"word": .., "count": ..}` objects,
/// followed by a newline.
pub fn write_json<W: Write>(out: &mut W, entries: &[WordEntry]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, entries).context("Failed to serialize words")?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trips_through_serde() {
        let entries = vec![WordEntry::new("cat", 2), WordEntry::new("the", 2)];
        let mut buf = Vec::new();
        write_json(&mut buf, &entries).unwrap();

        let parsed: Vec<WordEntry> = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed, entries);

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value[0]["word"], "cat");
        assert_eq!(value[1]["count"], 2);
    }

    #[test]
    fn test_empty_is_empty_array() {
        let mut buf = Vec::new();
        write_json(&mut buf, &[]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap().trim(), "[]");
    }
}
