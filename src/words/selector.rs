// Threshold selection over a ranked list.
//
// N picks a rank boundary value, not a prefix length: the cutoff k is the
// count at 0-based rank N, and every entry with count >= k is reported.
// Ties at the boundary are therefore all included. When N is past the end
// of the list, k is 0 and nothing is selected.

use std::num::IntErrorKind;

use tracing::debug;

use super::frequency::WordEntry;
use super::ranker::RankedList;
use crate::error::{Result, WordRankError};

/// The cutoff count for rank `n`, or 0 when the list has no entry at `n`.
pub fn cutoff(ranked: &RankedList, n: i64) -> Result<u64> {
    if n < 0 {
        return Err(WordRankError::InvalidArgument { n });
    }
    // Past the end either way when the rank does not fit in usize
    let rank = usize::try_from(n).unwrap_or(usize::MAX);
    Ok(ranked.get(rank).map(WordEntry::count).unwrap_or(0))
}

/// Parse a requested rank from user text.
///
/// Integers too large for `i64` saturate, so an enormous rank still means
/// "past the end" and an enormously negative one is still rejected by
/// `cutoff`. Returns `None` for text that is not an integer at all.
pub fn parse_rank(raw: &str) -> Option<i64> {
    match raw.trim().parse::<i64>() {
        Ok(n) => Some(n),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

/// Every leading entry whose count is at least the cutoff for rank `n`.
pub fn select(ranked: &RankedList, n: i64) -> Result<&[WordEntry]> {
    let k = cutoff(ranked, n)?;
    if k == 0 {
        debug!(n, available = ranked.len(), "Rank beyond available words");
        return Ok(&[]);
    }

    let entries = ranked.entries();
    let end = entries
        .iter()
        .position(|entry| entry.count() < k)
        .unwrap_or(entries.len());

    debug!(n, cutoff = k, selected = end, "Selected ranked words");
    Ok(&entries[..end])
}
