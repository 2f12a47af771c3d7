// Deterministic ranking of word entries.
//
// Order: higher count first, then ascending text. Since the table holds at
// most one entry per text, no two entries compare equal and every correct
// sort produces the same sequence. Two rankers are provided behind the
// `Ranker` trait: the standard library's stable sort, and an iterative
// bottom-up merge sort.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::frequency::WordEntry;

/// Compare two entries by rank: `Less` means `a` is reported before `b`.
pub fn rank_order(a: &WordEntry, b: &WordEntry) -> Ordering {
    b.count()
        .cmp(&a.count())
        .then_with(|| a.text().cmp(b.text()))
}

/// True if every adjacent pair in `entries` is in rank order.
pub fn is_ranked(entries: &[WordEntry]) -> bool {
    entries
        .windows(2)
        .all(|pair| rank_order(&pair[0], &pair[1]) != Ordering::Greater)
}

/// Entries in rank order. Produced once by a `Ranker`, read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankedList {
    entries: Vec<WordEntry>,
}

impl RankedList {
    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, rank: usize) -> Option<&WordEntry> {
        self.entries.get(rank)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WordEntry> {
        self.entries.iter()
    }

    pub fn into_entries(self) -> Vec<WordEntry> {
        self.entries
    }

    fn from_sorted(entries: Vec<WordEntry>) -> Self {
        debug_assert!(is_ranked(&entries));
        Self { entries }
    }
}

impl<'a> IntoIterator for &'a RankedList {
    type Item = &'a WordEntry;
    type IntoIter = std::slice::Iter<'a, WordEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Trait for turning accumulated entries into a ranked list.
pub trait Ranker {
    fn rank(&self, entries: Vec<WordEntry>) -> RankedList;
}

/// Ranks with the standard library's stable sort.
#[derive(Debug, Default, Clone, Copy)]
pub struct SortRanker;

impl Ranker for SortRanker {
    fn rank(&self, mut entries: Vec<WordEntry>) -> RankedList {
        entries.sort_by(rank_order);
        RankedList::from_sorted(entries)
    }
}

/// Ranks with a bottom-up merge sort.
///
/// Runs of length one are merged pairwise, level by level, until a single
/// run remains. No recursion, so input size is bounded only by memory.
#[derive(Debug, Default, Clone, Copy)]
pub struct MergeRanker;

impl Ranker for MergeRanker {
    fn rank(&self, entries: Vec<WordEntry>) -> RankedList {
        RankedList::from_sorted(merge_sort_by(entries, rank_order))
    }
}

fn merge_sort_by<T, F>(items: Vec<T>, cmp: F) -> Vec<T>
where
    F: Fn(&T, &T) -> Ordering,
{
    let mut runs: Vec<Vec<T>> = items.into_iter().map(|item| vec![item]).collect();

    while runs.len() > 1 {
        let mut merged_runs = Vec::with_capacity(runs.len().div_ceil(2));
        let mut pairs = runs.into_iter();
        while let Some(left) = pairs.next() {
            match pairs.next() {
                Some(right) => merged_runs.push(merge(left, right, &cmp)),
                None => merged_runs.push(left),
            }
        }
        runs = merged_runs;
    }

    runs.pop().unwrap_or_default()
}

/// Merge two sorted runs. Ties take from `left` first, keeping the sort stable.
fn merge<T, F>(left: Vec<T>, right: Vec<T>, cmp: &F) -> Vec<T>
where
    F: Fn(&T, &T) -> Ordering,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => cmp(r, l) != Ordering::Less,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        let next = if take_left { left.next() } else { right.next() };
        merged.extend(next);
    }

    merged
}

/// Which `Ranker` implementation to use.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SortStrategy {
    /// Standard library stable sort
    #[default]
    Std,
    /// Iterative merge sort
    Merge,
}

impl SortStrategy {
    pub fn ranker(self) -> Box<dyn Ranker> {
        match self {
            SortStrategy::Std => Box::new(SortRanker),
            SortStrategy::Merge => Box::new(MergeRanker),
        }
    }
}

impl FromStr for SortStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "std" => Ok(SortStrategy::Std),
            "merge" => Ok(SortStrategy::Merge),
            other => Err(format!("unknown sort strategy '{other}' (expected std or merge)")),
        }
    }
}

impl fmt::Display for SortStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortStrategy::Std => write!(f, "std"),
            SortStrategy::Merge => write!(f, "merge"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(pairs: &[(&str, u64)]) -> Vec<WordEntry> {
        pairs.iter().map(|&(w, c)| WordEntry::new(w, c)).collect()
    }

    fn texts(ranked: &RankedList) -> Vec<&str> {
        ranked.iter().map(|e| e.text()).collect()
    }

    #[test]
    fn test_rank_order_count_then_text() {
        let a = WordEntry::new("zebra", 5);
        let b = WordEntry::new("apple", 3);
        let c = WordEntry::new("apple", 5);
        assert_eq!(rank_order(&a, &b), Ordering::Less);
        assert_eq!(rank_order(&c, &a), Ordering::Less);
        assert_eq!(rank_order(&a, &a), Ordering::Equal);
    }

    #[test]
    fn test_both_rankers_agree() {
        let input = entries(&[
            ("the", 2),
            ("cat", 2),
            ("sat", 1),
            ("ran", 1),
            ("dogs", 1),
            ("bark", 1),
            ("news", 7),
        ]);
        let by_sort = SortRanker.rank(input.clone());
        let by_merge = MergeRanker.rank(input);

        assert_eq!(
            texts(&by_sort),
            vec!["news", "cat", "the", "bark", "dogs", "ran", "sat"]
        );
        assert_eq!(by_sort, by_merge);
    }

    #[test]
    fn test_rank_empty_and_single() {
        assert!(MergeRanker.rank(Vec::new()).is_empty());
        assert!(SortRanker.rank(Vec::new()).is_empty());

        let one = MergeRanker.rank(entries(&[("solo", 4)]));
        assert_eq!(one.len(), 1);
        assert_eq!(one.get(0).map(|e| e.count()), Some(4));
    }

    #[test]
    fn test_merge_sort_odd_lengths() {
        for n in 0..40u64 {
            let input: Vec<WordEntry> = (0..n)
                .map(|i| WordEntry::new(format!("w{:02}", (i * 7) % 40), (i * 13) % 5 + 1))
                .collect();
            let ranked = MergeRanker.rank(input);
            assert_eq!(ranked.len() as u64, n);
            assert!(is_ranked(ranked.entries()));
        }
    }

    #[test]
    fn test_merge_sort_is_stable() {
        // Pairs sorted by key only; equal keys must keep input order
        let items = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (2, 'e')];
        let sorted = merge_sort_by(items, |x, y| x.0.cmp(&y.0));
        assert_eq!(sorted, vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c'), (2, 'e')]);
    }

    #[test]
    fn test_strategy_parsing() {
        assert_eq!("std".parse::<SortStrategy>(), Ok(SortStrategy::Std));
        assert_eq!(" Merge ".parse::<SortStrategy>(), Ok(SortStrategy::Merge));
        assert!("quick".parse::<SortStrategy>().is_err());
        assert_eq!(SortStrategy::Merge.to_string(), "merge");
    }
}
