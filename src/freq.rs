//! Block frequency counting and ranking.

use std::cmp::Reverse;
use std::collections::HashMap;

use crate::chunk::Block;

/// Occurrence counts for every distinct block value, plus the order in
/// which each value was first seen.
///
/// The first-seen order is what keeps the ranking deterministic when counts
/// tie: hash-map iteration order would differ between runs and platforms,
/// and the visual output depends on the ranking.
pub struct FrequencyTable<'a> {
    counts: HashMap<Block<'a>, usize>,
    first_seen: Vec<Block<'a>>,
}

/// Count occurrences of each distinct block in a single pass.
pub fn count_blocks<'a>(blocks: &[Block<'a>]) -> FrequencyTable<'a> {
    let mut counts: HashMap<Block<'a>, usize> = HashMap::new();
    let mut first_seen = Vec::new();
    for &block in blocks {
        let entry = counts.entry(block).or_insert(0);
        if *entry == 0 {
            first_seen.push(block);
        }
        *entry += 1;
    }
    FrequencyTable { counts, first_seen }
}

impl<'a> FrequencyTable<'a> {
    /// Occurrences of `block`, zero if never seen.
    pub fn count(&self, block: &[u8]) -> usize {
        self.counts.get(block).copied().unwrap_or(0)
    }

    /// Number of distinct block values.
    pub fn distinct(&self) -> usize {
        self.first_seen.len()
    }

    /// Distinct blocks ordered by count descending.
    ///
    /// Ties keep first-seen order (the sort is stable over the first-seen
    /// list), so the ranking is reproducible for a fixed input ordering.
    pub fn ranking(&self) -> Vec<(Block<'a>, usize)> {
        let mut ranked: Vec<(Block<'a>, usize)> = self
            .first_seen
            .iter()
            .map(|&block| (block, self.counts[block]))
            .collect();
        ranked.sort_by_key(|&(_, count)| Reverse(count));
        ranked
    }
}
