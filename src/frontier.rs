//! The open set of the search: a [BinaryHeap] ordered by estimated total cost with an
//! insertion sequence number as tie-breaker, plus a hash map recording which nodes are
//! currently open.
//!
//! Entries are never updated in place. Re-pushing a node that is already open supersedes
//! its previous entry, which stays in the heap and is discarded once it reaches the top.
use crate::error::{Error, Result};
use fxhash::FxHashMap;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

struct SmallestScoreHolder<N, K> {
    score: K,
    sequence: u64,
    node: N,
}

impl<N, K: PartialOrd> Eq for SmallestScoreHolder<N, K> {}

impl<N, K: PartialOrd> PartialEq for SmallestScoreHolder<N, K> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N, K: PartialOrd> PartialOrd for SmallestScoreHolder<N, K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N, K: PartialOrd> Ord for SmallestScoreHolder<N, K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on both keys: the max-heap then yields the smallest score, and among
        // equal scores the entry pushed first.
        match other
            .score
            .partial_cmp(&self.score)
            .unwrap_or(Ordering::Equal)
        {
            Ordering::Equal => other.sequence.cmp(&self.sequence),
            s => s,
        }
    }
}

pub struct Frontier<N, K> {
    heap: BinaryHeap<SmallestScoreHolder<N, K>>,
    /// Open nodes mapped to the sequence number of their live heap entry.
    open: FxHashMap<N, u64>,
}

impl<N, K> Default for Frontier<N, K>
where
    N: Eq + Hash + Clone,
    K: PartialOrd,
{
    fn default() -> Self {
        Frontier::new()
    }
}

impl<N, K> Frontier<N, K>
where
    N: Eq + Hash + Clone,
    K: PartialOrd,
{
    pub fn new() -> Frontier<N, K> {
        Frontier {
            heap: BinaryHeap::new(),
            open: FxHashMap::default(),
        }
    }
    /// A frontier containing only `start`, with sequence number 0.
    pub fn with_start(score: K, start: N) -> Frontier<N, K> {
        let mut frontier = Frontier::new();
        frontier.push(score, 0, start);
        frontier
    }
    /// Adds an entry for `node`. If `node` is already open the new entry replaces the old
    /// one, so `sequence` should exceed every sequence number pushed before.
    pub fn push(&mut self, score: K, sequence: u64, node: N) {
        self.open.insert(node.clone(), sequence);
        self.heap.push(SmallestScoreHolder {
            score,
            sequence,
            node,
        });
    }
    /// Removes and returns the open node with the lowest `(score, sequence)`.
    pub fn pop_best(&mut self) -> Result<N> {
        while let Some(SmallestScoreHolder { sequence, node, .. }) = self.heap.pop() {
            // Skip entries superseded by a later push, or whose node was already popped.
            if self.open.get(&node) == Some(&sequence) {
                self.open.remove(&node);
                return Ok(node);
            }
        }
        Err(Error::EmptyFrontier)
    }
    pub fn contains(&self, node: &N) -> bool {
        self.open.contains_key(node)
    }
    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }
    /// Number of open nodes, not counting superseded entries.
    pub fn len(&self) -> usize {
        self.open.len()
    }
    pub fn clear(&mut self) {
        self.heap.clear();
        self.open.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_score_then_insertion_order() {
        let mut frontier = Frontier::new();
        let scores = [4.0, 2.0, 4.0, 1.0, 2.0, 4.0];
        for (i, score) in scores.iter().enumerate() {
            frontier.push(*score, i as u64, i);
        }
        let mut popped = Vec::new();
        while !frontier.is_empty() {
            popped.push(frontier.pop_best().unwrap());
        }
        assert_eq!(popped, vec![3, 1, 4, 0, 2, 5]);
        assert_eq!(frontier.pop_best(), Err(Error::EmptyFrontier));
    }

    #[test]
    fn starts_with_single_node() {
        let mut frontier = Frontier::with_start(6, 'a');
        assert!(frontier.contains(&'a'));
        assert_eq!(frontier.len(), 1);
        assert_eq!(frontier.pop_best(), Ok('a'));
        assert!(!frontier.contains(&'a'));
        assert!(frontier.is_empty());
    }

    #[test]
    fn repush_supersedes_stale_entry() {
        let mut frontier = Frontier::new();
        frontier.push(5.0, 1, "a");
        frontier.push(4.0, 2, "b");
        frontier.push(3.0, 3, "a");
        assert_eq!(frontier.len(), 2);
        assert_eq!(frontier.pop_best(), Ok("a"));
        assert_eq!(frontier.pop_best(), Ok("b"));
        // The stale (5.0, 1, "a") entry is left in the heap but never returned.
        assert!(frontier.is_empty());
        assert_eq!(frontier.pop_best(), Err(Error::EmptyFrontier));
    }

    #[test]
    fn infinite_scores_sort_last() {
        let mut frontier = Frontier::new();
        frontier.push(f64::INFINITY, 1, 'x');
        frontier.push(10.0, 2, 'y');
        assert_eq!(frontier.pop_best(), Ok('y'));
        assert_eq!(frontier.pop_best(), Ok('x'));
    }
}
