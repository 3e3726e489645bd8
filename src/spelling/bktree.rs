//! BK-tree metric index for bounded fuzzy word search.
//!
//! A BK-tree stores words in a metric space: each node holds one word and
//! at most one child per integer distance value. Searching walks only the
//! child edges whose keys could hold a match under the triangle
//! inequality, which prunes most of the tree for small radii.

use std::collections::HashMap;
use std::collections::HashSet;
use std::collections::hash_map::Entry;

use crate::spelling::distance::{Metric, damerau_levenshtein_distance};

/// A single tree node: a word plus at most one child per distance value.
///
/// Invariant: for every child stored under key `d`,
/// `metric(node.word, child.word) == d`.
#[derive(Debug, Clone)]
struct BkNode {
    word: String,
    children: HashMap<usize, BkNode>,
}

impl BkNode {
    fn new(word: String) -> Self {
        BkNode {
            word,
            children: HashMap::new(),
        }
    }
}

/// A BK-tree over strings, keyed by an edit-distance metric.
///
/// The tree is append-only: nodes are never removed or rewritten once
/// inserted. Duplicate words are allowed and become distinct nodes routed
/// through the distance-0 edge; deduplication is the caller's concern.
///
/// # Examples
///
/// ```
/// use orthos::spelling::bktree::BkTree;
///
/// let mut tree = BkTree::new();
/// tree.insert("cat");
/// tree.insert("cart");
///
/// let matches = tree.search("cta", 1, 10, &[]);
/// assert_eq!(matches, vec!["cat".to_string()]);
/// ```
#[derive(Debug, Clone)]
pub struct BkTree {
    root: Option<BkNode>,
    metric: Metric,
    node_count: usize,
}

impl BkTree {
    /// Create an empty tree using Damerau-Levenshtein distance.
    pub fn new() -> Self {
        Self::with_metric(damerau_levenshtein_distance)
    }

    /// Create an empty tree with a custom distance metric.
    ///
    /// The metric must be symmetric, zero iff its inputs are equal, and
    /// satisfy the triangle inequality; search misses matches otherwise.
    pub fn with_metric(metric: Metric) -> Self {
        BkTree {
            root: None,
            metric,
            node_count: 0,
        }
    }

    /// Number of nodes in the tree, duplicates included.
    pub fn len(&self) -> usize {
        self.node_count
    }

    /// Check whether the tree holds no words.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Insert a word into the tree.
    ///
    /// The first insertion becomes the root. Every later insertion walks
    /// from the root along the edge keyed by the distance to the current
    /// node's word, and becomes a new leaf where no such edge exists.
    pub fn insert(&mut self, word: &str) {
        let metric = self.metric;
        self.node_count += 1;

        let Some(root) = self.root.as_mut() else {
            self.root = Some(BkNode::new(word.to_string()));
            return;
        };

        let mut node = root;
        loop {
            let distance = metric(&node.word, word);
            match node.children.entry(distance) {
                Entry::Occupied(child) => node = child.into_mut(),
                Entry::Vacant(slot) => {
                    slot.insert(BkNode::new(word.to_string()));
                    return;
                }
            }
        }
    }

    /// Find up to `max_results` distinct words within `max_distance` of
    /// `query`, extending `seed`.
    ///
    /// Seed words are preserved at the front of the result, in order, and
    /// count toward the cap. Collection order follows tree traversal
    /// (insertion order within a distance bucket), not a global sort by
    /// distance, and is deterministic for a given tree.
    ///
    /// A `max_results` of 0, or a seed already at the cap, returns the
    /// deduplicated seed without visiting the tree.
    pub fn search(
        &self,
        query: &str,
        max_distance: usize,
        max_results: usize,
        seed: &[String],
    ) -> Vec<String> {
        let mut results = Vec::new();
        let mut seen = HashSet::new();
        for word in seed {
            if seen.insert(word.clone()) {
                results.push(word.clone());
            }
        }

        // A seed at or past the cap comes back as-is; the tree never
        // shrinks what the caller already collected.
        if results.len() >= max_results {
            return results;
        }

        if let Some(root) = &self.root {
            self.search_node(root, query, max_distance, max_results, &mut results, &mut seen);
        }

        results
    }

    /// Recursive search step. Returns `false` once the cap is reached,
    /// which stops the recursion at every level of the call stack.
    fn search_node(
        &self,
        node: &BkNode,
        query: &str,
        max_distance: usize,
        max_results: usize,
        results: &mut Vec<String>,
        seen: &mut HashSet<String>,
    ) -> bool {
        let distance = (self.metric)(&node.word, query);

        if distance <= max_distance && seen.insert(node.word.clone()) {
            results.push(node.word.clone());
        }

        if results.len() >= max_results {
            return false;
        }

        // By the triangle inequality only edges keyed within max_distance
        // of this node's own distance can lead to a match; every other
        // subtree is skipped without being visited. Keys are unsigned, so
        // the saturating lower bound visits the same keys as the signed
        // range would.
        for key in distance.saturating_sub(max_distance)..=distance + max_distance {
            if let Some(child) = node.children.get(&key)
                && !self.search_node(child, query, max_distance, max_results, results, seen)
            {
                return false;
            }
        }

        true
    }
}

impl Default for BkTree {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spelling::distance::levenshtein_distance;

    fn sample_tree() -> BkTree {
        let mut tree = BkTree::new();
        for word in ["book", "books", "cake", "boo", "boon", "cook", "cape", "cart"] {
            tree.insert(word);
        }
        tree
    }

    #[test]
    fn test_empty_tree() {
        let tree = BkTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert!(tree.search("book", 2, 10, &[]).is_empty());
    }

    #[test]
    fn test_insert_and_search() {
        let tree = sample_tree();
        assert_eq!(tree.len(), 8);

        let matches = tree.search("book", 1, 100, &[]);
        assert!(matches.contains(&"book".to_string()));
        assert!(matches.contains(&"books".to_string()));
        assert!(matches.contains(&"boo".to_string()));
        assert!(matches.contains(&"boon".to_string()));
        assert!(matches.contains(&"cook".to_string()));
        assert!(!matches.contains(&"cake".to_string()));
    }

    #[test]
    fn test_exact_match_only_at_zero_radius() {
        let tree = sample_tree();
        assert_eq!(tree.search("book", 0, 10, &[]), vec!["book".to_string()]);
        assert!(tree.search("bok", 0, 10, &[]).is_empty());
    }

    #[test]
    fn test_cap_short_circuits() {
        let tree = sample_tree();
        let matches = tree.search("book", 2, 3, &[]);
        assert_eq!(matches.len(), 3);
    }

    #[test]
    fn test_zero_cap_returns_seed_unchanged() {
        let tree = sample_tree();
        let seed = vec!["boot".to_string()];
        assert_eq!(tree.search("book", 2, 0, &seed), seed);

        // A seed already at the cap must not grow either.
        assert_eq!(tree.search("book", 2, 1, &seed), seed);
    }

    #[test]
    fn test_seed_preserved_and_counted() {
        let tree = sample_tree();
        let seed = vec!["boot".to_string()];
        let matches = tree.search("book", 1, 3, &seed);
        assert_eq!(matches[0], "boot");
        assert_eq!(matches.len(), 3);
    }

    #[test]
    fn test_seed_deduplicated_against_tree() {
        let tree = sample_tree();
        let seed = vec!["book".to_string()];
        let matches = tree.search("book", 1, 10, &seed);
        assert_eq!(
            matches.iter().filter(|w| w.as_str() == "book").count(),
            1
        );
    }

    #[test]
    fn test_duplicate_insertion_is_harmless() {
        let mut tree = sample_tree();
        let before = tree.search("book", 2, 100, &[]);

        tree.insert("book");
        tree.insert("book");
        assert_eq!(tree.len(), 10);

        let after = tree.search("book", 2, 100, &[]);
        assert_eq!(before, after);
    }

    #[test]
    fn test_search_is_deterministic() {
        let tree = sample_tree();
        let first = tree.search("boek", 2, 10, &[]);
        for _ in 0..5 {
            assert_eq!(tree.search("boek", 2, 10, &[]), first);
        }
    }

    #[test]
    fn test_transposition_found_at_radius_one() {
        let mut tree = BkTree::new();
        tree.insert("cat");
        tree.insert("cast");
        assert_eq!(tree.search("cta", 1, 10, &[]), vec!["cat".to_string()]);
    }

    #[test]
    fn test_custom_metric() {
        let mut tree = BkTree::with_metric(levenshtein_distance);
        tree.insert("cat");

        // Plain Levenshtein sees a transposition as two edits.
        assert!(tree.search("cta", 1, 10, &[]).is_empty());
        assert_eq!(tree.search("cta", 2, 10, &[]), vec!["cat".to_string()]);
    }
}
