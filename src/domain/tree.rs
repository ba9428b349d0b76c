//! Unbalanced binary search tree over arena-allocated nodes.

use std::cmp::Ordering;
use std::fmt;

use generational_arena::{Arena, Index};
use tracing::instrument;

/// Tree node: one key and two optional child links into the arena.
#[derive(Debug)]
struct Node<K> {
    key: K,
    left: Option<Index>,
    right: Option<Index>,
}

impl<K> Node<K> {
    fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }
}

/// Arena-backed unbalanced binary search tree.
///
/// Keys route left when strictly smaller than the current node and right
/// otherwise, so equal keys accumulate in the right subtree: inserting a key
/// that is already present adds a second node (multiset behavior). No
/// rebalancing takes place; the height depends on insertion order and
/// degenerates to the node count for sorted input.
///
/// Uses a generational arena for node storage. Child links are arena indices;
/// every node except the root is referenced by exactly one parent link, and
/// the arena's element count is the key count.
#[derive(Debug)]
pub struct SearchTree<K> {
    arena: Arena<Node<K>>,
    root: Option<Index>,
}

impl<K> Default for SearchTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> SearchTree<K> {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Number of stored keys, duplicates included. O(1).
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the tree in nodes, 0 for an empty tree.
    #[instrument(level = "debug", skip_all)]
    pub fn depth(&self) -> usize {
        match self.root {
            Some(root) => self.subtree_depth(root),
            None => 0,
        }
    }

    fn subtree_depth(&self, idx: Index) -> usize {
        let node = &self.arena[idx];
        let left = node.left.map(|c| self.subtree_depth(c)).unwrap_or(0);
        let right = node.right.map(|c| self.subtree_depth(c)).unwrap_or(0);
        1 + left.max(right)
    }

    /// In-order iterator over the keys, smallest first.
    pub fn iter(&self) -> InOrderIter<'_, K> {
        InOrderIter::new(self)
    }
}

impl<K: Ord> SearchTree<K> {
    /// Insert `key` unconditionally, growing the tree by one node even when
    /// an equal key is already present.
    ///
    /// Walks from the root, descending left for strictly smaller keys and
    /// right otherwise, and attaches a new leaf at the first empty slot.
    #[instrument(level = "trace", skip_all)]
    pub fn insert(&mut self, key: K) {
        let Some(mut cur) = self.root else {
            self.root = Some(self.arena.insert(Node::new(key)));
            return;
        };
        loop {
            let goes_left = key < self.arena[cur].key;
            let child = if goes_left {
                self.arena[cur].left
            } else {
                self.arena[cur].right
            };
            match child {
                Some(next) => cur = next,
                None => {
                    let leaf = self.arena.insert(Node::new(key));
                    let slot = if goes_left {
                        &mut self.arena[cur].left
                    } else {
                        &mut self.arena[cur].right
                    };
                    *slot = Some(leaf);
                    return;
                }
            }
        }
    }

    /// Exact-match membership test. O(height).
    pub fn contains(&self, key: &K) -> bool {
        let mut cur = self.root;
        while let Some(idx) = cur {
            let node = &self.arena[idx];
            match key.cmp(&node.key) {
                Ordering::Equal => return true,
                Ordering::Less => cur = node.left,
                Ordering::Greater => cur = node.right,
            }
        }
        false
    }

    /// Smallest key, `None` for an empty tree.
    pub fn min(&self) -> Option<&K> {
        let mut cur = self.root?;
        while let Some(left) = self.arena[cur].left {
            cur = left;
        }
        Some(&self.arena[cur].key)
    }

    /// Largest key, `None` for an empty tree.
    pub fn max(&self) -> Option<&K> {
        let mut cur = self.root?;
        while let Some(right) = self.arena[cur].right {
            cur = right;
        }
        Some(&self.arena[cur].key)
    }

    /// Key before `key`, computed relative to the root.
    ///
    /// This is deliberately NOT the conventional in-order predecessor. For
    /// compatibility with the reference behavior the walk is anchored at the
    /// root: `None` when the tree is empty, when the root itself holds `key`,
    /// or when `key` is absent; otherwise the result is the maximum of the
    /// subtree under the root's left child (`None` when the root has no left
    /// child). When the queried key sits in that subtree's rightmost
    /// position, the query returns the key itself.
    pub fn predecessor(&self, key: &K) -> Option<&K> {
        let root = self.root?;
        if self.arena[root].key == *key || !self.contains(key) {
            return None;
        }
        let mut cur = self.arena[root].left?;
        while let Some(right) = self.arena[cur].right {
            cur = right;
        }
        Some(&self.arena[cur].key)
    }

    /// Key after `key`, computed relative to the root.
    ///
    /// Mirror image of [`SearchTree::predecessor`], with the same
    /// root-anchored compatibility behavior: the result is the minimum of the
    /// subtree under the root's right child.
    pub fn successor(&self, key: &K) -> Option<&K> {
        let root = self.root?;
        if self.arena[root].key == *key || !self.contains(key) {
            return None;
        }
        let mut cur = self.arena[root].right?;
        while let Some(left) = self.arena[cur].left {
            cur = left;
        }
        Some(&self.arena[cur].key)
    }

    /// Remove the first-found node holding `key`.
    ///
    /// Returns `false` without mutation when `key` is absent. A node with at
    /// most one child is replaced by that child; a two-child node is spliced:
    /// its left subtree takes its position and its right subtree becomes the
    /// right child of the left subtree's rightmost node.
    #[instrument(level = "trace", skip_all)]
    pub fn remove(&mut self, key: &K) -> bool {
        // Locate the target and the parent link pointing at it.
        let mut parent: Option<(Index, bool)> = None;
        let mut cur = self.root;
        let target = loop {
            let Some(idx) = cur else {
                return false;
            };
            match key.cmp(&self.arena[idx].key) {
                Ordering::Equal => break idx,
                Ordering::Less => {
                    parent = Some((idx, true));
                    cur = self.arena[idx].left;
                }
                Ordering::Greater => {
                    parent = Some((idx, false));
                    cur = self.arena[idx].right;
                }
            }
        };

        let Some(removed) = self.arena.remove(target) else {
            return false;
        };
        let replacement = match (removed.left, removed.right) {
            (None, child) | (child, None) => child,
            (Some(left), Some(right)) => {
                let mut rightmost = left;
                while let Some(next) = self.arena[rightmost].right {
                    rightmost = next;
                }
                self.arena[rightmost].right = Some(right);
                Some(left)
            }
        };

        match parent {
            Some((idx, true)) => self.arena[idx].left = replacement,
            Some((idx, false)) => self.arena[idx].right = replacement,
            None => self.root = replacement,
        }
        true
    }
}

impl<K: fmt::Display> SearchTree<K> {
    /// Render the tree shape for terminal display.
    pub fn render(&self) -> termtree::Tree<String> {
        match self.root {
            Some(root) => self.render_node(root),
            None => termtree::Tree::new("(empty)".to_string()),
        }
    }

    fn render_node(&self, idx: Index) -> termtree::Tree<String> {
        let node = &self.arena[idx];
        let leaves: Vec<_> = [node.left, node.right]
            .into_iter()
            .flatten()
            .map(|child| self.render_node(child))
            .collect();
        termtree::Tree::new(node.key.to_string()).with_leaves(leaves)
    }
}

pub struct InOrderIter<'a, K> {
    tree: &'a SearchTree<K>,
    stack: Vec<Index>,
    descend: Option<Index>,
}

impl<'a, K> InOrderIter<'a, K> {
    fn new(tree: &'a SearchTree<K>) -> Self {
        Self {
            tree,
            stack: Vec::new(),
            descend: tree.root,
        }
    }
}

impl<'a, K> Iterator for InOrderIter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(idx) = self.descend {
            self.stack.push(idx);
            self.descend = self.tree.arena[idx].left;
        }
        let idx = self.stack.pop()?;
        let node = &self.tree.arena[idx];
        self.descend = node.right;
        Some(&node.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_of(keys: &[&str]) -> SearchTree<String> {
        let mut tree = SearchTree::new();
        for key in keys {
            tree.insert(key.to_string());
        }
        tree
    }

    fn in_order(tree: &SearchTree<String>) -> Vec<String> {
        tree.iter().cloned().collect()
    }

    #[test]
    fn given_empty_tree_when_querying_then_everything_is_absent() {
        let tree: SearchTree<String> = SearchTree::new();

        assert_eq!(tree.len(), 0);
        assert!(tree.is_empty());
        assert!(tree.min().is_none());
        assert!(tree.max().is_none());
        assert!(tree.predecessor(&"a".to_string()).is_none());
        assert!(tree.successor(&"a".to_string()).is_none());
        assert!(!tree.contains(&"a".to_string()));
        assert_eq!(tree.depth(), 0);
    }

    #[test]
    fn given_three_words_when_inserted_then_contains_and_bounds_hold() {
        let tree = tree_of(&["b", "a", "c"]);

        assert!(tree.contains(&"a".to_string()));
        assert_eq!(tree.min().map(String::as_str), Some("a"));
        assert_eq!(tree.max().map(String::as_str), Some("c"));
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn given_any_insert_order_when_iterating_then_keys_are_sorted() {
        let tree = tree_of(&["m", "c", "x", "a", "k", "t", "z", "b"]);

        let keys = in_order(&tree);
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
        assert_eq!(keys.len(), tree.len());
    }

    #[test]
    fn given_duplicate_keys_when_inserted_then_both_are_kept() {
        let mut tree = tree_of(&["b", "a", "b"]);

        assert_eq!(tree.len(), 3);
        assert_eq!(in_order(&tree), vec!["a", "b", "b"]);

        // Removing one occurrence leaves the other in place.
        assert!(tree.remove(&"b".to_string()));
        assert_eq!(tree.len(), 2);
        assert!(tree.contains(&"b".to_string()));
    }

    // The predecessor/successor walk is anchored at the root, not at the
    // node holding the key. Shape for ["m", "f", "t", "a"]:
    //
    //        m
    //       / \
    //      f   t
    //     /
    //    a
    #[test]
    fn given_root_anchored_walk_when_asking_predecessor_then_left_subtree_max_wins() {
        let tree = tree_of(&["m", "f", "t", "a"]);

        // Max of the subtree under m's left child is "f" itself.
        assert_eq!(tree.predecessor(&"f".to_string()).map(String::as_str), Some("f"));
        assert_eq!(tree.predecessor(&"t".to_string()).map(String::as_str), Some("f"));
        assert_eq!(tree.predecessor(&"a".to_string()).map(String::as_str), Some("f"));
    }

    #[test]
    fn given_root_anchored_walk_when_asking_successor_then_right_subtree_min_wins() {
        let tree = tree_of(&["m", "f", "t", "a"]);

        assert_eq!(tree.successor(&"a".to_string()).map(String::as_str), Some("t"));
        assert_eq!(tree.successor(&"f".to_string()).map(String::as_str), Some("t"));
    }

    #[test]
    fn given_root_key_when_asking_neighbors_then_none_despite_true_neighbors() {
        let tree = tree_of(&["m", "f", "t", "a"]);

        assert!(tree.predecessor(&"m".to_string()).is_none());
        assert!(tree.successor(&"m".to_string()).is_none());
    }

    #[test]
    fn given_absent_key_when_asking_neighbors_then_none() {
        let tree = tree_of(&["m", "f", "t", "a"]);

        assert!(tree.predecessor(&"zzz".to_string()).is_none());
        assert!(tree.successor(&"zzz".to_string()).is_none());
    }

    #[test]
    fn given_root_without_matching_child_when_asking_neighbors_then_none() {
        // "b" has no left child, so a predecessor query for any present
        // non-root key comes back empty.
        let tree = tree_of(&["b", "c", "d"]);

        assert!(tree.predecessor(&"c".to_string()).is_none());
    }

    #[test]
    fn given_two_child_node_when_removed_then_in_order_sequence_only_loses_that_key() {
        let mut tree = tree_of(&["m", "f", "t", "a", "k", "s", "z"]);
        let before = in_order(&tree);

        assert!(tree.remove(&"f".to_string()));

        let expected: Vec<String> = before.into_iter().filter(|k| k != "f").collect();
        assert_eq!(in_order(&tree), expected);
        assert_eq!(tree.len(), 6);
    }

    #[test]
    fn given_root_with_two_children_when_removed_then_splice_preserves_order() {
        let mut tree = tree_of(&["m", "f", "t", "a", "k"]);

        assert!(tree.remove(&"m".to_string()));

        assert_eq!(in_order(&tree), vec!["a", "f", "k", "t"]);
        assert!(!tree.contains(&"m".to_string()));
    }

    #[test]
    fn given_sole_root_leaf_when_removed_then_tree_is_empty() {
        let mut tree = tree_of(&["only"]);

        assert!(tree.remove(&"only".to_string()));

        assert_eq!(tree.len(), 0);
        assert!(tree.is_empty());
        assert!(tree.min().is_none());
    }

    #[test]
    fn given_absent_key_when_removed_then_false_and_size_unchanged() {
        let mut tree = tree_of(&["m", "f", "t"]);

        assert!(!tree.remove(&"zzz".to_string()));

        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn given_all_keys_removed_when_done_then_tree_is_empty() {
        let words = ["m", "c", "x", "a", "k", "t", "z"];
        let mut tree = tree_of(&words);

        for word in words {
            assert!(tree.remove(&word.to_string()), "remove {word}");
        }

        assert_eq!(tree.len(), 0);
        assert!(tree.iter().next().is_none());
    }

    #[test]
    fn given_sorted_insertion_when_measuring_depth_then_tree_degenerates() {
        let tree = tree_of(&["a", "b", "c", "d", "e"]);

        assert_eq!(tree.depth(), 5);
    }

    #[test]
    fn given_repeated_lookups_when_nothing_changes_then_answers_are_stable() {
        let tree = tree_of(&["m", "f", "t"]);

        for _ in 0..3 {
            assert!(tree.contains(&"f".to_string()));
            assert!(!tree.contains(&"q".to_string()));
        }
    }

    #[test]
    fn given_tree_when_rendered_then_root_is_the_label() {
        let tree = tree_of(&["m", "f", "t"]);

        let rendered = tree.render().to_string();
        assert!(rendered.starts_with('m'));
        assert!(rendered.contains('f'));
        assert!(rendered.contains('t'));
    }
}
