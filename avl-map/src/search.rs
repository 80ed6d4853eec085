//! Search (spec.md §4.3).
//!
//! Iterative BST descent under the caller's ordering, accepting a
//! heterogeneous probe (spec.md §6) so a caller can look a key up by a
//! borrowed view without constructing an owned one. Insert and delete
//! run their own descents (they need to track a path trail alongside
//! the comparisons), so this module only covers the read-only case:
//! `get`, `get_mut`, `contains_key`.

use core::cmp::Ordering;

use avl_core::HeterogeneousOrd;

use crate::arena::{Arena, NodeId};

/// Iterative descent comparing `probe` against each visited key.
/// Returns the matching node, or `None` if no key compares equal.
pub(crate) fn find<K, V, Q>(arena: &Arena<K, V>, root: Option<NodeId>, probe: &Q) -> Option<NodeId>
where
    Q: HeterogeneousOrd<K> + ?Sized,
{
    let mut current = root;
    while let Some(id) = current {
        let node = &arena[id];
        current = match probe.cmp(&node.key) {
            Ordering::Less => node.left,
            Ordering::Greater => node.right,
            Ordering::Equal => return Some(id),
        };
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Node;

    /// 10 with children 5 and 15.
    fn build_tree() -> (Arena<i32, &'static str>, NodeId) {
        let mut arena = Arena::new();
        let root = arena.alloc(Node::leaf(10, "ten"));
        let left = arena.alloc(Node::leaf(5, "five"));
        let right = arena.alloc(Node::leaf(15, "fifteen"));
        arena[root].left = Some(left);
        arena[root].right = Some(right);
        (arena, root)
    }

    #[test]
    fn test_find_hits_root_and_both_children() {
        let (arena, root) = build_tree();
        let left = arena[root].left.unwrap();
        let right = arena[root].right.unwrap();

        assert_eq!(find(&arena, Some(root), &10), Some(root));
        assert_eq!(find(&arena, Some(root), &5), Some(left));
        assert_eq!(find(&arena, Some(root), &15), Some(right));
    }

    #[test]
    fn test_find_misses_absent_key() {
        let (arena, root) = build_tree();
        assert_eq!(find(&arena, Some(root), &7), None);
    }

    #[test]
    fn test_find_on_empty_tree() {
        let arena: Arena<i32, &str> = Arena::new();
        assert_eq!(find(&arena, None, &1), None);
    }

    #[test]
    fn test_find_accepts_heterogeneous_probe() {
        let mut arena: Arena<String, i32> = Arena::new();
        let root = arena.alloc(Node::leaf("hello".to_string(), 1));

        assert_eq!(find(&arena, Some(root), "hello"), Some(root));
        assert_eq!(find(&arena, Some(root), "goodbye"), None);
    }
}
