//! Insert (spec.md §4.4).
//!
//! Iterative descent that tracks an "anchor edge" — spec.md's
//! `rotate_root` — reset every time the node currently being visited
//! has a nonzero balance factor, with the trail cleared at the same
//! moment. Only the trail suffix from the anchor to the new leaf is
//! ever retraced; everything above the anchor is provably untouched
//! by this insertion (spec.md §4.4, "Why the 'last nonzero-bf
//! ancestor' trick is correct").

use core::cmp::Ordering;
use core::mem;

use crate::arena::{Arena, NodeId};
use crate::node::{Direction, Node};
use crate::rotation::{rotate_left, rotate_left_right, rotate_right, rotate_right_left};
use crate::trail::{set_edge, Edge, Trail};

enum Descent {
    Found(NodeId),
    Vacant {
        parent: NodeId,
        direction: Direction,
        anchor_edge: Edge,
        trail: Trail,
    },
}

/// Descends from `root` toward `key`, tracking the anchor edge and
/// trail needed to retrace after attaching a new node.
///
/// `root` must be non-empty; the empty-tree case is handled by callers
/// before reaching here, since it needs no trail at all.
fn descend<K: Ord, V>(arena: &Arena<K, V>, root: NodeId, key: &K) -> Descent {
    let mut anchor_edge = Edge::Root;
    let mut prev_edge = Edge::Root;
    let mut trail: Trail = Trail::new();
    let mut current = root;

    loop {
        let node = &arena[current];
        if node.balance_factor != 0 {
            anchor_edge = prev_edge;
            trail.clear();
        }

        let (direction, child) = match key.cmp(&node.key) {
            Ordering::Equal => return Descent::Found(current),
            Ordering::Less => (Direction::Left, node.left),
            Ordering::Greater => (Direction::Right, node.right),
        };
        trail.push((current, direction));

        match child {
            Some(next) => {
                prev_edge = Edge::step(current, direction);
                current = next;
            }
            None => {
                return Descent::Vacant {
                    parent: current,
                    direction,
                    anchor_edge,
                    trail,
                }
            }
        }
    }
}

/// Replaces `key`'s value if present (returning the old one) or
/// attaches a new `(key, value)` node and rebalances.
pub(crate) fn insert<K: Ord, V>(
    arena: &mut Arena<K, V>,
    root: &mut Option<NodeId>,
    len: &mut usize,
    key: K,
    value: V,
) -> Option<V> {
    let Some(root_id) = *root else {
        let id = arena.alloc(Node::leaf(key, value));
        *root = Some(id);
        *len = 1;
        return None;
    };

    match descend(arena, root_id, &key) {
        Descent::Found(id) => Some(mem::replace(&mut arena[id].value, value)),
        Descent::Vacant {
            parent,
            direction,
            anchor_edge,
            trail,
        } => {
            let new_id = arena.alloc(Node::leaf(key, value));
            arena[parent].set_child(direction, Some(new_id));
            *len += 1;
            retrace_and_rebalance(arena, root, anchor_edge, trail);
            None
        }
    }
}

/// Returns the node for `key`, inserting `default()`'s result (called
/// at most once, only on a miss) if absent. The `bool` reports whether
/// an insertion happened.
pub(crate) fn get_or_insert_with<K: Ord, V>(
    arena: &mut Arena<K, V>,
    root: &mut Option<NodeId>,
    len: &mut usize,
    key: K,
    default: impl FnOnce() -> V,
) -> (NodeId, bool) {
    let Some(root_id) = *root else {
        let id = arena.alloc(Node::leaf(key, default()));
        *root = Some(id);
        *len = 1;
        return (id, true);
    };

    match descend(arena, root_id, &key) {
        Descent::Found(id) => (id, false),
        Descent::Vacant {
            parent,
            direction,
            anchor_edge,
            trail,
        } => {
            let new_id = arena.alloc(Node::leaf(key, default()));
            arena[parent].set_child(direction, Some(new_id));
            *len += 1;
            retrace_and_rebalance(arena, root, anchor_edge, trail);
            (new_id, true)
        }
    }
}

fn retrace_and_rebalance<K, V>(
    arena: &mut Arena<K, V>,
    root: &mut Option<NodeId>,
    anchor_edge: Edge,
    trail: Trail,
) {
    for &(node_id, dir) in trail.iter() {
        arena[node_id].balance_factor += match dir {
            Direction::Left => -1,
            Direction::Right => 1,
        };
    }

    let anchor_id = trail[0].0;
    let bf = arena[anchor_id].balance_factor;
    if bf == 2 || bf == -2 {
        let new_subtree_root = rebalance(arena, anchor_id, bf);
        set_edge(arena, root, anchor_edge, new_subtree_root);
    }
}

/// Chooses and applies the single or double rotation needed at `t`,
/// whose balance factor (`bf`, ±2) was just produced by retrace.
/// Exactly one rotation occurs per insertion (spec.md §4.4 step 6).
fn rebalance<K, V>(arena: &mut Arena<K, V>, t: NodeId, bf: i8) -> NodeId {
    if bf == 2 {
        let m = arena[t].right.expect("bf=+2 node must have a right child");
        if arena[m].balance_factor == 1 {
            let new_root = rotate_left(arena, t, m);
            arena[t].balance_factor = 0;
            arena[m].balance_factor = 0;
            new_root
        } else {
            debug_assert_eq!(arena[m].balance_factor, -1);
            let b = arena[m]
                .left
                .expect("right-left double rotation needs M's left child");
            let b_bf = arena[b].balance_factor;
            let new_root = rotate_right_left(arena, t, m, b);
            match b_bf {
                1 => {
                    arena[t].balance_factor = 0;
                    arena[m].balance_factor = -1;
                }
                0 => {
                    arena[t].balance_factor = 0;
                    arena[m].balance_factor = 0;
                }
                -1 => {
                    arena[t].balance_factor = 1;
                    arena[m].balance_factor = 0;
                }
                _ => unreachable!("balance factor out of range during insert retrace"),
            }
            arena[b].balance_factor = 0;
            new_root
        }
    } else {
        debug_assert_eq!(bf, -2);
        let m = arena[t].left.expect("bf=-2 node must have a left child");
        if arena[m].balance_factor == -1 {
            let new_root = rotate_right(arena, t, m);
            arena[t].balance_factor = 0;
            arena[m].balance_factor = 0;
            new_root
        } else {
            debug_assert_eq!(arena[m].balance_factor, 1);
            let b = arena[m]
                .right
                .expect("left-right double rotation needs M's right child");
            let b_bf = arena[b].balance_factor;
            let new_root = rotate_left_right(arena, t, m, b);
            match b_bf {
                1 => {
                    arena[t].balance_factor = -1;
                    arena[m].balance_factor = 0;
                }
                0 => {
                    arena[t].balance_factor = 0;
                    arena[m].balance_factor = 0;
                }
                -1 => {
                    arena[t].balance_factor = 0;
                    arena[m].balance_factor = 1;
                }
                _ => unreachable!("balance factor out of range during insert retrace"),
            }
            arena[b].balance_factor = 0;
            new_root
        }
    }
}
