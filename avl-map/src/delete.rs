//! Delete (spec.md §4.5).
//!
//! Unlike insert, a deletion can require rebalancing at more than one
//! ancestor, so the full root-to-parent trail is retraced (not just
//! the suffix below a single anchor). Retrace stops the moment a node's
//! balance factor lands on ±1, since that means the subtree's height
//! did not change and no ancestor further up needs revisiting.

use core::cmp::Ordering;

use avl_core::HeterogeneousOrd;

use crate::arena::{Arena, NodeId};
use crate::node::Direction;
use crate::rotation::{rotate_left, rotate_left_right, rotate_right, rotate_right_left};
use crate::trail::{set_edge, Edge, Trail};

/// Descends toward a key matching `probe`, recording `(node, direction
/// taken from that node)` for every node strictly above the match.
fn find_with_trail<K, V, Q>(
    arena: &Arena<K, V>,
    root: NodeId,
    probe: &Q,
    trail: &mut Trail,
) -> Option<NodeId>
where
    Q: HeterogeneousOrd<K> + ?Sized,
{
    let mut current = root;
    loop {
        let node = &arena[current];
        match probe.cmp(&node.key) {
            Ordering::Equal => return Some(current),
            Ordering::Less => {
                trail.push((current, Direction::Left));
                current = node.left?;
            }
            Ordering::Greater => {
                trail.push((current, Direction::Right));
                current = node.right?;
            }
        }
    }
}

/// Removes the entry matching `probe`, returning its owned key and
/// value.
pub(crate) fn remove<K, V, Q>(
    arena: &mut Arena<K, V>,
    root: &mut Option<NodeId>,
    len: &mut usize,
    probe: &Q,
) -> Option<(K, V)>
where
    Q: HeterogeneousOrd<K> + ?Sized,
{
    let root_id = (*root)?;
    let mut trail: Trail = Trail::new();
    let target = find_with_trail(arena, root_id, probe, &mut trail)?;

    // A node with two children is never the one physically unlinked:
    // its in-order successor (the left-most node of its right subtree,
    // which has no left child of its own) is spliced out instead, and
    // its key/value take the target's place.
    let physical = if arena[target].left.is_some() && arena[target].right.is_some() {
        trail.push((target, Direction::Right));
        let mut succ = arena[target].right.expect("checked above");
        while let Some(left) = arena[succ].left {
            trail.push((succ, Direction::Left));
            succ = left;
        }
        succ
    } else {
        target
    };

    let edge_to_physical = match trail.last() {
        Some(&(parent, dir)) => Edge::step(parent, dir),
        None => Edge::Root,
    };

    let removed = arena.dealloc(physical);
    let child = removed.left.or(removed.right);
    match child {
        Some(c) => set_edge(arena, root, edge_to_physical, c),
        None => match edge_to_physical {
            Edge::Root => *root = None,
            Edge::Child(parent, dir) => arena[parent].set_child(dir, None),
        },
    }

    let (out_key, out_value) = if physical == target {
        (removed.key, removed.value)
    } else {
        let old_key = core::mem::replace(&mut arena[target].key, removed.key);
        let old_value = core::mem::replace(&mut arena[target].value, removed.value);
        (old_key, old_value)
    };

    *len -= 1;
    retrace_and_rebalance(arena, root, &trail);
    Some((out_key, out_value))
}

fn retrace_and_rebalance<K, V>(arena: &mut Arena<K, V>, root: &mut Option<NodeId>, trail: &Trail) {
    for i in (0..trail.len()).rev() {
        let (node_id, dir) = trail[i];
        arena[node_id].balance_factor += match dir {
            Direction::Left => 1,
            Direction::Right => -1,
        };
        let bf = arena[node_id].balance_factor;

        if bf == 1 || bf == -1 {
            break;
        }
        if bf == 0 {
            continue;
        }

        let (new_subtree_root, height_decreased) = rebalance(arena, node_id, bf);
        let edge = if i == 0 {
            Edge::Root
        } else {
            Edge::step(trail[i - 1].0, trail[i - 1].1)
        };
        set_edge(arena, root, edge, new_subtree_root);
        if !height_decreased {
            break;
        }
    }
}

/// Chooses and applies the rotation needed at `t`, whose balance
/// factor (`bf`, ±2) was just produced by retrace. Returns the new
/// subtree root and whether the subtree's height decreased — a `false`
/// here (the sibling-balanced single-rotation case) stops retrace,
/// since no ancestor further up saw a height change.
fn rebalance<K, V>(arena: &mut Arena<K, V>, t: NodeId, bf: i8) -> (NodeId, bool) {
    if bf == 2 {
        let m = arena[t].right.expect("bf=+2 node must have a right child");
        match arena[m].balance_factor {
            0 => {
                let new_root = rotate_left(arena, t, m);
                arena[t].balance_factor = 1;
                arena[m].balance_factor = -1;
                (new_root, false)
            }
            1 => {
                let new_root = rotate_left(arena, t, m);
                arena[t].balance_factor = 0;
                arena[m].balance_factor = 0;
                (new_root, true)
            }
            _ => {
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
                    _ => unreachable!("balance factor out of range during delete retrace"),
                }
                arena[b].balance_factor = 0;
                (new_root, true)
            }
        }
    } else {
        debug_assert_eq!(bf, -2);
        let m = arena[t].left.expect("bf=-2 node must have a left child");
        match arena[m].balance_factor {
            0 => {
                let new_root = rotate_right(arena, t, m);
                arena[t].balance_factor = -1;
                arena[m].balance_factor = 1;
                (new_root, false)
            }
            -1 => {
                let new_root = rotate_right(arena, t, m);
                arena[t].balance_factor = 0;
                arena[m].balance_factor = 0;
                (new_root, true)
            }
            _ => {
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
                    _ => unreachable!("balance factor out of range during delete retrace"),
                }
                arena[b].balance_factor = 0;
                (new_root, true)
            }
        }
    }
}
