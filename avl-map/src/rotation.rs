//! Rotation primitives (spec.md §4.1).
//!
//! Every function here is a pure pointer rewiring: it has no failure
//! mode and performs no balance-factor bookkeeping of its own. Callers
//! (insert, delete, and `clear`'s flattening loop) own the
//! balance-factor updates, because the correct update depends on *why*
//! the rotation is happening, not just its shape.

use crate::arena::{Arena, NodeId};

/// `T.right == B`. Returns the new subtree root (`B`).
pub(crate) fn rotate_left<K, V>(arena: &mut Arena<K, V>, t: NodeId, b: NodeId) -> NodeId {
    let b_left = arena[b].left.take();
    arena[t].right = b_left;
    arena[b].left = Some(t);
    b
}

/// `T.left == B`. Returns the new subtree root (`B`).
pub(crate) fn rotate_right<K, V>(arena: &mut Arena<K, V>, t: NodeId, b: NodeId) -> NodeId {
    let b_right = arena[b].right.take();
    arena[t].left = b_right;
    arena[b].right = Some(t);
    b
}

/// `T.left == M`, `M.right == B`. `rotate_left(M, B)` then `rotate_right(T, B)`.
/// Returns the new subtree root (`B`).
pub(crate) fn rotate_left_right<K, V>(
    arena: &mut Arena<K, V>,
    t: NodeId,
    m: NodeId,
    b: NodeId,
) -> NodeId {
    let new_left = rotate_left(arena, m, b);
    arena[t].left = Some(new_left);
    rotate_right(arena, t, new_left)
}

/// `T.right == M`, `M.left == B`. `rotate_right(M, B)` then `rotate_left(T, B)`.
/// Returns the new subtree root (`B`).
pub(crate) fn rotate_right_left<K, V>(
    arena: &mut Arena<K, V>,
    t: NodeId,
    m: NodeId,
    b: NodeId,
) -> NodeId {
    let new_right = rotate_right(arena, m, b);
    arena[t].right = Some(new_right);
    rotate_left(arena, t, new_right)
}
