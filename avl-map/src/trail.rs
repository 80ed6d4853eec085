//! Path trail (spec.md §4.2).
//!
//! A `Trail` records one root-to-leaf descent as a sequence of
//! `(node, direction taken from that node)` frames, so insert and
//! delete can retrace upward and repair balance factors without the
//! tree carrying parent pointers. It is local to a single map
//! operation and never stored on `AvlMap` itself (spec.md §3, invariant
//! 6: "no parent pointers leak out").
//!
//! Backing storage is a [`smallvec::SmallVec`] with room for
//! [`INLINE_TRAIL_CAPACITY`] frames inline before spilling to the heap.
//! That constant comes from spec.md §3's height bound
//! (`1.44 · log2(n + 1.065) − 0.328`), which tops out under 91 for any
//! `usize`-representable `n` on a 64-bit target — so in practice a
//! `Trail` never spills for this crate's entire usable range, and the
//! heap fallback exists only as a safety net, not a load-bearing path.

use smallvec::SmallVec;

use crate::arena::NodeId;
use crate::node::Direction;

/// See spec.md §3: bounds the height of any representable AVL tree.
pub(crate) const INLINE_TRAIL_CAPACITY: usize = 96;

pub(crate) type Trail = SmallVec<[(NodeId, Direction); INLINE_TRAIL_CAPACITY]>;

/// The edge a rotation result should be written back through: either
/// the tree's root slot, or a specific child of a specific node.
///
/// This is spec.md §4.4's "rotate_root", generalized to also describe
/// edges discovered mid-retrace during delete.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Edge {
    Root,
    Child(NodeId, Direction),
}

impl Edge {
    /// The edge pointing at the node reached by following `dir` out of `from`.
    pub(crate) fn step(from: NodeId, dir: Direction) -> Edge {
        Edge::Child(from, dir)
    }
}

/// Writes `new_child` through `edge`, onto the tree's root slot or a
/// specific node's child slot.
pub(crate) fn set_edge<K, V>(
    arena: &mut crate::arena::Arena<K, V>,
    root: &mut Option<NodeId>,
    edge: Edge,
    new_child: NodeId,
) {
    match edge {
        Edge::Root => *root = Some(new_child),
        Edge::Child(parent, dir) => arena[parent].set_child(dir, Some(new_child)),
    }
}
