//! # AVL Map
//!
//! An ordered associative container backed by a height-balanced AVL
//! tree: every node's two subtrees differ in height by at most one,
//! which keeps lookups, insertions, and removals at `O(log n)` even
//! under adversarial insertion order.
//!
//! Nodes live in an arena (`Vec<Option<Node<K, V>>>` plus a free list)
//! and are addressed by a `NodeId` index rather than by pointer or
//! `Box`. Combined with an explicit path trail recorded during each
//! descent, this lets insert, delete, and clear all run iteratively —
//! no recursion, no parent pointers, and no `unsafe`.
//!
//! ## Complexity
//!
//! | Operation      | Average  | Worst    | Space |
//! |----------------|----------|----------|-------|
//! | `get`          | O(log n) | O(log n) | O(1)  |
//! | `insert`       | O(log n) | O(log n) | O(1)  |
//! | `remove`       | O(log n) | O(log n) | O(1)  |
//! | `min` / `max`  | O(log n) | O(log n) | O(1)  |
//! | `iter` (full)  | O(n)     | O(n)     | O(log n) |
//! | `clear`        | O(n)     | O(n)     | O(1)  |
//!
//! ## Example
//!
//! ```rust
//! use avl_map::AvlMap;
//!
//! let mut map: AvlMap<i32, &str> = AvlMap::new();
//! map.insert(10, "ten");
//! map.insert(5, "five");
//! map.insert(15, "fifteen");
//!
//! assert_eq!(map.get(&5), Some(&"five"));
//! assert!(map.is_balanced());
//! assert_eq!(map.min(), Some((&5, &"five")));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod arena;
mod delete;
mod insert;
mod map;
mod node;
mod rotation;
mod search;
mod trail;

pub use map::{AvlMap, Iter};
pub use avl_core::{AvlError, Container, Ordered, Result, Tree};
