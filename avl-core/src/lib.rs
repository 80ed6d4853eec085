//! # AVL Core
//!
//! Core traits and error types shared by `avl-map`.
//!
//! This crate has no knowledge of trees, nodes, or balancing; it only
//! describes the vocabulary that ordered, sized containers are built from.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod error;
pub mod traits;

pub use error::{AvlError, Result};
pub use traits::*;
