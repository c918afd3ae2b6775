//! An ordered set of 32-bit integers backed by a B+ tree with swappable
//! per-node storage.
//!
//! This crate provides [`ShelfSet`], a B+ tree set whose per-node slot array
//! (the "node store") is an interchangeable backend chosen at the type level:
//!
//! - [`ArrayStore`] - two parallel sorted arrays with binary-search lookup
//!   (the default, and the fastest);
//! - [`ListStore`] - a singly linked list with positional traversal;
//! - [`SkipMirrorStore`] - the sorted arrays mirrored by a skip list that is
//!   rebuilt after every mutation, included as a benchmark baseline for the
//!   cost of maintaining an auxiliary ordered index.
//!
//! All three backends satisfy the same [`NodeStore`] contract and the tree is
//! oblivious to which one is in use; dispatch is static, so every store call
//! on the hot path monomorphizes away.
//!
//! # Example
//!
//! ```
//! use shelf_tree::ArraySet;
//!
//! let mut set = ArraySet::with_order(16);
//!
//! set.insert(3);
//! set.insert(1);
//! set.insert(4);
//! assert!(!set.insert(1)); // duplicates are ignored
//!
//! assert!(set.contains(3));
//! assert!(!set.contains(2));
//! assert_eq!(set.len(), 3);
//! assert_eq!(set.height(), 1);
//!
//! set.remove(3);
//! set.remove(3); // removing an absent key is a no-op
//! assert_eq!(set.len(), 2);
//! ```
//!
//! # Structure
//!
//! Keys live only in leaves, which are chained left-to-right for ascending
//! traversal. Internal nodes store copy-up separators: the key at slot `i`
//! equals the minimum key of the subtree rooted at child `i + 1`, so every
//! separator also exists in some leaf. Deletion rebalances with
//! borrow-before-merge, preferring the left sibling.
//!
//! The tree order `M` (maximum children per internal node) is chosen at
//! construction and clamped up to [`MIN_ORDER`].
//!
//! # Benchmarking
//!
//! The `shelf-bench` binary (feature `bench-driver`, on by default) reads
//! insert/search/delete workloads from files and emits per-round CSV timings
//! for any backend; `cargo bench` runs the criterion comparison against
//! `std::collections::BTreeSet`.

#![no_std]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod raw;
mod shelf_set;

pub mod store;

pub use raw::node::Child;
pub use shelf_set::{ArraySet, ListSet, ShelfSet, SkipSet, DEFAULT_ORDER, MIN_ORDER};
pub use store::{ArrayStore, Key, ListStore, NodeStore, SkipMirrorStore, StoreKind};
