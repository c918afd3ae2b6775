mod arena;
mod handle;
mod raw_tree;

pub(crate) mod node;

pub(crate) use raw_tree::{RawShelfTree, MIN_ORDER};
