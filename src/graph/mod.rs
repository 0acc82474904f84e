//! Graph lookup module
//!
//! Provides [`GraphIndex`], the read-only name-keyed view over a graph
//! that the chain walker traverses. The index is built once per
//! extraction; all later steps run in constant time instead of re-scanning
//! the node and initializer lists.

pub mod index;

pub use index::GraphIndex;
