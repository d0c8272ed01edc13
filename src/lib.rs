//! Generic bounded-arity (K-ary) tree container.
//!
//! A [`KaryTree`] owns its nodes in an index-addressed arena and exposes six
//! traversal cursors — pre-order, post-order, in-order (binary convention),
//! breadth-first, depth-first and heap order — plus an in-place
//! [`KaryTree::heapify`] transform that re-shapes the tree into a complete
//! K-ary min-heap.
//!
//! ```
//! use karytree::KaryTree;
//!
//! let mut tree: KaryTree<i32> = KaryTree::new();
//! tree.add_root(1);
//! tree.add_sub_node(&1, 2)?;
//! tree.add_sub_node(&1, 3)?;
//!
//! let level_order: Vec<i32> = tree.iter_bfs().map(|(_, n)| *n.value()).collect();
//! assert_eq!(level_order, vec![1, 2, 3]);
//! # Ok::<(), karytree::TreeError>(())
//! ```

pub mod complex;
mod display;
pub mod errors;
pub mod iter;
pub mod node;
pub mod tree;
pub mod util;

pub use complex::Complex;
pub use errors::{TreeError, TreeResult};
pub use node::TreeNode;
pub use tree::KaryTree;
