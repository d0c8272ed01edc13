use std::fmt::Display;

use generational_arena::Index;
use termtree::Tree;

use crate::tree::KaryTree;

impl<V: Display, const K: usize> KaryTree<V, K> {
    /// Renders the tree as a [`termtree::Tree`] for terminal inspection,
    /// walking only the public read contract (`root` / `get_node`).
    pub fn to_tree_string(&self) -> Tree<String> {
        match self
            .root()
            .and_then(|idx| self.get_node(idx).map(|node| (idx, node)))
        {
            Some((root_idx, root_node)) => {
                let mut tree = Tree::new(root_node.value().to_string());
                build_subtree(self, root_idx, &mut tree);
                tree
            }
            None => Tree::new("Empty tree".to_string()),
        }
    }
}

fn build_subtree<V: Display, const K: usize>(
    tree: &KaryTree<V, K>,
    idx: Index,
    out: &mut Tree<String>,
) {
    if let Some(node) = tree.get_node(idx) {
        for &child_idx in node.children() {
            if let Some(child) = tree.get_node(child_idx) {
                let mut child_tree = Tree::new(child.value().to_string());
                build_subtree(tree, child_idx, &mut child_tree);
                out.push(child_tree);
            }
        }
    }
}
