//! Parsed document tree.
//!
//! The tree is produced by the extension-aware Markdown parser and handed to
//! this crate read-only. Nodes live in an arena and link to each other with
//! parent / first-child / next-sibling ids:
//!
//! ```
//! use fiftyohm_html::tree::{Kind, NodeId, Tree};
//!
//! let mut tree = Tree::new();
//! let para = tree.append(NodeId::ROOT, Kind::Paragraph);
//! tree.append(para, Kind::text("CQ CQ de DL0ABC"));
//!
//! assert_eq!(tree.node(NodeId::ROOT).unwrap().kind, Kind::Document);
//! assert_eq!(tree.children(para).count(), 1);
//! ```

mod node;
#[cfg(feature = "cli")]
mod source;

pub use node::{Alignment, Kind, KindTag, Node, NodeId};
#[cfg(feature = "cli")]
pub use source::SourceNode;

/// A parsed document held in an arena.
#[derive(Debug, Clone)]
pub struct Tree {
    /// All nodes in the tree (index 0 is always the root).
    nodes: Vec<Node>,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Tree {
    /// Create an empty document with a root node.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(Kind::Document)],
        }
    }

    /// Get the root node ID.
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0 as usize)
    }

    /// Get the kind of a node, if it exists.
    pub fn kind(&self, id: NodeId) -> Option<&Kind> {
        self.node(id).map(|n| &n.kind)
    }

    /// Get the number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Allocate a detached node and return its ID.
    pub fn alloc_node(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Allocate a node of the given kind as the last child of `parent`.
    pub fn append(&mut self, parent: NodeId, kind: Kind) -> NodeId {
        let id = self.alloc_node(Node::new(kind));
        self.append_child(parent, id);
        id
    }

    /// Append a child node to a parent.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if let Some(child_node) = self.nodes.get_mut(child.0 as usize) {
            child_node.parent = Some(parent);
        }

        let Some(first_child) = self.nodes.get(parent.0 as usize).map(|n| n.first_child) else {
            return;
        };

        match first_child {
            Some(first) => {
                let last = self.children(parent).last().unwrap_or(first);
                if let Some(last_node) = self.nodes.get_mut(last.0 as usize) {
                    last_node.next_sibling = Some(child);
                }
            }
            None => {
                if let Some(parent_node) = self.nodes.get_mut(parent.0 as usize) {
                    parent_node.first_child = Some(child);
                }
            }
        }
    }

    /// Check whether a node has at least one child.
    pub fn has_children(&self, id: NodeId) -> bool {
        self.node(id).is_some_and(|n| n.first_child.is_some())
    }

    /// Iterate over children of a node.
    pub fn children(&self, parent: NodeId) -> ChildIter<'_> {
        let first_child = self
            .nodes
            .get(parent.0 as usize)
            .and_then(|n| n.first_child);
        ChildIter {
            tree: self,
            current: first_child,
        }
    }

    /// Iterate over a subtree in pre-order, starting at `start`.
    pub fn iter_dfs(&self, start: NodeId) -> DfsIter<'_> {
        DfsIter {
            tree: self,
            stack: vec![start],
        }
    }
}

/// Iterator over children of a node.
pub struct ChildIter<'a> {
    tree: &'a Tree,
    current: Option<NodeId>,
}

impl Iterator for ChildIter<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;
        self.current = self
            .tree
            .nodes
            .get(current.0 as usize)
            .and_then(|n| n.next_sibling);
        Some(current)
    }
}

/// Pre-order depth-first iterator.
pub struct DfsIter<'a> {
    tree: &'a Tree,
    stack: Vec<NodeId>,
}

impl Iterator for DfsIter<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;

        // Push children in reverse order so they're visited left-to-right
        let mut children: Vec<NodeId> = self.tree.children(current).collect();
        children.reverse();
        self.stack.extend(children);

        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_creation() {
        let tree = Tree::new();
        assert_eq!(tree.node_count(), 1);
        assert_eq!(tree.root(), NodeId::ROOT);

        let root = tree.node(NodeId::ROOT).unwrap();
        assert_eq!(root.kind, Kind::Document);
        assert!(root.parent.is_none());
    }

    #[test]
    fn test_children_keep_insertion_order() {
        let mut tree = Tree::new();
        let a = tree.append(NodeId::ROOT, Kind::Paragraph);
        let b = tree.append(NodeId::ROOT, Kind::Dash);
        let c = tree.append(NodeId::ROOT, Kind::Paragraph);

        let children: Vec<_> = tree.children(NodeId::ROOT).collect();
        assert_eq!(children, vec![a, b, c]);
        assert_eq!(tree.node(b).unwrap().parent, Some(NodeId::ROOT));
        assert!(!tree.has_children(b));
    }

    #[test]
    fn test_dfs_iteration() {
        let mut tree = Tree::new();
        let para1 = tree.append(NodeId::ROOT, Kind::Paragraph);
        let text = tree.append(para1, Kind::text("73"));
        let para2 = tree.append(NodeId::ROOT, Kind::Paragraph);

        let nodes: Vec<_> = tree.iter_dfs(NodeId::ROOT).collect();
        assert_eq!(nodes, vec![NodeId::ROOT, para1, text, para2]);
    }
}
