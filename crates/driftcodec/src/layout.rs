// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Flattened layout metadata for one serialized value.
//!
//! A layout is a pre-order walk of the *actual* shape a value was written
//! with, which may differ from the current [`crate::SchemaDescriptor`]. A
//! node's descendants are the maximal contiguous run immediately following
//! it with strictly greater depth; `byte_size` covers the node and all of
//! its descendants. An array node's children are the element's field
//! nodes, written once and shared by every element; there is no
//! per-element or element-shape wrapper node. The producer of the
//! sequence guarantees those invariants; this crate consumes it read-only
//! and does not re-validate them.

/// One node of a pre-order layout flattening.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutNode {
    /// Nesting depth. The root value sits at depth 0, its fields at 1.
    pub depth: u32,
    /// Serialized field name.
    pub name: String,
    /// Exact byte length of the subtree rooted here, descendants included.
    pub byte_size: u32,
}

impl LayoutNode {
    /// Create a layout node.
    pub fn new(depth: u32, name: impl Into<String>, byte_size: u32) -> Self {
        Self {
            depth,
            name: name.into(),
            byte_size,
        }
    }
}

/// A borrowed view into a layout sequence, positioned at one node.
///
/// Passed down to nested decodes so that inner composites reconcile
/// against their own subtree. Cheap to copy; the cursor inside a decode
/// call is always local to that call.
#[derive(Debug, Clone, Copy)]
pub struct LayoutWindow<'a> {
    /// The full node sequence.
    pub nodes: &'a [LayoutNode],
    /// Index of the node this window is positioned at.
    pub index: usize,
}

impl<'a> LayoutWindow<'a> {
    /// Create a window positioned at `index`.
    pub fn new(nodes: &'a [LayoutNode], index: usize) -> Self {
        Self { nodes, index }
    }

    /// The node this window points at.
    pub fn node(&self) -> &'a LayoutNode {
        &self.nodes[self.index]
    }

    /// Window on this node's first child, if the subtree is non-trivial.
    pub fn first_child(&self) -> Option<LayoutWindow<'a>> {
        let next = self.index + 1;
        if next < self.nodes.len() && self.nodes[next].depth > self.node().depth {
            Some(LayoutWindow::new(self.nodes, next))
        } else {
            None
        }
    }
}

/// Index one past the subtree rooted at `index`.
pub fn subtree_end(nodes: &[LayoutNode], index: usize) -> usize {
    let depth = nodes[index].depth;
    let mut end = index + 1;
    while end < nodes.len() && nodes[end].depth > depth {
        end += 1;
    }
    end
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<LayoutNode> {
        vec![
            LayoutNode::new(0, "root", 20),
            LayoutNode::new(1, "a", 4),
            LayoutNode::new(1, "b", 12),
            LayoutNode::new(2, "b0", 4),
            LayoutNode::new(2, "b1", 8),
            LayoutNode::new(1, "c", 4),
        ]
    }

    #[test]
    fn test_subtree_end() {
        let nodes = sample();
        assert_eq!(subtree_end(&nodes, 0), 6);
        assert_eq!(subtree_end(&nodes, 1), 2);
        assert_eq!(subtree_end(&nodes, 2), 5);
        assert_eq!(subtree_end(&nodes, 4), 5);
    }

    #[test]
    fn test_first_child() {
        let nodes = sample();
        let root = LayoutWindow::new(&nodes, 0);
        assert_eq!(root.first_child().unwrap().node().name, "a");

        let leaf = LayoutWindow::new(&nodes, 1);
        assert!(leaf.first_child().is_none());

        let b = LayoutWindow::new(&nodes, 2);
        assert_eq!(b.first_child().unwrap().node().name, "b0");
    }
}
