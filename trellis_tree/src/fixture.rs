// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An in-memory host tree for tests and demos.
//!
//! [`FixtureTree`] is not a toolkit: it is just enough of a retained tree —
//! parent/child structure, enabled and layout bits, roles, optional
//! geometry — to drive the controllers through [`TreeView`]. Every Trellis
//! crate's test suite builds its scenarios on it.

use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::Rect;
use smallvec::SmallVec;

use crate::types::RoleSet;
use crate::view::TreeView;

/// Node id used by the fixture tree.
pub type NodeId = u32;

#[derive(Clone, Debug)]
struct Node {
    parent: Option<NodeId>,
    children: SmallVec<[NodeId; 4]>,
    roles: RoleSet,
    enabled: bool,
    laid_out: bool,
    rect: Option<Rect>,
}

/// Mutable in-memory tree implementing [`TreeView`].
#[derive(Clone, Debug, Default)]
pub struct FixtureTree {
    nodes: HashMap<NodeId, Node>,
    viewport: Option<Rect>,
}

impl FixtureTree {
    /// Empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node under `parent`, or as a root when `parent` is `None`.
    ///
    /// Children keep insertion order, which is the tree order reported by
    /// [`TreeView::descendants`]. Nodes start enabled and laid out.
    pub fn insert(&mut self, id: NodeId, parent: Option<NodeId>, roles: RoleSet) {
        self.nodes.insert(
            id,
            Node {
                parent,
                children: SmallVec::new(),
                roles,
                enabled: true,
                laid_out: true,
                rect: None,
            },
        );
        if let Some(parent) = parent
            && let Some(node) = self.nodes.get_mut(&parent)
        {
            node.children.push(id);
        }
    }

    /// Enable or disable a node.
    pub fn set_enabled(&mut self, id: NodeId, enabled: bool) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.enabled = enabled;
        }
    }

    /// Give or take away the node's layout (show/hide).
    pub fn set_laid_out(&mut self, id: NodeId, laid_out: bool) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.laid_out = laid_out;
        }
    }

    /// Set the node's bounds.
    pub fn set_rect(&mut self, id: NodeId, rect: Rect) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.rect = Some(rect);
        }
    }

    /// Set the visible region.
    pub fn set_viewport(&mut self, rect: Rect) {
        self.viewport = Some(rect);
    }

    /// Remove a node and its whole subtree from the tree.
    pub fn detach(&mut self, id: NodeId) {
        let Some(node) = self.nodes.remove(&id) else {
            return;
        };
        if let Some(parent) = node.parent
            && let Some(parent) = self.nodes.get_mut(&parent)
        {
            parent.children.retain(|child| *child != id);
        }
        let mut pending: Vec<NodeId> = node.children.into_iter().collect();
        while let Some(child) = pending.pop() {
            if let Some(removed) = self.nodes.remove(&child) {
                pending.extend(removed.children);
            }
        }
    }
}

impl TreeView<NodeId> for FixtureTree {
    fn is_attached(&self, node: NodeId) -> bool {
        self.nodes.contains_key(&node)
    }

    fn is_enabled(&self, node: NodeId) -> bool {
        self.nodes.get(&node).is_some_and(|n| n.enabled)
    }

    fn has_layout(&self, node: NodeId) -> bool {
        self.nodes.get(&node).is_some_and(|n| n.laid_out)
    }

    fn roles(&self, node: NodeId) -> RoleSet {
        self.nodes.get(&node).map(|n| n.roles).unwrap_or_default()
    }

    fn descendants(&self, container: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = match self.nodes.get(&container) {
            Some(node) => node.children.iter().rev().copied().collect(),
            None => return out,
        };
        while let Some(id) = stack.pop() {
            out.push(id);
            if let Some(node) = self.nodes.get(&id) {
                stack.extend(node.children.iter().rev().copied());
            }
        }
        out
    }

    fn rect(&self, node: NodeId) -> Option<Rect> {
        self.nodes.get(&node).and_then(|n| n.rect)
    }

    fn viewport(&self) -> Option<Rect> {
        self.viewport
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn descendants_are_depth_first_in_insertion_order() {
        let mut tree = FixtureTree::new();
        tree.insert(1, None, RoleSet::empty());
        tree.insert(2, Some(1), RoleSet::empty());
        tree.insert(3, Some(2), RoleSet::empty());
        tree.insert(4, Some(1), RoleSet::empty());
        assert_eq!(tree.descendants(1), vec![2, 3, 4]);
    }

    #[test]
    fn detach_removes_the_subtree_and_the_parent_link() {
        let mut tree = FixtureTree::new();
        tree.insert(1, None, RoleSet::empty());
        tree.insert(2, Some(1), RoleSet::empty());
        tree.insert(3, Some(2), RoleSet::empty());
        tree.detach(2);
        assert!(!tree.is_attached(2));
        assert!(!tree.is_attached(3));
        assert!(tree.descendants(1).is_empty());
    }

    #[test]
    fn detach_leaves_siblings_in_place() {
        let mut tree = FixtureTree::new();
        tree.insert(1, None, RoleSet::empty());
        tree.insert(2, Some(1), RoleSet::empty());
        tree.insert(3, Some(1), RoleSet::empty());
        tree.detach(2);
        assert_eq!(tree.descendants(1), vec![3]);
        assert!(tree.is_attached(3));
    }

    #[test]
    fn queries_on_unknown_nodes_degrade_to_nothing() {
        let tree = FixtureTree::new();
        assert!(!tree.is_attached(7));
        assert!(!tree.is_enabled(7));
        assert!(!tree.has_layout(7));
        assert_eq!(tree.roles(7), RoleSet::empty());
        assert!(tree.descendants(7).is_empty());
        assert!(tree.rect(7).is_none());
    }
}
