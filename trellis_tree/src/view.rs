// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Read-only view of the host UI tree.

use alloc::vec::Vec;

use kurbo::Rect;

use crate::types::RoleSet;

/// Read-only view of the host's interactive tree.
///
/// The host UI runtime implements this over its own node handles. All
/// queries describe the tree *right now*: controllers call them fresh on
/// every keypress and never hold on to the answers, so the host does not
/// need to notify anyone when nodes appear, hide, or get disabled.
///
/// Geometry is optional. When [`TreeView::rect`] and [`TreeView::viewport`]
/// both report rectangles (in one shared coordinate space), the roving
/// controller can tell whether a focus target is partially clipped and ask
/// for a scroll; a host that tracks no geometry simply never gets scroll
/// requests.
pub trait TreeView<K: Copy + Eq> {
    /// Whether the node is still part of the interactive tree.
    fn is_attached(&self, node: K) -> bool;

    /// Whether the node is enabled. Disabled nodes never receive focus.
    fn is_enabled(&self, node: K) -> bool;

    /// Whether the node currently has allocated layout — i.e. it is not
    /// hidden, collapsed, or inside a hidden ancestor.
    fn has_layout(&self, node: K) -> bool;

    /// Role classification for the node.
    fn roles(&self, node: K) -> RoleSet;

    /// All descendants of `container` in tree order.
    ///
    /// An unknown or detached container yields an empty sequence, never an
    /// error; if the host hits an internal anomaly while walking, it should
    /// report whatever it can (or nothing) rather than panic.
    fn descendants(&self, container: K) -> Vec<K>;

    /// Bounds of the node, or `None` when the host does not track geometry
    /// for it.
    fn rect(&self, node: K) -> Option<Rect> {
        let _ = node;
        None
    }

    /// The currently visible region, in the same space as [`TreeView::rect`].
    /// `None` means everything is considered visible.
    fn viewport(&self) -> Option<Rect> {
        None
    }

    /// Whether the node can receive focus right now: attached, enabled, and
    /// laid out.
    fn can_focus(&self, node: K) -> bool {
        self.is_attached(node) && self.is_enabled(node) && self.has_layout(node)
    }
}
