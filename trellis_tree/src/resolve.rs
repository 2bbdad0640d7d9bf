// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Focusable-set resolution.

use alloc::vec::Vec;

use crate::types::Selector;
use crate::view::TreeView;

/// Compute the ordered focusable set of `container`.
///
/// The result is the container's descendants, in host tree order, filtered
/// to nodes that are attached, enabled, laid out, and match `selector`. A
/// detached or unknown container yields an empty set.
///
/// Callers resolve on every keypress rather than caching the result; see
/// the crate docs for why that trade is deliberate.
pub fn resolve<K, T>(tree: &T, container: K, selector: &Selector) -> Vec<K>
where
    K: Copy + Eq,
    T: TreeView<K> + ?Sized,
{
    if !tree.is_attached(container) {
        return Vec::new();
    }
    tree.descendants(container)
        .into_iter()
        .filter(|&node| tree.can_focus(node) && selector.accepts(tree.roles(node)))
        .collect()
}

/// Position of the currently focused node within a resolved set.
///
/// `None` when nothing is focused or focus sits outside the set; the
/// controllers treat that as "before the first element".
pub fn position_of<K: Copy + Eq>(set: &[K], focused: Option<K>) -> Option<usize> {
    focused.and_then(|node| set.iter().position(|&entry| entry == node))
}
