// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Explicit active-trap stack for nested overlays.
//!
//! Without a capture-phase dispatch to scope each trap's listener to its
//! own subtree, nesting is coordinated here instead: traps are stacked in
//! activation order, keyed by container identity, and keydown dispatch is
//! routed to the top-of-stack trap only. An inner dropdown's trap therefore
//! never has its Tab handling intercepted by the modal underneath, and
//! popping it hands control straight back to the modal's trap.

use alloc::vec::Vec;

use trellis_tree::{KeyEvent, KeyResponse, TreeView};

use crate::FocusTrap;

/// Activation-ordered stack of [`FocusTrap`]s, at most one per container.
#[derive(Clone, Debug, Default)]
pub struct TrapStack<K> {
    traps: Vec<FocusTrap<K>>,
}

impl<K: Copy + Eq> TrapStack<K> {
    /// Empty stack.
    pub fn new() -> Self {
        Self { traps: Vec::new() }
    }

    /// Number of active traps.
    pub fn len(&self) -> usize {
        self.traps.len()
    }

    /// Whether no trap is active.
    pub fn is_empty(&self) -> bool {
        self.traps.is_empty()
    }

    /// The trap currently receiving keydown dispatch.
    pub fn top(&self) -> Option<&FocusTrap<K>> {
        self.traps.last()
    }

    /// Activate `trap` and push it on top of the stack.
    ///
    /// Returns the seeding response from [`FocusTrap::activate`] (`None`
    /// when the container has nothing focusable). A container holds at most
    /// one active trap: a duplicate is rejected and handed back in the
    /// `Err`, still inactive, so the host can tell rejection apart from an
    /// activation that found nothing to focus.
    pub fn push<T>(
        &mut self,
        tree: &T,
        mut trap: FocusTrap<K>,
        focused: Option<K>,
    ) -> Result<Option<KeyResponse<K>>, FocusTrap<K>>
    where
        T: TreeView<K> + ?Sized,
    {
        if self
            .traps
            .iter()
            .any(|active| active.container() == trap.container())
        {
            return Err(trap);
        }
        let seed = trap.activate(tree, focused);
        self.traps.push(trap);
        Ok(seed)
    }

    /// Route a keydown to the top-of-stack trap.
    pub fn on_key<T>(
        &self,
        tree: &T,
        focused: Option<K>,
        event: &KeyEvent<K>,
    ) -> Option<KeyResponse<K>>
    where
        T: TreeView<K> + ?Sized,
    {
        self.traps
            .last()
            .and_then(|top| top.on_key(tree, focused, event))
    }

    /// Tear down the top trap and return its restore response.
    pub fn pop<T>(&mut self, tree: &T) -> Option<KeyResponse<K>>
    where
        T: TreeView<K> + ?Sized,
    {
        let mut trap = self.traps.pop()?;
        trap.deactivate(tree)
    }

    /// Tear down the trap for `container`, wherever it sits in the stack.
    ///
    /// Overlays do not always unmount in reverse activation order; this
    /// removes the matching trap without disturbing the others.
    pub fn remove<T>(&mut self, tree: &T, container: K) -> Option<KeyResponse<K>>
    where
        T: TreeView<K> + ?Sized,
    {
        let index = self
            .traps
            .iter()
            .position(|trap| trap.container() == container)?;
        let mut trap = self.traps.remove(index);
        trap.deactivate(tree)
    }
}
