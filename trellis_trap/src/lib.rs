// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Trap: input-focus containment for modals and overlays.
//!
//! ## Overview
//!
//! A [`FocusTrap`] confines Tab navigation to one container while it is
//! active. It is a one-way state machine, `Inactive → Active → Torn`:
//!
//! - [`FocusTrap::activate`] records the node that held focus beforehand
//!   and seeds focus inside the container: the configured initial-focus
//!   node if it can still take focus, else the first element of the fresh
//!   focusable set, else nothing at all (an overlay with no focusable
//!   content is not an error, Tab cycling just cannot happen until
//!   something becomes focusable).
//! - While active, [`FocusTrap::on_key`] intercepts Tab only at the set
//!   boundaries: Shift+Tab on the first element wraps to the last, Tab on
//!   the last wraps to the first. Everything in between is left to the
//!   platform's native order inside the container.
//! - [`FocusTrap::deactivate`] restores focus to the previously focused
//!   node if `return_focus` is set and that node is still attached;
//!   otherwise focus stays wherever it is. Teardown is idempotent.
//!
//! The host must apply a returned [`KeyResponse`] and suppress the native
//! Tab advance within the same event dispatch, or focus visibly leaks out
//! of the trap for a frame.
//!
//! ## Nesting
//!
//! This crate has no capture-phase event dispatch to lean on, so nested
//! overlays are coordinated with an explicit [`TrapStack`]: one trap per
//! container, keydown routed to the top of the stack only. See [`stack`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod stack;

pub use stack::TrapStack;

use trellis_tree::{Key, KeyEvent, KeyResponse, Selector, TreeView, position_of, resolve};

/// Lifecycle of a [`FocusTrap`]. Transitions are one-way; a dismissed
/// overlay that reopens builds a fresh trap.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TrapState {
    /// Built but not yet activated.
    Inactive,
    /// Containing focus.
    Active,
    /// Torn down.
    Torn,
}

/// Configuration for a [`FocusTrap`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrapConfig<K> {
    /// Node to seed focus to on activation, when it can still take focus.
    pub initial_focus: Option<K>,
    /// Restore focus to the previously focused node on teardown.
    pub return_focus: bool,
    /// Which descendants participate in Tab cycling.
    pub selector: Selector,
}

impl<K> Default for TrapConfig<K> {
    fn default() -> Self {
        Self {
            initial_focus: None,
            return_focus: true,
            selector: Selector::default(),
        }
    }
}

/// Focus containment for one overlay container.
#[derive(Clone, Debug)]
pub struct FocusTrap<K> {
    container: K,
    config: TrapConfig<K>,
    state: TrapState,
    previously_focused: Option<K>,
}

impl<K: Copy + Eq> FocusTrap<K> {
    /// Inactive trap for `container`.
    pub fn new(container: K, config: TrapConfig<K>) -> Self {
        Self {
            container,
            config,
            state: TrapState::Inactive,
            previously_focused: None,
        }
    }

    /// The overlay container this trap guards.
    pub fn container(&self) -> K {
        self.container
    }

    /// Current lifecycle state.
    pub fn state(&self) -> TrapState {
        self.state
    }

    /// Node that held focus when the trap activated.
    pub fn previously_focused(&self) -> Option<K> {
        self.previously_focused
    }

    /// Activate the trap and seed focus inside the container.
    ///
    /// `focused` is the node holding focus right now; it is remembered for
    /// restoration at teardown. Returns the seeding response, or `None`
    /// when the container has nothing focusable (focus is left untouched)
    /// or the trap is not `Inactive`.
    pub fn activate<T>(&mut self, tree: &T, focused: Option<K>) -> Option<KeyResponse<K>>
    where
        T: TreeView<K> + ?Sized,
    {
        if self.state != TrapState::Inactive {
            return None;
        }
        self.state = TrapState::Active;
        self.previously_focused = focused;

        if let Some(initial) = self.config.initial_focus
            && tree.can_focus(initial)
        {
            return Some(KeyResponse::focus(initial));
        }
        let set = resolve(tree, self.container, &self.config.selector);
        set.first().map(|&first| KeyResponse::focus(first))
    }

    /// Handle a keydown while active.
    ///
    /// Only Tab at a boundary of the fresh focusable set is intercepted;
    /// every other event returns `None` and proceeds natively.
    pub fn on_key<T>(
        &self,
        tree: &T,
        focused: Option<K>,
        event: &KeyEvent<K>,
    ) -> Option<KeyResponse<K>>
    where
        T: TreeView<K> + ?Sized,
    {
        if self.state != TrapState::Active || event.key != Key::Tab {
            return None;
        }
        let set = resolve(tree, self.container, &self.config.selector);
        let (&first, &last) = match (set.first(), set.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return None,
        };
        let index = position_of(&set, focused)?;

        if event.shift() && set[index] == first {
            Some(KeyResponse::focus(last))
        } else if !event.shift() && set[index] == last {
            Some(KeyResponse::focus(first))
        } else {
            None
        }
    }

    /// Tear the trap down and restore focus.
    ///
    /// Returns the restore response when `return_focus` is configured and
    /// the previously focused node is still attached; `None` otherwise (no
    /// forced focus change). Idempotent: a second call does nothing.
    pub fn deactivate<T>(&mut self, tree: &T) -> Option<KeyResponse<K>>
    where
        T: TreeView<K> + ?Sized,
    {
        if self.state == TrapState::Torn {
            return None;
        }
        let was_active = self.state == TrapState::Active;
        self.state = TrapState::Torn;
        if !was_active || !self.config.return_focus {
            return None;
        }
        self.previously_focused
            .filter(|&previous| tree.is_attached(previous))
            .map(KeyResponse::focus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use trellis_tree::RoleSet;
    use trellis_tree::fixture::{FixtureTree, NodeId};

    const PAGE: NodeId = 1;
    const OPENER: NodeId = 5;
    const MODAL: NodeId = 2;

    /// Page with an "open" button and a modal holding `buttons`.
    fn modal_with(buttons: &[NodeId]) -> FixtureTree {
        let mut tree = FixtureTree::new();
        tree.insert(PAGE, None, RoleSet::empty());
        tree.insert(OPENER, Some(PAGE), RoleSet::BUTTON);
        tree.insert(MODAL, Some(PAGE), RoleSet::empty());
        for &button in buttons {
            tree.insert(button, Some(MODAL), RoleSet::BUTTON);
        }
        tree
    }

    #[test]
    fn activation_seeds_the_configured_initial_focus() {
        let tree = modal_with(&[30, 31]);
        let mut trap = FocusTrap::new(
            MODAL,
            TrapConfig {
                initial_focus: Some(31),
                ..TrapConfig::default()
            },
        );
        let seed = trap.activate(&tree, Some(OPENER)).unwrap();
        assert_eq!(seed.focus, Some(31));
        assert_eq!(trap.state(), TrapState::Active);
    }

    #[test]
    fn activation_falls_back_to_the_first_focusable() {
        let mut tree = modal_with(&[30, 31]);
        // The configured initial focus is disabled, so it cannot be seeded.
        tree.set_enabled(31, false);
        let mut trap = FocusTrap::new(
            MODAL,
            TrapConfig {
                initial_focus: Some(31),
                ..TrapConfig::default()
            },
        );
        let seed = trap.activate(&tree, Some(OPENER)).unwrap();
        assert_eq!(seed.focus, Some(30));
    }

    #[test]
    fn activation_with_nothing_focusable_leaves_focus_alone() {
        let tree = modal_with(&[]);
        let mut trap = FocusTrap::new(MODAL, TrapConfig::default());
        assert!(trap.activate(&tree, Some(OPENER)).is_none());
        assert_eq!(trap.state(), TrapState::Active);
        // No Tab cycling until something becomes focusable.
        assert!(
            trap.on_key(&tree, Some(OPENER), &KeyEvent::new(Key::Tab))
                .is_none()
        );
    }

    #[test]
    fn reactivation_is_a_no_op() {
        let tree = modal_with(&[30]);
        let mut trap = FocusTrap::new(MODAL, TrapConfig::default());
        trap.activate(&tree, Some(OPENER));
        assert!(trap.activate(&tree, Some(30)).is_none());
        assert_eq!(trap.previously_focused(), Some(OPENER));
    }

    #[test]
    fn tab_wraps_at_the_boundaries_only() {
        let tree = modal_with(&[30, 31, 32]);
        let mut trap = FocusTrap::new(MODAL, TrapConfig::default());
        trap.activate(&tree, Some(OPENER));

        // Mid-set Tab proceeds natively.
        assert!(
            trap.on_key(&tree, Some(30), &KeyEvent::new(Key::Tab))
                .is_none()
        );
        assert!(
            trap.on_key(&tree, Some(31), &KeyEvent::shifted(Key::Tab))
                .is_none()
        );

        let wrapped = trap
            .on_key(&tree, Some(32), &KeyEvent::new(Key::Tab))
            .unwrap();
        assert_eq!(wrapped.focus, Some(30));

        let wrapped_back = trap
            .on_key(&tree, Some(30), &KeyEvent::shifted(Key::Tab))
            .unwrap();
        assert_eq!(wrapped_back.focus, Some(32));
    }

    #[test]
    fn wrap_holds_for_sets_of_size_one_two_and_five() {
        for buttons in [
            &[40][..],
            &[40, 41][..],
            &[40, 41, 42, 43, 44][..],
        ] {
            let tree = modal_with(buttons);
            let mut trap = FocusTrap::new(MODAL, TrapConfig::default());
            trap.activate(&tree, Some(OPENER));

            let first = buttons[0];
            let last = *buttons.last().unwrap();

            let forward = trap
                .on_key(&tree, Some(last), &KeyEvent::new(Key::Tab))
                .unwrap();
            assert_eq!(forward.focus, Some(first));

            let backward = trap
                .on_key(&tree, Some(first), &KeyEvent::shifted(Key::Tab))
                .unwrap();
            assert_eq!(backward.focus, Some(last));
        }
    }

    #[test]
    fn non_tab_keys_and_outside_focus_are_ignored() {
        let tree = modal_with(&[30, 31]);
        let mut trap = FocusTrap::new(MODAL, TrapConfig::default());
        trap.activate(&tree, Some(OPENER));

        assert!(
            trap.on_key(&tree, Some(31), &KeyEvent::new(Key::ArrowDown))
                .is_none()
        );
        // Focus outside the set: nothing to wrap from.
        assert!(
            trap.on_key(&tree, Some(OPENER), &KeyEvent::new(Key::Tab))
                .is_none()
        );
    }

    #[test]
    fn teardown_restores_focus_while_the_opener_is_attached() {
        let tree = modal_with(&[30, 31]);
        let mut trap = FocusTrap::new(MODAL, TrapConfig::default());
        trap.activate(&tree, Some(OPENER));

        let restore = trap.deactivate(&tree).unwrap();
        assert_eq!(restore.focus, Some(OPENER));
        assert_eq!(trap.state(), TrapState::Torn);
    }

    #[test]
    fn teardown_skips_restoration_when_the_opener_is_gone() {
        let mut tree = modal_with(&[30]);
        let mut trap = FocusTrap::new(MODAL, TrapConfig::default());
        trap.activate(&tree, Some(OPENER));

        tree.detach(OPENER);
        assert!(trap.deactivate(&tree).is_none());
    }

    #[test]
    fn teardown_honors_return_focus_false() {
        let tree = modal_with(&[30]);
        let mut trap = FocusTrap::new(
            MODAL,
            TrapConfig {
                return_focus: false,
                ..TrapConfig::default()
            },
        );
        trap.activate(&tree, Some(OPENER));
        assert!(trap.deactivate(&tree).is_none());
    }

    #[test]
    fn teardown_is_idempotent() {
        let tree = modal_with(&[30]);
        let mut trap = FocusTrap::new(MODAL, TrapConfig::default());
        trap.activate(&tree, Some(OPENER));

        assert!(trap.deactivate(&tree).is_some());
        // A second teardown must not double-restore.
        assert!(trap.deactivate(&tree).is_none());
        // Nor does a torn trap keep handling keys.
        assert!(
            trap.on_key(&tree, Some(30), &KeyEvent::new(Key::Tab))
                .is_none()
        );
    }

    // The modal walkthrough: three buttons A/B/C, no explicit initial
    // focus. Activation focuses A; Tab advances natively A → B → C and
    // wraps C → A; Shift+Tab from A lands on C; closing the modal while B
    // is focused returns focus to the opener.
    #[test]
    fn modal_walkthrough() {
        let (a, b, c) = (30, 31, 32);
        let tree = modal_with(&[a, b, c]);
        let mut trap = FocusTrap::new(MODAL, TrapConfig::default());

        let seed = trap.activate(&tree, Some(OPENER)).unwrap();
        assert_eq!(seed.focus, Some(a));

        // Simulate the Tab ring: `None` means the platform advances to the
        // next element natively.
        let set: Vec<NodeId> = [a, b, c].into();
        let mut focused = a;
        let mut visited = Vec::new();
        for _ in 0..3 {
            focused = match trap.on_key(&tree, Some(focused), &KeyEvent::new(Key::Tab)) {
                Some(response) => response.focus.unwrap(),
                None => {
                    let index = set.iter().position(|&n| n == focused).unwrap();
                    set[index + 1]
                }
            };
            visited.push(focused);
        }
        assert_eq!(visited, [b, c, a]);

        let back = trap
            .on_key(&tree, Some(a), &KeyEvent::shifted(Key::Tab))
            .unwrap();
        assert_eq!(back.focus, Some(c));

        let restore = trap.deactivate(&tree).unwrap();
        assert_eq!(restore.focus, Some(OPENER));
    }
}
