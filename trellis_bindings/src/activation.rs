// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Enter/Space activation for non-native interactive elements.

use trellis_tree::{Key, KeyEvent};

/// Makes one element respond to Enter and Space like a native button.
///
/// An activating event is consumed: the host must invoke the callback and
/// suppress the platform default, otherwise Space also scrolls the page.
/// When the event carries a target it must match the bound element; a
/// target-less event is assumed to have been routed to the element by the
/// host already.
#[derive(Clone, Debug)]
pub struct ActivationBinding<K> {
    element: K,
    enabled: bool,
}

impl<K: Copy + Eq> ActivationBinding<K> {
    /// Enabled binding for `element`.
    pub fn new(element: K) -> Self {
        Self {
            element,
            enabled: true,
        }
    }

    /// The bound element.
    pub fn element(&self) -> K {
        self.element
    }

    /// Enable or disable. A disabled binding has no effect.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether this event activates the bound element.
    pub fn is_activation(&self, event: &KeyEvent<K>) -> bool {
        self.enabled
            && matches!(event.key, Key::Enter | Key::Space)
            && event.target.is_none_or(|target| target == self.element)
    }

    /// Invoke `activate` when the event is an Enter/Space press on the
    /// bound element. `Some` means the event was consumed.
    pub fn on_key<R>(&self, event: &KeyEvent<K>, activate: impl FnOnce() -> R) -> Option<R> {
        self.is_activation(event).then(activate)
    }
}
