// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Escape-to-dismiss binding.

use trellis_tree::{Key, KeyEvent};

/// Binds Escape to a dismissal callback while enabled.
///
/// Instances carry no z-order awareness: when several are active at once
/// (a dropdown inside a modal, say), a single Escape press fires every one
/// of them. Callers that want topmost-only dismissal keep their own
/// activation stack and early-return from the callback when they are not
/// on top.
#[derive(Clone, Debug)]
pub struct EscapeDismisser {
    enabled: bool,
}

impl Default for EscapeDismisser {
    fn default() -> Self {
        Self::new()
    }
}

impl EscapeDismisser {
    /// Enabled dismisser.
    pub fn new() -> Self {
        Self { enabled: true }
    }

    /// Enable or disable. Disabling is the teardown: a disabled instance
    /// never fires.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether the instance is currently listening.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether this event would fire the dismissal.
    pub fn should_dismiss<K>(&self, event: &KeyEvent<K>) -> bool {
        self.enabled && event.key == Key::Escape
    }

    /// Invoke `dismiss` when the event is an Escape press, exactly once
    /// per keypress (key repeat delivers repeated presses, which fire
    /// repeatedly — no suppression beyond the platform's).
    pub fn on_key<K, R>(&self, event: &KeyEvent<K>, dismiss: impl FnOnce() -> R) -> Option<R> {
        self.should_dismiss(event).then(dismiss)
    }
}
