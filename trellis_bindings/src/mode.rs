// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard-vs-pointer mode detection.
//!
//! "Is the user currently a keyboard user" is inherently process-wide
//! state. It lives here behind a single accessor, [`keyboard_mode`], and is
//! written only by the two detector handlers below; no other component
//! writes it. The single-threaded event loop serializes those writes, so a
//! relaxed atomic is all the synchronization needed.

use core::sync::atomic::{AtomicBool, Ordering};

use trellis_tree::{Key, KeyEvent};

static KEYBOARD_MODE: AtomicBool = AtomicBool::new(false);

/// Whether the user has pressed Tab since the last pointer interaction.
pub fn keyboard_mode() -> bool {
    KEYBOARD_MODE.load(Ordering::Relaxed)
}

/// A mode flip the host should mirror into its shared marker (for example
/// a root-level style class that strengthens focus outlines).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ModeChange {
    /// New mode: `true` for keyboard, `false` for pointer.
    pub keyboard: bool,
}

/// Global detector flipping [`keyboard_mode`] on Tab and pointer-down.
///
/// Meant to be attached once at application start and fed every keydown
/// and pointer-down. Attach and detach are idempotent, and the mode flag
/// is shared, so mounting a second detector by accident is wasteful but
/// never incorrect: both instances write the same values.
#[derive(Clone, Debug, Default)]
pub struct ModeDetector {
    attached: bool,
}

impl ModeDetector {
    /// Detached detector; call [`ModeDetector::attach`] to start listening.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start processing events. Idempotent.
    pub fn attach(&mut self) {
        self.attached = true;
    }

    /// Stop processing events. Idempotent; the mode flag keeps its value.
    pub fn detach(&mut self) {
        self.attached = false;
    }

    /// Whether the detector is currently listening.
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// A Tab keydown switches to keyboard mode, whatever the prior state.
    /// The event is observed, never consumed.
    pub fn on_key<K>(&self, event: &KeyEvent<K>) -> Option<ModeChange> {
        if !self.attached || event.key != Key::Tab {
            return None;
        }
        KEYBOARD_MODE.store(true, Ordering::Relaxed);
        Some(ModeChange { keyboard: true })
    }

    /// Any pointer-down switches back to pointer mode.
    pub fn on_pointer_down(&self) -> Option<ModeChange> {
        if !self.attached {
            return None;
        }
        KEYBOARD_MODE.store(false, Ordering::Relaxed);
        Some(ModeChange { keyboard: false })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test owns the global flag end to end so the assertions cannot
    // interleave with each other under the parallel test runner.
    #[test]
    fn tab_and_pointer_toggle_the_mode_regardless_of_prior_state() {
        let mut detector = ModeDetector::new();

        // Detached: events are ignored and the flag is untouched.
        assert!(detector.on_key(&KeyEvent::<u32>::new(Key::Tab)).is_none());
        assert!(detector.on_pointer_down().is_none());

        detector.attach();
        detector.attach(); // idempotent

        let change = detector.on_key(&KeyEvent::<u32>::new(Key::Tab)).unwrap();
        assert!(change.keyboard);
        assert!(keyboard_mode());

        // Repeating the same transition is fine.
        assert!(detector.on_key(&KeyEvent::<u32>::new(Key::Tab)).is_some());
        assert!(keyboard_mode());

        let change = detector.on_pointer_down().unwrap();
        assert!(!change.keyboard);
        assert!(!keyboard_mode());
        assert!(detector.on_pointer_down().is_some());
        assert!(!keyboard_mode());

        // Non-Tab keys never flip to keyboard mode.
        assert!(detector.on_key(&KeyEvent::<u32>::new(Key::Enter)).is_none());
        assert!(!keyboard_mode());

        detector.detach();
        detector.detach(); // idempotent
        assert!(detector.on_key(&KeyEvent::<u32>::new(Key::Tab)).is_none());
        assert!(!keyboard_mode());
    }
}
