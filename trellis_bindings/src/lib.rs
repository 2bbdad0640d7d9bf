// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Bindings: the small keyboard bindings around the focus
//! controllers.
//!
//! ## Overview
//!
//! Three independent pieces, each fed events by the host:
//!
//! - [`ModeDetector`] tracks whether the user is currently driving the
//!   interface via keyboard (Tab) or pointer, behind the process-wide
//!   [`keyboard_mode`] flag, and hands the host [`ModeChange`] values so a
//!   shared marker (for example a root style class) can amplify focus
//!   indicators while keyboard mode is on.
//! - [`EscapeDismisser`] fires a dismissal callback on Escape while
//!   enabled.
//! - [`ActivationBinding`] makes a non-native interactive element respond
//!   to Enter/Space like a real button, consuming the event so Space does
//!   not scroll the page.
//!
//! All three are plain state: teardown is dropping the value (or disabling
//! it), after which no further events are processed.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod activation;
mod escape;
mod mode;

pub use activation::ActivationBinding;
pub use escape::EscapeDismisser;
pub use mode::{ModeChange, ModeDetector, keyboard_mode};
