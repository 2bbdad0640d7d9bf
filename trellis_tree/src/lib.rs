// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Tree: host-tree abstraction and focusable-set resolution.
//!
//! ## Overview
//!
//! The Trellis controllers (roving focus, focus traps, key bindings) never
//! touch a concrete UI toolkit. They see the host through [`TreeView`], a
//! read-only view of the interactive tree over a small copyable node id `K`,
//! and they answer key events with [`KeyResponse`] values that the host
//! applies (move focus, scroll a node into view, suppress the platform
//! default). This keeps every controller a pure state machine that can be
//! driven by any retained tree — a DOM-like document, a TUI widget tree, or
//! the in-memory [`fixture::FixtureTree`] used by the test suites.
//!
//! ## Focusable sets
//!
//! [`resolve`] computes the ordered focusable set of a container: its
//! descendants, in host tree order, filtered to nodes that are attached,
//! enabled, have allocated layout, and match a [`Selector`]. The set is
//! deliberately recomputed on every keypress rather than cached; nodes are
//! enabled, disabled, shown, and hidden between keystrokes, and a stale set
//! is precisely the kind of bug that never shows up in pointer-driven
//! testing. Keypresses are rare relative to rendering, so the extra query is
//! cheap.
//!
//! ```rust
//! use trellis_tree::{resolve, RoleSet, Selector, TreeView};
//!
//! struct TwoButtons;
//!
//! impl TreeView<u32> for TwoButtons {
//!     fn is_attached(&self, node: u32) -> bool {
//!         node <= 2
//!     }
//!     fn is_enabled(&self, node: u32) -> bool {
//!         node != 2 // the second button is disabled
//!     }
//!     fn has_layout(&self, _node: u32) -> bool {
//!         true
//!     }
//!     fn roles(&self, node: u32) -> RoleSet {
//!         if node == 0 { RoleSet::empty() } else { RoleSet::BUTTON }
//!     }
//!     fn descendants(&self, container: u32) -> Vec<u32> {
//!         if container == 0 { vec![1, 2] } else { Vec::new() }
//!     }
//! }
//!
//! let set = resolve(&TwoButtons, 0, &Selector::Interactive);
//! assert_eq!(set, vec![1]);
//! ```
//!
//! ## Consumed events
//!
//! A handler that returns `Some(KeyResponse)` has consumed the event. The
//! host must apply the response and suppress the platform's own reaction to
//! the same event before native focus advance runs; deferring it a tick lets
//! focus visibly escape a trap for one frame.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for
//!   floating-point math.
//! - `fixture`: enables [`fixture`], an in-memory host tree for tests and
//!   demos, backed by `hashbrown` and `smallvec`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(any(test, feature = "fixture"))]
pub mod fixture;

mod resolve;
mod types;
mod view;

pub use resolve::{position_of, resolve};
pub use types::{ConfigError, Key, KeyEvent, KeyResponse, Modifiers, RoleSet, Selector};
pub use view::TreeView;
