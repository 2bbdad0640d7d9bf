// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Roving: arrow-key navigation across a composite widget.
//!
//! ## Overview
//!
//! A roving-focus controller makes a group of elements behave like one
//! composite control with a single tab stop: arrows move focus among the
//! members, Home and End jump to the edges, and Tab leaves the group
//! entirely (Tab is not this crate's business — see `trellis_trap` for
//! containment).
//!
//! [`RovingFocus::on_key`] resolves the focusable set of its container
//! fresh on every keypress, finds the currently focused member, steps by
//! one in the configured [`Orientation`], and answers with a
//! [`KeyResponse`] the host applies. Past an end the controller either
//! wraps to the opposite end or clamps, per [`RovingConfig::wrap`]. Keys
//! outside the configured orientation are not intercepted and fall through
//! to the platform.
//!
//! ```rust
//! use trellis_tree::{Key, KeyEvent, RoleSet};
//! use trellis_tree::fixture::FixtureTree;
//! use trellis_roving::{RovingConfig, RovingFocus};
//!
//! let mut tree = FixtureTree::new();
//! tree.insert(1, None, RoleSet::empty());
//! tree.insert(10, Some(1), RoleSet::ITEM);
//! tree.insert(11, Some(1), RoleSet::ITEM);
//!
//! let roving = RovingFocus::new(1, RovingConfig::default());
//! let response = roving
//!     .on_key(&tree, Some(10), &KeyEvent::new(Key::ArrowDown))
//!     .expect("arrow matches the vertical default orientation");
//! assert_eq!(response.focus, Some(11));
//! ```
//!
//! ## Degenerate states
//!
//! None of them are errors. An empty focusable set makes the handler a
//! no-op. Focus sitting outside the set is treated as "before the first
//! element": a forward step lands on the first member, a backward step on
//! the last when wrapping (on the first otherwise, since clamping cannot go
//! below it). The only failure this crate can produce is a
//! [`ConfigError`] for an unknown orientation string, surfaced when the
//! configuration is parsed — never during key handling.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use core::str::FromStr;

use kurbo::Rect;
use trellis_tree::{
    ConfigError, Key, KeyEvent, KeyResponse, Selector, TreeView, position_of, resolve,
};

/// Axis (or axes) whose arrow keys the controller reacts to.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// ArrowLeft / ArrowRight.
    Horizontal,
    /// ArrowUp / ArrowDown. The default.
    #[default]
    Vertical,
    /// All four arrows.
    Both,
}

impl FromStr for Orientation {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "horizontal" => Ok(Self::Horizontal),
            "vertical" => Ok(Self::Vertical),
            "both" => Ok(Self::Both),
            other => Err(ConfigError::UnknownOrientation(other.into())),
        }
    }
}

impl Orientation {
    fn horizontal(self) -> bool {
        matches!(self, Self::Horizontal | Self::Both)
    }

    fn vertical(self) -> bool {
        matches!(self, Self::Vertical | Self::Both)
    }
}

/// Configuration for a [`RovingFocus`] controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RovingConfig {
    /// Which arrow keys move focus.
    pub orientation: Orientation,
    /// Wrap to the opposite end past an edge (`true`) or clamp (`false`).
    pub wrap: bool,
    /// Which descendants participate.
    pub selector: Selector,
    /// Disabled controllers intercept nothing.
    pub enabled: bool,
}

impl Default for RovingConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::default(),
            wrap: true,
            selector: Selector::default(),
            enabled: true,
        }
    }
}

impl RovingConfig {
    /// Build a configuration from a host-supplied orientation string.
    ///
    /// Rejects unknown orientations here, at construction, so key handling
    /// never has to cope with malformed configuration.
    pub fn parse(orientation: &str, wrap: bool) -> Result<Self, ConfigError> {
        Ok(Self {
            orientation: orientation.parse()?,
            wrap,
            ..Self::default()
        })
    }
}

/// Motion requested by a key, before it is applied to a concrete set.
#[derive(Copy, Clone, Debug)]
enum Motion {
    Forward,
    Backward,
    First,
    Last,
}

/// Arrow/Home/End navigation across the focusable set of one container.
#[derive(Clone, Debug)]
pub struct RovingFocus<K> {
    container: K,
    config: RovingConfig,
}

impl<K: Copy + Eq> RovingFocus<K> {
    /// Controller for `container` with the given configuration.
    pub fn new(container: K, config: RovingConfig) -> Self {
        Self { container, config }
    }

    /// The container this controller navigates within.
    pub fn container(&self) -> K {
        self.container
    }

    /// Current configuration.
    pub fn config(&self) -> &RovingConfig {
        &self.config
    }

    /// Enable or disable the controller. Disabling is the cancellation
    /// mechanism: a disabled controller returns `None` for every event.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.config.enabled = enabled;
    }

    /// Handle a keydown.
    ///
    /// `focused` is the node currently holding input focus, if any.
    /// Returns `None` when the event is not intercepted (wrong key, wrong
    /// axis, disabled controller, or empty set) so the platform default
    /// proceeds; returns a [`KeyResponse`] to consume the event otherwise.
    pub fn on_key<T>(
        &self,
        tree: &T,
        focused: Option<K>,
        event: &KeyEvent<K>,
    ) -> Option<KeyResponse<K>>
    where
        T: TreeView<K> + ?Sized,
    {
        if !self.config.enabled {
            return None;
        }
        let motion = self.motion_for(event.key)?;

        // Resolved fresh per keypress: membership may have changed since
        // the last one.
        let set = resolve(tree, self.container, &self.config.selector);
        if set.is_empty() {
            return None;
        }
        let last = set.len() - 1;
        let wrap = self.config.wrap;

        let next = match motion {
            Motion::First => 0,
            Motion::Last => last,
            Motion::Forward => match position_of(&set, focused) {
                Some(index) if index < last => index + 1,
                Some(_) if wrap => 0,
                Some(index) => index,
                None => 0,
            },
            Motion::Backward => match position_of(&set, focused) {
                Some(index) if index > 0 => index - 1,
                Some(index) if !wrap => index,
                Some(_) => last,
                // Focus is outside the set: wrap lands on the last member,
                // clamping cannot go below the first.
                None if wrap => last,
                None => 0,
            },
        };

        let target = set[next];
        let mut response = KeyResponse::focus(target);
        if is_partially_clipped(tree, target) {
            response = response.with_scroll(target);
        }
        Some(response)
    }

    /// Home and End always jump; arrows only on the configured axis.
    fn motion_for(&self, key: Key) -> Option<Motion> {
        let orientation = self.config.orientation;
        match key {
            Key::Home => Some(Motion::First),
            Key::End => Some(Motion::Last),
            Key::ArrowUp if orientation.vertical() => Some(Motion::Backward),
            Key::ArrowDown if orientation.vertical() => Some(Motion::Forward),
            Key::ArrowLeft if orientation.horizontal() => Some(Motion::Backward),
            Key::ArrowRight if orientation.horizontal() => Some(Motion::Forward),
            _ => None,
        }
    }
}

/// Whether the node's bounds stick out of the viewport. Hosts without
/// geometry never report clipping, so they never get scroll requests.
fn is_partially_clipped<K, T>(tree: &T, node: K) -> bool
where
    K: Copy + Eq,
    T: TreeView<K> + ?Sized,
{
    match (tree.viewport(), tree.rect(node)) {
        (Some(viewport), Some(rect)) => !contains_rect(viewport, rect),
        _ => false,
    }
}

fn contains_rect(outer: Rect, inner: Rect) -> bool {
    inner.x0 >= outer.x0 && inner.x1 <= outer.x1 && inner.y0 >= outer.y0 && inner.y1 <= outer.y1
}
