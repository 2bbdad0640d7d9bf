// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types shared by the Trellis controllers: roles, selectors, key
//! events, key responses, and configuration errors.

use alloc::string::String;
use core::fmt;

bitflags::bitflags! {
    /// Role classification for a node, as reported by the host.
    ///
    /// Roles are a coarse, host-defined notion of what a node is. The
    /// resolver only ever asks whether a node's roles satisfy a
    /// [`Selector`]; how the host maps its widget kinds onto these bits is
    /// its own business.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct RoleSet: u16 {
        /// Navigates somewhere when activated.
        const LINK = 1 << 0;
        /// Performs an action when activated.
        const BUTTON = 1 << 1;
        /// Accepts text input.
        const TEXT_INPUT = 1 << 2;
        /// Two-state toggle.
        const CHECKBOX = 1 << 3;
        /// One-of-many toggle.
        const RADIO = 1 << 4;
        /// Offers a choice among options.
        const SELECT = 1 << 5;
        /// Continuous value control.
        const SLIDER = 1 << 6;
        /// Entry of a composite widget (list, menu, grid).
        const ITEM = 1 << 7;
        /// Explicitly marked focusable by the host, independent of kind.
        const FOCUSABLE = 1 << 8;

        /// Every role that can natively take focus.
        const INTERACTIVE = Self::LINK.bits()
            | Self::BUTTON.bits()
            | Self::TEXT_INPUT.bits()
            | Self::CHECKBOX.bits()
            | Self::RADIO.bits()
            | Self::SELECT.bits()
            | Self::SLIDER.bits()
            | Self::ITEM.bits()
            | Self::FOCUSABLE.bits();
    }
}

/// Describes which descendants of a container are eligible for keyboard
/// navigation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Selector {
    /// Nodes carrying at least one interactive role. The default.
    #[default]
    Interactive,
    /// Every descendant, regardless of role.
    Any,
    /// Nodes whose roles intersect the given set.
    Roles(RoleSet),
}

impl Selector {
    /// Whether a node with the given roles matches this selector.
    pub fn accepts(&self, roles: RoleSet) -> bool {
        match self {
            Self::Interactive => roles.intersects(RoleSet::INTERACTIVE),
            Self::Any => true,
            Self::Roles(wanted) => roles.intersects(*wanted),
        }
    }
}

/// Keys the subsystem reacts to.
///
/// Hosts map their own key representation onto this set; anything the
/// controllers never look at collapses to [`Key::Other`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Forward focus traversal.
    Tab,
    /// Activation.
    Enter,
    /// Activation (and native page scroll, which activation suppresses).
    Space,
    /// Dismissal.
    Escape,
    /// Jump to the first element of a composite.
    Home,
    /// Jump to the last element of a composite.
    End,
    /// Directional navigation.
    ArrowUp,
    /// Directional navigation.
    ArrowDown,
    /// Directional navigation.
    ArrowLeft,
    /// Directional navigation.
    ArrowRight,
    /// Any key the subsystem does not handle.
    Other,
}

bitflags::bitflags! {
    /// Modifier keys held during a key event.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift.
        const SHIFT = 1 << 0;
        /// Control.
        const CONTROL = 1 << 1;
        /// Alt / Option.
        const ALT = 1 << 2;
        /// Meta / Command / Windows.
        const META = 1 << 3;
    }
}

/// A keydown event as delivered by the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyEvent<K> {
    /// The key that went down.
    pub key: Key,
    /// Modifiers held at the time.
    pub modifiers: Modifiers,
    /// Node the host routed the event to, when it tracks one.
    pub target: Option<K>,
}

impl<K> KeyEvent<K> {
    /// Event with no modifiers and no target.
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::empty(),
            target: None,
        }
    }

    /// Event with Shift held.
    pub fn shifted(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::SHIFT,
            target: None,
        }
    }

    /// Attach the node the event targets.
    pub fn with_target(mut self, target: K) -> Self {
        self.target = Some(target);
        self
    }

    /// Whether Shift is held.
    pub fn shift(&self) -> bool {
        self.modifiers.contains(Modifiers::SHIFT)
    }
}

/// Effects a controller asks the host to apply after consuming a key event.
///
/// A returned response means the event is consumed: the host must apply the
/// focus move, honor the scroll request, and suppress the platform default
/// for the same dispatch, before any native focus advance takes effect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyResponse<K> {
    /// Node that should receive input focus.
    pub focus: Option<K>,
    /// Node that should be scrolled into view.
    pub scroll_into_view: Option<K>,
}

impl<K> KeyResponse<K> {
    /// Response that moves focus to `node`.
    pub fn focus(node: K) -> Self {
        Self {
            focus: Some(node),
            scroll_into_view: None,
        }
    }

    /// Additionally request that `node` be scrolled into view.
    pub fn with_scroll(mut self, node: K) -> Self {
        self.scroll_into_view = Some(node);
        self
    }
}

/// Invalid static configuration, detected at construction.
///
/// Configuration errors are fatal to the instance being built and are the
/// only errors this workspace surfaces; every degenerate runtime state
/// (empty set, detached node, missing geometry) has a documented fallback
/// instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Orientation string was not `horizontal`, `vertical`, or `both`.
    UnknownOrientation(String),
    /// Priority string was not `polite` or `assertive`.
    UnknownPriority(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownOrientation(value) => write!(f, "unknown orientation {value:?}"),
            Self::UnknownPriority(value) => write!(f, "unknown priority {value:?}"),
        }
    }
}

impl core::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn interactive_selector_requires_an_interactive_role() {
        let selector = Selector::Interactive;
        assert!(selector.accepts(RoleSet::BUTTON));
        assert!(selector.accepts(RoleSet::LINK | RoleSet::ITEM));
        assert!(!selector.accepts(RoleSet::empty()));
    }

    #[test]
    fn any_selector_accepts_role_less_nodes() {
        assert!(Selector::Any.accepts(RoleSet::empty()));
        assert!(Selector::Any.accepts(RoleSet::SLIDER));
    }

    #[test]
    fn role_selector_matches_on_intersection() {
        let selector = Selector::Roles(RoleSet::CHECKBOX | RoleSet::RADIO);
        assert!(selector.accepts(RoleSet::RADIO | RoleSet::ITEM));
        assert!(!selector.accepts(RoleSet::BUTTON));
    }

    #[test]
    fn shifted_event_reports_shift() {
        let event: KeyEvent<u32> = KeyEvent::shifted(Key::Tab);
        assert!(event.shift());
        assert!(!KeyEvent::<u32>::new(Key::Tab).shift());
    }

    #[test]
    fn config_error_displays_the_offending_value() {
        let err = ConfigError::UnknownOrientation("diagonal".to_string());
        assert_eq!(err.to_string(), "unknown orientation \"diagonal\"");
    }
}
