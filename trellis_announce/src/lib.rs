// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Announce: transient live-region announcements.
//!
//! ## Overview
//!
//! Assistive technology speaks dynamically injected text through live
//! regions: visually hidden nodes whose content a screen reader reads
//! without moving input focus. [`LiveAnnouncer`] owns the bookkeeping for
//! such nodes — the host owns their materialization and the visually
//! hidden styling.
//!
//! [`LiveAnnouncer::announce`] records a message with a [`Priority`] and a
//! caller-supplied timestamp; the host renders one hidden node per entry
//! in [`LiveAnnouncer::active`]. [`LiveAnnouncer::tick`] retires entries
//! once the hold delay has passed (long enough for the screen reader to
//! have picked the text up) and returns their ids so the host removes the
//! nodes, keeping the pool bounded. The removal delay is data, not a
//! blocking wait: drive `tick` from whatever timer the host already has.
//!
//! Rapid repeated calls create independent entries rather than coalescing.
//! Screen readers generally serialize announcements anyway; callers that
//! want debouncing do it themselves.
//!
//! ```rust
//! use trellis_announce::{LiveAnnouncer, Priority};
//!
//! let mut announcer = LiveAnnouncer::new();
//! let id = announcer.announce("Ticket saved", Priority::Polite, 1_000);
//! assert_eq!(announcer.active().len(), 1);
//!
//! // One second later the entry is retired.
//! let retired = announcer.tick(2_000);
//! assert_eq!(retired, vec![id]);
//! assert!(announcer.active().is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::str::FromStr;

use trellis_tree::ConfigError;

/// How long an announcement stays in the pool by default, in milliseconds.
pub const DEFAULT_HOLD_MS: u64 = 1_000;

/// Live-region politeness level.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Priority {
    /// Spoken when the screen reader is idle. The default.
    #[default]
    Polite,
    /// Interrupts whatever is currently being spoken.
    Assertive,
}

impl FromStr for Priority {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "polite" => Ok(Self::Polite),
            "assertive" => Ok(Self::Assertive),
            other => Err(ConfigError::UnknownPriority(other.into())),
        }
    }
}

/// Handle for one announcement, used to match host nodes to pool entries.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct AnnouncementId(u64);

/// One live announcement owned by the pool.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Announcement {
    /// Handle for this entry.
    pub id: AnnouncementId,
    /// Text for the screen reader.
    pub text: String,
    /// Politeness level.
    pub priority: Priority,
    expires_at: u64,
}

/// Bounded pool of transient announcements.
#[derive(Clone, Debug)]
pub struct LiveAnnouncer {
    pending: Vec<Announcement>,
    hold_ms: u64,
    next_id: u64,
}

impl Default for LiveAnnouncer {
    fn default() -> Self {
        Self::new()
    }
}

impl LiveAnnouncer {
    /// Announcer with the default hold of [`DEFAULT_HOLD_MS`].
    pub fn new() -> Self {
        Self::with_hold(DEFAULT_HOLD_MS)
    }

    /// Announcer holding entries for `hold_ms` milliseconds.
    pub fn with_hold(hold_ms: u64) -> Self {
        Self {
            pending: Vec::new(),
            hold_ms,
            next_id: 0,
        }
    }

    /// Record an announcement at time `now` (milliseconds, any monotonic
    /// clock the host uses). The entry is visible in
    /// [`LiveAnnouncer::active`] immediately.
    pub fn announce(
        &mut self,
        text: impl Into<String>,
        priority: Priority,
        now: u64,
    ) -> AnnouncementId {
        let id = AnnouncementId(self.next_id);
        self.next_id += 1;
        self.pending.push(Announcement {
            id,
            text: text.into(),
            priority,
            expires_at: now.saturating_add(self.hold_ms),
        });
        id
    }

    /// Entries the host should currently materialize as hidden live nodes.
    pub fn active(&self) -> &[Announcement] {
        &self.pending
    }

    /// Retire entries whose hold has elapsed by `now` and return their
    /// ids; the host removes the matching nodes.
    pub fn tick(&mut self, now: u64) -> Vec<AnnouncementId> {
        let mut retired = Vec::new();
        self.pending.retain(|entry| {
            if entry.expires_at <= now {
                retired.push(entry.id);
                false
            } else {
                true
            }
        });
        retired
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether the pool is empty.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn announcement_is_active_immediately_and_gone_after_the_hold() {
        let mut announcer = LiveAnnouncer::new();
        let id = announcer.announce("Saved", Priority::Polite, 0);

        assert_eq!(announcer.active().len(), 1);
        assert_eq!(announcer.active()[0].id, id);
        assert_eq!(announcer.active()[0].text, "Saved");

        // Not yet: the hold has one millisecond to go.
        assert!(announcer.tick(DEFAULT_HOLD_MS - 1).is_empty());
        assert_eq!(announcer.len(), 1);

        assert_eq!(announcer.tick(DEFAULT_HOLD_MS), vec![id]);
        assert!(announcer.is_empty());
    }

    #[test]
    fn rapid_calls_create_independent_entries() {
        let mut announcer = LiveAnnouncer::new();
        let first = announcer.announce("one", Priority::Polite, 0);
        let second = announcer.announce("two", Priority::Assertive, 1);
        assert_ne!(first, second);
        assert_eq!(announcer.len(), 2);

        // They retire on their own schedules.
        assert_eq!(announcer.tick(1_000), vec![first]);
        assert_eq!(announcer.tick(1_001), vec![second]);
    }

    #[test]
    fn custom_hold_is_honored() {
        let mut announcer = LiveAnnouncer::with_hold(50);
        announcer.announce("quick", Priority::Polite, 100);
        assert!(announcer.tick(149).is_empty());
        assert_eq!(announcer.tick(150).len(), 1);
    }

    #[test]
    fn priority_parses_from_host_strings() {
        assert_eq!("polite".parse::<Priority>().unwrap(), Priority::Polite);
        assert_eq!(
            "assertive".parse::<Priority>().unwrap(),
            Priority::Assertive
        );
        assert_eq!(
            "loud".parse::<Priority>().unwrap_err(),
            ConfigError::UnknownPriority("loud".into())
        );
    }

    #[test]
    fn tick_with_nothing_expired_is_a_no_op() {
        let mut announcer = LiveAnnouncer::new();
        assert!(announcer.tick(u64::MAX).is_empty());
        announcer.announce("stay", Priority::Polite, 10);
        assert!(announcer.tick(10).is_empty());
    }
}
