// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end walkthrough of the Trellis controllers against the fixture
//! tree: keyboard-mode detection, roving focus over a ticket list, a modal
//! focus trap with Escape dismissal, and live announcements.
//!
//! Run with `cargo run -p trellis_demos --example modal_focus`.

use kurbo::Rect;
use trellis_announce::{LiveAnnouncer, Priority};
use trellis_bindings::{EscapeDismisser, ModeDetector, keyboard_mode};
use trellis_roving::{RovingConfig, RovingFocus};
use trellis_trap::{FocusTrap, TrapConfig, TrapStack};
use trellis_tree::fixture::{FixtureTree, NodeId};
use trellis_tree::{Key, KeyEvent, KeyResponse, RoleSet};

const PAGE: NodeId = 1;
const TICKET_LIST: NodeId = 2;
const OPEN_MODAL: NodeId = 3;
const MODAL: NodeId = 4;
const TICKETS: [NodeId; 3] = [20, 21, 22];
const MODAL_BUTTONS: [NodeId; 2] = [40, 41];

/// The host side of the contract: apply a returned response and report
/// whether the event was consumed.
fn apply(focused: &mut Option<NodeId>, response: Option<KeyResponse<NodeId>>) -> bool {
    let Some(response) = response else {
        return false;
    };
    if let Some(node) = response.focus {
        *focused = Some(node);
    }
    if let Some(node) = response.scroll_into_view {
        println!("  (scrolling node {node} into view)");
    }
    true
}

fn support_console() -> FixtureTree {
    let mut tree = FixtureTree::new();
    tree.insert(PAGE, None, RoleSet::empty());
    tree.insert(TICKET_LIST, Some(PAGE), RoleSet::empty());
    for (i, &ticket) in TICKETS.iter().enumerate() {
        tree.insert(ticket, Some(TICKET_LIST), RoleSet::ITEM);
        tree.set_rect(ticket, Rect::new(0.0, i as f64 * 40.0, 320.0, (i + 1) as f64 * 40.0));
    }
    tree.set_viewport(Rect::new(0.0, 0.0, 320.0, 100.0));
    tree.insert(OPEN_MODAL, Some(PAGE), RoleSet::BUTTON);
    tree.insert(MODAL, Some(PAGE), RoleSet::empty());
    for &button in &MODAL_BUTTONS {
        tree.insert(button, Some(MODAL), RoleSet::BUTTON);
    }
    tree
}

fn main() {
    let tree = support_console();
    let mut focused: Option<NodeId> = Some(TICKETS[0]);

    let mut detector = ModeDetector::new();
    detector.attach();
    let roving = RovingFocus::new(TICKET_LIST, RovingConfig::default());
    let mut traps: TrapStack<NodeId> = TrapStack::new();
    let dismisser = EscapeDismisser::new();
    let mut announcer = LiveAnnouncer::new();
    let mut now = 0_u64;

    // The user tabs in: keyboard mode switches on.
    detector.on_key(&KeyEvent::<NodeId>::new(Key::Tab));
    println!("keyboard mode: {}", keyboard_mode());

    // Arrow through the ticket list; the third ticket is clipped by the
    // viewport, so stepping onto it also asks for a scroll.
    for _ in 0..2 {
        let event = KeyEvent::new(Key::ArrowDown);
        let response = roving.on_key(&tree, focused, &event);
        apply(&mut focused, response);
        println!("ArrowDown -> focus on {:?}", focused);
    }

    // Open the modal: the trap remembers the list item and seeds focus.
    let seed = traps
        .push(&tree, FocusTrap::new(MODAL, TrapConfig::default()), focused)
        .expect("no trap is active for the modal yet");
    apply(&mut focused, seed);
    now += 100;
    announcer.announce("Dialog opened", Priority::Polite, now);
    println!("modal open -> focus on {:?}", focused);

    // Tab cycles within the modal: the wrap at the boundary is the trap's,
    // everything else is native order.
    for _ in 0..MODAL_BUTTONS.len() {
        let event = KeyEvent::new(Key::Tab);
        let response = traps.on_key(&tree, focused, &event);
        if !apply(&mut focused, response) {
            // Native advance inside the modal.
            let i = MODAL_BUTTONS.iter().position(|&b| Some(b) == focused).unwrap();
            focused = Some(MODAL_BUTTONS[(i + 1) % MODAL_BUTTONS.len()]);
        }
        println!("Tab -> focus on {:?}", focused);
    }

    // Escape dismisses: tear the trap down, restore focus to the list.
    let escape = KeyEvent::<NodeId>::new(Key::Escape);
    dismisser.on_key(&escape, || {
        let restore = traps.pop(&tree);
        apply(&mut focused, restore);
    });
    now += 100;
    announcer.announce("Dialog closed", Priority::Polite, now);
    println!("Escape -> focus restored to {:?}", focused);

    // The announcement pool drains once the hold elapses.
    println!("live announcements: {}", announcer.len());
    let retired = announcer.tick(now + 1_000);
    println!("retired {} announcements, {} left", retired.len(), announcer.len());
}
