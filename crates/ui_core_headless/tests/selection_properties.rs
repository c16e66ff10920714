use std::collections::HashSet;

use pretty_assertions::assert_eq;
use ui_core_headless::{
    CloseTicket, NavKey, SelectionConfig, SelectionController, SelectionEffect, SelectionError,
    SelectionEvent, SelectionMode,
};

const ITEMS: usize = 3;

#[derive(Debug, Clone, Copy)]
enum Step {
    Send(SelectionEvent),
    FireOldestTicket,
    FireNewestTicket,
}

fn alphabet() -> Vec<Step> {
    vec![
        Step::Send(SelectionEvent::Activate(0)),
        Step::Send(SelectionEvent::Activate(2)),
        Step::Send(SelectionEvent::HoverEnter(1)),
        Step::Send(SelectionEvent::Focus(0)),
        Step::Send(SelectionEvent::PointerLeave),
        Step::Send(SelectionEvent::Escape),
        Step::Send(SelectionEvent::Key {
            key: NavKey::ArrowDown,
            focused: 1,
        }),
        Step::Send(SelectionEvent::Activate(ITEMS)),
        Step::FireOldestTicket,
        Step::FireNewestTicket,
    ]
}

/// Host-side view of the timers a controller asked for.
#[derive(Default)]
struct TimerLedger {
    scheduled: Vec<CloseTicket>,
    live: HashSet<CloseTicket>,
}

impl TimerLedger {
    fn apply(&mut self, effects: &[SelectionEffect]) {
        for effect in effects {
            match effect {
                SelectionEffect::ScheduleClose { ticket, .. } => {
                    self.scheduled.push(*ticket);
                    self.live.insert(*ticket);
                }
                SelectionEffect::CancelClose(ticket) => {
                    assert!(self.live.remove(ticket), "cancelled a ticket that was not live");
                }
                _ => {}
            }
        }
    }
}

fn run(sequence: &[Step]) {
    let mut selection =
        SelectionController::new(ITEMS, SelectionConfig::dropdown(), SelectionMode::Owned);
    let mut timers = TimerLedger::default();

    for step in sequence {
        let before = selection.clone();
        let event = match *step {
            Step::Send(event) => event,
            Step::FireOldestTicket | Step::FireNewestTicket => {
                let ticket = if matches!(step, Step::FireOldestTicket) {
                    timers.scheduled.first()
                } else {
                    timers.scheduled.last()
                };
                let Some(ticket) = ticket.copied() else {
                    continue;
                };
                // A fired timer is no longer cancellable by the host.
                timers.live.remove(&ticket);
                SelectionEvent::TimerElapsed(ticket)
            }
        };

        match selection.dispatch(event) {
            Ok(effects) => {
                timers.apply(&effects);
                if let SelectionEvent::TimerElapsed(ticket) = event {
                    if before.pending_close() != Some(ticket) {
                        assert!(effects.is_empty(), "stale ticket produced effects");
                        assert_eq!(selection, before);
                    }
                }
            }
            Err(err) => {
                assert_eq!(
                    err,
                    SelectionError::IndexOutOfRange {
                        index: ITEMS,
                        len: ITEMS
                    }
                );
                assert_eq!(selection, before);
            }
        }

        assert!(timers.live.len() <= 1, "more than one live close timer: {sequence:?}");
        assert_eq!(
            timers.live.iter().next().copied(),
            selection.pending_close(),
            "host timers diverged from controller: {sequence:?}"
        );
        assert!(selection.active().map_or(true, |index| index < ITEMS));

        match event {
            SelectionEvent::Escape => {
                assert_eq!(selection.active(), None);
                assert_eq!(selection.pending_close(), None);
            }
            SelectionEvent::Activate(index)
            | SelectionEvent::HoverEnter(index)
            | SelectionEvent::Focus(index)
                if index < ITEMS =>
            {
                assert_eq!(selection.active(), Some(index));
                assert_eq!(selection.pending_close(), None);
            }
            _ => {}
        }
    }
}

fn enumerate(prefix: &mut Vec<Step>, depth: usize, steps: &[Step]) {
    run(prefix);
    if depth == 0 {
        return;
    }
    for step in steps {
        prefix.push(*step);
        enumerate(prefix, depth - 1, steps);
        prefix.pop();
    }
}

#[test]
fn every_short_event_sequence_keeps_single_open_and_single_timer() {
    let steps = alphabet();
    enumerate(&mut Vec::new(), 4, &steps);
}

#[test]
fn deferred_close_for_one_item_never_closes_a_newer_activation() {
    let mut selection =
        SelectionController::new(ITEMS, SelectionConfig::dropdown(), SelectionMode::Owned);
    selection
        .dispatch(SelectionEvent::HoverEnter(0))
        .expect("hover");
    let effects = selection
        .dispatch(SelectionEvent::PointerLeave)
        .expect("leave");
    let Some(SelectionEffect::ScheduleClose { ticket, .. }) = effects.first().copied() else {
        panic!("expected a scheduled close, got {effects:?}");
    };

    selection
        .dispatch(SelectionEvent::HoverEnter(1))
        .expect("hover");
    selection
        .dispatch(SelectionEvent::TimerElapsed(ticket))
        .expect("timer");

    assert_eq!(selection.active(), Some(1));
}

#[test]
fn strip_keyboard_navigation_wraps_for_every_size() {
    for len in 1..=6 {
        let strip = |start: usize| {
            SelectionController::new(
                len,
                SelectionConfig::strip().with_initial_active(Some(start)),
                SelectionMode::Owned,
            )
        };
        let press = |mut selection: SelectionController, key: NavKey| {
            let focused = selection.active().expect("strip has an active tab");
            selection
                .dispatch(SelectionEvent::Key { key, focused })
                .expect("key");
            selection.active()
        };

        assert_eq!(press(strip(len - 1), NavKey::ArrowRight), Some(0));
        assert_eq!(press(strip(0), NavKey::ArrowLeft), Some(len - 1));
        assert_eq!(press(strip(len / 2), NavKey::Home), Some(0));
        assert_eq!(press(strip(0), NavKey::End), Some(len - 1));
    }
}
