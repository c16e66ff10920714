//! Leptos binding for [`SelectionController`].
//!
//! The headless controller decides; this module executes its effects: close timers through
//! `set_timeout_with_handle`, focus moves through the DOM, and change notifications through
//! signals and host callbacks.

use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::logging;
use leptos::*;
use ui_core_headless::{
    CloseTicket, KeyAction, NavKey, SelectionConfig, SelectionController, SelectionEffect,
    SelectionEvent, SelectionMode, TransitionDirection,
};

use crate::a11y;
use crate::ids::next_instance_id;

/// Reactive handle over one selection group. Cheap to copy into event handlers.
#[derive(Clone, Copy)]
pub struct SelectionHandle {
    controller: StoredValue<SelectionController>,
    active: RwSignal<Option<usize>>,
    direction: RwSignal<Option<TransitionDirection>>,
    timer: StoredValue<Option<(CloseTicket, TimeoutHandle)>>,
    focus_guard: StoredValue<Option<usize>>,
    on_change: Option<Callback<Option<usize>>>,
    prefix: StoredValue<String>,
}

/// Creates a selection group over `len` items.
///
/// When `value` is supplied the group is controlled: transitions are forwarded to
/// `on_change` and applied once the host value changes. Otherwise the group owns its state
/// and `on_change` only observes changes.
pub fn use_selection(
    len: Signal<usize>,
    config: SelectionConfig,
    value: Option<Signal<Option<usize>>>,
    on_change: Option<Callback<Option<usize>>>,
    id_prefix: &str,
) -> SelectionHandle {
    let (mode, config) = match value {
        Some(value) => (
            SelectionMode::Controlled,
            config.with_initial_active(value.get_untracked()),
        ),
        None => (SelectionMode::Owned, config),
    };
    let controller = SelectionController::new(len.get_untracked(), config, mode);

    let handle = SelectionHandle {
        active: create_rw_signal(controller.active()),
        direction: create_rw_signal(controller.direction()),
        controller: store_value(controller),
        timer: store_value(None),
        focus_guard: store_value(None),
        on_change,
        prefix: store_value(next_instance_id(id_prefix)),
    };

    create_effect(move |_| {
        let len = len.get();
        handle.dispatch(SelectionEvent::SetLen(len));
    });

    if let Some(value) = value {
        create_effect(move |_| {
            let next = value.get();
            handle.dispatch(SelectionEvent::SyncControlled(next));
        });
    }

    on_cleanup(move || handle.teardown());

    handle
}

impl SelectionHandle {
    /// Active index (tracked).
    pub fn active(&self) -> Option<usize> {
        self.active.get()
    }

    /// Whether `index` is active (tracked).
    pub fn is_active(&self, index: usize) -> bool {
        self.active.get() == Some(index)
    }

    /// `data-ui-direction` token for the current transition (tracked).
    pub fn direction_token(&self) -> &'static str {
        self.direction
            .get()
            .map(TransitionDirection::token)
            .unwrap_or("none")
    }

    /// DOM id of item `index`'s trigger.
    pub fn trigger_id(&self, index: usize) -> String {
        self.prefix
            .with_value(|prefix| format!("{prefix}-trigger-{index}"))
    }

    /// DOM id of item `index`'s panel.
    pub fn panel_id(&self, index: usize) -> String {
        self.prefix.with_value(|prefix| format!("{prefix}-panel-{index}"))
    }

    /// Feeds an event to the controller and executes the resulting effects.
    pub fn dispatch(&self, event: SelectionEvent) {
        let Some(result) = self
            .controller
            .try_update_value(|controller| controller.dispatch(event))
        else {
            return;
        };

        match result {
            Ok(effects) => self.run(effects),
            Err(err) => {
                let prefix = self.prefix.get_value();
                logging::warn!("selection {prefix} rejected {event:?}: {err}");
            }
        }
    }

    /// Trigger focus entry point. Ignores the focus event caused by returning focus to a
    /// trigger after Escape, which would otherwise reopen the item.
    pub fn focus(&self, index: usize) {
        if self.focus_guard.get_value() == Some(index) {
            return;
        }
        self.dispatch(SelectionEvent::Focus(index));
    }

    /// Routes a keydown on item `focused`. Returns `true` and prevents default when handled.
    pub fn on_key(&self, ev: &web_sys::KeyboardEvent, focused: usize) -> bool {
        let Some(key) = NavKey::parse(&ev.key()) else {
            return false;
        };
        let action = self
            .controller
            .try_with_value(|controller| controller.key_action(key, focused))
            .unwrap_or(KeyAction::None);
        if action == KeyAction::None {
            return false;
        }

        ev.prevent_default();
        self.dispatch(SelectionEvent::Key { key, focused });
        true
    }

    fn run(&self, effects: Vec<SelectionEffect>) {
        for effect in effects {
            match effect {
                SelectionEffect::ScheduleClose { ticket, delay } => self.schedule(ticket, delay),
                SelectionEffect::CancelClose(ticket) => self.cancel(ticket),
                SelectionEffect::FocusTrigger(index) => {
                    let id = self.trigger_id(index);
                    self.focus_guard.set_value(Some(index));
                    if !a11y::focus_element_by_id(&id) {
                        logging::warn!("focus target #{id} is not in the document");
                    }
                    self.focus_guard.set_value(None);
                }
                SelectionEffect::FocusPanel(index) => {
                    let id = self.panel_id(index);
                    request_animation_frame(move || {
                        let _ = a11y::focus_first_in(&id);
                    });
                }
                SelectionEffect::RequestChange(next) => {
                    if let Some(on_change) = self.on_change {
                        on_change.call(next);
                    }
                }
                SelectionEffect::Changed { active, direction } => {
                    self.active.set(active);
                    self.direction.set(direction);
                    let owned = self
                        .controller
                        .try_with_value(|controller| controller.mode() == SelectionMode::Owned)
                        .unwrap_or(false);
                    if owned {
                        if let Some(on_change) = self.on_change {
                            on_change.call(active);
                        }
                    }
                }
            }
        }
    }

    fn schedule(&self, ticket: CloseTicket, delay: std::time::Duration) {
        let handle = *self;
        let scheduled = set_timeout_with_handle(
            move || {
                let _ = handle.timer.try_update_value(|timer| {
                    if timer.map(|(pending, _)| pending) == Some(ticket) {
                        *timer = None;
                    }
                });
                handle.dispatch(SelectionEvent::TimerElapsed(ticket));
            },
            delay,
        );

        match scheduled {
            Ok(timeout) => self.timer.set_value(Some((ticket, timeout))),
            Err(err) => {
                logging::warn!("close timer could not be scheduled: {err:?}");
                self.dispatch(SelectionEvent::TimerElapsed(ticket));
            }
        }
    }

    fn cancel(&self, ticket: CloseTicket) {
        let pending = self.timer.try_update_value(|timer| match *timer {
            Some((pending, timeout)) if pending == ticket => {
                *timer = None;
                Some(timeout)
            }
            _ => None,
        });
        if let Some(Some(timeout)) = pending {
            timeout.clear();
        }
    }

    fn teardown(&self) {
        if let Some(Some((_, timeout))) = self.timer.try_update_value(Option::take) {
            timeout.clear();
        }
        let _ = self
            .controller
            .try_update_value(|controller| controller.dispatch(SelectionEvent::Teardown));
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn owned_group_applies_activation_and_reports_it() {
        let _ = create_runtime();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let selection = use_selection(
            Signal::derive(|| 3),
            SelectionConfig::strip().with_initial_active(Some(0)),
            None,
            Some(Callback::new(move |next| sink.borrow_mut().push(next))),
            "tabs",
        );

        selection.dispatch(SelectionEvent::Activate(2));

        assert_eq!(selection.active.get_untracked(), Some(2));
        assert_eq!(
            selection.direction.get_untracked(),
            Some(TransitionDirection::Forward)
        );
        assert_eq!(*seen.borrow(), vec![Some(2)]);
    }

    #[test]
    fn controlled_group_waits_for_host_value() {
        let _ = create_runtime();
        let requested = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&requested);
        let host = create_rw_signal(Some(0_usize));
        let selection = use_selection(
            Signal::derive(|| 3),
            SelectionConfig::strip(),
            Some(Signal::from(host)),
            Some(Callback::new(move |next| sink.borrow_mut().push(next))),
            "tabs",
        );

        selection.dispatch(SelectionEvent::Activate(1));

        assert_eq!(*requested.borrow(), vec![Some(1)]);
        assert_eq!(selection.active.get_untracked(), Some(0));
    }

    #[test]
    fn out_of_range_activation_is_ignored() {
        let _ = create_runtime();
        let selection = use_selection(
            Signal::derive(|| 2),
            SelectionConfig::dropdown(),
            None,
            None,
            "nav",
        );

        selection.dispatch(SelectionEvent::Activate(5));

        assert_eq!(selection.active.get_untracked(), None);
    }

    #[test]
    fn ids_pair_triggers_with_panels() {
        let _ = create_runtime();
        let selection = use_selection(
            Signal::derive(|| 1),
            SelectionConfig::disclosure(),
            None,
            None,
            "sidebar",
        );

        let trigger = selection.trigger_id(0);
        let panel = selection.panel_id(0);
        assert!(trigger.starts_with("sidebar-") && trigger.ends_with("-trigger-0"));
        assert_eq!(
            trigger.trim_end_matches("-trigger-0"),
            panel.trim_end_matches("-panel-0")
        );
    }
}
