//! Single-active selection controller with deferred close.
//!
//! One controller drives a tab strip, a row of hover dropdowns, or a group of expandable
//! sidebar sections. The controller never touches a timer or the DOM. Each
//! [`SelectionController::dispatch`] call returns [`SelectionEffect`] values for the host to
//! execute, and timers report back through [`SelectionEvent::TimerElapsed`] with the
//! [`CloseTicket`] they were scheduled for. Only the most recently scheduled ticket can close
//! the group, so a timer that outlives a newer activation is inert.

use std::time::Duration;

use thiserror::Error;

use crate::keyboard::{map_key, KeyAction, NavKey, SelectionBehavior};

/// Delay between a pointer leaving a dropdown region and the dropdown closing.
pub const DEFAULT_CLOSE_DELAY: Duration = Duration::from_millis(120);

#[derive(Debug, Clone, PartialEq, Eq)]
/// Per-instance selection configuration.
pub struct SelectionConfig {
    /// Interaction shape of the group.
    pub behavior: SelectionBehavior,
    /// Delay applied by [`SelectionEvent::PointerLeave`].
    pub close_delay: Duration,
    /// Index active at construction. Ignored when out of range.
    pub initial_active: Option<usize>,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            behavior: SelectionBehavior::Strip,
            close_delay: DEFAULT_CLOSE_DELAY,
            initial_active: None,
        }
    }
}

impl SelectionConfig {
    /// Tab-strip configuration.
    pub fn strip() -> Self {
        Self::default()
    }

    /// Hover-dropdown configuration.
    pub fn dropdown() -> Self {
        Self {
            behavior: SelectionBehavior::Dropdown,
            ..Self::default()
        }
    }

    /// Expand/collapse group configuration.
    pub fn disclosure() -> Self {
        Self {
            behavior: SelectionBehavior::Disclosure,
            ..Self::default()
        }
    }

    /// Sets the initially active index.
    pub fn with_initial_active(mut self, index: Option<usize>) -> Self {
        self.initial_active = index;
        self
    }

    /// Overrides the deferred close delay.
    pub fn with_close_delay(mut self, delay: Duration) -> Self {
        self.close_delay = delay;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Who owns the active index.
pub enum SelectionMode {
    /// The controller owns the active index and updates it directly.
    Owned,
    /// The host owns the active index. Transitions are emitted as
    /// [`SelectionEffect::RequestChange`] and take effect once the host echoes the value back
    /// with [`SelectionEvent::SyncControlled`].
    Controlled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Identifies one scheduled deferred close.
pub struct CloseTicket(u64);

impl CloseTicket {
    /// Raw generation number.
    pub fn generation(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Motion hint: where the newly active item sits relative to the previous one.
///
/// Derived from raw index comparison, so it is only meaningful while the item list is stable.
pub enum TransitionDirection {
    /// The new index is greater than the previous one.
    Forward,
    /// The new index is not greater than the previous one.
    Backward,
}

impl TransitionDirection {
    /// DOM token for the direction.
    pub fn token(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Inputs accepted by [`SelectionController::dispatch`].
pub enum SelectionEvent {
    /// Click or programmatic selection of an index.
    Activate(usize),
    /// Open an index, or close it when it is already active.
    Toggle(usize),
    /// Pointer entered a trigger or its panel.
    HoverEnter(usize),
    /// A trigger received input focus.
    Focus(usize),
    /// Pointer left the trigger/panel region; schedules a deferred close.
    PointerLeave,
    /// Key pressed while item `focused` had focus.
    Key {
        /// Pressed key.
        key: NavKey,
        /// Index of the item that received the key event.
        focused: usize,
    },
    /// Close immediately and return focus to the trigger.
    Escape,
    /// Close immediately without moving focus.
    CloseNow,
    /// A timer scheduled by [`SelectionEffect::ScheduleClose`] fired.
    TimerElapsed(CloseTicket),
    /// The item list was replaced with `n` items.
    SetLen(usize),
    /// The host-owned value changed (controlled mode only).
    SyncControlled(Option<usize>),
    /// The owning component is being destroyed.
    Teardown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Side effects the host executes after a dispatch, in order.
pub enum SelectionEffect {
    /// Start a timer that reports [`SelectionEvent::TimerElapsed`] with `ticket` after `delay`.
    ScheduleClose {
        /// Ticket to report back.
        ticket: CloseTicket,
        /// Delay before reporting.
        delay: Duration,
    },
    /// Cancel the timer started for `ticket`.
    CancelClose(CloseTicket),
    /// Move input focus to the trigger of an item.
    FocusTrigger(usize),
    /// Move input focus to the first focusable element of an item's panel.
    FocusPanel(usize),
    /// Ask the host to change its controlled value.
    RequestChange(Option<usize>),
    /// The active index changed.
    Changed {
        /// New active index.
        active: Option<usize>,
        /// Motion hint for the new index.
        direction: Option<TransitionDirection>,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Rejected selection events. The controller state is unchanged whenever one is returned.
pub enum SelectionError {
    /// The index is outside `[0, len)`.
    #[error("index {index} is out of range for {len} items")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Current item count.
        len: usize,
    },
    /// [`SelectionEvent::SyncControlled`] was sent to an owned controller.
    #[error("selection is not controlled by the host")]
    NotControlled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Single-open selection state machine over `len` items.
pub struct SelectionController {
    len: usize,
    config: SelectionConfig,
    mode: SelectionMode,
    active: Option<usize>,
    last_active: Option<usize>,
    direction: Option<TransitionDirection>,
    pending_close: Option<CloseTicket>,
    next_generation: u64,
    torn_down: bool,
}

impl SelectionController {
    /// Creates a controller for `len` items.
    pub fn new(len: usize, config: SelectionConfig, mode: SelectionMode) -> Self {
        let active = config.initial_active.filter(|index| *index < len);
        Self {
            len,
            config,
            mode,
            active,
            last_active: active,
            direction: None,
            pending_close: None,
            next_generation: 0,
            torn_down: false,
        }
    }

    /// Currently active index.
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Whether `index` is the active index.
    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    /// Most recently activated index, retained across closes.
    pub fn last_active(&self) -> Option<usize> {
        self.last_active
    }

    /// Motion hint for the current active index.
    pub fn direction(&self) -> Option<TransitionDirection> {
        self.direction
    }

    /// Ticket of the deferred close currently pending.
    pub fn pending_close(&self) -> Option<CloseTicket> {
        self.pending_close
    }

    /// Item count.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the group has no items.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Instance configuration.
    pub fn config(&self) -> &SelectionConfig {
        &self.config
    }

    /// Ownership mode.
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Action a key press on item `focused` would produce, without applying it.
    pub fn key_action(&self, key: NavKey, focused: usize) -> KeyAction {
        let origin = match self.config.behavior {
            SelectionBehavior::Strip => self.active.unwrap_or(focused),
            SelectionBehavior::Dropdown | SelectionBehavior::Disclosure => focused,
        };
        map_key(key, origin, self.len, self.config.behavior)
    }

    /// Applies `event` and returns the effects the host must execute.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::IndexOutOfRange`] for an index outside `[0, len)` and
    /// [`SelectionError::NotControlled`] for a host sync on an owned controller. No state
    /// changes when an error is returned.
    pub fn dispatch(
        &mut self,
        event: SelectionEvent,
    ) -> Result<Vec<SelectionEffect>, SelectionError> {
        let mut effects = Vec::new();
        if self.torn_down {
            return Ok(effects);
        }

        match event {
            SelectionEvent::Activate(index)
            | SelectionEvent::HoverEnter(index)
            | SelectionEvent::Focus(index) => {
                self.check_index(index)?;
                self.open(index, &mut effects);
            }
            SelectionEvent::Toggle(index) => {
                self.check_index(index)?;
                self.toggle(index, &mut effects);
            }
            SelectionEvent::PointerLeave => self.schedule_close(&mut effects),
            SelectionEvent::Key { key, focused } => {
                self.check_index(focused)?;
                match self.key_action(key, focused) {
                    KeyAction::Activate(index) => {
                        self.open(index, &mut effects);
                        if self.config.behavior == SelectionBehavior::Dropdown {
                            effects.push(SelectionEffect::FocusPanel(index));
                        }
                    }
                    KeyAction::Toggle(index) => self.toggle(index, &mut effects),
                    KeyAction::MoveTo(index) => {
                        self.open(index, &mut effects);
                        effects.push(SelectionEffect::FocusTrigger(index));
                    }
                    KeyAction::Close => self.escape(&mut effects),
                    KeyAction::None => {}
                }
            }
            SelectionEvent::Escape => self.escape(&mut effects),
            SelectionEvent::CloseNow => {
                self.cancel_pending(&mut effects);
                self.commit(None, &mut effects);
            }
            SelectionEvent::TimerElapsed(ticket) => {
                if self.pending_close == Some(ticket) {
                    self.pending_close = None;
                    self.commit(None, &mut effects);
                }
            }
            SelectionEvent::SetLen(len) => {
                self.len = len;
                if self.active.is_some_and(|index| index >= len) {
                    // A stale index is cleared in both modes; the host still hears about it.
                    self.cancel_pending(&mut effects);
                    if self.mode == SelectionMode::Controlled {
                        effects.push(SelectionEffect::RequestChange(None));
                    }
                    self.apply(None, &mut effects);
                }
            }
            SelectionEvent::SyncControlled(value) => {
                if self.mode != SelectionMode::Controlled {
                    return Err(SelectionError::NotControlled);
                }
                if let Some(index) = value {
                    self.check_index(index)?;
                }
                self.apply(value, &mut effects);
            }
            SelectionEvent::Teardown => {
                self.cancel_pending(&mut effects);
                self.torn_down = true;
            }
        }

        Ok(effects)
    }

    fn check_index(&self, index: usize) -> Result<(), SelectionError> {
        if index < self.len {
            Ok(())
        } else {
            Err(SelectionError::IndexOutOfRange {
                index,
                len: self.len,
            })
        }
    }

    fn open(&mut self, index: usize, effects: &mut Vec<SelectionEffect>) {
        self.cancel_pending(effects);
        self.commit(Some(index), effects);
    }

    fn toggle(&mut self, index: usize, effects: &mut Vec<SelectionEffect>) {
        self.cancel_pending(effects);
        let next = if self.active == Some(index) {
            None
        } else {
            Some(index)
        };
        self.commit(next, effects);
    }

    fn escape(&mut self, effects: &mut Vec<SelectionEffect>) {
        let previous = self.active;
        self.cancel_pending(effects);
        self.commit(None, effects);
        if let Some(index) = previous {
            effects.push(SelectionEffect::FocusTrigger(index));
        }
    }

    fn schedule_close(&mut self, effects: &mut Vec<SelectionEffect>) {
        self.cancel_pending(effects);
        if self.active.is_none() {
            return;
        }
        let ticket = CloseTicket(self.next_generation);
        self.next_generation += 1;
        self.pending_close = Some(ticket);
        effects.push(SelectionEffect::ScheduleClose {
            ticket,
            delay: self.config.close_delay,
        });
    }

    fn cancel_pending(&mut self, effects: &mut Vec<SelectionEffect>) {
        if let Some(ticket) = self.pending_close.take() {
            effects.push(SelectionEffect::CancelClose(ticket));
        }
    }

    fn commit(&mut self, next: Option<usize>, effects: &mut Vec<SelectionEffect>) {
        match self.mode {
            SelectionMode::Owned => self.apply(next, effects),
            SelectionMode::Controlled => {
                if next != self.active {
                    effects.push(SelectionEffect::RequestChange(next));
                }
            }
        }
    }

    fn apply(&mut self, next: Option<usize>, effects: &mut Vec<SelectionEffect>) {
        if next == self.active {
            return;
        }
        if let Some(index) = next {
            self.direction = self.last_active.map(|last| {
                if index > last {
                    TransitionDirection::Forward
                } else {
                    TransitionDirection::Backward
                }
            });
            self.last_active = Some(index);
        }
        self.active = next;
        effects.push(SelectionEffect::Changed {
            active: next,
            direction: self.direction,
        });
    }
}
