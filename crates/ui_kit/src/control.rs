//! Owned-versus-controlled state for component values.
//!
//! A component that accepts an optional host value resolves it once, at construction, into a
//! [`Control`]. The mode never changes afterward.

use leptos::*;

/// Source of truth for a component value.
pub enum Control<T: 'static> {
    /// The component owns the value. `on_change` observes committed edits.
    Owned {
        /// Component-owned value.
        value: RwSignal<T>,
        /// Change observer.
        on_change: Option<Callback<T>>,
    },
    /// The host owns the value and is asked to change it through `on_change`.
    Controlled {
        /// Host value.
        value: Signal<T>,
        /// Change request sink. Without one, a controlled value is read-only.
        on_change: Option<Callback<T>>,
    },
}

impl<T: 'static> Clone for Control<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for Control<T> {}

impl<T: Clone + 'static> Control<T> {
    /// Picks controlled mode when the host supplied a value, otherwise owns `initial`.
    pub fn resolve(value: Option<Signal<T>>, on_change: Option<Callback<T>>, initial: T) -> Self {
        match value {
            Some(value) => Self::Controlled { value, on_change },
            None => Self::Owned {
                value: create_rw_signal(initial),
                on_change,
            },
        }
    }

    /// Tracked read.
    pub fn get(&self) -> T {
        match self {
            Self::Owned { value, .. } => value.get(),
            Self::Controlled { value, .. } => value.get(),
        }
    }

    /// Untracked read.
    pub fn get_untracked(&self) -> T {
        match self {
            Self::Owned { value, .. } => value.get_untracked(),
            Self::Controlled { value, .. } => value.get_untracked(),
        }
    }

    /// Writes an owned value directly, or forwards the request to the host.
    pub fn request(&self, next: T) {
        match self {
            Self::Owned { value, on_change } => {
                value.set(next.clone());
                if let Some(on_change) = on_change {
                    on_change.call(next);
                }
            }
            Self::Controlled { on_change, .. } => {
                if let Some(on_change) = on_change {
                    on_change.call(next);
                }
            }
        }
    }

    /// Requests `next` and returns the value a field should show afterwards. A controlled
    /// value that the host refused or never updated is returned unchanged.
    pub fn edit(&self, next: T) -> T {
        self.request(next);
        self.get_untracked()
    }

    /// Whether the host owns the value.
    pub fn is_controlled(&self) -> bool {
        matches!(self, Self::Controlled { .. })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn owned_value_updates_in_place_and_notifies() {
        let _ = create_runtime();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let control = Control::resolve(
            None,
            Some(Callback::new(move |next: String| sink.borrow_mut().push(next))),
            String::from("a"),
        );

        control.request(String::from("b"));

        assert!(!control.is_controlled());
        assert_eq!(control.get_untracked(), "b");
        assert_eq!(*seen.borrow(), vec![String::from("b")]);
    }

    #[test]
    fn controlled_value_only_changes_through_host() {
        let _ = create_runtime();
        let host = create_rw_signal(1_usize);
        let control = Control::resolve(
            Some(Signal::from(host)),
            Some(Callback::new(move |next: usize| host.set(next * 10))),
            0,
        );

        control.request(2);

        assert!(control.is_controlled());
        assert_eq!(control.get_untracked(), 20);
    }

    #[test]
    fn controlled_edit_reports_the_host_value_when_refused() {
        let _ = create_runtime();
        let host = create_rw_signal(String::from("locked"));
        let read_only = Control::resolve(Some(Signal::from(host)), None, String::new());
        let refusing = Control::resolve(
            Some(Signal::from(host)),
            Some(Callback::new(|_: String| {})),
            String::new(),
        );

        assert_eq!(read_only.edit(String::from("typed")), "locked");
        assert_eq!(refusing.edit(String::from("typed")), "locked");
        assert_eq!(host.get_untracked(), "locked");
    }

    #[test]
    fn controlled_edit_reports_an_accepted_value() {
        let _ = create_runtime();
        let host = create_rw_signal(String::new());
        let control = Control::resolve(
            Some(Signal::from(host)),
            Some(Callback::new(move |next: String| host.set(next.to_uppercase()))),
            String::new(),
        );

        assert_eq!(control.edit(String::from("ab")), "AB");
    }
}
