//! Keyboard mapping shared by every selection group so tab strips, dropdown triggers, and
//! disclosure groups agree on wraparound and Home/End semantics.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Navigation keys understood by selection groups.
pub enum NavKey {
    /// `ArrowLeft`.
    ArrowLeft,
    /// `ArrowRight`.
    ArrowRight,
    /// `ArrowUp`.
    ArrowUp,
    /// `ArrowDown`.
    ArrowDown,
    /// `Home`.
    Home,
    /// `End`.
    End,
    /// `Enter`.
    Enter,
    /// Space bar.
    Space,
    /// `Escape`.
    Escape,
}

impl NavKey {
    /// Parses a DOM `KeyboardEvent.key` value, including legacy IE/Edge aliases.
    pub fn parse(key: &str) -> Option<Self> {
        Some(match key {
            "ArrowLeft" | "Left" => Self::ArrowLeft,
            "ArrowRight" | "Right" => Self::ArrowRight,
            "ArrowUp" | "Up" => Self::ArrowUp,
            "ArrowDown" | "Down" => Self::ArrowDown,
            "Home" => Self::Home,
            "End" => Self::End,
            "Enter" => Self::Enter,
            " " | "Spacebar" => Self::Space,
            "Escape" | "Esc" => Self::Escape,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Interaction shape of a selection group.
pub enum SelectionBehavior {
    /// Single-select strip (tabs): arrows move, Home/End jump, never closes by key.
    Strip,
    /// Hover/focus dropdown triggers: Enter/Space/ArrowDown open and enter the panel.
    Dropdown,
    /// Expand/collapse groups: Enter/Space toggle the focused group.
    Disclosure,
}

impl Default for SelectionBehavior {
    fn default() -> Self {
        Self::Strip
    }
}

impl SelectionBehavior {
    /// DOM token for the behavior.
    pub fn token(self) -> &'static str {
        match self {
            Self::Strip => "strip",
            Self::Dropdown => "dropdown",
            Self::Disclosure => "disclosure",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Outcome of a key press on a selection group.
pub enum KeyAction {
    /// Open/select the index.
    Activate(usize),
    /// Open the index, or close it when it is already open.
    Toggle(usize),
    /// Move the active index immediately.
    MoveTo(usize),
    /// Close the group.
    Close,
    /// The key is not handled.
    None,
}

/// Moves `current` by `delta` positions with wraparound. Returns `None` for an empty group.
pub fn wrap_index(current: usize, delta: isize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let len = len as isize;
    Some((current as isize + delta).rem_euclid(len) as usize)
}

/// Maps `key` pressed on item `index` of a `len`-item group to an action.
///
/// `index` outside `[0, len)` never produces an action.
pub fn map_key(key: NavKey, index: usize, len: usize, behavior: SelectionBehavior) -> KeyAction {
    if index >= len {
        return KeyAction::None;
    }

    match behavior {
        SelectionBehavior::Strip => match key {
            NavKey::ArrowLeft => wrap_index(index, -1, len).map_or(KeyAction::None, KeyAction::MoveTo),
            NavKey::ArrowRight => wrap_index(index, 1, len).map_or(KeyAction::None, KeyAction::MoveTo),
            NavKey::Home => KeyAction::MoveTo(0),
            NavKey::End => KeyAction::MoveTo(len - 1),
            NavKey::Enter | NavKey::Space => KeyAction::Activate(index),
            _ => KeyAction::None,
        },
        SelectionBehavior::Dropdown => match key {
            NavKey::Enter | NavKey::Space | NavKey::ArrowDown => KeyAction::Activate(index),
            NavKey::Escape => KeyAction::Close,
            _ => KeyAction::None,
        },
        SelectionBehavior::Disclosure => match key {
            NavKey::Enter | NavKey::Space => KeyAction::Toggle(index),
            NavKey::Escape => KeyAction::Close,
            _ => KeyAction::None,
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn strip_arrows_wrap_at_both_ends() {
        for len in 1..6 {
            assert_eq!(
                map_key(NavKey::ArrowRight, len - 1, len, SelectionBehavior::Strip),
                KeyAction::MoveTo(0)
            );
            assert_eq!(
                map_key(NavKey::ArrowLeft, 0, len, SelectionBehavior::Strip),
                KeyAction::MoveTo(len - 1)
            );
            assert_eq!(
                map_key(NavKey::Home, len / 2, len, SelectionBehavior::Strip),
                KeyAction::MoveTo(0)
            );
            assert_eq!(
                map_key(NavKey::End, 0, len, SelectionBehavior::Strip),
                KeyAction::MoveTo(len - 1)
            );
        }
    }

    #[test]
    fn strip_never_closes() {
        assert_eq!(
            map_key(NavKey::Escape, 0, 3, SelectionBehavior::Strip),
            KeyAction::None
        );
    }

    #[test]
    fn dropdown_opens_on_enter_space_and_arrow_down() {
        for key in [NavKey::Enter, NavKey::Space, NavKey::ArrowDown] {
            assert_eq!(
                map_key(key, 2, 4, SelectionBehavior::Dropdown),
                KeyAction::Activate(2)
            );
        }
        assert_eq!(
            map_key(NavKey::ArrowRight, 2, 4, SelectionBehavior::Dropdown),
            KeyAction::None
        );
        assert_eq!(
            map_key(NavKey::Escape, 2, 4, SelectionBehavior::Dropdown),
            KeyAction::Close
        );
    }

    #[test]
    fn disclosure_toggles_focused_group() {
        assert_eq!(
            map_key(NavKey::Space, 1, 2, SelectionBehavior::Disclosure),
            KeyAction::Toggle(1)
        );
    }

    #[test]
    fn empty_or_out_of_range_groups_ignore_keys() {
        assert_eq!(
            map_key(NavKey::Home, 0, 0, SelectionBehavior::Strip),
            KeyAction::None
        );
        assert_eq!(
            map_key(NavKey::Enter, 3, 3, SelectionBehavior::Dropdown),
            KeyAction::None
        );
        assert_eq!(wrap_index(0, 1, 0), None);
    }

    #[test]
    fn parses_dom_key_names() {
        assert_eq!(NavKey::parse(" "), Some(NavKey::Space));
        assert_eq!(NavKey::parse("Esc"), Some(NavKey::Escape));
        assert_eq!(NavKey::parse("Tab"), None);
    }
}
