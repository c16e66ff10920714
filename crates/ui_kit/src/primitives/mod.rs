//! Component primitives and their shared visual tokens.

use leptos::ev::{FocusEvent, KeyboardEvent, MouseEvent};
use leptos::*;

use crate::{Icon, IconName, IconSize};

mod controls;
mod data_display;
mod navbar;
mod navigation;
mod overlays;
mod sidebar;
mod tabs;

pub use controls::{Button, Input};
pub use data_display::{Card, Table};
pub use navbar::{Navbar, NavbarBrand, NavbarItem};
pub use navigation::{
    Navigation, NavCta, NavDropdown, NavDropdownItem, NavItem, NavLink,
};
pub use overlays::Modal;
pub use sidebar::{Sidebar, SidebarGroup, SidebarItem, SidebarLink};
pub use tabs::{TabItem, Tabs};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Button emphasis variants.
pub enum ButtonVariant {
    /// Filled, emphasized action.
    Primary,
    /// Outlined neutral action.
    Secondary,
    /// Borderless quiet action.
    Ghost,
}

impl Default for ButtonVariant {
    fn default() -> Self {
        Self::Primary
    }
}

impl ButtonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Ghost => "ghost",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Button sizing tokens.
pub enum ButtonSize {
    /// Dense button.
    Sm,
    /// Default button.
    Md,
    /// Large button.
    Lg,
}

impl Default for ButtonSize {
    fn default() -> Self {
        Self::Md
    }
}

impl ButtonSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// HTML `type` of a button.
pub enum ButtonType {
    /// `type="button"`.
    Button,
    /// `type="submit"`.
    Submit,
    /// `type="reset"`.
    Reset,
}

impl Default for ButtonType {
    fn default() -> Self {
        Self::Button
    }
}

impl ButtonType {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Submit => "submit",
            Self::Reset => "reset",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// HTML `type` of a text input.
pub enum InputType {
    /// Free text.
    Text,
    /// Email address.
    Email,
    /// Masked password.
    Password,
    /// Numeric entry.
    Number,
    /// Telephone number.
    Tel,
    /// URL.
    Url,
}

impl Default for InputType {
    fn default() -> Self {
        Self::Text
    }
}

impl InputType {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
            Self::Number => "number",
            Self::Tel => "tel",
            Self::Url => "url",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Input sizing tokens.
pub enum InputSize {
    /// Dense field.
    Sm,
    /// Default field.
    Md,
    /// Large field.
    Lg,
}

impl Default for InputSize {
    fn default() -> Self {
        Self::Md
    }
}

impl InputSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Modal dialog width tokens.
pub enum ModalSize {
    /// Narrow dialog.
    Sm,
    /// Default dialog.
    Md,
    /// Wide dialog.
    Lg,
    /// Extra wide dialog.
    Xl,
}

impl Default for ModalSize {
    fn default() -> Self {
        Self::Md
    }
}

impl ModalSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Navbar surface variants.
pub enum NavbarVariant {
    /// Light surface with a bottom border.
    Default,
    /// No background; sits over hero content.
    Transparent,
    /// Dark surface.
    Dark,
}

impl Default for NavbarVariant {
    fn default() -> Self {
        Self::Default
    }
}

impl NavbarVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Transparent => "transparent",
            Self::Dark => "dark",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Navbar height tokens.
pub enum NavbarSize {
    /// Compact bar.
    Sm,
    /// Default bar.
    Md,
    /// Tall bar.
    Lg,
}

impl Default for NavbarSize {
    fn default() -> Self {
        Self::Md
    }
}

impl NavbarSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

pub(crate) fn open_token(open: bool) -> &'static str {
    if open {
        "open"
    } else {
        "closed"
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn layout_class_is_appended_only_when_present() {
        assert_eq!(merge_layout_class("ui-card", None), "ui-card");
        assert_eq!(merge_layout_class("ui-card", Some("")), "ui-card");
        assert_eq!(
            merge_layout_class("ui-card", Some("max-w-sm")),
            "ui-card max-w-sm"
        );
    }

    #[test]
    fn defaults_match_documented_tokens() {
        assert_eq!(ButtonVariant::default().token(), "primary");
        assert_eq!(ButtonSize::default().token(), "md");
        assert_eq!(ButtonType::default().token(), "button");
        assert_eq!(InputType::default().token(), "text");
        assert_eq!(InputSize::default().token(), "md");
        assert_eq!(ModalSize::default().token(), "md");
        assert_eq!(NavbarVariant::default().token(), "default");
        assert_eq!(NavbarSize::default().token(), "md");
    }

    #[test]
    fn state_tokens() {
        assert_eq!(bool_token(true), "true");
        assert_eq!(open_token(false), "closed");
    }
}
