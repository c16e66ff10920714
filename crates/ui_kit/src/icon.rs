//! Inline SVG icon set used by the component library.

use leptos::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Named icons available to components and host content.
pub enum IconName {
    /// Downward chevron for disclosure and dropdown triggers.
    ChevronDown,
    /// Left-pointing arrow (collapse).
    ArrowLeft,
    /// Right-pointing arrow (expand).
    ArrowRight,
    /// Dismiss cross.
    Close,
    /// Three-line menu glyph.
    Menu,
    /// Light mode glyph.
    Sun,
    /// Dark mode glyph.
    Moon,
}

impl IconName {
    /// Stable DOM token.
    pub fn token(self) -> &'static str {
        match self {
            Self::ChevronDown => "chevron-down",
            Self::ArrowLeft => "arrow-left",
            Self::ArrowRight => "arrow-right",
            Self::Close => "close",
            Self::Menu => "menu",
            Self::Sun => "sun",
            Self::Moon => "moon",
        }
    }

    fn view_box(self) -> &'static str {
        match self {
            Self::Close | Self::Menu => "0 0 24 24",
            _ => "0 0 20 20",
        }
    }

    fn stroked(self) -> bool {
        matches!(self, Self::Close | Self::Menu)
    }

    fn paths(self) -> &'static [&'static str] {
        match self {
            Self::ChevronDown => &["M5.23 7.21a.75.75 0 011.06.02L10 10.94l3.71-3.71a.75.75 0 111.06 1.06l-4.24 4.24a.75.75 0 01-1.06 0L5.25 8.29a.75.75 0 01-.02-1.08z"],
            Self::ArrowLeft => &["M7.21 14.77a.75.75 0 101.06-1.06L6.56 12H14a.75.75 0 000-1.5H6.56l1.71-1.71a.75.75 0 10-1.06-1.06l-3 3a.75.75 0 000 1.06l3 3z"],
            Self::ArrowRight => &["M12.79 5.23a.75.75 0 10-1.06 1.06L13.44 8H6a.75.75 0 000 1.5h7.44l-1.71 1.71a.75.75 0 101.06 1.06l3-3a.75.75 0 000-1.06l-3-3z"],
            Self::Close => &["M18 6L6 18", "M6 6l12 12"],
            Self::Menu => &["M3 12h18", "M3 6h18", "M3 18h18"],
            Self::Sun => &["M10 2a1 1 0 011 1v1a1 1 0 11-2 0V3a1 1 0 011-1zm4 8a4 4 0 11-8 0 4 4 0 018 0zm-9 0a1 1 0 01-1 1H3a1 1 0 110-2h1a1 1 0 011 1zm13 1a1 1 0 100-2h-1a1 1 0 100 2h1zM10 17a1 1 0 011 1v1a1 1 0 11-2 0v-1a1 1 0 011-1z"],
            Self::Moon => &["M17.293 13.293A8 8 0 016.707 2.707 8.001 8.001 0 1017.293 13.293z"],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Icon sizing tokens.
pub enum IconSize {
    /// 12px.
    Xs,
    /// 16px.
    Sm,
    /// 20px.
    Md,
    /// 24px.
    Lg,
}

impl Default for IconSize {
    fn default() -> Self {
        Self::Md
    }
}

impl IconSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[component]
/// Decorative inline SVG icon. Always hidden from assistive technology.
pub fn Icon(
    icon: IconName,
    #[prop(default = IconSize::Md)] size: IconSize,
    #[prop(optional, into)] rotated: MaybeSignal<bool>,
) -> impl IntoView {
    let stroked = icon.stroked();
    let paths = icon
        .paths()
        .iter()
        .map(|d| view! { <path d=*d fill-rule="evenodd" clip-rule="evenodd"></path> })
        .collect_view();

    view! {
        <svg
            class="ui-icon"
            viewBox=icon.view_box()
            fill=if stroked { "none" } else { "currentColor" }
            stroke=if stroked { "currentColor" } else { "none" }
            stroke-width=if stroked { "2" } else { "0" }
            stroke-linecap="round"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="icon"
            data-ui-icon=icon.token()
            data-ui-size=size.token()
            data-ui-rotated=move || if rotated.get() { "true" } else { "false" }
        >
            {paths}
        </svg>
    }
}
