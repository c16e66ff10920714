use super::*;

use serde::{Deserialize, Serialize};
use ui_core_headless::{NavKey, SelectionConfig, SelectionEvent};

use crate::a11y;
use crate::ids::next_instance_id;
use crate::selection::{use_selection, SelectionHandle};

const SCROLLED_THRESHOLD_PX: f64 = 4.0;
const MAX_PANEL_COLUMNS: u8 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Plain top-level link.
pub struct NavLink {
    /// Visible text.
    pub label: String,
    /// Link target.
    pub href: String,
    /// Accessible name override.
    #[serde(default)]
    pub aria_label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Entry inside a dropdown panel.
pub struct NavDropdownItem {
    /// Visible text.
    pub label: String,
    /// Link target.
    pub href: String,
    /// Secondary line under the label.
    #[serde(default)]
    pub description: Option<String>,
    /// Leading icon.
    #[serde(default)]
    pub icon: Option<IconName>,
    /// Accessible name override.
    #[serde(default)]
    pub aria_label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Top-level trigger that opens a panel of links.
pub struct NavDropdown {
    /// Trigger text.
    pub label: String,
    /// Panel entries.
    pub items: Vec<NavDropdownItem>,
    /// Accessible name override for the trigger.
    #[serde(default)]
    pub aria_label: Option<String>,
    /// Requested panel grid columns.
    #[serde(default)]
    pub columns: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
/// Top-level navigation entry.
pub enum NavItem {
    /// Trigger with a dropdown panel.
    Dropdown(NavDropdown),
    /// Plain link.
    Link(NavLink),
}

impl NavItem {
    /// Visible text.
    pub fn label(&self) -> &str {
        match self {
            Self::Dropdown(dropdown) => &dropdown.label,
            Self::Link(link) => &link.label,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Call-to-action shown at the end of the bar. Renders a link when `href` is set.
pub struct NavCta {
    /// Visible text.
    pub label: String,
    /// Link target.
    #[serde(default)]
    pub href: Option<String>,
    /// Accessible name override.
    #[serde(default)]
    pub aria_label: Option<String>,
}

/// Grid columns for a dropdown panel: the requested count, or two for panels with more than
/// six entries, clamped to `1..=5`.
pub(crate) fn dropdown_grid_columns(dropdown: &NavDropdown) -> u8 {
    let fallback = if dropdown.items.len() > 6 { 2 } else { 1 };
    dropdown
        .columns
        .unwrap_or(fallback)
        .clamp(1, MAX_PANEL_COLUMNS)
}

pub(crate) fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD_PX
}

fn current_scroll_y() -> f64 {
    window().scroll_y().unwrap_or(0.0)
}

fn trigger_view(selection: SelectionHandle, index: usize, dropdown: NavDropdown) -> View {
    let open = move || selection.is_active(index);
    view! {
        <button
            type="button"
            class="ui-navigation-trigger"
            id=selection.trigger_id(index)
            aria-haspopup="menu"
            aria-expanded=move || bool_token(open())
            aria-controls=selection.panel_id(index)
            aria-label=dropdown.aria_label
            data-ui-slot="trigger"
            data-ui-state=move || open_token(open())
            on:mouseenter=move |_| selection.dispatch(SelectionEvent::HoverEnter(index))
            on:focus=move |_| selection.focus(index)
            on:keydown=move |ev| {
                selection.on_key(&ev, index);
            }
        >
            {dropdown.label}
            <Icon icon=IconName::ChevronDown size=IconSize::Sm rotated=Signal::derive(open) />
        </button>
    }
    .into_view()
}

fn panel_view(selection: SelectionHandle, index: usize, dropdown: NavDropdown) -> View {
    let columns = dropdown_grid_columns(&dropdown);
    let panel_id = selection.panel_id(index);
    let keydown_panel_id = panel_id.clone();

    view! {
        <div
            class="ui-navigation-panel"
            id=panel_id
            role="menu"
            aria-label=format!("{} menu", dropdown.label)
            data-ui-slot="panel"
            data-ui-direction=selection.direction_token()
            data-ui-columns=columns
            on:mouseenter=move |_| selection.dispatch(SelectionEvent::HoverEnter(index))
            on:keydown=move |ev| {
                if NavKey::parse(&ev.key()) == Some(NavKey::Escape) {
                    ev.prevent_default();
                    selection.dispatch(SelectionEvent::Escape);
                } else {
                    a11y::handle_menu_roving_keydown(&ev, &keydown_panel_id);
                }
            }
        >
            <div class="ui-navigation-panel-grid" data-ui-columns=columns>
                {dropdown
                    .items
                    .into_iter()
                    .map(|item| {
                        let aria_label = item.aria_label.unwrap_or_else(|| item.label.clone());
                        view! {
                            <a
                                class="ui-navigation-panel-item"
                                href=item.href
                                role="menuitem"
                                aria-label=aria_label
                            >
                                {item.icon.map(|icon| view! { <Icon icon size=IconSize::Sm /> })}
                                <span class="ui-navigation-panel-text">
                                    <span class="ui-navigation-panel-label">{item.label}</span>
                                    {item
                                        .description
                                        .map(|description| {
                                            view! {
                                                <span class="ui-navigation-panel-description">
                                                    {description}
                                                </span>
                                            }
                                        })}
                                </span>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
    .into_view()
}

fn cta_view(cta: NavCta, on_cta: Option<Callback<MouseEvent>>, ui_slot: &'static str) -> View {
    let aria_label = cta.aria_label.unwrap_or_else(|| cta.label.clone());
    match cta.href {
        Some(href) => view! {
            <a
                class="ui-navigation-cta"
                href=href
                aria-label=aria_label
                data-ui-slot=ui_slot
            >
                {cta.label}
            </a>
        }
        .into_view(),
        None => view! {
            <Button
                variant=ButtonVariant::Primary
                label=cta.label
                aria_label=aria_label
                ui_slot=ui_slot
                on_click=Callback::new(move |ev| {
                    if let Some(on_cta) = on_cta.as_ref() {
                        on_cta.call(ev);
                    }
                })
            />
        }
        .into_view(),
    }
}

#[component]
/// Sticky site header with links, hover dropdowns, optional dark-mode toggle and
/// call-to-action, and a mobile drawer.
///
/// Dropdowns open on hover, focus, or Enter/Space/ArrowDown and close 120 ms after the
/// pointer leaves the trigger row and panel. Escape closes immediately and returns focus to
/// the trigger.
pub fn Navigation(
    #[prop(into)] items: MaybeSignal<Vec<NavItem>>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] logo: Option<ViewFn>,
    #[prop(optional)] cta: Option<NavCta>,
    #[prop(optional)] on_cta: Option<Callback<MouseEvent>>,
    #[prop(optional)] show_dark_mode_toggle: bool,
    #[prop(optional, into)] dark_mode: MaybeSignal<bool>,
    #[prop(optional)] on_toggle_dark_mode: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    let items: Signal<Vec<NavItem>> = Signal::derive(move || items.get());
    let selection = use_selection(
        Signal::derive(move || items.with(Vec::len)),
        SelectionConfig::dropdown(),
        None,
        None,
        "ui-navigation",
    );
    let scrolled = create_rw_signal(is_scrolled(current_scroll_y()));
    let mobile_open = create_rw_signal(false);
    let drawer_id = next_instance_id("ui-navigation-drawer");

    let scroll_listener = window_event_listener(ev::scroll, move |_| {
        scrolled.set(is_scrolled(current_scroll_y()));
    });
    on_cleanup(move || scroll_listener.remove());

    let triggers = move || {
        items
            .get()
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                NavItem::Link(link) => {
                    let aria_label = link.aria_label.unwrap_or_else(|| link.label.clone());
                    view! {
                        <a
                            class="ui-navigation-link"
                            href=link.href
                            aria-label=aria_label
                            data-ui-slot="link"
                        >
                            {link.label}
                        </a>
                    }
                    .into_view()
                }
                NavItem::Dropdown(dropdown) => trigger_view(selection, index, dropdown),
            })
            .collect_view()
    };

    let panel = move || {
        let index = selection.active()?;
        let Some(NavItem::Dropdown(dropdown)) = items.with(|items| items.get(index).cloned())
        else {
            return None;
        };
        Some(panel_view(selection, index, dropdown))
    };

    let drawer_entries = move || {
        items
            .get()
            .into_iter()
            .map(|item| match item {
                NavItem::Link(link) => view! {
                    <a
                        class="ui-navigation-drawer-link"
                        href=link.href
                        on:click=move |_| mobile_open.set(false)
                    >
                        {link.label}
                    </a>
                }
                .into_view(),
                NavItem::Dropdown(dropdown) => view! {
                    <div class="ui-navigation-drawer-group" data-ui-slot="drawer-group">
                        <div class="ui-navigation-drawer-heading">{dropdown.label}</div>
                        {dropdown
                            .items
                            .into_iter()
                            .map(|sub| {
                                view! {
                                    <a
                                        class="ui-navigation-drawer-link"
                                        href=sub.href
                                        on:click=move |_| mobile_open.set(false)
                                    >
                                        {sub.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                }
                .into_view(),
            })
            .collect_view()
    };

    let dark_mode_toggle = show_dark_mode_toggle.then(|| {
        view! {
            <button
                type="button"
                class="ui-navigation-theme-toggle"
                aria-label="Toggle dark mode"
                aria-pressed=move || bool_token(dark_mode.get())
                data-ui-slot="theme-toggle"
                on:click=move |ev| {
                    if let Some(on_toggle) = on_toggle_dark_mode.as_ref() {
                        on_toggle.call(ev);
                    }
                }
            >
                {move || {
                    let icon = if dark_mode.get() { IconName::Moon } else { IconName::Sun };
                    view! { <Icon icon size=IconSize::Md /> }
                }}
            </button>
        }
    });

    view! {
        <header
            class=merge_layout_class("ui-navigation", layout_class)
            role="banner"
            data-ui-primitive="true"
            data-ui-kind="navigation"
            data-ui-state=move || if scrolled.get() { "scrolled" } else { "top" }
        >
            <div class="ui-navigation-bar">
                <div class="ui-navigation-logo" data-ui-slot="logo">
                    {logo.clone().map(|logo| logo.run())}
                </div>
                <div
                    class="ui-navigation-menu"
                    data-ui-slot="menu"
                    on:mouseleave=move |_| selection.dispatch(SelectionEvent::PointerLeave)
                >
                    <nav class="ui-navigation-links" aria-label="Primary">
                        {triggers}
                    </nav>
                    {panel}
                </div>
                <div class="ui-navigation-actions" data-ui-slot="actions">
                    {dark_mode_toggle}
                    {cta.clone().map(|cta| cta_view(cta, on_cta, "cta"))}
                    <button
                        type="button"
                        class="ui-navigation-drawer-toggle"
                        aria-label="Open menu"
                        aria-controls=drawer_id.clone()
                        aria-expanded=move || bool_token(mobile_open.get())
                        data-ui-slot="drawer-toggle"
                        on:click=move |_| mobile_open.update(|open| *open = !*open)
                    >
                        <Icon icon=IconName::Menu size=IconSize::Lg />
                    </button>
                </div>
            </div>
            <div
                class="ui-navigation-drawer"
                id=drawer_id
                role="dialog"
                aria-modal="true"
                aria-label="Mobile navigation"
                data-ui-slot="drawer"
                data-ui-state=move || open_token(mobile_open.get())
            >
                <div class="ui-navigation-drawer-header">
                    <div class="ui-navigation-logo">{logo.map(|logo| logo.run())}</div>
                    <button
                        type="button"
                        class="ui-navigation-drawer-close"
                        aria-label="Close menu"
                        on:click=move |_| mobile_open.set(false)
                    >
                        <Icon icon=IconName::Close size=IconSize::Md />
                    </button>
                </div>
                <div class="ui-navigation-drawer-body">
                    {drawer_entries}
                    {cta.map(|cta| cta_view(cta, on_cta, "drawer-cta"))}
                </div>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn dropdown(entries: usize, columns: Option<u8>) -> NavDropdown {
        NavDropdown {
            label: "Products".to_string(),
            items: (0..entries)
                .map(|n| NavDropdownItem {
                    label: format!("Item {n}"),
                    href: format!("/item/{n}"),
                    description: None,
                    icon: None,
                    aria_label: None,
                })
                .collect(),
            aria_label: None,
            columns,
        }
    }

    #[test]
    fn panel_columns_default_by_entry_count() {
        assert_eq!(dropdown_grid_columns(&dropdown(6, None)), 1);
        assert_eq!(dropdown_grid_columns(&dropdown(7, None)), 2);
    }

    #[test]
    fn panel_columns_are_clamped() {
        assert_eq!(dropdown_grid_columns(&dropdown(3, Some(0))), 1);
        assert_eq!(dropdown_grid_columns(&dropdown(3, Some(4))), 4);
        assert_eq!(dropdown_grid_columns(&dropdown(3, Some(9))), 5);
    }

    #[test]
    fn header_counts_as_scrolled_past_four_pixels() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(4.0));
        assert!(is_scrolled(4.5));
    }

    #[test]
    fn items_deserialize_by_shape() {
        let items: Vec<NavItem> = serde_json::from_str(
            r#"[
                {"label": "Docs", "href": "/docs"},
                {"label": "Products", "columns": 3, "items": [
                    {"label": "Analytics", "href": "/analytics", "icon": "sun"}
                ]}
            ]"#,
        )
        .expect("nav items");

        assert_eq!(
            items[0],
            NavItem::Link(NavLink {
                label: "Docs".to_string(),
                href: "/docs".to_string(),
                aria_label: None,
            })
        );
        let NavItem::Dropdown(products) = &items[1] else {
            panic!("expected a dropdown, got {:?}", items[1]);
        };
        assert_eq!(products.columns, Some(3));
        assert_eq!(products.items[0].icon, Some(IconName::Sun));
        assert_eq!(items[1].label(), "Products");
    }
}
