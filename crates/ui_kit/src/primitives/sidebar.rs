use super::*;

use serde::{Deserialize, Serialize};
use ui_core_headless::{NavKey, SelectionConfig, SelectionEvent};

use crate::a11y;
use crate::ids::next_instance_id;
use crate::selection::{use_selection, SelectionHandle};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Sidebar link.
pub struct SidebarLink {
    /// Visible text.
    pub label: String,
    /// Link target.
    pub href: String,
    /// Leading icon.
    #[serde(default)]
    pub icon: Option<IconName>,
    /// Trailing badge text. Hidden while the rail is collapsed.
    #[serde(default)]
    pub badge: Option<String>,
    /// Marks the current page.
    #[serde(default)]
    pub active: bool,
    /// Accessible name override.
    #[serde(default)]
    pub aria_label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Expandable group of links.
pub struct SidebarGroup {
    /// Group heading.
    pub label: String,
    /// Leading icon.
    #[serde(default)]
    pub icon: Option<IconName>,
    /// Nested links.
    pub items: Vec<SidebarLink>,
    /// Accessible name override.
    #[serde(default)]
    pub aria_label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
/// Top-level sidebar entry.
pub enum SidebarItem {
    /// Expandable group.
    Group(SidebarGroup),
    /// Plain link.
    Link(SidebarLink),
}

fn link_view(link: SidebarLink, collapsed: Signal<bool>, nested: bool) -> View {
    let aria_label = link.aria_label.unwrap_or_else(|| link.label.clone());
    let active = link.active;
    view! {
        <li>
            <a
                class="ui-sidebar-link"
                href=link.href
                aria-label=aria_label
                aria-current=active.then_some("page")
                data-ui-slot=if nested { "nested-link" } else { "link" }
                data-ui-state=if active { "active" } else { "idle" }
            >
                {link.icon.map(|icon| view! { <Icon icon size=IconSize::Sm /> })}
                <span
                    class="ui-sidebar-label"
                    data-ui-hidden=move || bool_token(collapsed.get() && !nested)
                >
                    {link.label}
                </span>
                {link
                    .badge
                    .map(|badge| {
                        view! {
                            <span
                                class="ui-sidebar-badge"
                                data-ui-hidden=move || bool_token(collapsed.get())
                            >
                                {badge}
                            </span>
                        }
                    })}
            </a>
        </li>
    }
    .into_view()
}

fn group_view(
    selection: SelectionHandle,
    index: usize,
    group: SidebarGroup,
    collapsed: Signal<bool>,
) -> View {
    let open = move || selection.is_active(index) && !collapsed.get();
    view! {
        <li>
            <button
                type="button"
                class="ui-sidebar-group-trigger"
                id=selection.trigger_id(index)
                aria-expanded=move || bool_token(open())
                aria-controls=selection.panel_id(index)
                aria-label=group.aria_label
                data-ui-slot="group-trigger"
                data-ui-state=move || open_token(open())
                on:click=move |_| selection.dispatch(SelectionEvent::Toggle(index))
                on:keydown=move |ev| {
                    selection.on_key(&ev, index);
                }
            >
                {group.icon.map(|icon| view! { <Icon icon size=IconSize::Sm /> })}
                <span
                    class="ui-sidebar-label"
                    data-ui-hidden=move || bool_token(collapsed.get())
                >
                    {group.label}
                </span>
                <Show when=move || !collapsed.get()>
                    <Icon
                        icon=IconName::ChevronDown
                        size=IconSize::Sm
                        rotated=Signal::derive(open)
                    />
                </Show>
            </button>
            <div
                class="ui-sidebar-group-panel"
                id=selection.panel_id(index)
                data-ui-slot="group-panel"
                data-ui-state=move || open_token(open())
                hidden=move || !open()
            >
                <ul class="ui-sidebar-group-list">
                    {group
                        .items
                        .into_iter()
                        .map(|link| link_view(link, collapsed, true))
                        .collect_view()}
                </ul>
            </div>
        </li>
    }
    .into_view()
}

fn drawer_entries(items: Vec<SidebarItem>) -> View {
    let expanded = Signal::derive(|| false);
    items
        .into_iter()
        .map(|item| match item {
            SidebarItem::Link(link) => link_view(link, expanded, false),
            SidebarItem::Group(group) => view! {
                <li class="ui-sidebar-drawer-group">
                    <div class="ui-sidebar-drawer-heading">{group.label}</div>
                    <ul class="ui-sidebar-group-list">
                        {group
                            .items
                            .into_iter()
                            .map(|link| link_view(link, expanded, true))
                            .collect_view()}
                    </ul>
                </li>
            }
            .into_view(),
        })
        .collect_view()
}

#[component]
/// Side navigation with a collapsible desktop rail and a mobile drawer.
///
/// Groups form a single-open accordion. While the rail is collapsed every group renders
/// closed. The drawer closes on Escape or a backdrop click and locks page scrolling while
/// open. Pass `mobile_open` to drive the drawer from outside.
pub fn Sidebar(
    #[prop(into)] items: MaybeSignal<Vec<SidebarItem>>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] logo: Option<ViewFn>,
    #[prop(optional)] footer: Option<ViewFn>,
    #[prop(default = true)] collapsible: bool,
    #[prop(optional)] default_collapsed: bool,
    #[prop(optional)] initial_mobile_open: bool,
    #[prop(optional)] mobile_open: Option<RwSignal<bool>>,
) -> impl IntoView {
    let items: Signal<Vec<SidebarItem>> = Signal::derive(move || items.get());
    let selection = use_selection(
        Signal::derive(move || items.with(Vec::len)),
        SelectionConfig::disclosure(),
        None,
        None,
        "ui-sidebar",
    );
    let collapsed = create_rw_signal(default_collapsed);
    let mobile_open = mobile_open.unwrap_or_else(|| create_rw_signal(initial_mobile_open));
    let drawer_id = next_instance_id("ui-sidebar-drawer");

    create_effect(move |was_open| {
        let is_open = mobile_open.get();
        if is_open || was_open == Some(true) {
            a11y::set_body_scroll_locked(is_open);
        }
        is_open
    });
    on_cleanup(move || {
        if mobile_open.try_get_untracked().unwrap_or(false) {
            a11y::set_body_scroll_locked(false);
        }
    });

    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if mobile_open.get_untracked() && NavKey::parse(&ev.key()) == Some(NavKey::Escape) {
            mobile_open.set(false);
        }
    });
    on_cleanup(move || escape_listener.remove());

    let collapsed_signal: Signal<bool> = collapsed.into();
    let rail_entries = move || {
        items
            .get()
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                SidebarItem::Link(link) => link_view(link, collapsed_signal, false),
                SidebarItem::Group(group) => {
                    group_view(selection, index, group, collapsed_signal)
                }
            })
            .collect_view()
    };

    view! {
        <aside
            class=merge_layout_class("ui-sidebar", layout_class)
            aria-label="Sidebar navigation"
            data-ui-primitive="true"
            data-ui-kind="sidebar"
            data-ui-state=move || if collapsed.get() { "collapsed" } else { "expanded" }
        >
            <div class="ui-sidebar-header" data-ui-slot="header">
                <div class="ui-sidebar-logo">{logo.clone().map(|logo| logo.run())}</div>
                {collapsible
                    .then(|| {
                        view! {
                            <button
                                type="button"
                                class="ui-sidebar-collapse"
                                aria-label=move || {
                                    if collapsed.get() { "Expand sidebar" } else { "Collapse sidebar" }
                                }
                                aria-expanded=move || bool_token(!collapsed.get())
                                data-ui-slot="collapse-toggle"
                                on:click=move |_| collapsed.update(|collapsed| *collapsed = !*collapsed)
                            >
                                {move || {
                                    let icon = if collapsed.get() {
                                        IconName::ArrowRight
                                    } else {
                                        IconName::ArrowLeft
                                    };
                                    view! { <Icon icon size=IconSize::Sm /> }
                                }}
                            </button>
                        }
                    })}
            </div>
            <nav class="ui-sidebar-nav" aria-label="Sidebar items">
                <ul class="ui-sidebar-list">{rail_entries}</ul>
            </nav>
            {footer
                .clone()
                .map(|footer| {
                    view! {
                        <div
                            class="ui-sidebar-footer"
                            data-ui-slot="footer"
                            data-ui-hidden=move || bool_token(collapsed.get())
                        >
                            {footer.run()}
                        </div>
                    }
                })}
        </aside>
        <div
            class="ui-sidebar-drawer-layer"
            data-ui-primitive="true"
            data-ui-kind="sidebar-drawer"
            data-ui-state=move || open_token(mobile_open.get())
        >
            <div
                class="ui-sidebar-backdrop"
                aria-hidden="true"
                data-ui-slot="backdrop"
                on:click=move |_| mobile_open.set(false)
            ></div>
            <aside
                class="ui-sidebar-drawer"
                id=drawer_id
                role="dialog"
                aria-modal="true"
                aria-label="Mobile sidebar"
                data-ui-slot="drawer"
            >
                <div class="ui-sidebar-header">
                    <div class="ui-sidebar-logo">{logo.map(|logo| logo.run())}</div>
                    <button
                        type="button"
                        class="ui-sidebar-drawer-close"
                        aria-label="Close sidebar"
                        on:click=move |_| mobile_open.set(false)
                    >
                        <Icon icon=IconName::Close size=IconSize::Md />
                    </button>
                </div>
                <nav class="ui-sidebar-nav" aria-label="Mobile sidebar items">
                    <ul class="ui-sidebar-list">{move || drawer_entries(items.get())}</ul>
                </nav>
                {footer
                    .map(|footer| {
                        view! {
                            <div class="ui-sidebar-footer" data-ui-slot="footer">
                                {footer.run()}
                            </div>
                        }
                    })}
            </aside>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn items_deserialize_by_shape() {
        let items: Vec<SidebarItem> = serde_json::from_str(
            r#"[
                {"label": "Home", "href": "/", "active": true, "icon": "menu"},
                {"label": "Reports", "items": [
                    {"label": "Monthly", "href": "/reports/monthly", "badge": "3"}
                ]}
            ]"#,
        )
        .expect("sidebar items");

        let SidebarItem::Link(home) = &items[0] else {
            panic!("expected a link, got {:?}", items[0]);
        };
        assert!(home.active);
        assert_eq!(home.icon, Some(IconName::Menu));

        let SidebarItem::Group(reports) = &items[1] else {
            panic!("expected a group, got {:?}", items[1]);
        };
        assert_eq!(reports.items[0].badge.as_deref(), Some("3"));
        assert!(!reports.items[0].active);
    }
}
