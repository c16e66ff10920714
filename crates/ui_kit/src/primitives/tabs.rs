use super::*;

use ui_core_headless::{SelectionConfig, SelectionEvent};

use crate::selection::use_selection;

#[derive(Clone)]
/// One tab: strip label plus panel content.
pub struct TabItem {
    /// Strip label.
    pub label: String,
    /// Panel content.
    pub content: ViewFn,
}

impl TabItem {
    /// Creates a tab.
    pub fn new(label: impl Into<String>, content: impl Into<ViewFn>) -> Self {
        Self {
            label: label.into(),
            content: content.into(),
        }
    }
}

/// Initial tab: `default_active` when it names a tab, otherwise the first tab.
pub(crate) fn initial_tab(default_active: usize, len: usize) -> Option<usize> {
    if len == 0 {
        None
    } else if default_active < len {
        Some(default_active)
    } else {
        Some(0)
    }
}

#[component]
/// Tab strip with roving focus and arrow/Home/End navigation.
///
/// Pass `active` to control the selected tab; changes are then requested through
/// `on_change`. An empty tab list renders nothing.
pub fn Tabs(
    tabs: Vec<TabItem>,
    #[prop(optional)] default_active: usize,
    #[prop(optional, into)] active: Option<Signal<usize>>,
    #[prop(optional)] on_change: Option<Callback<usize>>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
) -> impl IntoView {
    let len = tabs.len();
    if len == 0 {
        return ().into_view();
    }

    let selection = use_selection(
        Signal::derive(move || len),
        SelectionConfig::strip().with_initial_active(initial_tab(default_active, len)),
        active.map(|active| Signal::derive(move || Some(active.get()))),
        on_change.map(|on_change| {
            Callback::new(move |next: Option<usize>| {
                if let Some(next) = next {
                    on_change.call(next);
                }
            })
        }),
        "ui-tabs",
    );

    let strip = tabs
        .iter()
        .enumerate()
        .map(|(index, tab)| {
            let selected = move || selection.is_active(index);
            view! {
                <button
                    type="button"
                    role="tab"
                    class="ui-tab"
                    id=selection.trigger_id(index)
                    aria-selected=move || bool_token(selected())
                    aria-controls=selection.panel_id(index)
                    tabindex=move || if selected() { 0 } else { -1 }
                    data-ui-slot="tab"
                    data-ui-state=move || if selected() { "active" } else { "idle" }
                    on:click=move |_| selection.dispatch(SelectionEvent::Activate(index))
                    on:keydown=move |ev| {
                        selection.on_key(&ev, index);
                    }
                >
                    {tab.label.clone()}
                </button>
            }
        })
        .collect_view();

    let panels = tabs
        .into_iter()
        .enumerate()
        .map(|(index, tab)| {
            view! {
                <div
                    role="tabpanel"
                    class="ui-tab-panel"
                    id=selection.panel_id(index)
                    aria-labelledby=selection.trigger_id(index)
                    tabindex="0"
                    hidden=move || !selection.is_active(index)
                    data-ui-slot="panel"
                >
                    {tab.content.run()}
                </div>
            }
        })
        .collect_view();

    view! {
        <div
            class=merge_layout_class("ui-tabs", layout_class)
            data-ui-primitive="true"
            data-ui-kind="tabs"
            data-ui-direction=move || selection.direction_token()
        >
            <div
                class="ui-tab-list"
                role="tablist"
                aria-orientation="horizontal"
                aria-label=aria_label
                data-ui-slot="tablist"
            >
                {strip}
            </div>
            <div class="ui-tab-panels">{panels}</div>
        </div>
    }
    .into_view()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_tab_falls_back_to_first() {
        assert_eq!(initial_tab(1, 3), Some(1));
        assert_eq!(initial_tab(3, 3), Some(0));
        assert_eq!(initial_tab(0, 0), None);
    }
}
