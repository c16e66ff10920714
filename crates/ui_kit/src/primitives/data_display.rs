use super::*;

use ui_core_headless::{Column, HeaderCell, NavKey, Row, SortState, TableModel};

#[component]
/// Content card with optional header text and footer.
pub fn Card(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional)] footer: Option<ViewFn>,
    #[prop(optional)] hoverable: bool,
    children: Children,
) -> impl IntoView {
    let has_header = title.is_some() || description.is_some();
    let has_footer = footer.is_some();

    view! {
        <div
            class=merge_layout_class("ui-card", layout_class)
            data-ui-primitive="true"
            data-ui-kind="card"
            data-ui-hoverable=bool_token(hoverable)
        >
            {has_header
                .then(|| {
                    view! {
                        <div class="ui-card-header" data-ui-slot="header">
                            {title.map(|title| view! { <h3 class="ui-card-title">{title}</h3> })}
                            {description
                                .map(|description| {
                                    view! { <p class="ui-card-description">{description}</p> }
                                })}
                        </div>
                    }
                })}
            <div
                class="ui-card-body"
                data-ui-slot="body"
                data-ui-header=bool_token(has_header)
                data-ui-footer=bool_token(has_footer)
            >
                {children()}
            </div>
            {footer
                .map(|footer| {
                    view! {
                        <div class="ui-card-footer" data-ui-slot="footer">
                            {footer.run()}
                        </div>
                    }
                })}
        </div>
    }
}

fn header_view(
    header: HeaderCell,
    sort: RwSignal<SortState>,
    columns: StoredValue<Vec<Column>>,
) -> impl IntoView {
    let accessor = header.accessor.clone();
    let toggle = move || {
        let mut next = sort.get_untracked();
        let changed = columns.with_value(|columns| next.toggle(columns, &accessor));
        if changed {
            sort.set(next);
        }
    };
    let on_click = {
        let toggle = toggle.clone();
        move |_: MouseEvent| toggle()
    };
    let on_keydown = move |ev: KeyboardEvent| {
        if matches!(NavKey::parse(&ev.key()), Some(NavKey::Enter | NavKey::Space)) {
            ev.prevent_default();
            toggle();
        }
    };

    let sortable = header.sortable;
    view! {
        <th
            scope="col"
            class="ui-table-header"
            tabindex=sortable.then_some(0)
            aria-sort=header.aria_sort
            data-ui-slot="header-cell"
            data-ui-sortable=bool_token(sortable)
            on:click=move |ev| {
                if sortable {
                    on_click(ev);
                }
            }
            on:keydown=move |ev| {
                if sortable {
                    on_keydown(ev);
                }
            }
        >
            <span class="ui-table-header-label">{header.label}</span>
            {header
                .indicator
                .map(|indicator| {
                    view! {
                        <span class="ui-table-sort-indicator" aria-hidden="true">
                            {indicator}
                        </span>
                    }
                })}
        </th>
    }
}

#[component]
/// Sortable data table over in-memory rows.
///
/// Sort state is owned by the table; replacing `data` keeps the current sort.
pub fn Table(
    #[prop(into)] columns: MaybeSignal<Vec<Column>>,
    #[prop(into)] data: MaybeSignal<Vec<Row>>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] caption: Option<String>,
) -> impl IntoView {
    let sort = create_rw_signal(SortState::default());
    let column_store = store_value(columns.get_untracked());
    let model = create_memo(move |_| {
        let columns = columns.get();
        column_store.set_value(columns.clone());
        data.with(|rows| sort.with(|sort| TableModel::build(&columns, rows, sort)))
    });

    move || match model.get() {
        TableModel::Empty { message } => view! {
            <div
                class=merge_layout_class("ui-table-empty", layout_class)
                role="status"
                data-ui-primitive="true"
                data-ui-kind="table"
                data-ui-state="empty"
            >
                {message}
            </div>
        }
        .into_view(),
        TableModel::Populated { headers, rows } => view! {
            <div
                class=merge_layout_class("ui-table-wrapper", layout_class)
                data-ui-primitive="true"
                data-ui-kind="table"
                data-ui-state="populated"
            >
                <table class="ui-table">
                    {caption.clone().map(|caption| view! { <caption>{caption}</caption> })}
                    <thead>
                        <tr>
                            {headers
                                .into_iter()
                                .map(|header| header_view(header, sort, column_store))
                                .collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        {rows
                            .into_iter()
                            .map(|row| {
                                view! {
                                    <tr class="ui-table-row" data-ui-row=row.source_index>
                                        {row
                                            .cells
                                            .into_iter()
                                            .map(|cell| {
                                                view! { <td class="ui-table-cell">{cell}</td> }
                                            })
                                            .collect_view()}
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </div>
        }
        .into_view(),
    }
}
