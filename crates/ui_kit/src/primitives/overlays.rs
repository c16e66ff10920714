use super::*;

use ui_core_headless::NavKey;

use crate::a11y;
use crate::ids::next_instance_id;

#[component]
/// Controlled modal dialog.
///
/// The host owns `open` and closes the dialog from `on_close`. While open, page scrolling is
/// locked; the lock is released when the dialog closes or unmounts.
pub fn Modal(
    #[prop(into)] open: MaybeSignal<bool>,
    on_close: Callback<()>,
    #[prop(default = ModalSize::Md)] size: ModalSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(default = true)] show_close_button: bool,
    #[prop(default = true)] close_on_overlay_click: bool,
    #[prop(default = true)] close_on_escape: bool,
    children: ChildrenFn,
) -> impl IntoView {
    let title_id = next_instance_id("ui-modal-title");
    let title = store_value(title);

    create_effect(move |was_open| {
        let is_open = open.get();
        if is_open || was_open == Some(true) {
            a11y::set_body_scroll_locked(is_open);
        }
        is_open
    });
    on_cleanup(move || {
        if open.try_get_untracked().unwrap_or(false) {
            a11y::set_body_scroll_locked(false);
        }
    });

    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if close_on_escape
            && open.get_untracked()
            && NavKey::parse(&ev.key()) == Some(NavKey::Escape)
        {
            on_close.call(());
        }
    });
    on_cleanup(move || escape_listener.remove());

    let on_overlay_click = move |ev: MouseEvent| {
        if !close_on_overlay_click {
            return;
        }
        let target = ev.target();
        if target.is_some() && target == ev.current_target() {
            on_close.call(());
        }
    };

    view! {
        <Show when=move || open.get()>
            <div
                class="ui-modal-overlay"
                data-ui-primitive="true"
                data-ui-kind="modal-overlay"
                on:click=on_overlay_click
            >
                <div
                    class=merge_layout_class("ui-modal", layout_class)
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby=title.with_value(|title| title.as_ref().map(|_| title_id.clone()))
                    data-ui-primitive="true"
                    data-ui-kind="modal"
                    data-ui-size=size.token()
                >
                    {(title.with_value(Option::is_some) || show_close_button)
                        .then(|| {
                            view! {
                                <div class="ui-modal-header" data-ui-slot="header">
                                    {title
                                        .get_value()
                                        .map(|title| {
                                            view! {
                                                <h2 class="ui-modal-title" id=title_id.clone()>
                                                    {title}
                                                </h2>
                                            }
                                        })}
                                    {show_close_button
                                        .then(|| {
                                            view! {
                                                <Button
                                                    variant=ButtonVariant::Ghost
                                                    size=ButtonSize::Sm
                                                    icon=IconName::Close
                                                    icon_only=true
                                                    label="Close modal"
                                                    ui_slot="close"
                                                    on_click=Callback::new(move |_| on_close.call(()))
                                                />
                                            }
                                        })}
                                </div>
                            }
                        })}
                    <div class="ui-modal-content" data-ui-slot="content">
                        {children()}
                    </div>
                </div>
            </div>
        </Show>
    }
}
