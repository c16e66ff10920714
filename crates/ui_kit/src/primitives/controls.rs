use super::*;

use web_sys::HtmlInputElement;

use crate::control::Control;
use crate::ids::next_instance_id;

/// `aria-label` for a button: the explicit label wins, icon-only buttons fall back to their
/// text label.
fn button_aria_label(
    aria_label: Option<String>,
    label: Option<String>,
    icon_only: bool,
) -> Option<String> {
    aria_label.or_else(|| label.filter(|_| icon_only))
}

#[component]
/// Action button with variant, size, and icon-only shapes.
pub fn Button(
    #[prop(default = ButtonVariant::Primary)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Md)] size: ButtonSize,
    #[prop(default = ButtonType::Button)] button_type: ButtonType,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] aria_controls: Option<String>,
    #[prop(optional, into)] aria_expanded: Option<MaybeSignal<bool>>,
    #[prop(optional)] icon: Option<IconName>,
    #[prop(optional)] icon_only: bool,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let aria_label = button_aria_label(aria_label, label.clone(), icon_only);
    let text = if icon_only { None } else { label };

    view! {
        <button
            type=button_type.token()
            class=merge_layout_class("ui-button", layout_class)
            id=id
            aria-label=aria_label
            aria-controls=aria_controls
            aria-expanded=move || aria_expanded.map(|expanded| bool_token(expanded.get()))
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-shape=if icon_only { "round" } else { "standard" }
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {icon.map(|icon| view! { <Icon icon size=IconSize::Sm /> })}
            {text}
            {children.map(|children| children())}
        </button>
    }
}

#[component]
/// Labeled text input with error and required states.
///
/// The value is owned by the input unless `value` is supplied, in which case edits are
/// reported through `on_change` and the host decides what is displayed.
pub fn Input(
    #[prop(default = InputType::Text)] input_type: InputType,
    #[prop(default = InputSize::Md)] size: InputSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] value: Option<Signal<String>>,
    #[prop(optional, into)] default_value: String,
    #[prop(optional, into)] error: MaybeSignal<Option<String>>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_change: Option<Callback<String>>,
    #[prop(optional)] on_focus: Option<Callback<FocusEvent>>,
    #[prop(optional)] on_blur: Option<Callback<FocusEvent>>,
) -> impl IntoView {
    let input_id = id.unwrap_or_else(|| next_instance_id("ui-input"));
    let error_id = format!("{input_id}-error");
    let control = Control::resolve(value, on_change, default_value);

    let error: Signal<Option<String>> = Signal::derive(move || error.get());
    let has_error = move || error.with(Option::is_some);

    view! {
        <div
            class=merge_layout_class("ui-input", layout_class)
            data-ui-primitive="true"
            data-ui-kind="input"
            data-ui-size=size.token()
            data-ui-state=move || if has_error() { "error" } else { "idle" }
            data-ui-disabled=move || bool_token(disabled.get())
        >
            {label.map(|label| {
                view! {
                    <label class="ui-input-label" for=input_id.clone() data-ui-slot="label">
                        {label}
                        {required.then(|| view! {
                            <span class="ui-input-required" aria-hidden="true">"*"</span>
                        })}
                    </label>
                }
            })}
            <input
                class="ui-input-field"
                id=input_id.clone()
                name=name
                type=input_type.token()
                placeholder=placeholder
                required=required
                prop:value=move || control.get()
                disabled=move || disabled.get()
                aria-invalid=move || bool_token(has_error())
                aria-describedby={
                    let error_id = error_id.clone();
                    move || has_error().then(|| error_id.clone())
                }
                data-ui-slot="field"
                on:input=move |ev| {
                    let shown = control.edit(event_target_value(&ev));
                    if control.is_controlled() {
                        event_target::<HtmlInputElement>(&ev).set_value(&shown);
                    }
                }
                on:focus=move |ev| {
                    if let Some(on_focus) = on_focus.as_ref() {
                        on_focus.call(ev);
                    }
                }
                on:blur=move |ev| {
                    if let Some(on_blur) = on_blur.as_ref() {
                        on_blur.call(ev);
                    }
                }
            />
            {move || {
                error
                    .get()
                    .map(|message| {
                        view! {
                            <span
                                class="ui-input-error"
                                id=error_id.clone()
                                role="alert"
                                data-ui-slot="error"
                            >
                                {message}
                            </span>
                        }
                    })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn icon_only_buttons_fall_back_to_their_label() {
        assert_eq!(
            button_aria_label(None, Some("Close".to_string()), true),
            Some("Close".to_string())
        );
    }

    #[test]
    fn explicit_aria_label_wins() {
        assert_eq!(
            button_aria_label(Some("Dismiss".to_string()), Some("Close".to_string()), true),
            Some("Dismiss".to_string())
        );
    }

    #[test]
    fn text_buttons_keep_label_visible_only() {
        assert_eq!(button_aria_label(None, Some("Save".to_string()), false), None);
    }
}
