use super::*;

use crate::ids::next_instance_id;

#[component]
/// Top bar with a brand slot, a menu, and a mobile menu toggle.
pub fn Navbar(
    #[prop(default = NavbarVariant::Default)] variant: NavbarVariant,
    #[prop(default = NavbarSize::Md)] size: NavbarSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] fixed: bool,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] brand: Option<ViewFn>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let mobile_open = create_rw_signal(false);
    let menu_id = next_instance_id("ui-navbar-menu");

    view! {
        <nav
            class=merge_layout_class("ui-navbar", layout_class)
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="navbar"
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-fixed=bool_token(fixed)
        >
            <div class="ui-navbar-container">
                <div class="ui-navbar-brand-slot" data-ui-slot="brand">
                    {brand.map(|brand| brand.run())}
                </div>
                <button
                    type="button"
                    class="ui-navbar-toggle"
                    aria-label="Toggle mobile menu"
                    aria-controls=menu_id.clone()
                    aria-expanded=move || bool_token(mobile_open.get())
                    data-ui-slot="mobile-toggle"
                    on:click=move |_| mobile_open.update(|open| *open = !*open)
                >
                    <Icon icon=IconName::Menu size=IconSize::Md />
                </button>
                <div
                    class="ui-navbar-menu"
                    id=menu_id
                    data-ui-slot="menu"
                    data-ui-state=move || open_token(mobile_open.get())
                >
                    {children.map(|children| children())}
                </div>
            </div>
        </nav>
    }
}

#[component]
/// Navbar menu entry. Renders a link when `href` is set, otherwise a button.
pub fn NavbarItem(
    #[prop(optional, into)] href: Option<String>,
    #[prop(optional, into)] active: MaybeSignal<bool>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let class = merge_layout_class("ui-navbar-item", layout_class);
    let on_click = move |ev: MouseEvent| {
        if let Some(on_click) = on_click.as_ref() {
            on_click.call(ev);
        }
    };

    match href {
        Some(href) => view! {
            <a
                class=class
                href=href
                aria-current=move || active.get().then_some("page")
                data-ui-primitive="true"
                data-ui-kind="navbar-item"
                data-ui-state=move || if active.get() { "active" } else { "idle" }
                on:click=on_click
            >
                {children()}
            </a>
        }
        .into_view(),
        None => view! {
            <button
                type="button"
                class=class
                data-ui-primitive="true"
                data-ui-kind="navbar-item"
                data-ui-state=move || if active.get() { "active" } else { "idle" }
                on:click=on_click
            >
                {children()}
            </button>
        }
        .into_view(),
    }
}

#[component]
/// Navbar brand mark. Renders a link when `href` is set, otherwise a button.
pub fn NavbarBrand(
    #[prop(optional, into)] href: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let class = merge_layout_class("ui-navbar-brand", layout_class);
    let on_click = move |ev: MouseEvent| {
        if let Some(on_click) = on_click.as_ref() {
            on_click.call(ev);
        }
    };

    match href {
        Some(href) => view! {
            <a
                class=class
                href=href
                data-ui-primitive="true"
                data-ui-kind="navbar-brand"
                on:click=on_click
            >
                {children()}
            </a>
        }
        .into_view(),
        None => view! {
            <button
                type="button"
                class=class
                data-ui-primitive="true"
                data-ui-kind="navbar-brand"
                on:click=on_click
            >
                {children()}
            </button>
        }
        .into_view(),
    }
}
