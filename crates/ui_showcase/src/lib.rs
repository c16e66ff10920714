//! Browser showcase that mounts every `ui_kit` component against bundled demo data.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod demo_data;

use leptos::*;
use ui_kit::prelude::*;

use crate::demo_data::{navigation_items, people_columns, people_rows, sidebar_items};

#[component]
fn Brand() -> impl IntoView {
    view! { <NavbarBrand href="#top">"Component Kit"</NavbarBrand> }
}

#[component]
fn ControlsSection() -> impl IntoView {
    let email = create_rw_signal(String::new());
    let email_error = Signal::derive(move || {
        email.with(|email| {
            (!email.is_empty() && !email.contains('@'))
                .then(|| "Enter a valid email address".to_string())
        })
    });
    let clicks = create_rw_signal(0_u32);

    view! {
        <section id="controls" class="showcase-section">
            <h2>"Buttons and inputs"</h2>
            <div class="showcase-row">
                <Button on_click=Callback::new(move |_| clicks.update(|n| *n += 1))>
                    "Primary"
                </Button>
                <Button variant=ButtonVariant::Secondary size=ButtonSize::Sm>
                    "Secondary"
                </Button>
                <Button variant=ButtonVariant::Ghost size=ButtonSize::Lg>
                    "Ghost"
                </Button>
                <Button button_type=ButtonType::Submit disabled=true>
                    "Disabled"
                </Button>
                <Button icon=IconName::Menu icon_only=true label="Open menu" />
                <span>{move || format!("Clicked {} times", clicks.get())}</span>
            </div>
            <div class="showcase-row">
                <Input label="Name" placeholder="Ada Lovelace" required=true />
                <Input
                    input_type=InputType::Email
                    label="Email"
                    value=email
                    on_change=Callback::new(move |next| email.set(next))
                    error=email_error
                />
                <Input input_type=InputType::Password label="Password" size=InputSize::Sm />
            </div>
        </section>
    }
}

#[component]
fn CardsSection() -> impl IntoView {
    view! {
        <section id="cards" class="showcase-section">
            <h2>"Cards"</h2>
            <div class="showcase-row">
                <Card title="Plain card" description="Title and description only">
                    <p>"Body content."</p>
                </Card>
                <Card
                    title="Hoverable"
                    hoverable=true
                    footer=ViewFn::from(|| view! { <Button size=ButtonSize::Sm>"Action"</Button> })
                >
                    <p>"Lifts on hover and carries a footer."</p>
                </Card>
            </div>
        </section>
    }
}

#[component]
fn DataSection() -> impl IntoView {
    let rows = create_rw_signal(people_rows());

    view! {
        <section id="table" class="showcase-section">
            <h2>"Table"</h2>
            <Table columns=people_columns() data=rows caption="Computing pioneers" />
            <div class="showcase-row">
                <Button
                    variant=ButtonVariant::Secondary
                    on_click=Callback::new(move |_| rows.set(Vec::new()))
                >
                    "Clear rows"
                </Button>
                <Button
                    variant=ButtonVariant::Ghost
                    on_click=Callback::new(move |_| rows.set(people_rows()))
                >
                    "Restore rows"
                </Button>
            </div>
        </section>
    }
}

#[component]
fn TabsSection() -> impl IntoView {
    let controlled = create_rw_signal(1_usize);
    let tabs = || {
        vec![
            TabItem::new("Account", || view! { <p>"Account settings."</p> }),
            TabItem::new("Security", || view! { <p>"Two-factor and sessions."</p> }),
            TabItem::new("Billing", || view! { <p>"Invoices and plans."</p> }),
        ]
    };

    view! {
        <section id="tabs" class="showcase-section">
            <h2>"Tabs"</h2>
            <Tabs tabs=tabs() default_active=0 aria_label="Owned tabs" />
            <Tabs
                tabs=tabs()
                active=controlled
                on_change=Callback::new(move |next| controlled.set(next))
                aria_label="Controlled tabs"
            />
            <p>{move || format!("Controlled tab index: {}", controlled.get())}</p>
        </section>
    }
}

#[component]
fn ModalSection() -> impl IntoView {
    let open = create_rw_signal(false);

    view! {
        <section id="modal" class="showcase-section">
            <h2>"Modal"</h2>
            <Button on_click=Callback::new(move |_| open.set(true))>"Open modal"</Button>
            <Modal
                open=open
                on_close=Callback::new(move |_| open.set(false))
                title="Confirm action"
                size=ModalSize::Sm
            >
                <p>"Escape, the overlay, and the close button all dismiss this dialog."</p>
                <Button on_click=Callback::new(move |_| open.set(false))>"Done"</Button>
            </Modal>
        </section>
    }
}

#[component]
/// Root showcase view.
pub fn UiShowcaseApp() -> impl IntoView {
    let dark_mode = create_rw_signal(false);
    let sidebar_open = create_rw_signal(false);

    view! {
        <div class="showcase-root" data-theme=move || if dark_mode.get() { "dark" } else { "light" }>
            <Navigation
                items=navigation_items()
                logo=ViewFn::from(|| view! { <Brand /> })
                cta=NavCta {
                    label: "Get started".to_string(),
                    href: Some("#controls".to_string()),
                    aria_label: None,
                }
                show_dark_mode_toggle=true
                dark_mode=dark_mode
                on_toggle_dark_mode=Callback::new(move |_| dark_mode.update(|dark| *dark = !*dark))
            />
            <Navbar variant=NavbarVariant::Dark size=NavbarSize::Sm brand=ViewFn::from(|| view! { <Brand /> })>
                <NavbarItem href="#controls" active=true>"Controls"</NavbarItem>
                <NavbarItem href="#table">"Table"</NavbarItem>
                <NavbarItem on_click=Callback::new(move |_| sidebar_open.set(true))>
                    "Open sidebar"
                </NavbarItem>
            </Navbar>
            <div class="showcase-layout">
                <Sidebar
                    items=sidebar_items()
                    logo=ViewFn::from(|| view! { <Brand /> })
                    footer=ViewFn::from(|| view! { <small>"v0.1.0"</small> })
                    mobile_open=sidebar_open
                />
                <main class="showcase-main">
                    <ControlsSection />
                    <CardsSection />
                    <DataSection />
                    <TabsSection />
                    <ModalSection />
                </main>
            </div>
        </div>
    }
}

/// Mounts the showcase into `<body>`.
#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| view! { <UiShowcaseApp /> })
}
