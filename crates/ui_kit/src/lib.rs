//! Leptos component library: buttons, cards, inputs, modal, navbar, navigation, sidebar,
//! table, and tabs.
//!
//! Interaction state lives in `ui_core_headless`; this crate renders it and executes its
//! effects against the browser. Every component emits the stable `data-ui-*` DOM contract
//! (`data-ui-primitive`, `data-ui-kind`, `data-ui-variant`, `data-ui-size`, `data-ui-state`,
//! `data-ui-slot`) so styling layers never depend on internal markup. Each component also
//! accepts a `layout_class` that is appended to its root class list.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod a11y;
mod control;
mod icon;
mod ids;
mod primitives;
mod selection;

pub use control::Control;
pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    Button, ButtonSize, ButtonType, ButtonVariant, Card, Input, InputSize, InputType, Modal,
    ModalSize, NavCta, NavDropdown, NavDropdownItem, NavItem, NavLink, Navbar, NavbarBrand,
    NavbarItem, NavbarSize, NavbarVariant, Navigation, Sidebar, SidebarGroup, SidebarItem,
    SidebarLink, TabItem, Table, Tabs,
};
pub use selection::{use_selection, SelectionHandle};

/// Convenience imports for application crates consuming the component set.
pub mod prelude {
    pub use crate::{
        Button, ButtonSize, ButtonType, ButtonVariant, Card, Icon, IconName, IconSize, Input,
        InputSize, InputType, Modal, ModalSize, NavCta, NavDropdown, NavDropdownItem, NavItem,
        NavLink, Navbar, NavbarBrand, NavbarItem, NavbarSize, NavbarVariant, Navigation, Sidebar,
        SidebarGroup, SidebarItem, SidebarLink, TabItem, Table, Tabs,
    };
    pub use ui_core_headless::{CellValue, Column, Row};
}
