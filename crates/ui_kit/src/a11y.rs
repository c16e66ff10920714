//! DOM focus, roving menu keyboard, and scroll-lock helpers shared by interactive components.

use wasm_bindgen::JsCast;

const FOCUSABLE_SELECTOR: &str = "a[href], button:not([disabled]), [role=\"menuitem\"]";

fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|window| window.document())
}

/// Returns the current active element as an [`web_sys::HtmlElement`] when possible.
pub(crate) fn active_html_element() -> Option<web_sys::HtmlElement> {
    document()
        .and_then(|document| document.active_element())
        .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok())
}

/// Focuses an HTML element, ignoring browser focus errors.
pub(crate) fn focus_html_element(element: &web_sys::HtmlElement) {
    let _ = element.focus();
}

/// Focuses an element by ID and reports whether a focusable HTML element was found.
pub(crate) fn focus_element_by_id(id: &str) -> bool {
    let Some(element) = document().and_then(|document| document.get_element_by_id(id)) else {
        return false;
    };
    let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() else {
        return false;
    };
    focus_html_element(&element);
    true
}

fn focusable_items(container_id: &str) -> Vec<web_sys::HtmlElement> {
    let Some(container) = document().and_then(|document| document.get_element_by_id(container_id))
    else {
        return Vec::new();
    };
    let Ok(nodes) = container.query_selector_all(FOCUSABLE_SELECTOR) else {
        return Vec::new();
    };

    let mut items = Vec::new();
    for index in 0..nodes.length() {
        let Some(node) = nodes.item(index) else {
            continue;
        };
        let Ok(item) = node.dyn_into::<web_sys::HtmlElement>() else {
            continue;
        };
        if item.get_attribute("aria-disabled").as_deref() == Some("true") {
            continue;
        }
        items.push(item);
    }
    items
}

/// Focuses the first focusable element inside a container.
pub(crate) fn focus_first_in(container_id: &str) -> bool {
    let items = focusable_items(container_id);
    if let Some(first) = items.first() {
        focus_html_element(first);
        true
    } else {
        false
    }
}

fn focus_relative(container_id: &str, delta: i32) -> bool {
    let items = focusable_items(container_id);
    if items.is_empty() {
        return false;
    }

    let active = active_html_element();
    let current = items
        .iter()
        .position(|item| active.as_ref() == Some(item))
        .unwrap_or(0);
    let len = items.len() as i32;
    let next = (current as i32 + delta).rem_euclid(len) as usize;
    focus_html_element(&items[next]);
    true
}

fn focus_edge(container_id: &str, first: bool) -> bool {
    let items = focusable_items(container_id);
    let target = if first { items.first() } else { items.last() };
    match target {
        Some(item) => {
            focus_html_element(item);
            true
        }
        None => false,
    }
}

/// Handles arrow/home/end navigation inside an open menu panel and prevents default when
/// handled.
pub(crate) fn handle_menu_roving_keydown(ev: &web_sys::KeyboardEvent, container_id: &str) -> bool {
    let handled = match ev.key().as_str() {
        "ArrowDown" => focus_relative(container_id, 1),
        "ArrowUp" => focus_relative(container_id, -1),
        "Home" => focus_edge(container_id, true),
        "End" => focus_edge(container_id, false),
        _ => false,
    };

    if handled {
        ev.prevent_default();
        ev.stop_propagation();
    }
    handled
}

/// Locks or releases page scrolling while an overlay is open.
pub(crate) fn set_body_scroll_locked(locked: bool) {
    let Some(body) = document().and_then(|document| document.body()) else {
        return;
    };
    let style = body.style();
    let _ = if locked {
        style.set_property("overflow", "hidden")
    } else {
        style.remove_property("overflow").map(|_| ())
    };
}
