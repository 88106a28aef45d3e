// Accessibility helpers

use wasm_bindgen::JsCast;

const FOCUSABLE: &str = "button, [href], input, select, textarea, [tabindex]:not([tabindex='-1'])";

/// Get CSS for visible focus indicators and screen reader utilities
#[must_use]
pub const fn visible_focus_css() -> &'static str {
    ":focus-visible{outline:3px solid #7c3aed;outline-offset:2px} .sr-only{position:absolute;width:1px;height:1px;margin:-1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;}"
}

fn element_by_id(id: &str) -> Option<web_sys::HtmlElement> {
    web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
}

/// Move focus to the first focusable descendant of `container_id`, or to the
/// container itself.
pub fn focus_first_in(container_id: &str) {
    let Some(container) = element_by_id(container_id) else {
        return;
    };
    let first = container
        .query_selector(FOCUSABLE)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
    let _ = first.unwrap_or(container).focus();
}

/// Return focus to the element that opened a dialog.
pub fn restore_focus(id: &str) {
    if let Some(el) = element_by_id(id) {
        let _ = el.focus();
    }
}
