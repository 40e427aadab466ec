use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::Callback;

use crate::config;

/// Page offset to scroll to so a section clears the fixed navbar.
pub fn scroll_target(offset_top: f64) -> f64 {
    (offset_top - config::NAV_OFFSET).max(0.0)
}

/// Smoothly scrolls to the element with `section_id`. Missing ids are ignored.
pub fn scroll_to_section(section_id: &str) {
    let Some(window) = window() else { return };
    let Some(target) = window
        .document()
        .and_then(|doc| doc.get_element_by_id(section_id))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        log::debug!("No section #{} to scroll to", section_id);
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(scroll_target(target.offset_top() as f64));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// onclick for in-page `#anchor` links.
pub fn anchor_click(href: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        match href.trim_start_matches('#') {
            "" => {}
            id => scroll_to_section(id),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_target_clears_navbar() {
        assert_eq!(scroll_target(500.0), 420.0);
        assert_eq!(scroll_target(30.0), 0.0);
    }
}
