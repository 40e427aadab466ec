use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

fn is_text_entry(tag: &str) -> bool {
    matches!(tag.to_ascii_uppercase().as_str(), "INPUT" | "TEXTAREA" | "SELECT")
}

fn is_ios(user_agent: &str) -> bool {
    ["iPad", "iPhone", "iPod"].iter().any(|d| user_agent.contains(d))
}

/// Viewport and keyboard workarounds for phones:
/// keeps `--vh` in sync with the real inner height, tags the body while an
/// iOS text field has focus, and scrolls the focused field back into view
/// when the on-screen keyboard resizes the visual viewport.
#[hook]
pub fn use_mobile_fixes() {
    use_effect_with_deps(
        move |_| {
            let window = window().expect("no global window");
            let document = window.document().expect("no document");

            let set_vh = {
                let window = window.clone();
                let document = document.clone();
                move || {
                    let height = window
                        .inner_height()
                        .ok()
                        .and_then(|h| h.as_f64())
                        .unwrap_or_default();
                    if let Some(root) = document
                        .document_element()
                        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
                    {
                        let _ = root
                            .style()
                            .set_property("--vh", &format!("{}px", height * 0.01));
                    }
                }
            };
            set_vh();
            let vh_callback = Closure::wrap(Box::new(set_vh) as Box<dyn FnMut()>);
            for event in ["resize", "orientationchange"] {
                let _ = window.add_event_listener_with_callback(event, vh_callback.as_ref().unchecked_ref());
            }

            let ios = window
                .navigator()
                .user_agent()
                .map(|ua| is_ios(&ua))
                .unwrap_or(false);
            let focus_callbacks = if ios {
                let focus_doc = document.clone();
                let on_focus = Closure::wrap(Box::new(move |e: web_sys::FocusEvent| {
                    let focused_text = e
                        .target()
                        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                        .map(|el| is_text_entry(&el.tag_name()))
                        .unwrap_or(false);
                    if focused_text {
                        if let Some(body) = focus_doc.body() {
                            let _ = body.class_list().add_1("ios-input-focus");
                        }
                    }
                }) as Box<dyn FnMut(web_sys::FocusEvent)>);
                let blur_doc = document.clone();
                let on_blur = Closure::wrap(Box::new(move |_: web_sys::FocusEvent| {
                    if let Some(body) = blur_doc.body() {
                        let _ = body.class_list().remove_1("ios-input-focus");
                    }
                }) as Box<dyn FnMut(web_sys::FocusEvent)>);
                let _ = document.add_event_listener_with_callback_and_bool(
                    "focus",
                    on_focus.as_ref().unchecked_ref(),
                    true,
                );
                let _ = document.add_event_listener_with_callback_and_bool(
                    "blur",
                    on_blur.as_ref().unchecked_ref(),
                    true,
                );
                Some((on_focus, on_blur))
            } else {
                None
            };

            let viewport = window.visual_viewport();
            let keyboard_doc = document.clone();
            let keyboard_callback = Closure::wrap(Box::new(move || {
                let Some(active) = keyboard_doc.active_element() else { return };
                let tag = active.tag_name();
                if tag.eq_ignore_ascii_case("INPUT") || tag.eq_ignore_ascii_case("TEXTAREA") {
                    Timeout::new(100, move || {
                        let options = ScrollIntoViewOptions::new();
                        options.set_behavior(ScrollBehavior::Smooth);
                        options.set_block(ScrollLogicalPosition::Center);
                        active.scroll_into_view_with_scroll_into_view_options(&options);
                    })
                    .forget();
                }
            }) as Box<dyn FnMut()>);
            if let Some(viewport) = &viewport {
                let _ = viewport
                    .add_event_listener_with_callback("resize", keyboard_callback.as_ref().unchecked_ref());
            }

            move || {
                for event in ["resize", "orientationchange"] {
                    let _ = window
                        .remove_event_listener_with_callback(event, vh_callback.as_ref().unchecked_ref());
                }
                if let Some((on_focus, on_blur)) = focus_callbacks {
                    let _ = document.remove_event_listener_with_callback_and_bool(
                        "focus",
                        on_focus.as_ref().unchecked_ref(),
                        true,
                    );
                    let _ = document.remove_event_listener_with_callback_and_bool(
                        "blur",
                        on_blur.as_ref().unchecked_ref(),
                        true,
                    );
                }
                if let Some(viewport) = viewport {
                    let _ = viewport.remove_event_listener_with_callback(
                        "resize",
                        keyboard_callback.as_ref().unchecked_ref(),
                    );
                }
            }
        },
        (),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ios_detection() {
        assert!(is_ios("Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)"));
        assert!(is_ios("Mozilla/5.0 (iPad; CPU OS 16_6 like Mac OS X)"));
        assert!(!is_ios("Mozilla/5.0 (Linux; Android 14; Pixel 8)"));
    }

    #[test]
    fn test_text_entry_tags() {
        assert!(is_text_entry("INPUT"));
        assert!(is_text_entry("textarea"));
        assert!(is_text_entry("SELECT"));
        assert!(!is_text_entry("BUTTON"));
    }
}
