use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Flips to true the first time `node` is at least `threshold` visible,
/// then stops observing.
#[hook]
pub fn use_seen(node: NodeRef, threshold: f64) -> bool {
    let seen = use_state_eq(|| false);

    {
        let seen = seen.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let mut observer = None;
                let mut callback = None;

                if let Some(element) = node.cast::<web_sys::Element>() {
                    let on_seen = seen.clone();
                    let cb = Closure::wrap(Box::new(
                        move |entries: Array, observer: IntersectionObserver| {
                            for entry in entries.iter() {
                                let entry: IntersectionObserverEntry = entry.unchecked_into();
                                if entry.is_intersecting() {
                                    on_seen.set(true);
                                    observer.unobserve(&entry.target());
                                }
                            }
                        },
                    )
                        as Box<dyn FnMut(Array, IntersectionObserver)>);

                    let init = IntersectionObserverInit::new();
                    init.set_threshold(&JsValue::from_f64(threshold));
                    match IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &init) {
                        Ok(obs) => {
                            obs.observe(&element);
                            observer = Some(obs);
                        }
                        // Older browsers: just show it
                        Err(_) => seen.set(true),
                    }
                    callback = Some(cb);
                }

                move || {
                    if let Some(observer) = observer {
                        observer.disconnect();
                    }
                    drop(callback);
                }
            },
            node,
        );
    }

    *seen
}
