use yew::prelude::*;
use yew_router::prelude::*;
use log::info;
use web_sys::{window, MouseEvent};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod error;
mod components {
    pub mod carousel;
    pub mod chat;
    pub mod counter;
    pub mod faq;
    pub mod loading;
    pub mod mobile;
    pub mod reveal;
    pub mod scroll;
    pub mod visibility;
}
mod forms {
    pub mod contact;
    pub mod field;
    pub mod mail_fallback;
    pub mod notifier;
    pub mod pipeline;
    pub mod relay;
    pub mod submission;
}
mod quiz {
    pub mod modal;
    pub mod recommendation;
    pub mod wizard;
}
mod pages {
    pub mod landing;
}

use components::mobile::use_mobile_fixes;
use components::scroll::anchor_click;
use pages::landing::Landing;


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Unknown path, redirecting to landing page");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}

const NAV_LINKS: &[(&str, &str)] = &[
    ("#services", "Programs"),
    ("#process", "How It Works"),
    ("#stories", "Success Stories"),
    ("#faq", "FAQ"),
    ("#contact", "Contact"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state_eq(|| false);
    let is_scrolled = use_state_eq(|| false);
    let nav_ref = use_node_ref();

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window().unwrap();
            let window_clone = window.clone();

            let scroll_callback = Closure::wrap(Box::new(move || {
                let scroll_y = window_clone.scroll_y().unwrap_or_default();
                is_scrolled.set(scroll_y > config::NAV_SCROLLED_THRESHOLD);
            }) as Box<dyn FnMut()>);

            window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                .unwrap();

            move || {
                window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                    .unwrap();
            }
        }, ());
    }

    // Clicking anywhere outside the navbar closes the mobile menu
    {
        let menu_open = menu_open.clone();
        let nav_ref = nav_ref.clone();
        use_effect_with_deps(move |_| {
            let document = web_sys::window().unwrap().document().unwrap();

            let click_callback = Closure::wrap(Box::new(move |e: MouseEvent| {
                let inside = match (nav_ref.cast::<web_sys::Node>(), e.target()) {
                    (Some(nav), Some(target)) => nav.contains(target.dyn_ref::<web_sys::Node>()),
                    _ => false,
                };
                if !inside {
                    menu_open.set(false);
                }
            }) as Box<dyn FnMut(MouseEvent)>);

            document.add_event_listener_with_callback("click", click_callback.as_ref().unchecked_ref())
                .unwrap();

            move || {
                document.remove_event_listener_with_callback("click", click_callback.as_ref().unchecked_ref())
                    .unwrap();
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            e.stop_propagation();
            menu_open.set(!*menu_open);
        })
    };

    let menu_class = if *menu_open {
        "nav-menu active"
    } else {
        "nav-menu"
    };

    html! {
        <nav ref={nav_ref} class={classes!("navbar", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#home" class="nav-logo" onclick={anchor_click("#home")}>
                    {config::BUSINESS_NAME}
                </a>

                <button class={classes!("hamburger", (*menu_open).then(|| "active"))} onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for NAV_LINKS.iter().map(|(href, label)| {
                        let scroll = anchor_click(href);
                        let menu_open = menu_open.clone();
                        let onclick = Callback::from(move |e: MouseEvent| {
                            menu_open.set(false);
                            scroll.emit(e);
                        });
                        html! {
                            <a href={*href} class="nav-link" {onclick}>{*label}</a>
                        }
                    }) }
                    <a href={format!("tel:{}", config::CONTACT_PHONE)} class="nav-call-button">
                        {config::CONTACT_PHONE_DISPLAY}
                    </a>
                </div>
            </div>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    use_mobile_fixes();

    use_effect_with_deps(|_| {
        if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let _ = body.class_list().add_1("loaded");
        }
        || ()
    }, ());

    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::get_log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
