use web_sys::window;
use yew::prelude::*;

use crate::config;

pub fn chat_message() -> String {
    format!(
        "Hello! How can we help you get approved for your new home?\n\n📞 Call us: {}\n📧 Email: {}\n\nWe're available 24/7 to answer your questions!",
        config::CONTACT_PHONE,
        config::CONTACT_EMAIL
    )
}

#[function_component(ChatWidget)]
pub fn chat_widget() -> Html {
    let onclick = Callback::from(|_: MouseEvent| {
        if let Some(window) = window() {
            let _ = window.alert_with_message(&chat_message());
        }
    });

    html! {
        <button class="chat-widget" aria-label="Contact us" {onclick}>
            {"💬"}
        </button>
    }
}
