//! Floating WhatsApp chat button.

use leptos::prelude::*;

use crate::util::whatsapp::chat_link;

/// Renders nothing when `phone_number` has no digits.
#[component]
pub fn WhatsAppButton(phone_number: &'static str) -> impl IntoView {
    chat_link(phone_number).map(|href| {
        view! {
            <a
                class="whatsapp-btn"
                href=href
                target="_blank"
                rel="noopener noreferrer"
                aria-label="Chat on WhatsApp"
            >
                "💬"
            </a>
        }
    })
}
