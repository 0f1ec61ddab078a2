//! Contact details with a second entry point to the quote form.

use leptos::prelude::*;

pub const CONTACT_EMAIL: &str = "hello@brightline.studio";
pub const CONTACT_PHONE: &str = "+91 99180 96894";

#[component]
pub fn Contact(on_quote: Callback<()>) -> impl IntoView {
    view! {
        <section id="contact" class="section contact">
            <h2 class="section__title">"Get in "<span class="gradient-text">"Touch"</span></h2>
            <p class="section__lead">"Tell us what you need and we'll reply within one business day."</p>
            <ul class="contact__details">
                <li>"Email: "<a href=format!("mailto:{CONTACT_EMAIL}")>{CONTACT_EMAIL}</a></li>
                <li>"Phone: "<a href=format!("tel:{}", CONTACT_PHONE.replace(' ', ""))>{CONTACT_PHONE}</a></li>
            </ul>
            <button class="gradient-btn" on:click=move |_| on_quote.run(())>"Request a Quote"</button>
        </section>
    }
}
