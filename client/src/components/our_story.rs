//! Company story section.

use leptos::prelude::*;

#[component]
pub fn OurStory() -> impl IntoView {
    view! {
        <section id="story" class="section story">
            <h2 class="section__title">"Our "<span class="gradient-text">"Story"</span></h2>
            <p>
                "We started as two freelancers sharing a desk: one designing brands, one fixing the networks those brands ran on. Clients kept asking us to do both, so we stopped saying no."
            </p>
            <p>
                "Today the studio covers design, marketing, social media, video, networking and security, with one point of contact for all of it."
            </p>
        </section>
    }
}
