//! Landing hero with the primary call to action.

use leptos::prelude::*;

#[component]
pub fn Hero(on_quote: Callback<()>) -> impl IntoView {
    view! {
        <section id="home" class="hero">
            <div class="hero__content">
                <h1 class="hero__title">
                    "Creative work and reliable IT, "
                    <span class="gradient-text">"under one roof"</span>
                </h1>
                <p class="hero__subtitle">
                    "We design brands, grow audiences, and keep your network secure so you can focus on running your business."
                </p>
                <div class="hero__actions">
                    <button class="gradient-btn" on:click=move |_| on_quote.run(())>"Get a Quote"</button>
                    <a class="hero__secondary" href="#services">"Explore Services"</a>
                </div>
            </div>
        </section>
    }
}
