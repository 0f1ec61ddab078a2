//! About section.

use leptos::prelude::*;

const HIGHLIGHTS: &[(&str, &str)] = &[
    ("150+", "Projects delivered"),
    ("8", "Years in business"),
    ("40+", "Returning clients"),
];

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="section about">
            <h2 class="section__title">"About "<span class="gradient-text">"Us"</span></h2>
            <p class="section__lead">
                "We are a small team of designers, marketers and engineers. Clients come to us for a logo and stay for the website, the campaign, and the office network behind it."
            </p>
            <div class="about__stats">
                {HIGHLIGHTS
                    .iter()
                    .map(|(value, label)| {
                        view! {
                            <div class="about__stat">
                                <span class="about__stat-value">{*value}</span>
                                <span class="about__stat-label">{*label}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
