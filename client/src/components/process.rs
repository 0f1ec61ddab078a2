//! "How we work" process steps.

use leptos::prelude::*;

const STEPS: &[(&str, &str)] = &[
    ("Discover", "We learn about your business, audience and goals."),
    ("Plan", "You get a scoped proposal with timeline and fixed pricing."),
    ("Create", "We design, build and review with you at every milestone."),
    ("Launch & Support", "We ship, measure, and stay on hand for what comes next."),
];

#[component]
pub fn Process() -> impl IntoView {
    view! {
        <section id="process" class="section process">
            <h2 class="section__title">"Our "<span class="gradient-text">"Process"</span></h2>
            <ol class="process__steps">
                {STEPS
                    .iter()
                    .enumerate()
                    .map(|(i, (title, body))| {
                        view! {
                            <li class="process__step">
                                <span class="process__number">{format!("{:02}", i + 1)}</span>
                                <h3>{*title}</h3>
                                <p>{*body}</p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </section>
    }
}
