//! Client testimonials.

use leptos::prelude::*;

struct Testimonial {
    quote: &'static str,
    name: &'static str,
    role: &'static str,
}

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "They rebuilt our brand and our office network in the same month. Both just work.",
        name: "Priya Sharma",
        role: "Founder, Leafline Organics",
    },
    Testimonial {
        quote: "Our social channels finally have a plan, and the numbers show it.",
        name: "Daniel Okafor",
        role: "Marketing Lead, Northgate Fitness",
    },
    Testimonial {
        quote: "The security audit found problems we didn't know we had, and fixed them.",
        name: "Meera Iyer",
        role: "Operations Manager, Crestview Clinics",
    },
];

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section id="testimonials" class="section testimonials">
            <h2 class="section__title">"What Clients "<span class="gradient-text">"Say"</span></h2>
            <div class="testimonials__grid">
                {TESTIMONIALS
                    .iter()
                    .map(|t| {
                        view! {
                            <blockquote class="testimonial">
                                <p class="testimonial__quote">{t.quote}</p>
                                <footer class="testimonial__author">
                                    <strong>{t.name}</strong>
                                    <span>{t.role}</span>
                                </footer>
                            </blockquote>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
