//! Services grid, one card per quote-form category.

#[cfg(test)]
#[path = "services_test.rs"]
mod services_test;

use leptos::prelude::*;
use quote_flow::ServiceCategory;

/// Marketing copy for a service card.
pub fn blurb(service: ServiceCategory) -> &'static str {
    match service {
        ServiceCategory::GraphicDesign => "Logos, brand identities, print and packaging that look right everywhere.",
        ServiceCategory::Marketing => "Campaigns planned around measurable goals, from launch to follow-up.",
        ServiceCategory::SocialMedia => "Content calendars, community management and paid social that converts.",
        ServiceCategory::NetworkSolutions => "Office networks, Wi-Fi and cabling designed, installed and maintained.",
        ServiceCategory::ItSecurity => "Firewalls, backups and audits that keep your data where it belongs.",
        ServiceCategory::VideoProduction => "Promos, explainers and event coverage, scripted through to final cut.",
    }
}

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section id="services" class="section services">
            <h2 class="section__title">"Our "<span class="gradient-text">"Services"</span></h2>
            <div class="services__grid">
                {ServiceCategory::ALL
                    .iter()
                    .map(|s| {
                        view! {
                            <article class="service-card" data-service=s.slug()>
                                <h3 class="service-card__title">{s.label()}</h3>
                                <p class="service-card__body">{blurb(*s)}</p>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
