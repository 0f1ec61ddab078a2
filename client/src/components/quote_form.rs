//! "Get a Quote" modal form.
//!
//! SYSTEM CONTEXT
//! ==============
//! The home page owns whether the modal is shown; this component owns the
//! [`QuoteFlow`] and follows the page's flag: it mirrors it into the flow's
//! session and into a [`ModalVisibility`] that holds the `<body>` scroll lock.
//! Submission runs through [`quote_flow::submit_quote`] with the EmailJS
//! transport and `gloo-timers` for the auto-close delay.

#[cfg(test)]
#[path = "quote_form_test.rs"]
mod quote_form_test;

use leptos::prelude::*;
use quote_flow::{Field, ModalVisibility, QuoteFlow, ServiceCategory, SubmissionStatus};

use crate::util::scroll_lock::BodyScrollLock;

pub const SUCCESS_MESSAGE: &str = "Thank you! Your quote request has been sent successfully.";
pub const ERROR_MESSAGE: &str = "Sorry, there was an error sending your request. Please try again.";

/// Inline banner shown above the submit button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Banner {
    Success,
    Error,
}

impl Banner {
    pub fn message(self) -> &'static str {
        match self {
            Self::Success => SUCCESS_MESSAGE,
            Self::Error => ERROR_MESSAGE,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "quote-form__banner quote-form__banner--success",
            Self::Error => "quote-form__banner quote-form__banner--error",
        }
    }
}

/// Banner for the current state; hidden while a send is in progress.
pub fn banner_for(status: SubmissionStatus, in_flight: bool) -> Option<Banner> {
    if in_flight {
        return None;
    }
    match status {
        SubmissionStatus::Idle => None,
        SubmissionStatus::Success => Some(Banner::Success),
        SubmissionStatus::Error => Some(Banner::Error),
    }
}

pub fn submit_label(in_flight: bool) -> &'static str {
    if in_flight { "Sending..." } else { "Submit Request" }
}

pub fn submit_class(in_flight: bool) -> &'static str {
    if in_flight {
        "gradient-btn quote-form__submit quote-form__submit--busy"
    } else {
        "gradient-btn quote-form__submit"
    }
}

/// Adapts the component's signal to the driver's store seam.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy)]
struct SignalFlow(RwSignal<QuoteFlow>);

#[cfg(feature = "hydrate")]
impl quote_flow::FlowStore for SignalFlow {
    fn with_flow<R>(&self, f: impl FnOnce(&mut QuoteFlow) -> R) -> Option<R> {
        self.0.try_update(f)
    }
}

/// Modal overlay with the six-field quote form.
#[component]
pub fn QuoteForm(#[prop(into)] show: Signal<bool>, on_close: Callback<()>) -> impl IntoView {
    let flow = RwSignal::new(QuoteFlow::new());
    let modal = StoredValue::new(ModalVisibility::new(BodyScrollLock));

    Effect::new(move || {
        let visible = show.get();
        modal.update_value(|m| m.set_visible(visible));
        flow.update(|f| if visible { f.open() } else { f.close() });
    });
    on_cleanup(move || {
        modal.try_update_value(ModalVisibility::hide);
    });

    let in_flight = move || flow.with(QuoteFlow::in_flight);
    let value_of = move |field: Field| move || flow.with(|f| f.fields().get(field).to_owned());
    let set_field = move |field: Field| {
        move |ev: leptos::ev::Event| flow.update(|f| f.update_field(field, event_target_value(&ev)))
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !flow.with_untracked(QuoteFlow::can_submit) {
            return;
        }

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let store = SignalFlow(flow);
            let transport = crate::net::emailjs::EmailJsTransport::from_document();
            let close = || on_close.run(());
            if let Err(e) = quote_flow::submit_quote(&store, &transport, gloo_timers::future::sleep, close).await {
                log::warn!("quote submit ignored: {e}");
            }
        });
    };

    let on_close_click = move |_| on_close.run(());
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <Show when=move || show.get()>
            <div class="form-popup open" on:click=move |_| on_close.run(()) on:keydown=on_keydown tabindex="-1">
                <div class="form-container" on:click=move |ev| ev.stop_propagation()>
                    <button class="close-btn" on:click=on_close_click title="Close" aria-label="Close">
                        "✕"
                    </button>

                    <h3 class="form-container__title">
                        <span class="gradient-text">"Get a Quote"</span>
                    </h3>

                    <form class="quote-form" on:submit=on_submit>
                        <input
                            class="form-input"
                            type="text"
                            name=Field::Name.name()
                            placeholder="Your Name *"
                            required=true
                            prop:value=value_of(Field::Name)
                            on:input=set_field(Field::Name)
                        />
                        <input
                            class="form-input"
                            type="email"
                            name=Field::Email.name()
                            placeholder="Your Email *"
                            required=true
                            prop:value=value_of(Field::Email)
                            on:input=set_field(Field::Email)
                        />
                        <input
                            class="form-input"
                            type="tel"
                            name=Field::Phone.name()
                            placeholder="Phone Number"
                            prop:value=value_of(Field::Phone)
                            on:input=set_field(Field::Phone)
                        />
                        <input
                            class="form-input"
                            type="text"
                            name=Field::Company.name()
                            placeholder="Company Name"
                            prop:value=value_of(Field::Company)
                            on:input=set_field(Field::Company)
                        />
                        <select
                            class="form-input"
                            name=Field::Service.name()
                            required=true
                            prop:value=value_of(Field::Service)
                            on:change=set_field(Field::Service)
                        >
                            <option value="" disabled=true>"Select Service *"</option>
                            {ServiceCategory::ALL
                                .iter()
                                .map(|s| view! { <option value=s.slug()>{s.label()}</option> })
                                .collect_view()}
                        </select>
                        <textarea
                            class="form-input"
                            name=Field::Message.name()
                            placeholder="Tell us about your project *"
                            rows="4"
                            required=true
                            prop:value=value_of(Field::Message)
                            on:input=set_field(Field::Message)
                        ></textarea>

                        {move || {
                            flow.with(|f| banner_for(f.status(), f.in_flight()))
                                .map(|banner| view! { <div class=banner.class()>{banner.message()}</div> })
                        }}

                        <button
                            type="submit"
                            class=move || submit_class(in_flight())
                            disabled=in_flight
                        >
                            {move || submit_label(in_flight())}
                        </button>
                    </form>
                </div>
            </div>
        </Show>
    }
}
