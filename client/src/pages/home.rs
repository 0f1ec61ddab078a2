//! Single-page home route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the "is the quote modal shown" flag. Every "Get a Quote" button on
//! the page sets it; the modal clears it through `on_close`, whether the
//! visitor dismissed it or the post-success auto-close fired.

use leptos::prelude::*;

use crate::components::about::About;
use crate::components::contact::Contact;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::components::our_story::OurStory;
use crate::components::process::Process;
use crate::components::progress_bar::ProgressBar;
use crate::components::quote_form::QuoteForm;
use crate::components::services::Services;
use crate::components::testimonials::Testimonials;
use crate::components::whatsapp_button::WhatsAppButton;

/// International number for the floating chat button.
pub const WHATSAPP_NUMBER: &str = "919918096894";

#[component]
pub fn HomePage() -> impl IntoView {
    let show_quote = RwSignal::new(false);
    let open_quote = Callback::new(move |()| show_quote.set(true));
    let close_quote = Callback::new(move |()| show_quote.set(false));

    view! {
        <ProgressBar/>
        <Navbar on_quote=open_quote/>
        <main class="home">
            <Hero on_quote=open_quote/>
            <About/>
            <Services/>
            <Process/>
            <OurStory/>
            <Testimonials/>
            <Contact on_quote=open_quote/>
        </main>
        <Footer/>
        <WhatsAppButton phone_number=WHATSAPP_NUMBER/>
        <QuoteForm show=show_quote on_close=close_quote/>
    }
}
