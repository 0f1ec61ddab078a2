//! Reading-progress bar pinned to the top of the page.

use leptos::prelude::*;

use crate::util::progress::{progress_width, read_window_progress};

#[component]
pub fn ProgressBar() -> impl IntoView {
    let progress = RwSignal::new(read_window_progress());

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::scroll, move |_| progress.set(read_window_progress()));
        on_cleanup(move || handle.remove());
    }

    view! {
        <div class="progress-bar" style:width=move || progress_width(progress.get())></div>
    }
}
