//! Async submission driver.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs one quote submission end to end against abstract seams: where the
//! [`QuoteFlow`] lives ([`FlowStore`]), how the request leaves the process
//! ([`QuoteTransport`]), and how time passes (`sleep`). The browser passes a
//! Leptos signal, the EmailJS HTTP transport, and `gloo-timers`; tests pass a
//! `RefCell`, a scripted transport, and a paused tokio clock.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use std::cell::RefCell;
use std::future::Future;
use std::time::Duration;

use crate::error::{SubmissionFailed, SubmitRejected};
use crate::fields::FormFields;
use crate::flow::{QuoteFlow, SubmissionStatus};

/// Delivers a quote request to the email service.
#[allow(async_fn_in_trait)]
pub trait QuoteTransport {
    /// Issue exactly one outbound call for `fields`.
    async fn send(&self, fields: &FormFields) -> Result<(), SubmissionFailed>;
}

/// Shared, mutable home of a [`QuoteFlow`].
pub trait FlowStore {
    /// Run `f` against the flow. `None` once the owner has been torn down.
    fn with_flow<R>(&self, f: impl FnOnce(&mut QuoteFlow) -> R) -> Option<R>;
}

impl FlowStore for RefCell<QuoteFlow> {
    fn with_flow<R>(&self, f: impl FnOnce(&mut QuoteFlow) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Submit the form held in `store`.
///
/// Issues one call through `transport`, records the outcome, and after a
/// success waits out the auto-close delay before calling `on_close` (only if
/// the modal is still in the session the submit started from).
///
/// # Errors
///
/// Returns [`SubmitRejected`] when the submit was refused (a call already in
/// flight, invalid fields) or the store was torn down before the call settled.
pub async fn submit_quote<S, T, Sl, Fut>(
    store: &S,
    transport: &T,
    sleep: Sl,
    on_close: impl FnOnce(),
) -> Result<SubmissionStatus, SubmitRejected>
where
    S: FlowStore,
    T: QuoteTransport,
    Sl: FnOnce(Duration) -> Fut,
    Fut: Future<Output = ()>,
{
    let ticket = store.with_flow(QuoteFlow::begin_submit).ok_or(SubmitRejected::Detached)??;

    let result = transport.send(ticket.fields()).await;
    match &result {
        Ok(()) => tracing::info!(service = %ticket.fields().service, "quote request sent"),
        Err(e) => tracing::error!(error = %e, "quote request failed"),
    }

    let Some((status, auto_close)) = store.with_flow(|flow| {
        let auto_close = flow.settle(ticket, result);
        (flow.status(), auto_close)
    }) else {
        tracing::debug!("quote form detached before the request settled");
        return Err(SubmitRejected::Detached);
    };

    if let Some(timer) = auto_close {
        sleep(timer.delay()).await;
        if store.with_flow(|flow| flow.fire_auto_close(timer)) == Some(true) {
            on_close();
        }
    }

    Ok(status)
}
