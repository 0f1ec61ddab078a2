//! Quote-request state machine.
//!
//! DESIGN
//! ======
//! "Sending" and "last outcome" are orthogonal: the in-flight ticket is an
//! `Option<u64>` next to a three-way [`SubmissionStatus`], so the UI can show
//! a busy button without inventing a fourth status.
//!
//! Modal visibility belongs to the page. The flow only mirrors it through
//! [`QuoteFlow::open`] / [`QuoteFlow::close`] so the success auto-close can be
//! tied to the session it was scheduled in: a timer from an earlier session
//! never closes a reopened modal.
//!
//! ```text
//! Idle  --settle(Ok)-->  Success --auto-close--> Idle
//! Idle  --settle(Err)--> Error
//! Error --settle(Ok)-->  Success
//! Error --settle(Err)--> Error
//! ```

#[cfg(test)]
#[path = "flow_test.rs"]
mod flow_test;

use std::time::Duration;

use crate::error::{SubmissionFailed, SubmitRejected};
use crate::fields::{Field, FormFields};

/// Delay between a successful send and the automatic close-and-reset.
pub const AUTO_CLOSE_DELAY: Duration = Duration::from_millis(2000);

/// Outcome of the most recent settled submission.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Success,
    Error,
}

/// Issued by [`QuoteFlow::begin_submit`]; must be handed back to
/// [`QuoteFlow::settle`] once the outbound call resolves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitTicket {
    id: u64,
    fields: FormFields,
}

impl SubmitTicket {
    /// Snapshot of the form at the moment the submit was accepted.
    #[must_use]
    pub fn fields(&self) -> &FormFields {
        &self.fields
    }
}

/// A scheduled close-and-reset after a successful send.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AutoClose {
    session: u64,
    delay: Duration,
}

impl AutoClose {
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

/// State of the "request a quote" modal form.
#[derive(Clone, Debug, Default)]
pub struct QuoteFlow {
    fields: FormFields,
    status: SubmissionStatus,
    in_flight: Option<u64>,
    next_ticket: u64,
    session: u64,
    open: bool,
    pending_close: Option<u64>,
}

impl QuoteFlow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    #[must_use]
    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// True exactly while an outbound call has been issued and not settled.
    #[must_use]
    pub fn in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether the submit action should currently do anything.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.in_flight() && self.fields.validate().is_ok()
    }

    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.fields.set(field, value);
    }

    /// The modal became visible; starts a new session.
    pub fn open(&mut self) {
        if !self.open {
            self.open = true;
            self.session += 1;
        }
    }

    /// The modal was hidden, by the user or by the auto-close.
    ///
    /// Fields and an `Error` status survive so the next open shows what was
    /// typed. A success still waiting for its auto-close is reset here since
    /// the close it was waiting for has now happened.
    pub fn close(&mut self) {
        if self.pending_close.take().is_some() && self.status == SubmissionStatus::Success {
            self.status = SubmissionStatus::Idle;
        }
        if self.open {
            self.open = false;
            self.session += 1;
        }
    }

    /// Accept a submit and mark the call in flight.
    ///
    /// # Errors
    ///
    /// [`SubmitRejected::InFlight`] while a previous call is outstanding, or
    /// [`SubmitRejected::Invalid`] when required fields are blank or malformed.
    /// A rejected submit changes nothing.
    pub fn begin_submit(&mut self) -> Result<SubmitTicket, SubmitRejected> {
        if self.in_flight() {
            return Err(SubmitRejected::InFlight);
        }
        self.fields.validate()?;

        self.next_ticket += 1;
        let id = self.next_ticket;
        self.in_flight = Some(id);
        Ok(SubmitTicket { id, fields: self.fields.clone() })
    }

    /// Record the result of the outbound call for `ticket`.
    ///
    /// Returns the auto-close to schedule when the send succeeded while the
    /// modal is open.
    pub fn settle(&mut self, ticket: SubmitTicket, result: Result<(), SubmissionFailed>) -> Option<AutoClose> {
        if self.in_flight != Some(ticket.id) {
            return None;
        }
        self.in_flight = None;

        match result {
            Ok(()) => {
                self.fields.clear();
                if self.open {
                    self.status = SubmissionStatus::Success;
                    self.pending_close = Some(self.session);
                    Some(AutoClose { session: self.session, delay: AUTO_CLOSE_DELAY })
                } else {
                    self.status = SubmissionStatus::Idle;
                    None
                }
            }
            Err(_) => {
                self.status = SubmissionStatus::Error;
                None
            }
        }
    }

    /// Apply a due auto-close. Returns `true` when the page must hide the
    /// modal; stale timers (closed or reopened since) are ignored.
    pub fn fire_auto_close(&mut self, timer: AutoClose) -> bool {
        if self.pending_close != Some(timer.session) || self.session != timer.session {
            return false;
        }
        self.pending_close = None;
        self.status = SubmissionStatus::Idle;
        self.close();
        true
    }
}
