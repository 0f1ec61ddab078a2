use super::*;
use crate::error::FieldError;

fn fill(flow: &mut QuoteFlow) {
    flow.update_field(Field::Name, "Jane");
    flow.update_field(Field::Email, "jane@x.com");
    flow.update_field(Field::Service, "marketing");
    flow.update_field(Field::Message, "Need help");
}

fn open_filled() -> QuoteFlow {
    let mut flow = QuoteFlow::new();
    flow.open();
    fill(&mut flow);
    flow
}

fn failed() -> Result<(), SubmissionFailed> {
    Err(SubmissionFailed::new("network down"))
}

// =============================================================
// Initial state
// =============================================================

#[test]
fn new_flow_is_idle_closed_and_empty() {
    let flow = QuoteFlow::new();
    assert_eq!(flow.status(), SubmissionStatus::Idle);
    assert!(!flow.in_flight());
    assert!(!flow.is_open());
    assert!(flow.fields().is_empty());
}

// =============================================================
// begin_submit guards
// =============================================================

#[test]
fn submit_with_missing_required_fields_is_inert() {
    let mut flow = QuoteFlow::new();
    flow.open();
    flow.update_field(Field::Name, "Jane");

    assert!(!flow.can_submit());
    let err = flow.begin_submit().unwrap_err();
    assert_eq!(
        err,
        SubmitRejected::Invalid(FieldError::Missing(vec![Field::Email, Field::Service, Field::Message]))
    );
    assert!(!flow.in_flight());
    assert_eq!(flow.status(), SubmissionStatus::Idle);
}

#[test]
fn begin_submit_marks_in_flight_without_changing_status() {
    let mut flow = open_filled();
    assert!(flow.can_submit());

    let ticket = flow.begin_submit().unwrap();
    assert!(flow.in_flight());
    assert!(!flow.can_submit());
    assert_eq!(flow.status(), SubmissionStatus::Idle);
    assert_eq!(ticket.fields(), flow.fields());
}

#[test]
fn second_submit_while_in_flight_is_rejected() {
    let mut flow = open_filled();
    let _first = flow.begin_submit().unwrap();
    assert_eq!(flow.begin_submit(), Err(SubmitRejected::InFlight));
    assert!(flow.in_flight());
}

// =============================================================
// settle
// =============================================================

#[test]
fn successful_settle_clears_fields_and_schedules_auto_close() {
    let mut flow = open_filled();
    let ticket = flow.begin_submit().unwrap();

    let timer = flow.settle(ticket, Ok(())).expect("auto-close scheduled");
    assert_eq!(timer.delay(), AUTO_CLOSE_DELAY);
    assert_eq!(flow.status(), SubmissionStatus::Success);
    assert!(flow.fields().is_empty());
    assert!(!flow.in_flight());
    assert!(flow.is_open());
}

#[test]
fn failed_settle_keeps_fields_and_stays_open() {
    let mut flow = open_filled();
    let before = flow.fields().clone();
    let ticket = flow.begin_submit().unwrap();

    assert_eq!(flow.settle(ticket, failed()), None);
    assert_eq!(flow.status(), SubmissionStatus::Error);
    assert_eq!(flow.fields(), &before);
    assert!(!flow.in_flight());
    assert!(flow.is_open());
}

#[test]
fn repeated_failures_stay_in_error() {
    let mut flow = open_filled();
    for _ in 0..3 {
        let ticket = flow.begin_submit().unwrap();
        flow.settle(ticket, failed());
        assert_eq!(flow.status(), SubmissionStatus::Error);
    }
}

#[test]
fn retry_after_error_can_succeed() {
    let mut flow = open_filled();
    let ticket = flow.begin_submit().unwrap();
    flow.settle(ticket, failed());

    let ticket = flow.begin_submit().unwrap();
    assert_eq!(flow.status(), SubmissionStatus::Error);
    let timer = flow.settle(ticket, Ok(())).unwrap();
    assert_eq!(flow.status(), SubmissionStatus::Success);
    assert!(flow.fire_auto_close(timer));
    assert_eq!(flow.status(), SubmissionStatus::Idle);
}

#[test]
fn settle_with_foreign_ticket_is_ignored() {
    let mut flow = open_filled();
    let stale = flow.begin_submit().unwrap();
    flow.settle(stale.clone(), failed());
    let _current = flow.begin_submit().unwrap();

    assert_eq!(flow.settle(stale, Ok(())), None);
    assert!(flow.in_flight());
    assert_eq!(flow.status(), SubmissionStatus::Error);
    assert!(!flow.fields().is_empty());
}

#[test]
fn success_after_modal_closed_resets_immediately() {
    let mut flow = open_filled();
    let ticket = flow.begin_submit().unwrap();
    flow.close();

    assert_eq!(flow.settle(ticket, Ok(())), None);
    assert_eq!(flow.status(), SubmissionStatus::Idle);
    assert!(flow.fields().is_empty());
}

// =============================================================
// Auto-close
// =============================================================

#[test]
fn auto_close_resets_status_and_closes() {
    let mut flow = open_filled();
    let ticket = flow.begin_submit().unwrap();
    let timer = flow.settle(ticket, Ok(())).unwrap();

    assert!(flow.fire_auto_close(timer));
    assert_eq!(flow.status(), SubmissionStatus::Idle);
    assert!(!flow.is_open());
    assert!(!flow.fire_auto_close(timer), "timer applies once");
}

#[test]
fn manual_close_cancels_auto_close_and_completes_reset() {
    let mut flow = open_filled();
    let ticket = flow.begin_submit().unwrap();
    let timer = flow.settle(ticket, Ok(())).unwrap();

    flow.close();
    assert_eq!(flow.status(), SubmissionStatus::Idle);
    assert!(!flow.fire_auto_close(timer));
}

#[test]
fn stale_timer_does_not_close_reopened_modal() {
    let mut flow = open_filled();
    let ticket = flow.begin_submit().unwrap();
    let timer = flow.settle(ticket, Ok(())).unwrap();

    flow.close();
    flow.open();
    flow.update_field(Field::Name, "Second visit");

    assert!(!flow.fire_auto_close(timer));
    assert!(flow.is_open());
    assert_eq!(flow.fields().get(Field::Name), "Second visit");
}

#[test]
fn redundant_open_keeps_pending_auto_close() {
    let mut flow = open_filled();
    let ticket = flow.begin_submit().unwrap();
    let timer = flow.settle(ticket, Ok(())).unwrap();

    flow.open();
    assert!(flow.fire_auto_close(timer));
}

// =============================================================
// Stale state across close/reopen
// =============================================================

#[test]
fn close_after_error_keeps_entered_values_for_next_open() {
    let mut flow = open_filled();
    let before = flow.fields().clone();
    let ticket = flow.begin_submit().unwrap();
    flow.settle(ticket, failed());

    flow.close();
    flow.open();
    assert_eq!(flow.fields(), &before);
    assert_eq!(flow.status(), SubmissionStatus::Error);
}

#[test]
fn close_is_idempotent() {
    let mut flow = open_filled();
    flow.close();
    flow.close();
    assert!(!flow.is_open());
    assert_eq!(flow.fields().get(Field::Name), "Jane");
}
