use super::*;

#[test]
fn no_banner_while_idle() {
    assert_eq!(banner_for(SubmissionStatus::Idle, false), None);
}

#[test]
fn banners_follow_settled_status() {
    assert_eq!(banner_for(SubmissionStatus::Success, false), Some(Banner::Success));
    assert_eq!(banner_for(SubmissionStatus::Error, false), Some(Banner::Error));
}

#[test]
fn banners_hidden_while_sending() {
    assert_eq!(banner_for(SubmissionStatus::Error, true), None);
    assert_eq!(banner_for(SubmissionStatus::Success, true), None);
}

#[test]
fn banner_copy_and_classes() {
    assert_eq!(Banner::Success.message(), SUCCESS_MESSAGE);
    assert_eq!(Banner::Error.message(), ERROR_MESSAGE);
    assert!(Banner::Success.class().ends_with("--success"));
    assert!(Banner::Error.class().ends_with("--error"));
}

#[test]
fn submit_button_reflects_in_flight() {
    assert_eq!(submit_label(false), "Submit Request");
    assert_eq!(submit_label(true), "Sending...");
    assert!(!submit_class(false).contains("--busy"));
    assert!(submit_class(true).contains("--busy"));
}
