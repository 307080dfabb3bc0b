use time::macros::datetime;

use super::*;

fn picked() -> OffsetDateTime {
    datetime!(2024-05-01 10:15 +2)
}

fn scheduled() -> CreateScheduleResponse {
    CreateScheduleResponse {
        message: "Pickup scheduled".to_string(),
    }
}

#[test]
fn borrow_opens_for_edition() {
    let mut modal = PickupModal::default();
    assert!(!modal.is_open());
    modal.borrow("E1");
    assert!(modal.is_open());
    assert_eq!(modal.edition(), Some("E1"));
    assert_eq!(modal.datetime(), None);
}

#[test]
fn borrowing_another_edition_drops_old_selection() {
    let mut modal = PickupModal::default();
    modal.borrow("E1");
    modal.select_datetime(Some(picked()));
    modal.borrow("E2");
    assert_eq!(modal.edition(), Some("E2"));
    assert_eq!(modal.datetime(), None);
}

#[test]
fn submit_without_datetime_produces_no_request() {
    let mut modal = PickupModal::default();
    modal.borrow("E1");
    assert_eq!(modal.prepare_submit(), Err(SubmitError::MissingDateTime));
    assert_eq!(
        SubmitError::MissingDateTime.to_string(),
        "Please select a date and time for pickup!"
    );
    // nothing about the modal changes
    assert!(modal.is_open());
    assert_eq!(modal.edition(), Some("E1"));
}

#[test]
fn cleared_datetime_is_missing_again() {
    let mut modal = PickupModal::default();
    modal.borrow("E1");
    modal.select_datetime(Some(picked()));
    modal.select_datetime(None);
    assert_eq!(modal.prepare_submit(), Err(SubmitError::MissingDateTime));
}

#[test]
fn submit_on_closed_modal_is_rejected() {
    let mut modal = PickupModal::default();
    modal.select_datetime(Some(picked()));
    assert_eq!(modal.prepare_submit(), Err(SubmitError::NotOpen));
}

#[test]
fn request_is_sent_in_utc() {
    let mut modal = PickupModal::default();
    modal.borrow("E1");
    modal.select_datetime(Some(picked()));
    let request = modal
        .prepare_submit()
        .expect("datetime and edition are set")
        .request;
    assert_eq!(request.edition_number, "E1");
    assert_eq!(request.datetime, datetime!(2024-05-01 08:15 UTC));
    assert_eq!(request.datetime.offset(), UtcOffset::UTC);

    let body = serde_json::to_value(&request).expect("request serializes");
    assert_eq!(
        body,
        serde_json::json!({
            "edition_number": "E1",
            "datetime": "2024-05-01T08:15:00Z",
        })
    );
}

#[test]
fn success_closes_and_clears() {
    let mut modal = PickupModal::default();
    modal.borrow("E1");
    modal.select_datetime(Some(picked()));
    let pending = modal.prepare_submit().expect("datetime and edition are set");
    let notice = modal.finish_submit(pending.borrow, Ok(scheduled()));
    assert_eq!(notice, Notice::Scheduled("Pickup scheduled".to_string()));
    assert_eq!(notice.message(), "Pickup scheduled");
    assert!(!modal.is_open());
    assert_eq!(modal.edition(), None);
    assert_eq!(modal.datetime(), None);
}

#[test]
fn failure_keeps_modal_and_selection() {
    let mut modal = PickupModal::default();
    modal.borrow("E1");
    modal.select_datetime(Some(picked()));
    let before = modal.clone();
    let pending = modal.prepare_submit().expect("datetime and edition are set");

    let notice = modal.finish_submit(
        pending.borrow,
        Err(ApiError::Network("connection refused".to_string())),
    );
    assert_eq!(notice, Notice::Failed);
    assert_eq!(notice.message(), SUBMIT_FAILED_MESSAGE);
    assert_eq!(modal, before);
    assert!(modal.prepare_submit().is_ok());
}

#[test]
fn cancel_clears_everything() {
    let mut modal = PickupModal::default();
    modal.borrow("E1");
    modal.select_datetime(Some(picked()));
    modal.cancel();
    assert!(!modal.is_open());
    assert_eq!(modal.edition(), None);
    assert_eq!(modal.datetime(), None);
}

#[test]
fn reply_for_earlier_borrow_leaves_new_dialog_alone() {
    let mut modal = PickupModal::default();
    modal.borrow("E1");
    modal.select_datetime(Some(picked()));
    let first = modal.prepare_submit().expect("datetime and edition are set");

    // closed and reopened for another edition while the first request is in flight
    modal.cancel();
    modal.borrow("E2");
    modal.select_datetime(Some(datetime!(2024-05-02 09:00 +2)));
    let current = modal.clone();

    let notice = modal.finish_submit(first.borrow, Ok(scheduled()));
    assert_eq!(notice, Notice::Scheduled("Pickup scheduled".to_string()));
    assert_eq!(modal, current);
    assert!(modal.is_open());
    assert_eq!(modal.edition(), Some("E2"));

    let second = modal.prepare_submit().expect("datetime and edition are set");
    assert_ne!(first.borrow, second.borrow);
    assert_eq!(second.request.edition_number, "E2");
}

#[test]
fn reborrowing_same_edition_is_a_new_borrow() {
    let mut modal = PickupModal::default();
    modal.borrow("E1");
    modal.select_datetime(Some(picked()));
    let first = modal.prepare_submit().expect("datetime and edition are set");
    modal.borrow("E1");
    modal.select_datetime(Some(picked()));

    modal.finish_submit(first.borrow, Ok(scheduled()));
    assert!(modal.is_open());
    assert_eq!(modal.datetime(), Some(picked()));
}
