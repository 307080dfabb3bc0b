use time::macros::datetime;

use super::*;
use crate::{Book, ScheduledBook};

fn schedule(id: i64) -> Schedule {
    Schedule {
        id,
        book: ScheduledBook {
            book: Book {
                title: format!("Book {id}"),
                authors: vec![],
                edition_number: format!("E{id}"),
            },
            is_available: false,
        },
        date_time: Some(datetime!(2024-05-01 10:00 UTC)),
    }
}

#[test]
fn fresh_list_is_empty_not_loading() {
    let list = ScheduleList::default();
    assert!(!list.is_loading());
    assert_eq!(list.view(), ScheduleListView::Empty);
}

#[test]
fn loading_shows_spinner_even_with_old_data() {
    let mut list = ScheduleList::default();
    list.begin_load();
    list.finish_load(Ok(vec![schedule(1)])).expect("load succeeds");
    list.begin_load();
    assert_eq!(list.view(), ScheduleListView::Loading);
}

#[test]
fn empty_answer_shows_empty_state_after_loading() {
    let mut list = ScheduleList::default();
    list.begin_load();
    assert_eq!(list.view(), ScheduleListView::Loading);
    assert_eq!(list.finish_load(Ok(vec![])), Ok(0));
    assert!(!list.is_loading());
    assert_eq!(list.view(), ScheduleListView::Empty);
}

#[test]
fn answer_is_listed() {
    let mut list = ScheduleList::default();
    list.begin_load();
    assert_eq!(list.finish_load(Ok(vec![schedule(1), schedule(2)])), Ok(2));
    match list.view() {
        ScheduleListView::Populated(all) => {
            assert_eq!(all.iter().map(|s| s.id).collect::<Vec<_>>(), vec![1, 2]);
        }
        other => panic!("expected populated list, got {other:?}"),
    }
}

#[test]
fn failure_ends_loading_and_keeps_list() {
    let mut list = ScheduleList::default();
    list.begin_load();
    list.finish_load(Ok(vec![schedule(1)])).expect("load succeeds");

    list.begin_load();
    let err = ApiError::Network("offline".to_string());
    assert_eq!(list.finish_load(Err(err.clone())), Err(err));
    assert!(!list.is_loading());
    assert_eq!(list.schedules(), &[schedule(1)]);
}
