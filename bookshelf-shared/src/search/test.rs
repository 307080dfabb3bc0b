use super::*;

fn book(title: &str, edition: &str) -> Book {
    Book {
        title: title.to_string(),
        authors: vec!["A. Author".to_string()],
        edition_number: edition.to_string(),
    }
}

#[test]
fn search_uses_current_subject() {
    let mut state = BookSearch::default();
    state.set_subject("puzzle");
    let request = state.search();
    assert_eq!(request.subject, "puzzle");
    assert_eq!(request.seq, 1);

    state.set_subject("history");
    assert_eq!(state.search().seq, 2);
}

#[test]
fn setting_subject_keeps_results() {
    let mut state = BookSearch::default();
    let request = state.search();
    state.apply(request.seq, Ok(vec![book("Dune", "E1")]));
    state.set_subject("something else");
    assert_eq!(state.books().len(), 1);
}

#[test]
fn results_are_replaced_not_merged() {
    let mut state = BookSearch::default();
    let first = state.search();
    assert_eq!(
        state.apply(first.seq, Ok(vec![book("A", "1"), book("B", "2")])),
        SearchOutcome::Replaced(2)
    );

    let second = state.search();
    assert_eq!(
        state.apply(second.seq, Ok(vec![book("C", "3")])),
        SearchOutcome::Replaced(1)
    );
    assert_eq!(state.books(), &[book("C", "3")]);

    let third = state.search();
    assert_eq!(state.apply(third.seq, Ok(vec![])), SearchOutcome::Replaced(0));
    assert!(state.books().is_empty());
}

#[test]
fn failure_keeps_previous_results() {
    let mut state = BookSearch::default();
    let first = state.search();
    state.apply(first.seq, Ok(vec![book("A", "1")]));

    let second = state.search();
    let err = ApiError::Status {
        status: 500,
        status_text: "Internal Server Error".to_string(),
    };
    assert_eq!(
        state.apply(second.seq, Err(err.clone())),
        SearchOutcome::Failed(err)
    );
    assert_eq!(state.books(), &[book("A", "1")]);
}

#[test]
fn older_answer_cannot_overwrite_newer_search() {
    let mut state = BookSearch::default();
    let slow = state.search();
    let fast = state.search();

    assert_eq!(
        state.apply(fast.seq, Ok(vec![book("New", "2")])),
        SearchOutcome::Replaced(1)
    );
    assert_eq!(
        state.apply(slow.seq, Ok(vec![book("Old", "1")])),
        SearchOutcome::Stale
    );
    assert_eq!(state.books(), &[book("New", "2")]);
}

#[test]
fn older_answer_is_stale_even_before_newer_arrives() {
    let mut state = BookSearch::default();
    let slow = state.search();
    let _pending = state.search();
    assert_eq!(
        state.apply(slow.seq, Ok(vec![book("Old", "1")])),
        SearchOutcome::Stale
    );
    assert!(state.books().is_empty());
}

#[test]
fn edition_filter_decides_visibility() {
    let mut state = BookSearch::default();
    let request = state.search();
    state.apply(
        request.seq,
        Ok(vec![book("Numbered", "E7"), book("Unnumbered", ""), book("Blank", "  ")]),
    );

    let all: Vec<_> = state
        .visible_books(EditionFilter::ShowAll)
        .map(|b| b.title.as_str())
        .collect();
    assert_eq!(all, vec!["Numbered", "Unnumbered", "Blank"]);

    let numbered: Vec<_> = state
        .visible_books(EditionFilter::HideMissing)
        .map(|b| b.title.as_str())
        .collect();
    assert_eq!(numbered, vec!["Numbered"]);
}

#[test]
fn puzzle_search_yields_one_borrowable_card() {
    let body = r#"[{"Title":"Puzzle Book","Authors":["A. Author"],"EditionNumber":"E1"}]"#;
    let books: Vec<Book> = serde_json::from_str(body).expect("fixture is valid");

    let mut state = BookSearch::default();
    state.set_subject("puzzle");
    let request = state.search();
    state.apply(request.seq, Ok(books));

    let visible: Vec<_> = state.visible_books(EditionFilter::ShowAll).collect();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].title, "Puzzle Book");
    assert!(visible[0].has_edition());
    assert_eq!(visible[0].edition_number, "E1");
}
