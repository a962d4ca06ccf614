//! End-to-end flows through the worker, the handler and the view model.

use booklist::app::{FormField, LoadStatus};
use booklist::domain::filter::PagesBucket;
use booklist::worker::{BooklistWorker, WorkerMessage, WorkerResponse};
use booklist::{handle_event, initialize, Action, AppState, Book, Config, Event, PageSize};
use pretty_assertions::assert_eq;
use std::path::Path;

fn write_catalog(dir: &Path, books: &[Book]) -> String {
    let path = dir.join("books.json");
    std::fs::write(&path, serde_json::to_string_pretty(books).unwrap()).unwrap();
    path.to_string_lossy().into_owned()
}

/// Runs the permission → worker → response round trip the plugin performs.
fn load_through_worker(catalog_path: &str) -> AppState {
    let config = Config {
        catalog_path: catalog_path.to_string(),
        ..Config::default()
    };
    let mut state = initialize(&config);
    let mut worker = BooklistWorker::default();

    let (_, actions) = handle_event(&mut state, &Event::PermissionsGranted).unwrap();
    for action in actions {
        if let Action::PostToWorker(message) = action {
            let wire = serde_json::to_string(&message).unwrap();
            let request: WorkerMessage = serde_json::from_str(&wire).unwrap();

            let response = worker.handle_message(request);
            let wire = serde_json::to_string(&response).unwrap();
            let response: WorkerResponse = serde_json::from_str(&wire).unwrap();

            handle_event(&mut state, &Event::WorkerResponse(response)).unwrap();
        }
    }
    state
}

fn press(state: &mut AppState, events: &[Event]) {
    for event in events {
        handle_event(state, event).unwrap();
    }
}

#[test]
fn pages_bucket_keeps_only_short_books() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_catalog(
        dir.path(),
        &[
            Book::new("Short", "A", "Peru", "Spanish", 1900, 50),
            Book::new("Medium", "B", "Peru", "Spanish", 1900, 150),
            Book::new("Long", "C", "Peru", "Spanish", 1900, 250),
        ],
    );

    let mut state = load_through_worker(&path);
    assert_eq!(state.load_status, LoadStatus::Loaded);
    assert_eq!(state.filtered_books.len(), 3);

    press(&mut state, &[Event::CyclePagesBucket]);
    assert_eq!(state.view.criteria.pages, Some(PagesBucket::UpTo100));

    let vm = state.compute_viewmodel(30, 120);
    let titles: Vec<&str> = vm.rows.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Short"]);
    assert_eq!(vm.header.title, " List of Books (1) ");
}

#[test]
fn missing_catalog_renders_empty_state() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nowhere.json");

    let state = load_through_worker(&missing.to_string_lossy());

    assert_eq!(state.load_status, LoadStatus::Failed);
    assert!(state.books.is_empty());
    let vm = state.compute_viewmodel(30, 120);
    assert_eq!(
        vm.empty_state.map(|e| e.message),
        Some("No books match the current filters.".to_string())
    );
}

#[test]
fn malformed_catalog_is_a_failed_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("books.json");
    std::fs::write(&path, r#"{"title": "not an array"}"#).unwrap();

    let state = load_through_worker(&path.to_string_lossy());
    assert_eq!(state.load_status, LoadStatus::Failed);
}

#[test]
fn search_then_filter_then_paginate() {
    let dir = tempfile::tempdir().unwrap();
    let mut books: Vec<Book> = (0..45)
        .map(|i| Book::new(format!("Saga volume {i}"), "Anon", "Iceland", "Icelandic", 1650, 300))
        .collect();
    books.push(Book::new("The Odyssey", "Homer", "Greece", "Greek", -700, 374));
    let path = write_catalog(dir.path(), &books);

    let mut state = load_through_worker(&path);
    assert_eq!(state.total_pages(), 3);

    press(&mut state, &[Event::SelectPage(3)]);
    assert_eq!(state.visible_books().len(), 6);

    press(&mut state, &[Event::EditField(FormField::Search)]);
    for c in "saga".chars() {
        press(&mut state, &[Event::Char(c)]);
    }
    assert_eq!(state.filtered_books.len(), 46, "typing alone must not filter");
    assert_eq!(state.view.current_page, 3);

    press(&mut state, &[Event::Confirm]);
    assert_eq!(state.filtered_books.len(), 45);
    assert_eq!(state.view.current_page, 1);

    press(&mut state, &[Event::LastPage]);
    let vm = state.compute_viewmodel(40, 120);
    assert_eq!(vm.rows.len(), 5);
    assert_eq!(vm.rows[0].title, "Saga volume 40");
    assert_eq!(vm.rows[0].highlight_ranges, vec![(0, 4)]);
    assert_eq!(vm.pager.buttons, vec![1, 2, 3]);
    assert_eq!(vm.pager.current_page, 3);

    press(&mut state, &[Event::CyclePageSize]);
    assert_eq!(state.view.page_size, PageSize::Fifty);
    assert_eq!(state.view.current_page, 1);
    assert_eq!(state.total_pages(), 1);
}

#[test]
fn year_and_language_filters_combine() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_catalog(
        dir.path(),
        &[
            Book::new("Don Quixote", "Miguel de Cervantes", "Spain", "Spanish", 1610, 1056),
            Book::new("Gulliver's Travels", "Jonathan Swift", "Ireland", "English", 1726, 178),
            Book::new("Paradise Lost", "John Milton", "England", "English", 1667, 453),
        ],
    );

    let mut state = load_through_worker(&path);
    press(&mut state, &[Event::CycleYearBucket, Event::CycleYearBucket]);
    assert_eq!(state.filtered_books.len(), 2);

    press(&mut state, &[Event::EditField(FormField::Language)]);
    for c in "ENG".chars() {
        press(&mut state, &[Event::Char(c)]);
    }
    press(&mut state, &[Event::Cancel]);

    let titles: Vec<&str> = state.filtered_books.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, vec!["Paradise Lost"]);

    press(&mut state, &[Event::ClearFilters]);
    assert_eq!(state.filtered_books.len(), 3);
}
