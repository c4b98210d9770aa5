use bookshelf_shared::FALLBACK_ERROR_MESSAGE;

use super::*;
use crate::test_util::{dune, Call, FakeApi};

const ASSETS: &str = "http://localhost:8000";

async fn loaded(api: &FakeApi) -> ViewerState {
    let mut state = ViewerState::new();
    assert!(state.load(api, BookId::new("42")).await);
    state
}

#[test]
fn starts_loading() {
    let state = ViewerState::new();
    assert!(state.is_loading());
    assert_eq!(state.book(), None);
}

#[tokio::test]
async fn loads_and_renders_the_book() {
    let api = FakeApi::new().with_book(dune());
    let state = loaded(&api).await;
    assert_eq!(api.calls(), vec![Call::Get(BookId::new("42"))]);

    let details = BookDetails::new(state.book().unwrap(), ASSETS);
    let rendered = format!(
        "{} {} {} {}",
        details.title, details.author, details.publisher, details.year_and_pages
    );
    for expected in ["Dune", "Herbert", "Chilton", "1965", "412 pages"] {
        assert!(rendered.contains(expected), "{expected} missing in {rendered}");
    }
    assert_eq!(details.image_src, "http://localhost:8000/dune.jpg");
}

#[tokio::test]
async fn failed_load_can_be_retried() {
    let api = FakeApi::new();
    let mut state = ViewerState::new();
    state.load(&api, BookId::new("42")).await;
    assert_eq!(
        state.load_state(),
        &LoadState::Failed {
            reason: "Book not found".to_string()
        }
    );

    let api = FakeApi::new().with_book(dune());
    state.load(&api, BookId::new("42")).await;
    assert_eq!(state.book(), Some(&dune()));
}

#[test]
fn stale_results_are_dropped() {
    let mut state = ViewerState::new();
    let first = state.begin_load(BookId::new("1"));
    let second = state.begin_load(BookId::new("42"));
    assert!(!state.finish_load(first, Ok(dune())));
    assert!(state.is_loading());
    assert!(state.finish_load(second, Ok(dune())));
    assert_eq!(state.book(), Some(&dune()));
}

#[test]
fn results_after_teardown_are_dropped() {
    let mut state = ViewerState::new();
    let ticket = state.begin_load(BookId::new("42"));
    state.teardown();
    assert!(!state.finish_load(ticket, Ok(dune())));
    assert!(state.is_loading());
}

#[tokio::test]
async fn delete_needs_confirmation() {
    let api = FakeApi::new().with_book(dune());
    let mut state = loaded(&api).await;
    assert_eq!(state.confirm_delete(&api).await, DeleteOutcome::Ignored);
    assert_eq!(api.calls().len(), 1);

    assert!(state.request_delete());
    assert_eq!(state.delete_state(), &DeleteState::Confirming);
    state.cancel_delete();
    assert_eq!(state.delete_state(), &DeleteState::Idle);
}

#[tokio::test]
async fn accepted_delete_navigates_to_catalog() {
    let api = FakeApi::new().with_book(dune());
    let mut state = loaded(&api).await;
    state.request_delete();
    assert_eq!(
        state.confirm_delete(&api).await,
        DeleteOutcome::Deleted { navigate_to: "/" }
    );
    assert_eq!(api.calls().last(), Some(&Call::Delete(BookId::new("42"))));
}

#[tokio::test]
async fn rejected_delete_keeps_the_book() {
    let good = FakeApi::new().with_book(dune());
    let mut state = loaded(&good).await;
    let bad = FakeApi::new().failing(ApiError::from_response(500, ""));
    state.request_delete();
    assert_eq!(state.confirm_delete(&bad).await, DeleteOutcome::Failed);

    assert_eq!(state.id(), Some(&BookId::new("42")));
    assert_eq!(state.book(), Some(&dune()));
    assert_eq!(
        state.delete_state(),
        &DeleteState::Failed {
            reason: FALLBACK_ERROR_MESSAGE.to_string()
        }
    );
    // retrying goes straight to the request
    assert_eq!(
        state.confirm_delete(&good).await,
        DeleteOutcome::Deleted { navigate_to: "/" }
    );
}

#[test]
fn no_delete_before_the_book_is_shown() {
    let mut state = ViewerState::new();
    state.begin_load(BookId::new("42"));
    assert!(!state.request_delete());
    assert_eq!(state.begin_delete(), None);
}

#[test]
fn controls_follow_the_session_only() {
    let anonymous = Session::anonymous();
    let signed_in = Session::from_credential(Some("token".to_string()));

    let mut state = ViewerState::new();
    state.begin_load(BookId::new("42"));
    assert_eq!(state.controls(&anonymous), None);
    assert_eq!(
        state.controls(&signed_in),
        Some(Controls {
            edit_href: "/editbook/42".to_string()
        })
    );

    let mut other = ViewerState::new();
    let ticket = other.begin_load(BookId::new("42"));
    other.finish_load(
        ticket,
        Ok(Book {
            title: "Something else entirely".to_string(),
            ..dune()
        }),
    );
    assert_eq!(other.controls(&anonymous), None);
    assert_eq!(other.controls(&signed_in), state.controls(&signed_in));
}

#[tokio::test]
async fn delete_is_only_offered_for_a_shown_book() {
    let mut state = ViewerState::new();
    state.begin_load(BookId::new("42"));
    assert!(!state.can_request_delete());

    let ticket = state.begin_load(BookId::new("42"));
    state.finish_load(ticket, Err(ApiError::transport("offline")));
    assert!(!state.can_request_delete());

    let mut state = loaded(&FakeApi::new().with_book(dune())).await;
    assert!(state.can_request_delete());
    assert!(state.request_delete());
    // the prompt is already open
    assert!(!state.can_request_delete());
    state.begin_delete();
    state.finish_delete(Err(ApiError::transport("offline")));
    assert!(state.can_request_delete());
}
