use bookshelf_shared::{ApiError, FALLBACK_ERROR_MESSAGE};

use super::*;
use crate::test_util::{dune, Call, FakeApi};

const ASSETS: &str = "http://localhost:8000";

fn filled_form() -> RawBookForm {
    RawBookForm {
        title: "Solaris".to_string(),
        author: "Lem".to_string(),
        publisher: "MON".to_string(),
        year: "1961".to_string(),
        pages: "204".to_string(),
    }
}

fn create_state() -> EditorState<String> {
    EditorState::new(None, ASSETS)
}

#[test]
fn without_book_starts_in_create_mode() {
    let state = create_state();
    assert_eq!(state.mode(), &EditorMode::Create);
    assert_eq!(state.preview(), None);
}

#[test]
fn existing_book_preview_points_at_assets() {
    let state = EditorState::<String>::new(Some(&dune()), ASSETS);
    assert_eq!(state.mode(), &EditorMode::Edit(BookId::new("42")));
    assert_eq!(state.preview(), Some("http://localhost:8000/dune.jpg"));
}

#[test]
fn picking_an_image_updates_preview_immediately() {
    let api = FakeApi::new();
    let mut state = create_state();
    assert_eq!(
        state.select_image("cover.png".to_string(), "blob:1".to_string()),
        Ok(None)
    );
    assert_eq!(state.preview(), Some("blob:1"));
    // the replaced locator is handed back for releasing
    assert_eq!(
        state.select_image("other.png".to_string(), "blob:2".to_string()),
        Ok(Some("blob:1".to_string()))
    );
    assert_eq!(state.image().map(String::as_str), Some("other.png"));
    assert!(api.calls().is_empty());
}

#[test]
fn image_of_existing_book_cannot_change() {
    let mut state = EditorState::<String>::new(Some(&dune()), ASSETS);
    assert_eq!(
        state.select_image("cover.png".to_string(), "blob:1".to_string()),
        Err(EditorError::ImageImmutable)
    );
    assert_eq!(state.preview(), Some("http://localhost:8000/dune.jpg"));
}

#[tokio::test]
async fn create_without_image_never_calls_the_api() {
    let api = FakeApi::new();
    let mut state = create_state();
    let outcome = state.submit(&api, &filled_form()).await;
    assert!(api.calls().is_empty());
    assert!(outcome.notification.is_error());
    assert_eq!(outcome.notification.description, "Please select image");
    assert!(!outcome.reset_form);
}

#[tokio::test]
async fn invalid_fields_never_call_the_api() {
    let api = FakeApi::new();
    let mut state = create_state();
    state
        .select_image("cover.png".to_string(), "blob:1".to_string())
        .unwrap();
    let mut form = filled_form();
    form.year = "soon".to_string();
    let outcome = state.submit(&api, &form).await;
    assert!(api.calls().is_empty());
    assert!(outcome.notification.is_error());
    assert_eq!(state.preview(), Some("blob:1"));
}

#[tokio::test]
async fn successful_create_resets_everything() {
    let api = FakeApi::new();
    let mut state = create_state();
    state
        .select_image("cover.png".to_string(), "blob:1".to_string())
        .unwrap();
    let outcome = state.submit(&api, &filled_form()).await;

    assert_eq!(
        api.calls(),
        vec![Call::Create(
            filled_form().parse().unwrap(),
            "cover.png".to_string()
        )]
    );
    assert_eq!(outcome.notification, Notification::success(CREATED_MESSAGE));
    assert!(outcome.reset_form);
    assert_eq!(outcome.released_preview.as_deref(), Some("blob:1"));
    assert_eq!(state.preview(), None);
    assert_eq!(state.image(), None);
}

#[tokio::test]
async fn successful_edit_keeps_the_form() {
    let api = FakeApi::new();
    let mut state = EditorState::<String>::new(Some(&dune()), ASSETS);
    let form = RawBookForm::from(&dune().fields());
    let outcome = state.submit(&api, &form).await;

    assert_eq!(
        api.calls(),
        vec![Call::Update(BookId::new("42"), dune().fields())]
    );
    assert_eq!(outcome.notification, Notification::success(EDITED_MESSAGE));
    assert!(!outcome.reset_form);
    assert_eq!(outcome.released_preview, None);
    assert_eq!(state.preview(), Some("http://localhost:8000/dune.jpg"));
}

#[tokio::test]
async fn failed_create_shows_server_message_and_keeps_state() {
    let api = FakeApi::new().failing(ApiError::from_response(
        422,
        r#"{"message":"Year is out of range"}"#,
    ));
    let mut state = create_state();
    state
        .select_image("cover.png".to_string(), "blob:1".to_string())
        .unwrap();
    let outcome = state.submit(&api, &filled_form()).await;

    assert_eq!(api.calls().len(), 1);
    assert_eq!(outcome.notification.description, "Year is out of range");
    assert!(outcome.notification.is_error());
    assert!(!outcome.reset_form);
    assert_eq!(state.preview(), Some("blob:1"));
    assert_eq!(state.image().map(String::as_str), Some("cover.png"));
}

#[tokio::test]
async fn failed_edit_falls_back_to_generic_message() {
    let api = FakeApi::new().failing(ApiError::transport("connection refused"));
    let mut state = EditorState::<String>::new(Some(&dune()), ASSETS);
    let outcome = state
        .submit(&api, &RawBookForm::from(&dune().fields()))
        .await;

    assert_eq!(outcome.notification.description, FALLBACK_ERROR_MESSAGE);
    assert!(!outcome.reset_form);
}

#[test]
fn edit_submission_carries_no_image() {
    let state = EditorState::<String>::new(Some(&dune()), ASSETS);
    match state.prepare(&RawBookForm::from(&dune().fields())) {
        Ok(Submission::Update { id, fields }) => {
            assert_eq!(id, BookId::new("42"));
            assert_eq!(fields, dune().fields());
        }
        other => panic!("expected an update, got {other:?}"),
    }
}

#[test]
fn edit_without_stored_image_is_refused() {
    let book = Book {
        image: String::new(),
        ..dune()
    };
    let state = EditorState::<String>::new(Some(&book), ASSETS);
    assert_eq!(state.preview(), None);
    let form = RawBookForm::from(&book.fields());
    assert!(matches!(state.prepare(&form), Err(FormError::MissingImage)));
}

#[test]
fn teardown_hands_back_picked_previews_only() {
    let mut state = create_state();
    assert_eq!(state.teardown(), None);
    state
        .select_image("cover.png".to_string(), "blob:1".to_string())
        .unwrap();
    assert_eq!(state.teardown(), Some("blob:1".to_string()));
    assert_eq!(state.preview(), None);

    // asset urls of an existing book are not ours to release
    let mut existing = EditorState::<String>::new(Some(&dune()), ASSETS);
    assert_eq!(existing.teardown(), None);
    assert_eq!(existing.preview(), Some("http://localhost:8000/dune.jpg"));
}
