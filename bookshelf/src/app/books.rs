//! Pages for a single book: viewing, editing and creating one

use bookshelf_components::{
    editor::BookForm,
    services::{BookApi, RestBookApi},
    viewer::{
        state::{LoadState, ViewerState},
        BookDetail, Skeleton,
    },
    CARD_CLASSES,
};
use bookshelf_shared::{BookId, ClientConfig, Session};
use leptos::{either::EitherOf3, prelude::*};

use super::shared::{use_book_id, use_session, WithClientConfig};

#[component]
pub fn ViewBookPage() -> impl IntoView {
    let book_id = use_book_id();
    let session = use_session();
    view! {
        <WithClientConfig render=move |config: ClientConfig| {
            view! { <BookDetail book_id=book_id config=config session=session /> }
        } />
    }
}

#[component]
pub fn NewBookPage() -> impl IntoView {
    let session = use_session();
    view! {
        <WithClientConfig render=move |config: ClientConfig| {
            view! { <BookForm existing=None config=config session=session /> }
        } />
    }
}

#[component]
pub fn EditBookPage() -> impl IntoView {
    let book_id = use_book_id();
    let session = use_session();
    view! {
        <WithClientConfig render=move |config: ClientConfig| {
            view! { <EditBook book_id=book_id config=config session=session /> }
        } />
    }
}

/// Fetch the book, then hand it to the form
#[component]
fn EditBook(
    #[prop(into)] book_id: Signal<Option<BookId>>,
    config: ClientConfig,
    #[prop(into)] session: Signal<Session>,
) -> impl IntoView {
    let config = StoredValue::new(config);
    let state = RwSignal::new(ViewerState::new());

    Effect::new(move |_| {
        let Some(id) = book_id.get() else {
            return;
        };
        let Some(ticket) = state.try_update(|s| s.begin_load(id.clone())) else {
            return;
        };
        let api = config.with_value(|c| RestBookApi::new(c, session.get_untracked()));
        leptos::task::spawn_local(async move {
            let result = api.get_book(&id).await;
            state.try_update(|s| s.finish_load(ticket, result));
        });
    });
    on_cleanup(move || {
        state.try_update(|s| s.teardown());
    });

    move || match state.with(|s| s.load_state().clone()) {
        LoadState::Loading => EitherOf3::A(view! {
            <div class="flex justify-center py-12">
                <div class=CARD_CLASSES>
                    <Skeleton />
                </div>
            </div>
        }),
        LoadState::Loaded(book) => EitherOf3::B(view! {
            <BookForm existing=Some(book) config=config.get_value() session=session />
        }),
        LoadState::Failed { reason } => EitherOf3::C(view! {
            <p class="p-10 text-center text-rose-400">"Unable to load this book: "{reason}</p>
        }),
    }
}
