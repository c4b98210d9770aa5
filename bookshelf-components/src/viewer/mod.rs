//! The detail view of a single book, including deleting it

use bookshelf_shared::{BookId, ClientConfig, Session};
use leptos::{either::EitherOf3, ev::keydown, prelude::*};
use leptos_router::hooks::use_navigate;
use leptos_use::{use_document, use_event_listener};
use web_sys::MouseEvent;

pub mod state;

use crate::{
    buttons::Button,
    icons::{CloseIcon, InfoIcon},
    services::{BookApi, RestBookApi},
    CARD_CLASSES, DANGER_BUTTON_CLASSES, DEFAULT_BUTTON_CLASSES,
};
use state::{BookDetails, DeleteOutcome, DeleteState, LoadState, ViewerState};

/// Fixed-size placeholder while the book is loading
#[component]
pub fn Skeleton(#[prop(default = "h-[300px]")] height: &'static str) -> impl IntoView {
    view! { <div class=format!("{height} my-6 w-full animate-pulse rounded-lg bg-slate-600")></div> }
}

#[component]
fn DeleteControl(
    state: RwSignal<ViewerState>,
    on_confirm: impl Fn(MouseEvent) + Clone + Send + Sync + 'static,
) -> impl IntoView {
    let deleting = Signal::derive(move || {
        state.with(|s| s.delete_state() == &DeleteState::Deleting)
    });
    let confirming = move || state.with(|s| s.delete_state() == &DeleteState::Confirming);
    // nothing to delete while the book is loading or failed to load
    let unavailable = Signal::derive(move || {
        state.with(|s| !s.can_request_delete() && s.delete_state() != &DeleteState::Deleting)
    });
    let (not_busy, _) = signal(false);
    let retry = on_confirm.clone();

    view! {
        <div class="relative">
            <Button
                busy_reader=deleting
                disabled=unavailable
                on_click=move |_| {
                    state.update(|s| {
                        s.request_delete();
                    })
                }
                label="Delete"
                busy_label="Deleting"
                class=DANGER_BUTTON_CLASSES
            />
            <Show when=confirming>
                <div
                    role="dialog"
                    class="absolute left-0 top-14 z-10 w-72 rounded-lg border border-slate-600 bg-slate-800 p-4 shadow-lg"
                >
                    <div class="flex flex-row justify-between">
                        <p class="font-bold">"Confirmation!"</p>
                        <button
                            aria-label="Close"
                            on:click=move |_| state.update(|s| s.cancel_delete())
                        >
                            <CloseIcon inner_class="h-5 w-5 text-slate-400 hover:text-slate-50" />
                        </button>
                    </div>
                    <p class="my-2">"Are you sure you want to delete this book?"</p>
                    <Button
                        busy_reader=not_busy
                        on_click=on_confirm.clone()
                        label="Delete"
                        class=DANGER_BUTTON_CLASSES
                    />
                </div>
            </Show>
            {move || match state.with(|s| s.delete_state().clone()) {
                DeleteState::Failed { reason } => {
                    Some(
                        view! {
                            <div class="mt-2 rounded-lg bg-rose-900/60 p-2">
                                <p>"Unable to delete this book: "{reason}</p>
                                <Button
                                    busy_reader=not_busy
                                    on_click=retry.clone()
                                    label="Try again"
                                />
                            </div>
                        },
                    )
                }
                _ => None,
            }}
        </div>
    }
}

/// Shows the book `book_id`.
///
/// Delete and edit are only offered to authenticated sessions.
#[component]
pub fn BookDetail(
    #[prop(into)] book_id: Signal<Option<BookId>>,
    config: ClientConfig,
    #[prop(into)] session: Signal<Session>,
) -> impl IntoView {
    let asset_base = config.asset_base_url.clone();
    let config = StoredValue::new(config);
    let make_api = move || config.with_value(|c| RestBookApi::new(c, session.get_untracked()));

    let state = RwSignal::new(ViewerState::new());
    // changes only with the id or the session, not with every load or delete step
    let controls = Memo::new(move |_| state.with(|s| s.controls(&session.get())));
    // bumped by "Try again"
    let reload = RwSignal::new(0_u32);

    Effect::new(move |_| {
        reload.track();
        let Some(id) = book_id.get() else {
            return;
        };
        let Some(ticket) = state.try_update(|s| s.begin_load(id.clone())) else {
            return;
        };
        let api = make_api();
        leptos::task::spawn_local(async move {
            let result = api.get_book(&id).await;
            state.try_update(|s| s.finish_load(ticket, result));
        });
    });
    on_cleanup(move || {
        state.try_update(|s| s.teardown());
    });

    // set once a delete went through
    let leave_to = RwSignal::new(None::<&'static str>);
    let navigate = use_navigate();
    Effect::new(move |_| {
        if let Some(path) = leave_to.get() {
            navigate(path, Default::default());
        }
    });
    let on_confirm_delete = move |_: MouseEvent| {
        let Some(Some(id)) = state.try_update(|s| s.begin_delete()) else {
            return;
        };
        let api = make_api();
        leptos::task::spawn_local(async move {
            let result = api.delete_book(&id).await;
            if let Some(DeleteOutcome::Deleted { navigate_to }) =
                state.try_update(|s| s.finish_delete(result))
            {
                leave_to.set(Some(navigate_to));
            }
        });
    };

    // <esc> closes the confirmation prompt
    let _cleanup = use_event_listener(use_document(), keydown, move |evt| {
        if evt.key() == "Escape" {
            state.update(|s| s.cancel_delete());
        }
    });

    view! {
        <div class="flex min-h-full items-center justify-center py-12">
            <div class=CARD_CLASSES>
                {move || match state.with(|s| s.load_state().clone()) {
                    LoadState::Loading => EitherOf3::A(view! { <Skeleton /> }),
                    LoadState::Loaded(book) => {
                        let details = BookDetails::new(&book, &asset_base);
                        EitherOf3::B(
                            view! {
                                <div class="my-6 flex flex-row">
                                    <div class="w-[300px] shrink-0">
                                        <img
                                            src=details.image_src
                                            alt=details.title.clone()
                                            class="rounded-lg shadow-md"
                                        />
                                    </div>
                                    <div class="ml-8">
                                        <h1 class="text-3xl font-semibold">{details.title}</h1>
                                        <p class="text-xl font-semibold text-slate-400">
                                            {details.author}
                                        </p>
                                        <p class="text-xl font-semibold text-slate-400">
                                            {details.publisher}
                                        </p>
                                        <p class="mb-4 text-xl font-semibold text-slate-400">
                                            {details.year_and_pages}
                                        </p>
                                    </div>
                                </div>
                            },
                        )
                    }
                    LoadState::Failed { reason } => {
                        let (not_busy, _) = signal(false);
                        EitherOf3::C(
                            view! {
                                <div class="my-6 flex flex-col items-center gap-y-4">
                                    <InfoIcon inner_class="h-12 w-12 text-rose-500" />
                                    <p>"Unable to load this book: "{reason}</p>
                                    <Button
                                        busy_reader=not_busy
                                        on_click=move |_| reload.update(|n| *n += 1)
                                        label="Try again"
                                    />
                                </div>
                            },
                        )
                    }
                }}
                {move || {
                    controls
                        .get()
                        .map(|controls| {
                            view! {
                                <div class="flex flex-row items-start gap-x-4">
                                    <DeleteControl state=state on_confirm=on_confirm_delete.clone() />
                                    <a href=controls.edit_href class=DEFAULT_BUTTON_CLASSES>
                                        "Edit"
                                    </a>
                                </div>
                            }
                        })
                }}
            </div>
        </div>
    }
}
