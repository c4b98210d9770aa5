//! The form for adding a new book or editing an existing one

use bookshelf_shared::{Book, ClientConfig, Notification, RawBookForm, Session, IMAGE_ACCEPT};
use human_bytes::human_bytes;
use leptos::{html, prelude::*};
use send_wrapper::SendWrapper;
use web_sys::wasm_bindgen::JsCast;
use web_sys::{Event, File, FormData, HtmlFormElement, HtmlInputElement, SubmitEvent, Url};

pub mod state;

use crate::{
    buttons::SubmitButton,
    services::RestBookApi,
    toast::Toaster,
    CARD_CLASSES, INPUT_CLASSES,
};
use state::{EditorState, Submission};

const LABEL_CLASSES: &str = "mb-1 block text-sm font-semibold text-slate-300";

/// Read the current values of all text inputs
fn read_form(form: &HtmlFormElement) -> RawBookForm {
    let data = FormData::new_with_form(form).ok();
    let field = |name: &str| {
        data.as_ref()
            .and_then(|d| d.get(name).as_string())
            .unwrap_or_default()
    };
    RawBookForm {
        title: field("title"),
        author: field("author"),
        publisher: field("publisher"),
        year: field("year"),
        pages: field("pages"),
    }
}

/// Give an object url for a picked file back to the browser
fn release_locator(locator: &str) {
    if !locator.starts_with("blob:") {
        return;
    }
    if let Err(e) = Url::revoke_object_url(locator) {
        leptos::logging::warn!("Unable to release image preview {locator}: {e:?}");
    }
}

/// Form for a book.
///
/// Without `existing` this creates a new book (and requires an image), with it this edits the
/// given book (whose image cannot change).
#[component]
pub fn BookForm(
    existing: Option<Book>,
    config: ClientConfig,
    #[prop(into)] session: Signal<Session>,
) -> impl IntoView {
    let toaster = use_context::<Toaster>().expect("App provides a Toaster");

    let is_edit = existing.is_some();
    let defaults = existing
        .as_ref()
        .map(|b| RawBookForm::from(&b.fields()))
        .unwrap_or_default();
    let state = RwSignal::new(EditorState::<SendWrapper<File>>::new(
        existing.as_ref(),
        &config.asset_base_url,
    ));
    let form_ref = NodeRef::<html::Form>::new();
    on_cleanup(move || {
        if let Some(locator) = state.try_update(|s| s.teardown()).flatten() {
            release_locator(&locator);
        }
    });

    let submit_action = Action::new_local(move |submission: &Submission<SendWrapper<File>>| {
        let submission = submission.clone();
        let api = RestBookApi::new(&config, session.get_untracked());
        async move {
            let result = submission.send(&api).await;
            // the form may have been unmounted in the meantime
            let Some(outcome) = state.try_update(|s| s.finish(&submission, result)) else {
                return;
            };
            if outcome.reset_form {
                if let Some(form) = form_ref.get_untracked() {
                    form.reset();
                }
            }
            if let Some(locator) = outcome.released_preview {
                release_locator(&locator);
            }
            toaster.push(outcome.notification);
        }
    });
    let submit_pending = submit_action.pending();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if submit_pending.get_untracked() {
            return;
        }
        let Some(form) = form_ref.get() else {
            return;
        };
        let raw = read_form(&form);
        match state.with_untracked(|s| s.prepare(&raw)) {
            Ok(submission) => {
                submit_action.dispatch_local(submission);
            }
            Err(e) => {
                toaster.push(Notification::from(&e));
            }
        }
    };

    let on_pick_image = move |ev: Event| {
        ev.stop_propagation();
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        let locator = match Url::create_object_url_with_blob(&file) {
            Ok(x) => x,
            Err(e) => {
                leptos::logging::warn!("Unable to preview the selected image: {e:?}");
                return;
            }
        };
        match state.try_update(|s| s.select_image(SendWrapper::new(file), locator.clone())) {
            Some(Ok(Some(previous))) => release_locator(&previous),
            Some(Err(e)) => {
                release_locator(&locator);
                leptos::logging::warn!("{e}");
            }
            _ => {}
        }
    };

    view! {
        <div class="flex min-h-full items-center justify-center py-12">
            <div class="flex w-full max-w-lg flex-col items-center gap-y-8">
                <h1 class="text-4xl font-semibold text-center">
                    {if is_edit { "Edit Book" } else { "Add New Book Here" }}
                </h1>
                <div class=CARD_CLASSES>
                    <form node_ref=form_ref on:submit=on_submit class="flex flex-col gap-y-4">
                        <div>
                            <label class=LABEL_CLASSES for="book-title">Title</label>
                            <input id="book-title" name="title" required value=defaults.title class=INPUT_CLASSES />
                        </div>
                        <div>
                            <label class=LABEL_CLASSES for="book-author">Author</label>
                            <input id="book-author" name="author" required value=defaults.author class=INPUT_CLASSES />
                        </div>
                        <div>
                            <label class=LABEL_CLASSES for="book-publisher">Publisher</label>
                            <input id="book-publisher" name="publisher" required value=defaults.publisher class=INPUT_CLASSES />
                        </div>
                        <div class="flex flex-row gap-x-4">
                            <div>
                                <label class=LABEL_CLASSES for="book-year">Year</label>
                                <input id="book-year" name="year" type="number" required value=defaults.year class=INPUT_CLASSES />
                            </div>
                            <div>
                                <label class=LABEL_CLASSES for="book-pages">Pages</label>
                                <input id="book-pages" name="pages" type="number" min="1" required value=defaults.pages class=INPUT_CLASSES />
                            </div>
                        </div>
                        {move || {
                            state
                                .with(|s| {
                                    s.preview()
                                        .map(|src| {
                                            view! {
                                                <img class="w-64 self-center rounded-lg" src=src.to_string() alt="Selected Image" />
                                            }
                                        })
                                })
                        }}
                        {move || {
                            state
                                .with(|s| s.image().map(|f| format!("Size: {}", human_bytes(f.size()))))
                                .map(|size| view! { <p class="text-sm text-slate-400 self-center">{size}</p> })
                        }}
                        // the image of an existing book is fixed
                        {(!is_edit)
                            .then(|| {
                                view! {
                                    <div>
                                        <label class=LABEL_CLASSES for="book-image">Image</label>
                                        <input
                                            id="book-image"
                                            name="image"
                                            type="file"
                                            accept=IMAGE_ACCEPT
                                            class=INPUT_CLASSES
                                            on:change=on_pick_image
                                        />
                                    </div>
                                }
                            })}
                        <SubmitButton
                            busy_reader=submit_pending
                            label=if is_edit { "Edit Book" } else { "Create Book" }
                            busy_label=if is_edit { "Editing" } else { "Submitting" }
                        />
                    </form>
                </div>
            </div>
        </div>
    }
}
