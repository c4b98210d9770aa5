//! The landing page: every book in the catalog

use bookshelf_components::{
    services::{BookApi, RestBookApi},
    viewer::Skeleton,
    CARD_CLASSES,
};
use bookshelf_shared::{
    urls::{detail_path, image_url, NEW_BOOK},
    ApiError, Book, ClientConfig, Session,
};
use leptos::{either::EitherOf4, prelude::*};

use super::shared::{use_session, WithClientConfig};

#[component]
pub fn CatalogPage() -> impl IntoView {
    let session = use_session();
    view! {
        <WithClientConfig render=move |config: ClientConfig| {
            view! { <BookList config=config session=session /> }
        } />
    }
}

#[component]
fn BookCard(book: Book, asset_base: String) -> impl IntoView {
    let href = detail_path(&book.id);
    let src = image_url(&asset_base, &book.image);
    view! {
        <li>
            <a href=href class="flex flex-row items-center gap-x-4 rounded-lg p-2 hover:bg-slate-700">
                <img src=src alt=book.title.clone() class="h-16 w-12 rounded-sm object-cover" />
                <div>
                    <p class="text-lg font-semibold">{book.title}</p>
                    <p class="text-slate-400">{book.author}</p>
                </div>
            </a>
        </li>
    }
}

#[component]
fn BookList(config: ClientConfig, #[prop(into)] session: Signal<Session>) -> impl IntoView {
    let asset_base = StoredValue::new(config.asset_base_url.clone());
    let config = StoredValue::new(config);

    // None while loading
    let books = RwSignal::new(None::<Result<Vec<Book>, ApiError>>);
    Effect::new(move |_| {
        let api = config.with_value(|c| RestBookApi::new(c, session.get_untracked()));
        leptos::task::spawn_local(async move {
            let result = api.list_books().await;
            if let Err(e) = &result {
                leptos::logging::error!("Unable to list books: {e}");
            }
            // the page may be gone by now
            books.try_set(Some(result));
        });
    });

    view! {
        <div class="flex justify-center py-12">
            <div class=CARD_CLASSES>
                <div class="mb-4 flex flex-row items-center justify-between">
                    <h1 class="text-3xl font-semibold">Catalog</h1>
                    <Show when=move || session.with(|s| s.is_authenticated())>
                        <a href=NEW_BOOK class="text-sky-300 hover:underline">
                            "Add book"
                        </a>
                    </Show>
                </div>
                {move || match books.get() {
                    None => EitherOf4::A(view! { <Skeleton /> }),
                    Some(Ok(list)) if list.is_empty() => {
                        EitherOf4::B(view! { <p class="text-slate-400">"No books yet."</p> })
                    }
                    Some(Ok(list)) => {
                        EitherOf4::C(
                            view! {
                                <ul class="flex flex-col gap-y-2">
                                    <For
                                        each=move || list.clone()
                                        key=|book| book.id.clone()
                                        let:book
                                    >
                                        <BookCard book=book asset_base=asset_base.get_value() />
                                    </For>
                                </ul>
                            },
                        )
                    }
                    Some(Err(e)) => {
                        EitherOf4::D(
                            view! {
                                <p class="text-rose-400">
                                    "Unable to load the catalog: "{e.user_message().to_string()}
                                </p>
                            },
                        )
                    }
                }}
            </div>
        </div>
    }
}
