//! Shared Types and functions accross the app

use bookshelf_components::viewer::Skeleton;
use bookshelf_shared::{BookId, ClientConfig, Session};
use leptos::{either::Either, prelude::*};
use leptos_router::{hooks::use_params, params::Params};

use super::ClientConfigResource;

#[derive(Params, Clone, PartialEq)]
pub struct BookParams {
    pub id: Option<String>,
}

/// The book id from the current url, if there is one
pub fn use_book_id() -> Signal<Option<BookId>> {
    let params = use_params::<BookParams>();
    Signal::derive(move || {
        params
            .read()
            .as_ref()
            .ok()
            .and_then(|p| p.id.clone())
            .map(BookId::from)
    })
}

/// The session provided by the [`App`](super::App)
pub fn use_session() -> RwSignal<Session> {
    use_context::<RwSignal<Session>>().expect("App provides the session")
}

/// Render `render` once the client config has arrived from the server
#[component]
pub fn WithClientConfig<F, IV>(render: F) -> impl IntoView
where
    F: Fn(ClientConfig) -> IV + Send + Sync + 'static,
    IV: IntoView + 'static,
{
    let config = use_context::<ClientConfigResource>()
        .expect("App provides the client config")
        .0;
    let render = StoredValue::new(render);
    view! {
        <Suspense fallback=|| view! { <Skeleton height="h-[100px]" /> }>
            {move || {
                config
                    .get()
                    .map(|config_res| match config_res {
                        Ok(config) => Either::Left(render.with_value(|r| r(config))),
                        Err(e) => {
                            Either::Right(
                                view! {
                                    <p class="p-10 text-center text-rose-400">
                                        "Unable to load the site configuration: "{e.to_string()}
                                    </p>
                                },
                            )
                        }
                    })
            }}
        </Suspense>
    }
}
