use bookshelf_components::{
    session::load_session,
    toast::{ToastHost, Toaster},
};
use bookshelf_shared::{
    urls::{CATALOG_ROOT, NEW_BOOK},
    ClientConfig, Session,
};
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    path, StaticSegment,
};

mod books;
mod catalog;
pub mod shared;

use books::{EditBookPage, NewBookPage, ViewBookPage};
use catalog::CatalogPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

/// Hand the browser the parts of the server config it needs
#[server]
pub async fn get_client_config() -> Result<ClientConfig, ServerFnError> {
    let config = use_context::<std::sync::Arc<bookshelf_server::config::Config>>()
        .ok_or(ServerFnError::new("Unable to get config from context"))?;
    Ok(config.client.clone())
}

/// The client config as loaded once by the [`App`]
#[derive(Clone, Copy)]
pub struct ClientConfigResource(pub Resource<Result<ClientConfig, ServerFnError>>);

const NAVBAR_BUTTON_CLASSES: &str = "p-2 pl-4 pr-4 hover:bg-slate-500 bg-slate-600 rounded-2xl text-2xl font-bold m-2 text-center shadow-md text-slate-50 shadow-sky-600";

#[component]
fn NavBar(session: RwSignal<Session>) -> impl IntoView {
    view! {
        <nav class="flex flex-row justify-around bg-black border-b-4 border-slate-600">
            <a class=NAVBAR_BUTTON_CLASSES href=CATALOG_ROOT>
                Catalog
            </a>
            <Show when=move || session.with(|s| s.is_authenticated())>
                <a class=NAVBAR_BUTTON_CLASSES href=NEW_BOOK>
                    "Add Book"
                </a>
            </Show>
        </nav>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // the credential only exists in the browser, so the server always renders anonymously and
    // the real session is picked up after hydration
    let session = RwSignal::new(Session::anonymous());
    Effect::new(move |_| {
        session.set(load_session());
    });
    provide_context(session);

    let toaster = Toaster::new();
    provide_context(toaster);

    let client_config = Resource::new(|| (), async |_| get_client_config().await);
    provide_context(ClientConfigResource(client_config));

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/bookshelf.css" />

        // sets the document title
        <Title text="bookshelf" />

        <div class="min-h-screen w-screen flex flex-col bg-slate-900 text-white">
            <Router>
                <NavBar session=session />
                <main class="grow w-full">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=CatalogPage />
                        <Route path=path!("books/:id") view=ViewBookPage />
                        <Route path=path!("editbook/:id") view=EditBookPage />
                        <Route path=path!("newbook") view=NewBookPage />
                    </Routes>
                </main>
            </Router>
            <ToastHost toaster=toaster />
        </div>
    }
}
