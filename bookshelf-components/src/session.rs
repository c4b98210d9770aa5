//! Reading the stored credential from the browser

use bookshelf_shared::{session::CREDENTIAL_STORAGE_KEY, Session};
use leptos::prelude::window;

/// Build the [`Session`] from local storage.
///
/// Only call this in the browser (e.g. from an `Effect`), there is no storage during SSR.
pub fn load_session() -> Session {
    let token = window()
        .local_storage()
        .ok()
        .flatten()
        .and_then(|storage| storage.get_item(CREDENTIAL_STORAGE_KEY).ok().flatten());
    Session::from_credential(token)
}
