//! Load and delete lifecycle of the book detail view

use bookshelf_shared::{
    urls::{edit_path, image_url, CATALOG_ROOT},
    ApiError, Book, BookId, Session,
};

use crate::services::BookApi;

#[cfg(test)]
mod test;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Loaded(Book),
    /// The fetch failed, the user can try again
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteState {
    Idle,
    /// The "are you sure" prompt is open
    Confirming,
    Deleting,
    /// The backend refused, the book is still shown and the user can try again
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The book is gone, leave the page
    Deleted { navigate_to: &'static str },
    Failed,
    /// There was no delete in flight to finish
    Ignored,
}

/// Identifies one load request.
///
/// Results for a ticket that is no longer current are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

/// The mutating controls, only handed out to authenticated sessions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Controls {
    pub edit_href: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewerState {
    id: Option<BookId>,
    generation: u64,
    load: LoadState,
    delete: DeleteState,
}
impl Default for ViewerState {
    fn default() -> Self {
        Self::new()
    }
}
impl ViewerState {
    pub fn new() -> Self {
        Self {
            id: None,
            generation: 0,
            load: LoadState::Loading,
            delete: DeleteState::Idle,
        }
    }

    pub fn id(&self) -> Option<&BookId> {
        self.id.as_ref()
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn delete_state(&self) -> &DeleteState {
        &self.delete
    }

    pub fn book(&self) -> Option<&Book> {
        match &self.load {
            LoadState::Loaded(book) => Some(book),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.load == LoadState::Loading
    }

    /// Start loading `id`, invalidating every earlier load
    pub fn begin_load(&mut self, id: BookId) -> LoadTicket {
        self.generation += 1;
        self.id = Some(id);
        self.load = LoadState::Loading;
        self.delete = DeleteState::Idle;
        LoadTicket {
            generation: self.generation,
        }
    }

    /// Apply the result for `ticket`. Returns false if the result was stale and got dropped.
    pub fn finish_load(&mut self, ticket: LoadTicket, result: Result<Book, ApiError>) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        self.load = match result {
            Ok(book) => LoadState::Loaded(book),
            Err(e) => {
                leptos::logging::error!("Unable to load book: {e}");
                LoadState::Failed {
                    reason: e.user_message().to_string(),
                }
            }
        };
        true
    }

    /// The view goes away; whatever is still in flight will be dropped on arrival
    pub fn teardown(&mut self) {
        self.generation += 1;
    }

    /// Open the confirmation prompt. Only possible once the book is shown.
    pub fn request_delete(&mut self) -> bool {
        if !self.can_request_delete() {
            return false;
        }
        self.delete = DeleteState::Confirming;
        true
    }

    /// Whether the delete button leads anywhere right now
    pub fn can_request_delete(&self) -> bool {
        self.book().is_some()
            && matches!(self.delete, DeleteState::Idle | DeleteState::Failed { .. })
    }

    pub fn cancel_delete(&mut self) {
        if self.delete == DeleteState::Confirming {
            self.delete = DeleteState::Idle;
        }
    }

    /// The user confirmed (or retries a failed delete). Returns the id to delete.
    pub fn begin_delete(&mut self) -> Option<BookId> {
        match self.delete {
            DeleteState::Confirming | DeleteState::Failed { .. } if self.book().is_some() => {
                self.delete = DeleteState::Deleting;
                self.id.clone()
            }
            _ => None,
        }
    }

    pub fn finish_delete(&mut self, result: Result<(), ApiError>) -> DeleteOutcome {
        if self.delete != DeleteState::Deleting {
            return DeleteOutcome::Ignored;
        }
        match result {
            Ok(()) => {
                self.delete = DeleteState::Idle;
                DeleteOutcome::Deleted {
                    navigate_to: CATALOG_ROOT,
                }
            }
            Err(e) => {
                leptos::logging::error!("Unable to delete book: {e}");
                self.delete = DeleteState::Failed {
                    reason: e.user_message().to_string(),
                };
                DeleteOutcome::Failed
            }
        }
    }

    /// Edit and delete controls. Depends on the session only, not on the book.
    pub fn controls(&self, session: &Session) -> Option<Controls> {
        if !session.is_authenticated() {
            return None;
        }
        self.id.as_ref().map(|id| Controls {
            edit_href: edit_path(id),
        })
    }

    /// Load `id` start to finish
    pub async fn load<A: BookApi>(&mut self, api: &A, id: BookId) -> bool {
        let ticket = self.begin_load(id.clone());
        let result = api.get_book(&id).await;
        self.finish_load(ticket, result)
    }

    /// Delete the shown book after the user confirmed
    pub async fn confirm_delete<A: BookApi>(&mut self, api: &A) -> DeleteOutcome {
        let Some(id) = self.begin_delete() else {
            return DeleteOutcome::Ignored;
        };
        let result = api.delete_book(&id).await;
        self.finish_delete(result)
    }
}

/// Everything the detail view prints for a book
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDetails {
    pub title: String,
    pub author: String,
    pub publisher: String,
    /// e.g. "1965 | 412 pages"
    pub year_and_pages: String,
    pub image_src: String,
}
impl BookDetails {
    pub fn new(book: &Book, asset_base: &str) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            publisher: book.publisher.clone(),
            year_and_pages: format!("{} | {} pages", book.year, book.pages),
            image_src: image_url(asset_base, &book.image),
        }
    }
}
