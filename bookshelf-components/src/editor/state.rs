//! Local state of the book form and its submit lifecycle
//!
//! Kept free of any DOM access, the [`super::BookForm`] component drives it.

use bookshelf_shared::{
    urls::image_url, ApiError, Book, BookFields, BookId, FormError, Notification, RawBookForm,
};

use crate::services::BookApi;

#[cfg(test)]
mod test;

pub const CREATED_MESSAGE: &str = "Book created successfully";
pub const EDITED_MESSAGE: &str = "Book edited successfully";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMode {
    /// A new book, the image still has to be picked
    Create,
    /// An existing book, its image can no longer change
    Edit(BookId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    /// Tried to pick a new image for a book that already has one
    ImageImmutable,
}
impl core::fmt::Display for EditorError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Self::ImageImmutable => {
                write!(f, "The image of an existing book cannot be changed.")
            }
        }
    }
}
impl std::error::Error for EditorError {}

/// A validated submit, ready to be sent
#[derive(Debug, Clone)]
pub enum Submission<I> {
    Create { fields: BookFields, image: I },
    Update { id: BookId, fields: BookFields },
}
impl<I> Submission<I> {
    pub async fn send<A>(&self, api: &A) -> Result<Book, ApiError>
    where
        A: BookApi<Image = I>,
    {
        match self {
            Self::Create { fields, image } => api.create_book(fields, image).await,
            Self::Update { id, fields } => api.update_book(id, fields).await,
        }
    }
}

/// What the component has to do after a submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub notification: Notification,
    /// clear every input of the form
    pub reset_form: bool,
    /// a preview locator that is no longer shown and can be released
    pub released_preview: Option<String>,
}
impl SubmitOutcome {
    fn notify(notification: Notification) -> Self {
        Self {
            notification,
            reset_form: false,
            released_preview: None,
        }
    }
}

/// Preview and image of the book form.
///
/// `I` is the platform type of a picked image file.
#[derive(Debug, Clone)]
pub struct EditorState<I> {
    mode: EditorMode,
    /// displayable locator for the image (object url or asset url)
    preview: Option<String>,
    /// the picked file, only ever set in create mode
    image: Option<I>,
}
impl<I> EditorState<I> {
    /// Seed the editor from an existing book (edit mode) or from nothing (create mode)
    pub fn new(existing: Option<&Book>, asset_base: &str) -> Self {
        match existing {
            Some(book) => Self {
                mode: EditorMode::Edit(book.id.clone()),
                preview: (!book.image.is_empty()).then(|| image_url(asset_base, &book.image)),
                image: None,
            },
            None => Self {
                mode: EditorMode::Create,
                preview: None,
                image: None,
            },
        }
    }

    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, EditorMode::Edit(_))
    }

    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    pub fn image(&self) -> Option<&I> {
        self.image.as_ref()
    }

    /// Hold a freshly picked image and its locator.
    ///
    /// Returns the locator that was shown before, so the caller can release it.
    pub fn select_image(&mut self, image: I, locator: String) -> Result<Option<String>, EditorError> {
        if self.is_edit() {
            return Err(EditorError::ImageImmutable);
        }
        self.image = Some(image);
        Ok(self.preview.replace(locator))
    }

    /// The form goes away. Returns the preview locator if it belongs to a picked file, so the
    /// caller can release it.
    pub fn teardown(&mut self) -> Option<String> {
        self.image.take()?;
        self.preview.take()
    }

    /// Apply the result of a sent [`Submission`]
    pub fn finish(&mut self, submission: &Submission<I>, result: Result<Book, ApiError>) -> SubmitOutcome {
        match (submission, result) {
            (_, Err(e)) => {
                leptos::logging::warn!("Saving the book failed: {e}");
                SubmitOutcome::notify(Notification::from(&e))
            }
            (Submission::Update { .. }, Ok(_)) => {
                SubmitOutcome::notify(Notification::success(EDITED_MESSAGE))
            }
            (Submission::Create { .. }, Ok(_)) => {
                self.image = None;
                SubmitOutcome {
                    notification: Notification::success(CREATED_MESSAGE),
                    reset_form: true,
                    released_preview: self.preview.take(),
                }
            }
        }
    }
}
impl<I: Clone> EditorState<I> {
    /// Check the image guard and the fields, without touching the network
    pub fn prepare(&self, form: &RawBookForm) -> Result<Submission<I>, FormError> {
        if self.preview.is_none() {
            return Err(FormError::MissingImage);
        }
        match &self.mode {
            EditorMode::Edit(id) => Ok(Submission::Update {
                id: id.clone(),
                fields: form.parse()?,
            }),
            EditorMode::Create => {
                let image = self.image.clone().ok_or(FormError::MissingImage)?;
                Ok(Submission::Create {
                    fields: form.parse()?,
                    image,
                })
            }
        }
    }

    /// The whole submit: validate, send, apply.
    ///
    /// Never fails, every problem ends up in the returned notification.
    pub async fn submit<A>(&mut self, api: &A, form: &RawBookForm) -> SubmitOutcome
    where
        A: BookApi<Image = I>,
    {
        let submission = match self.prepare(form) {
            Ok(x) => x,
            Err(e) => {
                return SubmitOutcome::notify(Notification::from(&e));
            }
        };
        let result = submission.send(api).await;
        self.finish(&submission, result)
    }
}
