//! Types and functions shared by App and Server

pub mod error;
pub mod form;
pub mod notification;
pub mod session;
pub mod urls;

pub use error::{ApiError, ErrorCode, FALLBACK_ERROR_MESSAGE};
pub use form::{FormError, RawBookForm};
pub use notification::{Notification, Status};
pub use session::Session;

use serde::{Deserialize, Deserializer, Serialize};


/// The `accept` attribute used for the cover image input
pub const IMAGE_ACCEPT: &str = "image/*";

/// Identifier of a book, assigned by the server.
///
/// The backend is free to send it as a JSON number or string, we only ever echo it back in urls.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct BookId(String);
impl BookId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
impl core::fmt::Display for BookId {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl From<&str> for BookId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
impl From<String> for BookId {
    fn from(value: String) -> Self {
        Self(value)
    }
}
impl<'de> Deserialize<'de> for BookId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(i64),
            Text(String),
        }
        Ok(match RawId::deserialize(deserializer)? {
            RawId::Number(n) => Self(n.to_string()),
            RawId::Text(s) => Self(s),
        })
    }
}

/// A single book as the backend stores it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub year: i32,
    pub pages: u32,
    /// Path of the cover image, relative to the asset base url
    pub image: String,
}
impl Book {
    /// The editable part of this book (everything but id and image)
    pub fn fields(&self) -> BookFields {
        BookFields {
            title: self.title.clone(),
            author: self.author.clone(),
            publisher: self.publisher.clone(),
            year: self.year,
            pages: self.pages,
        }
    }
}

/// The fields of a book that are sent on create and update.
///
/// The image is deliberately missing: it is only ever sent once, on create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookFields {
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub year: i32,
    pub pages: u32,
}

/// Response envelope for a single book
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookResponse {
    pub book: Book,
}

/// Response envelope for the catalog listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookListResponse {
    pub books: Vec<Book>,
}

/// Deployment-time settings the browser needs to talk to the backend.
///
/// Handed out by the server, so that nothing in the client bundle is hardcoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// e.g. `http://localhost:8000`
    pub api_base_url: String,
    /// where cover images are served from, usually the same as `api_base_url`
    pub asset_base_url: String,
}
