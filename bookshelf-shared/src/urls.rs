//! URLs shared between front- and backend
//!
//! for consistency, all route and endpoint urls in this module always start with a /

use crate::{ApiError, BookId};

/// Where the catalog lives; this is also where we go after deleting a book
pub const CATALOG_ROOT: &str = "/";
/// Detail page for a single book, the id is appended after this string (and a /)
pub const BOOK_DETAIL_BASE: &str = "/books";
/// Edit page for a single book, the id is appended after this string (and a /)
pub const BOOK_EDIT_BASE: &str = "/editbook";
/// Page with an empty book form
pub const NEW_BOOK: &str = "/newbook";
/// The books resource on the REST backend
pub const BOOKS_API_ENDPOINT: &str = "/books";

/// Join a base url and a path with exactly one slash between them
pub fn join(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Displayable url for an image path stored on a book
pub fn image_url(asset_base: &str, image: &str) -> String {
    join(asset_base, image)
}

/// The id as a single path segment, so `/`, `?` or `#` in it cannot leave the segment
pub fn id_segment(id: &BookId) -> String {
    urlencoding::encode(id.as_str()).into_owned()
}

pub fn detail_path(id: &BookId) -> String {
    format!("{BOOK_DETAIL_BASE}/{}", id_segment(id))
}

pub fn edit_path(id: &BookId) -> String {
    format!("{BOOK_EDIT_BASE}/{}", id_segment(id))
}

/// Url of the books collection on the backend
pub fn books_endpoint(api_base: &str) -> String {
    join(api_base, BOOKS_API_ENDPOINT)
}

/// Url of a single book on the backend.
///
/// Empty ids and ids made of dots only are refused: url parsers resolve `.` and `..` segments
/// even when they are percent-encoded.
pub fn book_endpoint(api_base: &str, id: &BookId) -> Result<String, ApiError> {
    let raw = id.as_str();
    if raw.is_empty() || raw.chars().all(|c| c == '.') {
        return Err(ApiError::invalid_id(raw));
    }
    Ok(format!("{}/{}", books_endpoint(api_base), id_segment(id)))
}
