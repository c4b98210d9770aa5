//! The services actually talking to the books API (by sending requests to the backend)

use async_trait::async_trait;
use bookshelf_shared::{
    urls::{book_endpoint, books_endpoint},
    ApiError, Book, BookFields, BookId, BookListResponse, BookResponse, ClientConfig, Session,
};
use reqwasm::http::{Request, Response};
use send_wrapper::SendWrapper;
use serde::de::DeserializeOwned;
use web_sys::{File, FormData};

/// Everything the components need from the backend.
///
/// `Image` is whatever the platform hands us for a picked file; the browser implementation uses
/// [`web_sys::File`], tests use something cheaper.
#[async_trait(?Send)]
pub trait BookApi {
    type Image;

    /// Create a book, uploading its cover image along with the fields
    async fn create_book(&self, fields: &BookFields, image: &Self::Image) -> Result<Book, ApiError>;
    /// Change every field except the image
    async fn update_book(&self, id: &BookId, fields: &BookFields) -> Result<Book, ApiError>;
    async fn get_book(&self, id: &BookId) -> Result<Book, ApiError>;
    async fn delete_book(&self, id: &BookId) -> Result<(), ApiError>;
    async fn list_books(&self) -> Result<Vec<Book>, ApiError>;
}

/// [`BookApi`] over HTTP, using the browsers fetch
#[derive(Debug, Clone)]
pub struct RestBookApi {
    api_base_url: String,
    session: Session,
}
impl RestBookApi {
    pub fn new(config: &ClientConfig, session: Session) -> Self {
        Self {
            api_base_url: config.api_base_url.clone(),
            session,
        }
    }

    /// attach the credential, if the user has one
    fn authorize(&self, request: Request) -> Request {
        match self.session.bearer() {
            Some(bearer) => request.header("Authorization", &bearer),
            None => request,
        }
    }
}

async fn send(request: Request) -> Result<Response, ApiError> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::transport(e.to_string()))?;
    if response.ok() {
        Ok(response)
    } else {
        let status = response.status();
        // an unreadable body just means there is no server message
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::from_response(status, &body))
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::malformed(e.to_string()))
}

/// Package the fields and image as multipart form data
fn book_form_data(fields: &BookFields, image: &File) -> Result<FormData, ApiError> {
    let build_err = |e| ApiError::transport(format!("Unable to build form data: {e:?}"));
    let form_data = FormData::new().map_err(build_err)?;
    form_data.append_with_str("title", &fields.title).map_err(build_err)?;
    form_data.append_with_str("author", &fields.author).map_err(build_err)?;
    form_data
        .append_with_str("publisher", &fields.publisher)
        .map_err(build_err)?;
    form_data
        .append_with_str("year", &fields.year.to_string())
        .map_err(build_err)?;
    form_data
        .append_with_str("pages", &fields.pages.to_string())
        .map_err(build_err)?;
    form_data
        .append_with_blob_and_filename("image", image, image.name().as_str())
        .map_err(build_err)?;
    Ok(form_data)
}

#[async_trait(?Send)]
impl BookApi for RestBookApi {
    /// [`send_wrapper`] is only compiled in hydrate, so this will never run in a multi-threaded
    /// environment. Accessing SendWrapper<File> is guaranteed to be safe.
    type Image = SendWrapper<File>;

    async fn create_book(&self, fields: &BookFields, image: &Self::Image) -> Result<Book, ApiError> {
        let form_data = book_form_data(fields, image)?;
        let request = self
            .authorize(Request::post(&books_endpoint(&self.api_base_url)))
            .body(form_data);
        decode::<BookResponse>(send(request).await?)
            .await
            .map(|r| r.book)
    }

    async fn update_book(&self, id: &BookId, fields: &BookFields) -> Result<Book, ApiError> {
        let body =
            serde_json::to_string(fields).map_err(|e| ApiError::malformed(e.to_string()))?;
        let request = self
            .authorize(Request::put(&book_endpoint(&self.api_base_url, id)?))
            .header("Content-Type", "application/json")
            .body(body);
        decode::<BookResponse>(send(request).await?)
            .await
            .map(|r| r.book)
    }

    async fn get_book(&self, id: &BookId) -> Result<Book, ApiError> {
        let request = self.authorize(Request::get(&book_endpoint(&self.api_base_url, id)?));
        decode::<BookResponse>(send(request).await?)
            .await
            .map(|r| r.book)
    }

    async fn delete_book(&self, id: &BookId) -> Result<(), ApiError> {
        let request = self.authorize(Request::delete(&book_endpoint(&self.api_base_url, id)?));
        // 200 with a body or 204 without one, we do not care about the content
        send(request).await.map(|_| ())
    }

    async fn list_books(&self) -> Result<Vec<Book>, ApiError> {
        let request = self.authorize(Request::get(&books_endpoint(&self.api_base_url)));
        decode::<BookListResponse>(send(request).await?)
            .await
            .map(|r| r.books)
    }
}
