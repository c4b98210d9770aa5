//! An in-memory [`BookApi`] for driving the component state in tests

use std::cell::RefCell;

use async_trait::async_trait;
use bookshelf_shared::{ApiError, Book, BookFields, BookId};

use crate::services::BookApi;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Create(BookFields, String),
    Update(BookId, BookFields),
    Get(BookId),
    Delete(BookId),
    List,
}

/// Answers every call from `books`, or with `failure` if that is set.
///
/// Images are plain strings (the "file name").
#[derive(Default)]
pub struct FakeApi {
    calls: RefCell<Vec<Call>>,
    books: Vec<Book>,
    failure: Option<ApiError>,
}
impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_book(mut self, book: Book) -> Self {
        self.books.push(book);
        self
    }

    pub fn failing(mut self, err: ApiError) -> Self {
        self.failure = Some(err);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(call);
        match &self.failure {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }
}

pub fn dune() -> Book {
    Book {
        id: BookId::new("42"),
        title: "Dune".to_string(),
        author: "Herbert".to_string(),
        publisher: "Chilton".to_string(),
        year: 1965,
        pages: 412,
        image: "dune.jpg".to_string(),
    }
}

fn book_from(id: BookId, fields: &BookFields, image: &str) -> Book {
    Book {
        id,
        title: fields.title.clone(),
        author: fields.author.clone(),
        publisher: fields.publisher.clone(),
        year: fields.year,
        pages: fields.pages,
        image: image.to_string(),
    }
}

#[async_trait(?Send)]
impl BookApi for FakeApi {
    type Image = String;

    async fn create_book(&self, fields: &BookFields, image: &String) -> Result<Book, ApiError> {
        self.record(Call::Create(fields.clone(), image.clone()))?;
        Ok(book_from(BookId::new("1"), fields, image))
    }

    async fn update_book(&self, id: &BookId, fields: &BookFields) -> Result<Book, ApiError> {
        self.record(Call::Update(id.clone(), fields.clone()))?;
        Ok(book_from(id.clone(), fields, "unchanged.jpg"))
    }

    async fn get_book(&self, id: &BookId) -> Result<Book, ApiError> {
        self.record(Call::Get(id.clone()))?;
        self.books
            .iter()
            .find(|b| &b.id == id)
            .cloned()
            .ok_or_else(|| ApiError::from_response(404, r#"{"message":"Book not found"}"#))
    }

    async fn delete_book(&self, id: &BookId) -> Result<(), ApiError> {
        self.record(Call::Delete(id.clone()))
    }

    async fn list_books(&self) -> Result<Vec<Book>, ApiError> {
        self.record(Call::List)?;
        Ok(self.books.clone())
    }
}
