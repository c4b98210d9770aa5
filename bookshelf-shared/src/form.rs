//! Turning the raw values of the book form into [`BookFields`]

use crate::BookFields;

#[cfg(test)]
mod test;

/// The values of the book form exactly as the browser hands them to us
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawBookForm {
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub year: String,
    pub pages: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// Neither a freshly selected image nor an existing one
    MissingImage,
    /// A required field was left empty
    EmptyField(&'static str),
    /// A numeric field did not contain a number we accept
    InvalidNumber { field: &'static str, value: String },
}
impl core::fmt::Display for FormError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Self::MissingImage => {
                write!(f, "Please select image")
            }
            Self::EmptyField(field) => {
                write!(f, "Please fill in the {field}")
            }
            Self::InvalidNumber { field, value } => {
                write!(f, "The {field} must be a whole number, got \"{value}\"")
            }
        }
    }
}
impl std::error::Error for FormError {}

fn required(value: &str, field: &'static str) -> Result<String, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(FormError::EmptyField(field))
    } else {
        Ok(trimmed.to_string())
    }
}

fn number<T: core::str::FromStr>(value: &str, field: &'static str) -> Result<T, FormError> {
    let trimmed = required(value, field)?;
    trimmed.parse::<T>().map_err(|_| FormError::InvalidNumber {
        field,
        value: trimmed,
    })
}

impl RawBookForm {
    /// Validate all fields, reporting the first problem in form order
    pub fn parse(&self) -> Result<BookFields, FormError> {
        Ok(BookFields {
            title: required(&self.title, "title")?,
            author: required(&self.author, "author")?,
            publisher: required(&self.publisher, "publisher")?,
            year: number(&self.year, "year")?,
            pages: number(&self.pages, "pages")?,
        })
    }
}
impl From<&BookFields> for RawBookForm {
    fn from(value: &BookFields) -> Self {
        Self {
            title: value.title.clone(),
            author: value.author.clone(),
            publisher: value.publisher.clone(),
            year: value.year.to_string(),
            pages: value.pages.to_string(),
        }
    }
}
