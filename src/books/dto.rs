use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;
use crate::utils::date::parse_published;

// BookDto is the data transfer object exchanged with the catalog service
// and serialized on the wire and in seed datasets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookDto {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub date: String,
}

impl BookDto {
    pub fn new(isbn: &str, title: &str, author: &str, date: &str) -> BookDto {
        BookDto {
            isbn: isbn.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            date: date.to_string(),
        }
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> String {
        self.isbn.to_string()
    }
}

impl Book for BookDto {
    fn published_on(&self) -> Option<NaiveDate> {
        parse_published(self.date.as_str())
    }
}
