use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;
use crate::utils::date::parse_published;

// BookEntity is the stored form of a catalog book. The isbn is the primary
// key of the store; the publication date keeps the string the caller sent
// and is parsed on demand for comparisons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookEntity {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub date: String,
}

impl BookEntity {
    pub fn new(isbn: &str, title: &str, author: &str, date: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            date: date.to_string(),
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.isbn.to_string()
    }
}

impl Book for BookEntity {
    fn published_on(&self) -> Option<NaiveDate> {
        parse_published(self.date.as_str())
    }
}
