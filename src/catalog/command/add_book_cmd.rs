use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::utils::date::parse_published;

pub(crate) struct AddBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl AddBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddBookCommandRequest {
    pub(crate) isbn: String,
    pub(crate) title: String,
    pub(crate) author: String,
    pub(crate) date: String,
}

impl AddBookCommandRequest {
    pub fn new(isbn: &str, title: &str, author: &str, date: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            date: date.to_string(),
        }
    }

    pub fn build_book(&self) -> BookDto {
        BookDto::new(self.isbn.as_str(), self.title.as_str(), self.author.as_str(), self.date.as_str())
    }

    // the store does not validate, so the date is checked here before add
    pub fn validate(&self) -> Result<(), CommandError> {
        if parse_published(self.date.as_str()).is_none() {
            return Err(CommandError::Validation {
                message: format!("date {} must be a valid ISO 8601 date string", self.date),
                reason_code: None,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct AddBookCommandResponse {
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        req.validate()?;
        let book = req.build_book();
        self.catalog_service.add_book(&book).await.map_err(CommandError::from).map(|_| AddBookCommandResponse::new(book))
    }
}
