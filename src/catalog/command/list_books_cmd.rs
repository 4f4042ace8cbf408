use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct ListBooksCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl ListBooksCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// the filters are alternatives, not a composable query; author wins when
// both are supplied
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ListBooksCommandRequest {
    pub(crate) author: Option<String>,
    pub(crate) published_after: Option<String>,
}

impl ListBooksCommandRequest {
    pub fn by_author(author: &str) -> Self {
        Self {
            author: Some(author.to_string()),
            published_after: None,
        }
    }

    pub fn published_after(date: &str) -> Self {
        Self {
            author: None,
            published_after: Some(date.to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ListBooksCommandResponse {
    pub(crate) books: Vec<BookDto>,
}

impl ListBooksCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand {
    async fn execute(&self, req: ListBooksCommandRequest) -> Result<ListBooksCommandResponse, CommandError> {
        let res = if let Some(author) = req.author {
            self.catalog_service.find_books_by_author(author.as_str()).await
        } else if let Some(date) = req.published_after {
            self.catalog_service.find_books_published_after(date.as_str()).await
        } else {
            self.catalog_service.find_all_books().await
        };
        res.map_err(CommandError::from).map(ListBooksCommandResponse::new)
    }
}
