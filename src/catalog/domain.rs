pub mod service;

use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::catalog::CatalogResult;

#[async_trait]
pub(crate) trait CatalogService: Sync + Send {
    async fn add_book(&self, book: &BookDto) -> CatalogResult<BookDto>;
    async fn remove_book(&self, isbn: &str) -> CatalogResult<()>;
    async fn find_book_by_isbn(&self, isbn: &str) -> CatalogResult<BookDto>;
    async fn find_all_books(&self) -> CatalogResult<Vec<BookDto>>;
    async fn find_books_by_author(&self, author: &str) -> CatalogResult<Vec<BookDto>>;
    async fn find_books_published_after(&self, date: &str) -> CatalogResult<Vec<BookDto>>;
    async fn search_books(&self, term: &str) -> CatalogResult<Vec<BookDto>>;
    async fn count_books(&self) -> CatalogResult<usize>;
}
