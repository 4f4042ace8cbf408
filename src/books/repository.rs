pub mod memory_book_repository;

use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::core::catalog::CatalogResult;
use crate::core::repository::Repository;

#[async_trait]
pub(crate) trait BookRepository: Repository<BookEntity> {
    // books whose author matches exactly, in title order
    async fn find_by_author(&self, author: &str) -> CatalogResult<Vec<BookEntity>>;

    // books published strictly after the given date, in title order; a book
    // whose stored date does not parse never matches, an unparseable filter
    // date is a validation failure
    async fn find_published_after(&self, date: &str) -> CatalogResult<Vec<BookEntity>>;

    // books whose title or author contains the term, in title order
    async fn search(&self, term: &str) -> CatalogResult<Vec<BookEntity>>;
}
