use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::catalog::CatalogResult;
use crate::core::domain::Configuration;

pub(crate) struct CatalogServiceImpl {
    book_repository: Box<dyn BookRepository>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(_config: &Configuration, book_repository: Box<dyn BookRepository>) -> Self {
        Self {
            book_repository,
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&self, book: &BookDto) -> CatalogResult<BookDto> {
        let _ = self.book_repository.save(&BookEntity::from(book)).await.map(|_| ())?;
        Ok(book.clone())
    }

    async fn remove_book(&self, isbn: &str) -> CatalogResult<()> {
        self.book_repository.delete(isbn).await.map(|_| ())
    }

    async fn find_book_by_isbn(&self, isbn: &str) -> CatalogResult<BookDto> {
        self.book_repository.get(isbn).await.map(|b| BookDto::from(&b))
    }

    async fn find_all_books(&self) -> CatalogResult<Vec<BookDto>> {
        let res = self.book_repository.find_all().await?;
        Ok(res.iter().map(BookDto::from).collect())
    }

    async fn find_books_by_author(&self, author: &str) -> CatalogResult<Vec<BookDto>> {
        let res = self.book_repository.find_by_author(author).await?;
        Ok(res.iter().map(BookDto::from).collect())
    }

    async fn find_books_published_after(&self, date: &str) -> CatalogResult<Vec<BookDto>> {
        let res = self.book_repository.find_published_after(date).await?;
        Ok(res.iter().map(BookDto::from).collect())
    }

    async fn search_books(&self, term: &str) -> CatalogResult<Vec<BookDto>> {
        let res = self.book_repository.search(term).await?;
        Ok(res.iter().map(BookDto::from).collect())
    }

    async fn count_books(&self) -> CatalogResult<usize> {
        self.book_repository.count().await
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            isbn: other.isbn.to_string(),
            title: other.title.to_string(),
            author: other.author.to_string(),
            date: other.date.to_string(),
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            isbn: other.isbn.to_string(),
            title: other.title.to_string(),
            author: other.author.to_string(),
            date: other.date.to_string(),
        }
    }
}
