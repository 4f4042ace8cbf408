use std::collections::HashMap;
use async_trait::async_trait;
use tokio::sync::RwLock;
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::catalog::{CatalogError, CatalogResult};
use crate::core::domain::Identifiable;
use crate::core::repository::Repository;
use crate::utils::date::parse_published;

// MemoryBookRepository holds the authoritative set of books in a map keyed
// by isbn. Listings re-sort the full record set on every read; there is no
// maintained ordering index. The lock serializes writers against the
// multi-threaded request host.
pub struct MemoryBookRepository {
    books: RwLock<HashMap<String, BookEntity>>,
}

impl MemoryBookRepository {
    pub(crate) fn new() -> Self {
        Self {
            books: RwLock::new(HashMap::new()),
        }
    }

    async fn sorted_by_title(&self) -> Vec<BookEntity> {
        let books = self.books.read().await;
        let mut records: Vec<BookEntity> = books.values().cloned().collect();
        records.sort_by(|a, b| a.title.cmp(&b.title));
        records
    }
}

#[async_trait]
impl Repository<BookEntity> for MemoryBookRepository {
    // insert-or-replace keyed by isbn
    async fn save(&self, entity: &BookEntity) -> CatalogResult<usize> {
        let mut books = self.books.write().await;
        books.insert(entity.id(), entity.clone());
        Ok(1)
    }

    async fn get(&self, isbn: &str) -> CatalogResult<BookEntity> {
        let books = self.books.read().await;
        books.get(isbn).cloned().ok_or_else(|| CatalogError::not_found(
            format!("book not found for isbn {}", isbn).as_str()))
    }

    async fn delete(&self, isbn: &str) -> CatalogResult<usize> {
        let mut books = self.books.write().await;
        Ok(books.remove(isbn).map_or(0, |_| 1))
    }

    async fn find_all(&self) -> CatalogResult<Vec<BookEntity>> {
        Ok(self.sorted_by_title().await)
    }

    async fn count(&self) -> CatalogResult<usize> {
        let books = self.books.read().await;
        Ok(books.len())
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn find_by_author(&self, author: &str) -> CatalogResult<Vec<BookEntity>> {
        Ok(self.sorted_by_title().await.into_iter()
            .filter(|book| book.author == author)
            .collect())
    }

    async fn find_published_after(&self, date: &str) -> CatalogResult<Vec<BookEntity>> {
        let after = parse_published(date).ok_or_else(|| CatalogError::validation(
            format!("unparseable date {}", date).as_str(), None))?;
        Ok(self.sorted_by_title().await.into_iter()
            .filter(|book| book.published_on().map_or(false, |published| published > after))
            .collect())
    }

    async fn search(&self, term: &str) -> CatalogResult<Vec<BookEntity>> {
        Ok(self.sorted_by_title().await.into_iter()
            .filter(|book| book.title.contains(term) || book.author.contains(term))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::books::repository::BookRepository;
    use crate::books::repository::memory_book_repository::MemoryBookRepository;
    use crate::core::catalog::CatalogError;
    use crate::core::repository::Repository;

    fn candide() -> BookEntity {
        BookEntity::new("978-A", "Candide", "Voltaire", "1759")
    }

    fn zadig() -> BookEntity {
        BookEntity::new("978-B", "Zadig", "Voltaire", "1748")
    }

    fn cantatrice() -> BookEntity {
        BookEntity::new("978-C", "La Cantatrice chauve", "Ionesco", "1950")
    }

    async fn seeded_repo() -> MemoryBookRepository {
        let repo = MemoryBookRepository::new();
        for book in [candide(), zadig(), cantatrice()] {
            let size = repo.save(&book).await.expect("should save book");
            assert_eq!(1, size);
        }
        repo
    }

    #[tokio::test]
    async fn test_should_save_get_books() {
        let repo = MemoryBookRepository::new();
        let book = candide();
        let size = repo.save(&book).await.expect("should save book");
        assert_eq!(1, size);

        let loaded = repo.get(book.isbn.as_str()).await.expect("should return book");
        assert_eq!(book, loaded);
    }

    #[tokio::test]
    async fn test_should_fail_get_for_unknown_isbn() {
        let repo = MemoryBookRepository::new();
        let res = repo.get("978-X").await;
        match res {
            Err(CatalogError::NotFound { message }) => {
                assert!(message.contains("978-X"));
            }
            _ => panic!("expected not-found error"),
        }
    }

    #[tokio::test]
    async fn test_should_replace_book_on_same_isbn() {
        let repo = MemoryBookRepository::new();
        let first = candide();
        let second = BookEntity::new(first.isbn.as_str(), "Candide, ou l'Optimisme", "Voltaire", "1759");
        let _ = repo.save(&first).await.expect("should save book");
        let _ = repo.save(&second).await.expect("should save book");

        assert_eq!(1, repo.count().await.expect("should count books"));
        let loaded = repo.get(first.isbn.as_str()).await.expect("should return book");
        assert_eq!(second.title, loaded.title);
    }

    #[tokio::test]
    async fn test_should_count_distinct_isbns() {
        let repo = seeded_repo().await;
        for _ in 0..3 {
            let _ = repo.save(&zadig()).await.expect("should save book");
        }
        assert_eq!(3, repo.count().await.expect("should count books"));
    }

    #[tokio::test]
    async fn test_should_list_all_sorted_by_title() {
        let repo = seeded_repo().await;
        let titles: Vec<String> = repo.find_all().await.expect("should list books")
            .into_iter().map(|book| book.title).collect();
        assert_eq!(vec!["Candide", "La Cantatrice chauve", "Zadig"], titles);
    }

    #[tokio::test]
    async fn test_should_keep_order_after_delete_and_add() {
        let repo = seeded_repo().await;
        let deleted = repo.delete("978-A").await.expect("should delete book");
        assert_eq!(1, deleted);
        let _ = repo.save(&candide()).await.expect("should save book");

        let titles: Vec<String> = repo.find_all().await.expect("should list books")
            .into_iter().map(|book| book.title).collect();
        assert_eq!(vec!["Candide", "La Cantatrice chauve", "Zadig"], titles);
    }

    #[tokio::test]
    async fn test_should_delete_books_idempotently() {
        let repo = seeded_repo().await;
        let deleted = repo.delete("978-A").await.expect("should delete book");
        assert_eq!(1, deleted);
        let deleted = repo.delete("978-A").await.expect("should delete book");
        assert_eq!(0, deleted);
        assert_eq!(2, repo.count().await.expect("should count books"));

        let res = repo.get("978-A").await;
        assert!(res.is_err());
        let titles: Vec<String> = repo.find_all().await.expect("should list books")
            .into_iter().map(|book| book.title).collect();
        assert_eq!(vec!["La Cantatrice chauve", "Zadig"], titles);
    }

    #[tokio::test]
    async fn test_should_find_by_author_in_title_order() {
        let repo = seeded_repo().await;
        let titles: Vec<String> = repo.find_by_author("Voltaire").await.expect("should filter books")
            .into_iter().map(|book| book.title).collect();
        assert_eq!(vec!["Candide", "Zadig"], titles);
    }

    #[tokio::test]
    async fn test_should_match_author_case_sensitively() {
        let repo = seeded_repo().await;
        let books = repo.find_by_author("voltaire").await.expect("should filter books");
        assert!(books.is_empty());
    }

    #[tokio::test]
    async fn test_should_find_published_after() {
        let repo = seeded_repo().await;
        let titles: Vec<String> = repo.find_published_after("1750").await.expect("should filter books")
            .into_iter().map(|book| book.title).collect();
        assert_eq!(vec!["Candide", "La Cantatrice chauve"], titles);
    }

    #[tokio::test]
    async fn test_should_exclude_boundary_date() {
        let repo = seeded_repo().await;
        // strictly greater: Candide (1759) is excluded by its own year
        let titles: Vec<String> = repo.find_published_after("1759").await.expect("should filter books")
            .into_iter().map(|book| book.title).collect();
        assert_eq!(vec!["La Cantatrice chauve"], titles);
    }

    #[tokio::test]
    async fn test_should_skip_books_with_unparseable_date() {
        let repo = seeded_repo().await;
        let _ = repo.save(&BookEntity::new("978-D", "Fragments", "Anonymous", "unknown"))
            .await.expect("should save book");
        let titles: Vec<String> = repo.find_published_after("1750").await.expect("should filter books")
            .into_iter().map(|book| book.title).collect();
        assert_eq!(vec!["Candide", "La Cantatrice chauve"], titles);
    }

    #[tokio::test]
    async fn test_should_reject_unparseable_filter_date() {
        let repo = seeded_repo().await;
        let res = repo.find_published_after("not a date").await;
        assert!(matches!(res, Err(CatalogError::Validation { message: _, reason_code: _ })));
    }

    #[tokio::test]
    async fn test_should_search_title_and_author() {
        let repo = seeded_repo().await;
        let titles: Vec<String> = repo.search("Volt").await.expect("should search books")
            .into_iter().map(|book| book.title).collect();
        assert_eq!(vec!["Candide", "Zadig"], titles);

        let titles: Vec<String> = repo.search("Cantatrice").await.expect("should search books")
            .into_iter().map(|book| book.title).collect();
        assert_eq!(vec!["La Cantatrice chauve"], titles);
    }

    #[tokio::test]
    async fn test_should_search_case_sensitively() {
        let repo = seeded_repo().await;
        let books = repo.search("volt").await.expect("should search books");
        assert!(books.is_empty());
    }
}
