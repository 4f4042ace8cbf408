use std::sync::Arc;
use tracing::log::info;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::catalog::CatalogResult;

// Loads a JSON array of books and feeds each into the catalog in dataset
// order, so a later record with a duplicate isbn replaces the earlier one.
// Returns the number of dataset records applied.
pub(crate) async fn load_seed_books(path: &str, service: &Arc<dyn CatalogService>) -> CatalogResult<usize> {
    let raw = std::fs::read_to_string(path)?;
    let books: Vec<BookDto> = serde_json::from_str(raw.as_str())?;
    for book in &books {
        let _ = service.add_book(book).await?;
    }
    info!("seeded {} books from {}", service.count_books().await?, path);
    Ok(books.len())
}
