include!("../../lib.rs");
use std::net::SocketAddr;
use axum::{
    routing::{get, post},
    Router,
};
use tracing::log::{error, info, warn};
use crate::books::seed::load_seed_books;
use crate::catalog::controller::{add_book, find_book_by_isbn, list_books, remove_book, search_books};
use crate::catalog::factory;
use crate::core::controller::AppState;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;
use crate::utils::trace::setup_tracing;

#[tokio::main]
async fn main() {
    setup_tracing();

    let config = Configuration::new();
    let service = factory::create_catalog_service(&config, RepositoryStore::Memory).await;

    // best effort, the catalog serves an empty store when seeding fails
    if let Some(seed_file) = config.seed_file.as_deref() {
        if let Err(err) = load_seed_books(seed_file, &service).await {
            warn!("failed to seed books from {}: {}", seed_file, err);
        }
    }

    let state = AppState::new(config, service);
    let addr = SocketAddr::from(([0, 0, 0, 0], state.config.http_port));

    let app = Router::new()
        .route("/books", get(list_books).post(add_book))
        .route("/books/search", post(search_books))
        .route("/books/:isbn",
               get(find_book_by_isbn).delete(remove_book))
        .with_state(state);

    info!("catalog listening on {}", addr);
    if let Err(err) = axum::Server::bind(&addr).serve(app.into_make_service()).await {
        error!("server error: {}", err);
    }
}
