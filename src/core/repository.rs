use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::catalog::CatalogResult;

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // saves an entity, replacing any prior record under the same id
    async fn save(&self, entity: &Entity) -> CatalogResult<usize>;

    // get an entity, failing when the id is absent
    async fn get(&self, id: &str) -> CatalogResult<Entity>;

    // delete an entity, a no-op when the id is absent
    async fn delete(&self, id: &str) -> CatalogResult<usize>;

    // every stored entity in the repository's canonical order
    async fn find_all(&self) -> CatalogResult<Vec<Entity>>;

    // number of stored entities
    async fn count(&self) -> CatalogResult<usize>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub(crate) enum RepositoryStore {
    Memory,
}
