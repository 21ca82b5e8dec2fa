use std::collections::HashMap;
use async_trait::async_trait;
use crate::core::errors::ServiceResult;

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // inserts or overwrites an entity keyed by its id
    async fn put(&self, entity: &Entity) -> ServiceResult<usize>;

    // get an entity, None when the id is unknown
    async fn get(&self, id: &str) -> ServiceResult<Option<Entity>>;

    // all entities keyed by id
    async fn all(&self) -> ServiceResult<HashMap<String, Entity>>;
}
