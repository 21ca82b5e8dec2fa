use std::collections::HashMap;
use async_trait::async_trait;
use parking_lot::RwLock;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::core::domain::Identifiable;
use crate::core::errors::ServiceResult;
use crate::core::repository::Repository;

// MemoryBookRepository keeps books in a process-local map keyed by the stringified id.
// Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    books: RwLock<HashMap<String, BookDto>>,
}

impl MemoryBookRepository {
    pub(crate) fn new() -> Self {
        Self {
            books: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl Repository<BookDto> for MemoryBookRepository {
    async fn put(&self, entity: &BookDto) -> ServiceResult<usize> {
        self.books.write().insert(Identifiable::id(entity), entity.clone());
        Ok(1)
    }

    async fn get(&self, id: &str) -> ServiceResult<Option<BookDto>> {
        Ok(self.books.read().get(id).cloned())
    }

    async fn all(&self) -> ServiceResult<HashMap<String, BookDto>> {
        Ok(self.books.read().clone())
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn size(&self) -> ServiceResult<usize> {
        Ok(self.books.read().len())
    }
}
