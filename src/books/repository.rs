pub mod memory_book_repository;

use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::errors::ServiceResult;
use crate::core::repository::Repository;

#[async_trait]
pub trait BookRepository: Repository<BookDto> {
    // number of books held
    async fn size(&self) -> ServiceResult<usize>;
}
