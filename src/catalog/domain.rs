pub mod service;

use std::collections::HashMap;
use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::errors::ServiceResult;

#[async_trait]
pub trait CatalogService: Sync + Send {
    async fn list_books(&self) -> ServiceResult<HashMap<String, BookDto>>;
    async fn get_book(&self, id: i64) -> ServiceResult<BookDto>;
    async fn put_book(&self, book: &BookDto) -> ServiceResult<()>;
}
