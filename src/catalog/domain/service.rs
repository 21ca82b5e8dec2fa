use std::collections::HashMap;
use async_trait::async_trait;
use tracing::{debug, info};
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::{Configuration, LookupMode};
use crate::core::errors::{ServiceError, ServiceResult};

pub(crate) struct CatalogServiceImpl {
    lookup_mode: LookupMode,
    book_repository: Box<dyn BookRepository>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(config: &Configuration, book_repository: Box<dyn BookRepository>) -> Self {
        Self {
            lookup_mode: config.lookup_mode,
            book_repository,
        }
    }

    // init seeds an empty catalog. It runs once, before the service is shared.
    pub(crate) async fn init(&self) -> ServiceResult<()> {
        if self.book_repository.size().await? > 0 {
            return Ok(());
        }
        info!("Init Books");
        for book in seed_books() {
            let _ = self.book_repository.put(&book).await?;
        }
        Ok(())
    }
}

pub(crate) fn seed_books() -> Vec<BookDto> {
    vec![
        BookDto::new(1, "A Spell for Chameleon", "Piers Anthony", "1977", " Del Rey "),
        BookDto::new(2, "The Source of Magic", "Piers Anthony", "1979", " Del Rey "),
    ]
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn list_books(&self) -> ServiceResult<HashMap<String, BookDto>> {
        self.book_repository.all().await
    }

    async fn get_book(&self, id: i64) -> ServiceResult<BookDto> {
        match self.book_repository.get(id.to_string().as_str()).await? {
            Some(book) => Ok(book),
            None => {
                debug!("book {} not found, lookup mode {:?}", id, self.lookup_mode);
                match self.lookup_mode {
                    LookupMode::Lenient => Ok(BookDto::default()),
                    LookupMode::Strict => Err(ServiceError::not_found(format!("book not found for {}", id).as_str())),
                }
            }
        }
    }

    async fn put_book(&self, book: &BookDto) -> ServiceResult<()> {
        self.book_repository.put(book).await.map(|_| ())
    }
}
