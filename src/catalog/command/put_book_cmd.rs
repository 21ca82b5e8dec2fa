use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::Command;

pub(crate) struct PutBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl PutBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct PutBookCommandRequest {
    pub(crate) book: BookDto,
}

impl PutBookCommandRequest {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub(crate) struct PutBookCommandResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub err: String,
}

#[async_trait]
impl Command<PutBookCommandRequest, PutBookCommandResponse> for PutBookCommand {
    async fn execute(&self, req: PutBookCommandRequest) -> PutBookCommandResponse {
        match self.catalog_service.put_book(&req.book).await {
            Ok(_) => PutBookCommandResponse { ok: true, err: String::new() },
            Err(err) => {
                warn!("failed to put book {}: {}", req.book.id, err);
                PutBookCommandResponse { ok: false, err: err.description() }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookDto;
    use crate::catalog::command::put_book_cmd::{PutBookCommand, PutBookCommandRequest, PutBookCommandResponse};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;

    #[tokio::test]
    async fn test_should_run_put_book() {
        let svc = factory::create_catalog_service(&Configuration::new()).await.expect("should build catalog");
        let cmd = PutBookCommand::new(svc.clone());

        let book = BookDto::new(2, "Night Mare", "Piers Anthony", "1982", "Del Rey");
        let res = cmd.execute(PutBookCommandRequest::new(book.clone())).await;
        assert_eq!(PutBookCommandResponse { ok: true, err: String::new() }, res);
        assert_eq!(r#"{"ok":true}"#, serde_json::to_string(&res).expect("should encode").as_str());

        let books = svc.list_books().await.expect("should list books");
        assert_eq!(2, books.len());
        assert_eq!(Some(&book), books.get("2"));
    }
}
