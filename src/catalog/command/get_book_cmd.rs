use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{into_reply, Command};

pub(crate) struct GetBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl GetBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct GetBookCommandRequest {
    pub(crate) id: i64,
}

impl GetBookCommandRequest {
    pub fn new(id: i64) -> Self {
        Self {
            id,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct GetBookCommandResponse {
    pub book: BookDto,
    // only present when the lookup failed in strict mode
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub err: String,
}

impl GetBookCommandResponse {
    pub fn new(book: BookDto, err: String) -> Self {
        Self {
            book,
            err,
        }
    }
}

#[async_trait]
impl Command<GetBookCommandRequest, GetBookCommandResponse> for GetBookCommand {
    async fn execute(&self, req: GetBookCommandRequest) -> GetBookCommandResponse {
        let (book, err) = into_reply(self.catalog_service.get_book(req.id).await);
        GetBookCommandResponse::new(book, err)
    }
}
