use std::collections::HashMap;
use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{into_reply, Command};

pub(crate) struct ListBooksCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl ListBooksCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// The request carries nothing, but the body must still be a JSON object.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ListBooksCommandRequest {}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ListBooksCommandResponse {
    pub books: HashMap<String, BookDto>,
    // filled only by catalogs whose listing can fail; the in-memory one never does
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub err: String,
}

impl ListBooksCommandResponse {
    pub fn new(books: HashMap<String, BookDto>, err: String) -> Self {
        Self {
            books,
            err,
        }
    }
}

#[async_trait]
impl Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand {
    async fn execute(&self, _req: ListBooksCommandRequest) -> ListBooksCommandResponse {
        let (books, err) = into_reply(self.catalog_service.list_books().await);
        ListBooksCommandResponse::new(books, err)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;

    #[tokio::test]
    async fn test_should_run_list_books() {
        let svc = factory::create_catalog_service(&Configuration::new()).await.expect("should build catalog");
        let res = ListBooksCommand::new(svc).execute(ListBooksCommandRequest::default()).await;
        assert_eq!(2, res.books.len());
        assert!(res.err.is_empty());

        let json = serde_json::to_value(&res).expect("should encode response");
        assert!(json.get("err").is_none());
        assert_eq!("The Source of Magic", json["books"]["2"]["Title"]);
    }
}
