use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;

// BookDto is the book record exchanged with clients and held by the catalog.
// Field names follow the capitalized wire shape: {"ID", "Title", "Author", "Date", "Publisher"}.
// Deserialization expects the lowercased keys produced by `decode_request`, so any letter
// case is accepted on input; absent fields decode to their zero values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "PascalCase", deserialize = "lowercase"), default)]
pub struct BookDto {
    #[serde(rename(serialize = "ID"))]
    pub id: i64,
    pub title: String,
    pub author: String,
    // publication date, kept as free text
    pub date: String,
    pub publisher: String,
}

impl BookDto {
    pub fn new(id: i64, title: &str, author: &str, date: &str, publisher: &str) -> BookDto {
        BookDto {
            id,
            title: title.to_string(),
            author: author.to_string(),
            date: date.to_string(),
            publisher: publisher.to_string(),
        }
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> String {
        self.id.to_string()
    }
}
