pub mod command {
    pub mod get_book_cmd;
    pub mod list_books_cmd;
    pub mod put_book_cmd;
}
pub mod controller;
pub mod domain;
pub mod factory;
