use axum::{
    body::Bytes,
    extract::State,
    response::Json,
};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandResponse};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandResponse};
use crate::catalog::command::put_book_cmd::{PutBookCommand, PutBookCommandResponse};
use crate::core::controller::{AppState, bind, ServerError};

pub(crate) async fn list_books(
    State(state): State<AppState>,
    body: Bytes) -> Result<Json<ListBooksCommandResponse>, ServerError> {
    bind("/books", ListBooksCommand::new(state.catalog_service), &body).await
}

pub(crate) async fn get_book(
    State(state): State<AppState>,
    body: Bytes) -> Result<Json<GetBookCommandResponse>, ServerError> {
    bind("/book", GetBookCommand::new(state.catalog_service), &body).await
}

pub(crate) async fn put_book(
    State(state): State<AppState>,
    body: Bytes) -> Result<Json<PutBookCommandResponse>, ServerError> {
    bind("/setbook", PutBookCommand::new(state.catalog_service), &body).await
}
