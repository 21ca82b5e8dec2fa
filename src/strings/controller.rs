use axum::{
    body::Bytes,
    extract::State,
    response::Json,
};
use crate::core::controller::{AppState, bind, ServerError};
use crate::strings::command::count_cmd::{CountCommand, CountCommandResponse};
use crate::strings::command::uppercase_cmd::{UppercaseCommand, UppercaseCommandResponse};

pub(crate) async fn uppercase(
    State(state): State<AppState>,
    body: Bytes) -> Result<Json<UppercaseCommandResponse>, ServerError> {
    bind("/uppercase", UppercaseCommand::new(state.string_service), &body).await
}

pub(crate) async fn count(
    State(state): State<AppState>,
    body: Bytes) -> Result<Json<CountCommandResponse>, ServerError> {
    bind("/count", CountCommand::new(state.string_service), &body).await
}
