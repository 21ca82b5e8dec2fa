use std::net::SocketAddr;
use axum::{
    routing::post,
    Router,
};
use tracing::info;
use crate::catalog::controller::{get_book, list_books, put_book};
use crate::core::controller::AppState;
use crate::core::domain::{Configuration, LISTEN_PORT};
use crate::core::errors::ServiceResult;
use crate::strings::controller::{count, uppercase};
use crate::{catalog, strings};

pub type Error = Box<dyn std::error::Error + Send + Sync + 'static>;

// build_router is the dispatch table: one POST route per operation, fixed at startup.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/uppercase", post(uppercase))
        .route("/count", post(count))
        .route("/books", post(list_books))
        .route("/book", post(get_book))
        .route("/setbook", post(put_book))
        .with_state(state)
}

// build_state wires the default services for the given configuration.
pub async fn build_state(config: Configuration) -> ServiceResult<AppState> {
    let string_service = strings::factory::create_string_service();
    let catalog_service = catalog::factory::create_catalog_service(&config).await?;
    Ok(AppState::new(string_service, catalog_service))
}

pub async fn serve(state: AppState) -> Result<(), Error> {
    let app = build_router(state);
    let addr = SocketAddr::from(([0, 0, 0, 0], LISTEN_PORT));
    info!("listening on {}", addr);
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;
    Ok(())
}
