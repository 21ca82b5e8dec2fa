use rpckit::core::domain::Configuration;
use rpckit::server::{build_state, serve, Error};
use rpckit::utils::logs::setup_tracing;

#[tokio::main]
async fn main() -> Result<(), Error> {
    setup_tracing();

    let config = Configuration::new();
    let state = build_state(config).await?;
    serve(state).await
}
