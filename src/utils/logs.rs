pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        // plain output so log collectors don't receive ANSI color codes.
        .with_ansi(false)
        // collectors stamp their own ingestion time.
        .without_time()
        .json()
        .init();
}
