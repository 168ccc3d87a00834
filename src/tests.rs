mod codecs;
mod config;

/// Routes library logs to the test output. Safe to call from every test.
fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}
