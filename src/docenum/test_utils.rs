use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Route `tracing` output through the test harness. Filter with `RUST_LOG`.
pub fn init_test_tracing() {
    let _ = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_span_events(FmtSpan::NONE)
        .with_test_writer()
        .try_init();
}
