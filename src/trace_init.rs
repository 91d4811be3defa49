#[cfg(feature = "trace")]
use std::path::Path;
#[cfg(feature = "trace")]
use std::sync::Once;

#[cfg(feature = "trace")]
static INIT: Once = Once::new();

/// Install a JSON trace subscriber writing to `<log_dir>/korean-sort-trace.jsonl`.
///
/// Filter defaults to `hangul_core=debug`; `RUST_LOG` overrides it.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) {
    INIT.call_once(|| {
        let file_appender = tracing_appender::rolling::never(log_dir, "korean-sort-trace.jsonl");

        tracing_subscriber::fmt()
            .json()
            .with_writer(file_appender)
            .with_target(true)
            .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new("hangul_core=debug,korean_sort=debug")
                }),
            )
            .init();
    });
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &std::path::Path) {}

#[cfg(all(test, feature = "trace"))]
mod tests {
    use tracing::level_filters::{LevelFilter, STATIC_MAX_LEVEL};

    #[test]
    fn test_trace_feature_enables_debug() {
        assert_eq!(STATIC_MAX_LEVEL, LevelFilter::DEBUG);
    }
}
