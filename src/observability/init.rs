//! Tracing initialization and subscriber setup.

use super::file_writer::RotatingFile;
use crate::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when neither `RUST_LOG` nor `trace_level` is set.
const DEFAULT_LEVEL: &str = "info";

/// Installs the global tracing subscriber.
///
/// Human-readable events go to stderr. When `config.log_file` is set, the same
/// events are also written as JSON lines to a size-rotated file.
///
/// # Level Resolution
///
/// 1. `RUST_LOG` environment variable
/// 2. `config.trace_level`
/// 3. `"info"`
///
/// Idempotent: only the first call in a process installs a subscriber; later
/// calls return `false`.
///
/// # Example
///
/// ```rust
/// use reelscope::observability::init_tracing;
/// use reelscope::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) -> bool {
    let filter = resolve_filter(std::env::var("RUST_LOG").ok().as_deref(), config.trace_level.as_deref());

    let file_layer = config.log_file.as_ref().map(|path| {
        fmt::layer()
            .json()
            .with_ansi(false)
            .with_writer(RotatingFile::new(path.clone()))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(file_layer)
        .try_init()
        .is_ok()
}

/// Builds the filter from the environment directive, then the configured level.
///
/// Invalid directives fall through to the next source.
fn resolve_filter(env: Option<&str>, configured: Option<&str>) -> EnvFilter {
    [env, configured]
        .into_iter()
        .flatten()
        .filter(|directive| !directive.trim().is_empty())
        .find_map(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LEVEL))
}
