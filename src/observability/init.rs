//! Tracing initialization and subscriber setup.

use crate::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when neither `RUST_LOG` nor `trace_level` is set.
const DEFAULT_LEVEL: &str = "info";

/// Initializes the global tracing subscriber.
///
/// # Filter Resolution
///
/// 1. `RUST_LOG` environment variable, if set and valid
/// 2. `config.trace_level`, if set and valid
/// 3. `"info"`
///
/// # Initialization Behavior
///
/// Idempotent: only the first call installs a subscriber, later calls (or a
/// subscriber installed by the host) are left alone.
///
/// # Example
///
/// ```rust
/// use cat_gallery::observability::init_tracing;
/// use cat_gallery::Config;
///
/// let config = Config {
///     trace_level: Some("cat_gallery=debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// init_tracing(&config);
///
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let filter = resolve_filter(
        std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref(),
        config.trace_level.as_deref(),
    );

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init();
}

/// Picks the first directive string that parses, falling back to the default.
fn resolve_filter(env: Option<&str>, configured: Option<&str>) -> EnvFilter {
    [env, configured]
        .into_iter()
        .flatten()
        .find_map(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LEVEL))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_takes_precedence_over_config() {
        let filter = resolve_filter(Some("warn"), Some("debug"));
        assert_eq!(filter.to_string(), "warn");
    }

    #[test]
    fn invalid_directives_fall_through() {
        let filter = resolve_filter(Some("cat_gallery=loud"), Some("debug"));
        assert_eq!(filter.to_string(), "debug");

        let filter = resolve_filter(None, Some("cat_gallery=loud"));
        assert_eq!(filter.to_string(), DEFAULT_LEVEL);
    }
}
