//! `tracing` subscriber bootstrap.
//!
//! Logs go to stderr; stdout is reserved for result lines.

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};

/// Build the filter: a non-empty `RUST_LOG` wins, otherwise the configured level.
///
/// An empty `RUST_LOG` counts as unset.
///
/// # Errors
/// Returns an error if `RUST_LOG` or the configured level is not a valid
/// filter directive.
pub fn build_filter(cfg: &LoggingConfig) -> anyhow::Result<EnvFilter> {
    if let Ok(directives) = std::env::var(EnvFilter::DEFAULT_ENV)
        && !directives.trim().is_empty()
    {
        return EnvFilter::try_new(&directives).map_err(|e| {
            anyhow::anyhow!("invalid {} '{directives}': {e}", EnvFilter::DEFAULT_ENV)
        });
    }
    EnvFilter::try_new(&cfg.level)
        .map_err(|e| anyhow::anyhow!("invalid log level '{}': {e}", cfg.level))
}

/// Install the global subscriber.
///
/// # Errors
/// Returns an error if the filter is invalid or a global subscriber is already set.
pub fn init_logging(cfg: &LoggingConfig) -> anyhow::Result<()> {
    let filter = build_filter(cfg)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    match cfg.format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    }
    .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use figment::Jail;
    use tracing_subscriber::filter::LevelFilter;

    fn logging(level: &str) -> LoggingConfig {
        LoggingConfig {
            level: level.to_owned(),
            format: LogFormat::Text,
        }
    }

    #[test]
    fn test_rejects_invalid_level() {
        Jail::expect_with(|jail| {
            jail.set_env("RUST_LOG", "");
            assert!(build_filter(&logging("calculator=loud")).is_err());
            Ok(())
        });
    }

    #[test]
    fn test_accepts_plain_and_targeted_levels() {
        Jail::expect_with(|jail| {
            jail.set_env("RUST_LOG", "");
            for level in ["warn", "debug", "calculator=trace,info"] {
                assert!(build_filter(&logging(level)).is_ok(), "{level} should parse");
            }
            Ok(())
        });
    }

    #[test]
    fn test_configured_level_used_without_rust_log() {
        Jail::expect_with(|jail| {
            jail.set_env("RUST_LOG", "");
            let filter = build_filter(&logging("warn")).unwrap();
            assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
            Ok(())
        });
    }

    #[test]
    fn test_rust_log_overrides_configured_level() {
        Jail::expect_with(|jail| {
            jail.set_env("RUST_LOG", "trace");
            let filter = build_filter(&logging("warn")).unwrap();
            assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
            Ok(())
        });
    }

    #[test]
    fn test_invalid_rust_log_is_reported() {
        Jail::expect_with(|jail| {
            jail.set_env("RUST_LOG", "calculator=loud");
            let err = build_filter(&logging("warn")).unwrap_err();
            assert!(err.to_string().contains("invalid RUST_LOG 'calculator=loud'"));
            Ok(())
        });
    }
}
