//! Logging initialization
//!
//! Diagnostics go to stderr through `tracing`. The filter comes from the
//! `BUDGETS_LOG` environment variable, else from the configuration file.

use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{BudgetsError, BudgetsResult};

/// Environment variable holding a `tracing` filter directive
pub const LOG_ENV: &str = "BUDGETS_LOG";

/// Build the filter: `BUDGETS_LOG` if set and valid, else `fallback`, else "warn"
pub fn build_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global subscriber; call once at startup
pub fn init_logging(fallback_filter: &str) -> BudgetsResult<()> {
    let subscriber = fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(build_filter(fallback_filter))
        .with_target(true)
        .without_time()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| BudgetsError::Config(format!("Failed to initialize logging: {}", e)))?;

    tracing::debug!("budgets-cli v{} started", env!("CARGO_PKG_VERSION"));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_directive() {
        if std::env::var_os(LOG_ENV).is_none() {
            let filter = build_filter("budgets=debug");
            assert_eq!(filter.to_string(), "budgets=debug");
        }
    }
}
