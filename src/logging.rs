use tracing_subscriber::EnvFilter;

use crate::error::{Result, TermfolioError};

/// Installs the global fmt subscriber. `RUST_LOG` wins over `fallback`.
pub fn init(fallback: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .map_err(|err| TermfolioError::Logging(err.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|err| TermfolioError::Logging(err.to_string()))
}
