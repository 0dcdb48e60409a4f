use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, TermfolioError>;

#[derive(Debug, thiserror::Error)]
pub enum TermfolioError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid portfolio data: {0}")]
    RegistryParse(#[from] serde_json::Error),

    /// The data parsed but breaks a registry rule (empty or duplicate ids).
    #[error("invalid portfolio data: {0}")]
    RegistryInvalid(String),

    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
