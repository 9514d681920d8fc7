use thiserror::Error;

/// Top-level error type used across the entire application.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("config error: {0}")]
    Config(String),

    /// The load-average source is missing or malformed.
    #[error("load source error: {0}")]
    Source(String),

    /// Terminal too small (or otherwise unusable) for the graph.
    #[error("{0}")]
    Geometry(String),

    #[error("terminal error: {0}")]
    Terminal(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T, E = LoadError> = std::result::Result<T, E>;
