use thiserror::Error;

/// Top-level error type used across the entire application.
///
/// None of the metric-mapping computations fail; errors only come from
/// reading and parsing the config file.
#[derive(Debug, Error)]
pub enum DialError {
    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T, E = DialError> = std::result::Result<T, E>;
