use thiserror::Error;

/// Failure of a single probe. Never escapes the prober; it is folded into
/// a `RequestFailed` result.
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error(transparent)]
    Request(#[from] reqwest::Error),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("base URL must not be empty")]
    EmptyBaseUrl,

    #[error("concurrency must be at least 1")]
    ZeroConcurrency,
}
