use crate::error::ConfigError;

pub const DEFAULT_THREADS: usize = 10;

/// Settings for one probing run. Fixed once the run starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub base_url: String,
    pub verbose: bool,
    pub concurrency: usize,
}

impl RunConfig {
    pub fn new(
        base_url: impl Into<String>,
        verbose: bool,
        concurrency: usize,
    ) -> Result<Self, ConfigError> {
        let base_url = base_url.into();

        if base_url.trim().is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        if concurrency == 0 {
            return Err(ConfigError::ZeroConcurrency);
        }

        Ok(Self {
            base_url,
            verbose,
            concurrency,
        })
    }
}
