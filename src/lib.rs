pub mod config;
pub mod discovery;
pub mod error;
pub mod http;
pub mod output;

pub use config::RunConfig;
pub use discovery::{EndpointProber, Outcome, ProbeResult, CANDIDATE_PATHS};
pub use error::{ConfigError, ProbeError};
pub use http::{HttpClient, Transport};
pub use output::Reporter;
