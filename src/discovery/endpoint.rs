use super::detection::{classify, detection_body, Outcome};
use crate::config::RunConfig;
use crate::http::Transport;
use crate::output::Reporter;
use futures::stream::{self, StreamExt};
use std::error::Error;
use tracing::debug;

pub const CANDIDATE_PATHS: &[&str] = &[
    "/graphql/console",
    "/api",
    "/api/graphql",
    "/graphql/api",
    "/graphql/graphql",
    "/v1/explorer",
    "/v1/graphiql",
    "/graph",
    "/graphql",
    "/graphql/",
    "/graphql/console/",
    "/graphql.php",
    "/graphiql",
    "/graphiql.php",
];

/// Joins a base URL and a candidate path without doubling the slash.
pub fn build_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    pub url: String,
    pub outcome: Outcome,
    /// HTTP status, absent when the request itself failed.
    pub status: Option<u16>,
    pub error: Option<String>,
}

impl ProbeResult {
    pub fn is_confirmed(&self) -> bool {
        self.outcome == Outcome::Confirmed
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub confirmed: usize,
    pub not_graphql: usize,
    pub failed: usize,
}

impl Summary {
    pub fn from_results(results: &[ProbeResult]) -> Self {
        results.iter().fold(Self::default(), |mut summary, result| {
            match result.outcome {
                Outcome::Confirmed => summary.confirmed += 1,
                Outcome::NotGraphQL => summary.not_graphql += 1,
                Outcome::RequestFailed => summary.failed += 1,
            }
            summary
        })
    }

    pub fn total(&self) -> usize {
        self.confirmed + self.not_graphql + self.failed
    }
}

// reqwest keeps the useful part ("Connection refused") in the source chain
fn describe(err: &dyn Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();

    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }

    message
}

pub struct EndpointProber<T> {
    transport: T,
    reporter: Reporter,
}

impl<T: Transport> EndpointProber<T> {
    pub fn new(transport: T, reporter: Reporter) -> Self {
        Self { transport, reporter }
    }

    pub fn from_config(transport: T, config: &RunConfig) -> Self {
        Self::new(transport, Reporter::new(config.verbose))
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn reporter(&self) -> &Reporter {
        &self.reporter
    }

    /// Sends the detection query to one candidate path. Never fails: transport
    /// errors come back as a `RequestFailed` result.
    pub async fn probe(&self, base_url: &str, path: &str) -> ProbeResult {
        let url = build_url(base_url, path);

        self.reporter.checking(&url);
        debug!(url = %url, "sending detection query");

        match self.transport.post_json(&url, &detection_body()).await {
            Ok(response) => {
                self.reporter.status(&url, response.status);

                let outcome = classify(&response);
                debug!(url = %url, status = response.status, %outcome, "probe classified");

                if outcome == Outcome::Confirmed {
                    self.reporter.confirmed(&url);
                } else {
                    self.reporter.negative(&url);
                }

                ProbeResult {
                    url,
                    outcome,
                    status: Some(response.status),
                    error: None,
                }
            }
            Err(e) => {
                let error = describe(&e);
                debug!(url = %url, error = %error, "probe failed");
                self.reporter.failed(&url, &error);

                ProbeResult {
                    url,
                    outcome: Outcome::RequestFailed,
                    status: None,
                    error: Some(error),
                }
            }
        }
    }

    /// Probes every entry of `CANDIDATE_PATHS`.
    pub async fn run(&self, config: &RunConfig) -> Vec<ProbeResult> {
        self.run_paths(config, CANDIDATE_PATHS).await
    }

    /// Probes `paths` with at most `config.concurrency` requests in flight
    /// and returns once all of them have finished, in completion order.
    pub async fn run_paths(&self, config: &RunConfig, paths: &[&str]) -> Vec<ProbeResult> {
        debug!(
            base_url = %config.base_url,
            paths = paths.len(),
            concurrency = config.concurrency,
            "starting run"
        );

        stream::iter(paths.iter().copied())
            .map(|path| self.probe(&config.base_url, path))
            .buffer_unordered(config.concurrency.max(1))
            .collect::<Vec<_>>()
            .await
    }
}
