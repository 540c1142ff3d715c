use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use gqlfind::config::{RunConfig, DEFAULT_THREADS};
use gqlfind::discovery::{EndpointProber, Summary, CANDIDATE_PATHS};
use gqlfind::http::HttpClient;
use tracing_subscriber::EnvFilter;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_banner() {
    println!("{}", "  ___  ___  _    ___ _         _ ".bright_magenta());
    println!("{}", " / __|/ _ \\| |  | __(_)_ _  __| |".bright_magenta());
    println!("{}", "| (_ | (_) | |__| _|| | ' \\/ _` |".bright_magenta());
    println!("{}", " \\___|\\__\\_\\____|_| |_|_||_\\__,_|".bright_magenta());
    println!(
        "  {} {}\n",
        "GraphQL Endpoint Finder".bold().white(),
        format!("v{}", VERSION).dimmed()
    );
}

fn parse_threads(value: &str) -> std::result::Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

#[derive(Parser, Debug)]
#[command(name = "gqlfind")]
#[command(author = "giuseppesec")]
#[command(version = VERSION)]
#[command(about = "Check if a URL has a GraphQL endpoint.")]
struct Cli {
    /// Base URL to check
    base_url: String,

    /// Increase output verbosity
    #[arg(short, long)]
    verbose: bool,

    /// Number of threads to use
    #[arg(short, long, default_value_t = DEFAULT_THREADS, value_parser = parse_threads)]
    threads: usize,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing();

    let config = RunConfig::new(cli.base_url, cli.verbose, cli.threads)?;
    let client = HttpClient::new().context("Failed to build HTTP client")?;

    if config.verbose {
        print_banner();
        println!(
            "{} Probing {} paths on {} with {} worker(s)",
            "[*]".cyan(),
            CANDIDATE_PATHS.len(),
            config.base_url,
            config.concurrency
        );
    }

    let prober = EndpointProber::from_config(client, &config);
    let results = prober.run(&config).await;

    prober.reporter().summary(&Summary::from_results(&results));

    Ok(())
}
