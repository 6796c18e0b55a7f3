use std::sync::Arc;

use clap::Parser;

use update_hint::cache::FileStore;
use update_hint::registries::NpmRegistry;
use update_hint::{CheckOptions, UpdateChecker};

#[derive(Parser)]
#[command(name = "update-hint")]
#[command(version, about = "Checks whether a newer version of a package is published on npm")]
struct Cli {
    /// Package name as published on the registry
    package: String,

    /// Version the project currently uses (MAJOR.MINOR.PATCH)
    current_version: String,

    /// Ask the registry even if the last check is still fresh
    #[arg(long)]
    no_cache: bool,

    /// How many hours a performed check stays fresh
    #[arg(long, default_value_t = update_hint::config::DEFAULT_CACHE_TIME_HOURS)]
    cache_time: f64,

    /// Registry base URL (defaults to the public npm registry)
    #[arg(long)]
    registry: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only the JSON outcome.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run(cli))
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let checker = match &cli.registry {
        Some(base_url) => UpdateChecker::with_parts(
            Arc::new(NpmRegistry::new(base_url)),
            Arc::new(FileStore::default()),
        ),
        None => UpdateChecker::new(),
    };

    let options = CheckOptions {
        cache: !cli.no_cache,
        cache_time: cli.cache_time,
    };

    let outcome = checker
        .check(&cli.package, &cli.current_version, &options)
        .await?;

    println!("{}", serde_json::to_string_pretty(&outcome)?);

    Ok(())
}
