use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use futures::future::try_join_all;
use scylla_cloud::cloud::{ClientConfig, CloudClient, CloudProviderRegion};
use scylla_cloud::config::Config;
use scylla_cloud::output::{render, OutputFormat, TableRow};
use serde::Serialize;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Command-line client for the Scylla Cloud API
#[derive(Parser, Debug)]
#[command(name = "scylla-cloud", version, about, long_about = None)]
struct Args {
    /// API token
    #[arg(long, env = "SCYLLA_CLOUD_TOKEN", hide_env_values = true, global = true)]
    token: Option<String>,

    /// API endpoint
    #[arg(long, env = "SCYLLA_CLOUD_ENDPOINT", global = true)]
    endpoint: Option<String>,

    /// Per-call timeout in seconds
    #[arg(long, env = "SCYLLA_CLOUD_TIMEOUT", global = true)]
    timeout: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    output: Option<OutputFormat>,

    /// Log level for debugging
    #[arg(long, value_enum, default_value = "off", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the account the token belongs to
    Account,
    /// List cloud providers
    Providers,
    /// List the regions of a cloud provider
    Regions {
        /// Provider ID (see `providers`)
        #[arg(required_unless_present = "all")]
        provider_id: Option<i64>,

        /// List regions of every provider
        #[arg(long, conflicts_with = "provider_id")]
        all: bool,
    },
    /// List the clusters of the account
    Clusters,
    /// Store defaults in the config file
    Configure {
        #[arg(long)]
        endpoint: Option<String>,
        #[arg(long)]
        timeout: Option<u64>,
        #[arg(long, value_enum)]
        output: Option<OutputFormat>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }
}

fn setup_logging(level: LogLevel) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let Some(tracing_level) = level.to_tracing_level() else {
        return Ok(None);
    };

    let log_path = get_log_path();
    let file = open_log_file(&log_path)?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    // RUST_LOG wins over --log-level when set
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(tracing_level.to_string().to_lowercase()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("scylla-cloud started with log level: {:?}", level);
    tracing::info!("Log file: {:?}", log_path);

    Ok(Some(guard))
}

/// Open `path` for appending, creating missing parent directories
fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {:?}", parent))?;
    }

    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {:?}", path))
}

fn get_log_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join("scylla-cloud").join("scylla-cloud.log");
    }
    if let Some(home) = dirs::home_dir() {
        return home.join(".scylla-cloud").join("scylla-cloud.log");
    }
    PathBuf::from("scylla-cloud.log")
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let _log_guard = setup_logging(args.log_level)?;

    let mut config = Config::load();

    if let Command::Configure {
        endpoint,
        timeout,
        output,
    } = &args.command
    {
        if let Some(endpoint) = endpoint {
            config.endpoint = Some(endpoint.clone());
        }
        if let Some(timeout) = timeout {
            config.timeout_secs = Some(*timeout);
        }
        if let Some(output) = output {
            config.output = output
                .to_possible_value()
                .map(|v| v.get_name().to_string());
        }
        config.save().context("Failed to save configuration")?;
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let format = args
        .output
        .or_else(|| config.output.as_deref().and_then(OutputFormat::from_name))
        .unwrap_or_default();

    let token = args
        .token
        .clone()
        .context("No API token configured. Set SCYLLA_CLOUD_TOKEN or use --token")?;

    let client_config = ClientConfig::new(token)
        .with_endpoint(config.effective_endpoint(args.endpoint.as_deref()))
        .with_timeout(config.effective_timeout(args.timeout));

    tracing::info!("Using endpoint: {}", client_config.endpoint);

    let client = CloudClient::connect(client_config)
        .await
        .context("Failed to connect to Scylla Cloud")?;

    match args.command {
        Command::Account => print(&[client.account().clone()], format),
        Command::Providers => {
            let providers = client
                .list_cloud_providers()
                .await
                .context("Failed to list cloud providers")?;
            print(&providers, format)
        }
        Command::Regions { provider_id, all } => {
            let regions = if all {
                list_all_regions(&client).await?
            } else {
                let provider_id = provider_id.context("Provider ID is required")?;
                client
                    .list_cloud_provider_regions(provider_id)
                    .await
                    .with_context(|| format!("Failed to list regions of provider {}", provider_id))?
            };
            print(&regions, format)
        }
        Command::Clusters => {
            let clusters = client
                .list_clusters()
                .await
                .context("Failed to list clusters")?;
            print(&clusters, format)
        }
        Command::Configure { .. } => Ok(()),
    }
}

/// Fetch the regions of every provider concurrently
async fn list_all_regions(client: &CloudClient) -> Result<Vec<CloudProviderRegion>> {
    let providers = client
        .list_cloud_providers()
        .await
        .context("Failed to list cloud providers")?;

    let per_provider = try_join_all(
        providers
            .iter()
            .map(|p| client.list_cloud_provider_regions(p.id)),
    )
    .await
    .context("Failed to list regions")?;

    Ok(per_provider.into_iter().flatten().collect())
}

fn print<T: Serialize + TableRow>(items: &[T], format: OutputFormat) -> Result<()> {
    println!("{}", render(items, format)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_log_file_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a").join("b").join("scylla-cloud.log");

        open_log_file(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_open_log_file_reports_unusable_parent() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();

        let err = open_log_file(&blocker.join("scylla-cloud.log")).unwrap_err();
        assert!(err.to_string().contains("Failed to create log directory"));
    }
}
