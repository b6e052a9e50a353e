//! poweq server
//!
//! REST API server for the `x^n = K * m^x` root finder.

use clap::Parser;
use poweq_server::config::{build_config, env_vars, CliArgs as ConfigCliArgs};
use poweq_server::server::Server;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// poweq server - REST API for solving x^n = K * m^x
#[derive(Parser, Debug)]
#[command(name = "poweq_server")]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file path (TOML format)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Host address to bind to
    #[arg(long, env = env_vars::HOST)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = env_vars::PORT)]
    port: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = env_vars::LOG_LEVEL)]
    log_level: Option<String>,

    /// Algorithm for requests that name none (newton, bisection, auto)
    #[arg(long, env = env_vars::DEFAULT_ALGORITHM)]
    default_algorithm: Option<String>,

    /// Largest batch accepted by /solve/batch
    #[arg(long, env = env_vars::MAX_BATCH_SIZE)]
    max_batch_size: Option<usize>,
}

impl From<Args> for ConfigCliArgs {
    fn from(args: Args) -> Self {
        ConfigCliArgs {
            config_file: args.config,
            host: args.host,
            port: args.port,
            log_level: args.log_level,
            default_algorithm: args.default_algorithm,
            max_batch_size: args.max_batch_size,
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let cli_args: ConfigCliArgs = args.into();
    let config = build_config(&cli_args)?;

    init_tracing(config.log_level.as_filter_str());

    tracing::info!("poweq server v{}", poweq_server::VERSION);
    tracing::info!(
        host = %config.host,
        port = %config.port,
        log_level = %config.log_level,
        default_algorithm = %config.default_algorithm,
        max_batch_size = config.max_batch_size,
        report_failures = config.report_failures,
        environment = %config.environment,
        "Server configuration loaded"
    );

    let server = Server::new(config);
    server.run().await?;

    Ok(())
}
