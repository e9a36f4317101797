//! carquery - cascading vehicle selection and query front-end.
//!
//! Main entry point for the carquery CLI.

use std::path::PathBuf;

use clap::Parser;
use tracing::{debug, error, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use carquery_config::{carquery_dir, Config, ConfigLoader, ConfigValidator, LoggingConfig};

mod cli;
mod cmd_backend;
mod cmd_query;
mod context;

use cli::{Cli, Commands};
use context::Context;

/// Initialize tracing with console and file output.
///
/// Console output goes to stderr so command output on stdout stays clean.
/// Log files are written to ~/.carquery/logs/ with daily rotation.
fn init_tracing(logging: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_ansi(true)
        .with_filter(console_filter);

    let file = if logging.file {
        let log_dir = logging
            .dir
            .as_ref()
            .map(|d| PathBuf::from(ConfigLoader::expand_path(&d.to_string_lossy())))
            .unwrap_or_else(|| carquery_dir().join("logs"));
        std::fs::create_dir_all(&log_dir)?;

        let file_appender = RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix("carquery")
            .filename_suffix("log")
            .max_log_files(14)
            .build(&log_dir)?;

        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        // The guard flushes on drop; keep it for the life of the process.
        static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
            std::sync::OnceLock::new();
        let _ = GUARD.set(guard);

        Some(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_filter(EnvFilter::new("info")),
        )
    } else {
        None
    };

    tracing_subscriber::registry().with(console).with(file).init();

    Ok(())
}

/// Load the config file, or defaults when the default file is absent.
///
/// An explicitly named file must exist.
fn load_config(path: Option<&PathBuf>) -> Result<Config, Box<dyn std::error::Error>> {
    let config = match path {
        Some(path) => ConfigLoader::load(path)?,
        None => ConfigLoader::load_or_default(&ConfigLoader::default_path())?,
    };
    Ok(config)
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(cli.config.as_ref())?;
    init_tracing(&config.logging)?;

    for warning in ConfigValidator::validate(&config).into_result()? {
        warn!("Config {}: {}", warning.path, warning.message);
    }

    let catalog = ConfigLoader::load_catalog(&config)?;
    debug!("Catalog has {} brands", catalog.brands().len());
    let ctx = Context::new(config, catalog);

    match cli.command {
        Commands::Options { selection, format } => {
            cmd_query::handle_options(&ctx, &selection, &format)
        }
        Commands::Query { selection, query } => cmd_query::handle_query(&ctx, &selection, &query),
        Commands::Ask {
            selection,
            query,
            via_relay,
            expand,
        } => {
            let mut session = ctx.session();
            cmd_backend::handle_ask(&ctx, &mut session, &selection, &query, via_relay, expand)
                .await
        }
        Commands::Format { file, key, expand } => {
            cmd_query::handle_format(&ctx, file.as_deref(), key.as_deref(), expand)
        }
        Commands::Window => cmd_backend::handle_window(&ctx).await,
        Commands::Health => cmd_backend::handle_health(&ctx).await,
    }
}
