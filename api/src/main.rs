//! Main entry point for the course API server

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use course_api::{
    config::ApiConfig,
    errors::{ApiError, ApiResult},
    schema::export_schema_sdl,
};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

/// course-api: Federated GraphQL API server for course records
#[derive(Debug, Parser)]
#[command(name = "course-api", about = "Federated GraphQL API server for course records", version)]
struct Args {
    /// Increase output verbosity (-v, -vv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,

    /// Optional path to a configuration file
    #[arg(short = 'c', long = "config", value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Command to execute
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Export the GraphQL schema to a file in federation SDL format
    ExportSchema {
        /// Output file path (defaults to stdout if not specified)
        #[arg(short = 'o', long = "output", value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

impl Args {
    /// Loads the configuration file specified by the `--config` argument,
    /// falling back to defaults when none is given.
    fn load_config(&self) -> ApiResult<ApiConfig> {
        let Some(path) = self.config.as_ref() else {
            warn!("no configuration file specified; using default configuration");
            return Ok(ApiConfig::default());
        };

        let file = std::fs::File::open(path)?;
        serde_yaml::from_reader(file).map_err(|e| ApiError::ConfigError(e.to_string()))
    }
}

#[tokio::main]
async fn main() -> ApiResult<()> {
    let args = Args::parse();

    // Initialize tracing subscriber. Precedence: RUST_LOG env > -v flag > default info
    let env_filter = if std::env::var(EnvFilter::DEFAULT_ENV).is_ok() {
        EnvFilter::from_default_env()
    } else {
        match args.verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    fmt().with_env_filter(env_filter).with_target(true).compact().init();

    if let Some(command) = args.command {
        match command {
            Command::ExportSchema { output } => {
                let schema_sdl = export_schema_sdl();

                if let Some(output_path) = output {
                    std::fs::write(&output_path, schema_sdl)?;
                    info!("GraphQL schema exported to: {}", output_path.display());
                } else {
                    println!("{}", schema_sdl);
                }

                return Ok(());
            }
        }
    }

    let config = args.load_config()?;
    course_api::start_server(config).await
}
