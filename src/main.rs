use anyhow::Context;
use award_intervals::config::AppConfig;
use award_intervals::movie::{
    compute_award_intervals, loader, ApiServer, InMemoryMovieStore, MovieService,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, error, trace};

/// Golden Raspberry producer award intervals
#[derive(Parser)]
#[command(name = "award-intervals")]
#[command(about = "Serve min/max producer award intervals from a movie list", long_about = None)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace, -vvv for all)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the movie list and serve the HTTP API (default command)
    Serve {
        /// Path to the `;`-delimited movie list
        #[arg(long, env = "CSV_PATH")]
        csv_path: Option<PathBuf>,

        /// Address to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to bind
        #[arg(short, long)]
        port: Option<u16>,

        /// Path to a TOML configuration file
        #[arg(short = 'c', long)]
        config: Option<PathBuf>,
    },
    /// Print the min/max award intervals as JSON and exit
    Intervals {
        /// Path to the `;`-delimited movie list
        #[arg(long, env = "CSV_PATH")]
        csv_path: PathBuf,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let config_file = match &cli.command {
        Some(Commands::Serve { config, .. }) => config.clone(),
        _ => None,
    };
    let config = match AppConfig::load(config_file.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(config.log_filter(cli.verbose))
        .with_target(cli.verbose >= 2)
        .with_thread_ids(cli.verbose >= 3)
        .with_line_number(cli.verbose >= 3)
        .init();

    debug!("award-intervals started with verbosity level: {}", cli.verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());

    let result = match cli.command {
        Some(Commands::Serve {
            csv_path,
            host,
            port,
            config: _,
        }) => run_serve(config, csv_path, host, port).await,
        Some(Commands::Intervals { csv_path, pretty }) => run_intervals(csv_path, pretty),
        None => run_serve(config, None, None, None).await,
    };

    if let Err(e) = result {
        error!("Fatal error: {:#}", e);
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

async fn run_serve(
    mut config: AppConfig,
    csv_path: Option<PathBuf>,
    host: Option<String>,
    port: Option<u16>,
) -> anyhow::Result<()> {
    if let Some(csv_path) = csv_path {
        config.csv_path = Some(csv_path);
    }
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }
    debug!("Resolved configuration: {:?}", config);

    let service = Arc::new(MovieService::new(Arc::new(InMemoryMovieStore::new())));
    service
        .init(&config)
        .await
        .context("Failed to load movie list")?;

    ApiServer::new(service, config.host, config.port).start().await
}

fn run_intervals(csv_path: PathBuf, pretty: bool) -> anyhow::Result<()> {
    let movies = loader::load_movies_from_path(&csv_path)
        .with_context(|| format!("Failed to load movie list {}", csv_path.display()))?;
    let result = compute_award_intervals(&movies);

    let json = if pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{json}");

    Ok(())
}
