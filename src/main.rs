//! Reelhouse server - main entry point
//!
//! Runs the development HTTP server over a SQLite movie database.

use anyhow::Context;
use clap::Parser;
use reelhouse::catalog::config::Config;
use reelhouse::catalog::database::Database;
use reelhouse::catalog::routes::{create_router, AppState};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "reelhouse")]
#[command(version)]
#[command(about = "SQLite-backed movie catalog web app", long_about = None)]
struct Cli {
    /// Path to the SQLite database file
    #[arg(short, long)]
    database: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// JSON config file (flags take precedence over its values)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("reelhouse=info,tower_http=info")),
        )
        .init();

    if let Err(e) = serve(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

#[tokio::main]
async fn serve(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => {
            Config::load(path).with_context(|| format!("loading {}", path.display()))?
        }
        None => Config::default(),
    };

    // Flag > config file > built-in default.
    let db_path = cli.database.unwrap_or(config.database.path);
    let host = cli.host.unwrap_or(config.server.host);
    let port = cli.port.unwrap_or(config.server.port);

    let db = Database::open(&db_path)
        .with_context(|| format!("opening database {}", db_path.display()))?;
    let state = AppState { db: Arc::new(db) };
    let app = create_router(state);

    let addr = format!("{host}:{port}");
    tracing::info!(database = %db_path.display(), "serving movie catalog");
    println!("Reelhouse dev server");
    println!("   Database:  {}", db_path.display());
    println!("   Listening: http://{addr}");
    println!("   Press Ctrl+C to stop");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
