mod app;
mod config;
mod db;
mod error;
mod models;
mod service;
mod ui;

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::app::App;
use crate::db::{MemoryStore, ProjectStore};
use crate::service::ProjectService;
use crate::ui::console::Console;

/// Console menu for creating, listing, selecting, updating and deleting projects.
#[derive(Parser, Debug)]
#[command(name = "project-tracker", version, about)]
struct Cli {
    /// Keep projects in memory for this session instead of PostgreSQL
    #[arg(long)]
    memory: bool,

    /// Overrides DATABASE_URL from the environment
    #[arg(long, value_name = "URL")]
    database_url: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the menu on stdout.
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "project_tracker=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let mut config = config::init()?;
    if let Some(url) = cli.database_url {
        config.database_url = Some(url);
    }

    if cli.memory {
        tracing::info!("using in-memory project store");
        run(MemoryStore::default()).await
    } else {
        let db = db::init(&config).await?;
        tracing::info!("database connection established");
        run(db).await
    }
}

async fn run<S: ProjectStore>(store: S) -> Result<()> {
    let console = Console::new(io::stdin().lock(), io::stdout());
    let mut app = App::new(ProjectService::new(store), console);

    app.run().await?;

    Ok(())
}
