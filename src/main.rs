use clap::Parser;
use tracing_subscriber::EnvFilter;

use bloggy::commands;
use bloggy::config::{Cli, Config};
use bloggy::db;
use bloggy::error::AppError;
use bloggy::state::AppState;
use bloggy::storage::Storage;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so command output stays clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load(&cli)?;

    let db_path = config
        .db_path()
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("No database path configured"))?;
    tracing::debug!("Database: {}", db_path.display());

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;

    let state = match AppState::new(Storage::sqlite(pool), config) {
        Ok(state) => state,
        Err(e) => fail(e),
    };

    match commands::run(&state, cli.command) {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => fail(e),
    }
}

fn fail(err: AppError) -> ! {
    eprintln!("{}", err.user_message());
    std::process::exit(err.exit_code());
}
