use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use backlog::cli::args::{Cli, Commands};
use backlog::cli::commands;
use backlog::config::{Config, Paths};
use backlog::logging::{init_tracing, TracingConfig};
use backlog::storage::{Database, SqliteDatastore};
use backlog::Backlog;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {e:#}", "error".red().bold());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(TracingConfig {
        verbose: cli.verbose,
    })?;

    let paths = Paths::default();
    let config = match &cli.config {
        Some(path) => Config::load_required(path)?,
        None => Config::load_from_path(&paths.config_file)?,
    };
    config.general.color.apply();
    let format = cli.output.unwrap_or(config.general.default_output);

    let open = || -> Result<Backlog<SqliteDatastore>> {
        let db = match cli.db.as_ref().or(config.storage.database.as_ref()) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "opening database");
                Database::open_at(path)?
            }
            None => {
                tracing::debug!(path = %paths.database.display(), "opening default database");
                Database::open(&paths)?
            }
        };
        Ok(Backlog::new(SqliteDatastore::new(db)))
    };

    let output = match &cli.command {
        Commands::Add(args) => commands::add(&open()?, args, format)?,
        Commands::Remove { id } => commands::remove(&open()?, id, format)?,
        Commands::List => commands::list(&open()?, format)?,
        Commands::Sprint { capacity } => commands::sprint(
            &open()?,
            capacity.as_deref(),
            config.sprint.default_capacity,
            format,
        )?,
        Commands::Completions { shell } => commands::completions(*shell)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
