use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use mtx_core::paths::MATRIX_DIR;

mod bootstrap;
mod cli;
mod commands;
mod context;
mod output;
mod ui;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("mtx error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    // Schemas need no project; they default to JSON.
    if let cli::Commands::Schema(args) = &cli.command {
        let flags = cli.global_flags(cli::OutputFormat::Json);
        ui::init(&flags);
        return commands::schema::handle(args, &flags);
    }

    let project_root =
        resolve_project_root(cli.project.as_deref(), matches!(cli.command, cli::Commands::Rpc))?;
    let config = bootstrap::load_config(&project_root)?;
    let flags = cli.global_flags(bootstrap::default_format(&config)?);
    ui::init(&flags);

    let ctx = context::AppContext::new(project_root, config);
    commands::dispatch::dispatch(cli.command, &ctx, &flags).await
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("MATRIX_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    // stdout carries command output and rpc responses.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

fn resolve_project_root(project_override: Option<&str>, lenient: bool) -> anyhow::Result<PathBuf> {
    if let Some(path) = project_override {
        let explicit = PathBuf::from(path);

        if explicit
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name == MATRIX_DIR)
        {
            return explicit
                .parent()
                .map(Path::to_path_buf)
                .context("invalid --project path: '.matrix' directory has no parent");
        }

        if explicit.is_dir() {
            return Ok(explicit);
        }

        anyhow::bail!(
            "invalid --project '{}': directory does not exist",
            explicit.display()
        );
    }

    let start = std::env::current_dir().context("failed to read current directory")?;
    if let Some(root) = context::find_project_root(&start) {
        return Ok(root);
    }
    if lenient {
        tracing::warn!(
            cwd = %start.display(),
            "no .matrix directory found; requests without a document will fail to load"
        );
        return Ok(start);
    }
    anyhow::bail!("not a matrix project (no .matrix directory found from {})", start.display())
}
