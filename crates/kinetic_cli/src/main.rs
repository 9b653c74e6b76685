//! Kinetic CLI
//!
//! Run scripted headless sessions of the app and dump the design tokens.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use kinetic_app::{App, AppConfig, CONFIG_FILE};
use kinetic_core::TracingSink;
use kinetic_theme::Theme;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod session;

#[derive(Parser)]
#[command(name = "kinetic")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Kinetic headless app runner", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the app headless and walk a list of routes
    Run {
        /// Config file (defaults to ./kinetic.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Route to visit, in order; `back` pops the stack
        #[arg(short, long = "route")]
        routes: Vec<String>,

        /// Frames to run after launch and after each step
        #[arg(short, long, default_value = "60")]
        frames: u32,
    },

    /// Print the design tokens
    Theme {
        #[arg(short, long, value_enum, default_value = "toml")]
        format: TokenFormat,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TokenFormat {
    Toml,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.command {
        Commands::Run { config, .. } => load_config(config.as_deref())?,
        Commands::Theme { .. } => AppConfig::default(),
    };

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.filter))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match cli.command {
        Commands::Run { routes, frames, .. } => cmd_run(config, &routes, frames),
        Commands::Theme { format } => cmd_theme(format),
    }
}

/// Explicit paths must exist; the default file is optional
fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    match path {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None if Path::new(CONFIG_FILE).exists() => AppConfig::load(Path::new(CONFIG_FILE))
            .with_context(|| format!("failed to load {CONFIG_FILE}")),
        None => Ok(AppConfig::default()),
    }
}

fn cmd_run(config: AppConfig, routes: &[String], frames: u32) -> Result<()> {
    let steps = session::parse_steps(routes)?;
    let mut app = App::new(config, Theme::midnight(), Arc::new(TracingSink))
        .context("failed to launch app")?;

    session::run(&mut app, &steps, frames);

    if app.is_animating() {
        warn!("animations still running after {} frames per step", frames);
    }
    info!(
        "Session finished at {} after {:.0} ms",
        app.current_route(),
        app.scheduler().now_ms()
    );

    print!("{}", app.render().outline());
    Ok(())
}

fn cmd_theme(format: TokenFormat) -> Result<()> {
    let theme = Theme::midnight();
    let dump = match format {
        TokenFormat::Toml => theme.to_toml(),
        TokenFormat::Json => theme.to_json(),
    }
    .context("failed to serialize theme tokens")?;
    println!("{dump}");
    Ok(())
}
