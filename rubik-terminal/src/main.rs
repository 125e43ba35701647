/// Rubik Terminal - Interactive 3x3x3 cube
///
/// Controls:
///   - Drag on a cubelet: turn its layer (horizontal drag about Y, vertical about X)
///   - Move the mouse: steer the whole cube
///   - Q/ESC: Quit
use anyhow::Context;
use clap::Parser;
use rubik_terminal::{TerminalApp, TerminalConfig};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "rubik-terminal", about = "Interactive Rubik's cube in the terminal")]
struct Args {
    /// TOML file with [engine] and [display] sections
    #[arg(long)]
    config: Option<PathBuf>,
    /// Write logs to this file (the terminal itself is owned by the renderer)
    #[arg(long)]
    log_file: Option<PathBuf>,
    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_filter: String,
    /// Override the target frame rate
    #[arg(long)]
    fps: Option<u32>,
}

fn init_logging(log_file: Option<&Path>, filter: &str) -> anyhow::Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref(), &args.log_filter)?;

    let mut config = match &args.config {
        Some(path) => TerminalConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => TerminalConfig::default(),
    };
    if let Some(fps) = args.fps {
        config.display.fps = fps;
        config.validate().context("invalid --fps")?;
    }

    println!("Rubik Terminal - Loading...");
    tracing::info!(?config, "starting terminal cube");

    let mut app = TerminalApp::new(config)?;
    app.run()?;

    println!("Solved or not, thanks for turning!");
    Ok(())
}
