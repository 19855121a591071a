#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::{Context, Result};
use birthday_core::{parse_target, GreetingConfig, RevealStyle};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Initial window size; the card also uses it until the first resize event
pub const WINDOW_WIDTH: f64 = 900.0;
pub const WINDOW_HEIGHT: f64 = 1000.0;

/// Global greeting config, resolved once from the command line
static GREETING: OnceLock<GreetingConfig> = OnceLock::new();

/// Get the greeting config (resolved at startup or the built-in default)
pub fn get_greeting() -> GreetingConfig {
    GREETING.get().cloned().unwrap_or_default()
}

/// Default config location: <config dir>/birthday-greeting/greeting.toml
fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("birthday-greeting")
        .join("greeting.toml")
}

/// Birthday Greeting - countdown, gift box and card
#[derive(Parser, Debug)]
#[command(name = "birthday-desktop")]
#[command(about = "Birthday Greeting - a countdown that opens into a birthday card")]
struct Args {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Greeting config file (default: <config dir>/birthday-greeting/greeting.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the target instant (RFC 3339, e.g. 2025-07-18T00:00:00+08:00)
    #[arg(short, long, conflicts_with = "in_seconds")]
    target: Option<String>,

    /// Count down from now for this many seconds instead of to the target
    #[arg(long)]
    in_seconds: Option<u32>,

    /// Reveal style: inline or waiting-screen
    #[arg(short, long)]
    reveal: Option<RevealStyle>,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

/// Load the config file (if any) and apply command-line overrides.
fn resolve_greeting(args: &Args) -> Result<GreetingConfig> {
    let mut greeting = match &args.config {
        Some(path) => GreetingConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => {
            let path = default_config_path();
            if path.exists() {
                GreetingConfig::load(&path)
                    .with_context(|| format!("Failed to load config {}", path.display()))?
            } else {
                tracing::info!("No config at {:?}, using built-in greeting", path);
                GreetingConfig::default()
            }
        }
    };

    if let Some(ref target) = args.target {
        let target = parse_target(target).context("Bad --target")?;
        greeting = greeting.with_target(target);
    } else if let Some(seconds) = args.in_seconds {
        let target = chrono::Local::now().fixed_offset()
            + chrono::TimeDelta::seconds(i64::from(seconds));
        greeting = greeting.with_target(target);
    }

    if let Some(reveal) = args.reveal {
        greeting = greeting.with_reveal(reveal);
    }

    Ok(greeting)
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    let greeting = resolve_greeting(&args)?;

    let title = format!("Happy Birthday, {}!", greeting.recipient);

    tracing::info!(
        recipient = %greeting.recipient,
        target_instant = %greeting.target.to_rfc3339(),
        reveal = ?greeting.reveal,
        "Starting birthday greeting"
    );

    // Store config globally
    let _ = GREETING.set(greeting);

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
