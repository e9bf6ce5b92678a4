#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use doppel_core::{AppConfig, MockDataset};

/// Doppel - your digital twin dashboard
#[derive(Parser, Debug)]
#[command(name = "doppel-desktop")]
#[command(about = "Doppel - a digital twin built from your online life")]
struct Args {
    /// Config file (defaults to <config dir>/doppel/config.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override how long a sync stays in flight
    #[arg(long)]
    sync_delay_ms: Option<u64>,

    /// Override how long the twin takes to reply
    #[arg(long)]
    chat_delay_ms: Option<u64>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn load_config(args: &Args) -> anyhow::Result<AppConfig> {
    let mut config = match args.config.clone().or_else(AppConfig::default_path) {
        Some(path) => AppConfig::load(&path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => AppConfig::default(),
    };

    if let Some(ms) = args.sync_delay_ms {
        config.sync_delay_ms = ms;
    }
    if let Some(ms) = args.chat_delay_ms {
        config.chat_reply_delay_ms = ms;
    }
    config.validate().context("invalid command line override")?;
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if let Err(e) = doppel_core::logging::init(args.verbose) {
        eprintln!("logging already initialised: {}", e);
    }

    let config = load_config(&args)?;
    let dataset = MockDataset::seed().context("embedded dataset is invalid")?;

    tracing::info!(
        sync_delay_ms = config.sync_delay_ms,
        chat_reply_delay_ms = config.chat_reply_delay_ms,
        "Starting Doppel"
    );

    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&config.window_title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 860.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .with_context(config)
        .with_context(Arc::new(dataset))
        .launch(app::App);

    Ok(())
}
