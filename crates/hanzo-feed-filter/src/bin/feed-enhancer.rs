//! CLI for filtering a directory of RSS feeds
//!
//! Usage:
//!   feed-enhancer --i ./feeds --o ./filtered --c ./conf.yaml

use anyhow::{Context, Result};
use clap::Parser;
use hanzo_feed_filter::{FilterConfig, TreeMirror};
use std::path::PathBuf;
use tracing::{error, info};

/// Copy a feed directory, dropping items per the allow/block lists in a YAML config
#[derive(Parser, Debug)]
#[command(name = "feed-enhancer")]
#[command(about = "Filter RSS feed items by allow-list and block-list terms")]
struct Args {
    /// Input directory
    #[arg(short = 'i', long = "i", visible_alias = "input", value_name = "INPUT_DIR")]
    input: PathBuf,

    /// Output directory (created if missing)
    #[arg(short = 'o', long = "o", visible_alias = "output", value_name = "OUTPUT_DIR")]
    output: PathBuf,

    /// YAML config with allowList/blockList; without it files are copied unchanged
    #[arg(short = 'c', long = "c", visible_alias = "config", value_name = "CONFIG_PATH")]
    config: Option<PathBuf>,
}

fn run(args: Args) -> Result<()> {
    let config = args.config.as_ref().and_then(|path| FilterConfig::load(path));
    if config.is_none() {
        info!("no usable config, copying feeds unchanged");
    }

    let stats = TreeMirror::new(config)
        .run(&args.input, &args.output)
        .with_context(|| {
            format!(
                "failed to mirror {} into {}",
                args.input.display(),
                args.output.display()
            )
        })?;

    info!(
        "Done: {} feeds filtered ({}/{} items kept), {} files copied",
        stats.feeds_filtered, stats.items_kept, stats.items_seen, stats.files_copied
    );
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}
