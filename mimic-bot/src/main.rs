//! Line-oriented driver for the bot.
//!
//! Reads `<guild> <author> <text>` lines from stdin and prints replies. An
//! optional first argument names a TOML config file.

use std::sync::Arc;

use anyhow::{Context, Result};
use mimic_bot::{driver, Bot};
use mimic_core::MimicConfig;
use mimic_export::HastebinSink;
use mimic_registry::ModelRegistry;
use tokio::io::BufReader;
use tracing::info;

const BOT_USER_ID: u64 = 0;

#[tokio::main]
async fn main() -> Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config file {path}"))?;
            MimicConfig::from_toml(&text)?
        }
        None => MimicConfig::default(),
    };
    mimic_observability::init_tracing(&config.observability)?;

    let registry = Arc::new(ModelRegistry::new(&config));
    let sink = HastebinSink::new(&config.export)?;
    let bot = Bot::new(Arc::clone(&registry), sink, config.commands.clone(), BOT_USER_ID);
    info!(version = mimic_core::constants::VERSION, "mimic started");

    driver::run(&bot, BufReader::new(tokio::io::stdin()), std::io::stdout())
        .await
        .context("reading stdin")?;

    registry.shutdown().await;
    Ok(())
}
