// Fri Oct 16 2026 - Alex

use super::args::Args;
use crate::nid;
use crate::pipeline;
use anyhow::Context;
use std::io;

pub struct CommandHandler;

impl CommandHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, args: Args) -> anyhow::Result<()> {
        self.setup_logging();

        let config = args.into_config();
        config.validate()?;
        log::debug!(
            "config: {}",
            serde_json::to_string(&config).unwrap_or_default()
        );

        let nids = nid::init(&config.nid_db).with_context(|| {
            format!("failed to load NID table {}", config.nid_db.display())
        })?;

        let generation = pipeline::generate(&config, nids)
            .with_context(|| format!("failed to read {}", config.prx.display()))?;

        let stats = generation.function_stats;
        log::debug!(
            "scanned {} symbols: {} resolved, {} unknown, {} malformed",
            stats.scanned,
            stats.resolved,
            stats.unknown,
            stats.malformed
        );

        generation
            .write_to(&mut io::stdout().lock())
            .context("failed to write generated source")?;

        Ok(())
    }

    fn setup_logging(&self) {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
            .format_timestamp(None)
            .target(env_logger::Target::Stderr)
            .init();
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}
