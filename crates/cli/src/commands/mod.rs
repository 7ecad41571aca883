//! Command implementations for the `ranked` CLI
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod award;
mod catalog;
mod leaderboard;
mod login;
mod multipliers;
mod rank;

pub use award::Award;
pub use catalog::Catalog;
pub use leaderboard::Leaderboard;
pub use login::Login;
pub use multipliers::Multipliers;
pub use rank::Rank;

use anyhow::{Context as _, Result};
use ranked_content::{Content, ContentFactory};
use ranked_core::{TriggerCatalog, XpAwardEngine};

use crate::config::CliConfig;
use crate::output::OutputFormat;

/// Loaded content plus output settings shared by every command.
pub struct Context {
    pub content: Content,
    pub output: OutputFormat,
}

impl Context {
    pub fn load(config: &CliConfig) -> Result<Self> {
        let content = match &config.data_dir {
            Some(dir) => ContentFactory::new(dir)
                .load_all()
                .with_context(|| format!("Failed to load content from {}", dir.display()))?,
            None => {
                tracing::debug!("no data directory configured, using built-in content");
                Content::builtin()
            }
        };

        Ok(Self {
            content,
            output: config.output,
        })
    }

    pub fn engine(&self) -> XpAwardEngine<'_, TriggerCatalog> {
        XpAwardEngine::new(&self.content.triggers)
    }
}
