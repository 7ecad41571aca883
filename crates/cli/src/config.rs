//! CLI runtime configuration from the process environment.
use std::env;
use std::path::PathBuf;

use crate::output::OutputFormat;

#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    /// Content directory. `None` means built-in content only.
    pub data_dir: Option<PathBuf>,
    pub output: OutputFormat,
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `RANKED_DATA_DIR` - Content directory (default: platform data dir, if it exists)
    /// - `RANKED_OUTPUT` - `text` or `json` (default: text)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        config.data_dir = lookup("RANKED_DATA_DIR")
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
            .or_else(crate::dirs::existing_data_dir);

        if let Some(format) = lookup("RANKED_OUTPUT") {
            match format.parse() {
                Ok(format) => config.output = format,
                Err(_) => tracing::warn!("ignoring unknown RANKED_OUTPUT value: {format}"),
            }
        }

        config
    }
}
