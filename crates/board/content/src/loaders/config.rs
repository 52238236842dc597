//! Board rule configuration loader.

use std::path::Path;

use board_core::BoardConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for board rule configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`BoardConfig::default`].
    pub fn load(path: &Path) -> LoadResult<BoardConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<BoardConfig> {
        let config: BoardConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}
