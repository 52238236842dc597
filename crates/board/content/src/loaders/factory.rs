//! Content factory for loading every board input from a data directory.

use std::path::PathBuf;

use board_core::{BoardConfig, RiskTable};

use crate::loaders::{ConfigLoader, LoadResult, Scenario, ScenarioLoader, TablesLoader};

/// Content factory that loads board content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml      (optional)
/// ├── tables.toml      (optional)
/// └── scenarios/
///     ├── corner.ron
///     └── gauntlet.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load board rules from `config.toml`, or the defaults when absent.
    pub fn load_config(&self) -> LoadResult<BoardConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            return Ok(BoardConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load risk tables from `tables.toml`, or the defaults when absent.
    pub fn load_tables(&self) -> LoadResult<RiskTable> {
        let path = self.data_dir.join("tables.toml");
        if !path.exists() {
            return Ok(RiskTable::default());
        }
        TablesLoader::load(&path)
    }

    /// Load `scenarios/<name>.ron`.
    pub fn load_scenario(&self, name: &str) -> LoadResult<Scenario> {
        let path = self.scenario_path(name);
        ScenarioLoader::load(&path)
    }

    /// Names of every scenario file, sorted.
    pub fn scenario_names(&self) -> LoadResult<Vec<String>> {
        let dir = self.data_dir.join("scenarios");
        let entries = std::fs::read_dir(&dir)
            .map_err(|e| anyhow::anyhow!("Failed to read directory {}: {}", dir.display(), e))?;

        let mut names = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().is_none_or(|ext| ext != "ron") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    fn scenario_path(&self, name: &str) -> PathBuf {
        self.data_dir.join("scenarios").join(format!("{name}.ron"))
    }
}
