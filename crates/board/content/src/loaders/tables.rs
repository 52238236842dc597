//! Risk table loader.
//!
//! Every key is optional; omitted tables keep their [`RiskTable::default`]
//! values. Threat tables are written either as explicit probabilities
//! indexed by threat count or as a six-sided die target:
//!
//! ```toml
//! risky_step = { target = 2 }
//! evade = [0.6667, 0.5, 0.3333, 0.1667]
//! pickup = { target = 4 }
//! ```

use std::path::Path;

use board_core::{Probability, RiskTable, ThreatTable};
use serde::Deserialize;

use crate::loaders::{LoadResult, read_file};

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum ThreatSpec {
    Target { target: u8 },
    Entries(ThreatTable),
}

impl ThreatSpec {
    fn into_table(self) -> ThreatTable {
        match self {
            ThreatSpec::Target { target } => ThreatTable::d6(target),
            ThreatSpec::Entries(table) => table,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum ChanceSpec {
    Target { target: u8 },
    Value(Probability),
}

impl ChanceSpec {
    fn into_probability(self) -> Probability {
        match self {
            ChanceSpec::Target { target } => Probability::d6(target),
            ChanceSpec::Value(probability) => probability,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct TablesToml {
    evade: Option<ThreatSpec>,
    pickup: Option<ThreatSpec>,
    risky_step: Option<ChanceSpec>,
}

/// Loader for risk tables from TOML files.
pub struct TablesLoader;

impl TablesLoader {
    /// Load and validate a risk table from a TOML file.
    pub fn load(path: &Path) -> LoadResult<RiskTable> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid tables {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<RiskTable> {
        let data: TablesToml = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse tables TOML: {}", e))?;

        let mut table = RiskTable::default();
        if let Some(evade) = data.evade {
            table = table.with_evade(evade.into_table());
        }
        if let Some(pickup) = data.pickup {
            table = table.with_pickup(pickup.into_table());
        }
        if let Some(risky_step) = data.risky_step {
            table = table.with_risky_step(risky_step.into_probability());
        }

        table.validate()?;
        Ok(table)
    }

    /// Renders a table as explicit probabilities, readable by [`Self::parse`].
    pub fn render(table: &RiskTable) -> LoadResult<String> {
        toml::to_string(table).map_err(|e| anyhow::anyhow!("Failed to render tables TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use board_core::CheckKind;

    use super::*;

    #[test]
    fn empty_file_yields_default_table() {
        assert_eq!(TablesLoader::parse("").unwrap(), RiskTable::default());
    }

    #[test]
    fn accepts_targets_and_explicit_entries() {
        let table = TablesLoader::parse(
            r#"
            risky_step = 0.75
            evade = [1.0, 0.5, 0.25]
            pickup = { target = 4 }
            "#,
        )
        .unwrap();

        assert_eq!(table.risky_step.value(), 0.75);
        assert_eq!(table.probability(CheckKind::Evade, 1).value(), 0.5);
        assert_eq!(table.probability(CheckKind::Evade, 6).value(), 0.25);
        assert_eq!(table.probability(CheckKind::Pickup, 0).value(), 0.5);
        assert_eq!(table.probability(CheckKind::Pickup, 1).value(), 2.0 / 6.0);
    }

    #[test]
    fn rejects_out_of_range_probabilities() {
        assert!(TablesLoader::parse("risky_step = 1.5").is_err());
        assert!(TablesLoader::parse("evade = [0.5, -0.1]").is_err());
    }

    #[test]
    fn rejects_tables_that_fail_validation() {
        let error = TablesLoader::parse("evade = [0.5, 0.9]").unwrap_err();
        assert!(error.to_string().contains("evade"), "{error}");

        assert!(TablesLoader::parse("risky_step = 1.0").is_err());
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(TablesLoader::parse("dodge = 0.5").is_err());
    }

    #[test]
    fn rendered_tables_parse_back() {
        let table = RiskTable::default().with_risky_step(Probability::d6(3));
        let rendered = TablesLoader::render(&table).unwrap();
        assert_eq!(TablesLoader::parse(&rendered).unwrap(), table);
    }
}
