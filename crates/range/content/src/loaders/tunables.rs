//! Range tunables loader.

use std::path::Path;

use range_core::{FlatCosts, Millis, RangeConfig};

use crate::loaders::{LoadResult, read_file};

/// Host-tunable parameters, deserialized from TOML.
///
/// Fields not present in the file fall back to the shipped defaults, so a
/// tunables file only needs to name what it changes.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RangeTunables {
    pub batch_min: u32,
    pub batch_max: u32,
    pub load_cost_ms: u64,
    pub extract_cost_ms: u64,
}

impl Default for RangeTunables {
    fn default() -> Self {
        let costs = crate::catalog::standard_costs();
        Self {
            batch_min: RangeConfig::DEFAULT_BATCH_MIN,
            batch_max: RangeConfig::DEFAULT_BATCH_MAX,
            load_cost_ms: costs.load.0,
            extract_cost_ms: costs.extract.0,
        }
    }
}

impl RangeTunables {
    /// Core configuration carrying the batch range.
    pub fn config(&self) -> RangeConfig {
        RangeConfig::with_batch_range(self.batch_min, self.batch_max)
    }

    /// Cost oracle carrying the per-operation costs.
    pub fn costs(&self) -> FlatCosts {
        FlatCosts::new(
            Millis::new(self.load_cost_ms),
            Millis::new(self.extract_cost_ms),
        )
    }
}

/// Loader for range tunables from TOML files.
pub struct TunablesLoader;

impl TunablesLoader {
    /// Load tunables from a TOML file.
    pub fn load(path: &Path) -> LoadResult<RangeTunables> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse tunables from TOML text.
    pub fn parse(content: &str) -> LoadResult<RangeTunables> {
        let tunables: RangeTunables = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse tunables TOML: {}", e))?;
        Ok(tunables)
    }
}
