use std::path::Path;

use anyhow::Context;
use fire_spread::fixtures::random_forest;
use fire_spread::prelude::{Entity, KeyframeConfig, SpreadConfig};
use serde::{Deserialize, Serialize};

/// Demo scene description, loadable from RON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ForestConfig {
    /// Number of trees scattered on the terrain.
    pub trees: usize,
    /// Side length of the square terrain centered on the origin.
    pub terrain_size: f32,
    /// Seed for the tree scatter.
    pub rng_seed: u64,
    /// Id of the tree that ignites first.
    pub seed_tree: String,
    pub spread: SpreadConfig,
    pub keyframes: KeyframeConfig,
}

impl Default for ForestConfig {
    fn default() -> Self {
        Self {
            trees: 300,
            terrain_size: 100.0,
            rng_seed: 2025,
            seed_tree: "Tree_1".into(),
            spread: SpreadConfig::default(),
            keyframes: KeyframeConfig::default(),
        }
    }
}

impl ForestConfig {
    /// Scatters the configured number of trees with the configured seed.
    pub fn scatter_trees(&self) -> Vec<Entity> {
        random_forest(self.trees, self.terrain_size, self.rng_seed)
    }
}

pub fn load_forest_config(path: impl AsRef<Path>) -> anyhow::Result<ForestConfig> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let config = ron::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    Ok(config)
}
