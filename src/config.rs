//! Player configuration

use std::path::PathBuf;

/// Configuration for a player session
#[derive(Debug, Clone, Default)]
pub struct PlayerConfig {
    /// Catalog file to load (None = bundled catalog)
    pub catalog_path: Option<PathBuf>,

    /// Seed for random playback (None = seeded from the OS)
    pub seed: Option<u64>,
}

impl PlayerConfig {
    /// Create a configuration using the bundled catalog and an OS seed
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the catalog from a file instead of the bundled one
    pub fn with_catalog(mut self, path: PathBuf) -> Self {
        self.catalog_path = Some(path);
        self
    }

    /// Make random playback reproducible
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
