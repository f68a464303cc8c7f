//! App settings
//!
//! Defaults can be overridden through environment variables; the binary takes no
//! command-line arguments.

use std::path::PathBuf;

/// Default data file, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "alimentacao_app_data.json";

/// Data file override
pub const ENV_DATA_FILE: &str = "APRENDER_DATA_FILE";
/// Catalog file override
pub const ENV_CATALOG_FILE: &str = "APRENDER_CATALOG_FILE";
/// Fixed RNG seed for the random tip
pub const ENV_SEED: &str = "APRENDER_SEED";

/// Startup options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Where the username, scores and diary are saved
    pub data_file: PathBuf,
    /// Replaces the built-in tips, recipes and questions when set
    pub catalog_file: Option<PathBuf>,
    /// Seed for tip selection; random when unset
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            catalog_file: None,
            seed: None,
        }
    }
}

impl Settings {
    /// Defaults plus overrides from the process environment
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Defaults plus overrides from `lookup`. Blank values are ignored.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut settings = Self::default();

        if let Some(path) = var(ENV_DATA_FILE) {
            settings.data_file = PathBuf::from(path);
        }
        settings.catalog_file = var(ENV_CATALOG_FILE).map(PathBuf::from);
        if let Some(seed) = var(ENV_SEED) {
            match seed.trim().parse() {
                Ok(seed) => settings.seed = Some(seed),
                Err(_) => log::warn!("Ignoring {}={:?}: not a number", ENV_SEED, seed),
            }
        }

        settings
    }
}
