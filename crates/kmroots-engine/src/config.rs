//! Configuration for construction and output settings.
//!
//! Load order: `kmroots.toml` → environment variables → defaults. CLI
//! flags override all of it at the call site.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KmrootsConfig {
    pub construction: ConstructionConfig,
    pub output: OutputConfig,
}

/// Construction settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstructionConfig {
    /// Resolve the candidates of one height on the rayon pool. The result
    /// is identical either way; sequential mode exists for profiling and
    /// for constrained environments.
    pub parallel: bool,
}

/// Output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// File the root listing is written to, relative to the working
    /// directory. Overwritten silently if it exists.
    pub file: String,
    /// Listing format: "txt" or "json".
    pub format: String,
}

impl Default for ConstructionConfig {
    fn default() -> Self {
        Self { parallel: true }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file: "roots.txt".to_string(),
            format: "txt".to_string(),
        }
    }
}

/// Helper to parse an env var and apply it to a config field.
fn env_override<T: std::str::FromStr>(var: &str, target: &mut T) {
    if let Ok(v) = std::env::var(var)
        && let Ok(n) = v.parse()
    {
        *target = n;
    }
}

impl KmrootsConfig {
    /// Load config from `kmroots.toml` in `dir`, with env var overrides.
    /// Falls back to defaults if no config file exists.
    pub fn load(dir: &Path) -> Result<Self> {
        let config_path = dir.join("kmroots.toml");

        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content)?
        } else {
            Self::default()
        };

        env_override("KMROOTS_PARALLEL", &mut config.construction.parallel);
        env_override("KMROOTS_OUTPUT_FILE", &mut config.output.file);
        env_override("KMROOTS_OUTPUT_FORMAT", &mut config.output.format);

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = KmrootsConfig::load(dir.path()).unwrap();
        assert!(config.construction.parallel);
        assert_eq!(config.output.file, "roots.txt");
        assert_eq!(config.output.format, "txt");
    }

    #[test]
    fn test_partial_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("kmroots.toml"),
            "[output]\nfile = \"ff_roots.txt\"\n",
        )
        .unwrap();

        let config = KmrootsConfig::load(dir.path()).unwrap();
        assert_eq!(config.output.file, "ff_roots.txt");
        // Untouched sections keep their defaults.
        assert!(config.construction.parallel);
        assert_eq!(config.output.format, "txt");
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("kmroots.toml"), "[construction\n").unwrap();
        assert!(KmrootsConfig::load(dir.path()).is_err());
    }
}
