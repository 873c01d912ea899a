//! Converter configuration.
//!
//! Values are layered: built-in defaults, then an optional TOML file, then
//! whatever the caller overrides (the CLI applies its flags last).
//!
//! ```toml
//! output_dir = "output"
//! max_edges = 500000
//! sample_rate = 0.25
//! seed = 7
//! batch_size = 10000
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ConvertError, Result};
use crate::loader::LoadOptions;

/// Default emitter progress cadence, in nodes or edges.
pub const DEFAULT_BATCH_SIZE: usize = 10_000;

/// Default loader progress cadence, in loaded edges.
pub const DEFAULT_LOAD_PROGRESS_EVERY: usize = 100_000;

/// Settings for one conversion run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConvertConfig {
    /// Directory receiving the Turtle and N-Triples files.
    pub output_dir: PathBuf,
    /// Stop loading once this many edges have been accepted.
    pub max_edges: Option<usize>,
    /// Probability of keeping each well-formed line, in `[0, 1]`.
    pub sample_rate: f64,
    /// Seed for line sampling; `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Emitter progress is logged every `batch_size` nodes and edges.
    pub batch_size: usize,
    /// Loader progress is logged every `load_progress_every` edges.
    pub load_progress_every: usize,
    /// Also write `roadnet_stats.json` next to the RDF files.
    pub stats_json: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("output"),
            max_edges: None,
            sample_rate: 1.0,
            seed: None,
            batch_size: DEFAULT_BATCH_SIZE,
            load_progress_every: DEFAULT_LOAD_PROGRESS_EVERY,
            stats_json: false,
        }
    }
}

impl ConvertConfig {
    /// Reads a TOML config file. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::ReadConfig`] if the file cannot be read and
    /// [`ConvertError::ParseConfig`] if it is not valid for this type.
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| ConvertError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConvertError::ParseConfig {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::InvalidSampleRate`] for a NaN or out-of-range
    /// sample rate and [`ConvertError::InvalidBatchSize`] for a zero cadence.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.sample_rate) {
            return Err(ConvertError::InvalidSampleRate(self.sample_rate));
        }
        if self.batch_size == 0 {
            return Err(ConvertError::InvalidBatchSize("batch_size"));
        }
        if self.load_progress_every == 0 {
            return Err(ConvertError::InvalidBatchSize("load_progress_every"));
        }
        Ok(())
    }

    /// Loader settings derived from this config.
    #[must_use]
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            max_edges: self.max_edges,
            sample_rate: self.sample_rate,
            progress_every: self.load_progress_every,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = ConvertConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.output_dir, PathBuf::from("output"));
        assert_eq!(config.sample_rate, 1.0);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: ConvertConfig =
            toml::from_str("max_edges = 10\nseed = 3\n").expect("partial config parses");
        assert_eq!(config.max_edges, Some(10));
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.batch_size, DEFAULT_BATCH_SIZE);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<ConvertConfig>("sample = 0.5\n").is_err());
    }

    #[test]
    fn out_of_range_sample_rate_is_rejected() {
        for rate in [-0.1, 1.5, f64::NAN] {
            let config = ConvertConfig {
                sample_rate: rate,
                ..ConvertConfig::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConvertError::InvalidSampleRate(_))
            ));
        }
    }

    #[test]
    fn zero_batch_size_is_rejected() {
        let config = ConvertConfig {
            batch_size: 0,
            ..ConvertConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConvertError::InvalidBatchSize("batch_size"))
        ));
    }

    #[test]
    fn reads_config_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("roadnet.toml");
        fs::write(&path, "output_dir = \"rdf\"\nstats_json = true\n").expect("write config");
        let config = ConvertConfig::from_toml_file(&path).expect("config loads");
        assert_eq!(config.output_dir, PathBuf::from("rdf"));
        assert!(config.stats_json);
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let err = ConvertConfig::from_toml_file(Path::new("/nonexistent/roadnet.toml"));
        assert!(matches!(err, Err(ConvertError::ReadConfig { .. })));
    }
}
