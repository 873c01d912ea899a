//! Error type for the conversion pipeline.

use std::io;
use std::path::PathBuf;

/// Errors that abort a conversion run.
///
/// Malformed edge list lines are not errors; the loader skips them.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// The input edge list could not be opened or read.
    #[error("failed to read input {}", path.display())]
    ReadInput {
        /// Input path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The output directory could not be created.
    #[error("failed to create output directory {}", path.display())]
    CreateOutputDir {
        /// Directory path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A serialized artifact could not be written.
    #[error("failed to write {}", path.display())]
    WriteOutput {
        /// File path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The statistics report could not be encoded as JSON.
    #[error("failed to encode statistics as JSON")]
    WriteStats(#[from] serde_json::Error),

    /// A configuration file could not be read.
    #[error("failed to read config {}", path.display())]
    ReadConfig {
        /// Config path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A configuration file is not valid TOML for [`crate::ConvertConfig`].
    #[error("invalid config {}", path.display())]
    ParseConfig {
        /// Config path.
        path: PathBuf,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },

    /// The sample rate is NaN or outside `[0, 1]`.
    #[error("sample rate must be within [0, 1], got {0}")]
    InvalidSampleRate(f64),

    /// A progress cadence of zero was configured.
    #[error("{0} must be greater than zero")]
    InvalidBatchSize(&'static str),
}

/// Convenience alias for results in this crate.
pub type Result<T> = std::result::Result<T, ConvertError>;
