//! Error types for muestral.
//!
//! All fallible operations return `Result<T, StatError>` instead of
//! panicking; errors propagate to the CLI, which prints them and exits
//! non-zero. There are no internal recovery paths.

use thiserror::Error;

/// Result type alias for muestral operations.
pub type StatResult<T> = Result<T, StatError>;

/// Unified error type for all muestral operations.
#[derive(Debug, Error)]
pub enum StatError {
    // ===== Arithmetic errors (statistics core) =====
    /// A statistic was requested over an empty sample sequence.
    #[error("cannot compute {operation} of an empty sample")]
    EmptySample {
        /// The statistic that was requested.
        operation: &'static str,
    },

    /// Sample-formula variance requested for a single observation.
    #[error("sample variance is undefined for a single observation")]
    SingleObservation,

    /// The computational sum-of-squares formula cancelled below zero.
    #[error("negative variance {value:.6e} from catastrophic cancellation")]
    NegativeVariance {
        /// The negative variance that was produced.
        value: f64,
    },

    // ===== Configuration errors =====
    /// Invalid configuration parameter.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    // ===== I/O and data errors =====
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed record in a flat data file.
    #[error("malformed record at line {line}: {message}")]
    Parse {
        /// 1-based line number of the offending record.
        line: usize,
        /// What went wrong.
        message: String,
    },

    /// Histogram rendering error.
    #[error("Render error: {0}")]
    Render(String),
}

impl StatError {
    /// Create a configuration error with a message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a parse error for a data-file record.
    #[must_use]
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    /// Create a rendering error.
    #[must_use]
    pub fn render(message: impl Into<String>) -> Self {
        Self::Render(message.into())
    }

    /// Check if this error is one of the arithmetic-error kinds from the
    /// statistics core (as opposed to configuration or I/O failures).
    #[must_use]
    pub const fn is_arithmetic(&self) -> bool {
        matches!(
            self,
            Self::EmptySample { .. } | Self::SingleObservation | Self::NegativeVariance { .. }
        )
    }
}
