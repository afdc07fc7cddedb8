use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read scenario {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid scenario yaml")]
    Parse(#[from] serde_yaml::Error),

    #[error("slider `{name}`: value {value} outside {min}..={max}")]
    SliderOutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("slider `{name}`: {reason}")]
    InvalidSlider {
        name: &'static str,
        reason: &'static str,
    },

    #[error("`{name}` must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },
}
