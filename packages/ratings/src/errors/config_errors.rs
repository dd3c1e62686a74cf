use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Rating scale minimum {min} is greater than maximum {max}")]
    InvertedBounds { min: i32, max: i32 },

    #[error("Rating scale [{min}, {max}] contains the not-rated sentinel {sentinel}")]
    SentinelInRange { min: i32, max: i32, sentinel: i32 },

    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },
}
