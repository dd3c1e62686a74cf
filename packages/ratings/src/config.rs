use serde::{Deserialize, Serialize};

use crate::errors::config_errors::ConfigError;
use crate::models::user_profile::NOT_RATED;

pub const DEFAULT_MIN_RATING: i32 = 1;
pub const DEFAULT_MAX_RATING: i32 = 5;

pub const MIN_RATING_ENV: &str = "RATING_SCALE_MIN";
pub const MAX_RATING_ENV: &str = "RATING_SCALE_MAX";

/// Closed interval of ratings a profile accepts.
///
/// The interval may never contain [`NOT_RATED`], so a returned `-1` always
/// means "never rated".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRatingScale")]
pub struct RatingScale {
    min: i32,
    max: i32,
}

#[derive(Deserialize)]
struct RawRatingScale {
    min: i32,
    max: i32,
}

impl TryFrom<RawRatingScale> for RatingScale {
    type Error = ConfigError;

    fn try_from(raw: RawRatingScale) -> Result<Self, Self::Error> {
        RatingScale::new(raw.min, raw.max)
    }
}

impl RatingScale {
    pub fn new(min: i32, max: i32) -> Result<Self, ConfigError> {
        if min > max {
            return Err(ConfigError::InvertedBounds { min, max });
        }
        if (min..=max).contains(&NOT_RATED) {
            return Err(ConfigError::SentinelInRange {
                min,
                max,
                sentinel: NOT_RATED,
            });
        }
        Ok(RatingScale { min, max })
    }

    /// Reads `RATING_SCALE_MIN` / `RATING_SCALE_MAX`, falling back to the
    /// defaults for whichever is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let min = read_bound(&lookup, MIN_RATING_ENV, DEFAULT_MIN_RATING)?;
        let max = read_bound(&lookup, MAX_RATING_ENV, DEFAULT_MAX_RATING)?;
        Self::new(min, max)
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn contains(&self, rating: i32) -> bool {
        (self.min..=self.max).contains(&rating)
    }
}

impl Default for RatingScale {
    fn default() -> Self {
        RatingScale {
            min: DEFAULT_MIN_RATING,
            max: DEFAULT_MAX_RATING,
        }
    }
}

fn read_bound<F>(lookup: &F, key: &str, default: i32) -> Result<i32, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            value: raw,
        }),
    }
}
