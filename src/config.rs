// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Construction parameters for a skip list.
//!
//! A [`Config`] can only be obtained through [`Config::default`] or the
//! validating constructors, so a skip list never runs with a probability that
//! would break the level distribution.

use thiserror::Error;

/// Chance that a node is promoted one more level.
pub const DEFAULT_PROBABILITY: f64 = 0.5;

/// Default cap on tower height. 32 levels covers billions of keys at p = 0.5.
pub const DEFAULT_MAX_HEIGHT: usize = 32;

/// Error returned when skip list parameters are out of range.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    /// The promotion probability is not strictly between 0 and 1 (or is NaN).
    #[error("probability must lie strictly between 0 and 1, got {0}")]
    InvalidProbability(f64),
    /// The height cap is zero.
    #[error("max height must be at least 1, got {0}")]
    InvalidMaxHeight(usize),
}

/// Validated skip list parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    probability: f64,
    max_height: usize,
}

impl Config {
    /// Build a config, rejecting a probability outside `(0, 1)` or a height
    /// cap of zero.
    ///
    /// Any positive cap is accepted. Levels are only allocated as the tower
    /// grows, so a large cap costs nothing up front.
    pub fn new(probability: f64, max_height: usize) -> Result<Config, ConfigError> {
        return Ok(Config {
            probability: check_probability(probability)?,
            max_height: check_max_height(max_height)?,
        });
    }

    /// Copy of this config with a different promotion probability.
    pub fn with_probability(self, probability: f64) -> Result<Config, ConfigError> {
        return Ok(Config {
            probability: check_probability(probability)?,
            ..self
        });
    }

    /// Copy of this config with a different height cap.
    pub fn with_max_height(self, max_height: usize) -> Result<Config, ConfigError> {
        return Ok(Config {
            max_height: check_max_height(max_height)?,
            ..self
        });
    }

    pub fn probability(&self) -> f64 {
        return self.probability;
    }

    pub fn max_height(&self) -> usize {
        return self.max_height;
    }
}

impl Default for Config {
    fn default() -> Self {
        return Config {
            probability: DEFAULT_PROBABILITY,
            max_height: DEFAULT_MAX_HEIGHT,
        };
    }
}

fn check_probability(probability: f64) -> Result<f64, ConfigError> {
    // Written as a positive range test so NaN is rejected too.
    if probability > 0.0 && probability < 1.0 {
        return Ok(probability);
    }
    return Err(ConfigError::InvalidProbability(probability));
}

fn check_max_height(max_height: usize) -> Result<usize, ConfigError> {
    if max_height >= 1 {
        return Ok(max_height);
    }
    return Err(ConfigError::InvalidMaxHeight(max_height));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_constants() {
        let config = Config::default();
        assert_eq!(config.probability(), DEFAULT_PROBABILITY);
        assert_eq!(config.max_height(), DEFAULT_MAX_HEIGHT);
    }

    #[test]
    fn accepts_valid_params() {
        let config = Config::new(0.25, 12).unwrap();
        assert_eq!(config.probability(), 0.25);
        assert_eq!(config.max_height(), 12);
    }

    #[test]
    fn rejects_probability_bounds() {
        assert_eq!(Config::new(0.0, 32), Err(ConfigError::InvalidProbability(0.0)));
        assert_eq!(Config::new(1.0, 32), Err(ConfigError::InvalidProbability(1.0)));
        assert_eq!(Config::new(-0.5, 32), Err(ConfigError::InvalidProbability(-0.5)));
        assert!(Config::new(f64::NAN, 32).is_err());
        assert!(Config::new(f64::INFINITY, 32).is_err());
    }

    #[test]
    fn rejects_only_zero_max_height() {
        assert_eq!(Config::new(0.5, 0), Err(ConfigError::InvalidMaxHeight(0)));
        assert_eq!(Config::new(0.5, 1).unwrap().max_height(), 1);
        assert_eq!(Config::new(0.5, 64).unwrap().max_height(), 64);
        assert_eq!(Config::new(0.5, 100).unwrap().max_height(), 100);
        assert_eq!(Config::new(0.99, 80).unwrap().max_height(), 80);
        assert!(Config::new(0.5, usize::MAX).is_ok());
        assert!(Config::default().with_max_height(0).is_err());
        assert!(Config::default().with_max_height(1000).is_ok());
    }

    #[test]
    fn builders_keep_other_field() {
        let config = Config::default().with_probability(0.25).unwrap();
        assert_eq!(config.max_height(), DEFAULT_MAX_HEIGHT);

        let config = config.with_max_height(4).unwrap();
        assert_eq!(config.probability(), 0.25);
        assert_eq!(config.max_height(), 4);

        assert!(config.with_probability(2.0).is_err());
    }

    #[test]
    fn error_messages() {
        let err = Config::new(1.5, 32).unwrap_err();
        assert_eq!(err.to_string(), "probability must lie strictly between 0 and 1, got 1.5");

        let err = Config::new(0.5, 0).unwrap_err();
        assert_eq!(err.to_string(), "max height must be at least 1, got 0");
    }
}
