//! Session configuration

use std::fmt;

use crate::types::{
    PacingPolicy, BOARD_HEIGHT, BOARD_WIDTH, INITIAL_INTERVAL_MS, MAX_BOARD_SIDE, MIN_BOARD_SIDE,
};

/// Parameters for a new [`Session`](crate::Session)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub width: u8,
    pub height: u8,
    pub initial_interval_ms: u32,
    pub policy: PacingPolicy,
    /// Randomizer seed; `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl SessionConfig {
    pub fn with_size(mut self, width: u8, height: u8) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_interval_ms(mut self, interval_ms: u32) -> Self {
        self.initial_interval_ms = interval_ms;
        self
    }

    pub fn with_policy(mut self, policy: PacingPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check that the board fits the supported range and the interval is
    /// positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_board_size(self.width as usize, self.height as usize)?;
        if self.initial_interval_ms == 0 {
            return Err(ConfigError::Interval);
        }
        Ok(())
    }
}

/// Both sides must lie in `MIN_BOARD_SIDE..=MAX_BOARD_SIDE`
pub fn check_board_size(width: usize, height: usize) -> Result<(), ConfigError> {
    let range = MIN_BOARD_SIDE as usize..=MAX_BOARD_SIDE as usize;
    if !range.contains(&width) {
        return Err(ConfigError::Width(width));
    }
    if !range.contains(&height) {
        return Err(ConfigError::Height(height));
    }
    Ok(())
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            initial_interval_ms: INITIAL_INTERVAL_MS,
            policy: PacingPolicy::Flat,
            seed: None,
        }
    }
}

/// Rejected configuration value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    Width(usize),
    Height(usize),
    Interval,
    /// Board rows of differing lengths.
    Ragged,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Width(w) => write!(
                f,
                "board width {} outside {}..={}",
                w, MIN_BOARD_SIDE, MAX_BOARD_SIDE
            ),
            ConfigError::Height(h) => write!(
                f,
                "board height {} outside {}..={}",
                h, MIN_BOARD_SIDE, MAX_BOARD_SIDE
            ),
            ConfigError::Interval => write!(f, "tick interval must be at least 1ms"),
            ConfigError::Ragged => write!(f, "board rows differ in length"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = SessionConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!((config.width, config.height), (10, 20));
        assert_eq!(config.initial_interval_ms, 500);
        assert_eq!(config.policy, PacingPolicy::Flat);
    }

    #[test]
    fn rejects_out_of_range_values() {
        let config = SessionConfig::default();
        assert_eq!(
            config.with_size(3, 20).validate(),
            Err(ConfigError::Width(3))
        );
        assert_eq!(
            config.with_size(10, 41).validate(),
            Err(ConfigError::Height(41))
        );
        assert_eq!(
            config.with_interval_ms(0).validate(),
            Err(ConfigError::Interval)
        );
    }
}
