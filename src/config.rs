//! Session configuration and setup-time validation.
//!
//! Everything the simulation needs to know about balance comes in through
//! this value at session start; the core carries only documented defaults.

use crate::constants::*;
use serde::Deserialize;
use thiserror::Error;

/// A configuration the simulation cannot run with. These are the only
/// fatal errors in the core; everything past setup is total.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("map {width}x{height} is too small; each side must be at least {min}")]
    MapTooSmall {
        width: usize,
        height: usize,
        min: usize,
    },
    #[error("{name} must be positive, got {value}")]
    NonPositiveValue { name: &'static str, value: f32 },
    #[error("disengage distance {disengage} must exceed engage distance {engage}")]
    InvertedHysteresis { engage: f32, disengage: f32 },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub map_width: usize,
    pub map_height: usize,
    /// Player speed in cells per second.
    pub player_speed: f32,
    /// Minimum seconds between two bomb plants.
    pub min_bomb_interval: f32,
    pub bomb_power: f32,
    pub bomb_fuse_seconds: f32,
    pub monster_walk_speed: f32,
    pub monster_attack_speed: f32,
    pub monster_engage_distance: f32,
    pub monster_disengage_distance: f32,
    pub walker_speed: f32,
    pub pursuer_speed: f32,
    pub coin_count: usize,
    pub aggressive_monster_count: usize,
    pub random_walker_count: usize,
    pub pursuer_count: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            map_width: DEFAULT_MAP_WIDTH,
            map_height: DEFAULT_MAP_HEIGHT,
            player_speed: PLAYER_SPEED,
            min_bomb_interval: MIN_BOMB_INTERVAL,
            bomb_power: BOMB_POWER,
            bomb_fuse_seconds: BOMB_FUSE_SECONDS,
            monster_walk_speed: MONSTER_WALK_SPEED,
            monster_attack_speed: MONSTER_ATTACK_SPEED,
            monster_engage_distance: MONSTER_ENGAGE_DISTANCE,
            monster_disengage_distance: MONSTER_DISENGAGE_DISTANCE,
            walker_speed: WALKER_SPEED,
            pursuer_speed: PURSUER_SPEED,
            coin_count: COIN_COUNT,
            aggressive_monster_count: AGGRESSIVE_MONSTER_COUNT,
            random_walker_count: RANDOM_WALKER_COUNT,
            pursuer_count: PURSUER_COUNT,
        }
    }
}

impl SessionConfig {
    /// Load a configuration from JSON; absent fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Reject configurations the simulation cannot start with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.map_width < MIN_MAP_SIZE || self.map_height < MIN_MAP_SIZE {
            return Err(ConfigError::MapTooSmall {
                width: self.map_width,
                height: self.map_height,
                min: MIN_MAP_SIZE,
            });
        }

        let speeds = [
            ("player_speed", self.player_speed),
            ("bomb_power", self.bomb_power),
            ("monster_walk_speed", self.monster_walk_speed),
            ("monster_attack_speed", self.monster_attack_speed),
            ("walker_speed", self.walker_speed),
            ("pursuer_speed", self.pursuer_speed),
        ];
        for (name, value) in speeds {
            if value <= 0.0 {
                return Err(ConfigError::NonPositiveValue { name, value });
            }
        }

        if self.monster_disengage_distance <= self.monster_engage_distance {
            return Err(ConfigError::InvertedHysteresis {
                engage: self.monster_engage_distance,
                disengage: self.monster_disengage_distance,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SessionConfig::default().validate().is_ok());
    }

    #[test]
    fn test_degenerate_map_is_rejected() {
        let config = SessionConfig {
            map_width: 4,
            map_height: 24,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::MapTooSmall {
                width: 4,
                height: 24,
                min: MIN_MAP_SIZE,
            })
        );
    }

    #[test]
    fn test_zero_speed_is_rejected() {
        let config = SessionConfig {
            player_speed: 0.0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositiveValue {
                name: "player_speed",
                value: 0.0,
            })
        );
    }

    #[test]
    fn test_inverted_hysteresis_is_rejected() {
        let config = SessionConfig {
            monster_engage_distance: 15.0,
            monster_disengage_distance: 10.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvertedHysteresis { .. })
        ));
    }

    #[test]
    fn test_from_json_overrides_selected_fields() {
        let config =
            SessionConfig::from_json(r#"{"map_width": 41, "player_speed": 7.5}"#).unwrap();
        assert_eq!(config.map_width, 41);
        assert_eq!(config.player_speed, 7.5);
        // Untouched fields keep their defaults.
        assert_eq!(config.map_height, DEFAULT_MAP_HEIGHT);
        assert_eq!(config.bomb_power, BOMB_POWER);
    }
}
