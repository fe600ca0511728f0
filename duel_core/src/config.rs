//! Tunables for a duel
//!
//! Every field has a default matching the classic game so that a host only
//! needs to fill in what it measured from its own display, e.g.
//!
//! ```
//! use duel_core::config::GameConfig;
//!
//! let config: GameConfig = serde_json::from_str(r#"{ "screen_width": 1920.0 }"#).unwrap();
//! assert_eq!(config.winning_points, 5);
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::{
    common::{constants::*, player::Side},
    error::ConfigError,
    utils::Vector2,
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub screen_width: f64,
    /// Tanks stand on this line, measured from the top of the screen
    pub floor_y: f64,
    pub tank_width: f64,
    pub tank_height: f64,
    pub tank_speed: f64,
    pub tank_health: u32,
    pub gravity: f64,
    pub projectile_size: f64,
    /// Magnitude of the horizontal projectile speed, the sign comes from the side
    pub projectile_speed: f64,
    pub muzzle_offset: Vector2,
    pub max_shots: u32,
    pub cooldown_ms: f64,
    pub respawn_ms: f64,
    pub winning_points: u32,
    pub red_spawn: Vector2,
    /// Falls back to an inset from the right edge of the screen when unset
    pub blue_spawn: Option<Vector2>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            floor_y: FLOOR_Y,
            tank_width: TANK_WIDTH,
            tank_height: TANK_HEIGHT,
            tank_speed: TANK_SPEED,
            tank_health: TANK_HEALTH,
            gravity: GRAVITY,
            projectile_size: PROJECTILE_SIZE,
            projectile_speed: PROJECTILE_SPEED,
            muzzle_offset: Vector2::new(MUZZLE_OFFSET, MUZZLE_OFFSET),
            max_shots: MAX_SHOTS,
            cooldown_ms: COOLDOWN_MS,
            respawn_ms: RESPAWN_MS,
            winning_points: WINNING_POINTS,
            red_spawn: Vector2::new(RED_SPAWN.0, RED_SPAWN.1),
            blue_spawn: None,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("screen_width", self.screen_width),
            ("floor_y", self.floor_y),
            ("tank_width", self.tank_width),
            ("tank_height", self.tank_height),
            ("tank_speed", self.tank_speed),
            ("gravity", self.gravity),
            ("projectile_size", self.projectile_size),
            ("projectile_speed", self.projectile_speed),
            ("muzzle_offset.x", self.muzzle_offset.x),
            ("muzzle_offset.y", self.muzzle_offset.y),
            ("cooldown_ms", self.cooldown_ms),
            ("respawn_ms", self.respawn_ms),
        ];
        if let Some(&(field, _)) = finite.iter().find(|(_, value)| !value.is_finite()) {
            return Err(ConfigError::NotFinite { field });
        }

        let positive = [
            ("screen_width", self.screen_width),
            ("tank_width", self.tank_width),
            ("tank_height", self.tank_height),
            ("tank_speed", self.tank_speed),
            ("projectile_size", self.projectile_size),
            ("projectile_speed", self.projectile_speed),
        ];
        if let Some(&(field, value)) = positive.iter().find(|(_, value)| *value <= 0.0) {
            return Err(ConfigError::NonPositive { field, value });
        }

        let thresholds = [
            ("tank_health", self.tank_health),
            ("max_shots", self.max_shots),
            ("winning_points", self.winning_points),
        ];
        if let Some(&(field, _)) = thresholds.iter().find(|(_, value)| *value == 0) {
            return Err(ConfigError::ZeroThreshold { field });
        }

        if self.screen_width < self.tank_width {
            return Err(ConfigError::ScreenTooNarrow {
                screen_width: self.screen_width,
                tank_width: self.tank_width,
            });
        }

        Ok(())
    }

    /// Where the given side starts the game and returns to after a respawn
    pub fn spawn_point(&self, side: Side) -> Vector2 {
        match side {
            Side::Red => self.red_spawn,
            Side::Blue => self.blue_spawn.unwrap_or(Vector2 {
                x: self.screen_width - BLUE_SPAWN_INSET,
                y: BLUE_SPAWN_Y,
            }),
        }
    }

    /// Largest x a tank may occupy while staying fully on screen
    pub fn max_tank_x(&self) -> f64 {
        self.screen_width - self.tank_width
    }
}
