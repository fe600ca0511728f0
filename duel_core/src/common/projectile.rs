//! Definitions for the damaging projectile fired by a Tank

use serde::{Deserialize, Serialize};

use crate::{
    config::GameConfig,
    utils::{Rect, Vector2},
};

use super::player::Side;

/// Handle that lets a display pair a projectile with its visual
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProjectileId(pub u64);

/// Projectile shot from a Tank, it flies in a straight horizontal line
/// until it hits the opposing Tank or leaves the screen
#[derive(Debug, Clone)]
pub struct Projectile {
    pub id: ProjectileId,
    /// The side whose Tank fired the projectile, it can never hit that Tank
    pub owner: Side,
    /// Top-left corner of the projectile
    pub position: Vector2,
    /// Signed horizontal pixels per frame
    pub speed_x: f64,
}

impl Projectile {
    pub fn physics_update(&mut self) {
        self.position.x += self.speed_x;
    }

    pub fn rect(&self, config: &GameConfig) -> Rect {
        Rect::new(self.position, config.projectile_size, config.projectile_size)
    }

    /// Whether the projectile has flown past either side of the screen.
    /// Since it only moves horizontally it can never come back.
    pub fn out_of_bounds(&self, config: &GameConfig) -> bool {
        let rect = self.rect(config);
        rect.right() < 0.0 || rect.left() > config.screen_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn projectile(x: f64, speed_x: f64) -> Projectile {
        Projectile {
            id: ProjectileId(0),
            owner: Side::Red,
            position: Vector2::new(x, 100.0),
            speed_x,
        }
    }

    #[test]
    fn moves_horizontally_only() {
        let mut ball = projectile(10.0, -5.0);
        ball.physics_update();
        ball.physics_update();
        assert_eq!(ball.position, Vector2::new(0.0, 100.0));
    }

    #[test]
    fn bounds_use_the_whole_rect() {
        let config = GameConfig {
            screen_width: 800.0,
            ..GameConfig::default()
        };
        assert!(!projectile(-9.0, -5.0).out_of_bounds(&config));
        assert!(!projectile(-10.0, -5.0).out_of_bounds(&config));
        assert!(projectile(-10.5, -5.0).out_of_bounds(&config));
        assert!(!projectile(800.0, 5.0).out_of_bounds(&config));
        assert!(projectile(800.5, 5.0).out_of_bounds(&config));
    }
}
