use serde::{Deserialize, Serialize};

use crate::{
    config::GameConfig,
    utils::{Rect, Vector2},
};

/// The two seats of a duel. Red starts on the left and fires right,
/// Blue starts on the right and fires left.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Red,
    Blue,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Red, Side::Blue];

    pub fn opponent(self) -> Side {
        match self {
            Side::Red => Side::Blue,
            Side::Blue => Side::Red,
        }
    }

    /// Sign of the horizontal speed of projectiles fired by this side
    pub fn firing_direction(self) -> f64 {
        match self {
            Side::Red => 1.0,
            Side::Blue => -1.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Side::Red => "Red",
            Side::Blue => "Blue",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Side::Red => 0,
            Side::Blue => 1,
        }
    }
}

/// Data the game has to track for a Player Tank
#[derive(Debug, Clone)]
pub struct Player {
    pub side: Side,
    /// Top-left corner of the tank
    pub position: Vector2,
    pub speed: f64,
    pub velocity_y: f64,
    pub health: u32,
    pub shots_fired: u32,
    pub can_shoot: bool,
    pub points: u32,
    /// `false` between being destroyed and respawning
    pub on_field: bool,
    /// Bumped on every elimination, invalidates respawns from earlier lives
    pub life: u32,
    /// Bumped every time a cooldown starts, invalidates stale cooldown resets
    pub volley: u32,
}

impl Player {
    pub fn new(side: Side, config: &GameConfig) -> Self {
        Self {
            side,
            position: config.spawn_point(side),
            speed: config.tank_speed,
            velocity_y: 0.0,
            health: config.tank_health,
            shots_fired: 0,
            can_shoot: true,
            points: 0,
            on_field: true,
            life: 0,
            volley: 0,
        }
    }

    pub fn rect(&self, config: &GameConfig) -> Rect {
        Rect::new(self.position, config.tank_width, config.tank_height)
    }

    /// Moves the tank by the held direction keys, lets it fall and keeps it on screen.
    ///
    /// Falling keeps the classic ordering: velocity is zeroed on ground contact
    /// and then added anyway, so leaving the ground only starts accelerating
    /// on the following frame.
    pub fn physics_update(&mut self, movement: Vector2, config: &GameConfig) {
        self.position = self.position.plus(&movement.scale(self.speed));

        let ground = config.floor_y - config.tank_height;
        if self.position.y + config.tank_height < config.floor_y {
            self.velocity_y += config.gravity;
        } else {
            self.velocity_y = 0.0;
            self.position.y = ground;
        }
        self.position.y += self.velocity_y;

        // no ceiling, tanks may leave the top of the screen
        self.position.x = self.position.x.min(config.max_tank_x()).max(0.0);
    }

    /// Back to the spawn point with full health. Velocity and score carry over.
    pub fn respawn(&mut self, config: &GameConfig) {
        self.position = config.spawn_point(self.side);
        self.health = config.tank_health;
        self.on_field = true;
    }
}
