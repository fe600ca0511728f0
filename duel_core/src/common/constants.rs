//! Up front configuration values, used as the defaults of [`GameConfig`](crate::config::GameConfig)

/// Width of the playing field when no display geometry is available
pub const SCREEN_WIDTH: f64 = 1280.0;
/// Top offset of the floor element, tanks rest on this line
pub const FLOOR_Y: f64 = 600.0;

/// Size of a Tank sprite in pixels
pub const TANK_WIDTH: f64 = 80.0;
pub const TANK_HEIGHT: f64 = 50.0;
/// Pixels a Tank moves per frame for every held direction key
pub const TANK_SPEED: f64 = 7.0;
/// Downward acceleration per frame
pub const GRAVITY: f64 = 0.5;
/// Health of a freshly spawned Tank
pub const TANK_HEALTH: u32 = 5;

/// Side length of the square projectile
pub const PROJECTILE_SIZE: f64 = 10.0;
/// Horizontal pixels a projectile travels per frame
pub const PROJECTILE_SPEED: f64 = 5.0;
/// Offset from the Tank origin where projectiles spawn
pub const MUZZLE_OFFSET: f64 = 20.0;

/// Shots allowed before the cannon has to cool down
pub const MAX_SHOTS: u32 = 5;
pub const COOLDOWN_MS: f64 = 2000.0;
pub const RESPAWN_MS: f64 = 2000.0;

/// Points needed to win the duel
pub const WINNING_POINTS: u32 = 5;

pub const RED_SPAWN: (f64, f64) = (50.0, 50.0);
/// Blue spawns this far from the right edge of the screen
pub const BLUE_SPAWN_INSET: f64 = 150.0;
pub const BLUE_SPAWN_Y: f64 = 50.0;
