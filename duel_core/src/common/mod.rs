pub mod constants;
pub mod events;
pub mod gamestate;
pub mod player;
pub mod projectile;
pub mod timers;
