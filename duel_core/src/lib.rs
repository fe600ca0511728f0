//! Simulation core for a two player tank duel
//!
//! Nothing in here knows how the game is drawn. A host forwards key events
//! and display frames to a [`GameState`] and renders what it gets back.

pub mod common;
pub mod config;
pub mod error;
pub mod input;
pub mod utils;

pub use common::{
    events::{GameEvent, Snapshot},
    gamestate::GameState,
    player::Side,
    timers::Millis,
};
pub use config::GameConfig;
pub use error::ConfigError;
