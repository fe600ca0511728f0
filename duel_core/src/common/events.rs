//! Type definitions handed from the game to whatever displays it

use serde::{Deserialize, Serialize};

use crate::utils::{Rect, Vector2};

use super::{player::Side, projectile::ProjectileId};

/// Things that happened since the display last drained the outbox
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum GameEvent {
    ProjectileSpawned {
        id: ProjectileId,
        owner: Side,
        position: Vector2,
    },
    ProjectileRemoved {
        id: ProjectileId,
    },
    TankHit {
        side: Side,
        health: u32,
    },
    /// The tank left the field and should no longer be drawn
    TankDestroyed {
        side: Side,
    },
    TankRespawned {
        side: Side,
        position: Vector2,
    },
    ScoreChanged {
        red: u32,
        blue: u32,
    },
    CooldownStarted {
        side: Side,
    },
    CooldownEnded {
        side: Side,
    },
    GameWon {
        winner: Side,
    },
    Restarted,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TankView {
    pub side: Side,
    pub rect: Rect,
    pub visible: bool,
    pub health: u32,
    pub points: u32,
    pub shots_fired: u32,
    pub can_shoot: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProjectileView {
    pub id: ProjectileId,
    pub owner: Side,
    pub rect: Rect,
}

/// Everything a renderer needs for one frame
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub active: bool,
    pub winner: Option<Side>,
    pub tanks: [TankView; 2],
    pub projectiles: Vec<ProjectileView>,
}

impl Snapshot {
    pub fn tank(&self, side: Side) -> &TankView {
        &self.tanks[side.index()]
    }
}
