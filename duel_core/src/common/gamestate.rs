use tracing::{debug, info, trace};

use crate::{
    config::GameConfig,
    error::ConfigError,
    input::{Controls, InputTracker},
    utils::rect_rect_collision,
};

use super::{
    events::{GameEvent, ProjectileView, Snapshot, TankView},
    player::{Player, Side},
    projectile::{Projectile, ProjectileId},
    timers::{Deferred, Millis, Scheduler},
};

/// A single duel between the Red and Blue tanks.
///
/// The host feeds key events and display frames in, and reads a [`Snapshot`]
/// plus the drained [`GameEvent`]s back out. All timing comes from the
/// `now` values the host passes along, the game never reads a clock itself.
#[derive(Debug)]
pub struct GameState {
    config: GameConfig,
    players: [Player; 2],
    projectiles: Vec<Projectile>,
    input: InputTracker,
    timers: Scheduler,
    events: Vec<GameEvent>,
    active: bool,
    winner: Option<Side>,
    clock: Millis,
    next_projectile_id: u64,
}

impl GameState {
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut state = Self {
            players: Side::BOTH.map(|side| Player::new(side, &config)),
            config,
            projectiles: Vec::new(),
            input: InputTracker::default(),
            timers: Scheduler::default(),
            events: Vec::new(),
            active: true,
            winner: None,
            clock: 0.0,
            next_projectile_id: 0,
        };
        state.push_score();

        Ok(state)
    }

    /// Puts both tanks back at their spawn points with a clean score
    pub fn restart(&mut self) {
        for projectile in self.projectiles.drain(..) {
            self.events
                .push(GameEvent::ProjectileRemoved { id: projectile.id });
        }
        self.players = Side::BOTH.map(|side| Player::new(side, &self.config));
        self.input.clear();
        self.timers.clear();
        self.active = true;
        self.winner = None;

        info!("duel restarted");
        self.events.push(GameEvent::Restarted);
        self.push_score();
    }

    /// Follows the host's display width, the new width has to pass the same
    /// checks as a fresh config. Tanks are pulled back on screen next frame.
    pub fn set_screen_width(&mut self, screen_width: f64) -> Result<(), ConfigError> {
        let config = GameConfig {
            screen_width,
            ..self.config.clone()
        };
        config.validate()?;

        debug!(screen_width, "screen resized");
        self.config = config;
        Ok(())
    }
}

/// Accessors
impl GameState {
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn player(&self, side: Side) -> &Player {
        &self.players[side.index()]
    }

    pub fn player_mut(&mut self, side: Side) -> &mut Player {
        &mut self.players[side.index()]
    }

    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// Latest host time the game has seen
    pub fn clock(&self) -> Millis {
        self.clock
    }

    /// Number of cooldown resets and respawns still waiting to run
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Hands over every event recorded since the last call
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            active: self.active,
            winner: self.winner,
            tanks: Side::BOTH.map(|side| {
                let player = self.player(side);
                TankView {
                    side,
                    rect: player.rect(&self.config),
                    visible: player.on_field,
                    health: player.health,
                    points: player.points,
                    shots_fired: player.shots_fired,
                    can_shoot: player.can_shoot,
                }
            }),
            projectiles: self
                .projectiles
                .iter()
                .map(|projectile| ProjectileView {
                    id: projectile.id,
                    owner: projectile.owner,
                    rect: projectile.rect(&self.config),
                })
                .collect(),
        }
    }
}

/// Implementations for every action a player can take
impl GameState {
    /// Records a held key, firing when it is a fresh press of a fire key.
    /// Presses are ignored once the game has ended.
    pub fn key_down(&mut self, key: &str, now: Millis) {
        self.advance_clock(now);
        if !self.active {
            return;
        }

        if self.input.press(key) {
            if let Some(side) = Controls::fire_side(key) {
                self.fire(side);
            }
        }
    }

    pub fn key_up(&mut self, key: &str) {
        self.input.release(key);
    }

    /// Spawn a projectile from the tank of the given side.
    /// Returns `None` when the cannon is cooling down. An eliminated tank still
    /// fires from where it was destroyed.
    pub fn fire(&mut self, side: Side) -> Option<ProjectileId> {
        let player = &mut self.players[side.index()];
        if !self.active || !player.can_shoot {
            return None;
        }

        let id = ProjectileId(self.next_projectile_id);
        self.next_projectile_id += 1;

        let position = player.position.plus(&self.config.muzzle_offset);
        self.projectiles.push(Projectile {
            id,
            owner: side,
            position,
            speed_x: side.firing_direction() * self.config.projectile_speed,
        });
        self.events.push(GameEvent::ProjectileSpawned {
            id,
            owner: side,
            position,
        });

        player.shots_fired += 1;
        debug!(side = side.name(), shots = player.shots_fired, "fired");

        if player.shots_fired >= self.config.max_shots {
            player.can_shoot = false;
            player.volley += 1;
            self.timers.schedule(
                self.clock + self.config.cooldown_ms,
                Deferred::CooldownReset {
                    side,
                    volley: player.volley,
                },
            );
            debug!(side = side.name(), "cooldown started");
            self.events.push(GameEvent::CooldownStarted { side });
        }

        Some(id)
    }
}

/// The per frame loop
impl GameState {
    /// Runs one display frame. Returns whether another frame should be scheduled.
    pub fn frame(&mut self, now: Millis) -> bool {
        self.advance_clock(now);
        if !self.active {
            return false;
        }

        for player in self.players.iter_mut() {
            let movement = self.input.movement(Controls::for_side(player.side));
            player.physics_update(movement, &self.config);
        }

        self.update_projectiles();

        self.active
    }

    /// Moves the clock forward and runs every deferred action that became due
    pub fn advance_clock(&mut self, now: Millis) {
        self.clock = self.clock.max(now);
        while let Some(action) = self.timers.pop_due(self.clock) {
            self.run_deferred(action);
        }
    }

    fn run_deferred(&mut self, action: Deferred) {
        match action {
            Deferred::CooldownReset { side, volley } => {
                let player = &mut self.players[side.index()];
                if player.volley != volley || player.can_shoot {
                    debug!(side = side.name(), volley, "dropping stale cooldown reset");
                    return;
                }

                player.shots_fired = 0;
                player.can_shoot = true;
                debug!(side = side.name(), "cooldown finished");
                self.events.push(GameEvent::CooldownEnded { side });
            }
            Deferred::Respawn { side, life } => {
                let winning_points = self.config.winning_points;
                let player = &mut self.players[side.index()];
                if !self.active
                    || player.life != life
                    || player.on_field
                    || player.points >= winning_points
                {
                    debug!(side = side.name(), life, "dropping stale respawn");
                    return;
                }

                player.respawn(&self.config);
                info!(side = side.name(), "tank respawned");
                self.events.push(GameEvent::TankRespawned {
                    side,
                    position: player.position,
                });
            }
        }
    }

    /// Advances projectiles newest first so removals never shift unvisited entries
    fn update_projectiles(&mut self) {
        for i in (0..self.projectiles.len()).rev() {
            if !self.active {
                break;
            }

            let projectile = &mut self.projectiles[i];
            projectile.physics_update();

            let target = projectile.owner.opponent();
            let rect = projectile.rect(&self.config);
            let tank = self.player(target);

            if tank.on_field && rect_rect_collision(&rect, &tank.rect(&self.config)) {
                let removed = self.projectiles.remove(i);
                self.events
                    .push(GameEvent::ProjectileRemoved { id: removed.id });
                self.apply_hit(target);
            } else if self.projectiles[i].out_of_bounds(&self.config) {
                let removed = self.projectiles.remove(i);
                trace!(id = removed.id.0, "projectile left the screen");
                self.events
                    .push(GameEvent::ProjectileRemoved { id: removed.id });
            }
        }
    }

    fn apply_hit(&mut self, side: Side) {
        let player = &mut self.players[side.index()];
        player.health = player.health.saturating_sub(1);
        debug!(side = side.name(), health = player.health, "tank hit");
        self.events.push(GameEvent::TankHit {
            side,
            health: player.health,
        });

        if player.health > 0 {
            return;
        }

        player.on_field = false;
        player.life += 1;
        let life = player.life;
        self.events.push(GameEvent::TankDestroyed { side });

        self.players[side.opponent().index()].points += 1;
        info!(
            side = side.name(),
            by = side.opponent().name(),
            "tank destroyed"
        );
        self.push_score();
        self.check_win();

        if self.active {
            self.timers.schedule(
                self.clock + self.config.respawn_ms,
                Deferred::Respawn { side, life },
            );
        }
    }

    /// Ends the game once either side has enough points, red is checked first
    fn check_win(&mut self) {
        let winning_points = self.config.winning_points;
        let Some(winner) = Side::BOTH
            .into_iter()
            .find(|side| self.player(*side).points >= winning_points)
        else {
            return;
        };

        self.active = false;
        self.winner = Some(winner);
        // nothing scheduled before the win may touch the final state
        self.timers.clear();
        self.input.clear();

        info!(winner = winner.name(), "duel won");
        self.events.push(GameEvent::GameWon { winner });
    }

    fn push_score(&mut self) {
        self.events.push(GameEvent::ScoreChanged {
            red: self.player(Side::Red).points,
            blue: self.player(Side::Blue).points,
        });
    }
}
