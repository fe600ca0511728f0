use duel_core::{utils::Vector2, GameConfig, GameEvent, GameState, Millis, Side};

const FRAME: Millis = 16.0;

fn game() -> GameState {
    GameState::new(GameConfig {
        screen_width: 1000.0,
        floor_y: 500.0,
        tank_width: 80.0,
        tank_height: 50.0,
        ..GameConfig::default()
    })
    .unwrap()
}

/// Both tanks on the floor, facing each other at close range
fn face_off() -> GameState {
    let mut state = game();
    state.player_mut(Side::Red).position = Vector2::new(100.0, 450.0);
    state.player_mut(Side::Blue).position = Vector2::new(300.0, 450.0);
    state.take_events();
    state
}

fn tap(state: &mut GameState, key: &str, now: Millis) {
    state.key_down(key, now);
    state.key_up(key);
}

/// Runs frames until every projectile is gone, returns the time of the last frame
fn settle(state: &mut GameState, mut now: Millis) -> Millis {
    let deadline = now + 60_000.0;
    while !state.projectiles().is_empty() && state.is_active() {
        now += FRAME;
        state.frame(now);
        assert!(now < deadline, "projectiles never resolved");
    }
    now
}

#[test]
fn sixth_shot_waits_for_cooldown() {
    let mut state = game();
    for shot in 0..5 {
        tap(&mut state, "f", shot as f64 * 100.0);
    }
    assert_eq!(state.projectiles().len(), 5);
    assert_eq!(state.player(Side::Red).shots_fired, 5);
    assert!(!state.player(Side::Red).can_shoot);

    tap(&mut state, "f", 1000.0);
    assert_eq!(state.projectiles().len(), 5);
    assert_eq!(state.player(Side::Red).shots_fired, 5);

    // cooldown started with the fifth shot at 400ms
    tap(&mut state, "f", 2399.0);
    assert_eq!(state.projectiles().len(), 5);

    tap(&mut state, "f", 2400.0);
    assert_eq!(state.projectiles().len(), 6);
    assert_eq!(state.player(Side::Red).shots_fired, 1);
    assert!(state.player(Side::Red).can_shoot);

    let events = state.take_events();
    assert!(events.contains(&GameEvent::CooldownStarted { side: Side::Red }));
    assert!(events.contains(&GameEvent::CooldownEnded { side: Side::Red }));
}

#[test]
fn cooldowns_are_per_side() {
    let mut state = game();
    for shot in 0..5 {
        tap(&mut state, "f", shot as f64);
    }
    tap(&mut state, "/", 10.0);
    assert_eq!(state.player(Side::Blue).shots_fired, 1);
    assert!(state.player(Side::Blue).can_shoot);
    assert!(!state.player(Side::Red).can_shoot);
}

#[test]
fn five_hits_destroy_and_respawn_blue() {
    let mut state = face_off();
    let mut now = 0.0;

    for expected_health in (0..5).rev() {
        tap(&mut state, "f", now);
        now = settle(&mut state, now);
        assert_eq!(state.player(Side::Blue).health, expected_health);
    }

    let blue = state.player(Side::Blue);
    assert!(!blue.on_field);
    assert_eq!(state.player(Side::Red).points, 1);
    assert!(!state.snapshot().tank(Side::Blue).visible);

    let events = state.take_events();
    assert!(events.contains(&GameEvent::TankDestroyed { side: Side::Blue }));
    assert!(events.contains(&GameEvent::ScoreChanged { red: 1, blue: 0 }));
    assert_eq!(
        events
            .iter()
            .filter(|event| matches!(event, GameEvent::TankHit { side: Side::Blue, .. }))
            .count(),
        5
    );

    state.advance_clock(now + 1999.0);
    assert!(!state.player(Side::Blue).on_field);
    // red's cooldown from the fifth shot ends in the meantime
    assert_eq!(
        state.take_events(),
        vec![GameEvent::CooldownEnded { side: Side::Red }]
    );

    state.advance_clock(now + 2000.0);
    let spawn = state.config().spawn_point(Side::Blue);
    let blue = state.player(Side::Blue);
    assert!(blue.on_field);
    assert_eq!(blue.health, 5);
    assert_eq!(blue.position, spawn);
    assert_eq!(blue.position, Vector2::new(850.0, 50.0));
    assert_eq!(
        state.take_events(),
        vec![GameEvent::TankRespawned {
            side: Side::Blue,
            position: spawn
        }]
    );
}

#[test]
fn health_drops_by_one_per_hit() {
    let mut state = face_off();
    tap(&mut state, "f", 0.0);
    tap(&mut state, "f", 50.0);
    let now = settle(&mut state, 50.0);
    assert_eq!(state.player(Side::Blue).health, 3);

    let hits: Vec<_> = state
        .take_events()
        .into_iter()
        .filter_map(|event| match event {
            GameEvent::TankHit { side, health } => Some((side, health)),
            _ => None,
        })
        .collect();
    assert_eq!(hits, vec![(Side::Blue, 4), (Side::Blue, 3)]);
    assert!(now > 50.0);
}

#[test]
fn fifth_point_ends_the_game() {
    let mut state = face_off();
    state.player_mut(Side::Red).points = 4;
    state.player_mut(Side::Blue).health = 1;

    // red also has a cooldown pending when the game ends
    for shot in 0..5 {
        tap(&mut state, "f", shot as f64);
    }
    assert!(state.pending_timers() > 0);

    let mut now = 4.0;
    while state.is_active() {
        now += FRAME;
        let keep_going = state.frame(now);
        assert_eq!(keep_going, state.is_active());
        assert!(now < 10_000.0, "game never ended");
    }

    assert_eq!(state.winner(), Some(Side::Red));
    assert_eq!(state.player(Side::Red).points, 5);
    assert_eq!(state.pending_timers(), 0);
    assert!(state.take_events().contains(&GameEvent::GameWon { winner: Side::Red }));

    // frames no longer move anything
    let before = state.player(Side::Red).position;
    state.key_down("d", now + FRAME);
    assert!(!state.frame(now + FRAME));
    assert!(!state.frame(now + 2.0 * FRAME));
    assert_eq!(state.player(Side::Red).position, before);

    // the pending cooldown was dropped with the win
    state.advance_clock(now + 10_000.0);
    assert!(!state.player(Side::Red).can_shoot);
    assert!(!state.player(Side::Blue).on_field);
    assert!(state.take_events().is_empty());

    // the other four shots stay where they were when the game ended
    let snapshot = state.snapshot();
    assert_eq!(snapshot.projectiles.len(), 4);
    assert!(!snapshot.active);
    assert_eq!(snapshot.winner, Some(Side::Red));
}

#[test]
fn blue_can_win_too() {
    let mut state = face_off();
    state.player_mut(Side::Blue).points = 4;
    state.player_mut(Side::Red).health = 1;
    tap(&mut state, "/", 0.0);
    settle(&mut state, 0.0);

    assert!(!state.is_active());
    assert_eq!(state.winner(), Some(Side::Blue));
}

#[test]
fn restart_resets_everything() {
    let mut state = face_off();
    state.player_mut(Side::Red).points = 4;
    state.player_mut(Side::Blue).health = 1;
    tap(&mut state, "f", 0.0);
    tap(&mut state, "f", 1.0);
    let now = settle(&mut state, 1.0);
    assert!(!state.is_active());
    // the second shot is still in flight
    assert_eq!(state.projectiles().len(), 1);
    state.take_events();

    state.restart();
    assert!(state.is_active());
    assert_eq!(state.winner(), None);
    assert!(state.projectiles().is_empty());
    for side in Side::BOTH {
        let player = state.player(side);
        assert_eq!(player.points, 0);
        assert_eq!(player.health, 5);
        assert_eq!(player.shots_fired, 0);
        assert!(player.on_field);
        assert_eq!(player.position, state.config().spawn_point(side));
    }

    let events = state.take_events();
    assert!(matches!(events[0], GameEvent::ProjectileRemoved { .. }));
    assert!(events.contains(&GameEvent::Restarted));
    assert_eq!(
        events.last(),
        Some(&GameEvent::ScoreChanged { red: 0, blue: 0 })
    );

    assert!(state.frame(now + FRAME));
}
