//! Mirrors the game onto the page's DOM elements

use std::collections::HashMap;

use duel_core::{
    common::{events::Snapshot, projectile::ProjectileId},
    GameConfig, GameEvent, Side,
};
use web_sys::HtmlElement;

use crate::utils::{body, document, element_by_id, js_window, px, window_width, Placed};

/// Element ids the page has to provide
pub const RED_TANK_ID: &str = "red";
pub const BLUE_TANK_ID: &str = "blue";
pub const FLOOR_ID: &str = "floor";
pub const RED_SCORE_ID: &str = "redScore";
pub const BLUE_SCORE_ID: &str = "blueScore";
pub const RESTART_ID: &str = "backButton";

pub struct Display {
    tanks: [HtmlElement; 2],
    scores: [HtmlElement; 2],
    floor: HtmlElement,
    restart: HtmlElement,
    /// One element per live projectile
    projectiles: HashMap<ProjectileId, HtmlElement>,
    projectile_size: f64,
}

impl Display {
    pub fn attach() -> Result<Self, String> {
        let display = Self {
            tanks: [element_by_id(RED_TANK_ID)?, element_by_id(BLUE_TANK_ID)?],
            scores: [element_by_id(RED_SCORE_ID)?, element_by_id(BLUE_SCORE_ID)?],
            floor: element_by_id(FLOOR_ID)?,
            restart: element_by_id(RESTART_ID)?,
            projectiles: HashMap::new(),
            projectile_size: GameConfig::default().projectile_size,
        };

        for tank in &display.tanks {
            tank.set_style("position", "absolute");
        }
        display.restart.set_visible(false);

        Ok(display)
    }

    /// Fills in the geometry the page dictates: screen width, floor line and tank size.
    /// Tanks whose sprite has not laid out yet keep the configured size.
    pub fn measure(&mut self, base: GameConfig) -> GameConfig {
        let tank = &self.tanks[0];
        let (tank_width, tank_height) = match (tank.offset_width(), tank.offset_height()) {
            (w, h) if w > 0 && h > 0 => (w as f64, h as f64),
            _ => (base.tank_width, base.tank_height),
        };

        let config = GameConfig {
            screen_width: window_width(),
            floor_y: self.floor.offset_top() as f64,
            tank_width,
            tank_height,
            ..base
        };
        self.projectile_size = config.projectile_size;

        config
    }

    pub fn apply(&mut self, events: Vec<GameEvent>) {
        for event in events {
            match event {
                GameEvent::ProjectileSpawned {
                    id,
                    owner,
                    position,
                } => self.spawn_projectile(id, owner, position.x, position.y),
                GameEvent::ProjectileRemoved { id } => {
                    if let Some(element) = self.projectiles.remove(&id) {
                        element.remove();
                    }
                }
                GameEvent::TankDestroyed { side } => self.tank(side).set_visible(false),
                GameEvent::TankRespawned { side, .. } => self.tank(side).set_visible(true),
                GameEvent::ScoreChanged { red, blue } => {
                    self.scores[0].set_text_content(Some(&score_text(Side::Red, red)));
                    self.scores[1].set_text_content(Some(&score_text(Side::Blue, blue)));
                }
                GameEvent::GameWon { winner } => {
                    // modal, blocks until dismissed
                    let _ = js_window().alert_with_message(&win_text(winner));
                    self.restart.set_visible(true);
                }
                GameEvent::Restarted => {
                    self.restart.set_visible(false);
                    for tank in &self.tanks {
                        tank.set_visible(true);
                    }
                }
                GameEvent::TankHit { .. }
                | GameEvent::CooldownStarted { .. }
                | GameEvent::CooldownEnded { .. } => {}
            }
        }
    }

    pub fn draw(&self, snapshot: &Snapshot) {
        for view in &snapshot.tanks {
            self.tank(view.side).place(view.rect.x, view.rect.y);
        }

        for view in &snapshot.projectiles {
            if let Some(element) = self.projectiles.get(&view.id) {
                element.place(view.rect.x, view.rect.y);
            }
        }
    }

    fn tank(&self, side: Side) -> &HtmlElement {
        match side {
            Side::Red => &self.tanks[0],
            Side::Blue => &self.tanks[1],
        }
    }

    fn spawn_projectile(&mut self, id: ProjectileId, owner: Side, x: f64, y: f64) {
        let Some(element) = document()
            .create_element("div")
            .ok()
            .and_then(|element| wasm_bindgen::JsCast::dyn_into::<HtmlElement>(element).ok())
        else {
            crate::log("failed to create a projectile element");
            return;
        };

        element.set_class_name("ball");
        element.set_style("position", "absolute");
        element.set_style("width", &px(self.projectile_size));
        element.set_style("height", &px(self.projectile_size));
        element.set_style("border-radius", "50%");
        element.set_style("background-color", side_color(owner));
        element.place(x, y);

        if body().append_child(&element).is_ok() {
            self.projectiles.insert(id, element);
        }
    }
}

pub fn side_color(side: Side) -> &'static str {
    match side {
        Side::Red => "red",
        Side::Blue => "blue",
    }
}

pub fn score_text(side: Side, points: u32) -> String {
    format!("{} Tank: {}", side.name(), points)
}

pub fn win_text(side: Side) -> String {
    format!("{} Tank Wins!", side.name())
}
