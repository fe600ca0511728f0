//! Keyboard state shared by both players
//!
//! Movement keys are polled every frame as long as they are held, fire keys
//! only act on the transition from released to pressed so holding them down
//! (and the auto-repeat the browser generates) never fires twice.

use std::collections::HashSet;

use crate::{common::player::Side, utils::Vector2};

/// Key bindings for one Tank, named after `KeyboardEvent.key` values
#[derive(Debug)]
pub struct Controls {
    pub up: &'static str,
    pub down: &'static str,
    pub left: &'static str,
    pub right: &'static str,
    pub fire: &'static [&'static str],
}

pub const RED_CONTROLS: Controls = Controls {
    up: "w",
    down: "s",
    left: "a",
    right: "d",
    fire: &["f", "F"],
};

pub const BLUE_CONTROLS: Controls = Controls {
    up: "ArrowUp",
    down: "ArrowDown",
    left: "ArrowLeft",
    right: "ArrowRight",
    fire: &["/"],
};

impl Controls {
    pub fn for_side(side: Side) -> &'static Controls {
        match side {
            Side::Red => &RED_CONTROLS,
            Side::Blue => &BLUE_CONTROLS,
        }
    }

    /// Which side, if any, fires with this key
    pub fn fire_side(key: &str) -> Option<Side> {
        Side::BOTH
            .into_iter()
            .find(|side| Controls::for_side(*side).fire.contains(&key))
    }
}

#[derive(Debug, Default, Clone)]
pub struct InputTracker {
    keys_down: HashSet<String>,
}

impl InputTracker {
    /// Marks the key as held, returns `true` only when it was not held before
    pub fn press(&mut self, key: &str) -> bool {
        self.keys_down.insert(key.to_string())
    }

    /// Releasing a letter releases both of its cases, Shift may have changed
    /// the reported key while it was held
    pub fn release(&mut self, key: &str) {
        self.keys_down.remove(key);
        if key.chars().count() == 1 {
            self.keys_down.remove(key.to_lowercase().as_str());
            self.keys_down.remove(key.to_uppercase().as_str());
        }
    }

    pub fn is_held(&self, key: &str) -> bool {
        self.keys_down.contains(key)
    }

    pub fn clear(&mut self) {
        self.keys_down.clear();
    }

    /// Sum of the held direction keys as unit steps on each axis.
    /// Opposite keys cancel out and diagonals are not normalized.
    pub fn movement(&self, controls: &Controls) -> Vector2 {
        let mut delta = Vector2::zero();
        if self.is_held(controls.up) {
            delta.y -= 1.0;
        }
        if self.is_held(controls.down) {
            delta.y += 1.0;
        }
        if self.is_held(controls.left) {
            delta.x -= 1.0;
        }
        if self.is_held(controls.right) {
            delta.x += 1.0;
        }
        delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_is_edge_triggered() {
        let mut input = InputTracker::default();
        assert!(input.press("f"));
        assert!(!input.press("f"));
        input.release("f");
        assert!(input.press("f"));
    }

    #[test]
    fn movement_combines_held_keys() {
        let mut input = InputTracker::default();
        input.press("w");
        input.press("d");
        assert_eq!(input.movement(&RED_CONTROLS), Vector2::new(1.0, -1.0));
        assert_eq!(input.movement(&BLUE_CONTROLS), Vector2::zero());

        input.press("s");
        assert_eq!(input.movement(&RED_CONTROLS), Vector2::new(1.0, 0.0));

        input.clear();
        assert_eq!(input.movement(&RED_CONTROLS), Vector2::zero());
    }

    #[test]
    fn fire_keys_map_to_sides() {
        assert_eq!(Controls::fire_side("f"), Some(Side::Red));
        assert_eq!(Controls::fire_side("F"), Some(Side::Red));
        assert_eq!(Controls::fire_side("/"), Some(Side::Blue));
        assert_eq!(Controls::fire_side("w"), None);
    }

    #[test]
    fn shifted_release_frees_the_letter() {
        let mut input = InputTracker::default();
        input.press("f");
        input.release("F");
        assert!(!input.is_held("f"));
        assert!(input.press("f"));

        input.press("ArrowLeft");
        input.release("arrowleft");
        assert!(input.is_held("ArrowLeft"));
    }

    #[test]
    fn movement_keys_are_case_sensitive() {
        let mut input = InputTracker::default();
        input.press("W");
        assert_eq!(input.movement(&RED_CONTROLS), Vector2::zero());
    }
}
