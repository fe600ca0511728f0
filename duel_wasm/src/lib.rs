use duel_core::{GameConfig, GameState};
use std::panic;
use wasm_bindgen::prelude::*;

macro_rules! console_log {
    ($($t:tt)*) => ($crate::log(&format_args!($($t)*).to_string()))
}

pub mod interface;
pub mod render;
mod utils;

/// Id of the optional inline JSON element carrying [`GameConfig`] overrides
pub const CONFIG_ELEMENT_ID: &str = "duel-config";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// Initialization process for the window
///
/// looks up the page elements, measures them into a config and starts the frame loop
#[wasm_bindgen(start)]
pub fn start() {
    setup_logging();

    let mut display = match render::Display::attach() {
        Ok(display) => display,
        Err(e) => {
            console_log!("cannot start the duel :: {}", e);
            return;
        }
    };

    let config = display.measure(read_inline_config());
    let game = match GameState::new(config) {
        Ok(game) => game,
        Err(e) => {
            console_log!("invalid game configuration :: {}", e);
            return;
        }
    };

    interface::install(game, display);
    interface::setup_window_listeners();
    interface::setup_resize_listener();
    if let Err(e) = interface::setup_restart_listener() {
        console_log!("{}", e);
    }
    interface::setup_game_loop();
}

fn setup_logging() {
    panic::set_hook(Box::new(console_error_panic_hook::hook));
}

/// Reads config overrides embedded in the page, falling back to the defaults
fn read_inline_config() -> GameConfig {
    let Some(text) = utils::document()
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
    else {
        return GameConfig::default();
    };

    parse_config(&text).unwrap_or_else(|e| {
        console_log!("ignoring inline config :: {}", e);
        GameConfig::default()
    })
}

fn parse_config(text: &str) -> Result<GameConfig, serde_json::Error> {
    match text.trim() {
        "" => Ok(GameConfig::default()),
        json => serde_json::from_str(json),
    }
}
