use crate::{
    render::{Display, RESTART_ID},
    utils::{
        element_by_id, js_window, resume_animation_loop, start_animation_loop, window_width,
    },
};
use duel_core::GameState;
use std::cell::RefCell;
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{Event, KeyboardEvent, MouseEvent};

thread_local! {
  /// Global State for the Game
  ///
  /// Do not panic while using this data, otherwise you may
  /// encounter a permanent locking of the Data
  pub static GAME_STATE: RefCell<Option<GameState>> = RefCell::new(None);

  /// The page elements the game is drawn onto
  pub static DISPLAY: RefCell<Option<Display>> = RefCell::new(None);
}

/// Runs `f` against the game and flushes whatever it recorded to the page.
/// Returns `None` before the game has been installed.
fn with_game<R>(f: impl FnOnce(&mut GameState) -> R) -> Option<R> {
    GAME_STATE.with(|game| {
        DISPLAY.with(|display| {
            let mut game = game.borrow_mut();
            let mut display = display.borrow_mut();
            let (Some(game), Some(display)) = (game.as_mut(), display.as_mut()) else {
                return None;
            };

            let result = f(game);
            display.apply(game.take_events());
            display.draw(&game.snapshot());
            Some(result)
        })
    })
}

pub fn install(game: GameState, display: Display) {
    GAME_STATE.with(|state| *state.borrow_mut() = Some(game));
    DISPLAY.with(|state| *state.borrow_mut() = Some(display));
}

/// Drives [`GameState::frame`] from `requestAnimationFrame`
pub fn setup_game_loop() {
    start_animation_loop(Box::new(|now: f64| {
        with_game(|game| game.frame(now)).unwrap_or(false)
    }));
}

/// Window Listeners Setup
pub fn setup_window_listeners() {
    // Key Pressing Callback
    let keydown_callback = Closure::wrap(Box::new(move |event: KeyboardEvent| {
        let now = event.time_stamp();
        with_game(|game| game.key_down(&event.key(), now));
    }) as Box<dyn FnMut(_)>);
    js_window()
        .add_event_listener_with_callback("keydown", keydown_callback.as_ref().unchecked_ref())
        .expect("failed to add listener");
    keydown_callback.forget();

    // Key Releasing Callback
    let keyup_callback = Closure::wrap(Box::new(move |event: KeyboardEvent| {
        with_game(|game| game.key_up(&event.key()));
    }) as Box<dyn FnMut(_)>);
    js_window()
        .add_event_listener_with_callback("keyup", keyup_callback.as_ref().unchecked_ref())
        .expect("failed to add listener");
    keyup_callback.forget();
}

/// Keeps the playable width in step with the window
pub fn setup_resize_listener() {
    let resize_callback = Closure::wrap(Box::new(move |_: Event| {
        let width = window_width();
        if let Some(Err(e)) = with_game(|game| game.set_screen_width(width)) {
            console_log!("ignoring resize to {} :: {}", width, e);
        }
    }) as Box<dyn FnMut(_)>);
    js_window()
        .add_event_listener_with_callback("resize", resize_callback.as_ref().unchecked_ref())
        .expect("failed to add listener");
    resize_callback.forget();
}

/// The restart control resets the duel in place and wakes the frame loop back up
pub fn setup_restart_listener() -> Result<(), String> {
    let click_callback = Closure::wrap(Box::new(move |_: MouseEvent| {
        with_game(GameState::restart);
        resume_animation_loop();
    }) as Box<dyn FnMut(_)>);
    element_by_id(RESTART_ID)?
        .add_event_listener_with_callback("click", click_callback.as_ref().unchecked_ref())
        .map_err(|e| format!("failed to add restart listener :: {:?}", e))?;
    click_callback.forget();

    Ok(())
}
