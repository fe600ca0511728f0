use std::cell::{Cell, RefCell};
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::HtmlElement;

pub fn js_window() -> web_sys::Window {
    web_sys::window().expect("no global `window` exists")
}

pub fn document() -> web_sys::Document {
    js_window()
        .document()
        .expect("should have a document on window")
}

pub fn body() -> web_sys::HtmlElement {
    document().body().expect("document should have a body")
}

/// Looks up an element by id, naming the id when it is missing
pub fn element_by_id(id: &str) -> Result<HtmlElement, String> {
    document()
        .get_element_by_id(id)
        .ok_or_else(|| format!("no element with id `{}`", id))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| format!("element `{}` is not an HtmlElement", id))
}

pub fn window_width() -> f64 {
    js_window()
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .unwrap_or_default()
}

/// Trait that lets game code position Elements without touching CSS strings
pub trait Placed {
    fn set_style(&self, property: &str, value: &str);

    fn place(&self, x: f64, y: f64) {
        self.set_style("left", &px(x));
        self.set_style("top", &px(y));
    }

    fn set_visible(&self, visible: bool) {
        self.set_style("display", if visible { "" } else { "none" });
    }
}

impl Placed for HtmlElement {
    fn set_style(&self, property: &str, value: &str) {
        if let Err(e) = self.style().set_property(property, value) {
            crate::log(&format!("failed to set {} :: {:?}", property, e));
        }
    }
}

pub fn px(value: f64) -> String {
    format!("{}px", value)
}

thread_local! {
    /// The `requestAnimationFrame` callback, kept alive for the lifetime of the page
    static FRAME_CALLBACK: RefCell<Option<Closure<dyn FnMut(f64)>>> = RefCell::new(None);

    static FRAME_LOOP_RUNNING: Cell<bool> = Cell::new(false);
}

fn request_animation_frame(f: &Closure<dyn FnMut(f64)>) {
    js_window()
        .request_animation_frame(f.as_ref().unchecked_ref())
        .expect("should register `requestAnimationFrame` OK");
}

/// Installs the per frame callback. `step` receives the frame timestamp and
/// returns whether it wants another frame, once it says no the loop halts
/// until [`resume_animation_loop`] is called.
pub fn start_animation_loop(mut step: Box<dyn FnMut(f64) -> bool>) {
    let closure = Closure::wrap(Box::new(move |now: f64| {
        if step(now) {
            schedule_next_frame();
        } else {
            FRAME_LOOP_RUNNING.with(|running| running.set(false));
        }
    }) as Box<dyn FnMut(f64)>);

    FRAME_CALLBACK.with(|callback| *callback.borrow_mut() = Some(closure));
    schedule_next_frame();
}

/// Restarts a halted loop, does nothing while it is still running
pub fn resume_animation_loop() {
    if !FRAME_LOOP_RUNNING.with(Cell::get) {
        schedule_next_frame();
    }
}

fn schedule_next_frame() {
    FRAME_CALLBACK.with(|callback| {
        if let Some(closure) = callback.borrow().as_ref() {
            FRAME_LOOP_RUNNING.with(|running| running.set(true));
            request_animation_frame(closure);
        }
    });
}
