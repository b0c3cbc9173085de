use std::cell::RefCell;
use std::rc::Rc;

use circle_core::{HighScoreStore, Pointer};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

/// Global application state stored behind an `Rc<RefCell<_>>` so it can be
/// shared across the WASM callbacks.
pub struct State {
    pub window: Window,
    pub document: Document,
    pub canvas: HtmlCanvasElement,
    pub ctx: CanvasRenderingContext2d,
    pub pointer: Pointer,
    /// Last displayed score, 0 until a stroke has been scored.
    pub current_score: f64,
    pub high_score: Box<dyn HighScoreStore>,
}

/// Thread local storage for the single runtime state instance.
thread_local! {
    pub static STATE: RefCell<Option<Rc<RefCell<State>>>> = const { RefCell::new(None) };
}

/// Run `f` against the installed state, if `start` has run.
pub fn with_state<R>(f: impl FnOnce(&State) -> R) -> Option<R> {
    STATE.with(|st| st.borrow().as_ref().map(|rc| f(&rc.borrow())))
}
