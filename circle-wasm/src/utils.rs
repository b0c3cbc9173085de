use circle_core::Point;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlCanvasElement};

use crate::constants::CONTAINER_SELECTOR;

/// Log a message to the browser console.
pub fn log(s: &str) {
    web_sys::console::log_1(&JsValue::from_str(s));
}

/// Forwards `log` records from the core crate to the browser console.
struct ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let msg = JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
        match record.level() {
            log::Level::Error => web_sys::console::error_1(&msg),
            log::Level::Warn => web_sys::console::warn_1(&msg),
            log::Level::Info => web_sys::console::info_1(&msg),
            log::Level::Debug | log::Level::Trace => web_sys::console::debug_1(&msg),
        }
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Install the console logger. Debug records only in debug builds.
pub fn init_logging() {
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

/// Look up an element by id and cast it.
pub fn element<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document.get_element_by_id(id)?.dyn_into::<T>().ok()
}

/// Convert client coordinates into canvas internal pixel coordinates so the
/// stroke lines up even if CSS scales the canvas element.
pub fn client_to_canvas(cv: &HtmlCanvasElement, client_x: f64, client_y: f64) -> Point {
    let rect = cv.get_bounding_client_rect();
    Point {
        x: (client_x - rect.left()) * (cv.width() as f64) / rect.width().max(1.0),
        y: (client_y - rect.top()) * (cv.height() as f64) / rect.height().max(1.0),
    }
}

/// Match the canvas backing store to its container, or to its own CSS box
/// when the page has no container.
pub fn sync_canvas_size(document: &Document, cv: &HtmlCanvasElement) {
    let (w, h) = match document.query_selector(CONTAINER_SELECTOR) {
        Ok(Some(el)) => (el.client_width() as f64, el.client_height() as f64),
        _ => {
            let rect = cv.get_bounding_client_rect();
            (rect.width(), rect.height())
        }
    };
    let target_w = w.round().clamp(1.0, 10000.0) as u32;
    let target_h = h.round().clamp(1.0, 10000.0) as u32;
    if cv.width() != target_w {
        cv.set_width(target_w);
    }
    if cv.height() != target_h {
        cv.set_height(target_h);
    }
}
