use std::cell::RefCell;
use std::rc::Rc;

use circle_core::high_score::record;
use circle_core::{HighScoreStore, MemoryStore, Point, Pointer, ScoreError, ScoreResult, Stroke};
use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    AddEventListenerOptions, CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlElement,
    MouseEvent, TouchEvent,
};

mod canvas;
mod constants;
mod share;
mod state;
mod storage;
mod utils;

use crate::constants::*;
use crate::state::{STATE, State, with_state};
use crate::storage::LocalStorageStore;
use crate::utils::{client_to_canvas, element, log, sync_canvas_size};

/// Score plus the CSS color it is displayed in.
#[derive(Serialize)]
struct Report<'a> {
    #[serde(flatten)]
    result: &'a ScoreResult,
    color: String,
}

fn display_color(score: f64) -> String {
    // Sub-scores are not capped, so keep the color in gamut here.
    circle_core::color_for(score.clamp(0.0, 100.0)).to_string()
}

fn is_finite_result(r: &ScoreResult) -> bool {
    let sub = &r.sub_scores;
    [
        r.score,
        r.avg_radius,
        r.center.x,
        r.center.y,
        sub.circularity,
        sub.roundness,
        sub.symmetry,
        sub.closure,
        sub.smoothness,
    ]
    .iter()
    .all(|v| v.is_finite())
}

// JS-free body of `score_json`, so it can run on the host.
fn score_report(input: &str) -> Result<String, String> {
    let raw: Vec<[f64; 2]> =
        serde_json::from_str(input).map_err(|e| format!("invalid stroke JSON: {e}"))?;
    if raw.iter().flatten().any(|v| !v.is_finite()) {
        return Err("stroke coordinates must be finite".to_string());
    }
    let stroke: Stroke = raw.into_iter().map(|[x, y]| Point { x, y }).collect();
    let result = circle_core::score(&stroke).map_err(|e| e.to_string())?;
    if !is_finite_result(&result) {
        return Err("stroke coordinates are too large to score".to_string());
    }
    let report = Report {
        result: &result,
        color: display_color(result.score),
    };
    serde_json::to_string(&report).map_err(|e| e.to_string())
}

/// Score a stroke given as JSON `[[x, y], ...]`; returns the result as JSON.
#[wasm_bindgen]
pub fn score_json(input: &str) -> Result<String, JsValue> {
    score_report(input).map_err(|e| JsValue::from_str(&e))
}

/// Last displayed score, 0 before the first scored stroke.
#[wasm_bindgen]
pub fn current_score() -> f64 {
    with_state(|s| s.current_score).unwrap_or(0.0)
}

/// Persisted best score.
#[wasm_bindgen]
pub fn best_score() -> f64 {
    with_state(|s| s.high_score.get()).unwrap_or(0.0)
}

fn set_opacity(document: &Document, id: &str, value: &str) {
    if let Some(el) = element::<HtmlElement>(document, id) {
        let _ = el.style().set_property("opacity", value);
    }
}

fn set_class(document: &Document, id: &str, class: &str, on: bool) {
    if let Some(el) = document.get_element_by_id(id) {
        let list = el.class_list();
        let _ = if on {
            list.add_1(class)
        } else {
            list.remove_1(class)
        };
    }
}

fn start_drawing(state: &mut State, p: Point) {
    state.pointer.start(p);
    set_class(&state.document, HINT_ID, "hide", true);
    set_opacity(&state.document, SCORE_CONTAINER_ID, "0");
    canvas::clear(&state.ctx, &state.canvas);
}

fn add_point(state: &mut State, p: Point) {
    if state.pointer.move_to(p) {
        canvas::draw_path(&state.ctx, &state.canvas, state.pointer.current());
    }
}

fn stop_drawing(state: &mut State) {
    let Some(stroke) = state.pointer.end() else {
        return;
    };
    match circle_core::score(&stroke) {
        Ok(result) => {
            display_score(state, &result);
            if let Err(e) = canvas::draw_guide_circle(&state.ctx, result.center, result.avg_radius)
            {
                log(&format!("Failed to draw guide circle: {:?}", e));
            }
        }
        Err(ScoreError::InsufficientPoints { .. }) => {
            share::show_notification(&state.window, &state.document, "Draw a longer circle!");
        }
    }
}

fn display_score(state: &mut State, result: &ScoreResult) {
    state.current_score = result.score;
    let doc = &state.document;
    if let Some(el) = element::<HtmlElement>(doc, SCORE_ID) {
        el.set_inner_text(&format!("{}%", result.score));
        let _ = el.style().set_property("color", &display_color(result.score));
    }
    set_opacity(doc, SCORE_CONTAINER_ID, "1");

    let is_best = record(&mut *state.high_score, result.score);
    if let Some(label) = element::<HtmlElement>(doc, SCORE_LABEL_ID) {
        label.set_inner_text(if is_best { "New best score" } else { "" });
    }
    set_class(doc, SCORE_LABEL_ID, "show", is_best);
}

fn attach_ui(state: Rc<RefCell<State>>) -> Result<(), JsValue> {
    let doc: Document = state.borrow().document.clone();
    let cv: HtmlCanvasElement = state.borrow().canvas.clone();

    // Resize
    {
        let st = state.clone();
        let onresize = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            let s = st.borrow();
            sync_canvas_size(&s.document, &s.canvas);
        }));
        state
            .borrow()
            .window
            .add_event_listener_with_callback("resize", onresize.as_ref().unchecked_ref())?;
        onresize.forget();
    }

    // Buttons
    if let Some(btn) = element::<HtmlElement>(&doc, SHARE_BTN_ID) {
        let st = state.clone();
        let onclick = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            let s = st.borrow();
            if let Err(e) = share::share_score(&s.window, &s.document, s.current_score) {
                log(&format!("Share failed: {:?}", e));
            }
        }));
        btn.set_onclick(Some(onclick.as_ref().unchecked_ref()));
        onclick.forget();
    }
    if let Some(btn) = element::<HtmlElement>(&doc, COPY_BTN_ID) {
        let st = state.clone();
        let onclick = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            let s = st.borrow();
            if let Err(e) = share::copy_score(&s.window, &s.document, s.current_score) {
                share::show_notification(&s.window, &s.document, "Failed to copy!");
                log(&format!("Could not copy text: {:?}", e));
            }
        }));
        btn.set_onclick(Some(onclick.as_ref().unchecked_ref()));
        onclick.forget();
    }

    // Mouse events
    {
        let st = state.clone();
        let mousedown = Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |e: MouseEvent| {
            let mut s = st.borrow_mut();
            let p = client_to_canvas(&s.canvas, e.client_x() as f64, e.client_y() as f64);
            start_drawing(&mut s, p);
        }));
        cv.add_event_listener_with_callback("mousedown", mousedown.as_ref().unchecked_ref())?;
        mousedown.forget();
    }
    {
        let st = state.clone();
        let mousemove = Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |e: MouseEvent| {
            let mut s = st.borrow_mut();
            if !s.pointer.is_drawing() {
                return;
            }
            let p = client_to_canvas(&s.canvas, e.client_x() as f64, e.client_y() as f64);
            add_point(&mut s, p);
        }));
        cv.add_event_listener_with_callback("mousemove", mousemove.as_ref().unchecked_ref())?;
        mousemove.forget();
    }
    {
        let st = state.clone();
        let mouseup = Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |_e: MouseEvent| {
            stop_drawing(&mut st.borrow_mut());
        }));
        // mouseout ends the stroke as well
        cv.add_event_listener_with_callback("mouseup", mouseup.as_ref().unchecked_ref())?;
        cv.add_event_listener_with_callback("mouseout", mouseup.as_ref().unchecked_ref())?;
        mouseup.forget();
    }

    // Touch events; not passive so scrolling can be suppressed
    let opts = AddEventListenerOptions::new();
    opts.set_passive(false);
    {
        let st = state.clone();
        let touchstart = Closure::<dyn FnMut(TouchEvent)>::wrap(Box::new(move |e: TouchEvent| {
            e.prevent_default();
            let Some(t) = e.touches().get(0) else {
                return;
            };
            let mut s = st.borrow_mut();
            let p = client_to_canvas(&s.canvas, t.client_x() as f64, t.client_y() as f64);
            start_drawing(&mut s, p);
        }));
        cv.add_event_listener_with_callback_and_add_event_listener_options(
            "touchstart",
            touchstart.as_ref().unchecked_ref(),
            &opts,
        )?;
        touchstart.forget();
    }
    {
        let st = state.clone();
        let touchmove = Closure::<dyn FnMut(TouchEvent)>::wrap(Box::new(move |e: TouchEvent| {
            e.prevent_default();
            let Some(t) = e.touches().get(0) else {
                return;
            };
            let mut s = st.borrow_mut();
            let p = client_to_canvas(&s.canvas, t.client_x() as f64, t.client_y() as f64);
            add_point(&mut s, p);
        }));
        cv.add_event_listener_with_callback_and_add_event_listener_options(
            "touchmove",
            touchmove.as_ref().unchecked_ref(),
            &opts,
        )?;
        touchmove.forget();
    }
    {
        let st = state.clone();
        let touchend = Closure::<dyn FnMut(TouchEvent)>::wrap(Box::new(move |e: TouchEvent| {
            e.prevent_default();
            stop_drawing(&mut st.borrow_mut());
        }));
        cv.add_event_listener_with_callback_and_add_event_listener_options(
            "touchend",
            touchend.as_ref().unchecked_ref(),
            &opts,
        )?;
        touchend.forget();
    }
    Ok(())
}

fn init_canvas(
    document: &Document,
) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), JsValue> {
    let cv = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| JsValue::from_str("canvas #canvas not found"))?
        .dyn_into::<HtmlCanvasElement>()?;
    let ctx = cv
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2D context not available"))?
        .dyn_into::<CanvasRenderingContext2d>()?;
    Ok((cv, ctx))
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    utils::init_logging();
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let (canvas, ctx) = init_canvas(&document)?;

    let high_score: Box<dyn HighScoreStore> = match LocalStorageStore::open(&window) {
        Some(store) => Box::new(store),
        None => {
            log("localStorage unavailable; best score is kept for this page only");
            Box::new(MemoryStore::default())
        }
    };

    let state = Rc::new(RefCell::new(State {
        window,
        document,
        canvas,
        ctx,
        pointer: Pointer::new(),
        current_score: 0.0,
        high_score,
    }));

    STATE.with(|st| st.replace(Some(state.clone())));
    {
        let s = state.borrow();
        sync_canvas_size(&s.document, &s.canvas);
        canvas::clear(&s.ctx, &s.canvas);
        set_opacity(&s.document, SCORE_CONTAINER_ID, "0");
        log::info!("best score so far: {}", s.high_score.get());
    }
    attach_ui(state)?;
    Ok(())
}
