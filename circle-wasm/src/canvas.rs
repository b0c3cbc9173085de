use circle_core::Point;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::constants::{GUIDE_COLOR, GUIDE_WIDTH, STROKE_COLOR, STROKE_WIDTH};

// Non-deprecated helper to set the stroke style via property assignment.
pub fn set_stroke_style(ctx: &CanvasRenderingContext2d, color: &str) {
    let _ = js_sys::Reflect::set(
        ctx.as_ref(),
        &JsValue::from_str("strokeStyle"),
        &JsValue::from_str(color),
    );
}

pub fn clear(ctx: &CanvasRenderingContext2d, canvas: &HtmlCanvasElement) {
    ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
}

/// Redraw the stroke in progress as a single polyline.
pub fn draw_path(ctx: &CanvasRenderingContext2d, canvas: &HtmlCanvasElement, pts: &[Point]) {
    clear(ctx, canvas);
    let Some((first, rest)) = pts.split_first() else {
        return;
    };
    ctx.begin_path();
    ctx.move_to(first.x, first.y);
    for p in rest {
        ctx.line_to(p.x, p.y);
    }
    set_stroke_style(ctx, STROKE_COLOR);
    ctx.set_line_width(STROKE_WIDTH);
    ctx.stroke();
}

/// Overlay the circle the stroke was measured against.
pub fn draw_guide_circle(
    ctx: &CanvasRenderingContext2d,
    center: Point,
    radius: f64,
) -> Result<(), JsValue> {
    ctx.begin_path();
    ctx.arc(center.x, center.y, radius, 0.0, std::f64::consts::TAU)?;
    set_stroke_style(ctx, GUIDE_COLOR);
    ctx.set_line_width(GUIDE_WIDTH);
    ctx.stroke();
    Ok(())
}
