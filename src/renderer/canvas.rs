//! Canvas 2D renderer (wasm32 only)
//!
//! Draws lanes, falling objects and caught-object flashes. HUD text lives in
//! the DOM and is updated by the host.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::platform::{FrameView, Presenter};

const BACKGROUND: &str = "#10131c";
const LANE_DIVIDER: &str = "#262c3d";
const OBJECT_FILL: &str = "#4fc3f7";
const OBJECT_FILL_ENDLESS: &str = "#ff7043";
const FLASH_FILL: &str = "#ffffff";

/// Canvas 2D render state
pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    /// Device pixel ratio applied to the backing store
    dpr: f64,
}

impl CanvasRenderer {
    pub fn new(canvas: HtmlCanvasElement, dpr: f64) -> Result<Self, JsValue> {
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into()?;
        let mut renderer = Self { canvas, ctx, dpr };
        let (w, h) = renderer.client_size();
        renderer.resize(w, h);
        Ok(renderer)
    }

    /// Size of the canvas in CSS pixels (= play-area pixels)
    pub fn client_size(&self) -> (f32, f32) {
        (
            self.canvas.client_width() as f32,
            self.canvas.client_height() as f32,
        )
    }

    /// Resize the backing store for a new CSS size
    pub fn resize(&mut self, width: f32, height: f32) {
        self.canvas.set_width((width as f64 * self.dpr) as u32);
        self.canvas.set_height((height as f64 * self.dpr) as u32);
        // Draw in CSS pixels from here on
        let _ = self.ctx.set_transform(self.dpr, 0.0, 0.0, self.dpr, 0.0, 0.0);
    }

    fn fill_rect(&self, x: f32, y: f32, w: f32, h: f32) {
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }
}

impl Presenter for CanvasRenderer {
    fn present(&mut self, view: &FrameView<'_>) {
        let area = view.area;
        let ctx = &self.ctx;

        ctx.set_global_alpha(1.0);
        ctx.set_fill_style_str(BACKGROUND);
        self.fill_rect(0.0, 0.0, area.width, area.height);

        ctx.set_fill_style_str(LANE_DIVIDER);
        let lane_w = area.lane_width(view.lane_count);
        for lane in 1..view.lane_count {
            self.fill_rect(lane as f32 * lane_w - 0.5, 0.0, 1.0, area.height);
        }

        ctx.set_fill_style_str(if view.endless {
            OBJECT_FILL_ENDLESS
        } else {
            OBJECT_FILL
        });
        for object in view.objects {
            let b = view.bounds_at(object.lane, object.y);
            self.fill_rect(b.min.x, b.min.y, b.width(), b.height());
        }

        ctx.set_fill_style_str(FLASH_FILL);
        for flash in view.flashes {
            let b = view.bounds_at(flash.lane, flash.y);
            let alpha = view.flash_alpha(flash);
            // Grow slightly while fading
            let grow = (1.0 - alpha) * 6.0;
            ctx.set_global_alpha(alpha as f64);
            self.fill_rect(
                b.min.x - grow,
                b.min.y - grow,
                b.width() + grow * 2.0,
                b.height() + grow * 2.0,
            );
        }
        ctx.set_global_alpha(1.0);
    }
}
