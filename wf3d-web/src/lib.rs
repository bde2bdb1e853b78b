/// WF3D Web - wireframe viewer on an HTML 2D canvas
///
/// JavaScript owns the animation loop: it forwards pointer events into the
/// viewer and calls `frame` once per `requestAnimationFrame`.
use std::f64::consts::TAU;

use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;
use wf3d_core::{
    load, Canvas, Color, InputEvent, Mesh, PointerButtons, PointerPosition, ScreenPoint, Viewer,
    ViewerConfig,
};

#[wasm_bindgen]
pub struct WebViewer {
    viewer: Viewer,
    pending: Vec<InputEvent>,
}

#[wasm_bindgen]
impl WebViewer {
    /// Parse a mesh description; format errors are raised as JS errors
    #[wasm_bindgen(constructor)]
    pub fn new(mesh_text: &str) -> Result<WebViewer, JsValue> {
        let mesh = load(mesh_text).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self::from_mesh(mesh))
    }

    /// Side of the square canvas the viewer expects, in pixels
    pub fn window_size(&self) -> u32 {
        self.viewer.config().window_size
    }

    /// Queue a pointer move; `buttons` is the DOM `MouseEvent.buttons` mask
    pub fn pointer_move(&mut self, x: f64, y: f64, buttons: u16) {
        self.pending.push(InputEvent::PointerMove {
            position: PointerPosition::new(x, y),
            buttons: buttons_from_mask(buttons),
        });
    }

    pub fn quit(&mut self) {
        self.pending.push(InputEvent::Quit);
    }

    pub fn is_running(&self) -> bool {
        self.viewer.is_running()
    }

    /// Draw one frame and consume queued input. Returns whether the viewer
    /// is still running.
    pub fn frame(&mut self, ctx: &CanvasRenderingContext2d) -> Result<bool, JsValue> {
        let mut canvas = Context2dCanvas {
            ctx,
            size: f64::from(self.viewer.config().window_size),
            pending: &mut self.pending,
        };
        self.viewer.frame(&mut canvas)?;
        Ok(self.viewer.is_running())
    }
}

impl WebViewer {
    pub fn from_mesh(mesh: Mesh) -> Self {
        Self {
            viewer: Viewer::new(mesh, ViewerConfig::default()),
            pending: Vec::new(),
        }
    }
}

/// `Canvas` over a 2D rendering context; input comes from the event queue
struct Context2dCanvas<'a> {
    ctx: &'a CanvasRenderingContext2d,
    size: f64,
    pending: &'a mut Vec<InputEvent>,
}

impl Canvas for Context2dCanvas<'_> {
    type Error = JsValue;

    fn clear(&mut self, color: Color) -> Result<(), JsValue> {
        self.ctx.set_fill_style_str(&css_color(color));
        self.ctx.fill_rect(0.0, 0.0, self.size, self.size);
        Ok(())
    }

    fn draw_point(
        &mut self,
        center: ScreenPoint,
        color: Color,
        radius: f64,
    ) -> Result<(), JsValue> {
        self.ctx.set_fill_style_str(&css_color(color));
        self.ctx.begin_path();
        self.ctx.arc(center.x, center.y, radius, 0.0, TAU)?;
        self.ctx.fill();
        Ok(())
    }

    fn draw_line(
        &mut self,
        from: ScreenPoint,
        to: ScreenPoint,
        color: Color,
        width: f64,
    ) -> Result<(), JsValue> {
        self.ctx.set_stroke_style_str(&css_color(color));
        self.ctx.set_line_width(width);
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.stroke();
        Ok(())
    }

    fn poll_events(&mut self) -> Result<Vec<InputEvent>, JsValue> {
        Ok(std::mem::take(self.pending))
    }

    fn present(&mut self) -> Result<(), JsValue> {
        // The browser composites the canvas after the animation frame
        Ok(())
    }
}

fn buttons_from_mask(mask: u16) -> PointerButtons {
    PointerButtons {
        primary: mask & 1 != 0,
        secondary: mask & 2 != 0,
        middle: mask & 4 != 0,
    }
}

fn css_color(color: Color) -> String {
    format!("rgb({}, {}, {})", color.r, color.g, color.b)
}
