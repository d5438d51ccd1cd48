use kezuri_core as game;
use game::{CanvasGeometry, CardFace, RevealEffect, Size2};
use wasm_bindgen::prelude::*;
use wasm_bindgen::{Clamped, JsCast};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, ImageData};

use crate::utils::set_fill_style;

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2D context not available"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(JsValue::from)
}

/// The visible canvas plus an off-screen canvas holding the foil.
pub(crate) struct CardSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    mask_canvas: HtmlCanvasElement,
    mask_ctx: CanvasRenderingContext2d,
    rgba: Vec<u8>,
}

impl CardSurface {
    pub(crate) fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = context_2d(&canvas)?;
        let mask_canvas = gloo::utils::document()
            .create_element("canvas")?
            .dyn_into::<HtmlCanvasElement>()?;
        let mask_ctx = context_2d(&mask_canvas)?;
        Ok(Self {
            canvas,
            ctx,
            mask_canvas,
            mask_ctx,
            rgba: Vec::new(),
        })
    }

    pub(crate) fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    pub(crate) fn set_size(&self, (width, height): Size2) {
        for canvas in [&self.canvas, &self.mask_canvas] {
            canvas.set_width(width);
            canvas.set_height(height);
        }
    }

    /// Current placement of the visible canvas, for mapping pointer positions.
    pub(crate) fn geometry(&self) -> CanvasGeometry {
        let rect = self.canvas.get_bounding_client_rect();
        CanvasGeometry {
            left: rect.left(),
            top: rect.top(),
            display_width: rect.width(),
            display_height: rect.height(),
            buffer: (self.canvas.width(), self.canvas.height()),
        }
    }

    /// Repaints the face, then composites the current foil over it.
    pub(crate) fn render(&mut self, effect: &RevealEffect) -> Result<(), JsValue> {
        let (width, height) = effect.size();
        effect.mask().write_rgba(&mut self.rgba);
        let image =
            ImageData::new_with_u8_clamped_array_and_sh(Clamped(self.rgba.as_slice()), width, height)?;
        self.mask_ctx.put_image_data(&image, 0.0, 0.0)?;

        self.paint_face(&effect.face(), (width, height))?;
        self.ctx
            .draw_image_with_html_canvas_element(&self.mask_canvas, 0.0, 0.0)
    }

    fn paint_face(&self, face: &CardFace, size: Size2) -> Result<(), JsValue> {
        let (width, height) = (f64::from(size.0), f64::from(size.1));
        match face.background {
            Some(background) => {
                set_fill_style(&self.ctx, background);
                self.ctx.fill_rect(0.0, 0.0, width, height);
            }
            None => self.ctx.clear_rect(0.0, 0.0, width, height),
        }

        if let Some(label) = face.label {
            let (x, y) = CardFace::anchor(size);
            self.ctx.set_font(&face.font());
            self.ctx.set_text_align("center");
            self.ctx.set_text_baseline("middle");
            set_fill_style(&self.ctx, face.color);
            self.ctx.fill_text(label, x, y)?;
        }
        Ok(())
    }
}
