//! Browser 2D canvas backend

use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use super::{Canvas, Color};

impl Canvas for CanvasRenderingContext2d {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.set_fill_style_str(color);
        CanvasRenderingContext2d::fill_rect(self, x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Color) {
        self.set_fill_style_str(color);
        self.begin_path();
        if let Err(e) = self.arc(x as f64, y as f64, radius as f64, 0.0, TAU) {
            log::warn!("arc failed: {:?}", e);
        }
        self.close_path();
        self.fill();
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, size: f32, color: Color) {
        self.set_fill_style_str(color);
        self.set_font(&format!("{}px Arial", size));
        self.set_text_align("center");
        let _ = CanvasRenderingContext2d::fill_text(self, text, x as f64, y as f64);
    }
}
