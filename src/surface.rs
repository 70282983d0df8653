// The two drawing calls a frame needs, so the loop can run against a real
// canvas context or a recording stand-in

use std::f64::consts::PI;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

pub trait DrawSurface {
    fn clear(&mut self, width: f64, height: f64);

    /// Filled circle centred on `(x, y)` using a css color string.
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, css_color: &str) -> Result<(), JsValue>;
}

impl DrawSurface for CanvasRenderingContext2d {
    fn clear(&mut self, width: f64, height: f64) {
        self.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, css_color: &str) -> Result<(), JsValue> {
        self.begin_path();
        self.arc(x, y, radius, 0.0, PI * 2.0)?;
        #[allow(deprecated)]
        self.set_fill_style(&JsValue::from_str(css_color));
        self.fill();
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod recording {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    pub enum DrawCall {
        Clear { width: f64, height: f64 },
        Circle { x: f64, y: f64, radius: f64, color: String },
    }

    #[derive(Default)]
    pub struct RecordingSurface {
        pub calls: Vec<DrawCall>,
    }

    impl RecordingSurface {
        pub fn circles(&self) -> usize {
            self.calls
                .iter()
                .filter(|call| matches!(call, DrawCall::Circle { .. }))
                .count()
        }
    }

    impl DrawSurface for RecordingSurface {
        fn clear(&mut self, width: f64, height: f64) {
            self.calls.push(DrawCall::Clear { width, height });
        }

        fn fill_circle(&mut self, x: f64, y: f64, radius: f64, css_color: &str) -> Result<(), JsValue> {
            self.calls.push(DrawCall::Circle {
                x,
                y,
                radius,
                color: css_color.to_owned(),
            });
            Ok(())
        }
    }
}
