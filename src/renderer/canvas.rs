//! Canvas 2D backend
//!
//! Replays scene shapes onto a `CanvasRenderingContext2d`.

use std::f64::consts::TAU;

use js_sys::Array;
use wasm_bindgen::JsValue;
use web_sys::{CanvasGradient, CanvasRenderingContext2d};

use super::scene::{ColorStop, Fill, Shape, Stroke};

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    /// Clear the canvas and draw `shapes` in order
    pub fn render(&self, shapes: &[Shape], width: f32, height: f32) -> Result<(), JsValue> {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
        for shape in shapes {
            self.draw(shape)?;
        }
        Ok(())
    }

    fn draw(&self, shape: &Shape) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        match shape {
            Shape::Rect { min, size, fill } => {
                self.set_fill(fill)?;
                ctx.fill_rect(min.x as f64, min.y as f64, size.x as f64, size.y as f64);
            }
            Shape::Circle {
                center,
                radius,
                fill,
            } => {
                self.set_fill(fill)?;
                ctx.begin_path();
                ctx.arc(center.x as f64, center.y as f64, *radius as f64, 0.0, TAU)?;
                ctx.fill();
            }
            Shape::Ring {
                center,
                radius,
                stroke,
            } => {
                self.set_stroke(stroke)?;
                ctx.begin_path();
                ctx.arc(center.x as f64, center.y as f64, *radius as f64, 0.0, TAU)?;
                ctx.stroke();
            }
            Shape::Path { points, stroke } => {
                let Some((first, rest)) = points.split_first() else {
                    return Ok(());
                };
                self.set_stroke(stroke)?;
                ctx.begin_path();
                ctx.move_to(first.x as f64, first.y as f64);
                for p in rest {
                    ctx.line_to(p.x as f64, p.y as f64);
                }
                ctx.stroke();
            }
            Shape::Group {
                translate,
                rotate,
                shapes,
            } => {
                ctx.save();
                ctx.translate(translate.x as f64, translate.y as f64)?;
                ctx.rotate(*rotate as f64)?;
                let result = shapes.iter().try_for_each(|s| self.draw(s));
                ctx.restore();
                result?;
            }
        }
        Ok(())
    }

    fn set_fill(&self, fill: &Fill) -> Result<(), JsValue> {
        match fill {
            Fill::Solid(color) => self.ctx.set_fill_style_str(color),
            Fill::Linear { from, to, stops } => {
                let gradient = self.ctx.create_linear_gradient(
                    from.x as f64,
                    from.y as f64,
                    to.x as f64,
                    to.y as f64,
                );
                add_stops(&gradient, stops)?;
                self.ctx.set_fill_style_canvas_gradient(&gradient);
            }
            Fill::Radial {
                inner,
                inner_radius,
                outer,
                outer_radius,
                stops,
            } => {
                let gradient = self.ctx.create_radial_gradient(
                    inner.x as f64,
                    inner.y as f64,
                    *inner_radius as f64,
                    outer.x as f64,
                    outer.y as f64,
                    *outer_radius as f64,
                )?;
                add_stops(&gradient, stops)?;
                self.ctx.set_fill_style_canvas_gradient(&gradient);
            }
        }
        Ok(())
    }

    fn set_stroke(&self, stroke: &Stroke) -> Result<(), JsValue> {
        self.ctx.set_stroke_style_str(stroke.color);
        self.ctx.set_line_width(stroke.width as f64);
        let dash = Array::new();
        if let Some([on, off]) = stroke.dash {
            dash.push(&JsValue::from_f64(on as f64));
            dash.push(&JsValue::from_f64(off as f64));
        }
        self.ctx.set_line_dash(&dash)
    }
}

fn add_stops(gradient: &CanvasGradient, stops: &[ColorStop]) -> Result<(), JsValue> {
    for stop in stops {
        gradient.add_color_stop(stop.offset, stop.color)?;
    }
    Ok(())
}
