//! Scene projection: snapshot in, drawing commands out
//!
//! Nothing here touches the canvas, so the layout is testable natively.

use glam::Vec2;
use std::f32::consts::TAU;

use crate::settings::Settings;
use crate::sim::{GamePhase, Snapshot};

pub const SKY: &str = "#87CEEB";
pub const GRASS: &str = "#228B22";
pub const FIELD_LINE: &str = "#FFFFFF";
pub const BALL_HIGHLIGHT: &str = "#FFFFFF";
pub const BALL_SHADOW: &str = "#000000";
pub const SEAM: &str = "#000000";
pub const HIT_ZONE: &str = "rgba(255, 215, 0, 0.3)";
pub const ARROW: &str = "#FFD700";

/// Hit-zone hint appears once the ball's bottom is this close to the ground
pub const HINT_DISTANCE: f32 = 100.0;
/// Minimum horizontal speed before the drift arrow shows
pub const ARROW_MIN_SPEED: f32 = 0.5;
pub const ARROW_MAX_LENGTH: f32 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: &'static str,
}

const fn stop(offset: f32, color: &'static str) -> ColorStop {
    ColorStop { offset, color }
}

/// How a closed shape is filled
#[derive(Debug, Clone, PartialEq)]
pub enum Fill {
    Solid(&'static str),
    Linear {
        from: Vec2,
        to: Vec2,
        stops: Vec<ColorStop>,
    },
    Radial {
        inner: Vec2,
        inner_radius: f32,
        outer: Vec2,
        outer_radius: f32,
        stops: Vec<ColorStop>,
    },
}

/// Line style
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: &'static str,
    pub width: f32,
    /// Dash and gap lengths; solid when `None`
    pub dash: Option<[f32; 2]>,
}

impl Stroke {
    pub const fn solid(color: &'static str, width: f32) -> Self {
        Self {
            color,
            width,
            dash: None,
        }
    }

    pub const fn dashed(color: &'static str, width: f32) -> Self {
        Self {
            color,
            width,
            dash: Some([5.0, 5.0]),
        }
    }
}

/// A drawing command
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect { min: Vec2, size: Vec2, fill: Fill },
    Circle { center: Vec2, radius: f32, fill: Fill },
    Ring { center: Vec2, radius: f32, stroke: Stroke },
    /// Open polyline
    Path { points: Vec<Vec2>, stroke: Stroke },
    /// Children drawn in a translated and rotated frame
    Group {
        translate: Vec2,
        rotate: f32,
        shapes: Vec<Shape>,
    },
}

/// Ball spin angle for a horizontal velocity
#[inline]
pub fn ball_rotation(velocity_x: f32) -> f32 {
    (velocity_x * 0.1) % TAU
}

/// Project a snapshot into drawing commands, back to front
pub fn build_scene(snap: &Snapshot, settings: &Settings) -> Vec<Shape> {
    let mut shapes = Vec::with_capacity(6);
    let size = Vec2::new(snap.bounds_width, snap.bounds_height);

    shapes.push(Shape::Rect {
        min: Vec2::ZERO,
        size,
        fill: Fill::Linear {
            from: Vec2::ZERO,
            to: Vec2::new(0.0, size.y),
            stops: vec![stop(0.0, SKY), stop(0.7, SKY), stop(1.0, GRASS)],
        },
    });
    shapes.push(Shape::Rect {
        min: Vec2::new(0.0, snap.ground_y),
        size: Vec2::new(size.x, size.y - snap.ground_y),
        fill: Fill::Solid(GRASS),
    });
    shapes.push(Shape::Path {
        points: vec![Vec2::new(0.0, snap.ground_y), Vec2::new(size.x, snap.ground_y)],
        stroke: Stroke::solid(FIELD_LINE, 3.0),
    });

    shapes.push(ball(snap));

    let playing = snap.session_state == GamePhase::Playing;
    if playing
        && settings.show_hit_zone
        && snap.ball_y + snap.ball_radius > snap.ground_y - HINT_DISTANCE
    {
        shapes.push(Shape::Ring {
            center: snap.ball_center(),
            radius: snap.ball_radius + settings.tuning.hit_slop,
            stroke: Stroke::dashed(HIT_ZONE, 2.0),
        });
    }

    if playing && settings.show_direction_arrow && snap.velocity_x.abs() > ARROW_MIN_SPEED {
        shapes.extend(drift_arrow(snap));
    }

    shapes
}

fn ball(snap: &Snapshot) -> Shape {
    let r = snap.ball_radius;
    let mut shapes = vec![Shape::Circle {
        center: Vec2::ZERO,
        radius: r,
        fill: Fill::Radial {
            inner: Vec2::new(-10.0, -10.0),
            inner_radius: 0.0,
            outer: Vec2::ZERO,
            outer_radius: r,
            stops: vec![stop(0.0, BALL_HIGHLIGHT), stop(1.0, BALL_SHADOW)],
        },
    }];

    // Pentagon seam at 0.3 r
    let seam_r = r * 0.3;
    shapes.extend((0..5).map(|i| {
        let a = i as f32 * TAU / 5.0;
        let b = a + TAU / 5.0;
        Shape::Path {
            points: vec![
                Vec2::new(a.cos(), a.sin()) * seam_r,
                Vec2::new(b.cos(), b.sin()) * seam_r,
            ],
            stroke: Stroke::solid(SEAM, 2.0),
        }
    }));

    Shape::Group {
        translate: snap.ball_center(),
        rotate: ball_rotation(snap.velocity_x),
        shapes,
    }
}

fn drift_arrow(snap: &Snapshot) -> [Shape; 2] {
    let length = (snap.velocity_x.abs() * 8.0).min(ARROW_MAX_LENGTH);
    let dir = snap.velocity_x.signum();
    let y = snap.ball_y - snap.ball_radius - 10.0;
    let start = Vec2::new(snap.ball_x, y);
    let tip = Vec2::new(snap.ball_x + length * dir, y);
    let barb_x = tip.x - 10.0 * dir;
    let stroke = Stroke::dashed(ARROW, 3.0);

    [
        Shape::Path {
            points: vec![start, tip, Vec2::new(barb_x, y - 5.0)],
            stroke,
        },
        Shape::Path {
            points: vec![tip, Vec2::new(barb_x, y + 5.0)],
            stroke,
        },
    ]
}
