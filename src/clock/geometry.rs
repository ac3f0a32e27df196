use crate::foundation::core::{Line, Point, SurfaceSize};

pub const HOUR_STROKE_WIDTH: f64 = 8.0;
pub const HOUR_BORDER_STROKE_WIDTH: f64 = HOUR_STROKE_WIDTH + 8.0;
pub const MINUTE_STROKE_WIDTH: f64 = HOUR_STROKE_WIDTH;
pub const MINUTE_BORDER_STROKE_WIDTH: f64 = MINUTE_STROKE_WIDTH + 6.0;
pub const SECOND_STROKE_WIDTH: f64 = 2.0;
pub const SECOND_BORDER_STROKE_WIDTH: f64 = SECOND_STROKE_WIDTH + 4.0;
pub const SECOND_BACK_STROKE_WIDTH: f64 = 4.0;
pub const SECOND_BACK_BORDER_STROKE_WIDTH: f64 = SECOND_BACK_STROKE_WIDTH + 4.0;
pub const TICK_STROKE_WIDTH: f64 = SECOND_STROKE_WIDTH;
pub const SHADOW_RADIUS: f64 = 6.0;
/// Hands start this far from the center; also the hub radius.
pub const CENTER_GAP_AND_CIRCLE_RADIUS: f64 = 5.0;
pub const DECORATION_CIRCLE_RADIUS: f64 = CENTER_GAP_AND_CIRCLE_RADIUS * 2.0;
pub const TEXT_SIZE: f64 = 24.0;
pub const TEXT_BORDER_SIZE: f64 = TEXT_SIZE + 2.0;
pub const TEXT_BORDER_STROKE_WIDTH: f64 = SECOND_STROKE_WIDTH + 2.0;
pub const TEXT_Y_PADDING: f64 = 16.0;

const HOUR_LENGTH_FACTOR: f64 = 0.425;
const MINUTE_LENGTH_FACTOR: f64 = 0.875;
const SECOND_LENGTH_FACTOR: f64 = 0.875;
const SECOND_BACK_LENGTH_FACTOR: f64 = 0.125;
const TICK_LENGTH: f64 = 10.0;
const TEXT_TICK_GAP: f64 = 8.0;

/// Surface-dependent clock layout. Rebuilt as a whole on every resize.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandGeometry {
    pub center: Point,
    pub hour_length: f64,
    pub minute_length: f64,
    pub second_length: f64,
    pub second_back_length: f64,
    pub tick_inner_radius: f64,
    pub tick_outer_radius: f64,
    pub text_radius: f64,
}

impl HandGeometry {
    pub fn from_surface(size: SurfaceSize) -> Self {
        let cx = f64::from(size.width) / 2.0;
        let cy = f64::from(size.height) / 2.0;
        Self {
            center: Point::new(cx, cy),
            hour_length: cx * HOUR_LENGTH_FACTOR,
            minute_length: cx * MINUTE_LENGTH_FACTOR,
            second_length: cx * SECOND_LENGTH_FACTOR,
            second_back_length: cx * SECOND_BACK_LENGTH_FACTOR,
            tick_inner_radius: cx - TICK_LENGTH,
            tick_outer_radius: cx,
            text_radius: cx - TEXT_SIZE - TEXT_TICK_GAP,
        }
    }

    /// Segment pointing straight up from the center gap, `length` away from the center.
    pub fn upward(&self, length: f64) -> Line {
        let c = self.center;
        Line::new(
            (c.x, c.y - CENTER_GAP_AND_CIRCLE_RADIUS),
            (c.x, c.y - length),
        )
    }

    /// Segment pointing straight down from the center gap.
    pub fn downward(&self, length: f64) -> Line {
        let c = self.center;
        Line::new(
            (c.x, c.y + CENTER_GAP_AND_CIRCLE_RADIUS),
            (c.x, c.y + length),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/clock/geometry.rs"]
mod tests;
