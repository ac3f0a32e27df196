use crate::{
    foundation::core::{Affine, Circle, Color, Line, Point},
    foundation::error::ClockfaceResult,
    render::paint::Paint,
    sprite::frame::SpriteFrame,
};

/// Abstract 2D drawing surface provided by the host.
///
/// Rotation is cumulative: each [`Canvas::rotate`] composes with the transform already in
/// effect, and [`Canvas::restore`] pops back to the matching [`Canvas::save`]. Geometry passed
/// to the draw methods is in the current local coordinate system.
pub trait Canvas {
    fn save(&mut self);

    fn restore(&mut self);

    /// Rotate clockwise by `degrees` about `center` (screen coordinates, y pointing down).
    fn rotate(&mut self, degrees: f64, center: Point);

    fn clear(&mut self, color: Color) -> ClockfaceResult<()>;

    fn draw_line(&mut self, line: Line, paint: &Paint) -> ClockfaceResult<()>;

    fn draw_circle(&mut self, circle: Circle, paint: &Paint) -> ClockfaceResult<()>;

    /// Draw `text` horizontally centered on `origin.x` with its baseline on `origin.y`.
    fn draw_text(&mut self, text: &str, origin: Point, paint: &Paint) -> ClockfaceResult<()>;

    /// Draw `frame` with its top-left corner at `origin`.
    fn draw_image(&mut self, frame: &SpriteFrame, origin: Point) -> ClockfaceResult<()>;
}

/// Save/restore stack of affine transforms shared by the canvas implementations.
#[derive(Clone, Debug)]
pub struct TransformStack {
    current: Affine,
    saved: Vec<Affine>,
}

impl Default for TransformStack {
    fn default() -> Self {
        Self::new()
    }
}

impl TransformStack {
    pub fn new() -> Self {
        Self {
            current: Affine::IDENTITY,
            saved: Vec::new(),
        }
    }

    pub fn current(&self) -> Affine {
        self.current
    }

    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    pub fn save(&mut self) {
        self.saved.push(self.current);
    }

    /// Pop the last saved transform. Returns `false` when there was nothing to restore.
    pub fn restore(&mut self) -> bool {
        match self.saved.pop() {
            Some(t) => {
                self.current = t;
                true
            }
            None => false,
        }
    }

    pub fn rotate(&mut self, degrees: f64, center: Point) {
        self.current = self.current * Affine::rotate_about(degrees.to_radians(), center);
    }

    pub fn reset(&mut self) {
        self.current = Affine::IDENTITY;
        self.saved.clear();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;
