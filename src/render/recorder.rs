use crate::{
    foundation::core::{Affine, Circle, Color, Line, Point},
    foundation::error::ClockfaceResult,
    render::canvas::{Canvas, TransformStack},
    render::paint::Paint,
    sprite::frame::SpriteFrame,
};

/// One recorded draw call, with the composed transform that was in effect when it was issued.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear {
        color: Color,
    },
    Line {
        line: Line,
        transform: Affine,
        paint: Paint,
    },
    Circle {
        circle: Circle,
        transform: Affine,
        paint: Paint,
    },
    Text {
        text: String,
        origin: Point,
        transform: Affine,
        paint: Paint,
    },
    Image {
        frame: SpriteFrame,
        origin: Point,
        transform: Affine,
    },
}

impl DrawCommand {
    pub fn paint(&self) -> Option<&Paint> {
        match self {
            Self::Line { paint, .. } | Self::Circle { paint, .. } | Self::Text { paint, .. } => {
                Some(paint)
            }
            Self::Clear { .. } | Self::Image { .. } => None,
        }
    }

    /// Line endpoints mapped to surface coordinates.
    pub fn surface_line(&self) -> Option<Line> {
        match self {
            Self::Line {
                line, transform, ..
            } => Some(Line::new(*transform * line.p0, *transform * line.p1)),
            _ => None,
        }
    }
}

/// Canvas that records draw calls instead of rasterizing them.
///
/// Useful for hosts with their own rasterizer (replay the commands) and for asserting on what
/// a frame would draw.
#[derive(Clone, Debug, Default)]
pub struct CommandRecorder {
    transforms: TransformStack,
    commands: Vec<DrawCommand>,
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    /// Number of `save` calls not yet matched by a `restore`.
    pub fn save_depth(&self) -> usize {
        self.transforms.depth()
    }
}

impl Canvas for CommandRecorder {
    fn save(&mut self) {
        self.transforms.save();
    }

    fn restore(&mut self) {
        if !self.transforms.restore() {
            tracing::warn!("restore without matching save ignored");
        }
    }

    fn rotate(&mut self, degrees: f64, center: Point) {
        self.transforms.rotate(degrees, center);
    }

    fn clear(&mut self, color: Color) -> ClockfaceResult<()> {
        self.commands.push(DrawCommand::Clear { color });
        Ok(())
    }

    fn draw_line(&mut self, line: Line, paint: &Paint) -> ClockfaceResult<()> {
        self.commands.push(DrawCommand::Line {
            line,
            transform: self.transforms.current(),
            paint: paint.clone(),
        });
        Ok(())
    }

    fn draw_circle(&mut self, circle: Circle, paint: &Paint) -> ClockfaceResult<()> {
        self.commands.push(DrawCommand::Circle {
            circle,
            transform: self.transforms.current(),
            paint: paint.clone(),
        });
        Ok(())
    }

    fn draw_text(&mut self, text: &str, origin: Point, paint: &Paint) -> ClockfaceResult<()> {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            origin,
            transform: self.transforms.current(),
            paint: paint.clone(),
        });
        Ok(())
    }

    fn draw_image(&mut self, frame: &SpriteFrame, origin: Point) -> ClockfaceResult<()> {
        self.commands.push(DrawCommand::Image {
            frame: frame.clone(),
            origin,
            transform: self.transforms.current(),
        });
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/recorder.rs"]
mod tests;
