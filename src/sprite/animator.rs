use crate::{
    foundation::core::Point,
    foundation::error::{ClockfaceError, ClockfaceResult},
    render::canvas::Canvas,
    sprite::frame::SpriteFrame,
};

/// Loops over an ordered sequence of sprite frames, one step per draw.
///
/// The base frames are kept untouched for the animator's whole life. Every resize derives a
/// fresh active sequence from them, so repeated resizes never compound resampling error.
///
/// `produce_frame` always advances before returning: the first call after construction yields
/// frame `1 % len`, and `len` consecutive calls visit every frame exactly once.
#[derive(Clone, Debug)]
pub struct SpriteAnimator {
    base: Vec<SpriteFrame>,
    frames: Vec<SpriteFrame>,
    scales: Vec<f64>,
    current: usize,
}

impl SpriteAnimator {
    /// Build an animator over `frames`. Rejects an empty sequence.
    pub fn new(frames: Vec<SpriteFrame>) -> ClockfaceResult<Self> {
        if frames.is_empty() {
            return Err(ClockfaceError::validation(
                "sprite animator needs at least one frame",
            ));
        }
        if let Some((idx, f)) = frames
            .iter()
            .enumerate()
            .find(|(_, f)| f.width == 0 || f.height == 0)
        {
            return Err(ClockfaceError::validation(format!(
                "sprite frame {idx} is empty ({}x{})",
                f.width, f.height
            )));
        }

        tracing::debug!(frames = frames.len(), "sprite animator initialized");
        Ok(Self {
            scales: vec![1.0; frames.len()],
            base: frames.clone(),
            frames,
            current: 0,
        })
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Frames currently used for drawing.
    pub fn frames(&self) -> &[SpriteFrame] {
        &self.frames
    }

    /// Scale factor applied to each base frame by the last resize (1.0 before any resize).
    pub fn scales(&self) -> &[f64] {
        &self.scales
    }

    /// Rescale every base frame to `width`, replacing the active sequence wholesale.
    #[tracing::instrument(skip(self), fields(frames = self.base.len()))]
    pub fn on_surface_resize(&mut self, width: u32) -> ClockfaceResult<()> {
        if width == 0 {
            return Err(ClockfaceError::validation("surface width must be > 0"));
        }

        let mut frames = Vec::with_capacity(self.base.len());
        let mut scales = Vec::with_capacity(self.base.len());
        for base in &self.base {
            let (frame, scale) = base.scaled_to_width(width)?;
            frames.push(frame);
            scales.push(scale);
        }

        self.frames = frames;
        self.scales = scales;
        tracing::debug!(width, "sprite frames rescaled");
        Ok(())
    }

    /// Advance to the next frame and return it.
    pub fn produce_frame(&mut self) -> &SpriteFrame {
        self.current = (self.current + 1) % self.frames.len();
        &self.frames[self.current]
    }

    /// Advance and draw the new frame at the canvas origin.
    pub fn draw<C: Canvas + ?Sized>(&mut self, canvas: &mut C) -> ClockfaceResult<()> {
        let frame = self.produce_frame();
        canvas.draw_image(frame, Point::ORIGIN)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sprite/animator.rs"]
mod tests;
