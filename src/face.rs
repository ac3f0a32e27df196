use std::time::Duration;

use chrono::Timelike;

use crate::{
    clock::config::FaceConfig,
    clock::renderer::AnalogClockRenderer,
    foundation::core::SurfaceSize,
    foundation::error::ClockfaceResult,
    palette::task::PaletteTask,
    render::canvas::Canvas,
    sprite::animator::SpriteAnimator,
    sprite::frame::SpriteFrame,
};

/// Sprite animation and analog clock sharing one surface and one timestamp per frame.
#[derive(Debug)]
pub struct WatchFace {
    animator: SpriteAnimator,
    clock: AnalogClockRenderer,
    size: SurfaceSize,
}

impl WatchFace {
    /// Build a face and start extracting the palette from `reference` in the background.
    pub fn new(
        frames: Vec<SpriteFrame>,
        reference: SpriteFrame,
        config: FaceConfig,
        size: SurfaceSize,
    ) -> ClockfaceResult<Self> {
        let size = SurfaceSize::new(size.width, size.height)?;
        let animator = SpriteAnimator::new(frames)?;
        Self::assemble(animator, config, PaletteTask::spawn(reference), size)
    }

    /// Build a face with a palette task supplied by the caller, e.g. [`PaletteTask::ready`].
    pub fn with_palette(
        frames: Vec<SpriteFrame>,
        palette: PaletteTask,
        config: FaceConfig,
        size: SurfaceSize,
    ) -> ClockfaceResult<Self> {
        let size = SurfaceSize::new(size.width, size.height)?;
        let animator = SpriteAnimator::new(frames)?;
        Self::assemble(animator, config, palette, size)
    }

    fn assemble(
        mut animator: SpriteAnimator,
        config: FaceConfig,
        palette: PaletteTask,
        size: SurfaceSize,
    ) -> ClockfaceResult<Self> {
        let clock = AnalogClockRenderer::new(config, palette, size)?;
        animator.on_surface_resize(size.width)?;
        Ok(Self {
            animator,
            clock,
            size,
        })
    }

    pub fn animator(&self) -> &SpriteAnimator {
        &self.animator
    }

    pub fn clock(&self) -> &AnalogClockRenderer {
        &self.clock
    }

    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    /// Resize both components, or neither if the size is rejected.
    #[tracing::instrument(skip(self))]
    pub fn on_surface_resize(&mut self, width: u32, height: u32) -> ClockfaceResult<()> {
        let size = SurfaceSize::new(width, height)?;
        self.animator.on_surface_resize(size.width)?;
        self.clock.on_surface_resize(size.width, size.height)?;
        self.size = size;
        Ok(())
    }

    pub fn set_ambient(&mut self, ambient: bool) {
        self.clock.set_ambient(ambient);
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.clock.set_muted(muted);
    }

    pub fn is_ambient(&self) -> bool {
        self.clock.is_ambient()
    }

    /// Step the sprite animation forward without drawing.
    pub fn skip_frames(&mut self, n: usize) {
        for _ in 0..n {
            self.animator.produce_frame();
        }
    }

    /// Block until the background palette is applied.
    pub fn wait_palette(&mut self) {
        self.clock.wait_palette();
    }

    /// Draw one frame: background, next sprite frame, then the clock for `time`.
    pub fn draw<C, T>(&mut self, canvas: &mut C, time: &T) -> ClockfaceResult<()>
    where
        C: Canvas + ?Sized,
        T: Timelike,
    {
        self.clock.poll_palette();
        canvas.clear(self.clock.config().background)?;
        self.animator.draw(canvas)?;
        self.clock.render(canvas, time)
    }

    /// Time until the next interactive redraw, aligned to the configured interval.
    ///
    /// `None` in ambient mode: the host's once-a-minute tick drives redraws there.
    pub fn next_frame_delay(&self, now_millis: u64) -> Option<Duration> {
        if self.clock.is_ambient() {
            return None;
        }
        let interval = self.clock.config().interactive_interval_ms;
        Some(Duration::from_millis(interval - now_millis % interval))
    }
}

#[cfg(test)]
#[path = "../tests/unit/face.rs"]
mod tests;
