use std::f64::consts::TAU;

use chrono::Timelike;

use crate::{
    clock::angles::HandAngles,
    clock::config::FaceConfig,
    clock::geometry::{
        CENTER_GAP_AND_CIRCLE_RADIUS, DECORATION_CIRCLE_RADIUS, HandGeometry, TEXT_Y_PADDING,
    },
    clock::style::FaceStyle,
    foundation::core::{Circle, Line, SurfaceSize, Vec2},
    foundation::error::ClockfaceResult,
    foundation::math::polar,
    palette::extract::Palette,
    palette::task::PaletteTask,
    render::canvas::Canvas,
    render::paint::Paint,
};

/// Analog clock drawn on top of the sprite animation.
///
/// Holds two immutable style snapshots (interactive and ambient). The active style is always
/// re-derived from one of them plus the muted transform, so toggling a mode and toggling it
/// back restores the exact previous paints.
#[derive(Debug)]
pub struct AnalogClockRenderer {
    config: FaceConfig,
    geometry: HandGeometry,
    palette: PaletteTask,
    interactive: FaceStyle,
    ambient_style: FaceStyle,
    active: FaceStyle,
    ambient: bool,
    muted: bool,
}

impl AnalogClockRenderer {
    pub fn new(
        config: FaceConfig,
        palette: PaletteTask,
        size: SurfaceSize,
    ) -> ClockfaceResult<Self> {
        config.validate()?;
        let size = SurfaceSize::new(size.width, size.height)?;
        let resolved = palette.resolved().unwrap_or_default();
        let interactive = FaceStyle::interactive(&resolved, &config);
        Ok(Self {
            geometry: HandGeometry::from_surface(size),
            active: interactive.clone(),
            interactive,
            ambient_style: FaceStyle::ambient(),
            palette,
            config,
            ambient: false,
            muted: false,
        })
    }

    pub fn config(&self) -> &FaceConfig {
        &self.config
    }

    pub fn geometry(&self) -> &HandGeometry {
        &self.geometry
    }

    /// Style used by the next `render`.
    pub fn style(&self) -> &FaceStyle {
        &self.active
    }

    /// The resolved palette, or the defaults while extraction is still running.
    pub fn palette(&self) -> Palette {
        self.palette.resolved().unwrap_or_default()
    }

    pub fn is_ambient(&self) -> bool {
        self.ambient
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn on_surface_resize(&mut self, width: u32, height: u32) -> ClockfaceResult<()> {
        let size = SurfaceSize::new(width, height)?;
        self.geometry = HandGeometry::from_surface(size);
        tracing::debug!(width, height, "clock geometry rebuilt");
        Ok(())
    }

    pub fn set_ambient(&mut self, ambient: bool) {
        if self.ambient == ambient {
            return;
        }
        self.ambient = ambient;
        self.refresh_style();
        tracing::debug!(ambient, "ambient mode changed");
    }

    pub fn set_muted(&mut self, muted: bool) {
        if self.muted == muted {
            return;
        }
        self.muted = muted;
        self.refresh_style();
        tracing::debug!(muted, "muted mode changed");
    }

    /// Swap in the extracted palette if it became available. Never blocks.
    pub fn poll_palette(&mut self) -> bool {
        match self.palette.poll() {
            Some(palette) => {
                self.apply_palette(&palette);
                true
            }
            None => false,
        }
    }

    /// Block until the palette is resolved and applied.
    pub fn wait_palette(&mut self) {
        if self.palette.is_pending() {
            let palette = self.palette.wait();
            self.apply_palette(&palette);
        }
    }

    fn apply_palette(&mut self, palette: &Palette) {
        self.interactive = FaceStyle::interactive(palette, &self.config);
        self.refresh_style();
    }

    fn refresh_style(&mut self) {
        let base = if self.ambient {
            &self.ambient_style
        } else {
            &self.interactive
        };
        self.active = if self.muted { base.muted() } else { base.clone() };
    }

    /// Draw ticks, labels, hands and hub for `time`.
    pub fn render<C, T>(&self, canvas: &mut C, time: &T) -> ClockfaceResult<()>
    where
        C: Canvas + ?Sized,
        T: Timelike,
    {
        let g = &self.geometry;
        let style = &self.active;

        for k in 0..12 {
            let angle = k as f64 * TAU / 12.0;
            canvas.draw_line(self.tick(angle), &style.tick)?;

            if self.config.show_hours_text {
                let hour = if k == 0 { 12 } else { k };
                let label = hour.to_string();
                let origin =
                    polar(g.center, angle, g.text_radius) + Vec2::new(0.0, TEXT_Y_PADDING);
                if let Some(border) = &style.label_border {
                    canvas.draw_text(&label, origin, border)?;
                }
                canvas.draw_text(&label, origin, &style.label)?;
            }
        }

        if self.config.show_minute_ticks {
            for k in (0..60usize).filter(|k| k % 5 != 0) {
                let angle = k as f64 * TAU / 60.0;
                canvas.draw_line(self.tick(angle), &style.minor_tick_paint(k))?;
            }
        }

        let angles = HandAngles::at(time);
        canvas.save();

        canvas.rotate(angles.hours, g.center);
        draw_bordered_line(
            canvas,
            g.upward(g.hour_length),
            style.hour_border.as_ref(),
            &style.hour,
        )?;

        canvas.rotate(angles.minutes - angles.hours, g.center);
        draw_bordered_line(
            canvas,
            g.upward(g.minute_length),
            style.minute_border.as_ref(),
            &style.minute,
        )?;

        if !self.ambient && self.config.show_seconds_hand {
            canvas.rotate(angles.seconds - angles.minutes, g.center);
            draw_bordered_line(
                canvas,
                g.upward(g.second_length),
                style.second_border.as_ref(),
                &style.second,
            )?;
            draw_bordered_line(
                canvas,
                g.downward(g.second_back_length),
                style.second_back_border.as_ref(),
                &style.second_back,
            )?;

            let decoration = Circle::new(g.center, DECORATION_CIRCLE_RADIUS);
            if let Some(border) = &style.second_border {
                canvas.draw_circle(decoration, border)?;
            }
            canvas.draw_circle(decoration, &style.second)?;
        }

        canvas.restore();
        canvas.draw_circle(
            Circle::new(g.center, CENTER_GAP_AND_CIRCLE_RADIUS),
            &style.tick,
        )
    }

    fn tick(&self, angle_rad: f64) -> Line {
        let g = &self.geometry;
        Line::new(
            polar(g.center, angle_rad, g.tick_inner_radius),
            polar(g.center, angle_rad, g.tick_outer_radius),
        )
    }
}

fn draw_bordered_line<C: Canvas + ?Sized>(
    canvas: &mut C,
    line: Line,
    border: Option<&Paint>,
    fill: &Paint,
) -> ClockfaceResult<()> {
    if let Some(border) = border {
        canvas.draw_line(line, border)?;
    }
    canvas.draw_line(line, fill)
}

#[cfg(test)]
#[path = "../../tests/unit/clock/renderer.rs"]
mod tests;
