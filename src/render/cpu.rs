use std::collections::HashMap;
use std::sync::Arc;

use vello_cpu::kurbo::Shape as _;

use crate::{
    foundation::core::{Affine, Circle, Color, Line, Point, SurfaceSize},
    foundation::error::{ClockfaceError, ClockfaceResult},
    foundation::math::unpremul_u8,
    render::canvas::{Canvas, TransformStack},
    render::paint::{Paint, PaintStyle, StrokeCap},
    render::text::TextLayoutEngine,
    sprite::frame::SpriteFrame,
};

/// A rendered frame as RGBA8 pixels.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Pixel at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Convert to straight alpha, as image encoders expect.
    pub fn into_straight(mut self) -> Self {
        if self.premultiplied {
            for px in self.data.chunks_exact_mut(4) {
                let a = px[3];
                if a == 0 || a == 255 {
                    continue;
                }
                px[0] = unpremul_u8(px[0], a);
                px[1] = unpremul_u8(px[1], a);
                px[2] = unpremul_u8(px[2], a);
            }
            self.premultiplied = false;
        }
        self
    }
}

/// Canvas rasterizing into premultiplied RGBA8 with `vello_cpu`.
///
/// Draws accumulate until [`CpuCanvas::finish`], which renders them and starts a fresh frame.
/// Anti-aliasing is always on; the paint flag is advisory for this backend. Shadows are drawn
/// as a wider translucent pass beneath the shape. Text needs a font
/// ([`CpuCanvas::with_font`]); without one, text draws are skipped.
pub struct CpuCanvas {
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
    transforms: TransformStack,
    text: Option<TextLayoutEngine>,
    // Keyed by pixel buffer address; the stored Arc keeps the address from being reused.
    image_cache: HashMap<usize, (Arc<Vec<u8>>, vello_cpu::Image)>,
}

impl CpuCanvas {
    pub fn new(size: SurfaceSize) -> ClockfaceResult<Self> {
        let width: u16 = size
            .width
            .try_into()
            .map_err(|_| ClockfaceError::render("surface width exceeds u16"))?;
        let height: u16 = size
            .height
            .try_into()
            .map_err(|_| ClockfaceError::render("surface height exceeds u16"))?;
        if width == 0 || height == 0 {
            return Err(ClockfaceError::validation("surface size must be non-zero"));
        }

        Ok(Self {
            width,
            height,
            ctx: vello_cpu::RenderContext::new(width, height),
            transforms: TransformStack::new(),
            text: None,
            image_cache: HashMap::new(),
        })
    }

    /// Use `font_bytes` (TTF/OTF) for text draws.
    pub fn with_font(mut self, font_bytes: &[u8]) -> ClockfaceResult<Self> {
        self.text = Some(TextLayoutEngine::new(font_bytes)?);
        Ok(self)
    }

    pub fn size(&self) -> SurfaceSize {
        SurfaceSize {
            width: u32::from(self.width),
            height: u32::from(self.height),
        }
    }

    /// Rasterize everything drawn since the last `finish` and reset for the next frame.
    #[tracing::instrument(skip(self), fields(width = self.width, height = self.height))]
    pub fn finish(&mut self) -> ClockfaceResult<FrameRGBA> {
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);

        self.ctx = vello_cpu::RenderContext::new(self.width, self.height);
        if self.transforms.depth() != 0 {
            tracing::warn!(
                depth = self.transforms.depth(),
                "frame finished with unbalanced save"
            );
        }
        self.transforms.reset();
        // Frames nobody else holds (e.g. the previous scale after a resize) are never drawn again.
        self.image_cache
            .retain(|_, (pixels, _)| Arc::strong_count(pixels) > 1);

        Ok(FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }

    fn apply_transform(&mut self, local: Affine) {
        let t = self.transforms.current() * local;
        self.ctx.set_transform(affine_to_cpu(t));
        self.ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
    }

    fn stroke(&mut self, path: &vello_cpu::kurbo::BezPath, paint: &Paint) {
        if let Some(shadow) = paint.shadow {
            self.ctx.set_paint(shadow_color(shadow.color, paint.color));
            self.ctx
                .set_stroke(stroke_for(paint.stroke_width + shadow.radius, paint.cap));
            self.ctx.stroke_path(path);
        }
        self.ctx.set_paint(color_to_cpu(paint.color));
        self.ctx.set_stroke(stroke_for(paint.stroke_width, paint.cap));
        self.ctx.stroke_path(path);
    }

    fn image_paint_for(&mut self, frame: &SpriteFrame) -> ClockfaceResult<vello_cpu::Image> {
        let key = Arc::as_ptr(&frame.rgba8_premul) as usize;
        if let Some((_, paint)) = self.image_cache.get(&key) {
            return Ok(paint.clone());
        }

        let pixmap = image_premul_bytes_to_pixmap(
            frame.rgba8_premul.as_slice(),
            frame.width,
            frame.height,
        )?;
        let paint = vello_cpu::Image {
            image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
            sampler: vello_cpu::peniko::ImageSampler::default(),
        };
        self.image_cache
            .insert(key, (frame.rgba8_premul.clone(), paint.clone()));
        Ok(paint)
    }
}

impl Canvas for CpuCanvas {
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
        // Drop whatever was queued; the surface starts over from this color.
        self.ctx = vello_cpu::RenderContext::new(self.width, self.height);
        if color.a == 0 {
            return Ok(());
        }
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(color_to_cpu(color));
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(self.width),
            f64::from(self.height),
        ));
        Ok(())
    }

    fn draw_line(&mut self, line: Line, paint: &Paint) -> ClockfaceResult<()> {
        self.apply_transform(Affine::IDENTITY);
        let mut path = vello_cpu::kurbo::BezPath::new();
        path.move_to(point_to_cpu(line.p0));
        path.line_to(point_to_cpu(line.p1));
        self.stroke(&path, paint);
        Ok(())
    }

    fn draw_circle(&mut self, circle: Circle, paint: &Paint) -> ClockfaceResult<()> {
        self.apply_transform(Affine::IDENTITY);
        let cpu_circle = vello_cpu::kurbo::Circle::new(point_to_cpu(circle.center), circle.radius);
        match paint.style {
            PaintStyle::Stroke => {
                let path = cpu_circle.to_path(0.1);
                self.stroke(&path, paint);
            }
            PaintStyle::Fill => {
                if let Some(shadow) = paint.shadow {
                    let glow = vello_cpu::kurbo::Circle::new(
                        cpu_circle.center,
                        circle.radius + shadow.radius / 2.0,
                    );
                    self.ctx.set_paint(shadow_color(shadow.color, paint.color));
                    self.ctx.fill_path(&glow.to_path(0.1));
                }
                self.ctx.set_paint(color_to_cpu(paint.color));
                self.ctx.fill_path(&cpu_circle.to_path(0.1));
            }
        }
        Ok(())
    }

    fn draw_text(&mut self, text: &str, origin: Point, paint: &Paint) -> ClockfaceResult<()> {
        let Some(engine) = self.text.as_mut() else {
            tracing::trace!(text, "no label font; text skipped");
            return Ok(());
        };

        let font = engine.font().clone();
        let label = engine.shape(text, paint.text_size as f32)?;
        let offset = Affine::translate((
            origin.x - f64::from(label.width) / 2.0,
            origin.y - f64::from(label.baseline),
        ));

        let t = self.transforms.current() * offset;
        self.ctx.set_transform(affine_to_cpu(t));
        self.ctx.set_paint(color_to_cpu(paint.color));
        if paint.style == PaintStyle::Stroke {
            self.ctx
                .set_stroke(stroke_for(paint.stroke_width, StrokeCap::Round));
        }

        for line in label.layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                let builder = self
                    .ctx
                    .glyph_run(&font)
                    .font_size(run.run().font_size());
                match paint.style {
                    PaintStyle::Fill => builder.fill_glyphs(glyphs),
                    PaintStyle::Stroke => builder.stroke_glyphs(glyphs),
                }
            }
        }
        Ok(())
    }

    fn draw_image(&mut self, frame: &SpriteFrame, origin: Point) -> ClockfaceResult<()> {
        let image_paint = self.image_paint_for(frame)?;
        self.apply_transform(Affine::translate(origin.to_vec2()));
        self.ctx.set_paint(image_paint);
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(frame.width),
            f64::from(frame.height),
        ));
        Ok(())
    }
}

fn color_to_cpu(c: Color) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn shadow_color(shadow: Color, fill: Color) -> vello_cpu::peniko::Color {
    // The glow fades with the shape it belongs to.
    let a = (u16::from(shadow.a) * u16::from(fill.a) / 255 / 3) as u8;
    color_to_cpu(shadow.with_alpha(a))
}

fn stroke_for(width: f64, cap: StrokeCap) -> vello_cpu::kurbo::Stroke {
    let cap = match cap {
        StrokeCap::Butt => vello_cpu::kurbo::Cap::Butt,
        StrokeCap::Square => vello_cpu::kurbo::Cap::Square,
        StrokeCap::Round => vello_cpu::kurbo::Cap::Round,
    };
    vello_cpu::kurbo::Stroke::new(width).with_caps(cap)
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn image_premul_bytes_to_pixmap(
    rgba8_premul: &[u8],
    width: u32,
    height: u32,
) -> ClockfaceResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| ClockfaceError::render("image width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| ClockfaceError::render("image height exceeds u16"))?;
    if rgba8_premul.len() != width as usize * height as usize * 4 {
        return Err(ClockfaceError::render("sprite frame byte length mismatch"));
    }

    let mut may_have_opacities = false;
    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for px in rgba8_premul.chunks_exact(4) {
        let a = px[3];
        may_have_opacities |= a != 255;
        pixels.push(vello_cpu::peniko::color::PremulRgba8 {
            r: px[0],
            g: px[1],
            b: px[2],
            a,
        });
    }

    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels,
        w,
        h,
        may_have_opacities,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
