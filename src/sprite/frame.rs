use std::sync::Arc;

use image::{ImageBuffer, Rgba, imageops::FilterType};

use crate::foundation::core::Rgba8Premul;
use crate::foundation::error::{ClockfaceError, ClockfaceResult};

/// A decoded sprite frame.
///
/// Pixels are premultiplied RGBA8, row-major, tightly packed. The buffer is shared, so cloning a
/// frame never copies pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpriteFrame {
    pub width: u32,
    pub height: u32,
    pub rgba8_premul: Arc<Vec<u8>>,
}

impl SpriteFrame {
    /// Wrap premultiplied RGBA8 pixels, validating dimensions against the buffer length.
    pub fn from_rgba8_premul(width: u32, height: u32, rgba8_premul: Vec<u8>) -> ClockfaceResult<Self> {
        if width == 0 || height == 0 {
            return Err(ClockfaceError::validation(format!(
                "sprite frame must be non-empty, got {width}x{height}"
            )));
        }
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|px| px.checked_mul(4))
            .ok_or_else(|| ClockfaceError::validation("sprite frame dimensions overflow"))?;
        if rgba8_premul.len() != expected {
            return Err(ClockfaceError::validation(format!(
                "sprite frame byte length mismatch: expected {expected}, got {}",
                rgba8_premul.len()
            )));
        }
        Ok(Self {
            width,
            height,
            rgba8_premul: Arc::new(rgba8_premul),
        })
    }

    /// Single-color frame; mostly useful for hosts that want a placeholder and for tests.
    ///
    /// Accepts a [`Color`](crate::foundation::core::Color) (premultiplied here) or raw
    /// premultiplied `[r, g, b, a]` bytes.
    pub fn solid(
        width: u32,
        height: u32,
        fill: impl Into<Rgba8Premul>,
    ) -> ClockfaceResult<Self> {
        let px = (width as usize).saturating_mul(height as usize);
        Self::from_rgba8_premul(width, height, fill.into().to_array().repeat(px))
    }

    /// Premultiplied pixel at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.rgba8_premul.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Resample so the frame is `target_width` wide, keeping the aspect ratio.
    ///
    /// Returns the new frame and the scale factor `target_width / width`. Resampling is
    /// bilinear and runs on premultiplied data so transparent edges do not bleed.
    pub fn scaled_to_width(&self, target_width: u32) -> ClockfaceResult<(Self, f64)> {
        if target_width == 0 {
            return Err(ClockfaceError::validation("target width must be > 0"));
        }
        let scale = f64::from(target_width) / f64::from(self.width);
        let w = scaled_dim(self.width, scale);
        let h = scaled_dim(self.height, scale);
        if w == self.width && h == self.height {
            return Ok((self.clone(), scale));
        }

        let src: ImageBuffer<Rgba<u8>, Vec<u8>> =
            ImageBuffer::from_raw(self.width, self.height, self.rgba8_premul.as_ref().clone())
                .ok_or_else(|| ClockfaceError::validation("sprite frame buffer is too small"))?;
        let scaled = image::imageops::resize(&src, w, h, FilterType::Triangle);
        Ok((Self::from_rgba8_premul(w, h, scaled.into_raw())?, scale))
    }
}

fn scaled_dim(dim: u32, scale: f64) -> u32 {
    (f64::from(dim) * scale).round().clamp(1.0, f64::from(u32::MAX)) as u32
}

#[cfg(test)]
#[path = "../../tests/unit/sprite/frame.rs"]
mod tests;
