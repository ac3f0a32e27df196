use anyhow::Context;

use crate::{
    foundation::error::{ClockfaceError, ClockfaceResult},
    foundation::math::mul_div255_u8,
    sprite::frame::SpriteFrame,
};

/// Decode encoded image bytes (PNG, JPEG, ...) into a premultiplied sprite frame.
pub fn decode_image(bytes: &[u8]) -> ClockfaceResult<SpriteFrame> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    SpriteFrame::from_rgba8_premul(width, height, rgba8_premul)
}

/// Decode an ordered list of encoded frames, failing on the first bad one.
pub fn decode_frames<B: AsRef<[u8]>>(encoded: &[B]) -> ClockfaceResult<Vec<SpriteFrame>> {
    encoded
        .iter()
        .enumerate()
        .map(|(idx, bytes)| {
            decode_image(bytes.as_ref()).map_err(|e| with_frame_index(e, idx))
        })
        .collect()
}

/// Name the failing frame while keeping the error variant.
fn with_frame_index(err: ClockfaceError, idx: usize) -> ClockfaceError {
    match err {
        ClockfaceError::Other(source) => {
            ClockfaceError::Other(source.context(format!("decode sprite frame {idx}")))
        }
        ClockfaceError::Validation(msg) => {
            ClockfaceError::validation(format!("sprite frame {idx}: {msg}"))
        }
        ClockfaceError::Render(msg) => ClockfaceError::render(format!("sprite frame {idx}: {msg}")),
        ClockfaceError::Config(msg) => ClockfaceError::config(format!("sprite frame {idx}: {msg}")),
    }
}

fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = mul_div255_u8(u16::from(px[0]), a);
        px[1] = mul_div255_u8(u16::from(px[1]), a);
        px[2] = mul_div255_u8(u16::from(px[2]), a);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
