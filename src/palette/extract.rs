use std::collections::HashMap;

use crate::{
    foundation::core::Color, foundation::math::unpremul_u8, sprite::frame::SpriteFrame,
};

/// Accent colors derived from a reference image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Hour and minute hands, hour labels. Light-vibrant swatch.
    pub hand: Color,
    /// Second hand and its counterweight. Vibrant swatch.
    pub highlight: Color,
    /// Glow beneath hands and ticks. Dark-muted swatch.
    pub shadow: Color,
    /// Minor ticks when the rainbow cycle is disabled. Muted swatch.
    pub minor_tick: Color,
}

impl Palette {
    pub const DEFAULT_HAND: Color = Color::WHITE;
    pub const DEFAULT_HIGHLIGHT: Color = Color::RED;
    pub const DEFAULT_SHADOW: Color = Color::BLACK;
    pub const DEFAULT_MINOR_TICK: Color = Color::rgb(0xAA, 0xAA, 0xAA);

    /// Derive swatches from `frame`; any swatch without a candidate keeps its default.
    #[tracing::instrument(skip(frame), fields(width = frame.width, height = frame.height))]
    pub fn extract(frame: &SpriteFrame) -> Self {
        let candidates = quantize(frame);
        if candidates.is_empty() {
            tracing::warn!("reference image has no usable pixels; palette uses defaults");
            return Self::default();
        }

        let max_population = candidates.iter().map(|c| c.population).max().unwrap_or(1);
        let mut used = vec![false; candidates.len()];
        let mut pick = |target: &Target, fallback: Color| {
            best_match(&candidates, &used, max_population, target)
                .map(|idx| {
                    used[idx] = true;
                    candidates[idx].color
                })
                .unwrap_or(fallback)
        };

        let palette = Self {
            hand: pick(&LIGHT_VIBRANT, Self::DEFAULT_HAND),
            highlight: pick(&VIBRANT, Self::DEFAULT_HIGHLIGHT),
            shadow: pick(&DARK_MUTED, Self::DEFAULT_SHADOW),
            minor_tick: pick(&MUTED, Self::DEFAULT_MINOR_TICK),
        };
        tracing::debug!(
            hand = %palette.hand.to_hex(),
            highlight = %palette.highlight.to_hex(),
            shadow = %palette.shadow.to_hex(),
            minor_tick = %palette.minor_tick.to_hex(),
            "palette extracted"
        );
        palette
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            hand: Self::DEFAULT_HAND,
            highlight: Self::DEFAULT_HIGHLIGHT,
            shadow: Self::DEFAULT_SHADOW,
            minor_tick: Self::DEFAULT_MINOR_TICK,
        }
    }
}

/// Only pixels this opaque (or more) take part in extraction.
const MIN_ALPHA: u8 = 128;
/// Larger images are sampled on a grid so roughly this many pixels are visited.
const MAX_SAMPLED_PIXELS: u64 = 112 * 112;
/// Near-black and near-white carry no accent information.
const MIN_LIGHTNESS: f64 = 0.05;
const MAX_LIGHTNESS: f64 = 0.95;

const WEIGHT_SATURATION: f64 = 0.24;
const WEIGHT_LIGHTNESS: f64 = 0.52;
const WEIGHT_POPULATION: f64 = 0.24;

struct Target {
    lightness: [f64; 3],
    saturation: [f64; 3],
}

const LIGHT_VIBRANT: Target = Target {
    lightness: [0.55, 0.74, 1.0],
    saturation: [0.35, 1.0, 1.0],
};
const VIBRANT: Target = Target {
    lightness: [0.30, 0.50, 0.70],
    saturation: [0.35, 1.0, 1.0],
};
const DARK_MUTED: Target = Target {
    lightness: [0.0, 0.26, 0.45],
    saturation: [0.0, 0.3, 0.4],
};
const MUTED: Target = Target {
    lightness: [0.30, 0.50, 0.70],
    saturation: [0.0, 0.3, 0.4],
};

#[derive(Clone, Copy, Debug)]
struct Candidate {
    color: Color,
    population: u64,
    saturation: f64,
    lightness: f64,
}

#[derive(Default)]
struct Bucket {
    count: u64,
    r: u64,
    g: u64,
    b: u64,
}

fn quantize(frame: &SpriteFrame) -> Vec<Candidate> {
    let area = u64::from(frame.width) * u64::from(frame.height);
    let step = ((area as f64 / MAX_SAMPLED_PIXELS as f64).sqrt().floor() as u32).max(1);

    let mut buckets: HashMap<u16, Bucket> = HashMap::new();
    for y in (0..frame.height).step_by(step as usize) {
        for x in (0..frame.width).step_by(step as usize) {
            let Some([r, g, b, a]) = frame.pixel(x, y) else {
                continue;
            };
            if a < MIN_ALPHA {
                continue;
            }
            let (r, g, b) = (unpremul_u8(r, a), unpremul_u8(g, a), unpremul_u8(b, a));
            let key = (u16::from(r >> 3) << 10) | (u16::from(g >> 3) << 5) | u16::from(b >> 3);
            let bucket = buckets.entry(key).or_default();
            bucket.count += 1;
            bucket.r += u64::from(r);
            bucket.g += u64::from(g);
            bucket.b += u64::from(b);
        }
    }

    let mut candidates: Vec<(u16, Candidate)> = buckets
        .into_iter()
        .filter_map(|(key, bucket)| {
            let n = bucket.count;
            let color = Color::rgb(
                (bucket.r / n) as u8,
                (bucket.g / n) as u8,
                (bucket.b / n) as u8,
            );
            let (_, saturation, lightness) = rgb_to_hsl(color);
            if !(MIN_LIGHTNESS..=MAX_LIGHTNESS).contains(&lightness) {
                return None;
            }
            Some((
                key,
                Candidate {
                    color,
                    population: n,
                    saturation,
                    lightness,
                },
            ))
        })
        .collect();
    // HashMap iteration order is random; keep tie-breaking deterministic.
    candidates.sort_unstable_by_key(|(key, _)| *key);
    candidates.into_iter().map(|(_, c)| c).collect()
}

fn best_match(
    candidates: &[Candidate],
    used: &[bool],
    max_population: u64,
    target: &Target,
) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (idx, c) in candidates.iter().enumerate() {
        if used[idx] {
            continue;
        }
        let [s_min, s_target, s_max] = target.saturation;
        let [l_min, l_target, l_max] = target.lightness;
        if !(s_min..=s_max).contains(&c.saturation) || !(l_min..=l_max).contains(&c.lightness) {
            continue;
        }

        let score = WEIGHT_SATURATION * (1.0 - (c.saturation - s_target).abs())
            + WEIGHT_LIGHTNESS * (1.0 - (c.lightness - l_target).abs())
            + WEIGHT_POPULATION * (c.population as f64 / max_population as f64);
        if best.is_none_or(|(_, s)| score > s) {
            best = Some((idx, score));
        }
    }
    best.map(|(idx, _)| idx)
}

/// sRGB to HSL; hue in degrees, saturation and lightness in `0..=1`.
pub(crate) fn rgb_to_hsl(c: Color) -> (f64, f64, f64) {
    let r = f64::from(c.r) / 255.0;
    let g = f64::from(c.g) / 255.0;
    let b = f64::from(c.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    let d = max - min;
    if d == 0.0 {
        return (0.0, 0.0, l);
    }

    let s = d / (1.0 - (2.0 * l - 1.0).abs());
    let h = if max == r {
        ((g - b) / d).rem_euclid(6.0)
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };
    (h * 60.0, s.clamp(0.0, 1.0), l)
}

#[cfg(test)]
#[path = "../../tests/unit/palette/extract.rs"]
mod tests;
