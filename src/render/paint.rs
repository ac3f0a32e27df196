use serde::{Deserialize, Serialize};

use crate::foundation::core::Color;

/// Line cap applied to stroked segments.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrokeCap {
    #[default]
    Butt,
    Square,
    Round,
}

/// Whether closed shapes (circles, glyphs) are filled or outlined. Lines are always stroked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaintStyle {
    #[default]
    Fill,
    Stroke,
}

/// Soft glow drawn beneath a shape.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    pub radius: f64,
    pub color: Color,
}

/// Everything a canvas needs to know to draw one primitive.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Paint {
    pub color: Color,
    pub stroke_width: f64,
    pub cap: StrokeCap,
    pub style: PaintStyle,
    pub anti_alias: bool,
    pub shadow: Option<Shadow>,
    /// Font size in pixels; only read by text draws.
    pub text_size: f64,
}

impl Paint {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            stroke_width: 1.0,
            cap: StrokeCap::Butt,
            style: PaintStyle::Fill,
            anti_alias: true,
            shadow: None,
            text_size: 12.0,
        }
    }

    pub fn stroked(color: Color, width: f64) -> Self {
        Self {
            stroke_width: width,
            style: PaintStyle::Stroke,
            ..Self::new(color)
        }
    }

    pub fn with_style(mut self, style: PaintStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_cap(mut self, cap: StrokeCap) -> Self {
        self.cap = cap;
        self
    }

    pub fn with_shadow(mut self, radius: f64, color: Color) -> Self {
        self.shadow = Some(Shadow { radius, color });
        self
    }

    pub fn with_text_size(mut self, size: f64) -> Self {
        self.text_size = size;
        self
    }

    pub fn with_alpha(mut self, alpha: u8) -> Self {
        self.color = self.color.with_alpha(alpha);
        self
    }

    /// Strip anti-aliasing and shadow, as required by low-power displays.
    pub fn flattened(mut self) -> Self {
        self.anti_alias = false;
        self.shadow = None;
        self
    }
}
