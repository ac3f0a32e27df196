use crate::{
    clock::config::{FaceConfig, RAINBOW},
    clock::geometry::{
        HOUR_BORDER_STROKE_WIDTH, HOUR_STROKE_WIDTH, MINUTE_BORDER_STROKE_WIDTH,
        MINUTE_STROKE_WIDTH, SECOND_BACK_BORDER_STROKE_WIDTH, SECOND_BACK_STROKE_WIDTH,
        SECOND_BORDER_STROKE_WIDTH, SECOND_STROKE_WIDTH, SHADOW_RADIUS, TEXT_BORDER_SIZE,
        TEXT_BORDER_STROKE_WIDTH, TEXT_SIZE, TICK_STROKE_WIDTH,
    },
    foundation::core::Color,
    palette::extract::Palette,
    render::paint::{Paint, PaintStyle, StrokeCap},
};

pub const MUTED_HAND_ALPHA: u8 = 100;
pub const MUTED_SECOND_ALPHA: u8 = 80;
pub const AMBIENT_MINOR_TICK: Color = Color::rgb(0x88, 0x88, 0x88);

const HAND_BORDER: Color = Color::BLACK;

/// Minor tick coloring.
#[derive(Clone, Debug, PartialEq)]
pub enum MinorTicks {
    /// Every minor tick uses the paint as is.
    Plain,
    /// Tick `k` takes `colors[k % len]`.
    Cycle(Vec<Color>),
}

/// A fixed set of paints for one display mode.
///
/// `None` borders mean the border pass is skipped.
#[derive(Clone, Debug, PartialEq)]
pub struct FaceStyle {
    pub hour: Paint,
    pub hour_border: Option<Paint>,
    pub minute: Paint,
    pub minute_border: Option<Paint>,
    /// Second hand and decoration circle.
    pub second: Paint,
    pub second_border: Option<Paint>,
    pub second_back: Paint,
    pub second_back_border: Option<Paint>,
    /// Hour ticks and center hub.
    pub tick: Paint,
    pub minor_tick: Paint,
    pub minor_ticks: MinorTicks,
    pub label: Paint,
    pub label_border: Option<Paint>,
}

impl FaceStyle {
    pub fn interactive(palette: &Palette, config: &FaceConfig) -> Self {
        let shadow = palette.shadow;
        let hand = |color: Color, width: f64| {
            Paint::stroked(color, width)
                .with_style(PaintStyle::Fill)
                .with_cap(StrokeCap::Square)
                .with_shadow(SHADOW_RADIUS, shadow)
        };
        let border = |width: f64| {
            Paint::stroked(HAND_BORDER, width)
                .with_cap(StrokeCap::Square)
                .with_shadow(SHADOW_RADIUS, shadow)
        };
        let minor_ticks = if config.rainbow_minor_ticks {
            MinorTicks::Cycle(RAINBOW.to_vec())
        } else {
            MinorTicks::Plain
        };

        Self {
            hour: hand(palette.hand, HOUR_STROKE_WIDTH),
            hour_border: Some(border(HOUR_BORDER_STROKE_WIDTH)),
            minute: hand(palette.hand, MINUTE_STROKE_WIDTH),
            minute_border: Some(border(MINUTE_BORDER_STROKE_WIDTH)),
            second: hand(palette.highlight, SECOND_STROKE_WIDTH),
            second_border: Some(border(SECOND_BORDER_STROKE_WIDTH)),
            second_back: hand(palette.highlight, SECOND_BACK_STROKE_WIDTH),
            second_back_border: Some(border(SECOND_BACK_BORDER_STROKE_WIDTH)),
            tick: Paint::stroked(config.tick_color, TICK_STROKE_WIDTH)
                .with_shadow(SHADOW_RADIUS, shadow),
            minor_tick: Paint::stroked(palette.minor_tick, TICK_STROKE_WIDTH)
                .with_shadow(SHADOW_RADIUS, shadow),
            minor_ticks,
            label: Paint::new(palette.hand).with_text_size(TEXT_SIZE),
            label_border: Some(
                Paint::stroked(HAND_BORDER, TEXT_BORDER_STROKE_WIDTH)
                    .with_text_size(TEXT_BORDER_SIZE),
            ),
        }
    }

    /// Monochrome low-power style: white on black, no shadows, no anti-aliasing, no borders.
    pub fn ambient() -> Self {
        let hand = |width: f64| {
            Paint::stroked(Color::WHITE, width)
                .with_style(PaintStyle::Fill)
                .with_cap(StrokeCap::Square)
                .flattened()
        };

        Self {
            hour: hand(HOUR_STROKE_WIDTH),
            hour_border: None,
            minute: hand(MINUTE_STROKE_WIDTH),
            minute_border: None,
            second: hand(SECOND_STROKE_WIDTH),
            second_border: None,
            second_back: hand(SECOND_BACK_STROKE_WIDTH),
            second_back_border: None,
            tick: Paint::stroked(Color::WHITE, TICK_STROKE_WIDTH).flattened(),
            minor_tick: Paint::stroked(AMBIENT_MINOR_TICK, TICK_STROKE_WIDTH).flattened(),
            minor_ticks: MinorTicks::Plain,
            label: Paint::new(Color::WHITE)
                .with_text_size(TEXT_SIZE)
                .flattened(),
            label_border: None,
        }
    }

    /// Copy with the hour, minute and second paints dimmed.
    pub fn muted(&self) -> Self {
        Self {
            hour: self.hour.clone().with_alpha(MUTED_HAND_ALPHA),
            minute: self.minute.clone().with_alpha(MUTED_HAND_ALPHA),
            second: self.second.clone().with_alpha(MUTED_SECOND_ALPHA),
            ..self.clone()
        }
    }

    /// Paint for minor tick `k` (minute index, never a multiple of five).
    pub fn minor_tick_paint(&self, k: usize) -> Paint {
        match &self.minor_ticks {
            MinorTicks::Cycle(colors) if !colors.is_empty() => Paint {
                color: colors[k % colors.len()],
                ..self.minor_tick.clone()
            },
            _ => self.minor_tick.clone(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/clock/style.rs"]
mod tests;
