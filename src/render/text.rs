use std::collections::HashMap;

use crate::foundation::error::{ClockfaceError, ClockfaceResult};

/// Shaped label plus the metrics needed to center it on a point.
#[derive(Clone)]
pub(crate) struct ShapedLabel {
    pub(crate) layout: parley::Layout<()>,
    pub(crate) width: f32,
    pub(crate) baseline: f32,
}

/// Parley-backed shaping for short labels in a single user-supplied font.
///
/// Labels repeat every frame (the twelve hour numerals), so layouts are memoized per
/// `(text, size)` pair.
pub(crate) struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<()>,
    family_name: String,
    font: vello_cpu::peniko::FontData,
    cache: HashMap<(String, u32), ShapedLabel>,
}

impl TextLayoutEngine {
    /// Register `font_bytes` and resolve its primary family name.
    pub(crate) fn new(font_bytes: &[u8]) -> ClockfaceResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            ClockfaceError::validation("no font families registered from font bytes")
        })?;
        let family_name = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| ClockfaceError::validation("registered font family has no name"))?
            .to_string();

        tracing::debug!(family = %family_name, "label font registered");
        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family_name,
            font: vello_cpu::peniko::FontData::new(
                vello_cpu::peniko::Blob::from(font_bytes.to_vec()),
                0,
            ),
            cache: HashMap::new(),
        })
    }

    pub(crate) fn font(&self) -> &vello_cpu::peniko::FontData {
        &self.font
    }

    pub(crate) fn shape(&mut self, text: &str, size_px: f32) -> ClockfaceResult<&ShapedLabel> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(ClockfaceError::validation(
                "text size must be finite and > 0",
            ));
        }

        let key = (text.to_owned(), size_px.to_bits());
        if !self.cache.contains_key(&key) {
            let mut builder = self
                .layout_ctx
                .ranged_builder(&mut self.font_ctx, text, 1.0, true);
            builder.push_default(parley::style::StyleProperty::FontStack(
                parley::style::FontStack::Source(std::borrow::Cow::Owned(
                    self.family_name.clone(),
                )),
            ));
            builder.push_default(parley::style::StyleProperty::FontSize(size_px));

            let mut layout: parley::Layout<()> = builder.build(text);
            layout.break_all_lines(None);

            let baseline = layout
                .lines()
                .next()
                .map(|line| line.metrics().baseline)
                .unwrap_or(0.0);
            let width = layout.width();
            self.cache.insert(
                key.clone(),
                ShapedLabel {
                    layout,
                    width,
                    baseline,
                },
            );
        }

        self.cache
            .get(&key)
            .ok_or_else(|| ClockfaceError::render("shaped label missing from cache"))
    }
}
