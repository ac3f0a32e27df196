//! clockface renders an animated analog watch face.
//!
//! A looping sprite animation is painted first and an analog clock (ticks, hour labels, three
//! hands) on top of it, against any [`Canvas`]:
//!
//! - Build a [`WatchFace`] from decoded [`SpriteFrame`]s and a reference image
//! - Feed it surface resizes and ambient/muted mode changes
//! - Call [`WatchFace::draw`] once per frame tick with a timestamp
//!
//! [`CommandRecorder`] captures draw calls for hosts with their own rasterizer;
//! [`CpuCanvas`] rasterizes with `vello_cpu`.
#![forbid(unsafe_code)]

mod assets;
mod foundation;

pub(crate) mod clock;
pub(crate) mod face;
pub(crate) mod palette;
pub(crate) mod render;
pub(crate) mod sprite;

pub use crate::foundation::core::{
    Affine, Circle, Color, Line, Point, Rgba8Premul, SurfaceSize, Vec2,
};
pub use crate::foundation::error::{ClockfaceError, ClockfaceResult};

pub use crate::assets::decode::{decode_frames, decode_image};
pub use crate::clock::angles::HandAngles;
pub use crate::clock::config::{FaceConfig, RAINBOW};
pub use crate::clock::geometry::HandGeometry;
pub use crate::clock::renderer::AnalogClockRenderer;
pub use crate::clock::style::{FaceStyle, MinorTicks};
pub use crate::face::WatchFace;
pub use crate::palette::extract::Palette;
pub use crate::palette::task::{PaletteState, PaletteTask};
pub use crate::render::canvas::{Canvas, TransformStack};
pub use crate::render::cpu::{CpuCanvas, FrameRGBA};
pub use crate::render::paint::{Paint, PaintStyle, Shadow, StrokeCap};
pub use crate::render::recorder::{CommandRecorder, DrawCommand};
pub use crate::sprite::animator::SpriteAnimator;
pub use crate::sprite::frame::SpriteFrame;
