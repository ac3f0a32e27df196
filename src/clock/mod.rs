pub(crate) mod angles;
pub(crate) mod config;
pub(crate) mod geometry;
pub(crate) mod renderer;
pub(crate) mod style;
