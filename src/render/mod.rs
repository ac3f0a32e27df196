pub(crate) mod canvas;
pub(crate) mod cpu;
pub(crate) mod paint;
pub(crate) mod recorder;
pub(crate) mod text;
