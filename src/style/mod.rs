//! Styling pass applied between parsing and rendering

pub mod color;
mod theme;

pub use color::ColorError;
pub use theme::{Theme, DEFAULT_COLOR, HOVER_COLOR};
