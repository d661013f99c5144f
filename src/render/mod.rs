//! Drawing the area-proportional overlap diagram.
//!
//! [`render_diagram`] takes a solved [`CircleLayout`](crate::geometry::CircleLayout)
//! and writes a single image. Output format follows the file extension:
//!
//! | Extension | Output |
//! |-----------|--------|
//! | `.svg` | SVG (no font lookup needed) |
//! | `.png`, other, none | raster via the bitmap encoder |
//!
//! Raster text needs a system `sans-serif` font.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod venn;

pub use venn::render_diagram;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("render: {path}: invalid canvas size {width}x{height}")]
    InvalidSize { path: String, width: u32, height: u32 },

    #[error("render: {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("render: {path}: drawing failed: {message}")]
    Draw { path: String, message: String },
}

/// Appearance of the overlap diagram
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramStyle {
    /// Canvas size in pixels
    pub width: u32,
    pub height: u32,

    /// Captions naming each set's origin
    pub label_a: String,
    pub label_b: String,

    /// Fill colors as RGB
    pub color_a: (u8, u8, u8),
    pub color_b: (u8, u8, u8),

    /// Fill opacity for both circles, 0.0 to 1.0
    pub opacity: f64,

    pub count_font_size: u32,
    pub caption_font_size: u32,
}

impl Default for DiagramStyle {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
            label_a: "valid".to_string(),
            label_b: "own".to_string(),
            color_a: (0x4C, 0x78, 0xA8),
            color_b: (0xF5, 0x85, 0x18),
            opacity: 0.4,
            count_font_size: 34,
            caption_font_size: 28,
        }
    }
}
