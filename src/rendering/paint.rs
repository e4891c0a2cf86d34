//! Paint command set executed by the rasterizer

use super::layout::Rect;
use crate::bitmap::Bitmap;

#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand<'a> {
    /// Flood the whole canvas.
    Fill { rgba: [u8; 4] },
    SolidRect { rect: Rect, rgba: [u8; 4] },
    /// Copy a bitmap byte-for-byte with its top-left corner at `(x, y)`.
    Blit { x: i32, y: i32, source: &'a Bitmap },
    /// Bitmap-font text; pixels outside `clip` are dropped.
    Text {
        x: i32,
        y: i32,
        text: String,
        rgba: [u8; 4],
        scale: u32,
        clip: Rect,
    },
}

