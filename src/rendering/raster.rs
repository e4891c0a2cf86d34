//! Rasterizer: executes a paint command list into a new bitmap.

use super::font;
use super::layout::Rect;
use super::paint::PaintCommand;
use crate::bitmap::{Bitmap, CHANNELS};

/// Owned RGBA scratch buffer; every write is clipped to its bounds.
struct Canvas {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Canvas {
    fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * CHANNELS],
        }
    }

    fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    fn put_pixel(&mut self, x: i64, y: i64, rgba: [u8; 4]) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let i = (y as usize * self.width as usize + x as usize) * CHANNELS;
        self.data[i..i + CHANNELS].copy_from_slice(&rgba);
    }

    fn fill_rect(&mut self, rect: &Rect, rgba: [u8; 4]) {
        let Some(r) = rect.intersect(&self.bounds()) else {
            return;
        };
        for y in r.y as i64..r.bottom() {
            for x in r.x as i64..r.right() {
                self.put_pixel(x, y, rgba);
            }
        }
    }

    fn blit(&mut self, x: i32, y: i32, source: &Bitmap) {
        let target = Rect::new(x, y, source.width(), source.height());
        let Some(visible) = target.intersect(&self.bounds()) else {
            return;
        };
        let src_x = (visible.x - x) as usize;
        let row_bytes = visible.width as usize * CHANNELS;
        let src_stride = source.width() as usize * CHANNELS;
        let dst_stride = self.width as usize * CHANNELS;

        for row in 0..visible.height as usize {
            let src_y = (visible.y - y) as usize + row;
            let dst_y = visible.y as usize + row;
            let src = src_y * src_stride + src_x * CHANNELS;
            let dst = dst_y * dst_stride + visible.x as usize * CHANNELS;
            self.data[dst..dst + row_bytes].copy_from_slice(&source.data()[src..src + row_bytes]);
        }
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str, rgba: [u8; 4], scale: u32, clip: &Rect) {
        let mut pen_x = x as i64;
        for c in text.chars() {
            if let Some(glyph) = font::glyph(c) {
                for row in 0..font::GLYPH_HEIGHT {
                    for col in 0..font::GLYPH_WIDTH {
                        if !font::is_set(glyph, col, row) {
                            continue;
                        }
                        let gx = pen_x + (col * scale) as i64;
                        let gy = y as i64 + (row * scale) as i64;
                        for dy in 0..scale as i64 {
                            for dx in 0..scale as i64 {
                                if clip.contains(gx + dx, gy + dy) {
                                    self.put_pixel(gx + dx, gy + dy, rgba);
                                }
                            }
                        }
                    }
                }
            }
            pen_x += font::advance(scale) as i64;
        }
    }

    fn into_bitmap(self) -> Bitmap {
        Bitmap::from_raw(self.width, self.height, self.data)
    }
}

/// Run `commands` in order on a transparent `width x height` canvas.
pub fn rasterize(width: u32, height: u32, commands: &[PaintCommand<'_>]) -> Bitmap {
    let mut canvas = Canvas::new(width, height);
    for cmd in commands {
        match cmd {
            PaintCommand::Fill { rgba } => {
                let all = canvas.bounds();
                canvas.fill_rect(&all, *rgba);
            }
            PaintCommand::SolidRect { rect, rgba } => canvas.fill_rect(rect, *rgba),
            PaintCommand::Blit { x, y, source } => canvas.blit(*x, *y, source),
            PaintCommand::Text {
                x,
                y,
                text,
                rgba,
                scale,
                clip,
            } => canvas.draw_text(*x, *y, text, *rgba, *scale, clip),
        }
    }
    canvas.into_bitmap()
}
