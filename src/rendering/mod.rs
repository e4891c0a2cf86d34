//! Composite rendering: design | live | diff panels with burned-in labels.
//!
//! The composite is built as a small display list (see [`paint`]) laid out by
//! [`layout`] and executed by [`raster`], so no text-rendering dependency is
//! needed.

pub mod font;
pub mod layout;
pub mod paint;
pub mod raster;

use crate::bitmap::Bitmap;
use layout::CompositeLayout;
use paint::PaintCommand;

pub const PANEL_COUNT: usize = 3;
/// Gap between and around panels, in pixels.
pub const PANEL_PADDING: u32 = 8;
/// Height of the label strip above each panel.
pub const LABEL_HEIGHT: u32 = 28;
pub const TEXT_SCALE: u32 = 2;

pub const BACKGROUND_RGBA: [u8; 4] = [24, 24, 24, 255];
pub const LABEL_RGBA: [u8; 4] = [30, 30, 30, 255];
pub const TEXT_RGBA: [u8; 4] = [255, 255, 255, 255];

pub const DESIGN_LABEL: &str = "FIGMA DESIGN";
pub const LIVE_LABEL: &str = "LIVE IMPLEMENTATION";

/// `"DIFF (NN.N%)"` with one decimal place.
pub fn format_diff_label(diff_percent: f64) -> String {
    format!("DIFF ({:.1}%)", diff_percent)
}

/// Render the three equally sized bitmaps side by side under their labels.
pub fn build_composite(design: &Bitmap, live: &Bitmap, diff: &Bitmap, diff_percent: f64) -> Bitmap {
    let layout = CompositeLayout::new(design.width(), design.height());
    let commands = composite_commands(&layout, [design, live, diff], diff_percent);
    raster::rasterize(layout.canvas_width, layout.canvas_height, &commands)
}

fn composite_commands<'a>(
    layout: &CompositeLayout,
    panels: [&'a Bitmap; PANEL_COUNT],
    diff_percent: f64,
) -> Vec<PaintCommand<'a>> {
    let labels = [
        DESIGN_LABEL.to_string(),
        LIVE_LABEL.to_string(),
        format_diff_label(diff_percent),
    ];

    let mut commands = vec![PaintCommand::Fill {
        rgba: BACKGROUND_RGBA,
    }];

    for ((slot, source), text) in layout.panels.iter().zip(panels).zip(labels) {
        let text_w = font::text_width(&text, TEXT_SCALE) as i64;
        let text_h = (font::GLYPH_HEIGHT * TEXT_SCALE) as i64;
        let x = slot.label.x as i64 + (slot.label.width as i64 - text_w) / 2;
        let y = slot.label.y as i64 + (slot.label.height as i64 - text_h) / 2;

        commands.push(PaintCommand::SolidRect {
            rect: slot.label,
            rgba: LABEL_RGBA,
        });
        commands.push(PaintCommand::Text {
            x: x as i32,
            y: y as i32,
            text,
            rgba: TEXT_RGBA,
            scale: TEXT_SCALE,
            clip: slot.label,
        });
        commands.push(PaintCommand::Blit {
            x: slot.content.x,
            y: slot.content.y,
            source,
        });
    }

    commands
}
