//! Layout primitives for the three-panel composite

use super::{LABEL_HEIGHT, PANEL_COUNT, PANEL_PADDING};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> i64 {
        self.x as i64 + self.width as i64
    }

    pub fn bottom(&self) -> i64 {
        self.y as i64 + self.height as i64
    }

    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= self.x as i64 && y >= self.y as i64 && x < self.right() && y < self.bottom()
    }

    /// Overlapping area of two rectangles, if any.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x0 = (self.x as i64).max(other.x as i64);
        let y0 = (self.y as i64).max(other.y as i64);
        let x1 = self.right().min(other.right());
        let y1 = self.bottom().min(other.bottom());
        if x1 <= x0 || y1 <= y0 {
            return None;
        }
        Some(Rect::new(x0 as i32, y0 as i32, (x1 - x0) as u32, (y1 - y0) as u32))
    }
}

/// One column of the composite: a label strip stacked on an image panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelBox {
    pub label: Rect,
    pub content: Rect,
}

/// Canvas size and panel placement for a composite of equally sized panels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeLayout {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub panels: [PanelBox; PANEL_COUNT],
}

impl CompositeLayout {
    /// Panels sit left to right with `PANEL_PADDING` between and around them,
    /// each under a `LABEL_HEIGHT` strip.
    pub fn new(panel_width: u32, panel_height: u32) -> Self {
        let count = PANEL_COUNT as u32;
        let canvas_width = count * panel_width + (count + 1) * PANEL_PADDING;
        let canvas_height = panel_height + LABEL_HEIGHT + 2 * PANEL_PADDING;

        let panels = std::array::from_fn(|i| {
            let x = (PANEL_PADDING + i as u32 * (panel_width + PANEL_PADDING)) as i32;
            let y = PANEL_PADDING as i32;
            PanelBox {
                label: Rect::new(x, y, panel_width, LABEL_HEIGHT),
                content: Rect::new(x, y + LABEL_HEIGHT as i32, panel_width, panel_height),
            }
        });

        Self {
            canvas_width,
            canvas_height,
            panels,
        }
    }
}
