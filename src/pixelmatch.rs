//! Perceptual per-pixel diff.
//!
//! Pixels are compared in YIQ space; a pixel counts as a mismatch when its
//! weighted squared delta exceeds `35215 * threshold^2` (35215 being the
//! largest possible delta). Pixels that look like anti-aliased edges in
//! either image are painted but not counted.

use crate::bitmap::{Bitmap, CHANNELS};

/// Largest possible YIQ delta between two colors.
const MAX_YIQ_DELTA: f64 = 35215.0;

const DIFF_RGB: [u8; 3] = [255, 0, 0];
const AA_RGB: [u8; 3] = [255, 255, 0];
/// Opacity of the faded design image under the diff overlay.
const FADE_ALPHA: f64 = 0.1;

/// Result of a diff pass over two equally sized bitmaps.
#[derive(Debug, Clone)]
pub struct DiffOutput {
    pub mismatched: u64,
    pub visualization: Bitmap,
}

/// A replaceable perceptual diff algorithm.
///
/// Implementations receive two bitmaps of identical dimensions and return the
/// number of mismatched pixels plus a same-sized visualization.
pub trait PixelDiff: Send + Sync {
    fn diff(&self, a: &Bitmap, b: &Bitmap, threshold: f64) -> DiffOutput;
}

/// Default [`PixelDiff`] implementation with anti-aliasing suppression.
#[derive(Debug, Clone, Copy, Default)]
pub struct PixelMatch {
    /// Count anti-aliased pixels as mismatches too.
    pub include_aa: bool,
}

impl PixelDiff for PixelMatch {
    fn diff(&self, a: &Bitmap, b: &Bitmap, threshold: f64) -> DiffOutput {
        debug_assert_eq!((a.width(), a.height()), (b.width(), b.height()));

        let width = a.width() as usize;
        let height = a.height() as usize;
        let img1 = a.data();
        let img2 = b.data();
        let mut out = vec![0u8; img1.len()];

        if img1 == img2 {
            for pos in (0..img1.len()).step_by(CHANNELS) {
                draw_gray_pixel(img1, pos, &mut out);
            }
            return DiffOutput {
                mismatched: 0,
                visualization: to_bitmap(a, out),
            };
        }

        let max_delta = MAX_YIQ_DELTA * threshold * threshold;
        let mut mismatched = 0u64;

        for y in 0..height {
            for x in 0..width {
                let pos = (y * width + x) * CHANNELS;
                let delta = color_delta(img1, img2, pos, pos, false);

                if delta.abs() > max_delta {
                    if !self.include_aa
                        && (antialiased(img1, x, y, width, height, img2)
                            || antialiased(img2, x, y, width, height, img1))
                    {
                        draw_pixel(&mut out, pos, AA_RGB);
                    } else {
                        draw_pixel(&mut out, pos, DIFF_RGB);
                        mismatched += 1;
                    }
                } else {
                    draw_gray_pixel(img1, pos, &mut out);
                }
            }
        }

        DiffOutput {
            mismatched,
            visualization: to_bitmap(a, out),
        }
    }
}

fn to_bitmap(like: &Bitmap, data: Vec<u8>) -> Bitmap {
    Bitmap::from_raw(like.width(), like.height(), data)
}

/// Whether the pixel at `(x1, y1)` looks like part of an anti-aliased edge.
///
/// Checks the 3x3 neighbourhood for a darkest and a brightest sibling; if
/// either extreme sits in a flat area in both images, the pixel is a blend.
fn antialiased(img: &[u8], x1: usize, y1: usize, width: usize, height: usize, other: &[u8]) -> bool {
    let x0 = x1.saturating_sub(1);
    let y0 = y1.saturating_sub(1);
    let x2 = (x1 + 1).min(width - 1);
    let y2 = (y1 + 1).min(height - 1);
    let pos = (y1 * width + x1) * CHANNELS;

    let mut zeroes = if x1 == x0 || x1 == x2 || y1 == y0 || y1 == y2 { 1 } else { 0 };
    let mut min = 0.0;
    let mut max = 0.0;
    let (mut min_x, mut min_y, mut max_x, mut max_y) = (0, 0, 0, 0);

    for x in x0..=x2 {
        for y in y0..=y2 {
            if x == x1 && y == y1 {
                continue;
            }
            let delta = color_delta(img, img, pos, (y * width + x) * CHANNELS, true);
            if delta == 0.0 {
                zeroes += 1;
                if zeroes > 2 {
                    return false;
                }
            } else if delta < min {
                min = delta;
                min_x = x;
                min_y = y;
            } else if delta > max {
                max = delta;
                max_x = x;
                max_y = y;
            }
        }
    }

    if min == 0.0 || max == 0.0 {
        return false;
    }

    (has_many_siblings(img, min_x, min_y, width, height)
        && has_many_siblings(other, min_x, min_y, width, height))
        || (has_many_siblings(img, max_x, max_y, width, height)
            && has_many_siblings(other, max_x, max_y, width, height))
}

/// Whether at least three neighbours share the exact color of `(x1, y1)`.
fn has_many_siblings(img: &[u8], x1: usize, y1: usize, width: usize, height: usize) -> bool {
    let x0 = x1.saturating_sub(1);
    let y0 = y1.saturating_sub(1);
    let x2 = (x1 + 1).min(width - 1);
    let y2 = (y1 + 1).min(height - 1);
    let pos = (y1 * width + x1) * CHANNELS;
    let here = &img[pos..pos + CHANNELS];

    let mut zeroes = if x1 == x0 || x1 == x2 || y1 == y0 || y1 == y2 { 1 } else { 0 };

    for x in x0..=x2 {
        for y in y0..=y2 {
            if x == x1 && y == y1 {
                continue;
            }
            let pos2 = (y * width + x) * CHANNELS;
            if here == &img[pos2..pos2 + CHANNELS] {
                zeroes += 1;
            }
            if zeroes > 2 {
                return true;
            }
        }
    }
    false
}

/// Signed squared YIQ distance between pixel `k` of `img1` and pixel `m` of `img2`.
///
/// Negative when the first pixel is brighter. With `y_only` the plain
/// luminance difference is returned instead.
fn color_delta(img1: &[u8], img2: &[u8], k: usize, m: usize, y_only: bool) -> f64 {
    let p1 = &img1[k..k + CHANNELS];
    let p2 = &img2[m..m + CHANNELS];
    if p1 == p2 {
        return 0.0;
    }

    let (r1, g1, b1) = blend_pixel(p1);
    let (r2, g2, b2) = blend_pixel(p2);

    let y1 = rgb2y(r1, g1, b1);
    let y2 = rgb2y(r2, g2, b2);
    let y = y1 - y2;
    if y_only {
        return y;
    }

    let i = rgb2i(r1, g1, b1) - rgb2i(r2, g2, b2);
    let q = rgb2q(r1, g1, b1) - rgb2q(r2, g2, b2);
    let delta = 0.5053 * y * y + 0.299 * i * i + 0.1957 * q * q;

    if y1 > y2 {
        -delta
    } else {
        delta
    }
}

/// Composite a possibly translucent pixel over white.
fn blend_pixel(p: &[u8]) -> (f64, f64, f64) {
    let (r, g, b, a) = (p[0] as f64, p[1] as f64, p[2] as f64, p[3]);
    if a < 255 {
        let a = a as f64 / 255.0;
        (blend(r, a), blend(g, a), blend(b, a))
    } else {
        (r, g, b)
    }
}

fn blend(c: f64, a: f64) -> f64 {
    255.0 + (c - 255.0) * a
}

fn rgb2y(r: f64, g: f64, b: f64) -> f64 {
    r * 0.29889531 + g * 0.58662247 + b * 0.11448223
}

fn rgb2i(r: f64, g: f64, b: f64) -> f64 {
    r * 0.59597799 - g * 0.27417610 - b * 0.32180189
}

fn rgb2q(r: f64, g: f64, b: f64) -> f64 {
    r * 0.21147017 - g * 0.52261711 + b * 0.31114694
}

fn draw_pixel(out: &mut [u8], pos: usize, rgb: [u8; 3]) {
    out[pos..pos + 3].copy_from_slice(&rgb);
    out[pos + 3] = 255;
}

fn draw_gray_pixel(img: &[u8], pos: usize, out: &mut [u8]) {
    let luma = rgb2y(img[pos] as f64, img[pos + 1] as f64, img[pos + 2] as f64);
    let val = blend(luma, FADE_ALPHA * img[pos + 3] as f64 / 255.0);
    let v = val.round().clamp(0.0, 255.0) as u8;
    draw_pixel(out, pos, [v, v, v]);
}
