//! Pixel comparator: crop, diff, score and render the annotated composite.

use crate::bitmap::Bitmap;
use crate::pixelmatch::{PixelDiff, PixelMatch};
use crate::rendering;
use crate::{CompareConfig, Error, Result};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Per-pixel sensitivity used when the caller does not pick one.
pub const DEFAULT_THRESHOLD: f64 = 0.1;
/// Drift above this percentage is at least `Medium`.
pub const MEDIUM_SEVERITY_PERCENT: f64 = 1.0;
/// Drift above this percentage is `High`.
pub const HIGH_SEVERITY_PERCENT: f64 = 5.0;

/// Coarse triage bucket derived from the diff percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn from_diff_percent(diff_percent: f64) -> Self {
        if diff_percent > HIGH_SEVERITY_PERCENT {
            Severity::High
        } else if diff_percent > MEDIUM_SEVERITY_PERCENT {
            Severity::Medium
        } else {
            Severity::Low
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a pixel-level comparison.
#[derive(Debug, Clone)]
pub struct PixelDiffResult {
    /// Mismatched share of the compared area, 0-100
    pub diff_percent: f64,
    pub matched_pixels: u64,
    pub total_pixels: u64,
    /// Diff visualization, same size as the cropped inputs
    pub diff: Bitmap,
    /// Design | live | diff panels with labels
    pub composite: Option<Bitmap>,
    pub severity: Severity,
}

impl PixelDiffResult {
    pub fn mismatched_pixels(&self) -> u64 {
        self.total_pixels - self.matched_pixels
    }
}

/// Compare two bitmaps with the default perceptual diff and render the composite.
pub fn compare(design: &Bitmap, live: &Bitmap, threshold: f64) -> Result<PixelDiffResult> {
    let config = CompareConfig {
        threshold,
        ..Default::default()
    };
    compare_with(&PixelMatch::default(), design, live, &config)
}

/// Compare two bitmaps using the given diff algorithm.
///
/// Inputs of different sizes are cropped to their common top-left region.
pub fn compare_with(
    algorithm: &dyn PixelDiff,
    design: &Bitmap,
    live: &Bitmap,
    config: &CompareConfig,
) -> Result<PixelDiffResult> {
    config.validate()?;
    for bmp in [design, live] {
        if bmp.is_empty() {
            return Err(Error::EmptyBitmap {
                width: bmp.width(),
                height: bmp.height(),
            });
        }
    }

    let width = design.width().min(live.width());
    let height = design.height().min(live.height());

    let cropped;
    let (design, live) = if (design.width(), design.height()) == (live.width(), live.height()) {
        (design, live)
    } else {
        warn!(
            "Dimension mismatch: design {}x{}, live {}x{}; comparing common {}x{} region",
            design.width(),
            design.height(),
            live.width(),
            live.height(),
            width,
            height
        );
        cropped = (design.crop(width, height), live.crop(width, height));
        (&cropped.0, &cropped.1)
    };

    let output = algorithm.diff(design, live, config.threshold);

    let total_pixels = width as u64 * height as u64;
    let mismatched = output.mismatched.min(total_pixels);
    let matched_pixels = total_pixels - mismatched;
    let diff_percent = mismatched as f64 / total_pixels as f64 * 100.0;
    let severity = Severity::from_diff_percent(diff_percent);

    debug!(
        "Pixel diff: {} of {} pixels mismatched ({:.2}%, {})",
        mismatched, total_pixels, diff_percent, severity
    );

    let composite = if config.render_composite {
        Some(rendering::build_composite(
            design,
            live,
            &output.visualization,
            diff_percent,
        ))
    } else {
        None
    };

    Ok(PixelDiffResult {
        diff_percent,
        matched_pixels,
        total_pixels,
        diff: output.visualization,
        composite,
        severity,
    })
}
