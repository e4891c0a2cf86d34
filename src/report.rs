//! Drift report: runs both comparators side by side and merges their results.

use crate::bitmap::Bitmap;
use crate::specs::{compare_specs, DesignSpecs, LiveSpecs, SpecDiffResult};
use crate::visual::{self, PixelDiffResult, Severity};
use crate::pixelmatch::PixelMatch;
use crate::{CompareConfig, Result};
use log::info;
use serde::{Deserialize, Serialize};

/// Pixel comparison numbers as they appear in the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualSummary {
    pub diff_percent: f64,
    pub severity: Severity,
    pub matched_pixels: u64,
    pub total_pixels: u64,
    /// Base64 PNG of the composite, when requested
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub composite_png_base64: Option<String>,
}

impl From<&PixelDiffResult> for VisualSummary {
    fn from(res: &PixelDiffResult) -> Self {
        Self {
            diff_percent: res.diff_percent,
            severity: res.severity,
            matched_pixels: res.matched_pixels,
            total_pixels: res.total_pixels,
            composite_png_base64: None,
        }
    }
}

/// Merged, serializable drift report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriftReport {
    pub threshold: f64,
    pub visual: VisualSummary,
    pub specs: SpecDiffResult,
    /// Visual drift under `threshold * 100` percent and no spec drift.
    pub passed: bool,
}

impl DriftReport {
    pub fn new(visual: &PixelDiffResult, specs: SpecDiffResult, threshold: f64) -> Self {
        let passed = visual.diff_percent < threshold * 100.0 && !specs.has_drift;
        Self {
            threshold,
            visual: VisualSummary::from(visual),
            specs,
            passed,
        }
    }
}

/// Report plus the bitmaps a caller may want to persist.
#[derive(Debug, Clone)]
pub struct DriftOutcome {
    pub report: DriftReport,
    pub pixels: PixelDiffResult,
}

/// Run the pixel and spec comparisons concurrently and merge them.
///
/// Both comparisons are CPU-bound, so each runs on tokio's blocking pool.
pub async fn run_drift_check(
    design: Bitmap,
    live: Bitmap,
    design_specs: DesignSpecs,
    live_specs: LiveSpecs,
    config: CompareConfig,
) -> Result<DriftOutcome> {
    config.validate()?;
    let threshold = config.threshold;

    let pixel_task = tokio::task::spawn_blocking(move || {
        visual::compare_with(&PixelMatch::default(), &design, &live, &config)
    });
    let spec_task = tokio::task::spawn_blocking(move || compare_specs(&design_specs, &live_specs));

    let (pixels, specs) = futures::future::try_join(pixel_task, spec_task).await?;
    let (pixels, specs) = (pixels?, specs?);

    let report = DriftReport::new(&pixels, specs, threshold);
    info!(
        "Drift check: {:.2}% visual ({}), spec drift: {}, passed: {}",
        report.visual.diff_percent, report.visual.severity, report.specs.has_drift, report.passed
    );

    Ok(DriftOutcome { report, pixels })
}
